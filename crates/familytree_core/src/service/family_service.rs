//! Family browsing use-case service.
//!
//! # Responsibility
//! - Own one member repository and expose every read use-case over it.
//! - Validate relation-finder requests above the total resolver.
//! - Derive home-screen statistics and profile views.
//!
//! # Invariants
//! - The service never mutates its repository.
//! - Derived structures (forest, stats) are rebuilt per call; callers cache.

use crate::model::member::{ChildKind, Member};
use crate::relation::resolver::{resolve_relationship, Relationship};
use crate::repo::member_repo::MemberRepository;
use crate::search::member_search::{search_members, suggest_members, SearchResult};
use crate::tree::forest::{build_forest, TreeNode};
use crate::village::directory::{all_villages, members_from_village, VillageMember};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from relation-finder request validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelationRequestError {
    /// One or both people were not selected.
    MissingSelection,
    /// Both selections name the same person.
    SamePerson(String),
}

impl Display for RelationRequestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSelection => {
                write!(f, "select both people to find their relationship")
            }
            Self::SamePerson(name) => write!(f, "select two different people, got `{name}` twice"),
        }
    }
}

impl Error for RelationRequestError {}

/// Home-screen family statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FamilyStats {
    pub total_members: usize,
    /// Members with at least one son or daughter.
    pub parents: usize,
    /// Members with at least one son.
    pub with_sons: usize,
}

/// Child entry on a profile screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileChild {
    pub name: String,
    pub kind: ChildKind,
    pub village: Option<String>,
    /// Whether the child has its own member record to navigate to.
    pub has_record: bool,
}

/// Profile view of one member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberProfile {
    pub member: Member,
    pub children: Vec<ProfileChild>,
}

/// Family read service facade.
pub struct FamilyService<R: MemberRepository> {
    repo: R,
}

impl<R: MemberRepository> FamilyService<R> {
    /// Creates service from repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Finds one member by exact name.
    pub fn find_by_name(&self, name: &str) -> Option<&Member> {
        self.repo.find_by_name(name)
    }

    /// Free-text search over names, relations and villages.
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        search_members(&self.repo, query)
    }

    /// Relation-picker suggestions by name.
    pub fn suggest(&self, query: &str) -> Vec<&Member> {
        suggest_members(&self.repo, query)
    }

    /// Builds a fresh forest for the tree screen.
    pub fn forest(&self) -> Vec<TreeNode> {
        build_forest(&self.repo)
    }

    /// Resolves the relationship without request validation.
    pub fn resolve(&self, person1: &str, person2: &str) -> Relationship {
        resolve_relationship(&self.repo, person1, person2)
    }

    /// Validates a relation-finder request and resolves it.
    ///
    /// # Errors
    /// - `MissingSelection` when either name is blank.
    /// - `SamePerson` when both names are equal.
    pub fn find_relation(
        &self,
        person1: &str,
        person2: &str,
    ) -> Result<Relationship, RelationRequestError> {
        if person1.trim().is_empty() || person2.trim().is_empty() {
            return Err(RelationRequestError::MissingSelection);
        }
        if person1 == person2 {
            return Err(RelationRequestError::SamePerson(person1.to_string()));
        }
        Ok(self.resolve(person1, person2))
    }

    pub fn villages(&self) -> Vec<String> {
        all_villages(&self.repo)
    }

    pub fn village_members(&self, village: &str) -> Vec<VillageMember<'_>> {
        members_from_village(&self.repo, village)
    }

    pub fn stats(&self) -> FamilyStats {
        let members = self.repo.members();
        FamilyStats {
            total_members: members.len(),
            parents: members.iter().filter(|m| m.has_children()).count(),
            with_sons: members.iter().filter(|m| !m.sons.is_empty()).count(),
        }
    }

    /// Builds the profile view, or `None` for an unknown name.
    pub fn profile(&self, name: &str) -> Option<MemberProfile> {
        let member = self.repo.find_by_name(name)?;
        let children = member
            .children()
            .map(|(kind, child)| ProfileChild {
                name: child.name.clone(),
                kind,
                village: child.village.clone(),
                has_record: self.repo.find_by_name(&child.name).is_some(),
            })
            .collect();
        Some(MemberProfile {
            member: member.clone(),
            children,
        })
    }
}
