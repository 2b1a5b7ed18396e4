//! One-hop relationship resolution.
//!
//! # Responsibility
//! - Describe how `person2` relates to `person1` from `person1`'s record.
//!
//! # Invariants
//! - Resolution is total: failure is the "not found" relationship, never an error.
//! - Only `person1` needs a repository record; `person2` is compared by name.
//! - Precedence is father, mother, wife, son, daughter; first match wins.
//! - Only the person1 -> person2 direction is checked. Inverse links and
//!   multi-hop kinship (grandparent, sibling, cousin) are not computed.
//! - Empty fields never match.

use crate::model::member::{ChildKind, Member};
use crate::repo::member_repo::MemberRepository;
use log::debug;
use serde::Serialize;

/// Relationship text returned when no direct link exists.
pub const RELATIONSHIP_NOT_FOUND: &str = "Relationship not found";

/// Relationship between two named people.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Relationship {
    pub person1: String,
    pub person2: String,
    /// Human-readable description, e.g. `Ram is Lal's father`.
    pub relationship: String,
    /// Traversal path; empty when not found.
    pub path: Vec<String>,
}

impl Relationship {
    fn not_found(person1: &str, person2: &str) -> Self {
        Self {
            person1: person1.to_string(),
            person2: person2.to_string(),
            relationship: RELATIONSHIP_NOT_FOUND.to_string(),
            path: Vec::new(),
        }
    }

    fn described(person1: &str, person2: &str, relation: &str, path: [&str; 2]) -> Self {
        Self {
            person1: person1.to_string(),
            person2: person2.to_string(),
            relationship: format!("{person2} is {person1}'s {relation}"),
            path: path.iter().map(|name| name.to_string()).collect(),
        }
    }

    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Resolves the direct relationship of `person2` to `person1`.
pub fn resolve_relationship<R: MemberRepository + ?Sized>(
    repo: &R,
    person1: &str,
    person2: &str,
) -> Relationship {
    let relationship = match repo.find_by_name(person1) {
        Some(member) => describe(member, person1, person2),
        None => Relationship::not_found(person1, person2),
    };

    debug!(
        "event=relation_resolve module=relation status=ok found={}",
        relationship.is_found()
    );
    relationship
}

fn describe(member: &Member, person1: &str, person2: &str) -> Relationship {
    if person2.is_empty() {
        return Relationship::not_found(person1, person2);
    }

    if member.father == person2 {
        return Relationship::described(person1, person2, "father", [person2, person1]);
    }
    if member.mother == person2 {
        return Relationship::described(person1, person2, "mother", [person2, person1]);
    }
    if member.wife == person2 {
        return Relationship::described(person1, person2, "wife", [person1, person2]);
    }

    let child_kind = if member.sons.iter().any(|son| son.name == person2) {
        Some(ChildKind::Son)
    } else if member.daughters.iter().any(|daughter| daughter.name == person2) {
        Some(ChildKind::Daughter)
    } else {
        None
    };

    match child_kind {
        Some(kind) => Relationship::described(person1, person2, kind.as_str(), [person1, person2]),
        None => Relationship::not_found(person1, person2),
    }
}

#[cfg(test)]
mod tests {
    use super::{resolve_relationship, RELATIONSHIP_NOT_FOUND};
    use crate::model::member::Member;
    use crate::repo::member_repo::InMemoryMemberRepository;

    #[test]
    fn empty_person2_does_not_match_blank_fields() {
        let repo = InMemoryMemberRepository::new(vec![Member::new("Ram")]);
        let relationship = resolve_relationship(&repo, "Ram", "");
        assert_eq!(relationship.relationship, RELATIONSHIP_NOT_FOUND);
        assert!(relationship.path.is_empty());
    }
}
