//! Member repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Hold the loaded member records for the lifetime of one dataset.
//! - Provide exact-name lookup for every read component.
//!
//! # Invariants
//! - The repository is never mutated after construction.
//! - Lookup is exact and case-sensitive; the first record wins on duplicates.
//! - Iteration order is load order.

use crate::model::member::Member;
use std::collections::HashMap;

/// Read-only access to family member records.
pub trait MemberRepository {
    /// Returns all members in load order.
    fn members(&self) -> &[Member];

    /// Finds one member by exact name.
    ///
    /// Returns `None` when no member carries this name.
    fn find_by_name(&self, name: &str) -> Option<&Member>;

    /// Number of loaded members.
    fn len(&self) -> usize {
        self.members().len()
    }

    fn is_empty(&self) -> bool {
        self.members().is_empty()
    }
}

/// Vector-backed repository with a name index.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMemberRepository {
    members: Vec<Member>,
    by_name: HashMap<String, usize>,
}

impl InMemoryMemberRepository {
    /// Builds a repository from already-validated members.
    pub fn new(members: Vec<Member>) -> Self {
        let mut by_name = HashMap::with_capacity(members.len());
        for (index, member) in members.iter().enumerate() {
            by_name.entry(member.name.clone()).or_insert(index);
        }
        Self { members, by_name }
    }
}

impl MemberRepository for InMemoryMemberRepository {
    fn members(&self) -> &[Member] {
        &self.members
    }

    fn find_by_name(&self, name: &str) -> Option<&Member> {
        self.by_name
            .get(name)
            .and_then(|index| self.members.get(*index))
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryMemberRepository, MemberRepository};
    use crate::model::member::Member;

    #[test]
    fn duplicate_names_resolve_to_first_record() {
        let mut first = Member::new("Ram");
        first.father = "Shyam".to_string();
        let mut second = Member::new("Ram");
        second.father = "Other".to_string();

        let repo = InMemoryMemberRepository::new(vec![first, second]);
        assert_eq!(repo.len(), 2);
        assert_eq!(repo.find_by_name("Ram").unwrap().father, "Shyam");
    }
}
