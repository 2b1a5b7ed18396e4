//! Family member domain model.
//!
//! # Responsibility
//! - Define the canonical member record loaded from the bundled dataset.
//! - Keep the JSON wire shape identical to the dataset document.
//!
//! # Invariants
//! - `name` is the primary key; no numeric id exists.
//! - `father`, `mother`, `wife` and child names are free-text labels that
//!   may or may not resolve to another member.

use serde::{Deserialize, Serialize};

/// Village details attached to a member (`mosal` or `sasru`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VillageInfo {
    /// Village name.
    pub gam: String,
    /// Sub-clan or lineage identifier within the village.
    pub sakh: String,
    /// Free-form notes.
    pub extra: String,
}

impl VillageInfo {
    pub fn new(gam: impl Into<String>) -> Self {
        Self {
            gam: gam.into(),
            ..Self::default()
        }
    }
}

/// Reference from a parent record to one child.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildRef {
    pub name: String,
    /// Married-into village, recorded for daughters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub village: Option<String>,
}

impl ChildRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            village: None,
        }
    }

    pub fn with_village(name: impl Into<String>, village: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            village: Some(village.into()),
        }
    }
}

/// Which child list a [`ChildRef`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChildKind {
    Son,
    Daughter,
}

impl ChildKind {
    /// Relation word used in relationship descriptions.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Son => "son",
            Self::Daughter => "daughter",
        }
    }
}

/// One family member record.
///
/// Every field except `name` defaults to empty when absent from the source
/// document, so partially filled records still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    #[serde(default)]
    pub father: String,
    #[serde(default)]
    pub mother: String,
    #[serde(default)]
    pub wife: String,
    #[serde(default)]
    pub sons: Vec<ChildRef>,
    #[serde(default)]
    pub daughters: Vec<ChildRef>,
    /// Maternal-side village.
    #[serde(default)]
    pub mosal: VillageInfo,
    /// Paternal-side village.
    #[serde(default)]
    pub sasru: VillageInfo,
}

impl Member {
    /// Creates a member with only a name; every other field is empty.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Iterates sons then daughters, tagged with their kind.
    pub fn children(&self) -> impl Iterator<Item = (ChildKind, &ChildRef)> {
        self.sons
            .iter()
            .map(|child| (ChildKind::Son, child))
            .chain(self.daughters.iter().map(|child| (ChildKind::Daughter, child)))
    }

    /// Returns whether `name` appears in this member's sons or daughters.
    pub fn has_child(&self, name: &str) -> bool {
        self.children().any(|(_, child)| child.name == name)
    }

    pub fn has_children(&self) -> bool {
        !self.sons.is_empty() || !self.daughters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{ChildKind, ChildRef, Member};

    #[test]
    fn children_yields_sons_before_daughters() {
        let mut member = Member::new("Ram");
        member.daughters.push(ChildRef::with_village("Meera", "Surat"));
        member.sons.push(ChildRef::new("Lal"));

        let kinds = member
            .children()
            .map(|(kind, child)| (kind, child.name.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(
            kinds,
            vec![(ChildKind::Son, "Lal"), (ChildKind::Daughter, "Meera")]
        );
        assert!(member.has_child("Meera"));
        assert!(!member.has_child("meera"));
    }
}
