//! Add-member draft validation.
//!
//! # Responsibility
//! - Turn a user-entered draft into a storable [`Member`].
//!
//! # Invariants
//! - A draft without a non-blank name never produces a member.
//! - Persisting the produced member belongs to the storage collaborator.

use crate::model::member::{ChildRef, Member, VillageInfo};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from draft validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    /// Name is blank after trim.
    NameRequired,
}

impl Display for DraftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameRequired => write!(f, "name is required"),
        }
    }
}

impl Error for DraftError {}

/// One child row as entered in the add-member form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChildDraft {
    pub name: String,
    pub village: String,
}

/// Member record as entered in the add-member form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberDraft {
    pub name: String,
    pub father: String,
    pub mother: String,
    pub wife: String,
    pub sons: Vec<ChildDraft>,
    pub daughters: Vec<ChildDraft>,
    pub mosal: VillageInfo,
    pub sasru: VillageInfo,
}

impl MemberDraft {
    /// Validates the draft and converts it into a member.
    ///
    /// Text fields are trimmed; child rows with a blank name are dropped and
    /// blank child villages are recorded as absent.
    pub fn into_member(self) -> Result<Member, DraftError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(DraftError::NameRequired);
        }

        Ok(Member {
            name,
            father: self.father.trim().to_string(),
            mother: self.mother.trim().to_string(),
            wife: self.wife.trim().to_string(),
            sons: normalize_children(self.sons),
            daughters: normalize_children(self.daughters),
            mosal: normalize_village(self.mosal),
            sasru: normalize_village(self.sasru),
        })
    }
}

fn normalize_children(rows: Vec<ChildDraft>) -> Vec<ChildRef> {
    rows.into_iter()
        .filter_map(|row| {
            let name = row.name.trim();
            if name.is_empty() {
                return None;
            }
            let village = row.village.trim();
            Some(ChildRef {
                name: name.to_string(),
                village: (!village.is_empty()).then(|| village.to_string()),
            })
        })
        .collect()
}

fn normalize_village(info: VillageInfo) -> VillageInfo {
    VillageInfo {
        gam: info.gam.trim().to_string(),
        sakh: info.sakh.trim().to_string(),
        extra: info.extra.trim().to_string(),
    }
}
