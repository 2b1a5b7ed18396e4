//! Village directory derived from member records.
//!
//! # Invariants
//! - Village list is distinct, non-empty and sorted ascending.
//! - A member is listed under a village at most once, tagged with the first
//!   matching link in order mosal, sasru, daughter village.

use crate::model::member::Member;
use crate::repo::member_repo::MemberRepository;
use serde::Serialize;
use std::collections::BTreeSet;

/// How a member is connected to a village.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VillageLink {
    Mosal,
    Sasru,
    DaughterVillage,
}

impl VillageLink {
    /// Display label for the village screen.
    pub fn label(self) -> &'static str {
        match self {
            Self::Mosal => "Mosal (Maternal)",
            Self::Sasru => "Sasru (Paternal)",
            Self::DaughterVillage => "Daughter Village",
        }
    }
}

/// Member listed under one village.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VillageMember<'a> {
    pub member: &'a Member,
    pub link: VillageLink,
}

/// Returns every village named by any member, sorted.
pub fn all_villages<R: MemberRepository + ?Sized>(repo: &R) -> Vec<String> {
    let mut villages = BTreeSet::new();
    for member in repo.members() {
        if !member.mosal.gam.is_empty() {
            villages.insert(member.mosal.gam.as_str());
        }
        if !member.sasru.gam.is_empty() {
            villages.insert(member.sasru.gam.as_str());
        }
        for daughter in &member.daughters {
            if let Some(village) = daughter.village.as_deref().filter(|v| !v.is_empty()) {
                villages.insert(village);
            }
        }
    }
    villages.into_iter().map(str::to_string).collect()
}

/// Lists members connected to `village`, in repository order.
pub fn members_from_village<'a, R: MemberRepository + ?Sized>(
    repo: &'a R,
    village: &str,
) -> Vec<VillageMember<'a>> {
    if village.is_empty() {
        return Vec::new();
    }
    repo.members()
        .iter()
        .filter_map(|member| {
            village_link(member, village).map(|link| VillageMember { member, link })
        })
        .collect()
}

fn village_link(member: &Member, village: &str) -> Option<VillageLink> {
    if member.mosal.gam == village {
        Some(VillageLink::Mosal)
    } else if member.sasru.gam == village {
        Some(VillageLink::Sasru)
    } else if member
        .daughters
        .iter()
        .any(|daughter| daughter.village.as_deref() == Some(village))
    {
        Some(VillageLink::DaughterVillage)
    } else {
        None
    }
}
