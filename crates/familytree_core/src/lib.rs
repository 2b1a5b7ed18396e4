//! Core domain logic for the family genealogy browser.
//! This crate owns the in-memory member index and every read use-case over it.

pub mod logging;
pub mod model;
pub mod relation;
pub mod repo;
pub mod search;
pub mod service;
pub mod tree;
pub mod village;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::draft::{ChildDraft, DraftError, MemberDraft};
pub use model::member::{ChildKind, ChildRef, Member, VillageInfo};
pub use relation::resolver::{resolve_relationship, Relationship, RELATIONSHIP_NOT_FOUND};
pub use repo::dataset::{
    load_members_from_path, load_members_from_str, load_repository_from_path, DatasetError,
    DatasetResult,
};
pub use repo::member_repo::{InMemoryMemberRepository, MemberRepository};
pub use search::member_search::{search_members, suggest_members, MatchType, SearchResult};
pub use service::family_service::{
    FamilyService, FamilyStats, MemberProfile, ProfileChild, RelationRequestError,
};
pub use tree::forest::{build_forest, toggle_expanded, TreeNode};
pub use village::directory::{all_villages, members_from_village, VillageLink, VillageMember};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
