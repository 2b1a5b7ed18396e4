//! Family domain model.
//!
//! # Responsibility
//! - Define the member record shared by search, forest and relation views.
//! - Validate user-entered drafts before they leave the core.
//!
//! # Invariants
//! - Member identity is the exact `name` string.
//! - Name references to other members are never validated as foreign keys.

pub mod draft;
pub mod member;
