//! Repository layer for the family dataset.
//!
//! # Responsibility
//! - Define the read-only member access contract.
//! - Load the bundled JSON dataset and enforce its integrity rules.
//!
//! # Invariants
//! - Repositories are immutable once built; a reload builds a new one.
//! - Loader errors are semantic (`BlankName`, `DuplicateName`) in addition
//!   to IO/parse transport errors.

pub mod dataset;
pub mod member_repo;
