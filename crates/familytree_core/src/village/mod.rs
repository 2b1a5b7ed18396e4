//! Village directory entry points.
//!
//! # Responsibility
//! - List villages referenced by the dataset.
//! - Group members by the village they are linked to.

pub mod directory;
