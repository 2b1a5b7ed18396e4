//! Relationship finder.

pub mod resolver;
