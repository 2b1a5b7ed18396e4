//! Search entry points.
//!
//! # Responsibility
//! - Expose free-text search and relation-picker suggestions.
//! - Keep result shaping inside core.

pub mod member_search;
