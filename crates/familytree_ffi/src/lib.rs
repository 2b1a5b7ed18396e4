//! Flutter bridge for the family genealogy core.

pub mod api;
