//! Core use-case services.
//!
//! # Responsibility
//! - Compose repository, search, forest and relation components into
//!   screen-level use-cases.
//! - Keep UI/FFI layers decoupled from component wiring.

pub mod family_service;
