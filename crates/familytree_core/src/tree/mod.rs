//! Family tree view model.
//!
//! # Responsibility
//! - Build the rooted forest rendered by the tree screen.
//! - Keep expansion toggles copy-on-write.

pub mod forest;
