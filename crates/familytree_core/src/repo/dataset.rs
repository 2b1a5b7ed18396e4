//! Bundled dataset loading.
//!
//! # Responsibility
//! - Parse the JSON member document into domain records.
//! - Reject data-integrity violations before members reach a repository.
//!
//! # Invariants
//! - Every loaded member has a non-blank, unique name.
//! - Dangling father/mother/wife/child references are accepted as-is.
//! - Log lines carry counts and timings only, never member names.

use crate::model::member::Member;
use crate::repo::member_repo::InMemoryMemberRepository;
use log::{error, info};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::time::Instant;

pub type DatasetResult<T> = Result<T, DatasetError>;

/// Errors raised while loading a member dataset.
#[derive(Debug)]
pub enum DatasetError {
    /// Dataset file cannot be read.
    Io(std::io::Error),
    /// Document is not a JSON array of member records.
    Parse(serde_json::Error),
    /// Record at `index` has a blank name.
    BlankName { index: usize },
    /// Two records share the same name.
    DuplicateName(String),
}

impl Display for DatasetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read dataset: {err}"),
            Self::Parse(err) => write!(f, "invalid dataset document: {err}"),
            Self::BlankName { index } => write!(f, "member at index {index} has a blank name"),
            Self::DuplicateName(name) => write!(f, "duplicate member name: {name}"),
        }
    }
}

impl Error for DatasetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::BlankName { .. } => None,
            Self::DuplicateName(_) => None,
        }
    }
}

impl From<std::io::Error> for DatasetError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Parses and validates a JSON array of members.
pub fn load_members_from_str(json: &str) -> DatasetResult<Vec<Member>> {
    let started_at = Instant::now();
    let members = match serde_json::from_str::<Vec<Member>>(json) {
        Ok(members) => members,
        Err(err) => {
            error!(
                "event=dataset_load module=repo status=error duration_ms={} error_code=parse_failed",
                started_at.elapsed().as_millis()
            );
            return Err(err.into());
        }
    };

    if let Err(err) = validate_members(&members) {
        error!(
            "event=dataset_load module=repo status=error duration_ms={} error_code=integrity_failed",
            started_at.elapsed().as_millis()
        );
        return Err(err);
    }

    info!(
        "event=dataset_load module=repo status=ok members={} duration_ms={}",
        members.len(),
        started_at.elapsed().as_millis()
    );
    Ok(members)
}

/// Reads a dataset file and parses it with [`load_members_from_str`].
pub fn load_members_from_path(path: impl AsRef<Path>) -> DatasetResult<Vec<Member>> {
    let raw = std::fs::read_to_string(path.as_ref()).map_err(|err| {
        error!("event=dataset_read module=repo status=error error_code=io_failed");
        DatasetError::Io(err)
    })?;
    load_members_from_str(&raw)
}

/// Loads a dataset file straight into a repository.
pub fn load_repository_from_path(
    path: impl AsRef<Path>,
) -> DatasetResult<InMemoryMemberRepository> {
    load_members_from_path(path).map(InMemoryMemberRepository::new)
}

fn validate_members(members: &[Member]) -> DatasetResult<()> {
    let mut seen = HashSet::with_capacity(members.len());
    for (index, member) in members.iter().enumerate() {
        if member.name.trim().is_empty() {
            return Err(DatasetError::BlankName { index });
        }
        if !seen.insert(member.name.as_str()) {
            return Err(DatasetError::DuplicateName(member.name.clone()));
        }
    }
    Ok(())
}
