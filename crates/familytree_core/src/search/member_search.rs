//! Free-text member search.
//!
//! # Responsibility
//! - Match a query against names, relations and villages of every member.
//! - Return typed hits in discovery order.
//!
//! # Invariants
//! - Blank queries return no hits.
//! - Matching is case-insensitive substring containment.
//! - Hits follow repository order, then a fixed per-member field order.
//! - No ranking and no deduplication: one member may yield several hits.

use crate::model::member::Member;
use crate::repo::member_repo::MemberRepository;
use log::debug;
use serde::Serialize;

/// Minimum query length for relation-picker suggestions.
pub const SUGGEST_MIN_QUERY_CHARS: usize = 2;

/// Which kind of field produced a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Name,
    Village,
    Relation,
}

/// Single search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub member: Member,
    pub match_type: MatchType,
    /// Display text, e.g. `Father: Shyam` or `Mosal: Pune`.
    pub match_text: String,
}

/// Searches all members for fields containing `query`.
pub fn search_members<R: MemberRepository + ?Sized>(repo: &R, query: &str) -> Vec<SearchResult> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    let mut results = Vec::new();
    for member in repo.members() {
        collect_member_hits(member, &needle, &mut results);
    }

    debug!(
        "event=member_search module=search status=ok query_chars={} hits={}",
        query.chars().count(),
        results.len()
    );
    results
}

/// Name-only lookup used by the relation picker.
///
/// Queries shorter than [`SUGGEST_MIN_QUERY_CHARS`] return nothing.
pub fn suggest_members<'a, R: MemberRepository + ?Sized>(
    repo: &'a R,
    query: &str,
) -> Vec<&'a Member> {
    if query.chars().count() < SUGGEST_MIN_QUERY_CHARS {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    repo.members()
        .iter()
        .filter(|member| contains_ignore_case(&member.name, &needle))
        .collect()
}

fn collect_member_hits(member: &Member, needle: &str, out: &mut Vec<SearchResult>) {
    let mut push = |match_type: MatchType, match_text: String| {
        out.push(SearchResult {
            member: member.clone(),
            match_type,
            match_text,
        });
    };

    if contains_ignore_case(&member.name, needle) {
        push(MatchType::Name, member.name.clone());
    }
    if contains_ignore_case(&member.father, needle) {
        push(MatchType::Relation, format!("Father: {}", member.father));
    }
    if contains_ignore_case(&member.mother, needle) {
        push(MatchType::Relation, format!("Mother: {}", member.mother));
    }
    if !member.wife.is_empty() && contains_ignore_case(&member.wife, needle) {
        push(MatchType::Relation, format!("Wife: {}", member.wife));
    }
    if contains_ignore_case(&member.mosal.gam, needle) {
        push(MatchType::Village, format!("Mosal: {}", member.mosal.gam));
    }
    if contains_ignore_case(&member.sasru.gam, needle) {
        push(MatchType::Village, format!("Sasru: {}", member.sasru.gam));
    }
    for (_, child) in member.children() {
        if contains_ignore_case(&child.name, needle) {
            push(MatchType::Relation, format!("Child: {}", child.name));
        }
    }
}

// `needle` is already lowercased.
fn contains_ignore_case(field: &str, needle: &str) -> bool {
    field.to_lowercase().contains(needle)
}
