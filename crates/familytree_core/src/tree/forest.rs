//! Family forest construction and expand/collapse state.
//!
//! # Responsibility
//! - Derive one tree per root member from the flat repository.
//! - Flip expansion state without mutating the caller's forest.
//!
//! # Invariants
//! - A member is a root iff no member lists it as a son or daughter.
//! - Each repository member is expanded at most once per build; later
//!   references to an already expanded member become leaf stubs. A child
//!   shared by two parents is therefore a full subtree under the first
//!   parent reached and a stub under the others.
//! - Members that only list each other as children (a closed child cycle
//!   with no outside parent) have no root and are absent from the forest.
//! - Every node starts collapsed; `level` is depth from its root.

use crate::model::member::{ChildKind, Member};
use crate::repo::member_repo::MemberRepository;
use log::debug;
use serde::Serialize;
use std::collections::HashSet;

/// One node of the family forest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    pub name: String,
    pub children: Vec<TreeNode>,
    pub is_expanded: bool,
    pub level: u32,
    /// Present only when the node was expanded from a repository record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member: Option<Member>,
    /// Married-into village for daughter stubs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub village: Option<String>,
}

impl TreeNode {
    fn leaf(name: &str, level: u32, village: Option<String>) -> Self {
        Self {
            name: name.to_string(),
            children: Vec::new(),
            is_expanded: false,
            level,
            member: None,
            village,
        }
    }

    /// Counts this node and all its descendants.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::node_count).sum::<usize>()
    }
}

/// Builds the forest of all root members in repository order.
pub fn build_forest<R: MemberRepository + ?Sized>(repo: &R) -> Vec<TreeNode> {
    let child_names = repo
        .members()
        .iter()
        .flat_map(|member| member.children().map(|(_, child)| child.name.as_str()))
        .collect::<HashSet<_>>();

    let mut processed = HashSet::new();
    let mut forest = Vec::new();
    for member in repo.members() {
        if child_names.contains(member.name.as_str()) {
            continue;
        }
        if processed.contains(member.name.as_str()) {
            continue;
        }
        forest.push(expand_member(repo, member, 0, &mut processed));
    }

    debug!(
        "event=forest_build module=tree status=ok roots={} nodes={}",
        forest.len(),
        forest.iter().map(TreeNode::node_count).sum::<usize>()
    );
    forest
}

fn expand_member<'a, R: MemberRepository + ?Sized>(
    repo: &'a R,
    member: &'a Member,
    level: u32,
    processed: &mut HashSet<&'a str>,
) -> TreeNode {
    processed.insert(member.name.as_str());

    let mut children = Vec::with_capacity(member.sons.len() + member.daughters.len());
    for (kind, child) in member.children() {
        let node = match repo.find_by_name(&child.name) {
            Some(child_member) if !processed.contains(child.name.as_str()) => {
                expand_member(repo, child_member, level + 1, processed)
            }
            _ => {
                let village = match kind {
                    ChildKind::Daughter => child.village.clone(),
                    ChildKind::Son => None,
                };
                TreeNode::leaf(&child.name, level + 1, village)
            }
        };
        children.push(node);
    }

    TreeNode {
        name: member.name.clone(),
        children,
        is_expanded: false,
        level,
        member: Some(member.clone()),
        village: None,
    }
}

/// Returns a new forest with every node named `name` toggled.
///
/// The whole forest is searched, at any depth; all other state is kept.
pub fn toggle_expanded(forest: &[TreeNode], name: &str) -> Vec<TreeNode> {
    forest.iter().map(|node| toggle_node(node, name)).collect()
}

fn toggle_node(node: &TreeNode, name: &str) -> TreeNode {
    TreeNode {
        name: node.name.clone(),
        children: toggle_expanded(&node.children, name),
        is_expanded: if node.name == name {
            !node.is_expanded
        } else {
            node.is_expanded
        },
        level: node.level,
        member: node.member.clone(),
        village: node.village.clone(),
    }
}
