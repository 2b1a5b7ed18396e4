//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose family browsing use-cases to Dart via FRB.
//! - Own the process-wide loaded dataset and the tree screen's forest.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - A dataset reload replaces the repository and forest together.
//! - Before any dataset is loaded, reads behave as an empty family.

use familytree_core::{
    core_version as core_version_inner, init_logging as init_logging_inner,
    load_repository_from_path, ping as ping_inner, toggle_expanded, ChildDraft, ChildRef,
    FamilyService, InMemoryMemberRepository, MatchType, Member, MemberDraft, MemberRepository,
    SearchResult, TreeNode, VillageInfo,
};
use log::{info, warn};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, OnceLock, RwLock};

const DATA_PATH_ENV: &str = "FAMILYTREE_DATA_PATH";

static LOADED_FAMILY: RwLock<Option<Arc<LoadedFamily>>> = RwLock::new(None);
// Env dataset is attempted at most once per process.
static ENV_ACTIVATION: OnceLock<bool> = OnceLock::new();

struct LoadedFamily {
    service: FamilyService<InMemoryMemberRepository>,
    // Built on first tree-screen request, then toggled in place.
    forest: Mutex<Option<Vec<TreeNode>>>,
}

impl LoadedFamily {
    fn new(repo: InMemoryMemberRepository) -> Self {
        Self {
            service: FamilyService::new(repo),
            forest: Mutex::new(None),
        }
    }
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Idempotent for the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Loads (or reloads) the family dataset from a JSON file.
///
/// # FFI contract
/// - Replaces any previously loaded dataset and discards its forest.
/// - Keeps the previous dataset when loading fails.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn load_family_dataset(path: String) -> String {
    match load_from(PathBuf::from(path.trim())) {
        Ok(count) => {
            info!("event=dataset_activate module=ffi status=ok members={count}");
            String::new()
        }
        Err(err) => err,
    }
}

/// Member card data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberView {
    pub name: String,
    pub father: String,
    pub mother: String,
    pub wife: String,
    pub sons: Vec<ChildView>,
    pub daughters: Vec<ChildView>,
    pub mosal: VillageView,
    pub sasru: VillageView,
}

/// Child row on a member card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildView {
    pub name: String,
    pub village: Option<String>,
    /// Whether the child has its own profile.
    pub has_record: bool,
}

/// Village block on a member card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VillageView {
    pub gam: String,
    pub sakh: String,
    pub extra: String,
}

/// Search item returned by [`search_family`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilySearchItem {
    pub member_name: String,
    /// `name|village|relation`.
    pub match_type: String,
    pub match_text: String,
}

/// Search response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilySearchResponse {
    pub items: Vec<FamilySearchItem>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Tree screen node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNodeView {
    pub name: String,
    pub children: Vec<TreeNodeView>,
    pub is_expanded: bool,
    pub level: u32,
    /// Whether the node opens a profile.
    pub has_record: bool,
    pub village: Option<String>,
}

/// Relation finder response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipResponse {
    /// `false` only when the request itself was invalid.
    pub ok: bool,
    pub relationship: String,
    pub path: Vec<String>,
    pub message: String,
}

/// Member listed on the village screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VillageMemberView {
    pub member_name: String,
    /// `Mosal (Maternal)|Sasru (Paternal)|Daughter Village`.
    pub link_label: String,
}

/// Home-screen counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilyStatsView {
    pub total_members: u32,
    pub parents: u32,
    pub with_sons: u32,
}

/// Looks up one member by exact name.
#[flutter_rust_bridge::frb(sync)]
pub fn find_member(name: String) -> Option<MemberView> {
    let family = current_family()?;
    let member = family.service.find_by_name(&name)?;
    Some(to_member_view(member, |child| {
        family.service.find_by_name(child).is_some()
    }))
}

/// Free-text search over names, relations and villages.
#[flutter_rust_bridge::frb(sync)]
pub fn search_family(query: String) -> FamilySearchResponse {
    let Some(family) = current_family() else {
        return FamilySearchResponse {
            items: Vec::new(),
            message: "No family dataset loaded.".to_string(),
        };
    };

    let items = family
        .service
        .search(&query)
        .into_iter()
        .map(to_search_item)
        .collect::<Vec<_>>();
    let message = if items.is_empty() {
        "No results.".to_string()
    } else {
        format!("Found {} result(s).", items.len())
    };
    FamilySearchResponse { items, message }
}

/// Names for the relation picker (at least two query characters).
#[flutter_rust_bridge::frb(sync)]
pub fn suggest_members(query: String) -> Vec<String> {
    let Some(family) = current_family() else {
        return Vec::new();
    };
    let names = family
        .service
        .suggest(&query)
        .into_iter()
        .map(|member| member.name.clone())
        .collect();
    names
}

/// Returns the tree screen's forest, building it on first use.
#[flutter_rust_bridge::frb(sync)]
pub fn family_forest() -> Vec<TreeNodeView> {
    with_forest(|forest| forest.iter().map(to_tree_node_view).collect())
}

/// Toggles every node named `name` and returns the updated forest.
#[flutter_rust_bridge::frb(sync)]
pub fn toggle_forest_node(name: String) -> Vec<TreeNodeView> {
    with_forest(|forest| {
        *forest = toggle_expanded(forest.as_slice(), &name);
        forest.iter().map(to_tree_node_view).collect()
    })
}

/// Discards cached expansion state and returns a fresh forest.
#[flutter_rust_bridge::frb(sync)]
pub fn reset_family_forest() -> Vec<TreeNodeView> {
    with_forest(|forest| {
        forest.iter_mut().for_each(collapse);
        forest.iter().map(to_tree_node_view).collect()
    })
}

/// Finds how `person2` relates to `person1`.
#[flutter_rust_bridge::frb(sync)]
pub fn find_relationship(person1: String, person2: String) -> RelationshipResponse {
    let Some(family) = current_family() else {
        return RelationshipResponse {
            ok: false,
            relationship: String::new(),
            path: Vec::new(),
            message: "No family dataset loaded.".to_string(),
        };
    };

    match family
        .service
        .find_relation(person1.trim(), person2.trim())
    {
        Ok(relationship) => RelationshipResponse {
            ok: true,
            message: relationship.relationship.clone(),
            relationship: relationship.relationship,
            path: relationship.path,
        },
        Err(err) => RelationshipResponse {
            ok: false,
            relationship: String::new(),
            path: Vec::new(),
            message: err.to_string(),
        },
    }
}

/// Sorted list of villages referenced by the dataset.
#[flutter_rust_bridge::frb(sync)]
pub fn list_villages() -> Vec<String> {
    current_family()
        .map(|family| family.service.villages())
        .unwrap_or_default()
}

/// Members linked to one village.
#[flutter_rust_bridge::frb(sync)]
pub fn village_members(village: String) -> Vec<VillageMemberView> {
    let Some(family) = current_family() else {
        return Vec::new();
    };
    let members = family
        .service
        .village_members(&village)
        .into_iter()
        .map(|entry| VillageMemberView {
            member_name: entry.member.name.clone(),
            link_label: entry.link.label().to_string(),
        })
        .collect();
    members
}

/// Home-screen counters.
#[flutter_rust_bridge::frb(sync)]
pub fn family_stats() -> FamilyStatsView {
    let stats = current_family()
        .map(|family| family.service.stats())
        .unwrap_or_default();
    FamilyStatsView {
        total_members: saturating_u32(stats.total_members),
        parents: saturating_u32(stats.parents),
        with_sons: saturating_u32(stats.with_sons),
    }
}

/// Add-member form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewMemberInput {
    pub name: String,
    pub father: String,
    pub mother: String,
    pub wife: String,
    /// `(name, village)` rows; blank names are dropped.
    pub sons: Vec<NewChildInput>,
    pub daughters: Vec<NewChildInput>,
    pub mosal: VillageView,
    pub sasru: VillageView,
}

/// One child row of the add-member form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewChildInput {
    pub name: String,
    pub village: String,
}

/// Result of validating an add-member form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMemberResponse {
    pub ok: bool,
    /// Normalized record ready for the storage collaborator.
    pub member: Option<MemberView>,
    pub message: String,
}

/// Validates and normalizes an add-member form.
///
/// # FFI contract
/// - Does not persist anything; saving is the caller's storage concern.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn prepare_new_member(input: NewMemberInput) -> NewMemberResponse {
    let draft = MemberDraft {
        name: input.name,
        father: input.father,
        mother: input.mother,
        wife: input.wife,
        sons: input.sons.into_iter().map(to_child_draft).collect(),
        daughters: input.daughters.into_iter().map(to_child_draft).collect(),
        mosal: to_village_info(input.mosal),
        sasru: to_village_info(input.sasru),
    };

    match draft.into_member() {
        Ok(member) => {
            let family = current_family();
            let view = to_member_view(&member, |child| {
                family
                    .as_ref()
                    .is_some_and(|family| family.service.find_by_name(child).is_some())
            });
            NewMemberResponse {
                ok: true,
                member: Some(view),
                message: "Member ready to save.".to_string(),
            }
        }
        Err(err) => NewMemberResponse {
            ok: false,
            member: None,
            message: format!("prepare_new_member failed: {err}"),
        },
    }
}

fn load_from(path: PathBuf) -> Result<usize, String> {
    let repo = load_repository_from_path(&path)
        .map_err(|err| format!("load_family_dataset failed: {err}"))?;
    let count = repo.len();
    let mut slot = LOADED_FAMILY
        .write()
        .map_err(|_| "load_family_dataset failed: dataset lock poisoned".to_string())?;
    *slot = Some(Arc::new(LoadedFamily::new(repo)));
    Ok(count)
}

fn current_family() -> Option<Arc<LoadedFamily>> {
    if let Some(family) = LOADED_FAMILY.read().ok().and_then(|slot| slot.clone()) {
        return Some(family);
    }

    if !activate_env_dataset(&ENV_ACTIVATION, || std::env::var(DATA_PATH_ENV).ok()) {
        return None;
    }
    LOADED_FAMILY.read().ok().and_then(|slot| slot.clone())
}

fn activate_env_dataset(
    attempt: &OnceLock<bool>,
    resolve_path: impl FnOnce() -> Option<String>,
) -> bool {
    *attempt.get_or_init(|| {
        let Some(path) = resolve_path()
            .map(|raw| raw.trim().to_string())
            .filter(|path| !path.is_empty())
        else {
            return false;
        };
        match load_from(PathBuf::from(path)) {
            Ok(_) => true,
            Err(err) => {
                warn!("event=dataset_activate module=ffi status=error source=env error={err}");
                false
            }
        }
    })
}

fn with_forest(f: impl FnOnce(&mut Vec<TreeNode>) -> Vec<TreeNodeView>) -> Vec<TreeNodeView> {
    let Some(family) = current_family() else {
        return Vec::new();
    };
    let Ok(mut cached) = family.forest.lock() else {
        return Vec::new();
    };
    let forest = cached.get_or_insert_with(|| family.service.forest());
    f(forest)
}

fn collapse(node: &mut TreeNode) {
    node.is_expanded = false;
    node.children.iter_mut().for_each(collapse);
}

fn to_member_view(member: &Member, has_record: impl Fn(&str) -> bool) -> MemberView {
    let child_views = |children: &[ChildRef]| {
        children
            .iter()
            .map(|child| ChildView {
                name: child.name.clone(),
                village: child.village.clone(),
                has_record: has_record(&child.name),
            })
            .collect::<Vec<_>>()
    };

    MemberView {
        name: member.name.clone(),
        father: member.father.clone(),
        mother: member.mother.clone(),
        wife: member.wife.clone(),
        sons: child_views(&member.sons),
        daughters: child_views(&member.daughters),
        mosal: to_village_view(&member.mosal),
        sasru: to_village_view(&member.sasru),
    }
}

fn to_village_view(info: &VillageInfo) -> VillageView {
    VillageView {
        gam: info.gam.clone(),
        sakh: info.sakh.clone(),
        extra: info.extra.clone(),
    }
}

fn to_village_info(view: VillageView) -> VillageInfo {
    VillageInfo {
        gam: view.gam,
        sakh: view.sakh,
        extra: view.extra,
    }
}

fn to_child_draft(input: NewChildInput) -> ChildDraft {
    ChildDraft {
        name: input.name,
        village: input.village,
    }
}

fn to_search_item(hit: SearchResult) -> FamilySearchItem {
    FamilySearchItem {
        member_name: hit.member.name,
        match_type: match_type_label(hit.match_type).to_string(),
        match_text: hit.match_text,
    }
}

fn match_type_label(kind: MatchType) -> &'static str {
    match kind {
        MatchType::Name => "name",
        MatchType::Village => "village",
        MatchType::Relation => "relation",
    }
}

fn to_tree_node_view(node: &TreeNode) -> TreeNodeView {
    TreeNodeView {
        name: node.name.clone(),
        children: node.children.iter().map(to_tree_node_view).collect(),
        is_expanded: node.is_expanded,
        level: node.level,
        has_record: node.member.is_some(),
        village: node.village.clone(),
    }
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
