use familytree_core::{
    build_forest, toggle_expanded, ChildRef, InMemoryMemberRepository, Member, TreeNode,
};

fn member(name: &str, sons: &[&str], daughters: &[(&str, &str)]) -> Member {
    let mut member = Member::new(name);
    member.sons = sons.iter().map(|son| ChildRef::new(*son)).collect();
    member.daughters = daughters
        .iter()
        .map(|(daughter, village)| ChildRef::with_village(*daughter, *village))
        .collect();
    member
}

fn collect_names(nodes: &[TreeNode], out: &mut Vec<String>) {
    for node in nodes {
        out.push(node.name.clone());
        collect_names(&node.children, out);
    }
}

fn find<'a>(nodes: &'a [TreeNode], name: &str) -> Vec<&'a TreeNode> {
    let mut found = Vec::new();
    for node in nodes {
        if node.name == name {
            found.push(node);
        }
        found.extend(find(&node.children, name));
    }
    found
}

#[test]
fn scenario_builds_single_root_with_child_subtree() {
    let mut ram = member("Ram", &["Lal"], &[]);
    ram.father = "Shyam".to_string();
    let mut lal = Member::new("Lal");
    lal.father = "Ram".to_string();
    let repo = InMemoryMemberRepository::new(vec![ram, lal]);

    let forest = build_forest(&repo);
    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0].name, "Ram");
    assert_eq!(forest[0].level, 0);
    assert!(!forest[0].is_expanded);
    assert_eq!(forest[0].member.as_ref().unwrap().father, "Shyam");

    let lal_node = &forest[0].children[0];
    assert_eq!(lal_node.name, "Lal");
    assert_eq!(lal_node.level, 1);
    assert!(lal_node.member.is_some());
}

#[test]
fn unknown_children_become_leaves_and_only_daughters_keep_village() {
    let mut ram = member("Ram", &["Ghost"], &[("Meera", "Surat")]);
    ram.sons[0].village = Some("Nowhere".to_string());
    let repo = InMemoryMemberRepository::new(vec![ram]);

    let forest = build_forest(&repo);
    let children = &forest[0].children;
    assert_eq!(children.len(), 2);

    assert_eq!(children[0].name, "Ghost");
    assert!(children[0].member.is_none());
    assert_eq!(children[0].village, None);

    assert_eq!(children[1].name, "Meera");
    assert_eq!(children[1].village.as_deref(), Some("Surat"));
    assert_eq!(children[1].level, 1);
    assert!(children[1].children.is_empty());
}

#[test]
fn shared_child_is_subtree_under_first_parent_and_stub_under_second() {
    let first = member("First", &["Shared"], &[]);
    let second = member("Second", &["Shared"], &[]);
    let shared = member("Shared", &["Grandchild"], &[]);
    let repo = InMemoryMemberRepository::new(vec![first, second, shared]);

    let forest = build_forest(&repo);
    assert_eq!(
        forest.iter().map(|n| n.name.as_str()).collect::<Vec<_>>(),
        vec!["First", "Second"]
    );

    let under_first = &forest[0].children[0];
    assert!(under_first.member.is_some());
    assert_eq!(under_first.children[0].name, "Grandchild");

    let under_second = &forest[1].children[0];
    assert_eq!(under_second.name, "Shared");
    assert!(under_second.member.is_none());
    assert!(under_second.children.is_empty());
}

#[test]
fn roots_ignore_father_fields() {
    let mut orphan = Member::new("Orphan");
    orphan.father = "Listed Nowhere".to_string();
    let repo = InMemoryMemberRepository::new(vec![orphan]);

    let forest = build_forest(&repo);
    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0].name, "Orphan");
}

#[test]
fn every_member_appears_in_forest() {
    let repo = InMemoryMemberRepository::new(vec![
        member("A", &["B", "C"], &[]),
        member("B", &["D"], &[]),
        member("C", &[], &[("E", "Pune")]),
        member("D", &[], &[]),
        member("E", &[], &[]),
        member("Z", &[], &[]),
    ]);

    let forest = build_forest(&repo);
    let mut names = Vec::new();
    collect_names(&forest, &mut names);
    for expected in ["A", "B", "C", "D", "E", "Z"] {
        assert_eq!(
            names.iter().filter(|name| name.as_str() == expected).count(),
            1,
            "{expected} should appear exactly once"
        );
    }
}

#[test]
fn closed_child_cycle_without_outside_parent_has_no_root() {
    let repo = InMemoryMemberRepository::new(vec![
        member("A", &["B"], &[]),
        member("B", &["A"], &[]),
        member("Z", &[], &[]),
    ]);

    let forest = build_forest(&repo);
    let roots = forest.iter().map(|node| node.name.as_str()).collect::<Vec<_>>();
    assert_eq!(roots, vec!["Z"]);
    assert!(find(&forest, "A").is_empty());
    assert!(find(&forest, "B").is_empty());
}

#[test]
fn build_is_idempotent() {
    let repo = InMemoryMemberRepository::new(vec![
        member("A", &["B"], &[("C", "Pune")]),
        member("B", &[], &[]),
    ]);
    assert_eq!(build_forest(&repo), build_forest(&repo));
}

#[test]
fn toggle_flips_nested_nodes_and_round_trips() {
    let repo = InMemoryMemberRepository::new(vec![
        member("A", &["B"], &[]),
        member("B", &["C"], &[]),
        member("C", &[], &[]),
    ]);
    let forest = build_forest(&repo);

    let toggled = toggle_expanded(&forest, "C");
    assert!(find(&toggled, "C")[0].is_expanded);
    assert!(!find(&toggled, "A")[0].is_expanded);
    assert!(!find(&toggled, "B")[0].is_expanded);
    assert!(!find(&forest, "C")[0].is_expanded);

    let with_a = toggle_expanded(&toggled, "A");
    assert!(find(&with_a, "A")[0].is_expanded);
    assert!(find(&with_a, "C")[0].is_expanded);

    let restored = toggle_expanded(&toggle_expanded(&with_a, "C"), "A");
    assert_eq!(restored, forest);
}

#[test]
fn toggle_flips_every_node_sharing_the_name() {
    let repo = InMemoryMemberRepository::new(vec![
        member("First", &["Shared"], &[]),
        member("Second", &["Shared"], &[]),
        member("Shared", &[], &[]),
    ]);
    let toggled = toggle_expanded(&build_forest(&repo), "Shared");
    let shared = find(&toggled, "Shared");
    assert_eq!(shared.len(), 2);
    assert!(shared.iter().all(|node| node.is_expanded));
}

#[test]
fn forest_serializes_with_camel_case_fields() {
    let repo = InMemoryMemberRepository::new(vec![member("A", &[], &[("B", "Pune")])]);
    let json = serde_json::to_value(build_forest(&repo)).unwrap();
    assert_eq!(json[0]["isExpanded"], false);
    assert_eq!(json[0]["children"][0]["village"], "Pune");
    assert!(json[0]["children"][0].get("member").is_none());
}
