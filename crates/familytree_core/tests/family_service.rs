use familytree_core::{
    ChildKind, ChildRef, FamilyService, InMemoryMemberRepository, Member, RelationRequestError,
    VillageInfo, VillageLink,
};

fn setup() -> FamilyService<InMemoryMemberRepository> {
    let mut ram = Member::new("Ram");
    ram.father = "Shyam".to_string();
    ram.mosal = VillageInfo::new("Pune");
    ram.sasru = VillageInfo::new("Delhi");
    ram.sons.push(ChildRef::new("Lal"));
    ram.daughters.push(ChildRef::with_village("Meera", "Surat"));

    let mut lal = Member::new("Lal");
    lal.father = "Ram".to_string();
    lal.sons.push(ChildRef::new("Mohan"));
    lal.sasru = VillageInfo::new("Pune");

    let mut asha = Member::new("Asha");
    asha.daughters.push(ChildRef::with_village("Nita", "Delhi"));

    FamilyService::new(InMemoryMemberRepository::new(vec![ram, lal, asha]))
}

#[test]
fn find_by_name_is_exact() {
    let service = setup();
    assert_eq!(service.find_by_name("Ram").unwrap().father, "Shyam");
    assert!(service.find_by_name("ram").is_none());
    assert!(service.find_by_name("Nobody").is_none());
}

#[test]
fn find_relation_validates_selection() {
    let service = setup();
    assert_eq!(
        service.find_relation("Ram", "  ").unwrap_err(),
        RelationRequestError::MissingSelection
    );
    assert_eq!(
        service.find_relation("Ram", "Ram").unwrap_err(),
        RelationRequestError::SamePerson("Ram".to_string())
    );

    let relationship = service.find_relation("Lal", "Ram").unwrap();
    assert_eq!(relationship.relationship, "Ram is Lal's father");
}

#[test]
fn stats_count_parents_and_sons() {
    let stats = setup().stats();
    assert_eq!(stats.total_members, 3);
    assert_eq!(stats.parents, 3);
    assert_eq!(stats.with_sons, 2);
}

#[test]
fn profile_marks_navigable_children() {
    let service = setup();
    let profile = service.profile("Ram").unwrap();
    assert_eq!(profile.member.name, "Ram");
    assert_eq!(profile.children.len(), 2);

    assert_eq!(profile.children[0].name, "Lal");
    assert_eq!(profile.children[0].kind, ChildKind::Son);
    assert!(profile.children[0].has_record);

    assert_eq!(profile.children[1].name, "Meera");
    assert_eq!(profile.children[1].kind, ChildKind::Daughter);
    assert_eq!(profile.children[1].village.as_deref(), Some("Surat"));
    assert!(!profile.children[1].has_record);

    assert!(service.profile("Nobody").is_none());
}

#[test]
fn villages_are_distinct_and_sorted() {
    let service = setup();
    assert_eq!(service.villages(), vec!["Delhi", "Pune", "Surat"]);
}

#[test]
fn village_members_are_tagged_with_first_link() {
    let service = setup();

    let pune = service
        .village_members("Pune")
        .into_iter()
        .map(|entry| (entry.member.name.as_str(), entry.link))
        .collect::<Vec<_>>();
    assert_eq!(
        pune,
        vec![("Ram", VillageLink::Mosal), ("Lal", VillageLink::Sasru)]
    );

    let delhi = service
        .village_members("Delhi")
        .into_iter()
        .map(|entry| (entry.member.name.as_str(), entry.link.label()))
        .collect::<Vec<_>>();
    assert_eq!(
        delhi,
        vec![("Ram", "Sasru (Paternal)"), ("Asha", "Daughter Village")]
    );

    assert!(service.village_members("").is_empty());
}

#[test]
fn forest_and_search_go_through_service() {
    let service = setup();
    let forest = service.forest();
    assert_eq!(
        forest.iter().map(|n| n.name.as_str()).collect::<Vec<_>>(),
        vec!["Ram", "Asha"]
    );
    assert_eq!(service.search("surat").len(), 0);
    assert_eq!(service.search("meera").len(), 1);
    assert_eq!(service.suggest("as").len(), 1);
}
