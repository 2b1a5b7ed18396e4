use familytree_core::{
    resolve_relationship, ChildRef, InMemoryMemberRepository, Member, RELATIONSHIP_NOT_FOUND,
};

fn setup() -> InMemoryMemberRepository {
    let mut ram = Member::new("Ram");
    ram.father = "Shyam".to_string();
    ram.mother = "Sita".to_string();
    ram.wife = "Gita".to_string();
    ram.sons.push(ChildRef::new("Lal"));
    ram.daughters.push(ChildRef::with_village("Meera", "Surat"));

    let mut lal = Member::new("Lal");
    lal.father = "Ram".to_string();

    InMemoryMemberRepository::new(vec![ram, lal])
}

#[test]
fn child_to_father_uses_child_record() {
    let repo = setup();
    let relationship = resolve_relationship(&repo, "Lal", "Ram");
    assert_eq!(relationship.relationship, "Ram is Lal's father");
    assert_eq!(relationship.path, vec!["Ram", "Lal"]);
    assert_eq!(relationship.person1, "Lal");
    assert_eq!(relationship.person2, "Ram");
}

#[test]
fn parent_to_son_and_daughter() {
    let repo = setup();

    let son = resolve_relationship(&repo, "Ram", "Lal");
    assert_eq!(son.relationship, "Lal is Ram's son");
    assert_eq!(son.path, vec!["Ram", "Lal"]);

    let daughter = resolve_relationship(&repo, "Ram", "Meera");
    assert_eq!(daughter.relationship, "Meera is Ram's daughter");
    assert_eq!(daughter.path, vec!["Ram", "Meera"]);
}

#[test]
fn dangling_person2_still_matches_person1_fields() {
    let repo = setup();

    let father = resolve_relationship(&repo, "Ram", "Shyam");
    assert_eq!(father.relationship, "Shyam is Ram's father");
    assert_eq!(father.path, vec!["Shyam", "Ram"]);

    let mother = resolve_relationship(&repo, "Ram", "Sita");
    assert_eq!(mother.relationship, "Sita is Ram's mother");
    assert_eq!(mother.path, vec!["Sita", "Ram"]);

    let wife = resolve_relationship(&repo, "Ram", "Gita");
    assert_eq!(wife.relationship, "Gita is Ram's wife");
    assert_eq!(wife.path, vec!["Ram", "Gita"]);
}

#[test]
fn inverse_direction_is_not_computed() {
    let mut child = Member::new("A");
    child.father = "B".to_string();
    let repo = InMemoryMemberRepository::new(vec![child, Member::new("B")]);

    let forward = resolve_relationship(&repo, "A", "B");
    assert_eq!(forward.relationship, "B is A's father");

    let inverse = resolve_relationship(&repo, "B", "A");
    assert_eq!(inverse.relationship, RELATIONSHIP_NOT_FOUND);
    assert!(inverse.path.is_empty());
}

#[test]
fn unknown_person1_is_not_found() {
    let repo = setup();
    let relationship = resolve_relationship(&repo, "Shyam", "Ram");
    assert_eq!(relationship.relationship, RELATIONSHIP_NOT_FOUND);
    assert!(relationship.path.is_empty());
    assert!(!relationship.is_found());
}

#[test]
fn father_takes_precedence_over_child() {
    let mut odd = Member::new("Odd");
    odd.father = "X".to_string();
    odd.sons.push(ChildRef::new("X"));
    let repo = InMemoryMemberRepository::new(vec![odd]);

    let relationship = resolve_relationship(&repo, "Odd", "X");
    assert_eq!(relationship.relationship, "X is Odd's father");
}

#[test]
fn multi_hop_kinship_is_not_resolved() {
    let mut grandchild = Member::new("Grandchild");
    grandchild.father = "Lal".to_string();
    let mut repo_members = vec![grandchild];
    let mut lal = Member::new("Lal");
    lal.father = "Ram".to_string();
    repo_members.push(lal);
    let repo = InMemoryMemberRepository::new(repo_members);

    let relationship = resolve_relationship(&repo, "Grandchild", "Ram");
    assert_eq!(relationship.relationship, RELATIONSHIP_NOT_FOUND);
}
