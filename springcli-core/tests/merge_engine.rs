use springcli_core::{
    extract, merge, parse_tokens, render_entity, Attribute, DeclarationSet, Relation,
    RelationKind,
};

const PACKAGE: &str = "com.example.demo";

fn declarations(tokens: &[&str]) -> DeclarationSet {
    parse_tokens(tokens).unwrap()
}

// ── Merge properties ────────────────────────────────────────────────

#[test]
fn merge_with_empty_is_identity() {
    let set = declarations(&["name:string", "age:int", "author:ManyToOne:User"]);
    assert_eq!(merge(set.clone(), DeclarationSet::new()), set);
}

#[test]
fn merge_with_itself_is_identity() {
    let set = declarations(&["name:string", "mentor:OneToOne:User"]);
    assert_eq!(merge(set.clone(), set.clone()), set);
}

#[test]
fn upsert_takes_incoming_type() {
    let merged = merge(declarations(&["a:int"]), declarations(&["a:string"]));
    assert_eq!(merged.attribute("a").unwrap().ty, "String");
}

#[test]
fn id_is_filtered_from_existing_side() {
    // Built from source so the id attribute reaches the merger unfiltered
    // by the token parser.
    let existing = extract("private Long id;\nprivate String name;\n");
    let merged = merge(existing, DeclarationSet::new());
    assert_eq!(merged.attribute_count(), 1);
    assert!(merged.attribute("name").is_some());
    assert!(merged.attribute("id").is_none());
}

#[test]
fn id_is_filtered_whatever_the_case() {
    let mut incoming = DeclarationSet::new();
    incoming.upsert_attribute(Attribute::new("Id", "Long").unwrap());
    incoming.upsert_attribute(Attribute::new("iD", "Long").unwrap());
    assert!(merge(DeclarationSet::new(), incoming).is_empty());
}

#[test]
fn relation_kind_is_part_of_identity() {
    let merged = merge(
        declarations(&["mentor:OneToOne:User"]),
        declarations(&["mentor:OneToMany:User"]),
    );
    assert_eq!(merged.relation_count(), 2);
    let kinds: Vec<_> = merged.relations().map(|r| r.kind.clone()).collect();
    assert!(kinds.contains(&RelationKind::OneToOne));
    assert!(kinds.contains(&RelationKind::OneToMany));
}

#[test]
fn merge_of_disjoint_sets_is_commutative() {
    let a = declarations(&["name:string", "author:ManyToOne:User", "tags:ManyToMany:Tag"]);
    let b = declarations(&["age:int", "mentor:OneToOne:User", "author:OneToMany:User"]);

    let ab = merge(a.clone(), b.clone());
    assert_eq!(ab, merge(b, a));
    assert_eq!(ab.attribute_count(), 2);
    assert_eq!(ab.relation_count(), 4);
}

// ── Round trip ──────────────────────────────────────────────────────

#[test]
fn render_then_extract_round_trips() {
    let set = declarations(&["age:int", "email:string", "author:ManyToOne:User"]);
    let source = render_entity(PACKAGE, "Post", &set).unwrap();
    assert_eq!(extract(&source), set);
}

#[test]
fn round_trip_through_merge() {
    let set = declarations(&[
        "title:string",
        "published:bool",
        "createdAt:LocalDateTime",
        "tags:ManyToMany:Tag",
        "cover:OneToOne:Image",
        "address:Embedded:Address",
    ]);
    let first = render_entity(PACKAGE, "Article", &set).unwrap();
    let merged = merge(extract(&first), DeclarationSet::new());
    let second = render_entity(PACKAGE, "Article", &merged).unwrap();
    assert_eq!(extract(&second), set);
    assert_eq!(first, second);
}

#[test]
fn other_kind_naming_a_known_kind_round_trips() {
    let relation =
        Relation::new("author", RelationKind::Other("ManyToOne".into()), "User").unwrap();
    assert_eq!(relation.kind, RelationKind::ManyToOne);

    let mut set = DeclarationSet::new();
    set.upsert_relation(relation);
    set.upsert_relation(Relation {
        name: "reviewer".into(),
        kind: RelationKind::Other("@OneToOne".into()),
        target: "User".into(),
    });

    let source = render_entity(PACKAGE, "Post", &set).unwrap();
    assert!(source.contains("    @OneToOne\n    private User reviewer;\n"));
    assert_eq!(extract(&source), set);
}

#[test]
fn forward_reference_type_survives_round_trip() {
    let set = declarations(&["billing:Invoice"]);
    let source = render_entity(PACKAGE, "Customer", &set).unwrap();
    assert!(source.contains("    private Invoice billing;\n"));
    assert_eq!(extract(&source), set);
}

// ── Scenarios ───────────────────────────────────────────────────────

#[test]
fn new_user_entity() {
    let source = render_entity(PACKAGE, "User", &declarations(&["name:string", "age:int"])).unwrap();

    let private_lines: Vec<_> = source
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("private "))
        .collect();
    assert_eq!(
        private_lines,
        ["private Long id;", "private int age;", "private String name;"]
    );
    assert!(source.contains("@Id\n"));
    assert!(source.contains("@Table(name = \"user\")"));
    for kind in RelationKind::KNOWN {
        assert!(!source.contains(&format!("    {}\n", kind.marker())));
    }
}

#[test]
fn update_user_entity_adds_email() {
    let existing = "package com.example.demo.entity;

@Entity
public class User {
    @Id
    @GeneratedValue(strategy = GenerationType.IDENTITY)
    private Long id;

    private String name;
}
";
    let merged = merge(extract(existing), declarations(&["email:string"]));
    let source = render_entity(PACKAGE, "User", &merged).unwrap();
    let reread = extract(&source);

    assert_eq!(reread.attribute_count(), 2);
    assert!(reread.attribute("name").is_some());
    assert!(reread.attribute("email").is_some());
    assert!(reread.attribute("id").is_none());
    assert_eq!(source.matches("private Long id;").count(), 1);
}

#[test]
fn update_can_change_a_type() {
    let source = render_entity(PACKAGE, "User", &declarations(&["age:int"])).unwrap();
    let merged = merge(extract(&source), declarations(&["age:Long"]));
    let updated = render_entity(PACKAGE, "User", &merged).unwrap();
    assert!(updated.contains("private Long age;"));
    assert!(!updated.contains("private int age;"));
}

#[test]
fn relation_constructed_directly_matches_token() {
    let direct = Relation::new("author", RelationKind::ManyToOne, "User").unwrap();
    let parsed = declarations(&["author:@ManyToOne:User"]);
    assert_eq!(parsed.relations().next(), Some(&direct));
}
