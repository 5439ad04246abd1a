//! Recovery of declarations from a previously generated entity file.
//!
//! This is a line scanner, not a Java parser. It recognises exactly two
//! shapes and ignores every other line:
//!
//! ```text
//! private <Type> <name>;          attribute
//!
//! @<Kind>                         relation (marker on the line right above)
//! private <Target> <name>;
//! ```
//!
//! The single-line form `@<Kind> private <Target> <name>;` is also read as a
//! relation. Generic types, initialised fields, `static`/`final` modifiers
//! and annotations with arguments fall outside the grammar. A field whose
//! type happens to name another entity is still an attribute unless a marker
//! sits on the line immediately above it.

use tracing::debug;

use crate::model::{is_identifier, Attribute, DeclarationSet, Relation, RelationKind};

/// Scan `source` and collect every attribute and relation it declares.
///
/// Never fails: unreadable input yields an empty set.
pub fn extract(source: &str) -> DeclarationSet {
    let mut set = DeclarationSet::new();
    let mut pending_marker: Option<&str> = None;

    for line in source.lines() {
        let trimmed = line.trim();
        let marker_above = pending_marker.take();

        if let Some(word) = marker_word(trimmed) {
            pending_marker = Some(word);
            continue;
        }

        let (marker, field) = match inline_marker(trimmed) {
            Some((word, rest)) => (Some(word), rest),
            None => (marker_above, trimmed),
        };

        let Some((ty, name)) = field_declaration(field) else {
            continue;
        };

        match marker {
            Some(word) => {
                if let Ok(relation) = Relation::new(name, RelationKind::from_token(word), ty) {
                    set.upsert_relation(relation);
                }
            }
            None => {
                if let Ok(attribute) = Attribute::new(name, ty) {
                    set.upsert_attribute(attribute);
                }
            }
        }
    }

    debug!(
        attributes = set.attribute_count(),
        relations = set.relation_count(),
        "Extracted declarations"
    );
    set
}

/// `@Word` on its own, returning `Word`.
fn marker_word(token: &str) -> Option<&str> {
    let word = token.strip_prefix('@')?;
    is_identifier(word).then_some(word)
}

/// `@Word private ...` on one line, returning `Word` and the field part.
fn inline_marker(line: &str) -> Option<(&str, &str)> {
    let (head, rest) = line.split_once(char::is_whitespace)?;
    let word = marker_word(head)?;
    Some((word, rest.trim_start()))
}

/// `private <Type> <name>;`, returning `(Type, name)`.
fn field_declaration(line: &str) -> Option<(&str, &str)> {
    let (body, _) = line.split_once(';')?;
    let mut tokens = body.split_whitespace();
    if tokens.next()? != "private" {
        return None;
    }
    let ty = tokens.next()?;
    let name = tokens.next()?;
    if tokens.next().is_some() || !is_identifier(ty) || !is_identifier(name) {
        return None;
    }
    Some((ty, name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_plain_attributes() {
        let set = extract("    private String name;\n    private int age;\n");
        assert_eq!(set.attribute_count(), 2);
        assert_eq!(set.attribute("name").unwrap().ty, "String");
        assert_eq!(set.attribute("age").unwrap().ty, "int");
    }

    #[test]
    fn reads_marker_pair_as_relation() {
        let set = extract("    @ManyToOne\n    private User author;\n");
        assert_eq!(set.attribute_count(), 0);
        let relation = set.relations().next().unwrap();
        assert_eq!(relation.name, "author");
        assert_eq!(relation.kind, RelationKind::ManyToOne);
        assert_eq!(relation.target, "User");
    }

    #[test]
    fn reads_inline_marker_as_relation() {
        let set = extract("@OneToMany private Comment comments;");
        assert_eq!(set.relation_count(), 1);
        assert_eq!(set.attribute_count(), 0);
    }

    #[test]
    fn marker_must_be_immediately_above() {
        let set = extract("    @ManyToOne\n\n    private User author;\n");
        assert_eq!(set.relation_count(), 0);
        assert_eq!(set.attribute("author").unwrap().ty, "User");
    }

    #[test]
    fn annotation_with_arguments_is_not_a_marker() {
        let set = extract("    @Column(name = \"mail\")\n    private String email;\n");
        assert_eq!(set.relation_count(), 0);
        assert!(set.attribute("email").is_some());
    }

    #[test]
    fn identity_block_is_filtered() {
        let source = "    @Id\n    @GeneratedValue(strategy = GenerationType.IDENTITY)\n    private Long id;\n";
        assert!(extract(source).is_empty());
    }

    #[test]
    fn ignores_shapes_outside_the_grammar() {
        let source = r#"
import java.util.List;
// private String commented;
private static final long serialVersionUID = 1L;
private List<Post> posts;
private String initialised = "x";
public String getName() { return name; }
"#;
        assert!(extract(source).is_empty());
    }

    #[test]
    fn tolerates_garbage() {
        assert!(extract("").is_empty());
        assert!(extract("@\n;;;\nprivate\nprivate ;\n@@ManyToOne").is_empty());
    }

    #[test]
    fn allows_trailing_comment_after_semicolon() {
        let set = extract("private String nickname; // shown in UI");
        assert!(set.attribute("nickname").is_some());
    }
}
