use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Error, Result};

/// Attribute type tokens accepted on the command line, with the Java type each
/// one is emitted as. Any token not listed here passes through unchanged and
/// is treated as a reference to another class.
pub const ATTRIBUTE_TYPES: &[(&str, &str)] = &[
    ("string", "String"),
    ("int", "int"),
    ("bool", "boolean"),
    ("double", "double"),
    ("Long", "Long"),
    ("LocalDate", "LocalDate"),
    ("LocalDateTime", "LocalDateTime"),
];

/// Java types that need a `java.time` import when used by an attribute.
pub(crate) const TIME_TYPES: &[&str] = &["LocalDate", "LocalDateTime"];

/// Name of the primary identity field every entity owns implicitly.
pub const IDENTITY_FIELD: &str = "id";

/// Map an attribute type token to its Java type name.
pub fn java_type(token: &str) -> String {
    ATTRIBUTE_TYPES
        .iter()
        .find(|(t, _)| *t == token)
        .map(|(_, java)| (*java).to_string())
        .unwrap_or_else(|| token.to_string())
}

/// Whether `value` is a plain Java-style identifier: a letter, `_` or `$`
/// followed by letters, digits, `_` or `$`.
pub fn is_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Names owned by the identity block. Compared case-insensitively.
pub fn is_reserved(name: &str) -> bool {
    name.eq_ignore_ascii_case(IDENTITY_FIELD)
}

pub(crate) fn ensure_identifier(role: &'static str, value: &str) -> Result<()> {
    if is_identifier(value) {
        Ok(())
    } else {
        Err(Error::InvalidIdentifier {
            role,
            value: value.to_string(),
        })
    }
}

/// A scalar field declared on a generated entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attribute {
    pub name: String,
    /// Java type as emitted, e.g. `String` or `LocalDate`.
    pub ty: String,
    /// Name exposed to API clients. Defaults to `name`.
    pub external_name: String,
}

impl Attribute {
    /// Build an attribute from an already-resolved Java type.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let attribute = Self {
            external_name: name.clone(),
            name,
            ty: ty.into(),
        };
        attribute.validate()?;
        Ok(attribute)
    }

    /// Check name and type. Fields are public, so a struct literal can
    /// bypass [`Attribute::new`].
    pub fn validate(&self) -> Result<()> {
        ensure_identifier("attribute name", &self.name)?;
        ensure_identifier("attribute type", &self.ty)
    }

    /// Build an attribute from a user-facing type token (`string`, `int`, ...).
    pub fn from_token(name: impl Into<String>, type_token: &str) -> Result<Self> {
        Self::new(name, java_type(type_token))
    }
}

/// Relationship cardinality between two entities.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RelationKind {
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
    /// Any other single-word marker, kept verbatim without its leading `@`.
    Other(String),
}

impl RelationKind {
    pub const KNOWN: [RelationKind; 4] = [
        RelationKind::OneToOne,
        RelationKind::OneToMany,
        RelationKind::ManyToOne,
        RelationKind::ManyToMany,
    ];

    /// Resolve a kind token. Accepts both `ManyToOne` and `@ManyToOne`;
    /// unknown words become [`RelationKind::Other`].
    pub fn from_token(token: &str) -> Self {
        let word = token.strip_prefix('@').unwrap_or(token);
        match word {
            "OneToOne" => RelationKind::OneToOne,
            "OneToMany" => RelationKind::OneToMany,
            "ManyToOne" => RelationKind::ManyToOne,
            "ManyToMany" => RelationKind::ManyToMany,
            other => RelationKind::Other(other.to_string()),
        }
    }

    /// The bare annotation word, e.g. `ManyToOne`.
    pub fn name(&self) -> &str {
        match self {
            RelationKind::OneToOne => "OneToOne",
            RelationKind::OneToMany => "OneToMany",
            RelationKind::ManyToOne => "ManyToOne",
            RelationKind::ManyToMany => "ManyToMany",
            RelationKind::Other(word) => word,
        }
    }

    /// The marker line emitted above the field, e.g. `@ManyToOne`.
    pub fn marker(&self) -> String {
        format!("@{}", self.name())
    }

    /// `Other` holding a known word (or a leading `@`) resolved the way
    /// [`RelationKind::from_token`] would, so it matches what `extract` reads
    /// back from the rendered marker.
    pub fn normalized(&self) -> Self {
        RelationKind::from_token(self.name())
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, RelationKind::Other(_))
    }

    pub fn description(&self) -> &'static str {
        match self {
            RelationKind::OneToOne => "1-1: each A has exactly one B",
            RelationKind::OneToMany => "1-N: one A has many B",
            RelationKind::ManyToOne => "N-1: many A belong to one B",
            RelationKind::ManyToMany => "N-N: many A relate to many B",
            RelationKind::Other(_) => "custom marker",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identity of a relation: two relations are the same entry only when name,
/// kind and target all match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelationKey {
    pub name: String,
    pub kind: RelationKind,
    pub target: String,
}

/// A named reference from one entity to another.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Relation {
    pub name: String,
    pub kind: RelationKind,
    pub target: String,
}

impl Relation {
    pub fn new(
        name: impl Into<String>,
        kind: RelationKind,
        target: impl Into<String>,
    ) -> Result<Self> {
        let relation = Self {
            name: name.into(),
            kind: kind.normalized(),
            target: target.into(),
        };
        relation.validate()?;
        Ok(relation)
    }

    /// Check name, kind word and target.
    pub fn validate(&self) -> Result<()> {
        ensure_identifier("relation name", &self.name)?;
        ensure_identifier("relation kind", self.kind.name())?;
        ensure_identifier("relation target", &self.target)
    }

    /// Build a relation from a user-facing kind token (`ManyToOne`, ...).
    pub fn from_token(
        name: impl Into<String>,
        kind_token: &str,
        target: impl Into<String>,
    ) -> Result<Self> {
        Self::new(name, RelationKind::from_token(kind_token), target)
    }

    pub fn key(&self) -> RelationKey {
        RelationKey {
            name: self.name.clone(),
            kind: self.kind.clone(),
            target: self.target.clone(),
        }
    }
}

/// Attributes and relations of one entity, keyed for upsert merging.
///
/// Iteration follows identity-key order, which keeps rendering stable
/// across runs. Entries named `id` (any case) are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationSet {
    attributes: BTreeMap<String, Attribute>,
    relations: BTreeMap<RelationKey, Relation>,
}

impl DeclarationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the attribute with the same name. Reserved names
    /// are dropped silently.
    pub fn upsert_attribute(&mut self, attribute: Attribute) {
        if is_reserved(&attribute.name) {
            return;
        }
        self.attributes.insert(attribute.name.clone(), attribute);
    }

    /// Insert or replace the relation with the same name, kind and target.
    /// Reserved names are dropped silently.
    pub fn upsert_relation(&mut self, mut relation: Relation) {
        if is_reserved(&relation.name) {
            return;
        }
        relation.kind = relation.kind.normalized();
        self.relations.insert(relation.key(), relation);
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.values()
    }

    pub fn relations(&self) -> impl Iterator<Item = &Relation> {
        self.relations.values()
    }

    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    pub fn relation_count(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.relations.is_empty()
    }

    pub(crate) fn into_parts(self) -> (Vec<Attribute>, Vec<Relation>) {
        (
            self.attributes.into_values().collect(),
            self.relations.into_values().collect(),
        )
    }
}
