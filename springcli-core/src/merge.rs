use tracing::debug;

use crate::model::DeclarationSet;

/// Merge newly requested declarations into the ones already on disk.
///
/// `existing` is applied first and `incoming` second, so on an identity-key
/// collision the incoming entry replaces the existing one (an attribute's type
/// may change this way). Relations are keyed on name, kind and target, so a
/// relation that differs in kind or target is kept alongside the old one.
/// Reserved `id` entries from either side never survive.
pub fn merge(existing: DeclarationSet, incoming: DeclarationSet) -> DeclarationSet {
    let mut merged = DeclarationSet::new();
    for set in [existing, incoming] {
        merged.absorb(set);
    }
    debug!(
        attributes = merged.attribute_count(),
        relations = merged.relation_count(),
        "Merged declarations"
    );
    merged
}

impl DeclarationSet {
    /// Upsert every entry of `other` into `self`.
    pub fn absorb(&mut self, other: DeclarationSet) {
        let (attributes, relations) = other.into_parts();
        for attribute in attributes {
            self.upsert_attribute(attribute);
        }
        for relation in relations {
            self.upsert_relation(relation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Attribute, Relation};

    fn attrs(pairs: &[(&str, &str)]) -> DeclarationSet {
        let mut set = DeclarationSet::new();
        for (name, ty) in pairs {
            set.upsert_attribute(Attribute::from_token(*name, ty).unwrap());
        }
        set
    }

    #[test]
    fn incoming_wins_on_collision() {
        let merged = merge(attrs(&[("a", "int")]), attrs(&[("a", "string")]));
        assert_eq!(merged.attribute_count(), 1);
        assert_eq!(merged.attribute("a").unwrap().ty, "String");
    }

    #[test]
    fn disjoint_sets_union() {
        let merged = merge(attrs(&[("a", "int")]), attrs(&[("b", "bool")]));
        assert_eq!(merged.attribute_count(), 2);
    }

    #[test]
    fn merge_is_asymmetric_on_shared_keys() {
        let left = attrs(&[("a", "int")]);
        let right = attrs(&[("a", "double")]);
        let lr = merge(left.clone(), right.clone());
        let rl = merge(right, left);
        assert_eq!(lr.attribute("a").unwrap().ty, "double");
        assert_eq!(rl.attribute("a").unwrap().ty, "int");
    }

    #[test]
    fn same_relation_collapses() {
        let mut left = DeclarationSet::new();
        left.upsert_relation(Relation::from_token("author", "ManyToOne", "User").unwrap());
        let merged = merge(left.clone(), left);
        assert_eq!(merged.relation_count(), 1);
    }

    #[test]
    fn relation_with_other_target_is_distinct() {
        let mut left = DeclarationSet::new();
        left.upsert_relation(Relation::from_token("owner", "ManyToOne", "User").unwrap());
        let mut right = DeclarationSet::new();
        right.upsert_relation(Relation::from_token("owner", "ManyToOne", "Team").unwrap());
        assert_eq!(merge(left, right).relation_count(), 2);
    }
}
