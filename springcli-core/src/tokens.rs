use crate::error::{Error, Result};
use crate::model::{Attribute, DeclarationSet, Relation};

/// Parse command-line declaration tokens.
///
/// `name:type` declares an attribute (`type` goes through the attribute
/// vocabulary), `name:kind:target` declares a relation. Anything else is an
/// error, as are empty or non-identifier parts.
pub fn parse_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<DeclarationSet> {
    let mut set = DeclarationSet::new();
    for token in tokens {
        let token = token.as_ref();
        let parts: Vec<&str> = token.split(':').collect();
        match parts.as_slice() {
            [name, ty] => set.upsert_attribute(Attribute::from_token(*name, ty)?),
            [name, kind, target] => {
                set.upsert_relation(Relation::from_token(*name, kind, *target)?)
            }
            _ => return Err(Error::MalformedToken(token.to_string())),
        }
    }
    Ok(set)
}
