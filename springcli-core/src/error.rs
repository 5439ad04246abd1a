use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when a caller hands the engine something it cannot render.
///
/// Malformed *source text* is never an error: the extractor simply finds
/// nothing. These variants cover caller-supplied names and tokens only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A class, attribute, relation, type or target name is empty or is not a
    /// valid identifier.
    #[error("Invalid {role} '{value}': expected a non-empty identifier")]
    InvalidIdentifier { role: &'static str, value: String },

    /// A declaration token is neither `name:type` nor `name:kind:target`.
    #[error("Invalid declaration '{0}': expected name:type or name:kind:target")]
    MalformedToken(String),
}
