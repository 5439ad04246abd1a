//! Command implementations for the `springcli` CLI.
//!
//! Each submodule corresponds to a `springcli generate` target, plus the
//! shared prompt and template helpers.

/// Code generation: `springcli generate controller|service|repository|entity`.
///
/// Creates skeleton Java sources under the project's base package. Entities
/// are merged with their existing declarations when the file already exists.
pub mod generate;

/// Key generation: `springcli generate jwt`.
///
/// Writes an RSA key pair for JWT signing to `jwt/`.
pub mod jwt;

/// Interactive gathering of entity fields and relations.
pub mod prompt;

/// `{{key}}` template rendering and the Java skeleton templates.
pub mod templates;

/// Welcome screen shown when no command is given.
pub mod welcome;
