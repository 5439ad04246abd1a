//! # springcli-core
//!
//! Entity merge engine used by the `springcli` scaffolding tool.
//!
//! Updating an entity that was generated earlier runs in one pass:
//!
//! 1. [`extract()`] scans the current file text into a [`DeclarationSet`];
//! 2. [`merge()`] upserts the newly requested declarations on top of it;
//! 3. [`render_entity()`] emits the canonical class source again.
//!
//! The rendered text only uses the shapes the extractor recognises, so a
//! render followed by an extract gives back the same declarations.
//!
//! ```
//! use springcli_core::{extract, merge, parse_tokens, render_entity};
//!
//! let created = render_entity("com.example", "User", &parse_tokens(&["name:string"])?)?;
//! let updated = merge(extract(&created), parse_tokens(&["email:string"])?);
//! let source = render_entity("com.example", "User", &updated)?;
//! assert!(source.contains("private String name;"));
//! assert!(source.contains("private String email;"));
//! # Ok::<(), springcli_core::Error>(())
//! ```

pub mod error;
pub mod extract;
pub mod merge;
pub mod model;
pub mod render;
pub mod tokens;

pub use error::{Error, Result};
pub use extract::extract;
pub use merge::merge;
pub use model::{
    is_identifier, java_type, Attribute, DeclarationSet, Relation, RelationKey, RelationKind,
    ATTRIBUTE_TYPES,
};
pub use render::{render_entity, sub_package, table_name, validate_package, ENTITY_PACKAGE};
pub use tokens::parse_tokens;
