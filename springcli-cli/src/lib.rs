//! # springcli-cli
//!
//! Command-line tool for scaffolding Spring Boot sources.
//!
//! This crate provides the `springcli` binary with the following commands:
//!
//! | Command | Description |
//! |---------|-------------|
//! | `springcli generate controller <Name>` | `@RestController` skeleton |
//! | `springcli generate service <Name>` | Service interface |
//! | `springcli generate repository <Name>` | `JpaRepository` interface |
//! | `springcli generate entity <Name> [fields...]` | Create or merge-update a JPA entity |
//! | `springcli generate jwt` | RSA key pair for JWT signing |
//!
//! ## Architecture
//!
//! - [`commands`]: one module per command, plus prompts and templates
//! - [`project`]: locating the Java source tree and base package
//! - [`logging`]: tracing subscriber setup
//!
//! Entity extraction, merging and rendering live in `springcli-core`.

pub mod commands;
pub mod logging;
pub mod project;
