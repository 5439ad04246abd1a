use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use springcli_core::{
    extract, is_identifier, merge, parse_tokens, render_entity, DeclarationSet, ENTITY_PACKAGE,
};

use super::prompt::{self, Prompter};
use super::templates::{base_name, java};
use crate::project::ProjectLayout;

/// Generate `<src>/controller/<Name>Controller.java`.
pub fn controller(name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let name = class_name(base_name(name, "Controller"))?;
    let layout = ProjectLayout::discover()?;
    write_new(
        "controller",
        &layout.dir_for("controller"),
        &format!("{name}Controller.java"),
        &java::controller(&layout.package, name),
    )
}

/// Generate `<src>/service/<Name>Service.java`.
pub fn service(name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let name = class_name(base_name(name, "Service"))?;
    let layout = ProjectLayout::discover()?;
    write_new(
        "service",
        &layout.dir_for("service"),
        &format!("{name}Service.java"),
        &java::service(&layout.package, name),
    )
}

/// Generate `<src>/repository/<Name>Repository.java`.
pub fn repository(name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let name = class_name(base_name(name, "Repository"))?;
    let layout = ProjectLayout::discover()?;
    write_new(
        "repository",
        &layout.dir_for("repository"),
        &format!("{name}Repository.java"),
        &java::repository(&layout.package, name),
    )
}

/// Create or update `<src>/entity/<Name>.java`.
///
/// Declarations come from `tokens` (`name:type`, `name:kind:target`) or,
/// when there are none, from `prompter`. A missing file is created. An
/// existing file is read back, merged with the new declarations (new ones
/// win) and overwritten.
pub fn entity(
    name: &str,
    tokens: &[String],
    prompter: &mut dyn Prompter,
) -> Result<(), Box<dyn std::error::Error>> {
    let name = class_name(name)?;
    let layout = ProjectLayout::discover()?;
    let dir = layout.dir_for(ENTITY_PACKAGE);
    let path = dir.join(format!("{name}.java"));
    let exists = path.exists();

    if exists {
        println!("{} Entity {} already exists", "->".blue(), name.green());
    } else {
        println!("{} Creating entity {}", "->".blue(), name.green());
    }

    let incoming = if tokens.is_empty() {
        if exists {
            prompter.show("What do you want to add to this entity?");
        }
        prompt::gather_declarations(prompter)?
    } else {
        parse_tokens(tokens)?
    };

    if exists {
        let existing = fs::read_to_string(&path)?;
        let source = updated_entity_source(&layout.package, name, &existing, incoming)?;
        fs::write(&path, &source)?;
        info!(path = %path.display(), "Entity updated");
        println!(
            "{} Updated entity: {}",
            "✓".green(),
            path.display().to_string().cyan()
        );
        Ok(())
    } else {
        let source = render_entity(&layout.package, name, &incoming)?;
        write_new("entity", &dir, &format!("{name}.java"), &source)
    }
}

/// Source of entity `name` after merging `incoming` into the declarations
/// found in `existing`.
pub fn updated_entity_source(
    package: &str,
    name: &str,
    existing: &str,
    incoming: DeclarationSet,
) -> Result<String, Box<dyn std::error::Error>> {
    let merged = merge(extract(existing), incoming);
    Ok(render_entity(package, name, &merged)?)
}

fn class_name(name: &str) -> Result<&str, springcli_core::Error> {
    if is_identifier(name) {
        Ok(name)
    } else {
        Err(springcli_core::Error::InvalidIdentifier {
            role: "class name",
            value: name.to_string(),
        })
    }
}

/// Write a freshly generated file. Never replaces an existing one.
fn write_new(
    kind: &str,
    dir: &Path,
    file_name: &str,
    content: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let path: PathBuf = dir.join(file_name);

    if path.exists() {
        return Err(format!("File '{}' already exists", path.display()).into());
    }

    if !dir.exists() {
        debug!(dir = %dir.display(), "Creating directory");
        fs::create_dir_all(dir)?;
    }

    fs::write(&path, content)?;
    info!(path = %path.display(), bytes = content.len(), "File generated");

    println!(
        "{} Generated {}: {}",
        "✓".green(),
        kind,
        path.display().to_string().cyan()
    );

    Ok(())
}
