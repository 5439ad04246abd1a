use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::model::{ensure_identifier, DeclarationSet, TIME_TYPES};

/// Sub-package (and directory) entity classes live in.
pub const ENTITY_PACKAGE: &str = "entity";

const BASE_IMPORTS: &[&str] = &[
    "jakarta.persistence.Entity",
    "jakarta.persistence.GeneratedValue",
    "jakarta.persistence.GenerationType",
    "jakarta.persistence.Id",
    "jakarta.persistence.Table",
];

const IDENTITY_BLOCK: &str = "    @Id
    @GeneratedValue(strategy = GenerationType.IDENTITY)
    private Long id;
";

/// Storage (table) name for an entity: the class name in lower case.
pub fn table_name(class_name: &str) -> String {
    class_name.to_lowercase()
}

/// Check that `package` is a dotted sequence of identifiers. An empty package
/// is accepted and means the default package.
pub fn validate_package(package: &str) -> Result<()> {
    if package.is_empty() {
        return Ok(());
    }
    for segment in package.split('.') {
        if ensure_identifier("package segment", segment).is_err() {
            return Err(Error::InvalidIdentifier {
                role: "package",
                value: package.to_string(),
            });
        }
    }
    Ok(())
}

/// Join a base package with a sub-package, skipping an empty base.
pub fn sub_package(base: &str, sub: &str) -> String {
    if base.is_empty() {
        sub.to_string()
    } else {
        format!("{base}.{sub}")
    }
}

/// Render the source of entity `class_name` in `<package>.entity`.
///
/// The identity block always comes first and is never taken from
/// `declarations`. Attributes follow in key order, then one marker and field
/// pair per relation. The output only uses shapes [`extract`](crate::extract()) reads
/// back.
pub fn render_entity(
    package: &str,
    class_name: &str,
    declarations: &DeclarationSet,
) -> Result<String> {
    ensure_identifier("class name", class_name)?;
    validate_package(package)?;
    for attribute in declarations.attributes() {
        attribute.validate()?;
    }
    for relation in declarations.relations() {
        relation.validate()?;
    }

    let mut imports: BTreeSet<String> = BASE_IMPORTS.iter().map(|i| i.to_string()).collect();
    for attribute in declarations.attributes() {
        if TIME_TYPES.contains(&attribute.ty.as_str()) {
            imports.insert(format!("java.time.{}", attribute.ty));
        }
    }
    for relation in declarations.relations() {
        if relation.kind.is_known() {
            imports.insert(format!("jakarta.persistence.{}", relation.kind.name()));
        }
    }

    let mut out = format!("package {};\n\n", sub_package(package, ENTITY_PACKAGE));
    for import in &imports {
        out.push_str(&format!("import {import};\n"));
    }
    out.push('\n');
    out.push_str("@Entity\n");
    out.push_str(&format!("@Table(name = \"{}\")\n", table_name(class_name)));
    out.push_str(&format!("public class {class_name} {{\n"));
    out.push_str(IDENTITY_BLOCK);

    if declarations.attribute_count() > 0 {
        out.push('\n');
        for attribute in declarations.attributes() {
            out.push_str(&format!("    private {} {};\n", attribute.ty, attribute.name));
        }
    }

    for relation in declarations.relations() {
        out.push('\n');
        out.push_str(&format!("    {}\n", relation.kind.marker()));
        out.push_str(&format!("    private {} {};\n", relation.target, relation.name));
    }

    out.push_str("}\n");
    Ok(out)
}
