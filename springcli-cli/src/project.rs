//! Where generated files go and which Java package they declare.
//!
//! The base package comes from `springcli.yaml` when it sets `package`,
//! otherwise from the `<groupId>` of the project's `pom.xml`.

use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Optional per-project configuration file, looked up in the working directory.
pub const CONFIG_FILE: &str = "springcli.yaml";

/// Contents of `springcli.yaml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScaffoldConfig {
    /// Root of the Java sources.
    pub source_root: PathBuf,
    /// Maven descriptor the groupId is read from.
    pub pom: PathBuf,
    /// Base package, overriding the pom groupId.
    pub package: Option<String>,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from("src/main/java"),
            pom: PathBuf::from("pom.xml"),
            package: None,
        }
    }
}

impl ScaffoldConfig {
    /// Load `springcli.yaml` from `dir`, falling back to defaults when absent.
    pub fn load(dir: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(&content)
            .map_err(|e| format!("Invalid {}: {e}", path.display()))?;
        debug!(?config, "Loaded project configuration");
        Ok(config)
    }
}

/// Resolved output location of generated sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    /// Directory of the base package, e.g. `src/main/java/com/example/demo`.
    pub source_dir: PathBuf,
    /// Base package, e.g. `com.example.demo`.
    pub package: String,
}

impl ProjectLayout {
    /// Discover the layout of the project in the current directory.
    pub fn discover() -> Result<Self, Box<dyn std::error::Error>> {
        Self::discover_in(Path::new("."))
    }

    /// Discover the layout of the project rooted at `root`.
    ///
    /// With a configured `package` the source directory follows it directly.
    /// Otherwise the pom groupId gives the starting directory, and when that
    /// directory holds a sub-directory (the usual `com/example/<app>` layout)
    /// the first one in name order becomes the base package.
    pub fn discover_in(root: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let config = ScaffoldConfig::load(root)?;
        let source_root = root.join(&config.source_root);

        let relative = match &config.package {
            Some(package) => package_path(package),
            None => {
                let pom_path = root.join(&config.pom);
                let pom = fs::read_to_string(&pom_path)
                    .map_err(|e| format!("Unable to read {}: {e}", pom_path.display()))?;
                let group_id = read_group_id(&pom)?.ok_or_else(|| {
                    format!("groupId not found in {} <project>", pom_path.display())
                })?;
                let base = package_path(&group_id);
                match first_subdirectory(&source_root.join(&base)) {
                    Some(app) => base.join(app),
                    None => base,
                }
            }
        };

        let package = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(".");
        springcli_core::validate_package(&package)?;

        let layout = Self {
            source_dir: source_root.join(&relative),
            package,
        };
        debug!(
            source_dir = %layout.source_dir.display(),
            package = %layout.package,
            "Resolved project layout"
        );
        Ok(layout)
    }

    /// Directory of a sub-package such as `entity` or `controller`.
    pub fn dir_for(&self, sub_package: &str) -> PathBuf {
        self.source_dir.join(sub_package)
    }
}

fn package_path(package: &str) -> PathBuf {
    package.split('.').filter(|s| !s.is_empty()).collect()
}

fn first_subdirectory(dir: &Path) -> Option<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .ok()?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names.into_iter().next()
}

/// Read the groupId declared directly under `<project>`.
///
/// The `<parent>` groupId and the groupIds of dependencies and plugins are
/// ignored. Comments are skipped and tags are matched on their local name,
/// so `<pom:project>` counts as `<project>`. Returns `Ok(None)` when there is
/// none.
pub fn read_group_id(pom: &str) -> Result<Option<String>, regex::Error> {
    let comments = Regex::new(r"(?s)<!--.*?-->")?;
    let tag = Regex::new(r"<(/?)([A-Za-z_][\w.:-]*)[^>]*?(/?)>")?;

    let text = comments.replace_all(pom, "");
    let mut path: Vec<&str> = Vec::new();
    let mut content_start = 0;

    for caps in tag.captures_iter(&text) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(2)) else {
            continue;
        };
        let closing = caps.get(1).is_some_and(|m| !m.as_str().is_empty());
        let self_closing = caps.get(3).is_some_and(|m| !m.as_str().is_empty());

        if closing {
            if path == ["project", "groupId"] {
                let value = text[content_start..whole.start()].trim();
                return Ok((!value.is_empty()).then(|| value.to_string()));
            }
            path.pop();
        } else if !self_closing {
            path.push(local_name(name.as_str()));
        }
        content_start = whole.end();
    }

    Ok(None)
}

fn local_name(tag: &str) -> &str {
    tag.rsplit_once(':').map_or(tag, |(_, local)| local)
}
