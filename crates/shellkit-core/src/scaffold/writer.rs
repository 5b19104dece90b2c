//! Writing a new project to disk

use crate::error::ScaffoldError;
use crate::scaffold::database::Database;
use crate::scaffold::manifest::PackageManifest;
use crate::scaffold::templates;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// Parameters for one generated project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpec {
    pub name: String,
    pub database: Database,
    pub author: String,
}

impl ProjectSpec {
    pub fn new(name: impl Into<String>, database: Database) -> Self {
        Self {
            name: name.into(),
            database,
            author: String::new(),
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }
}

/// Check a project name and return it trimmed, with the directory it maps to
pub fn validate_project_name(base: &Path, name: &str) -> Result<(String, PathBuf), ScaffoldError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ScaffoldError::EmptyName);
    }

    let mut components = Path::new(name).components();
    let plain = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if !plain || name.contains(['/', '\\']) {
        return Err(ScaffoldError::InvalidName(name.to_string()));
    }

    let path = base.join(name);
    if path.exists() {
        return Err(ScaffoldError::ProjectExists {
            name: name.to_string(),
            path,
        });
    }

    Ok((name.to_string(), path))
}

/// Create `project_dir` and write the boilerplate files into it.
///
/// Returns the written file names in order.
pub async fn write_project(
    project_dir: &Path,
    spec: &ProjectSpec,
) -> Result<Vec<String>, ScaffoldError> {
    fs::create_dir_all(project_dir)
        .await
        .map_err(|source| ScaffoldError::Write {
            path: project_dir.to_path_buf(),
            source,
        })?;

    let manifest = PackageManifest::new(&spec.name, spec.database, &spec.author).to_json()?;
    let files = [
        ("package.json", manifest),
        ("main.js", templates::MAIN_JS.to_string()),
        ("preload.js", templates::PRELOAD_JS.to_string()),
        ("index.html", templates::index_html(&spec.name)),
        ("styles.css", templates::STYLES_CSS.to_string()),
    ];

    let mut written = Vec::with_capacity(files.len());
    for (file_name, content) in files {
        let target = project_dir.join(file_name);
        fs::write(&target, content)
            .await
            .map_err(|source| ScaffoldError::Write {
                path: target.clone(),
                source,
            })?;
        written.push(file_name.to_string());
    }

    Ok(written)
}
