//! `package.json` generation

use crate::scaffold::database::Database;
use serde::Serialize;
use std::collections::BTreeMap;

/// Version requirement used for database drivers
const DRIVER_VERSION: &str = "latest";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scripts {
    pub start: String,
    pub build: String,
    pub dev: String,
    pub test: String,
}

impl Default for Scripts {
    fn default() -> Self {
        Self {
            start: "electron .".to_string(),
            build: "electron-builder --win".to_string(),
            dev: "electron .".to_string(),
            test: "jest".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JestConfig {
    pub test_environment: String,
}

/// The `package.json` written into a new project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    pub description: String,
    pub author: String,
    pub main: String,
    pub scripts: Scripts,
    pub dev_dependencies: BTreeMap<String, String>,
    pub jest: JestConfig,
    pub dependencies: BTreeMap<String, String>,
}

impl PackageManifest {
    pub fn new(name: &str, database: Database, author: &str) -> Self {
        let dev_dependencies = [
            ("electron", "*"),
            ("electron-builder", "*"),
            ("electron-devtools-installer", "*"),
            ("jest", "^27.0.0"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let mut dependencies = BTreeMap::new();
        if let Some(driver) = database.dependency() {
            dependencies.insert(driver.to_string(), DRIVER_VERSION.to_string());
        }

        Self {
            name: name.to_string(),
            version: "1.0.0".to_string(),
            description: format!("Electron project {}", name),
            author: author.to_string(),
            main: "main.js".to_string(),
            scripts: Scripts::default(),
            dev_dependencies,
            jest: JestConfig {
                test_environment: "node".to_string(),
            },
            dependencies,
        }
    }

    /// Render as pretty JSON with 4-space indentation and a trailing newline
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        buf.push(b'\n');
        // serde_json only ever emits UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
