//! Package manifest generation
//!
//! Builds the `package.json` for the generated project and writes it as
//! tab-indented JSON. Dependency maps stay empty; the package manager
//! rewrites them during install. The write completes before the install
//! step runs, and a write failure aborts the run.

use crate::catalog::Framework;
use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE_NAME: &str = "package.json";

const BACKEND_START: &str = "node server.js";

const BROWSERSLIST_PRODUCTION: [&str; 3] = [">0.2%", "not dead", "not op_mini all"];
const BROWSERSLIST_DEVELOPMENT: [&str; 3] = [
    "last 1 chrome version",
    "last 1 firefox version",
    "last 1 safari version",
];

#[derive(Debug, Serialize)]
pub struct PackageManifest {
    pub name: String,
    pub description: String,
    pub version: String,
    pub scripts: Scripts,
    pub dependencies: BTreeMap<String, String>,
    #[serde(rename = "devDependencies")]
    pub dev_dependencies: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browserslist: Option<Browserslist>,
}

#[derive(Debug, Serialize)]
pub struct Scripts {
    pub start: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eject: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct Browserslist {
    pub production: Vec<&'static str>,
    pub development: Vec<&'static str>,
}

impl PackageManifest {
    pub fn new(app_name: &str, framework: Framework) -> Self {
        let scripts = if framework.is_backend() {
            Scripts {
                start: BACKEND_START,
                build: None,
                test: None,
                eject: None,
            }
        } else {
            Scripts {
                start: "react-scripts start",
                build: Some("react-scripts build"),
                test: Some("react-scripts test --watchAll --coverage"),
                eject: Some("react-scripts eject"),
            }
        };

        let browserslist = (!framework.is_backend()).then(|| Browserslist {
            production: BROWSERSLIST_PRODUCTION.to_vec(),
            development: BROWSERSLIST_DEVELOPMENT.to_vec(),
        });

        Self {
            name: app_name.to_string(),
            description: format!("{framework} application."),
            version: "1.0.0".to_string(),
            scripts,
            dependencies: BTreeMap::new(),
            dev_dependencies: BTreeMap::new(),
            browserslist,
        }
    }

    /// Tab-indented JSON bytes
    pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"\t");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        buf.push(b'\n');
        Ok(buf)
    }
}

/// Write the manifest into the project root. Awaited by the pipeline
/// before the install step starts.
pub async fn write_manifest(project_root: &Path, manifest: &PackageManifest) -> Result<PathBuf> {
    let path = project_root.join(MANIFEST_FILE_NAME);
    let bytes = manifest.to_json_bytes()?;
    tokio::fs::write(&path, bytes)
        .await
        .map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
    Ok(path)
}
