//! Add-on configurators
//!
//! Each add-on (database, mail, authentication, CSS) shares one contract:
//! validate the selection first, then deterministically produce the
//! dependencies to append and at most one generated source file. An empty
//! selection skips the add-on; an invalid non-empty selection fails before
//! any file is written or the dependency set is touched.

pub mod auth;
pub mod css;
pub mod database;
pub mod mail;

use crate::error::{Error, Result};
use crate::resolve::DependencySet;
use std::fs;
use std::path::Path;

/// A boilerplate source file emitted by an accepted add-on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the project root
    pub relative_path: &'static str,
    pub contents: String,
}

/// Result of a configurator run: dependencies to append and an optional
/// file to materialize.
#[derive(Debug, Clone)]
pub struct AddonOutcome {
    pub dependencies: Vec<String>,
    pub file: Option<GeneratedFile>,
}

impl AddonOutcome {
    pub fn skip() -> Self {
        Self {
            dependencies: Vec::new(),
            file: None,
        }
    }

    /// Append the dependencies and write the generated file under the
    /// project root. Returns the relative path written, if any.
    pub fn apply(self, dependencies: &mut DependencySet, project_root: &Path) -> Result<Option<&'static str>> {
        for dependency in &self.dependencies {
            dependencies.add(dependency);
        }

        match self.file {
            None => Ok(None),
            Some(file) => {
                write_generated(project_root, file.relative_path, &file.contents)?;
                Ok(Some(file.relative_path))
            }
        }
    }
}

fn write_generated(project_root: &Path, relative_path: &str, contents: &str) -> Result<()> {
    let path = project_root.join(relative_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| Error::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(&path, contents).map_err(|source| Error::Io { path, source })
}
