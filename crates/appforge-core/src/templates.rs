//! Template materialization
//!
//! Resolves a framework to its template directory and copies the whole tree
//! into the destination. Template contents are opaque; nothing is rendered
//! or rewritten during the copy.

use crate::catalog::Framework;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Environment variable overriding the template root directory
pub const TEMPLATE_DIR_ENV: &str = "APPFORGE_TEMPLATE_DIR";

/// Template root: env override, else `templates/` next to the executable.
pub fn default_template_root() -> PathBuf {
    if let Ok(dir) = std::env::var(TEMPLATE_DIR_ENV) {
        return PathBuf::from(dir);
    }

    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.join("templates")))
        .unwrap_or_else(|| PathBuf::from("templates"))
}

/// Resolve the framework's template directory under the template root.
pub fn template_source(root: &Path, framework: Framework) -> Result<PathBuf> {
    let source = root.join(framework.template_dir());
    if !source.is_dir() {
        return Err(Error::TemplateMissing {
            framework: framework.to_string(),
            path: source,
        });
    }
    Ok(source)
}

/// Recursively copy the template tree into `target`, preserving structure.
/// Returns the number of files copied.
pub fn copy_template(source: &Path, target: &Path) -> Result<usize> {
    let mut copied = 0;

    for entry in WalkDir::new(source) {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| source.to_path_buf());
            let source = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("filesystem loop in template tree"));
            Error::Io { path, source }
        })?;

        let relative = entry
            .path()
            .strip_prefix(source)
            .unwrap_or_else(|_| Path::new(""));
        if relative.as_os_str().is_empty() {
            continue;
        }

        let destination = target.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&destination).map_err(|source| Error::Io {
                path: destination.clone(),
                source,
            })?;
        } else {
            if let Some(parent) = destination.parent() {
                fs::create_dir_all(parent).map_err(|source| Error::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            fs::copy(entry.path(), &destination).map_err(|source| Error::Io {
                path: destination.clone(),
                source,
            })?;
            copied += 1;
        }
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_template_directory_is_fatal() {
        let root = tempfile::tempdir().unwrap();
        let err = template_source(root.path(), Framework::Express).unwrap_err();
        assert!(matches!(err, Error::TemplateMissing { .. }));
    }

    #[test]
    fn copy_preserves_nested_structure() {
        let root = tempfile::tempdir().unwrap();
        let source = root.path().join("express_template");
        fs::create_dir_all(source.join("src/routes")).unwrap();
        fs::write(source.join("server.js"), "// entry").unwrap();
        fs::write(source.join("src/routes/index.js"), "// routes").unwrap();

        let out = tempfile::tempdir().unwrap();
        let target = out.path().join("my-app");

        let resolved = template_source(root.path(), Framework::Express).unwrap();
        let copied = copy_template(&resolved, &target).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(fs::read_to_string(target.join("server.js")).unwrap(), "// entry");
        assert_eq!(
            fs::read_to_string(target.join("src/routes/index.js")).unwrap(),
            "// routes"
        );
    }
}
