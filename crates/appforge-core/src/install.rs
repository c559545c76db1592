//! Install runner boundary
//!
//! The package manager is an external collaborator: it receives the final
//! ordered dependency list and a working directory, streams its own output
//! to the user, and reports an exit status. A non-zero status is fatal for
//! the whole run.

use crate::error::{Error, Result};
use colored::Colorize;
use std::path::Path;
use std::process::Command;

pub trait Installer {
    fn install(&self, dependencies: &[String], workdir: &Path) -> Result<()>;
}

/// Shells out to `npm install <deps...>` with inherited stdio.
pub struct NpmInstaller;

impl Installer for NpmInstaller {
    fn install(&self, dependencies: &[String], workdir: &Path) -> Result<()> {
        if dependencies.is_empty() {
            return Ok(());
        }

        println!(
            "{}",
            "Installing packages. This might take a couple of minutes.".dimmed()
        );
        println!("Installing: {}", dependencies.join(" ").cyan());
        println!();

        let status = Command::new("npm")
            .arg("install")
            .args(dependencies)
            .current_dir(workdir)
            .status()
            .map_err(|source| Error::Io {
                path: workdir.to_path_buf(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(Error::InstallFailed {
                code: status.code().unwrap_or(-1),
            })
        }
    }
}
