//! Destination guard
//!
//! Decides whether the target directory may be created. An existing
//! directory is only removed after an explicit confirmation; declining
//! aborts the run with no filesystem mutation.

use crate::error::{Error, Result};
use crate::prompt::Prompter;
use colored::Colorize;
use std::fs;
use std::path::Path;

pub fn prepare_destination(target: &Path, prompter: &dyn Prompter) -> Result<()> {
    if !target.exists() {
        return Ok(());
    }

    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| target.display().to_string());

    let confirmed = prompter.confirm(&format!(
        "There is a folder named '{name}' in this location. Okay to delete and continue?"
    ))?;

    if !confirmed {
        return Err(Error::Aborted);
    }

    println!(
        "{}",
        "Removing folder... this might take a moment.".dimmed()
    );
    fs::remove_dir_all(target).map_err(|source| Error::Io {
        path: target.to_path_buf(),
        source,
    })?;

    Ok(())
}
