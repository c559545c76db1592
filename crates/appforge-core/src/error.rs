//! Error taxonomy for the generation pipeline
//!
//! Every pipeline stage returns `Result<T>`; the binary maps the first
//! failure to a non-zero process exit. No stage calls `process::exit`
//! itself.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid app name '{0}'. Use lowercase letters, digits, '-', '_' or '.', with no path separators.")]
    InvalidAppName(String),

    #[error("Invalid {category} '{value}'. Supported options: {supported}.")]
    InvalidSelection {
        category: &'static str,
        value: String,
        supported: String,
    },

    #[error("No template found for '{framework}' at {path}")]
    TemplateMissing { framework: String, path: PathBuf },

    #[error("Aborting.")]
    Aborted,

    #[error("IO error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    StdIo(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("Package install failed with exit code {code}")]
    InstallFailed { code: i32 },

    #[error("Missing runtime: {0}")]
    RuntimeMissing(String),
}

pub type Result<T> = std::result::Result<T, Error>;
