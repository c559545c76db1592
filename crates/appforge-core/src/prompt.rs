//! Prompt capability
//!
//! The pipeline never talks to a terminal directly. Interactive questions go
//! through this trait so the whole generation flow runs against scripted
//! answers in tests. The `tui` feature provides the cliclack-backed
//! implementation.

use crate::error::Result;

pub trait Prompter {
    /// Ask an explicit yes/no question. Used before destructive actions.
    fn confirm(&self, message: &str) -> Result<bool>;

    /// Ask a free-text question. An empty answer means "skip".
    fn ask(&self, message: &str) -> Result<String>;
}
