//! CSS add-on (frontend frameworks only)
//!
//! The selection maps to one or more package names. No file is generated;
//! CSS setup is template-provided.

use super::AddonOutcome;
use crate::catalog::CssLibrary;
use crate::error::Result;

pub fn configure(selection: &str) -> Result<AddonOutcome> {
    if selection.is_empty() {
        return Ok(AddonOutcome::skip());
    }

    let library = CssLibrary::parse(selection)?;

    Ok(AddonOutcome {
        dependencies: library.packages().iter().map(|p| p.to_string()).collect(),
        file: None,
    })
}
