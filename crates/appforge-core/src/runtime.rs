//! Runtime detection for Node.js and npm
//!
//! The install step shells out to npm, so its absence is reported before
//! any filesystem mutation happens.

use crate::error::{Error, Result};
use std::process::Command;

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

fn check_version(name: &'static str, binary: &str) -> RuntimeInfo {
    let output = Command::new(binary).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    check_version("Node.js", "node")
}

/// Check if npm is available
pub fn check_npm() -> RuntimeInfo {
    check_version("npm", "npm")
}

/// Fail early when npm is missing; Node.js availability is reported
/// alongside it but does not gate the run.
pub fn ensure_npm() -> Result<Vec<RuntimeInfo>> {
    let node = check_node();
    let npm = check_npm();

    if !npm.available {
        return Err(Error::RuntimeMissing(
            "npm (install Node.js from https://nodejs.org)".to_string(),
        ));
    }

    Ok(vec![node, npm])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_reports_fixed_runtime_names() {
        assert_eq!(check_node().name, "Node.js");
        assert_eq!(check_npm().name, "npm");
    }

    #[test]
    fn unavailable_runtime_has_no_version() {
        let info = check_version("ghost", "appforge-test-no-such-binary");
        assert!(!info.available);
        assert!(info.version.is_none());
    }
}
