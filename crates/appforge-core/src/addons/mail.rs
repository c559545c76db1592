//! Mail add-on
//!
//! The selection is validated against the mail-client catalog and appended
//! as the dependency name. The generated transport file is the same for
//! every provider; host, port and credentials come from the environment.

use super::{AddonOutcome, GeneratedFile};
use crate::catalog::MailClient;
use crate::error::Result;

/// Project-relative path of the generated transport setup
pub const MAIL_SERVICE_PATH: &str = "src/services/mail_service.js";

const MAIL_SETUP: &str = r#"const nodemailer = require('nodemailer');

const transporter = nodemailer.createTransport({
    host: process.env.MAIL_HOST,
    port: process.env.MAIL_PORT,
    auth: {
        user: process.env.MAIL_USER,
        pass: process.env.MAIL_PASSWORD,
    },
});

module.exports = transporter;
"#;

pub fn configure(selection: &str) -> Result<AddonOutcome> {
    if selection.is_empty() {
        return Ok(AddonOutcome::skip());
    }

    let client = MailClient::parse(selection)?;

    Ok(AddonOutcome {
        dependencies: vec![client.as_str().to_string()],
        file: Some(GeneratedFile {
            relative_path: MAIL_SERVICE_PATH,
            contents: MAIL_SETUP.to_string(),
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_skips() {
        let outcome = configure("").unwrap();
        assert!(outcome.dependencies.is_empty());
        assert!(outcome.file.is_none());
    }

    #[test]
    fn invalid_selection_is_fatal() {
        let err = configure("carrier-pigeon").unwrap_err();
        assert!(err.to_string().contains("nodemailer"));
    }

    #[test]
    fn selection_is_appended_as_dependency_name() {
        let outcome = configure("postmark").unwrap();
        assert_eq!(outcome.dependencies, ["postmark"]);
    }

    #[test]
    fn transport_file_is_identical_for_every_provider() {
        let a = configure("nodemailer").unwrap().file.unwrap();
        let b = configure("sendgrid").unwrap().file.unwrap();
        assert_eq!(a, b);
        assert_eq!(a.relative_path, MAIL_SERVICE_PATH);
        assert!(a.contents.contains("MAIL_HOST"));
        assert!(a.contents.contains("MAIL_PORT"));
    }
}
