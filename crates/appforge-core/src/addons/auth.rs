//! Authentication add-on
//!
//! A validated selection maps through the provider table to its dependency
//! list and generates a middleware exposing `verifyAuthToken`: 401 on a
//! missing or malformed bearer token, 401 with the failure reason when
//! verification fails, 500 with a generic message on unexpected errors.

use super::{AddonOutcome, GeneratedFile};
use crate::catalog::AuthProvider;
use crate::error::Result;

/// Project-relative path of the generated middleware
pub const AUTH_MIDDLEWARE_PATH: &str = "src/middlewares/authentication.js";

const AUTH_SETUP: &str = r#"const jwt = require('jsonwebtoken');

const secretKey = process.env.SECRET_KEY;

module.exports = {
    verifyAuthToken: async (req, res, next) => {
        try {
            if (!req.headers.authorization) {
                return res.status(401).send({ status: false, message: 'Token required.' });
            }

            const token = req.header('Authorization').replace('Bearer ', '');
            if (!token) {
                return res.status(401).send({ status: false, message: 'Token required.' });
            }

            jwt.verify(token, secretKey, (err, verified) => {
                if (err) {
                    return res.status(401).send({ status: false, message: err.message });
                }

                req.verified = { token };
                next();
            });
        } catch (error) {
            console.log('#auth_token_error:', error.message);
            return res.status(500).send({ status: false, message: 'There has been an error. Please try again later.' });
        }
    },
};
"#;

pub fn configure(selection: &str) -> Result<AddonOutcome> {
    if selection.is_empty() {
        return Ok(AddonOutcome::skip());
    }

    let provider = AuthProvider::parse(selection)?;

    Ok(AddonOutcome {
        dependencies: provider
            .dependencies()
            .iter()
            .map(|d| d.to_string())
            .collect(),
        file: Some(GeneratedFile {
            relative_path: AUTH_MIDDLEWARE_PATH,
            contents: AUTH_SETUP.to_string(),
        }),
    })
}
