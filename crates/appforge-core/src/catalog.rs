//! Static catalogs of supported frameworks and add-ons
//!
//! Each catalog is a closed enumeration with fixed attributes (template
//! location, dependency lists, backend classification). Parsing a selection
//! that is not in its catalog yields an error carrying the valid options,
//! which the caller reports before aborting the run.

use crate::error::{Error, Result};
use std::fmt;

/// Supported application frameworks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Framework {
    Express,
    React,
    Hapi,
    Nest,
    Next,
}

impl Framework {
    pub const ALL: [Framework; 5] = [
        Framework::Express,
        Framework::React,
        Framework::Hapi,
        Framework::Nest,
        Framework::Next,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::Express => "express",
            Framework::React => "react",
            Framework::Hapi => "hapi",
            Framework::Nest => "nest",
            Framework::Next => "next",
        }
    }

    pub fn parse(value: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == value)
            .ok_or_else(|| Error::InvalidSelection {
                category: "framework",
                value: value.to_string(),
                supported: supported_list(Self::ALL.iter().map(|f| f.as_str())),
            })
    }

    /// Server-side frameworks get the database/mail/auth add-on flow;
    /// the rest get the CSS add-on flow and a browserslist manifest.
    pub fn is_backend(&self) -> bool {
        matches!(self, Framework::Express | Framework::Hapi | Framework::Nest)
    }

    /// Template directory name under the template root
    pub fn template_dir(&self) -> &'static str {
        match self {
            Framework::Express => "express_template",
            Framework::React => "react_template",
            Framework::Hapi => "hapi_template",
            Framework::Nest => "nest_template",
            Framework::Next => "next_template",
        }
    }

    /// Default dependency list, in install order
    pub fn default_dependencies(&self) -> &'static [&'static str] {
        match self {
            Framework::Express => &["express", "dotenv", "cors"],
            Framework::React => &["react", "react-dom", "react-scripts"],
            Framework::Hapi => &["@hapi/hapi", "dotenv"],
            Framework::Nest => &[
                "@nestjs/common",
                "@nestjs/core",
                "@nestjs/platform-express",
                "reflect-metadata",
                "rxjs",
            ],
            Framework::Next => &["next", "react", "react-dom"],
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Supported databases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Database {
    Mongo,
    Postgres,
    Mysql,
    Mssql,
    Sqlite,
    Maria,
}

impl Database {
    pub const ALL: [Database; 6] = [
        Database::Mongo,
        Database::Postgres,
        Database::Mysql,
        Database::Mssql,
        Database::Sqlite,
        Database::Maria,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Database::Mongo => "mongo",
            Database::Postgres => "postgres",
            Database::Mysql => "mysql",
            Database::Mssql => "mssql",
            Database::Sqlite => "sqlite",
            Database::Maria => "maria",
        }
    }

    pub fn parse(value: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == value)
            .ok_or_else(|| Error::InvalidSelection {
                category: "database",
                value: value.to_string(),
                supported: supported_list(Self::ALL.iter().map(|d| d.as_str())),
            })
    }

    pub fn dependencies(&self) -> &'static [&'static str] {
        match self {
            Database::Mongo => &["mongoose"],
            Database::Postgres => &["sequelize", "pg", "pg-hstore"],
            Database::Mysql => &["sequelize", "mysql2"],
            Database::Mssql => &["sequelize", "tedious"],
            Database::Sqlite => &["sequelize", "sqlite3"],
            Database::Maria => &["sequelize", "mariadb"],
        }
    }

    /// ORM dialect name for relational databases; `None` for the
    /// document store.
    pub fn dialect(&self) -> Option<&'static str> {
        match self {
            Database::Mongo => None,
            Database::Postgres => Some("postgres"),
            Database::Mysql => Some("mysql"),
            Database::Mssql => Some("mssql"),
            Database::Sqlite => Some("sqlite"),
            Database::Maria => Some("mariadb"),
        }
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Supported mail clients
///
/// Catalog entries double as the npm package name appended to the
/// dependency set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailClient {
    Nodemailer,
    Sendgrid,
    Postmark,
}

impl MailClient {
    pub const ALL: [MailClient; 3] = [
        MailClient::Nodemailer,
        MailClient::Sendgrid,
        MailClient::Postmark,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MailClient::Nodemailer => "nodemailer",
            MailClient::Sendgrid => "sendgrid",
            MailClient::Postmark => "postmark",
        }
    }

    pub fn parse(value: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == value)
            .ok_or_else(|| Error::InvalidSelection {
                category: "mail client",
                value: value.to_string(),
                supported: supported_list(Self::ALL.iter().map(|m| m.as_str())),
            })
    }
}

impl fmt::Display for MailClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Supported authentication providers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthProvider {
    Jwt,
    Passport,
    Auth0,
}

impl AuthProvider {
    pub const ALL: [AuthProvider; 3] =
        [AuthProvider::Jwt, AuthProvider::Passport, AuthProvider::Auth0];

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Jwt => "jwt",
            AuthProvider::Passport => "passport",
            AuthProvider::Auth0 => "auth0",
        }
    }

    pub fn parse(value: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == value)
            .ok_or_else(|| Error::InvalidSelection {
                category: "authentication provider",
                value: value.to_string(),
                supported: supported_list(Self::ALL.iter().map(|a| a.as_str())),
            })
    }

    /// The generated middleware verifies tokens with `jsonwebtoken`, so
    /// every provider pulls it in alongside its own packages.
    pub fn dependencies(&self) -> &'static [&'static str] {
        match self {
            AuthProvider::Jwt => &["jsonwebtoken"],
            AuthProvider::Passport => &["passport", "passport-jwt", "jsonwebtoken"],
            AuthProvider::Auth0 => &["auth0", "jsonwebtoken"],
        }
    }
}

impl fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Supported CSS libraries (frontend frameworks only)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CssLibrary {
    Bootstrap,
    Antd,
    Material,
}

impl CssLibrary {
    pub const ALL: [CssLibrary; 3] =
        [CssLibrary::Bootstrap, CssLibrary::Antd, CssLibrary::Material];

    pub fn as_str(&self) -> &'static str {
        match self {
            CssLibrary::Bootstrap => "bootstrap",
            CssLibrary::Antd => "antd",
            CssLibrary::Material => "material",
        }
    }

    pub fn parse(value: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == value)
            .ok_or_else(|| Error::InvalidSelection {
                category: "css library",
                value: value.to_string(),
                supported: supported_list(Self::ALL.iter().map(|c| c.as_str())),
            })
    }

    pub fn packages(&self) -> &'static [&'static str] {
        match self {
            CssLibrary::Bootstrap => &["bootstrap"],
            CssLibrary::Antd => &["antd"],
            CssLibrary::Material => &["@mui/material", "@emotion/react", "@emotion/styled"],
        }
    }
}

impl fmt::Display for CssLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Comma-joined option list for diagnostics and prompt text
pub fn supported_list<'a>(options: impl Iterator<Item = &'a str>) -> String {
    options.collect::<Vec<_>>().join(", ")
}
