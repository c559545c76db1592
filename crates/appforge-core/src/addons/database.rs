//! Database add-on
//!
//! `mongo` gets a document-store connector driven by `DATABASE_URL`;
//! relational selections get an ORM connector parameterized by dialect with
//! an authentication-failure handler that logs instead of crashing.

use super::{AddonOutcome, GeneratedFile};
use crate::catalog::Database;
use crate::error::Result;

/// Project-relative path of the generated connector
pub const MODELS_INDEX_PATH: &str = "src/models/index.js";

pub fn configure(selection: &str) -> Result<AddonOutcome> {
    if selection.is_empty() {
        return Ok(AddonOutcome::skip());
    }

    let database = Database::parse(selection)?;
    let contents = match database.dialect() {
        None => mongo_setup(),
        Some(dialect) => sql_setup(dialect),
    };

    Ok(AddonOutcome {
        dependencies: database
            .dependencies()
            .iter()
            .map(|d| d.to_string())
            .collect(),
        file: Some(GeneratedFile {
            relative_path: MODELS_INDEX_PATH,
            contents,
        }),
    })
}

fn mongo_setup() -> String {
    r#"const mongoose = require('mongoose');

mongoose.Promise = global.Promise;
mongoose.connect(process.env.DATABASE_URL, {
    keepAlive: true,
    useUnifiedTopology: true,
    useNewUrlParser: true,
    connectTimeoutMS: 0,
});

const connection = mongoose.connection;
connection.on('error', (err) => {
    console.log('mongoose connection error:', err.message);
});

module.exports = connection;
"#
    .to_string()
}

fn sql_setup(dialect: &str) -> String {
    format!(
        r#"const {{ Sequelize }} = require('sequelize');

const sequelize = new Sequelize(process.env.DATABASE_NAME, process.env.DATABASE_USERNAME, process.env.DATABASE_PASSWORD, {{
    host: process.env.DATABASE_HOST,
    dialect: '{dialect}',
}});

sequelize.authenticate().then(() => {{
    console.log('Database connection established.');
}}).catch((error) => {{
    console.error('Unable to connect to the database:', error);
}});

module.exports = sequelize;
"#
    )
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
        assert!(configure("bogus-db").is_err());
    }

    #[test]
    fn mongo_uses_document_store_connector() {
        let outcome = configure("mongo").unwrap();
        assert_eq!(outcome.dependencies, ["mongoose"]);

        let file = outcome.file.unwrap();
        assert_eq!(file.relative_path, MODELS_INDEX_PATH);
        assert!(file.contents.contains("DATABASE_URL"));
        assert!(file.contents.contains("keepAlive: true"));
        assert!(file.contents.contains("connectTimeoutMS: 0"));
    }

    #[test]
    fn postgres_parameterizes_dialect_and_handles_auth_failure() {
        let outcome = configure("postgres").unwrap();
        assert_eq!(outcome.dependencies, ["sequelize", "pg", "pg-hstore"]);

        let file = outcome.file.unwrap();
        assert!(file.contents.contains("dialect: 'postgres'"));
        assert!(file.contents.contains("sequelize.authenticate()"));
        assert!(file.contents.contains(".catch"));
    }

    #[test]
    fn maria_uses_orm_dialect_name() {
        let outcome = configure("maria").unwrap();
        assert!(outcome.file.unwrap().contents.contains("dialect: 'mariadb'"));
    }
}
