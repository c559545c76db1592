//! Pipeline driver
//!
//! Runs the whole generation flow for one request: destination guard,
//! template copy, dependency resolution, add-on configuration, manifest
//! write, dependency install. Every stage returns `Result` and the driver
//! short-circuits on the first failure; partial state on disk after an
//! abort is acceptable because the destination guard offers delete-and-retry
//! on the next invocation.

use crate::addons;
use crate::catalog::{self, AuthProvider, CssLibrary, Database, Framework, MailClient};
use crate::error::{Error, Result};
use crate::guard;
use crate::install::Installer;
use crate::manifest::{self, PackageManifest};
use crate::prompt::Prompter;
use crate::resolve::DependencySet;
use crate::templates;
use colored::Colorize;
use std::fmt;
use std::path::PathBuf;

/// Validated application name, used as both directory name and manifest
/// name field.
///
/// Follows npm package-name restrictions: lowercase ASCII alphanumerics
/// plus '-', '_' and '.', no path separators, no leading dot, at most
/// 214 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppName(String);

impl AppName {
    pub fn new(name: &str) -> Result<Self> {
        if Self::is_valid(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(Error::InvalidAppName(name.to_string()))
        }
    }

    fn is_valid(name: &str) -> bool {
        if name.is_empty() || name.len() > 214 {
            return false;
        }
        if name == "." || name == ".." || name.starts_with('.') {
            return false;
        }
        if name.contains('/') || name.contains('\\') || name.contains('\0') {
            return false;
        }
        name.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '_' | '.'))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One generation run's input, immutable once validated
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub app_name: AppName,
    pub framework: Framework,
}

/// Pre-supplied answers for the interactive questions. `None` means the
/// question is asked through the prompter; `Some` values come from CLI
/// flags and skip the prompt.
#[derive(Debug, Clone, Default)]
pub struct AddonAnswers {
    pub extra_deps: Option<String>,
    pub database: Option<String>,
    pub mail: Option<String>,
    pub auth: Option<String>,
    pub css: Option<String>,
}

/// What a successful run produced
#[derive(Debug)]
pub struct GenerationReport {
    pub target: PathBuf,
    pub copied_files: usize,
    pub generated_files: Vec<&'static str>,
    pub dependencies: DependencySet,
}

pub struct Generator<'a> {
    prompter: &'a dyn Prompter,
    installer: &'a dyn Installer,
    template_root: PathBuf,
    workdir: PathBuf,
}

impl<'a> Generator<'a> {
    pub fn new(
        prompter: &'a dyn Prompter,
        installer: &'a dyn Installer,
        template_root: PathBuf,
        workdir: PathBuf,
    ) -> Self {
        Self {
            prompter,
            installer,
            template_root,
            workdir,
        }
    }

    pub async fn generate(
        &self,
        request: &GenerationRequest,
        answers: AddonAnswers,
    ) -> Result<GenerationReport> {
        let target = self.workdir.join(request.app_name.as_str());

        // Stage 1: destination guard
        guard::prepare_destination(&target, self.prompter)?;

        // Stage 2: template copy
        let source = templates::template_source(&self.template_root, request.framework)?;
        let copied_files = templates::copy_template(&source, &target)?;
        println!(
            "{}",
            format!("Copied {copied_files} template files into {}", target.display()).dimmed()
        );

        // Stage 3: dependency resolution and add-ons.
        // Final order is fixed: framework defaults, add-on packages, extras.
        let mut dependencies = DependencySet::for_framework(request.framework);
        let mut generated_files = Vec::new();

        let extra_input = self.answer(
            answers.extra_deps,
            "'SPACE' delimited list of extra dependencies to include?",
        )?;

        if request.framework.is_backend() {
            let database = self.answer(
                answers.database,
                &format!(
                    "Include database set up? Supported databases: {}",
                    catalog::supported_list(Database::ALL.iter().map(|d| d.as_str()))
                ),
            )?;
            if let Some(path) =
                addons::database::configure(database.trim())?.apply(&mut dependencies, &target)?
            {
                generated_files.push(path);
            }

            let mail = self.answer(
                answers.mail,
                &format!(
                    "Include mail set up? Supported mail clients: {}",
                    catalog::supported_list(MailClient::ALL.iter().map(|m| m.as_str()))
                ),
            )?;
            if let Some(path) =
                addons::mail::configure(mail.trim())?.apply(&mut dependencies, &target)?
            {
                generated_files.push(path);
            }

            let auth = self.answer(
                answers.auth,
                &format!(
                    "Include authentication set up? Supported providers: {}",
                    catalog::supported_list(AuthProvider::ALL.iter().map(|a| a.as_str()))
                ),
            )?;
            if let Some(path) =
                addons::auth::configure(auth.trim())?.apply(&mut dependencies, &target)?
            {
                generated_files.push(path);
            }
        } else {
            let css = self.answer(
                answers.css,
                &format!(
                    "CSS library to include? Supported libraries: {}",
                    catalog::supported_list(CssLibrary::ALL.iter().map(|c| c.as_str()))
                ),
            )?;
            if let Some(path) =
                addons::css::configure(css.trim())?.apply(&mut dependencies, &target)?
            {
                generated_files.push(path);
            }
        }

        dependencies.merge_extra_input(&extra_input);

        // Stage 4: manifest write, completed before the install starts
        let package_manifest =
            PackageManifest::new(request.app_name.as_str(), request.framework);
        manifest::write_manifest(&target, &package_manifest).await?;

        // Stage 5: dependency install
        self.installer.install(dependencies.as_slice(), &target)?;

        println!(
            "{}",
            format!(
                "{} app '{}' generated successfully.",
                request.framework, request.app_name
            )
            .green()
        );

        Ok(GenerationReport {
            target,
            copied_files,
            generated_files,
            dependencies,
        })
    }

    fn answer(&self, preset: Option<String>, message: &str) -> Result<String> {
        match preset {
            Some(value) => Ok(value),
            None => self.prompter.ask(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addons::auth::AUTH_MIDDLEWARE_PATH;
    use crate::addons::database::MODELS_INDEX_PATH;
    use crate::install::testing::RecordingInstaller;
    use crate::prompt::testing::ScriptedPrompter;
    use serde_json::Value;
    use std::fs;
    use std::path::Path;

    fn seed_templates(root: &Path) {
        for framework in Framework::ALL {
            let dir = root.join(framework.template_dir());
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("server.js"), "// entry").unwrap();
        }
    }

    fn request(name: &str, framework: Framework) -> GenerationRequest {
        GenerationRequest {
            app_name: AppName::new(name).unwrap(),
            framework,
        }
    }

    #[tokio::test]
    async fn express_with_postgres_produces_expected_set_and_connector() {
        let templates = tempfile::tempdir().unwrap();
        seed_templates(templates.path());
        let workdir = tempfile::tempdir().unwrap();

        let prompter = ScriptedPrompter::new(&[], &[]);
        let installer = RecordingInstaller::succeeding();
        let generator = Generator::new(
            &prompter,
            &installer,
            templates.path().to_path_buf(),
            workdir.path().to_path_buf(),
        );

        let report = generator
            .generate(
                &request("my-api", Framework::Express),
                AddonAnswers {
                    extra_deps: Some(String::new()),
                    database: Some("postgres".to_string()),
                    mail: Some(String::new()),
                    auth: Some(String::new()),
                    css: None,
                },
            )
            .await
            .unwrap();

        let expected = ["express", "dotenv", "cors", "sequelize", "pg", "pg-hstore"];
        assert_eq!(
            report.dependencies.as_slice(),
            expected.map(String::from).as_slice()
        );

        let connector =
            fs::read_to_string(report.target.join(MODELS_INDEX_PATH)).unwrap();
        assert!(connector.contains("dialect: 'postgres'"));

        let manifest: Value =
            serde_json::from_slice(&fs::read(report.target.join("package.json")).unwrap())
                .unwrap();
        assert_eq!(manifest["scripts"]["start"], "node server.js");
        assert!(manifest.get("browserslist").is_none());

        let calls = installer.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, expected.map(String::from).as_slice());
        assert_eq!(calls[0].1, report.target);
    }

    #[tokio::test]
    async fn react_with_material_and_extras_keeps_fixed_order() {
        let templates = tempfile::tempdir().unwrap();
        seed_templates(templates.path());
        let workdir = tempfile::tempdir().unwrap();

        let prompter = ScriptedPrompter::new(&[], &[]);
        let installer = RecordingInstaller::succeeding();
        let generator = Generator::new(
            &prompter,
            &installer,
            templates.path().to_path_buf(),
            workdir.path().to_path_buf(),
        );

        let report = generator
            .generate(
                &request("my-ui", Framework::React),
                AddonAnswers {
                    extra_deps: Some("lodash, axios".to_string()),
                    css: Some("material".to_string()),
                    ..AddonAnswers::default()
                },
            )
            .await
            .unwrap();

        let expected = [
            "react",
            "react-dom",
            "react-scripts",
            "@mui/material",
            "@emotion/react",
            "@emotion/styled",
            "lodash",
            "axios",
        ];
        assert_eq!(
            report.dependencies.as_slice(),
            expected.map(String::from).as_slice()
        );

        let manifest: Value =
            serde_json::from_slice(&fs::read(report.target.join("package.json")).unwrap())
                .unwrap();
        assert_eq!(
            manifest["browserslist"]["production"],
            serde_json::json!([">0.2%", "not dead", "not op_mini all"])
        );
        assert_eq!(
            manifest["browserslist"]["development"],
            serde_json::json!([
                "last 1 chrome version",
                "last 1 firefox version",
                "last 1 safari version"
            ])
        );
        assert!(report.generated_files.is_empty());
    }

    #[tokio::test]
    async fn declined_overwrite_leaves_directory_untouched() {
        let templates = tempfile::tempdir().unwrap();
        seed_templates(templates.path());
        let workdir = tempfile::tempdir().unwrap();

        let target = workdir.path().join("my-api");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("precious.txt"), "keep me").unwrap();

        let prompter = ScriptedPrompter::new(&[false], &[]);
        let installer = RecordingInstaller::succeeding();
        let generator = Generator::new(
            &prompter,
            &installer,
            templates.path().to_path_buf(),
            workdir.path().to_path_buf(),
        );

        let err = generator
            .generate(&request("my-api", Framework::Express), AddonAnswers::default())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Aborted));
        assert!(target.join("precious.txt").exists());
        assert!(!target.join("server.js").exists());
        assert!(installer.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn invalid_database_aborts_before_generated_files_and_install() {
        let templates = tempfile::tempdir().unwrap();
        seed_templates(templates.path());
        let workdir = tempfile::tempdir().unwrap();

        let prompter = ScriptedPrompter::new(&[], &[]);
        let installer = RecordingInstaller::succeeding();
        let generator = Generator::new(
            &prompter,
            &installer,
            templates.path().to_path_buf(),
            workdir.path().to_path_buf(),
        );

        let err = generator
            .generate(
                &request("my-api", Framework::Express),
                AddonAnswers {
                    extra_deps: Some(String::new()),
                    database: Some("bogus-db".to_string()),
                    ..AddonAnswers::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, Error::InvalidSelection { .. }));
        let target = workdir.path().join("my-api");
        assert!(!target.join(MODELS_INDEX_PATH).exists());
        assert!(!target.join("package.json").exists());
        assert!(installer.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn backend_answers_flow_through_prompter_when_not_preset() {
        let templates = tempfile::tempdir().unwrap();
        seed_templates(templates.path());
        let workdir = tempfile::tempdir().unwrap();

        // extras, database, mail, auth
        let prompter = ScriptedPrompter::new(&[], &["", "mongo", "nodemailer", "jwt"]);
        let installer = RecordingInstaller::succeeding();
        let generator = Generator::new(
            &prompter,
            &installer,
            templates.path().to_path_buf(),
            workdir.path().to_path_buf(),
        );

        let report = generator
            .generate(&request("my-api", Framework::Express), AddonAnswers::default())
            .await
            .unwrap();

        assert_eq!(
            report.generated_files,
            [
                MODELS_INDEX_PATH,
                crate::addons::mail::MAIL_SERVICE_PATH,
                AUTH_MIDDLEWARE_PATH
            ]
        );
        for dep in ["mongoose", "nodemailer", "jsonwebtoken"] {
            assert!(report.dependencies.as_slice().iter().any(|d| d == dep));
        }
    }

    #[tokio::test]
    async fn installer_failure_propagates() {
        let templates = tempfile::tempdir().unwrap();
        seed_templates(templates.path());
        let workdir = tempfile::tempdir().unwrap();

        let prompter = ScriptedPrompter::new(&[], &["", "", "", ""]);
        let installer = RecordingInstaller::failing(1);
        let generator = Generator::new(
            &prompter,
            &installer,
            templates.path().to_path_buf(),
            workdir.path().to_path_buf(),
        );

        let err = generator
            .generate(&request("my-api", Framework::Express), AddonAnswers::default())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::InstallFailed { code: 1 }));
        // Manifest write completed before the install was attempted.
        assert!(workdir.path().join("my-api/package.json").exists());
    }

    #[test]
    fn app_name_validation() {
        assert!(AppName::new("my-app").is_ok());
        assert!(AppName::new("app_2.0").is_ok());

        assert!(AppName::new("").is_err());
        assert!(AppName::new("My-App").is_err());
        assert!(AppName::new("has space").is_err());
        assert!(AppName::new("../escape").is_err());
        assert!(AppName::new(".hidden").is_err());
        assert!(AppName::new("a/b").is_err());
        assert!(AppName::new(&"a".repeat(215)).is_err());
    }
}
