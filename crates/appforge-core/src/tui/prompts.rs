//! Charm-style CLI prompts using cliclack

use crate::catalog::Framework;
use crate::error::Error;
use crate::generator::{AddonAnswers, AppName, GenerationReport, GenerationRequest, Generator};
use crate::install::NpmInstaller;
use crate::prompt::Prompter;
use crate::runtime;
use crate::templates;
use anyhow::Result;
use std::path::PathBuf;

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Application name (directory and manifest name)
    pub app_name: Option<String>,

    /// Framework to scaffold
    pub framework: Option<String>,

    /// Local directory holding the framework templates
    pub template_dir: Option<PathBuf>,

    /// Extra dependencies, space or comma delimited
    pub extra_deps: Option<String>,

    /// Database add-on selection
    pub database: Option<String>,

    /// Mail add-on selection
    pub mail: Option<String>,

    /// Authentication add-on selection
    pub auth: Option<String>,

    /// CSS library add-on selection
    pub css: Option<String>,

    /// Auto-confirm the destructive overwrite prompt
    pub yes: bool,
}

/// cliclack-backed implementation of the prompt capability
struct CliclackPrompter {
    yes: bool,
}

impl Prompter for CliclackPrompter {
    fn confirm(&self, message: &str) -> crate::Result<bool> {
        if self.yes {
            return Ok(true);
        }
        cliclack::confirm(message)
            .initial_value(false)
            .interact()
            .map_err(Error::from)
    }

    fn ask(&self, message: &str) -> crate::Result<String> {
        cliclack::input(message)
            .placeholder("press enter to skip")
            .default_input("")
            .interact()
            .map_err(Error::from)
    }
}

/// Run the CLI with interactive prompts
pub async fn run(args: CreateArgs, cli_version: &str) -> Result<()> {
    cliclack::intro(format!("appforge {cli_version}"))?;

    // Step 1: Check the package-manager runtime
    let runtimes = runtime::ensure_npm()?;
    let runtime_info: Vec<String> = runtimes
        .iter()
        .map(|r| {
            if r.available {
                format!("{} ({})", r.name, r.version.as_deref().unwrap_or("unknown"))
            } else {
                format!("{} (not installed)", r.name)
            }
        })
        .collect();
    cliclack::log::success(format!("Detected runtimes: {}", runtime_info.join(", ")))?;

    // Step 2: App name
    let app_name = select_app_name(&args)?;

    // Step 3: Framework
    let framework = select_framework(&args)?;

    // Step 4: Run the generation pipeline
    let prompter = CliclackPrompter { yes: args.yes };
    let installer = NpmInstaller;
    let template_root = args
        .template_dir
        .clone()
        .unwrap_or_else(templates::default_template_root);
    let workdir = std::env::current_dir()?;

    let generator = Generator::new(&prompter, &installer, template_root, workdir);
    let request = GenerationRequest {
        app_name,
        framework,
    };
    let answers = AddonAnswers {
        extra_deps: args.extra_deps,
        database: args.database,
        mail: args.mail,
        auth: args.auth,
        css: args.css,
    };

    let report = generator.generate(&request, answers).await?;

    // Step 5: Show next steps
    print_next_steps(&request, &report)?;

    Ok(())
}

fn select_app_name(args: &CreateArgs) -> Result<AppName> {
    if let Some(name) = &args.app_name {
        let app_name = AppName::new(name)?;
        cliclack::log::info(format!("App name: {app_name}"))?;
        return Ok(app_name);
    }

    let input: String = cliclack::input("App name")
        .placeholder("my-app")
        .validate(|value: &String| {
            AppName::new(value).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact()?;

    Ok(AppName::new(&input)?)
}

fn select_framework(args: &CreateArgs) -> Result<Framework> {
    if let Some(framework) = &args.framework {
        let framework = Framework::parse(framework)?;
        cliclack::log::info(format!("Framework: {framework}"))?;
        return Ok(framework);
    }

    let mut select = cliclack::select("Framework");
    for framework in Framework::ALL {
        let hint = if framework.is_backend() {
            "backend"
        } else {
            "frontend"
        };
        select = select.item(framework, framework.as_str(), hint);
    }

    Ok(select.interact()?)
}

fn print_next_steps(request: &GenerationRequest, report: &GenerationReport) -> Result<()> {
    let mut steps = vec![
        format!("cd {}", request.app_name),
        "npm start".to_string(),
    ];

    if !report.generated_files.is_empty() {
        steps.push(format!(
            "Fill in the environment variables referenced by: {}",
            report.generated_files.join(", ")
        ));
    }

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
