//! Appforge CLI - scaffolding for JavaScript application projects

use anyhow::Result;
use appforge_core::catalog::{AuthProvider, CssLibrary, Database, Framework, MailClient};
use appforge_core::tui::CreateArgs;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "appforge")]
#[command(about = "CLI for scaffolding JavaScript application projects")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new application project
    Create(CliCreateArgs),
    /// List supported frameworks and add-ons
    Frameworks,
}

#[derive(Parser, Debug)]
pub struct CliCreateArgs {
    /// Application name (directory and package name)
    pub app_name: Option<String>,

    /// Framework to scaffold (express, react, hapi, nest, next)
    #[arg(short, long)]
    pub framework: Option<String>,

    /// Local directory holding the framework templates (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Extra dependencies to install, space or comma delimited
    #[arg(long = "deps")]
    pub extra_deps: Option<String>,

    /// Database add-on (mongo, postgres, mysql, mssql, sqlite, maria)
    #[arg(long)]
    pub database: Option<String>,

    /// Mail add-on (nodemailer, sendgrid, postmark)
    #[arg(long)]
    pub mail: Option<String>,

    /// Authentication add-on (jwt, passport, auth0)
    #[arg(long)]
    pub auth: Option<String>,

    /// CSS library add-on (bootstrap, antd, material)
    #[arg(long)]
    pub css: Option<String>,

    /// Auto-confirm the destructive overwrite prompt
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            app_name: args.app_name,
            framework: args.framework,
            template_dir: args.template_dir,
            extra_deps: args.extra_deps,
            database: args.database,
            mail: args.mail,
            auth: args.auth,
            css: args.css,
            yes: args.yes,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    // Handle subcommands
    match args.command {
        Some(Command::Create(create_args)) => {
            let result = appforge_core::run(create_args.into(), CLI_VERSION).await;

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
        Some(Command::Frameworks) => {
            print_catalogs();
            Ok(())
        }
        None => {
            // No subcommand provided, default to create behavior (interactive mode)
            let result = appforge_core::run(CreateArgs::default(), CLI_VERSION).await;

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
    }
}

fn print_catalogs() {
    println!("{}", "Frameworks".bold());
    for framework in Framework::ALL {
        let class = if framework.is_backend() {
            "backend"
        } else {
            "frontend"
        };
        println!(
            "  {:<10} {:<9} defaults: {}",
            framework.as_str().cyan(),
            class.dimmed(),
            framework.default_dependencies().join(", ")
        );
    }

    println!();
    println!("{}", "Add-ons".bold());
    println!(
        "  {:<10} {}",
        "database".cyan(),
        Database::ALL.map(|d| d.as_str()).join(", ")
    );
    println!(
        "  {:<10} {}",
        "mail".cyan(),
        MailClient::ALL.map(|m| m.as_str()).join(", ")
    );
    println!(
        "  {:<10} {}",
        "auth".cyan(),
        AuthProvider::ALL.map(|a| a.as_str()).join(", ")
    );
    println!(
        "  {:<10} {}",
        "css".cyan(),
        CssLibrary::ALL.map(|c| c.as_str()).join(", ")
    );
}
