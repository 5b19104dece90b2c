//! shellkit-create - Scaffold a new Electron project and install its dependencies

use anyhow::Result;
use clap::Parser;
use shellkit_core::logging::{init_logging, LogLevel};
use shellkit_core::tui::CreateArgs;
use shellkit_core::{Database, ElectronProduct};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "shellkit-create")]
#[command(about = "CLI for scaffolding Electron projects")]
#[command(version)]
pub struct Args {
    /// Project name (also the name of the created directory)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Database driver to include: sqlite, mysql, mssql or none
    #[arg(long)]
    pub database: Option<Database>,

    /// Directory to create the project in
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Author written to package.json
    #[arg(long)]
    pub author: Option<String>,

    /// Write the project files without running npm install
    #[arg(long = "skip-install")]
    pub skip_install: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,

    /// Log verbosity (overrides SHELLKIT_LOG)
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevel>,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            name: args.name,
            database: args.database,
            directory: args.directory,
            author: args.author,
            skip_install: args.skip_install,
            yes: args.yes,
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
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
    init_logging(args.log_level)?;

    let result = shellkit_core::run_create(&ElectronProduct, args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if result? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
