use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use importscope::project::{check_project, CheckOptions};
use importscope::report::{render, ReportFormat};

#[derive(Parser)]
#[command(name = "importscope")]
#[command(author = "Zachary Woods <143150513+zach-fau@users.noreply.github.com>")]
#[command(version)]
#[command(about = "Find default imports of modules that have no default export", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check default imports in a project
    Check {
        /// Path to check (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format: text or json
        #[arg(short, long, default_value_t = ReportFormat::Text)]
        format: ReportFormat,

        /// Re-read every imported module instead of caching its exports for the run
        #[arg(long)]
        no_cache: bool,
    },
    /// Show version information
    Version,
}

fn main() -> ExitCode {
    importscope::logging::init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Some(Commands::Check {
            path,
            format,
            no_cache,
        }) => {
            let options = CheckOptions { cache: !no_cache };
            let report = check_project(&path, options)
                .with_context(|| format!("failed to check {}", path.display()))?;

            render(format, &report, &mut io::stdout().lock())
                .context("failed to write report")?;

            Ok(if report.has_diagnostics() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            })
        }
        Some(Commands::Version) => {
            println!("importscope v{}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
        None => {
            println!("ImportScope - default import checker");
            println!("Run 'importscope check <path>' to check a project");
            println!("Run 'importscope --help' for more information");
            Ok(ExitCode::SUCCESS)
        }
    }
}
