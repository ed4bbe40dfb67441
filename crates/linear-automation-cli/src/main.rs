#[cfg(target_env = "musl")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::Context;
use clap::Parser;
use linear_automation_core::error::ERROR_TAG;
use linear_automation_core::output::commands;
use std::io::Write;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "linear-automation",
    version,
    about = "Comment on the Linear issue linked to a pull request"
)]
struct Cli {
    /// Log filter directive (e.g. "debug", "linear_automation_core=trace")
    #[arg(long, global = true, env = "LINEAR_AUTOMATION_LOG")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Run the action from INPUT_* variables (default)
    Run,
    /// Print the Linear issue id encoded in a branch name
    Extract(ExtractArgs),
}

#[derive(clap::Args)]
struct ExtractArgs {
    /// Branch name, e.g. feature/eng-1038-my-issue-branch
    branch: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());
    install_panic_reporter();

    let result = match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_action(),
        Commands::Extract(args) => Ok(exit_code(run_extract(&args))),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            // Runner-level failure before the action could report anything itself
            tracing::error!("{e:#}");
            println!("{}", commands::error(&format!("{ERROR_TAG}: {e}")));
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout stays reserved for workflow commands
fn init_tracing(directive: Option<&str>) {
    let directive = directive
        .map(str::to_string)
        .unwrap_or_else(|| default_directive(std::env::var("RUNNER_DEBUG").ok().as_deref()));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// `debug` when the workflow was re-run with debug logging, `info` otherwise
fn default_directive(runner_debug: Option<&str>) -> String {
    match runner_debug {
        Some("1") => "debug".to_string(),
        _ => "info".to_string(),
    }
}

/// A panic still surfaces as a single `::error::` line
fn install_panic_reporter() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let line = commands::error(&format!("{ERROR_TAG}: unexpected failure: {info}"));
        let _ = writeln!(std::io::stdout(), "{line}");
        default_hook(info);
    }));
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run_action() -> anyhow::Result<ExitCode> {
    let status = linear_automation_core::run_from_env().context("cannot start the action")?;
    Ok(exit_code(status.is_success()))
}

fn run_extract(args: &ExtractArgs) -> bool {
    match linear_automation_core::extract_issue_id(&args.branch) {
        Some(issue_id) => {
            println!("{issue_id}");
            true
        }
        None => {
            eprintln!(
                "no Linear issue id in {:?} (expected {}<team>-<number>[-title])",
                args.branch,
                linear_automation_core::BRANCH_PREFIX
            );
            false
        }
    }
}
