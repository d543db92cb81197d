use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use optic_desk::app::App;
use optic_desk::config::Config;
use optic_desk::notifications::{LogSink, Notifier};
use optic_desk::wizard::WorkflowKind;
use optic_desk::{logging, replay, workflows};

#[derive(Parser)]
#[command(name = "optic-desk")]
#[command(about = "Counter wizards for optical retail: orders, returns, transfers, offers")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Workflow to open (defaults to wizard.default_workflow)
    #[arg(short, long)]
    workflow: Option<WorkflowKind>,
}

#[derive(Subcommand)]
enum Commands {
    /// List workflows with their steps and product mapping
    Workflows {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run navigation commands against a fresh workflow and print the result
    Replay {
        /// Workflow to mount (order, sales-return, stock-transfer-out, ...)
        workflow: WorkflowKind,

        /// Commands: "goto N", "next", "prev", "sub N", "next-sub",
        /// "prev-sub", "product N", "remount"
        #[arg(required = true)]
        commands: Vec<String>,
    },

    /// Write the effective config to .optic-desk/config.toml
    Init {
        /// Overwrite an existing project config
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (needed for logging setup)
    let mut config = Config::load(cli.config.as_deref())?;

    // Determine if we're running in TUI mode (no subcommand)
    let is_tui_mode = cli.command.is_none();

    // Initialize logging (file-based for TUI, stderr for CLI)
    let logging_handle = logging::init_logging(&config, is_tui_mode, cli.debug)?;

    match cli.command {
        Some(Commands::Workflows { json }) => {
            cmd_workflows(json)?;
        }
        Some(Commands::Replay { workflow, commands }) => {
            cmd_replay(&config, workflow, &commands)?;
        }
        Some(Commands::Init { force }) => {
            if let Some(workflow) = cli.workflow {
                config.wizard.default_workflow = workflow;
            }
            cmd_init(&config, force)?;
        }
        None => {
            // No subcommand = launch the wizard screen
            run_tui(config, cli.workflow, logging_handle.log_file_path).await?;
        }
    }

    Ok(())
}

async fn run_tui(
    config: Config,
    workflow: Option<WorkflowKind>,
    log_file_path: Option<PathBuf>,
) -> Result<()> {
    let mut app = App::new(config, workflow);
    let result = app.run().await;

    // Print log file path on exit if logs were written
    if let Some(log_path) = log_file_path {
        if let Ok(metadata) = log_path.metadata() {
            if metadata.len() > 0 {
                eprintln!("Session log: {}", log_path.display());
            }
        }
    }

    result
}

fn cmd_workflows(json: bool) -> Result<()> {
    let descriptions: Vec<_> = WorkflowKind::all()
        .iter()
        .map(|kind| workflows::describe(*kind))
        .collect();

    if json {
        let out = serde_json::to_string_pretty(&descriptions)
            .context("Failed to serialize workflow list")?;
        println!("{out}");
        return Ok(());
    }

    for description in &descriptions {
        println!("{} ({})", description.label, description.kind);
        println!("{}", "─".repeat(48));
        for step in &description.steps {
            let marker = if step.product_step { " *" } else { "" };
            println!(
                "  {}. {}{} [{} sub-step{}]",
                step.number,
                step.title,
                marker,
                step.sub_steps,
                if step.sub_steps == 1 { "" } else { "s" }
            );
        }
        if !description.products.is_empty() {
            let mapping: Vec<String> = description
                .products
                .iter()
                .map(|(kind, sub)| format!("{}={} -> {}", kind.code(), kind.label(), sub))
                .collect();
            println!("  products: {}", mapping.join(", "));
        }
        println!();
    }

    Ok(())
}

fn cmd_replay(config: &Config, workflow: WorkflowKind, commands: &[String]) -> Result<()> {
    // No screen in CLI mode; toasts go to the log only
    let notifier = Notifier::disabled().with_sink(std::sync::Arc::new(LogSink::new(
        config.notifications.log_toasts,
    )));

    let outcome = replay::run(workflow, commands, &notifier)
        .context("Failed to serialize workflow snapshot")?;

    for rejection in &outcome.rejected {
        eprintln!("rejected '{}': {}", rejection.command, rejection.reason);
    }

    let out = serde_json::to_string_pretty(&outcome.snapshot)
        .context("Failed to serialize workflow snapshot")?;
    println!("{out}");

    Ok(())
}

fn cmd_init(config: &Config, force: bool) -> Result<()> {
    let path = Config::project_config_path();
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    config.save()?;
    tracing::info!(path = %path.display(), "project config written");
    println!(
        "Wrote {} (default workflow: {})",
        path.display(),
        config.wizard.default_workflow
    );

    Ok(())
}
