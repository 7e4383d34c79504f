//! wsview: workspace browser over the external `workspace` tool.
//!
//! One-shot subcommands print and exit; `tui` keeps a live tree that
//! re-lists whenever the bridge signals a refresh.

use clap::Parser;
use wsview_bridge::WorkspaceBridge;

mod cli;
mod cmd_action;
mod cmd_json;
mod cmd_ls;
mod config;
mod context;
mod host;
mod tui;

use config::RuntimeConfig;
use host::{CliHost, Launchers};

/// Install the stderr subscriber. `WSVIEW_LOG` wins over `RUST_LOG`.
fn init_tracing() {
    let filter = std::env::var("WSVIEW_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    let config = RuntimeConfig::from_cli(&args)?;

    let command = args
        .command
        .unwrap_or_else(|| cli::Command::Ls(cli::LsOpts::default()));

    // Log lines would tear the alternate screen unless asked for.
    if !matches!(command, cli::Command::Tui) || std::env::var_os("WSVIEW_LOG").is_some() {
        init_tracing();
    }

    let assume_yes = matches!(command, cli::Command::Delete(ref opts) if opts.yes);
    let bridge = WorkspaceBridge::with_config(
        config.workspace_executor(),
        CliHost::new(Launchers::from_config(&config), assume_yes),
        config.bridge_config(),
    );

    let exit_code = match command {
        cli::Command::Ls(opts) => {
            let use_color = context::resolve_color(&opts.color);
            cmd_ls::cmd_ls(&bridge, use_color).await?;
            0
        }
        cli::Command::Json => {
            cmd_json::cmd_json(&bridge).await?;
            0
        }
        cli::Command::BaseDir => {
            cmd_action::cmd_base_dir(&bridge).await?;
            0
        }
        cli::Command::Open(arg) => cmd_action::cmd_open(&bridge, &arg.name).await?,
        cli::Command::Warm(arg) => cmd_action::cmd_warm(&bridge, &arg.name).await?,
        cli::Command::Doctor => cmd_action::cmd_doctor(&bridge).await,
        cli::Command::Delete(opts) => cmd_action::cmd_delete(&bridge, &opts.name).await?,
        cli::Command::Tui => {
            tui::run_tui(&config).await?;
            0
        }
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
