use clap::{Parser, Subcommand};
use log::debug;
use crate::bitrix::{HttpTransport, StageAdder};
use crate::cli::error::{user_error, validate_stage_name};
use crate::cli::output::{format_banner, format_preview};
use crate::config::Config;
use crate::models::{validate_color, StageRequest};
use anyhow::{Context, Result};

#[derive(Parser)]
#[command(name = "stagehand")]
#[command(about = "Add stages to the Applicants pipeline through a Bitrix24 webhook")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Webhook base URL (overrides STAGEHAND_WEBHOOK and ~/.stagehand/rc)
    #[arg(long, global = true)]
    pub webhook: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a stage to the Applicants pipeline
    Add {
        /// Stage name (e.g., "Phone Screen")
        name: String,
        /// Sort position among existing stages (e.g., 25 to land between 20 and 30)
        #[arg(allow_negative_numbers = true)]
        sort: i64,
        /// Hex color code (defaults to green #47A447)
        #[arg(long)]
        color: Option<String>,
    },
    /// Show the status id and fields a stage would be sent with, without sending it
    Preview {
        /// Stage name
        name: String,
        /// Sort position
        #[arg(allow_negative_numbers = true)]
        sort: Option<i64>,
        /// Hex color code
        #[arg(long)]
        color: Option<String>,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    handle_command(cli)
}

fn handle_command(cli: Cli) -> Result<()> {
    match cli.command {
        None => {
            print!("{}", format_banner());
            Ok(())
        }
        Some(Commands::Add { name, sort, color }) => {
            handle_stage_add(cli.webhook.as_deref(), name, sort, color)
        }
        Some(Commands::Preview { name, sort, color }) => handle_stage_preview(name, sort, color),
    }
}

/// Check user input before anything is sent
fn build_request(name: String, sort: i64, color: Option<String>) -> StageRequest {
    if let Err(e) = validate_stage_name(&name) {
        user_error(&e);
    }
    if let Some(color) = color.as_deref() {
        if let Err(e) = validate_color(color) {
            user_error(&e);
        }
    }
    StageRequest::new(name, sort, color.as_deref())
}

fn handle_stage_add(webhook: Option<&str>, name: String, sort: i64, color: Option<String>) -> Result<()> {
    let request = build_request(name, sort, color);

    let config = Config::resolve(webhook)?;
    let transport = HttpTransport::new(&config.webhook, config.timeout)
        .context("Failed to set up webhook client")?;
    let adder = StageAdder::new(transport);

    // A rejected stage has already been reported; it does not change the exit code
    let added = adder.add_stage(&request.name, request.sort_order, Some(&request.color))?;
    debug!("Stage {} added: {}", request.status_id(), added);

    Ok(())
}

fn handle_stage_preview(name: String, sort: Option<i64>, color: Option<String>) -> Result<()> {
    let request = build_request(name, sort.unwrap_or(0), color);
    print!("{}", format_preview(&request, sort.is_some()));
    Ok(())
}
