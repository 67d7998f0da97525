mod cli_messages;
mod consts;
mod environment;
mod events;
mod gateway;
mod logging;
mod payments;
mod session;
mod stats;
mod ui;
mod workers;

use crate::consts::cli_consts::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::environment::Environment;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the admin console
    Start {
        /// Gateway base URL, overriding the default local gateway
        #[arg(long, value_name = "URL")]
        gateway_url: Option<String>,

        /// Number of payment records shown per page
        #[arg(long, value_name = "N")]
        page_size: Option<u32>,

        /// Run without the terminal UI, printing events to stdout
        #[arg(long)]
        headless: bool,

        /// Paint the dashboard background
        #[arg(long)]
        with_background: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    match args.command {
        Command::Start {
            gateway_url,
            page_size,
            headless,
            with_background,
        } => start(gateway_url, page_size, headless, with_background).await,
    }
}

/// Starts the admin console session.
///
/// # Arguments
/// * `gateway_url` - Optional override for the gateway base URL.
/// * `page_size` - Optional override for records per page.
/// * `headless` - Whether to run without the terminal UI.
/// * `with_background` - Whether to paint the dashboard background.
async fn start(
    gateway_url: Option<String>,
    page_size: Option<u32>,
    headless: bool,
    with_background: bool,
) -> Result<(), Box<dyn Error>> {
    if let Some(url) = &gateway_url {
        if !environment::is_valid_gateway_url(url) {
            let err_msg = format!(
                "Invalid gateway URL: {}. It should start with 'http://' or 'https://'.",
                url
            );
            print_cmd_error!("Invalid gateway URL", err_msg.as_str());
            return Err(Box::from(err_msg));
        }
        print_cmd_info!("Gateway override", "{}", url);
    }
    let environment = Environment::from_url_override(gateway_url);

    let page_size = match page_size {
        Some(n) if !(1..=MAX_PAGE_SIZE).contains(&n) => {
            let clamped = n.clamp(1, MAX_PAGE_SIZE);
            print_cmd_warn!(
                "Page size",
                "{} is out of range, using {} (allowed: 1-{})",
                n,
                clamped,
                MAX_PAGE_SIZE
            );
            clamped
        }
        Some(n) => n,
        None => DEFAULT_PAGE_SIZE,
    };

    let session = setup_session(environment, page_size);

    if headless {
        run_headless_mode(session).await
    } else {
        run_tui_mode(session, with_background).await
    }
}
