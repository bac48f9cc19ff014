// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use std::io::BufRead;

use chatwidget_client::HttpChatBackend;
use chatwidget_core::{ChatWidget, FixedUserId, UserId, WidgetConfig};
use clap::Parser;
use cli::{Cli, Commands};
use terminal::{LineInput, TerminalTranscript};
use url::Url;

mod cli;
mod logging;
mod terminal;

fn main() -> Result<()> {
    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<()> {
    let _logger = logging::init()?;

    let args = Cli::parse();

    match args.command {
        Commands::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        }
        Commands::Chat {
            endpoint,
            base_url,
            user_id,
        } => {
            let config = WidgetConfig::from_env_or(endpoint, user_id)?;
            let base = Url::parse(&base_url)?;
            chat(&config, &base)?;
        }
    }

    Ok(())
}

/// One submission per stdin line until EOF.
fn chat(config: &WidgetConfig, base: &Url) -> Result<()> {
    let endpoint = config.endpoint_url(Some(base))?;
    log::info!("Chatting with {endpoint} as user {}", config.user_id);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let widget = ChatWidget::new(
        TerminalTranscript::new(std::io::stdout()),
        LineInput::default(),
        HttpChatBackend::new(endpoint),
        FixedUserId(UserId(config.user_id)),
    );

    for line in std::io::stdin().lock().lines() {
        widget.input().set(line?);
        runtime.block_on(widget.submit());
    }

    Ok(())
}
