use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "chatwidget", about = "Chat with a JSON chat endpoint from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read one message per stdin line and print the transcript.
    Chat {
        /// Chat endpoint, absolute or relative to `--base-url`
        /// [env: CHAT_ENDPOINT, default: /api/chat].
        #[arg(long)]
        endpoint: Option<String>,

        /// Base URL relative endpoints are resolved against.
        #[arg(long, default_value = "http://127.0.0.1:5000/")]
        base_url: String,

        /// User id sent with every message [env: CHAT_USER_ID, default: 1].
        #[arg(long)]
        user_id: Option<i64>,
    },

    /// Print the version.
    Version,
}
