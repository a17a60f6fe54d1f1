use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "vitrina")]
#[command(author, version, about = "Telegram storefront bot with menu navigation for digital products and services", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (update poller + control server)
    Run {
        /// Webhook-only mode: do not autostart the update poller
        #[arg(long)]
        webhook: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
