use anyhow::Result;
use clap::{Parser, Subcommand};
use std::env;

pub mod auth;
pub mod serve;

#[derive(Subcommand)]
enum Command {
    /// Run the webhook server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Set the server port (defaults to the PORT env var, then 3000)
        #[arg(long)]
        port: Option<String>,
    },
    /// Perform console OAuth authorization and print the tokens
    Auth {
        /// Sender id the credential will belong to
        #[arg(long, default_value = "console")]
        sender: String,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    match args.command {
        Some(Command::Serve { host, port }) => {
            let port = port
                .or_else(|| env::var("PORT").ok())
                .unwrap_or_else(|| "3000".to_string());
            serve::run(host, port).await;
        }
        Some(Command::Auth { sender }) => {
            auth::run(&sender).await?;
        }
        None => {}
    }

    Ok(())
}
