//! UMA - user management API server
//!
//! Registration, credential login, password reset via emailed tokens, and
//! user CRUD, gated by bearer-token authentication and a per-operation
//! permission table.

use clap::Parser;

/// Command line interface for the UMA server
#[derive(Parser, Debug)]
#[command(name = "uma")]
#[command(about = "UMA - user management API server")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    uma_server::run(cli.config.as_deref()).await
}
