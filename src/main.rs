use std::sync::Arc;

use battleship_server::{init_logging, serve, GameServer};
use clap::Parser;
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    /// Run the matchmaking server.
    Serve {
        #[arg(long, default_value = "0.0.0.0:8080")]
        bind: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { bind } => {
            let listener = TcpListener::bind(&bind).await?;
            log::info!("listening on {}", listener.local_addr()?);
            serve(listener, Arc::new(GameServer::new())).await
        }
    }
}
