mod api_client;
mod config;
mod errors;
mod jobs;
mod models;
mod pages;
mod resume;
mod routes;
mod session;
mod skills;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::api_client::HttpCareerApi;
use crate::config::Config;
use crate::routes::build_router;
use crate::session::{FileStorage, SessionStore};
use crate::state::AppState;

#[derive(Parser)]
#[command(about = "CareerPilot portal: job search, resume builder, and skill recommendations")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the portal on localhost (default)
    Serve,
    /// Print the stored session user
    Whoami,
    /// Clear the stored session
    Logout,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let session = SessionStore::new(Arc::new(FileStorage::new(&config.data_dir)));

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config, session).await,
        Command::Whoami => {
            match session.load() {
                Some(user) => println!("{}", serde_json::to_string_pretty(&user)?),
                None => println!("Not logged in"),
            }
            Ok(())
        }
        Command::Logout => {
            session.clear()?;
            println!("Logged out");
            Ok(())
        }
    }
}

async fn serve(config: Config, session: SessionStore) -> Result<()> {
    info!("Starting CareerPilot portal v{}", env!("CARGO_PKG_VERSION"));

    let api = HttpCareerApi::new(config.api_url.clone());
    info!("API client initialized (base url: {})", api.base_url());
    info!("Session data directory: {}", config.data_dir.display());

    let state = AppState {
        api: Arc::new(api),
        session,
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("127.0.0.1:{}", config.port).parse()?;
    info!("Listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
