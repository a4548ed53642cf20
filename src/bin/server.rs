//! Todo REST Server Binary
//!
//! Main entry point for the todo REST API server. It builds the repository
//! and service once at startup, wires them into the HTTP router, and starts
//! serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin todo-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use todo_rest::config::ServerConfig;
use todo_rest::db::{LocalRepository, TodoRepository};
use todo_rest::http::{create_router, AppState};
use todo_rest::services::TodoService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting todo REST server");

    // Composition root: construct the repository and service once and hand
    // them to the router by ownership.
    let repository = Arc::new(LocalRepository::new()) as Arc<dyn TodoRepository>;
    let service = Arc::new(TodoService::new(repository));
    info!("Repository initialized successfully");

    let state = AppState::new(service);
    let app = create_router(state);

    let config = ServerConfig::from_env();
    let addr = config.socket_addr()?;

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
