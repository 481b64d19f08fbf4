//! Binary entrypoint for the botflow HTTP server.
//!
//! Configuration comes from the environment:
//! - `BOTFLOW_DB_PATH`: SQLite database file path (default: "botflow.db")
//! - `BOTFLOW_PORT`: listen port (default: "3000")

use botflow_server::router::build_router;
use botflow_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let db_path = std::env::var("BOTFLOW_DB_PATH")
        .unwrap_or_else(|_| "botflow.db".to_string());
    let port = std::env::var("BOTFLOW_PORT")
        .unwrap_or_else(|_| "3000".to_string());

    let state = AppState::new(&db_path)
        .expect("Failed to initialize application state");

    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("botflow server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
