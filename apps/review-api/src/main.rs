//! ClauseLens Review API
//!
//! HTTP boundary for the clause extraction and compliance scoring pipeline.
//! Provides REST endpoints for:
//!
//! - Document identity generation
//! - Source text upload
//! - Clause extraction
//! - Compliance runs and result snapshots
//!
//! ## Architecture
//!
//! Session state is in-memory and scoped per document id. The pipeline
//! itself lives in the `review-core`, `clause-segmenter`, and
//! `compliance-engine` crates; this server is routing, identity, CORS, and
//! rate limiting.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use clap::Parser;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod error;
mod state;

use api::{
    handle_create_document, handle_extract_clauses, handle_get_clauses, handle_get_results,
    handle_health, handle_run_compliance, handle_run_review, handle_upsert_text,
};
use state::AppState;

/// Command-line arguments for the review API server
#[derive(Parser, Debug)]
#[command(name = "review-api")]
#[command(about = "ClauseLens review API for clause extraction and compliance scoring")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "8787")]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Rate limit: requests per second per IP
    #[arg(long, default_value = "10")]
    rate_limit: u32,

    /// Comma-separated list of allowed CORS origins (default: any origin)
    #[arg(long)]
    allowed_origins: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handle_health))
        // API endpoints
        .route("/api/documents", post(handle_create_document))
        .route("/api/documents/:id/text", post(handle_upsert_text))
        .route("/api/documents/:id/extract", post(handle_extract_clauses))
        .route("/api/documents/:id/clauses", get(handle_get_clauses))
        .route("/api/documents/:id/compliance", post(handle_run_compliance))
        .route("/api/documents/:id/run", post(handle_run_review))
        .route("/api/documents/:id/results", get(handle_get_results))
        .with_state(state)
}

fn cors_layer(allowed_origins: Option<&str>) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .unwrap_or_default()
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting review API on {}:{}", args.host, args.port);

    // Create rate limiter configuration
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(args.rate_limit.into())
            .burst_size(args.rate_limit * 2)
            .finish()
            .expect("Failed to create rate limiter config"),
    );

    // Create shared state
    let state = Arc::new(AppState::new());

    // Configure CORS
    let cors = cors_layer(args.allowed_origins.as_deref());

    // Build router with middleware
    let app = build_router(state)
        .layer(GovernorLayer {
            config: governor_conf,
        })
        .layer(cors);

    // Start server
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Rate limit: {} requests/second per IP", args.rate_limit);

    axum::serve(listener, app).await?;

    Ok(())
}
