//! Auth microservice: credential validation and session token issuance.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use capstone_api::{auth_router, cors::cors_layer};
use capstone_core::services::AuthService;
use capstone_infrastructure::{create_pool, PgAccountRepository};
use capstone_security::TokenIssuer;
use capstone_shared::config::load_signing_secret;
use capstone_shared::constants::{
    DEFAULT_AUTH_PORT, DEFAULT_MAX_DB_CONNECTIONS, TOKEN_TTL_SECONDS,
};
use capstone_shared::telemetry::init_telemetry;

#[derive(Debug, Parser)]
#[command(name = "auth-service", about = "Auth microservice")]
struct Args {
    /// Store connection string
    #[arg(long = "sql", env = "DATABASE_URL")]
    database_url: String,

    /// Bind address
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Bind port
    #[arg(long, default_value_t = DEFAULT_AUTH_PORT)]
    port: u16,

    /// Origin allowed by the CORS layer
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    allowed_origin: String,

    /// Env-style file holding SECRET_KEY
    #[arg(long, default_value = ".env")]
    env_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_telemetry();
    info!("Auth service starting...");

    // A missing or empty secret must stop the process before it serves.
    let secret = match load_signing_secret(&args.env_file) {
        Ok(secret) => secret,
        Err(e) => {
            error!("Failed to load signing secret: {}", e);
            std::process::exit(1);
        }
    };

    let pool = create_pool(&args.database_url, DEFAULT_MAX_DB_CONNECTIONS).await?;
    info!("Database connection established.");

    let accounts = Arc::new(PgAccountRepository::new(pool));
    let service = Arc::new(AuthService::new(
        accounts,
        TokenIssuer::new(&secret, TOKEN_TTL_SECONDS),
    ));

    let app = auth_router(service)
        .layer(cors_layer(&args.allowed_origin)?)
        .layer(TraceLayer::new_for_http());

    let host: std::net::IpAddr = args.host.parse()?;
    let addr = SocketAddr::from((host, args.port));
    info!("Auth service listening on http://{}/api/auth", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
