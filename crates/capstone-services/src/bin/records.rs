//! Records microservice: capstone entry management.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing::info;

use capstone_api::{cors::cors_layer, records_router};
use capstone_core::services::RecordService;
use capstone_infrastructure::{create_pool, PgRecordRepository};
use capstone_shared::constants::{DEFAULT_MAX_DB_CONNECTIONS, DEFAULT_RECORDS_PORT};
use capstone_shared::telemetry::init_telemetry;

#[derive(Debug, Parser)]
#[command(name = "records-service", about = "Capstone records microservice")]
struct Args {
    /// Store connection string
    #[arg(long = "sql", env = "DATABASE_URL")]
    database_url: String,

    /// Bind address
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Bind port
    #[arg(long, default_value_t = DEFAULT_RECORDS_PORT)]
    port: u16,

    /// Origin allowed by the CORS layer
    #[arg(long, default_value = "http://127.0.0.1:5502")]
    allowed_origin: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_telemetry();
    info!("Records service starting...");

    let pool = create_pool(&args.database_url, DEFAULT_MAX_DB_CONNECTIONS).await?;
    info!("Database connection established.");

    let records = Arc::new(PgRecordRepository::new(pool));
    let service = Arc::new(RecordService::new(records));

    let app = records_router(service)
        .layer(cors_layer(&args.allowed_origin)?)
        .layer(TraceLayer::new_for_http());

    let host: std::net::IpAddr = args.host.parse()?;
    let addr = SocketAddr::from((host, args.port));
    info!("Records service listening on http://{}/api/records", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
