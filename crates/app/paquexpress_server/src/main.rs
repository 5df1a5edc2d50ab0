//! Paquexpress API server binary.

use clap::Parser;
use paquexpress_core::media::MediaStore;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "paquexpress_server", about = "Paquexpress delivery API server")]
struct Args {
    /// Port to listen on (0 = ephemeral).
    #[arg(long, env = "PORT", default_value_t = 8000)]
    port: u16,

    /// PostgreSQL connection URL.
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "postgres://localhost:5432/paquexpress"
    )]
    database_url: String,

    /// Maximum number of database connections in the pool.
    #[arg(long, default_value_t = 5)]
    max_connections: u32,

    /// Directory uploaded photos are written to.
    #[arg(long, env = "UPLOADS_DIR", default_value = "uploads")]
    uploads_dir: String,

    /// Base URL clients use to fetch uploaded photos.
    #[arg(long, env = "PUBLIC_BASE_URL", default_value = "http://127.0.0.1:8000")]
    public_base_url: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,paquexpress_api=debug,paquexpress_core=debug"
                    .parse()
                    .unwrap()
            }),
        )
        .init();

    let args = Args::parse();

    info!(database_url = %args.database_url, port = args.port, "starting paquexpress_server");

    let pool = PgPoolOptions::new()
        .max_connections(args.max_connections)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect(&args.database_url)
        .await?;

    info!("running database migrations");
    paquexpress_api::migrate(&pool).await?;

    let media = MediaStore::new(args.uploads_dir.clone())?;

    let config = paquexpress_api::config::ApiConfig {
        bind_addr: format!("127.0.0.1:{}", args.port),
        pg_connection_url: args.database_url,
        jwt_secret: paquexpress_core::auth::jwt::resolve_jwt_secret(),
        uploads_dir: args.uploads_dir,
        public_base_url: args.public_base_url,
    };

    let state = paquexpress_api::AppState {
        pool,
        config: config.clone(),
        media,
    };

    let app = paquexpress_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;

    info!(addr = %local_addr, "REST API listening");

    axum::serve(listener, app).await?;

    Ok(())
}
