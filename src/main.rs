use animo::db;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let database_url = dotenv::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://animo.db?mode=rwc".to_string());
    let db_pool = db::connect(&database_url).await.unwrap();
    db::ensure_schema(&db_pool).await.unwrap();

    let app = animo::app(db_pool);

    let addr = dotenv::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
