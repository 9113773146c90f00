pub mod asistente;
pub mod auth;
pub mod db;
pub mod home;
pub mod index;
pub mod res;
pub mod session;

mod appresult;

pub use appresult::{AppError, AppResult};

use axum::{extract::FromRef, routing::get, Router};
use sqlx::SqlitePool;
use tower_sessions::{cookie::SameSite, Expiry, MemoryStore, SessionManagerLayer};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub db_pool: SqlitePool,
}

pub fn app(db_pool: SqlitePool) -> Router {
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::minutes(30)));

    Router::new()
        .route("/", get(index::index))
        .route("/home", get(home::home))
        .merge(auth::router())
        .merge(asistente::router())
        .with_state(AppState { db_pool })
        .layer(session_layer)
}
