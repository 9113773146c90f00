mod login;
mod logout;
mod register;

use axum::{routing::get, Router};
use sqlx::SqlitePool;

use crate::{db::User, AppState};

pub use register::{create_user, NewUser, RegisterError};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", get(login::login_page).post(login::login))
        .route("/register", get(register::register_page).post(register::register))
        .route("/logout", get(logout::logout))
}

/// Exact, case-sensitive match on both columns. Passwords are stored and
/// compared in plain text, same as the data this app inherits.
pub async fn authenticate(
    db_pool: &SqlitePool,
    username: &str,
    password: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM users WHERE username = ? AND password = ?")
        .bind(username)
        .bind(password)
        .fetch_optional(db_pool)
        .await
}
