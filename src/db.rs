use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, sqlx::FromRow)]
pub struct HistoryEntry {
    pub user_text: String,
    pub assistant_text: String,
    pub created_at: String,
}

pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let opts = SqliteConnectOptions::from_str(database_url)?
        .foreign_keys(true)
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(16)
        .connect_with(opts)
        .await
}

/// Safe to run on every start: tables are CREATE IF NOT EXISTS and the
/// admin account is only seeded when missing.
pub async fn ensure_schema(db_pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            phone TEXT,
            address TEXT,
            email TEXT UNIQUE,
            username TEXT UNIQUE,
            password TEXT
        )",
    )
    .execute(db_pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS messages (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER,
            user_text TEXT,
            assistant_text TEXT,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            FOREIGN KEY(user_id) REFERENCES users(id)
        )",
    )
    .execute(db_pool)
    .await?;

    let admin: Option<(i64,)> = sqlx::query_as("SELECT id FROM users WHERE username = 'admin'")
        .fetch_optional(db_pool)
        .await?;

    if admin.is_none() {
        sqlx::query(
            "INSERT INTO users (name, phone, address, email, username, password)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind("Administrador")
        .bind("0000000000")
        .bind("Sin dirección")
        .bind("admin@correo.com")
        .bind("admin")
        .bind("1234")
        .execute(db_pool)
        .await?;
        tracing::info!("seeded admin account");
    }

    Ok(())
}
