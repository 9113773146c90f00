use axum::{debug_handler, extract::State, response::{Html, IntoResponse, Redirect, Response}, Form};
use serde::Deserialize;
use sqlx::SqlitePool;
use thiserror::Error;

use crate::{include_res, AppResult};

/// Form fields come in verbatim: no normalisation, no email or phone
/// format validation.
#[derive(Debug, Deserialize)]
pub struct NewUser {
    pub nombre: String,
    pub telefono: String,
    pub direccion: String,
    pub correo: String,
    pub usuario: String,
    pub clave: String,
}

#[derive(Debug, Error)]
pub enum RegisterError {
    #[error("el usuario o correo ya están registrados")]
    Duplicate,
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

/// Single INSERT; the UNIQUE constraints on username and email are the
/// uniqueness check, so two racing registrations can't both land.
pub async fn create_user(db_pool: &SqlitePool, user: &NewUser) -> Result<(), RegisterError> {
    let res = sqlx::query(
        "INSERT INTO users (name, phone, address, email, username, password)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&user.nombre)
    .bind(&user.telefono)
    .bind(&user.direccion)
    .bind(&user.correo)
    .bind(&user.usuario)
    .bind(&user.clave)
    .execute(db_pool)
    .await;

    match res {
        Ok(_) => Ok(()),
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(RegisterError::Duplicate),
        Err(e) => Err(RegisterError::Db(e)),
    }
}

#[debug_handler]
pub(crate) async fn register_page() -> impl IntoResponse {
    Html(include_res!(str, "/pages/register.html").replace("{error}", ""))
}

#[debug_handler]
pub(crate) async fn register(
    State(db_pool): State<SqlitePool>,
    Form(form): Form<NewUser>,
) -> AppResult<Response> {
    match create_user(&db_pool, &form).await {
        Ok(()) => {
            tracing::info!(user = %form.usuario, "registered");
            Ok(Redirect::to("/login").into_response())
        }
        Err(RegisterError::Duplicate) => Ok(Html(
            include_res!(str, "/pages/register.html").replace(
                "{error}",
                "El usuario o correo ya están registrados. Intenta con otros datos.",
            ),
        )
        .into_response()),
        Err(RegisterError::Db(e)) => Err(e.into()),
    }
}
