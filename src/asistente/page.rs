use axum::{debug_handler, extract::State, response::{Html, IntoResponse, Redirect, Response}, Form};
use serde::Deserialize;
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{db::HistoryEntry, include_res, res, session::USER_ID, AppResult};

use super::respond;

#[derive(Deserialize)]
pub(crate) struct MensajeForm {
    mensaje: String,
}

/// All of one user's exchanges, oldest first. Unbounded; fine at this scale.
pub async fn history(
    db_pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<HistoryEntry>, sqlx::Error> {
    sqlx::query_as(
        "SELECT user_text, assistant_text, created_at
         FROM messages WHERE user_id = ?
         ORDER BY created_at ASC, id ASC",
    )
    .bind(user_id)
    .fetch_all(db_pool)
    .await
}

/// Computes the canned reply, stores the exchange, and returns the reply.
pub async fn append_exchange(
    db_pool: &SqlitePool,
    user_id: i64,
    user_text: &str,
) -> Result<&'static str, sqlx::Error> {
    let assistant_text = respond::respond(user_text);

    sqlx::query("INSERT INTO messages (user_id, user_text, assistant_text) VALUES (?, ?, ?)")
        .bind(user_id)
        .bind(user_text)
        .bind(assistant_text)
        .execute(db_pool)
        .await?;

    Ok(assistant_text)
}

async fn render(db_pool: &SqlitePool, user_id: i64) -> AppResult<Response> {
    let mut items = String::new();
    for entry in history(db_pool, user_id).await? {
        items += &res::fill(
            include_res!(str, "/pages/asistente_item.html"),
            &[
                ("user_text", res::escape(&entry.user_text)),
                ("assistant_text", res::escape(&entry.assistant_text)),
                ("created_at", res::escape(&entry.created_at)),
            ],
        );
    }

    Ok(Html(
        include_res!(str, "/pages/asistente.html").replace("{historial}", &items),
    )
    .into_response())
}

#[debug_handler]
pub(crate) async fn asistente(
    State(db_pool): State<SqlitePool>,
    session: Session,
) -> AppResult<Response> {
    let Some(user_id) = session.get::<i64>(USER_ID).await? else {
        return Ok(Redirect::to("/login").into_response());
    };

    render(&db_pool, user_id).await
}

#[debug_handler]
pub(crate) async fn submit(
    State(db_pool): State<SqlitePool>,
    session: Session,
    Form(MensajeForm { mensaje }): Form<MensajeForm>,
) -> AppResult<Response> {
    let Some(user_id) = session.get::<i64>(USER_ID).await? else {
        return Ok(Redirect::to("/login").into_response());
    };

    append_exchange(&db_pool, user_id, &mensaje).await?;

    render(&db_pool, user_id).await
}
