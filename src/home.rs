use axum::{debug_handler, extract::State, response::{Html, IntoResponse, Redirect, Response}};
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{db::User, include_res, res, session::USER_ID, AppResult};

#[debug_handler]
pub async fn home(
    State(db_pool): State<SqlitePool>,
    session: Session,
) -> AppResult<Response> {
    let Some(user_id) = session.get::<i64>(USER_ID).await? else {
        return Ok(Redirect::to("/login").into_response());
    };

    let user: User = sqlx::query_as("SELECT * FROM users WHERE id = ?")
        .bind(user_id)
        .fetch_one(&db_pool)
        .await?;

    // Profile fields are user-supplied at registration; fill escapes none
    // of them itself, so escape here and let the single pass keep any
    // placeholder-looking text literal.
    Ok(Html(res::fill(
        include_res!(str, "/pages/home.html"),
        &[
            ("name", res::escape(&user.name)),
            ("phone", res::escape(&user.phone)),
            ("address", res::escape(&user.address)),
            ("email", res::escape(&user.email)),
            ("username", res::escape(&user.username)),
        ],
    ))
    .into_response())
}
