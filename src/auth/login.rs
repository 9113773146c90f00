use axum::{debug_handler, extract::State, response::{Html, IntoResponse, Redirect, Response}, Form};
use serde::Deserialize;
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{include_res, session::{USER_ID, USER_NAME}, AppResult};

#[derive(Deserialize)]
pub(crate) struct LoginForm {
    usuario: String,
    clave: String,
}

#[debug_handler]
pub(crate) async fn login_page() -> impl IntoResponse {
    Html(include_res!(str, "/pages/login.html").replace("{error}", ""))
}

#[debug_handler]
pub(crate) async fn login(
    State(db_pool): State<SqlitePool>,
    session: Session,
    Form(LoginForm { usuario, clave }): Form<LoginForm>,
) -> AppResult<Response> {
    let Some(user) = super::authenticate(&db_pool, &usuario, &clave).await? else {
        return Ok(Html(
            include_res!(str, "/pages/login.html")
                .replace("{error}", "Usuario o contraseña incorrectos"),
        )
        .into_response());
    };

    session.insert(USER_ID, user.id).await?;
    session.insert(USER_NAME, &user.name).await?;
    tracing::info!(user = %user.username, "login");

    Ok(Redirect::to("/home").into_response())
}
