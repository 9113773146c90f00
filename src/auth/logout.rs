use axum::{debug_handler, response::Redirect};
use tower_sessions::Session;

use crate::AppResult;

// Clearing an empty session is a no-op, so logout without a login is fine.
#[debug_handler]
pub(crate) async fn logout(session: Session) -> AppResult<Redirect> {
    session.clear().await;
    Ok(Redirect::to("/"))
}
