mod page;
mod respond;

use axum::{routing::get, Router};

use crate::AppState;

pub use page::{append_exchange, history};
pub use respond::{respond, REPLY_DEFAULT, REPLY_HAPPY, REPLY_SAD};

pub fn router() -> Router<AppState> {
    Router::new().route("/asistente", get(page::asistente).post(page::submit))
}
