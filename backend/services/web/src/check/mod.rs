pub mod client;
pub mod coordinator;
pub mod handlers;

use axum::routing::get;
use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::index))
        .route("/check", get(handlers::index).post(handlers::post_check))
}
