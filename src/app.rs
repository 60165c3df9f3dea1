use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/entries",
            get(handlers::list_entries).post(handlers::add_entry),
        )
        .route("/api/total", get(handlers::get_total))
        .route("/api/chart", get(handlers::get_chart))
        .with_state(state)
}
