mod health;
mod produtos;

use axum::{routing::get, Router};

use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/produtos", get(produtos::list_produtos))
        .route("/api/produtos/{id}", get(produtos::get_produto))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}
