pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::portfolio::handlers as portfolio;
use crate::render::handlers as render;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_request_body_bytes();

    Router::new()
        .route("/health", get(health::health_handler))
        // Record + actions
        .route("/api/v1/portfolio", get(portfolio::handle_get_portfolio))
        .route("/api/v1/portfolio/actions", post(portfolio::handle_dispatch))
        .route(
            "/api/v1/portfolio/link-check",
            get(portfolio::handle_link_check),
        )
        .route(
            "/api/v1/portfolio/enhance",
            post(portfolio::handle_enhance_field),
        )
        .route("/api/v1/presets", get(portfolio::handle_list_presets))
        .route("/api/v1/uploads", post(portfolio::handle_upload))
        .route("/api/v1/enhance", post(portfolio::handle_enhance))
        // Rendering
        .route("/api/v1/preview", get(render::handle_preview))
        .route("/api/v1/preview/events", get(render::handle_preview_events))
        .route("/api/v1/export", get(render::handle_export))
        .route("/api/v1/templates", get(render::handle_list_templates))
        .route("/api/v1/fonts", get(render::handle_list_fonts))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
