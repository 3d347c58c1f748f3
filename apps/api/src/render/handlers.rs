use std::convert::Infallible;

use axum::{
    extract::{Query, State},
    http::header,
    response::{
        sse::{Event, KeepAlive, Sse},
        Html, IntoResponse, Response,
    },
    Json,
};
use serde::Deserialize;
use tokio_stream::{wrappers::WatchStream, Stream, StreamExt};
use tracing::warn;

use crate::errors::AppError;
use crate::render::export::{content_disposition, prepare_export, ExportOutcome, PreConfirmed};
use crate::render::fonts::{FontPair, FONT_PAIRS};
use crate::render::registry::{generate_portfolio_html, template_catalog, TemplateInfo};
use crate::state::AppState;

/// GET /api/v1/preview
pub async fn handle_preview(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let html = generate_portfolio_html(&state.store.get())?;
    Ok(Html(html))
}

/// GET /api/v1/preview/events
///
/// Emits the current document immediately, then a fresh one after every change.
/// A render failure is sent as an `error` event; the stream stays open so the next
/// valid change recovers the preview.
pub async fn handle_preview_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = WatchStream::new(state.store.subscribe()).map(|data| {
        let event = match generate_portfolio_html(&data) {
            // SSE frames are line based; carriage returns would split them.
            Ok(html) => Event::default().event("preview").data(html.replace('\r', "")),
            Err(e) => {
                warn!("Preview render failed: {e}");
                Event::default().event("error").data(e.to_string())
            }
        };
        Ok(event)
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}

#[derive(Debug, Default, Deserialize)]
pub struct ExportQuery {
    #[serde(default)]
    pub confirm_oversize: bool,
}

/// GET /api/v1/export
pub async fn handle_export(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
) -> Result<Response, AppError> {
    let data = state.store.get();
    let outcome = prepare_export(
        &data,
        state.export_policy(),
        &PreConfirmed(query.confirm_oversize),
    )?;

    match outcome {
        ExportOutcome::Ready(file) => Ok((
            [
                (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    content_disposition(&file.filename),
                ),
                (header::CONTENT_LENGTH, file.size_bytes.to_string()),
            ],
            file.html,
        )
            .into_response()),
        ExportOutcome::Cancelled(warning) => Err(AppError::ExportTooLarge(warning)),
    }
}

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<Vec<TemplateInfo>> {
    Json(template_catalog())
}

/// GET /api/v1/fonts
pub async fn handle_list_fonts() -> Json<&'static [FontPair]> {
    Json(FONT_PAIRS)
}
