use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::enhance::is_enhanceable;
use crate::llm_client::{EnhanceKind, TextEnhancer};
use crate::models::portfolio::{ListKind, PortfolioData};
use crate::portfolio::actions::{Action, ProfilePatch};
use crate::portfolio::presets::{preset_catalog, PresetSummary};
use crate::portfolio::uploads::{read_image_upload, UploadResponse};
use crate::portfolio::validation::{check_links, LinkCheckReport};
use crate::state::AppState;

/// GET /api/v1/portfolio
pub async fn handle_get_portfolio(State(state): State<AppState>) -> Json<PortfolioData> {
    Json(state.store.get().as_ref().clone())
}

/// POST /api/v1/portfolio/actions
pub async fn handle_dispatch(
    State(state): State<AppState>,
    Json(action): Json<Action>,
) -> Result<Json<PortfolioData>, AppError> {
    let next = state.store.dispatch(action).await?;
    Ok(Json(next.as_ref().clone()))
}

/// GET /api/v1/portfolio/link-check
pub async fn handle_link_check(State(state): State<AppState>) -> Json<LinkCheckReport> {
    Json(check_links(&state.store.get()))
}

/// GET /api/v1/presets
pub async fn handle_list_presets() -> Json<Vec<PresetSummary>> {
    Json(preset_catalog())
}

/// POST /api/v1/uploads
pub async fn handle_upload(multipart: Multipart) -> Result<Json<UploadResponse>, AppError> {
    let upload = read_image_upload(multipart).await?;
    info!(
        "Encoded {} upload ({} bytes) as data URL",
        upload.mime_type, upload.size_bytes
    );
    Ok(Json(upload))
}

// ────────────────────────────────────────────────────────────────────────────
// Text enhancement
// ────────────────────────────────────────────────────────────────────────────

fn enhancer(state: &AppState) -> Result<Arc<dyn TextEnhancer>, AppError> {
    state.enhancer.clone().ok_or(AppError::EnhancementUnavailable)
}

fn require_enhanceable(text: &str) -> Result<(), AppError> {
    if is_enhanceable(text) {
        Ok(())
    } else {
        Err(AppError::Validation("Please enter some text first.".to_string()))
    }
}

#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
    pub text: String,
    pub kind: EnhanceKind,
}

#[derive(Debug, Serialize)]
pub struct EnhanceResponse {
    pub text: String,
    /// False when the model returned the input unchanged.
    pub changed: bool,
}

/// POST /api/v1/enhance
pub async fn handle_enhance(
    State(state): State<AppState>,
    Json(req): Json<EnhanceRequest>,
) -> Result<Json<EnhanceResponse>, AppError> {
    require_enhanceable(&req.text)?;
    let enhanced = enhancer(&state)?.enhance_text(&req.text, req.kind).await?;
    let changed = enhanced != req.text;
    Ok(Json(EnhanceResponse {
        text: enhanced,
        changed,
    }))
}

/// A field of the stored record that can be enhanced in place.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum EnhanceTarget {
    Bio,
    Tagline,
    ProjectDescription { id: String },
    ExperienceDescription { id: String },
}

impl EnhanceTarget {
    fn kind(&self) -> EnhanceKind {
        match self {
            EnhanceTarget::Bio => EnhanceKind::Bio,
            EnhanceTarget::Tagline => EnhanceKind::Tagline,
            EnhanceTarget::ProjectDescription { .. } | EnhanceTarget::ExperienceDescription { .. } => {
                EnhanceKind::Description
            }
        }
    }

    /// Current text of the field.
    fn read(&self, data: &PortfolioData) -> Result<String, AppError> {
        let text = match self {
            EnhanceTarget::Bio => Some(data.bio.clone()),
            EnhanceTarget::Tagline => Some(data.tagline.clone()),
            EnhanceTarget::ProjectDescription { id } => data
                .projects
                .iter()
                .find(|p| &p.id == id)
                .map(|p| p.description.clone()),
            EnhanceTarget::ExperienceDescription { id } => data
                .experience
                .iter()
                .find(|e| &e.id == id)
                .map(|e| e.description.clone()),
        };
        text.ok_or_else(|| AppError::NotFound("No item with that id".to_string()))
    }

    /// Action that writes `value` into the field.
    fn write(self, value: String) -> Action {
        match self {
            EnhanceTarget::Bio => Action::UpdateProfile(ProfilePatch {
                bio: Some(value),
                ..Default::default()
            }),
            EnhanceTarget::Tagline => Action::UpdateProfile(ProfilePatch {
                tagline: Some(value),
                ..Default::default()
            }),
            EnhanceTarget::ProjectDescription { id } => Action::UpdateItem {
                list: ListKind::Projects,
                id,
                field: "description".to_string(),
                value,
            },
            EnhanceTarget::ExperienceDescription { id } => Action::UpdateItem {
                list: ListKind::Experience,
                id,
                field: "description".to_string(),
                value,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EnhanceFieldResponse {
    pub changed: bool,
    pub data: PortfolioData,
}

/// POST /api/v1/portfolio/enhance
///
/// The record is only updated when the enhancer succeeds with new text. On any
/// failure the stored field is untouched. If the field was edited while the
/// enhancer ran, the edit wins and the response reports `changed: false`.
pub async fn handle_enhance_field(
    State(state): State<AppState>,
    Json(target): Json<EnhanceTarget>,
) -> Result<Json<EnhanceFieldResponse>, AppError> {
    let enhancer = enhancer(&state)?;
    let original = target.read(&state.store.get())?;
    require_enhanceable(&original)?;

    let enhanced = enhancer.enhance_text(&original, target.kind()).await?;
    if enhanced == original {
        return Ok(Json(EnhanceFieldResponse {
            changed: false,
            data: state.store.get().as_ref().clone(),
        }));
    }

    let write = target.clone().write(enhanced);
    let untouched = |data: &PortfolioData| target.read(data).is_ok_and(|now| now == original);
    match state.store.dispatch_if(write, untouched).await? {
        Some(next) => Ok(Json(EnhanceFieldResponse {
            changed: true,
            data: next.as_ref().clone(),
        })),
        None => {
            info!("{:?} was edited during enhancement, keeping the edit", target);
            Ok(Json(EnhanceFieldResponse {
                changed: false,
                data: state.store.get().as_ref().clone(),
            }))
        }
    }
}
