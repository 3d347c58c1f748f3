//! Export flow: generate → measure → size gate → named file.
//!
//! The size gate only asks for confirmation; it never truncates. A declined
//! confirmation cancels the export without producing any output.

use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::models::portfolio::PortfolioData;
use crate::render::registry::generate_portfolio_html;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Default size above which the user is asked to confirm.
pub const DEFAULT_WARNING_LIMIT_MB: u64 = 25;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to generate the portfolio file: {0}")]
    Generation(String),
}

#[derive(Debug, Clone, Copy)]
pub struct ExportPolicy {
    pub warning_limit_bytes: u64,
}

impl ExportPolicy {
    pub fn from_megabytes(mb: u64) -> Self {
        Self {
            warning_limit_bytes: mb.saturating_mul(BYTES_PER_MB),
        }
    }
}

impl Default for ExportPolicy {
    fn default() -> Self {
        Self::from_megabytes(DEFAULT_WARNING_LIMIT_MB)
    }
}

/// Details shown to the user when the file is over the limit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeWarning {
    pub size_bytes: u64,
    /// Rounded to two decimals.
    pub size_mb: f64,
    pub limit_mb: f64,
    pub message: String,
}

impl SizeWarning {
    fn new(size_bytes: u64, limit_bytes: u64) -> Self {
        let size_mb = to_mb(size_bytes);
        let limit_mb = to_mb(limit_bytes);
        Self {
            size_bytes,
            size_mb,
            limit_mb,
            message: format!(
                "The generated file is {size_mb:.2} MB, above the {limit_mb:.0} MB limit. \
                 This is usually caused by embedded high-resolution images. \
                 Download anyway?"
            ),
        }
    }
}

fn to_mb(bytes: u64) -> f64 {
    (bytes as f64 / BYTES_PER_MB as f64 * 100.0).round() / 100.0
}

/// Asked whether to continue with an oversized export.
pub trait SizeConfirmation {
    fn confirm(&self, warning: &SizeWarning) -> bool;
}

/// Fixed answer. The HTTP layer uses this with the `confirm_oversize` flag.
pub struct PreConfirmed(pub bool);

impl SizeConfirmation for PreConfirmed {
    fn confirm(&self, _warning: &SizeWarning) -> bool {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct ExportFile {
    pub filename: String,
    pub html: String,
    pub size_bytes: u64,
}

#[derive(Debug, Clone)]
pub enum ExportOutcome {
    Ready(ExportFile),
    Cancelled(SizeWarning),
}

/// `Jane Doe` → `jane-doe-portfolio.html`. Every whitespace character becomes a
/// hyphen; nothing else is stripped.
pub fn export_filename(name: &str) -> String {
    let slug: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect();
    format!("{slug}-portfolio.html")
}

pub fn prepare_export(
    data: &PortfolioData,
    policy: ExportPolicy,
    confirmation: &dyn SizeConfirmation,
) -> Result<ExportOutcome, ExportError> {
    let html = generate_portfolio_html(data).map_err(|e| {
        error!("Export generation failed: {e}");
        ExportError::Generation(e.to_string())
    })?;

    let size_bytes = html.len() as u64;
    if size_bytes > policy.warning_limit_bytes {
        let warning = SizeWarning::new(size_bytes, policy.warning_limit_bytes);
        if !confirmation.confirm(&warning) {
            warn!(
                "Export of {} bytes cancelled at size gate (limit {})",
                size_bytes, policy.warning_limit_bytes
            );
            return Ok(ExportOutcome::Cancelled(warning));
        }
    }

    let filename = export_filename(&data.name);
    info!("Prepared export '{filename}' ({size_bytes} bytes)");
    Ok(ExportOutcome::Ready(ExportFile {
        filename,
        html,
        size_bytes,
    }))
}

/// `attachment` header value with an ASCII fallback name plus an RFC 5987
/// `filename*` for the exact UTF-8 name.
pub fn content_disposition(filename: &str) -> String {
    let fallback: String = filename
        .chars()
        .map(|c| {
            if c.is_ascii_graphic() && c != '"' && c != '\\' && c != ';' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let encoded: String = filename
        .bytes()
        .map(|b| {
            if b.is_ascii_alphanumeric() || b"-._~".contains(&b) {
                (b as char).to_string()
            } else {
                format!("%{b:02X}")
            }
        })
        .collect();
    format!("attachment; filename=\"{fallback}\"; filename*=UTF-8''{encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::seed::seed_portfolio;
    use std::cell::Cell;

    /// Records whether it was asked.
    struct Recorder {
        answer: bool,
        asked: Cell<bool>,
    }

    impl SizeConfirmation for Recorder {
        fn confirm(&self, _warning: &SizeWarning) -> bool {
            self.asked.set(true);
            self.answer
        }
    }

    fn recorder(answer: bool) -> Recorder {
        Recorder {
            answer,
            asked: Cell::new(false),
        }
    }

    #[test]
    fn test_filename_slug() {
        assert_eq!(export_filename("Jane Doe"), "jane-doe-portfolio.html");
        assert_eq!(export_filename("A\tB  C"), "a-b--c-portfolio.html");
    }

    #[test]
    fn test_small_export_skips_confirmation() {
        let confirm = recorder(false);
        let outcome = prepare_export(&seed_portfolio(), ExportPolicy::default(), &confirm).unwrap();
        assert!(!confirm.asked.get());
        match outcome {
            ExportOutcome::Ready(file) => {
                assert_eq!(file.filename, "your-name-portfolio.html");
                assert_eq!(file.size_bytes, file.html.len() as u64);
            }
            ExportOutcome::Cancelled(_) => panic!("small export must not be gated"),
        }
    }

    #[test]
    fn test_oversize_declined_cancels() {
        let mut data = seed_portfolio();
        data.avatar_url = format!("data:image/png;base64,{}", "A".repeat(4096));
        let policy = ExportPolicy {
            warning_limit_bytes: 1024,
        };
        let confirm = recorder(false);

        let outcome = prepare_export(&data, policy, &confirm).unwrap();
        assert!(confirm.asked.get());
        match outcome {
            ExportOutcome::Cancelled(w) => {
                assert!(w.size_bytes > 1024);
                assert!(w.message.contains("high-resolution images"));
            }
            ExportOutcome::Ready(_) => panic!("declined export must be cancelled"),
        }
    }

    #[test]
    fn test_default_limit_gates_large_embedded_avatar() {
        let limit = 25 * 1024 * 1024;
        let mut data = seed_portfolio();
        data.avatar_url = format!("data:image/png;base64,{}", "A".repeat(limit + 1));
        let confirm = recorder(false);

        let outcome = prepare_export(&data, ExportPolicy::default(), &confirm).unwrap();
        assert!(confirm.asked.get());
        match outcome {
            ExportOutcome::Cancelled(w) => {
                assert!(w.size_bytes > limit as u64);
                assert_eq!(w.limit_mb, 25.0);
            }
            ExportOutcome::Ready(_) => panic!("export over 25 MB must ask first"),
        }
    }

    #[test]
    fn test_oversize_confirmed_proceeds() {
        let policy = ExportPolicy {
            warning_limit_bytes: 10,
        };
        let outcome = prepare_export(&seed_portfolio(), policy, &PreConfirmed(true)).unwrap();
        assert!(matches!(outcome, ExportOutcome::Ready(_)));
    }

    #[test]
    fn test_limit_is_exclusive() {
        let html = generate_portfolio_html(&seed_portfolio()).unwrap();
        let policy = ExportPolicy {
            warning_limit_bytes: html.len() as u64,
        };
        let confirm = recorder(false);
        let outcome = prepare_export(&seed_portfolio(), policy, &confirm).unwrap();
        assert!(!confirm.asked.get());
        assert!(matches!(outcome, ExportOutcome::Ready(_)));
    }

    #[test]
    fn test_unknown_template_is_generation_error() {
        let mut data = seed_portfolio();
        data.theme_settings.template_id = "nonexistent".to_string();
        let err = prepare_export(&data, ExportPolicy::default(), &PreConfirmed(true)).unwrap_err();
        assert!(err.to_string().contains("nonexistent"));
    }

    #[test]
    fn test_size_warning_rounds() {
        let w = SizeWarning::new(26 * BYTES_PER_MB + BYTES_PER_MB / 2, 25 * BYTES_PER_MB);
        assert_eq!(w.size_mb, 26.5);
        assert_eq!(w.limit_mb, 25.0);
    }

    #[test]
    fn test_content_disposition_escapes_non_ascii() {
        let header = content_disposition("zoë-portfolio.html");
        assert_eq!(
            header,
            "attachment; filename=\"zo_-portfolio.html\"; filename*=UTF-8''zo%C3%AB-portfolio.html"
        );
    }
}
