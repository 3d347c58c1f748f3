//! Text enhancement seam.
//!
//! `AppState` holds an `Option<Arc<dyn TextEnhancer>>`: `None` when no API key is
//! configured, `LlmClient` in production, a stub in tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::prompts::{enhance_prompt, ENHANCE_SYSTEM};
use super::{LlmClient, LlmError};

/// Inputs shorter than this are not worth sending.
pub const MIN_ENHANCE_CHARS: usize = 3;

/// Which kind of field is being rewritten. Selects the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnhanceKind {
    Bio,
    Description,
    Tagline,
}

#[async_trait]
pub trait TextEnhancer: Send + Sync {
    async fn enhance_text(&self, text: &str, kind: EnhanceKind) -> Result<String, LlmError>;
}

#[async_trait]
impl TextEnhancer for LlmClient {
    async fn enhance_text(&self, text: &str, kind: EnhanceKind) -> Result<String, LlmError> {
        let prompt = enhance_prompt(text, kind);
        self.call_text(&prompt, ENHANCE_SYSTEM).await
    }
}

/// True when `text` is long enough to enhance.
pub fn is_enhanceable(text: &str) -> bool {
    text.trim().chars().count() >= MIN_ENHANCE_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_enhanceable() {
        assert!(!is_enhanceable(""));
        assert!(!is_enhanceable("  ab  "));
        assert!(is_enhanceable("abc"));
    }

    #[test]
    fn test_kind_deserializes_lowercase() {
        let kind: EnhanceKind = serde_json::from_str("\"tagline\"").unwrap();
        assert_eq!(kind, EnhanceKind::Tagline);
    }
}
