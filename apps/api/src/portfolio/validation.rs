use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::models::portfolio::PortfolioData;

/// One advisory finding. Never blocks preview or export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkIssue {
    /// Dotted path of the offending field, e.g. `projects[proj1].link`.
    pub field: String,
    pub value: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkCheckReport {
    pub passed: bool,
    pub issues: Vec<LinkIssue>,
}

#[derive(Clone, Copy, PartialEq)]
enum LinkKind {
    Page,
    Image,
}

/// Returns the reason `value` is not a usable link, or `None` if it is fine.
/// Empty values and the `#` placeholder are skipped.
fn check_url(value: &str, kind: LinkKind) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || value == "#" {
        return None;
    }
    if kind == LinkKind::Image && value.to_ascii_lowercase().starts_with("data:image/") {
        return None;
    }

    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {
            if url.host_str().is_some() {
                None
            } else {
                Some("URL has no host".to_string())
            }
        }
        Ok(url) => Some(format!("Unsupported scheme '{}'", url.scheme())),
        Err(e) => Some(format!("Not an absolute http(s) URL: {e}")),
    }
}

/// Checks avatar, social, project image and project link URLs.
pub fn check_links(data: &PortfolioData) -> LinkCheckReport {
    let mut candidates: Vec<(String, &str, LinkKind)> = vec![
        ("avatarUrl".to_string(), &data.avatar_url, LinkKind::Image),
        ("socials.github".to_string(), &data.socials.github, LinkKind::Page),
        ("socials.linkedin".to_string(), &data.socials.linkedin, LinkKind::Page),
        ("socials.twitter".to_string(), &data.socials.twitter, LinkKind::Page),
    ];
    for p in &data.projects {
        candidates.push((format!("projects[{}].imageUrl", p.id), &p.image_url, LinkKind::Image));
        candidates.push((format!("projects[{}].link", p.id), &p.link, LinkKind::Page));
    }

    let issues: Vec<LinkIssue> = candidates
        .into_iter()
        .filter_map(|(field, value, kind)| {
            check_url(value, kind).map(|reason| LinkIssue {
                field,
                value: value.to_string(),
                reason,
            })
        })
        .collect();

    LinkCheckReport {
        passed: issues.is_empty(),
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::seed::seed_portfolio;

    #[test]
    fn test_seed_passes() {
        let report = check_links(&seed_portfolio());
        assert!(report.passed, "{:?}", report.issues);
    }

    #[test]
    fn test_placeholder_and_empty_skipped() {
        assert!(check_url("#", LinkKind::Page).is_none());
        assert!(check_url("  ", LinkKind::Page).is_none());
    }

    #[test]
    fn test_data_image_allowed_only_for_images() {
        let data = "data:image/png;base64,AAAA";
        assert!(check_url(data, LinkKind::Image).is_none());
        assert!(check_url(data, LinkKind::Page).is_some());
    }

    #[test]
    fn test_flags_bad_links() {
        let mut data = seed_portfolio();
        data.socials.github = "github.com/me".to_string();
        data.projects[0].link = "javascript:alert(1)".to_string();

        let report = check_links(&data);
        assert!(!report.passed);
        let fields: Vec<&str> = report.issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, vec!["socials.github", "projects[proj1].link"]);
        assert!(report.issues[1].reason.contains("javascript"));
    }
}
