//! Template registry: `themeSettings.templateId` → generator.
//!
//! Preview and export both dispatch through here. An unregistered id is an error
//! in both paths; there is no fallback template.

use serde::Serialize;
use thiserror::Error;

use crate::models::portfolio::{PortfolioData, SectionKey};
use crate::render::document::{render_document, TemplateGenerator};
use crate::render::templates::{
    Cyber, Elegant, Futuristic, Minimalist, Modern, Neobrutalist, Studio, TechDoc,
};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("No generator found for template ID '{id}' (registered: {registered})")]
    UnknownTemplate { id: String, registered: String },
}

/// Registration order is the order templates are listed to clients.
static TEMPLATES: [&dyn TemplateGenerator; 8] = [
    &Futuristic,
    &Minimalist,
    &Neobrutalist,
    &Modern,
    &Elegant,
    &TechDoc,
    &Studio,
    &Cyber,
];

pub fn dispatch(template_id: &str) -> Result<&'static dyn TemplateGenerator, RenderError> {
    TEMPLATES
        .iter()
        .copied()
        .find(|t| t.id() == template_id)
        .ok_or_else(|| RenderError::UnknownTemplate {
            id: template_id.to_string(),
            registered: TEMPLATES.iter().map(|t| t.id()).collect::<Vec<_>>().join(", "),
        })
}

/// Renders the record with the template it selects.
pub fn generate_portfolio_html(data: &PortfolioData) -> Result<String, RenderError> {
    let generator = dispatch(&data.theme_settings.template_id)?;
    Ok(render_document(generator, data))
}

/// Same as [`generate_portfolio_html`] with a fixed copyright year.
#[cfg(test)]
pub fn generate_portfolio_html_for_year(
    data: &PortfolioData,
    year: i32,
) -> Result<String, RenderError> {
    let generator = dispatch(&data.theme_settings.template_id)?;
    Ok(crate::render::document::render_document_for_year(generator, data, year))
}

// ────────────────────────────────────────────────────────────────────────────
// Catalog
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub supported_sections: Vec<SectionKey>,
    /// Set when the template ignores the record's section order.
    pub fixed_order: bool,
}

pub fn template_catalog() -> Vec<TemplateInfo> {
    TEMPLATES
        .iter()
        .map(|t| TemplateInfo {
            id: t.id(),
            name: t.display_name(),
            supported_sections: t
                .fixed_order()
                .unwrap_or_else(|| t.supported_sections())
                .to_vec(),
            fixed_order: t.fixed_order().is_some(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::portfolio::{ThemeMode, ThemeSettings};
    use crate::portfolio::seed::seed_portfolio;
    use pretty_assertions::assert_eq;

    const XSS: &str = "<script>alert(1)</script>";

    fn with_template(id: &str) -> PortfolioData {
        let mut data = seed_portfolio();
        data.theme_settings.template_id = id.to_string();
        data
    }

    fn poisoned() -> PortfolioData {
        let mut data = seed_portfolio();
        data.name = XSS.to_string();
        data.tagline = XSS.to_string();
        data.bio = XSS.to_string();
        data.passion = XSS.to_string();
        data.contact_email = XSS.to_string();
        data.skills = vec![XSS.to_string()];
        for p in &mut data.projects {
            p.name = XSS.to_string();
            p.description = XSS.to_string();
        }
        for e in &mut data.experience {
            e.role = XSS.to_string();
            e.company = XSS.to_string();
            e.duration = XSS.to_string();
            e.description = XSS.to_string();
        }
        for e in &mut data.education {
            e.institution = XSS.to_string();
            e.degree = XSS.to_string();
            e.duration = XSS.to_string();
        }
        for a in &mut data.achievements {
            a.title = XSS.to_string();
            a.description = XSS.to_string();
        }
        data
    }

    #[test]
    fn test_dispatch_unknown_template_fails() {
        let err = match dispatch("nonexistent") {
            Err(e) => e,
            Ok(_) => panic!("expected dispatch to fail"),
        };
        let message = err.to_string();
        assert!(message.contains("nonexistent"));
        assert!(message.contains("futuristic"));
        assert!(generate_portfolio_html(&with_template("nonexistent")).is_err());
    }

    #[test]
    fn test_every_registered_template_dispatches() {
        let ids: Vec<&str> = TEMPLATES.iter().map(|t| t.id()).collect();
        assert_eq!(
            ids,
            vec!["futuristic", "minimalist", "neobrutalist", "modern", "elegant", "techdoc", "studio", "cyber"]
        );
        for id in ids {
            assert_eq!(dispatch(id).map(|t| t.id()).ok(), Some(id));
        }
    }

    #[test]
    fn test_output_is_deterministic_for_fixed_year() {
        for t in TEMPLATES.iter() {
            let data = with_template(t.id());
            let a = generate_portfolio_html_for_year(&data, 2025).unwrap();
            let b = generate_portfolio_html_for_year(&data, 2025).unwrap();
            assert_eq!(a, b, "template {}", t.id());
        }
    }

    #[test]
    fn test_every_template_produces_complete_document() {
        for t in TEMPLATES.iter() {
            let html = generate_portfolio_html_for_year(&with_template(t.id()), 2025).unwrap();
            assert!(html.starts_with("<!DOCTYPE html>"), "{}", t.id());
            assert!(html.contains("<title>"), "{}", t.id());
            assert!(html.contains("<style>"), "{}", t.id());
            assert!(html.contains("</body>"), "{}", t.id());
            assert!(html.contains("Your Name"), "{}", t.id());
        }
    }

    #[test]
    fn test_script_tags_are_neutralized_in_every_template() {
        for t in TEMPLATES.iter() {
            let mut data = poisoned();
            data.theme_settings.template_id = t.id().to_string();
            let html = generate_portfolio_html_for_year(&data, 2025).unwrap();
            assert!(!html.contains("<script>"), "raw script tag in {}", t.id());
            assert!(html.contains("&lt;script&gt;"), "escaped text missing in {}", t.id());
            assert!(!html.contains("&LT;"), "uppercased entity in {}", t.id());
        }
    }

    #[test]
    fn test_escaped_project_description_survives_in_every_template() {
        for t in TEMPLATES.iter() {
            let mut data = with_template(t.id());
            data.projects[0].description = "<b>rust & tokio</b>".to_string();
            let html = generate_portfolio_html_for_year(&data, 2025).unwrap();
            assert!(
                html.contains("&lt;b&gt;rust & tokio&lt;/b&gt;"),
                "project description missing in {}",
                t.id()
            );
        }
    }

    #[test]
    fn test_attribute_injection_and_script_urls_are_neutralized() {
        for t in TEMPLATES.iter() {
            let mut data = with_template(t.id());
            data.avatar_url = "x\" onerror=\"alert(1)".to_string();
            data.socials.github = "javascript:alert(1)".to_string();
            data.socials.linkedin = "javascript:alert(1)".to_string();
            data.socials.twitter = "javascript:alert(1)".to_string();
            data.projects[0].link = "javascript:alert(1)".to_string();
            data.projects[0].image_url = "x\" onload=\"alert(1)".to_string();
            data.projects[0].name = "A\" onclick=\"alert(1)".to_string();
            let html = generate_portfolio_html_for_year(&data, 2025).unwrap();
            assert!(!html.contains("javascript:"), "{}", t.id());
            assert!(!html.contains("\" onerror=\""), "{}", t.id());
            assert!(!html.contains("\" onload=\""), "{}", t.id());
            assert!(!html.contains("alt=\"A\" onclick"), "{}", t.id());
        }
    }

    #[test]
    fn test_minimalist_and_modern_skip_passion_and_achievements() {
        for id in ["minimalist", "modern"] {
            let html = generate_portfolio_html_for_year(&with_template(id), 2025).unwrap();
            assert!(!html.contains("id=\"achievements\""), "{id}");
            assert!(!html.contains("id=\"passion\""), "{id}");
            assert!(!html.contains("Hackathon Winner"), "{id}");
            assert!(html.contains("id=\"skills\""), "{id}");
        }
    }

    #[test]
    fn test_section_order_is_respected() {
        let mut data = with_template("futuristic");
        data.section_order = vec![
            SectionKey::Education,
            SectionKey::Skills,
            SectionKey::Profile,
            SectionKey::Passion,
            SectionKey::Experience,
            SectionKey::Projects,
            SectionKey::Achievements,
        ];
        let html = generate_portfolio_html_for_year(&data, 2025).unwrap();
        let education = html.find("id=\"education\"").unwrap();
        let skills = html.find("id=\"skills\"").unwrap();
        let profile = html.find("id=\"profile\"").unwrap();
        assert!(education < skills && skills < profile);
    }

    #[test]
    fn test_studio_uses_fixed_order() {
        let mut data = with_template("studio");
        data.section_order.reverse();
        let html = generate_portfolio_html_for_year(&data, 2025).unwrap();
        let positions: Vec<usize> = [
            "id=\"profile\"",
            "id=\"projects\"",
            "id=\"passion\"",
            "id=\"skills\"",
            "id=\"experience\"",
            "id=\"achievements\"",
            "id=\"education\"",
        ]
        .iter()
        .map(|needle| html.find(needle).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("2 Items"));
        assert!(html.contains("<div class=\"logo\">YOUR NAME</div>"));
    }

    #[test]
    fn test_empty_email_omits_mailto_everywhere() {
        for t in TEMPLATES.iter() {
            let mut data = with_template(t.id());
            data.contact_email = String::new();
            let html = generate_portfolio_html_for_year(&data, 2025).unwrap();
            assert!(!html.contains("mailto:"), "{}", t.id());
        }
    }

    #[test]
    fn test_empty_socials_are_omitted() {
        for t in TEMPLATES.iter() {
            let mut data = with_template(t.id());
            data.socials.github = String::new();
            data.socials.linkedin = String::new();
            data.socials.twitter = String::new();
            let html = generate_portfolio_html_for_year(&data, 2025).unwrap();
            assert!(!html.contains(">GitHub"), "{}", t.id());
            assert!(!html.contains(">LinkedIn"), "{}", t.id());
            assert!(!html.contains("[TWITTER]"), "{}", t.id());
        }
    }

    #[test]
    fn test_empty_lists_render_empty_containers() {
        let mut data = with_template("futuristic");
        data.projects.clear();
        data.experience.clear();
        let html = generate_portfolio_html_for_year(&data, 2025).unwrap();
        assert!(html.contains("<div class=\"projects-grid\"></div>"));
        assert!(html.contains("id=\"experience\""));
        assert!(!html.contains("class=\"project-card"));
    }

    #[test]
    fn test_copyright_year_is_injected() {
        let html = generate_portfolio_html_for_year(&with_template("elegant"), 2031).unwrap();
        assert!(html.contains("&copy; 2031 Your Name"));
        let html = generate_portfolio_html_for_year(&with_template("techdoc"), 2031).unwrap();
        assert!(html.contains("© 2031 Your Name. Generated by Folio."));
    }

    #[test]
    fn test_template_specific_titles() {
        let cases = [
            ("futuristic", "<title>Your Name's Portfolio</title>"),
            ("elegant", "<title>Your Name</title>"),
            ("techdoc", "<title>Your Name - Documentation</title>"),
            ("studio", "<title>Your Name - Portfolio</title>"),
            ("cyber", "<title>Your Name [CYBER]</title>"),
        ];
        for (id, title) in cases {
            let html = generate_portfolio_html_for_year(&with_template(id), 2025).unwrap();
            assert!(html.contains(title), "{id}");
        }
    }

    #[test]
    fn test_font_imports_per_template() {
        let techdoc = generate_portfolio_html_for_year(&with_template("techdoc"), 2025).unwrap();
        assert!(!techdoc.contains("fonts.googleapis.com"));
        let cyber = generate_portfolio_html_for_year(&with_template("cyber"), 2025).unwrap();
        assert!(cyber.contains("family=Share+Tech+Mono"));
        let futuristic = generate_portfolio_html_for_year(&with_template("futuristic"), 2025).unwrap();
        assert!(futuristic.contains("family=Orbitron"));
    }

    #[test]
    fn test_cyber_footer_system_id() {
        let mut data = with_template("cyber");
        data.name = "Ada  Lovelace".to_string();
        let html = generate_portfolio_html_for_year(&data, 2025).unwrap();
        assert!(html.contains("System_ID: ADA__LOVELACE // v2.0.4"));
    }

    #[test]
    fn test_light_mode_changes_palette() {
        let dark = with_template("minimalist");
        let mut light = dark.clone();
        light.theme_settings.mode = ThemeMode::Light;
        let dark_html = generate_portfolio_html_for_year(&dark, 2025).unwrap();
        let light_html = generate_portfolio_html_for_year(&light, 2025).unwrap();
        assert!(dark_html.contains("--color-bg: #111827"));
        assert!(light_html.contains("--color-bg: #ffffff"));
    }

    #[test]
    fn test_minimalist_scenario() {
        let mut data = seed_portfolio();
        data.name = "Jane Doe".to_string();
        data.theme_settings = ThemeSettings {
            template_id: "minimalist".to_string(),
            primary_color: "#22d3ee".to_string(),
            font_pair: "inter-lora".to_string(),
            mode: ThemeMode::Dark,
        };
        data.skills = vec!["Go".to_string(), "Rust".to_string()];
        data.projects = Vec::new();
        data.contact_email = String::new();

        let html = generate_portfolio_html(&data).unwrap();
        assert!(html.contains("Jane Doe"));
        assert!(html.contains("<span class=\"skill-tag\">Go</span>"));
        assert!(html.contains("<span class=\"skill-tag\">Rust</span>"));
        assert!(!html.contains("class=\"project-card\""));
        assert!(!html.contains("mailto:"));
    }

    #[test]
    fn test_catalog_lists_supported_sections() {
        let catalog = template_catalog();
        assert_eq!(catalog.len(), 8);
        let minimalist = catalog.iter().find(|t| t.id == "minimalist").unwrap();
        assert_eq!(minimalist.supported_sections.len(), 5);
        assert!(!minimalist.fixed_order);
        let studio = catalog.iter().find(|t| t.id == "studio").unwrap();
        assert!(studio.fixed_order);
        assert_eq!(studio.supported_sections[1], SectionKey::Projects);
    }
}
