//! Shared document driver for all templates.
//!
//! A template only supplies what differs visually: its stylesheet, one fragment
//! renderer per section key, and the body layout wrapped around the rendered
//! sections. The driver resolves theme parameters once, decides which sections
//! render in which order, and assembles the complete standalone document.
//!
//! Output is a pure function of `(template, record, year)`.

use chrono::{Datelike, Utc};

use crate::models::portfolio::{normalize_section_order, PortfolioData, SectionKey, ThemeMode};
use crate::render::fonts::{font_import_markup, resolve_fonts, FontFamilies};
use crate::render::sanitize::{css_color, escape_attr, safe_url, sanitize};

// ────────────────────────────────────────────────────────────────────────────
// Generator trait
// ────────────────────────────────────────────────────────────────────────────

/// One visual template. Implementations are stateless unit structs held in the
/// static registry.
pub trait TemplateGenerator: Send + Sync {
    /// Registry key stored in `themeSettings.templateId`.
    fn id(&self) -> &'static str;

    fn display_name(&self) -> &'static str;

    /// Section keys this template knows how to render. Keys outside this set
    /// are skipped even when present in the record's order.
    fn supported_sections(&self) -> &'static [SectionKey] {
        &SectionKey::ALL
    }

    /// A template with its own fixed section order ignores the record's order.
    fn fixed_order(&self) -> Option<&'static [SectionKey]> {
        None
    }

    /// Content of the `<title>` element, already escaped.
    fn title(&self, page: &Page<'_>) -> String;

    fn font_imports(&self, page: &Page<'_>) -> String {
        font_import_markup(&page.data.theme_settings.font_pair)
    }

    fn stylesheet(&self, page: &Page<'_>) -> String;

    fn render_section(&self, key: SectionKey, page: &Page<'_>) -> String;

    /// Everything inside `<body>`, given the concatenated section fragments.
    fn body(&self, page: &Page<'_>, sections: &str) -> String;
}

// ────────────────────────────────────────────────────────────────────────────
// Render context
// ────────────────────────────────────────────────────────────────────────────

/// Social profile links a template may render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialLink {
    GitHub,
    LinkedIn,
    Twitter,
}

impl SocialLink {
    pub fn label(self) -> &'static str {
        match self {
            SocialLink::GitHub => "GitHub",
            SocialLink::LinkedIn => "LinkedIn",
            SocialLink::Twitter => "Twitter",
        }
    }
}

/// Resolved theme parameters plus escaping helpers bound to one record.
pub struct Page<'a> {
    pub data: &'a PortfolioData,
    /// CSS-safe accent color.
    pub accent: String,
    pub mode: ThemeMode,
    pub fonts: FontFamilies,
    pub year: i32,
    /// Sections that will render, in order.
    pub sections: Vec<SectionKey>,
}

impl<'a> Page<'a> {
    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    /// Picks the dark or light variant of a style value.
    pub fn pick(&self, dark: &'static str, light: &'static str) -> &'static str {
        if self.is_dark() {
            dark
        } else {
            light
        }
    }

    /// Text content.
    pub fn text(&self, value: &str) -> String {
        sanitize(value)
    }

    /// Plain attribute value (alt text, titles).
    pub fn attr(&self, value: &str) -> String {
        escape_attr(value)
    }

    /// `href` / `src` value.
    pub fn url(&self, value: &str) -> String {
        safe_url(value)
    }

    pub fn name(&self) -> String {
        sanitize(&self.data.name)
    }

    /// `mailto:` href for the contact email, or `None` when no email is set.
    pub fn mailto(&self) -> Option<String> {
        let email = self.data.contact_email.trim();
        if email.is_empty() {
            None
        } else {
            Some(safe_url(&format!("mailto:{email}")))
        }
    }

    /// The requested social links that are set, in the requested order, as
    /// `(label, href)` pairs.
    pub fn socials(&self, wanted: &[SocialLink]) -> Vec<(&'static str, String)> {
        let socials = &self.data.socials;
        wanted
            .iter()
            .filter_map(|link| {
                let value = match link {
                    SocialLink::GitHub => &socials.github,
                    SocialLink::LinkedIn => &socials.linkedin,
                    SocialLink::Twitter => &socials.twitter,
                };
                if value.trim().is_empty() {
                    None
                } else {
                    Some((link.label(), safe_url(value)))
                }
            })
            .collect()
    }

    /// Renders the set social links as external anchors.
    pub fn social_anchors(&self, wanted: &[SocialLink], class: Option<&str>) -> String {
        let class_attr = class
            .map(|c| format!(" class=\"{c}\""))
            .unwrap_or_default();
        self.socials(wanted)
            .into_iter()
            .map(|(label, href)| {
                format!(
                    "<a href=\"{href}\"{class_attr} target=\"_blank\" rel=\"noopener noreferrer\">{label}</a>"
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Concatenates one rendered fragment per item.
pub fn render_list<T>(items: &[T], render: impl Fn(&T) -> String) -> String {
    items.iter().map(render).collect::<Vec<_>>().join("\n")
}

// ────────────────────────────────────────────────────────────────────────────
// Driver
// ────────────────────────────────────────────────────────────────────────────

/// The sections a template renders for a record, in render order.
pub fn section_order(generator: &dyn TemplateGenerator, data: &PortfolioData) -> Vec<SectionKey> {
    if let Some(fixed) = generator.fixed_order() {
        return fixed.to_vec();
    }
    let supported = generator.supported_sections();
    normalize_section_order(&data.section_order)
        .into_iter()
        .filter(|key| supported.contains(key))
        .collect()
}

/// Renders with the current UTC year in copyright lines.
pub fn render_document(generator: &dyn TemplateGenerator, data: &PortfolioData) -> String {
    render_document_for_year(generator, data, Utc::now().year())
}

pub fn render_document_for_year(
    generator: &dyn TemplateGenerator,
    data: &PortfolioData,
    year: i32,
) -> String {
    let page = Page {
        data,
        accent: css_color(&data.theme_settings.primary_color),
        mode: data.theme_settings.mode,
        fonts: resolve_fonts(&data.theme_settings.font_pair),
        year,
        sections: section_order(generator, data),
    };

    let sections = page
        .sections
        .iter()
        .map(|key| generator.render_section(*key, &page))
        .collect::<Vec<_>>()
        .join("\n");

    let mut html = String::with_capacity(16 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str(&format!("<title>{}</title>\n", generator.title(&page)));
    let imports = generator.font_imports(&page);
    if !imports.is_empty() {
        html.push_str(&imports);
        html.push('\n');
    }
    html.push_str("<style>");
    html.push_str(&generator.stylesheet(&page));
    html.push_str("</style>\n</head>\n<body>\n");
    html.push_str(&generator.body(&page, &sections));
    html.push_str("\n</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::seed::seed_portfolio;

    struct Bare;

    impl TemplateGenerator for Bare {
        fn id(&self) -> &'static str {
            "bare"
        }
        fn display_name(&self) -> &'static str {
            "Bare"
        }
        fn supported_sections(&self) -> &'static [SectionKey] {
            &[SectionKey::Skills, SectionKey::Profile]
        }
        fn title(&self, page: &Page<'_>) -> String {
            page.name()
        }
        fn stylesheet(&self, page: &Page<'_>) -> String {
            format!("body {{ color: {}; }}", page.accent)
        }
        fn render_section(&self, key: SectionKey, _page: &Page<'_>) -> String {
            format!("[{}]", key.as_str())
        }
        fn body(&self, page: &Page<'_>, sections: &str) -> String {
            format!("{sections}|{}", page.year)
        }
    }

    #[test]
    fn test_driver_filters_to_supported_sections_in_record_order() {
        let mut data = seed_portfolio();
        data.section_order = vec![
            SectionKey::Skills,
            SectionKey::Education,
            SectionKey::Passion,
            SectionKey::Profile,
            SectionKey::Projects,
            SectionKey::Achievements,
            SectionKey::Experience,
        ];
        assert_eq!(
            section_order(&Bare, &data),
            vec![SectionKey::Skills, SectionKey::Profile]
        );
        let html = render_document_for_year(&Bare, &data, 2031);
        assert!(html.contains("[skills]\n[profile]|2031"));
    }

    #[test]
    fn test_driver_emits_complete_document() {
        let data = seed_portfolio();
        let html = render_document_for_year(&Bare, &data, 2024);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Your Name</title>"));
        assert!(html.contains("<style>body { color: #22d3ee; }</style>"));
        assert!(html.contains("fonts.googleapis.com"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_mailto_omitted_for_blank_email() {
        let mut data = seed_portfolio();
        data.contact_email = "   ".to_string();
        let page = Page {
            data: &data,
            accent: css_color(&data.theme_settings.primary_color),
            mode: data.theme_settings.mode,
            fonts: resolve_fonts(&data.theme_settings.font_pair),
            year: 2024,
            sections: Vec::new(),
        };
        assert!(page.mailto().is_none());
    }

    #[test]
    fn test_socials_skip_empty_and_keep_requested_order() {
        let mut data = seed_portfolio();
        data.socials.github = String::new();
        data.socials.twitter = "javascript:alert(1)".to_string();
        let page = Page {
            data: &data,
            accent: css_color(&data.theme_settings.primary_color),
            mode: data.theme_settings.mode,
            fonts: resolve_fonts(&data.theme_settings.font_pair),
            year: 2024,
            sections: Vec::new(),
        };
        let links = page.socials(&[SocialLink::Twitter, SocialLink::GitHub, SocialLink::LinkedIn]);
        assert_eq!(links.len(), 2);
        assert_eq!(links[0], ("Twitter", "#".to_string()));
        assert_eq!(links[1].0, "LinkedIn");
    }
}
