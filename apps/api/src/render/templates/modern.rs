//! Modern: centered hero with accent-underlined section titles.

use crate::models::portfolio::SectionKey;
use crate::render::document::{render_list, Page, SocialLink, TemplateGenerator};

pub struct Modern;

const SUPPORTED: &[SectionKey] = &[
    SectionKey::Profile,
    SectionKey::Skills,
    SectionKey::Experience,
    SectionKey::Projects,
    SectionKey::Education,
];

const CSS: &str = r#"
*, *::before, *::after { box-sizing: border-box; }
html { scroll-behavior: smooth; }
body { margin: 0; background-color: var(--color-bg); color: var(--color-text); font-family: var(--font-body); -webkit-font-smoothing: antialiased; line-height: 1.6; }
.container { max-width: 56rem; margin: 0 auto; padding: 2rem; }
@media (min-width: 768px) { .container { padding: 4rem 2rem; } }
header { text-align: center; margin-bottom: 5rem; }
header img { width: 9rem; height: 9rem; border-radius: 9999px; object-fit: cover; border: 4px solid var(--primary-color); box-shadow: 0 0 0 4px var(--color-bg), 0 0 0 8px var(--primary-color); }
header h1 { font-family: var(--font-heading); font-size: 3.75rem; font-weight: 800; margin: 1.5rem 0 0.5rem; color: var(--color-heading); }
header .tagline { font-size: 1.5rem; font-weight: 500; color: var(--primary-color); margin: 0; }
header .socials { display: flex; justify-content: center; gap: 1.5rem; margin-top: 1.5rem; }
.social-link { color: var(--color-text); font-weight: 600; text-decoration: none; transition: color 0.3s; }
.social-link:hover { color: var(--primary-color); }
main { display: grid; gap: 5rem; }
.section-title { font-family: var(--font-heading); font-size: 2rem; font-weight: 800; margin: 0 0 2rem 0; position: relative; display: inline-block; color: var(--color-heading); }
.section-title::after { content: ''; position: absolute; bottom: -8px; left: 0; width: 60%; height: 4px; background-color: var(--primary-color); }
#profile p { font-size: 1.125rem; line-height: 1.7; font-weight: 500; }
.skills-container { display: flex; flex-wrap: wrap; gap: 0.75rem; }
.skill-tag { background-color: var(--color-card-bg); border: 1px solid var(--color-border); padding: 0.5rem 1rem; border-radius: 0.5rem; font-weight: 600; }
.timeline { position: relative; border-left: 2px solid var(--primary-color); padding-left: 3rem; display: grid; gap: 3rem; }
.timeline-item { position: relative; }
.timeline-dot { position: absolute; left: -3.55rem; top: 0.25rem; width: 1.25rem; height: 1.25rem; background-color: var(--color-bg); border: 3px solid var(--primary-color); border-radius: 9999px; }
.timeline-item .duration { position: absolute; left: -2.5rem; top: 0.25rem; font-size: 0.875rem; opacity: 0.7; transform: rotate(-90deg); transform-origin: left top; font-weight: bold; white-space: nowrap; width: 5rem; text-align: center; }
.timeline-item h3 { font-family: var(--font-heading); font-size: 1.25rem; color: var(--color-heading); margin: 0; }
.timeline-item .company { font-weight: 600; color: var(--primary-color); margin: 0.25rem 0 0.5rem 0; }
.timeline-item p { margin: 0; opacity: 0.9; }
.projects-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 2rem; }
.project-card { display: block; text-decoration: none; color: inherit; background-color: var(--color-card-bg); border-radius: 0.75rem; border: 1px solid var(--color-border); box-shadow: 0 4px 6px -1px rgba(0,0,0,0.05); transition: all 0.3s ease-in-out; }
.project-card:hover { transform: translateY(-5px); border-color: var(--primary-color); }
.project-card img { width: 100%; height: 14rem; object-fit: cover; border-top-left-radius: 0.75rem; border-top-right-radius: 0.75rem; }
.project-card .info { padding: 1.5rem; }
.project-card h3 { font-family: var(--font-heading); font-size: 1.25rem; color: var(--color-heading); margin: 0 0 0.5rem 0; }
.project-card p { font-size: 0.875rem; opacity: 0.9; margin: 0; }
.education-list { display: grid; gap: 1.5rem; }
.education-item { border-bottom: 1px solid var(--color-border); padding-bottom: 1.5rem; }
.education-item:last-child { border-bottom: none; }
.education-item .item-header { display: flex; flex-direction: column; gap: 0.5rem; margin-bottom: 0.5rem; }
@media (min-width: 640px) { .education-item .item-header { flex-direction: row; justify-content: space-between; align-items: baseline; } }
.education-item h3 { font-size: 1.25rem; color: var(--color-heading); margin: 0; }
.education-item .duration { font-size: 0.875rem; opacity: 0.7; font-weight: 600; background: var(--color-card-bg); padding: 0.25rem 0.5rem; border-radius: 0.25rem; display: inline-block; }
#contact { text-align: center; }
#contact p { font-size: 1.125rem; max-width: 48rem; margin: 0 auto 2rem; opacity: 0.9; font-weight: 500; }
.contact-btn { display: inline-block; background-color: var(--primary-color); color: var(--button-text); padding: 0.875rem 2.5rem; border-radius: 0.5rem; font-size: 1.125rem; font-weight: 600; text-decoration: none; transition: all 0.2s ease; }
.contact-btn:hover { transform: scale(1.05); }
footer { text-align: center; margin-top: 6rem; padding-top: 2rem; border-top: 2px dashed var(--color-border); }
footer p { opacity: 0.6; font-size: 0.875rem; }
"#;

impl TemplateGenerator for Modern {
    fn id(&self) -> &'static str {
        "modern"
    }

    fn display_name(&self) -> &'static str {
        "Modern"
    }

    fn supported_sections(&self) -> &'static [SectionKey] {
        SUPPORTED
    }

    fn title(&self, page: &Page<'_>) -> String {
        format!("{}'s Portfolio", page.name())
    }

    fn stylesheet(&self, page: &Page<'_>) -> String {
        format!(
            ":root {{ --primary-color: {accent}; --font-body: {body}; --font-heading: {heading}; \
             --color-bg: {bg}; --color-text: {text}; --color-heading: {head}; --color-card-bg: {card}; \
             --color-border: {border}; --button-text: {button}; }}{CSS}",
            accent = page.accent,
            body = page.fonts.body,
            heading = page.fonts.heading,
            bg = page.pick("#111827", "#ffffff"),
            text = page.pick("#d1d5db", "#374151"),
            head = page.pick("#ffffff", "#111827"),
            card = page.pick("#1f2937", "#f3f4f6"),
            border = page.pick("#374151", "#e5e7eb"),
            button = page.pick("#000", "#fff"),
        )
    }

    fn render_section(&self, key: SectionKey, page: &Page<'_>) -> String {
        let data = page.data;
        match key {
            SectionKey::Profile => format!(
                "<section id=\"profile\"><h2 class=\"section-title\">About Me</h2><p>{}</p></section>",
                page.text(&data.bio)
            ),
            SectionKey::Skills => format!(
                "<section id=\"skills\"><h2 class=\"section-title\">Skills</h2><div class=\"skills-container\">{}</div></section>",
                render_list(&data.skills, |s| format!(
                    "<span class=\"skill-tag\">{}</span>",
                    page.text(s)
                ))
            ),
            SectionKey::Experience => format!(
                "<section id=\"experience\"><h2 class=\"section-title\">Experience</h2><div class=\"timeline\">{}</div></section>",
                render_list(&data.experience, |exp| format!(
                    "<div class=\"timeline-item\"><div class=\"timeline-dot\"></div><p class=\"duration\">{}</p>\
                     <h3>{}</h3><p class=\"company\">{}</p><p>{}</p></div>",
                    page.text(&exp.duration),
                    page.text(&exp.role),
                    page.text(&exp.company),
                    page.text(&exp.description)
                ))
            ),
            SectionKey::Projects => format!(
                "<section id=\"projects\"><h2 class=\"section-title\">Featured Projects</h2><div class=\"projects-grid\">{}</div></section>",
                render_list(&data.projects, |p| format!(
                    "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"project-card\">\
                     <img src=\"{}\" alt=\"{}\"><div class=\"info\"><h3>{}</h3><p>{}</p></div></a>",
                    page.url(&p.link),
                    page.url(&p.image_url),
                    page.attr(&p.name),
                    page.text(&p.name),
                    page.text(&p.description)
                ))
            ),
            SectionKey::Education => format!(
                "<section id=\"education\"><h2 class=\"section-title\">Education</h2><div class=\"education-list\">{}</div></section>",
                render_list(&data.education, |e| format!(
                    "<div class=\"education-item\"><div class=\"item-header\"><h3>{}</h3><p class=\"duration\">{}</p></div>\
                     <p class=\"degree\">{}</p></div>",
                    page.text(&e.institution),
                    page.text(&e.duration),
                    page.text(&e.degree)
                ))
            ),
            SectionKey::Passion | SectionKey::Achievements => String::new(),
        }
    }

    fn body(&self, page: &Page<'_>, sections: &str) -> String {
        let data = page.data;
        let contact = page
            .mailto()
            .map(|href| {
                format!(
                    "<section id=\"contact\"><h2 class=\"section-title\">Get In Touch</h2>\
                     <p>I'm always open to discussing new projects, creative ideas or opportunities to be part of your visions.</p>\
                     <a href=\"{href}\" class=\"contact-btn\">Say Hello</a></section>"
                )
            })
            .unwrap_or_default();
        format!(
            "<div class=\"container\">\n\
             <header><img src=\"{avatar}\" alt=\"{alt}'s avatar\"><h1>{name}</h1><p class=\"tagline\">{tagline}</p>\
             <div class=\"socials\">{socials}</div></header>\n\
             <main>\n{sections}\n{contact}\n</main>\n\
             <footer><p>Designed with Folio</p></footer>\n</div>",
            avatar = page.url(&data.avatar_url),
            alt = page.attr(&data.name),
            name = page.name(),
            tagline = page.text(&data.tagline),
            socials = page.social_anchors(&[SocialLink::GitHub, SocialLink::LinkedIn], Some("social-link")),
        )
    }
}
