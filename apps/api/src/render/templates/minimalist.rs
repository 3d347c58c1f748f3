//! Minimalist: single column. Passion and achievements are not rendered.

use crate::models::portfolio::SectionKey;
use crate::render::document::{render_list, Page, SocialLink, TemplateGenerator};

pub struct Minimalist;

const SUPPORTED: &[SectionKey] = &[
    SectionKey::Profile,
    SectionKey::Skills,
    SectionKey::Experience,
    SectionKey::Projects,
    SectionKey::Education,
];

const CSS: &str = r#"
*, *::before, *::after { box-sizing: border-box; }
body { margin: 0; background-color: var(--color-bg); color: var(--color-text); font-family: var(--font-body); -webkit-font-smoothing: antialiased; }
.container { max-width: 56rem; margin: 0 auto; padding: 4rem 2rem; }
header { display: flex; flex-direction: column; align-items: center; gap: 2rem; margin-bottom: 4rem; }
header img { width: 8rem; height: 8rem; border-radius: 9999px; object-fit: cover; box-shadow: 0 0 0 4px var(--color-bg), 0 0 0 8px var(--primary-color); }
header .info { text-align: center; }
header h1 { font-family: var(--font-heading); font-size: 3rem; font-weight: 700; color: var(--color-heading); margin: 0; }
header .tagline { font-size: 1.25rem; color: var(--primary-color); margin-top: 0.25rem; }
header .socials { display: flex; justify-content: center; gap: 1rem; margin-top: 1rem; color: var(--color-light-text); }
header .socials a { color: inherit; text-decoration: none; transition: color 0.3s; }
header .socials a:hover { color: var(--primary-color); }
@media (min-width: 640px) { header { flex-direction: row; } header .info { text-align: left; } header .socials { justify-content: flex-start; } }
main { display: grid; gap: 4rem; }
.section-title { font-family: var(--font-heading); font-size: 1.75rem; font-weight: 700; color: var(--color-heading); margin: 0 0 1.5rem 0; padding-bottom: 0.5rem; border-bottom: 2px solid var(--primary-color); display: inline-block; }
#profile p { font-size: 1.125rem; line-height: 1.7; }
.skills-container { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.skill-tag { padding: 0.25rem 0.75rem; background-color: var(--color-skill-bg); color: var(--color-skill-text); border-radius: 0.375rem; font-weight: 500; }
.experience-list { display: grid; gap: 2rem; }
.item-header { display: flex; justify-content: space-between; align-items: baseline; }
.experience-item h3, .education-item h3 { font-size: 1.25rem; font-weight: 700; color: var(--color-heading); margin: 0; }
.duration { font-size: 0.875rem; color: var(--color-light-text); }
.experience-item .company { color: var(--primary-color); font-weight: 600; margin: 0.125rem 0; }
.projects-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 2rem; }
.project-card { display: block; text-decoration: none; color: inherit; border: 1px solid var(--color-border); border-radius: 0.5rem; overflow: hidden; transition: all 0.3s; background-color: var(--color-card-bg); }
.project-card:hover { box-shadow: 0 10px 15px -3px rgba(0,0,0,0.1); border-color: var(--primary-color); }
.project-card img { width: 100%; height: 13rem; object-fit: cover; }
.project-card .info { padding: 1.25rem; }
.project-card h3 { font-size: 1.125rem; color: var(--color-heading); margin: 0 0 0.25rem 0; }
.project-card p { font-size: 0.875rem; }
.education-list { display: grid; gap: 1.5rem; }
#contact { text-align: center; }
#contact p { font-size: 1.125rem; margin-bottom: 1.5rem; }
a.contact-button { display: inline-block; padding: 0.75rem 2rem; border: 2px solid var(--primary-color); border-radius: 0.375rem; font-size: 1.125rem; font-weight: 600; text-decoration: none; color: var(--color-text); transition: all 0.3s ease-in-out; }
a.contact-button:hover { background-color: var(--primary-color); color: var(--button-hover-text); }
footer { text-align: center; margin-top: 5rem; padding-top: 2rem; border-top: 1px solid var(--color-border); }
footer p { color: var(--color-light-text); font-size: 0.875rem; }
"#;

impl TemplateGenerator for Minimalist {
    fn id(&self) -> &'static str {
        "minimalist"
    }

    fn display_name(&self) -> &'static str {
        "Minimalist"
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
             --color-bg: {bg}; --color-text: {text}; --color-heading: {head}; --color-light-text: {light}; \
             --color-border: {border}; --color-card-bg: {card}; --color-skill-bg: {skill_bg}; \
             --color-skill-text: {skill_text}; --button-hover-text: {hover}; }}{CSS}",
            accent = page.accent,
            body = page.fonts.body,
            heading = page.fonts.heading,
            bg = page.pick("#111827", "#ffffff"),
            text = page.pick("#d1d5db", "#374151"),
            head = page.pick("#ffffff", "#111827"),
            light = page.pick("#9ca3af", "#6b7280"),
            border = page.pick("#374151", "#e5e7eb"),
            card = page.pick("#1f2937", "#ffffff"),
            skill_bg = page.pick("#374151", "#f3f4f6"),
            skill_text = page.pick("#d1d5db", "#4b5563"),
            hover = page.pick("#000", "#fff"),
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
                "<section id=\"experience\"><h2 class=\"section-title\">Experience</h2><div class=\"experience-list\">{}</div></section>",
                render_list(&data.experience, |exp| format!(
                    "<div class=\"experience-item\"><div class=\"item-header\"><h3>{}</h3><p class=\"duration\">{}</p></div>\
                     <p class=\"company\">{}</p><p>{}</p></div>",
                    page.text(&exp.role),
                    page.text(&exp.duration),
                    page.text(&exp.company),
                    page.text(&exp.description)
                ))
            ),
            SectionKey::Projects => format!(
                "<section id=\"projects\"><h2 class=\"section-title\">Projects</h2><div class=\"projects-grid\">{}</div></section>",
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
        let socials = page
            .socials(&[SocialLink::GitHub, SocialLink::LinkedIn])
            .into_iter()
            .map(|(label, href)| {
                format!("<a href=\"{href}\" target=\"_blank\" rel=\"noopener noreferrer\">{label}</a>")
            })
            .collect::<Vec<_>>()
            .join("<span>&bull;</span>");
        let contact = page
            .mailto()
            .map(|href| {
                format!(
                    "<section id=\"contact\"><h2 class=\"section-title\">Get In Touch</h2>\
                     <p>Have a question or want to work together?</p>\
                     <a href=\"{href}\" class=\"contact-button\">Say Hello</a></section>"
                )
            })
            .unwrap_or_default();
        format!(
            "<div class=\"container\">\n\
             <header><img src=\"{avatar}\" alt=\"{alt}'s avatar\"><div class=\"info\"><h1>{name}</h1>\
             <p class=\"tagline\">{tagline}</p><div class=\"socials\">{socials}</div></div></header>\n\
             <main>\n{sections}\n{contact}\n</main>\n\
             <footer><p>Designed with Folio</p></footer>\n</div>",
            avatar = page.url(&data.avatar_url),
            alt = page.attr(&data.name),
            name = page.name(),
            tagline = page.text(&data.tagline),
        )
    }
}
