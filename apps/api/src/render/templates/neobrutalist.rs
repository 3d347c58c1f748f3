//! Neobrutalist: thick borders and hard offset shadows, one card per section.

use crate::models::portfolio::SectionKey;
use crate::render::document::{render_list, Page, SocialLink, TemplateGenerator};

pub struct Neobrutalist;

const CSS: &str = r#"
*, *::before, *::after { box-sizing: border-box; }
body { margin: 0; background-color: var(--color-bg-main); color: var(--color-text-main); font-family: var(--font-body); -webkit-font-smoothing: antialiased; }
.container { max-width: 56rem; margin: 0 auto; padding: 2rem; }
@media (min-width: 768px) { .container { padding: 3rem; } }
header { display: flex; flex-direction: column; align-items: center; gap: 1.5rem; margin-bottom: 3rem; }
header img { width: 8rem; height: 8rem; border-radius: 9999px; object-fit: cover; border: 3px solid var(--color-text-main); box-shadow: 6px 6px 0px var(--color-text-main); }
header .info { text-align: center; }
header h1 { font-family: var(--font-heading); font-size: 3rem; font-weight: 700; margin: 0; }
header .tagline { font-size: 1.25rem; font-weight: 500; color: var(--primary-color); }
@media (min-width: 640px) { header { flex-direction: row; } header .info { text-align: left; } }
main { display: grid; gap: 2.5rem; }
.section-title { font-family: var(--font-heading); font-size: 1.125rem; font-weight: 700; text-transform: uppercase; letter-spacing: .05em; margin: 0 0 1.5rem 0; display: inline-block; }
.brutalist-card { background-color: var(--color-card-bg); border: 3px solid var(--color-text-main); box-shadow: 8px 8px 0px var(--primary-color); padding: 1.5rem 2rem; }
#passion .brutalist-card { text-align: center; }
#passion p { font-size: 1.125rem; font-weight: 500; color: var(--primary-color); }
.skills-container { display: flex; flex-wrap: wrap; gap: 0.75rem; }
.skill-tag { background-color: var(--color-card-bg); border: 2px solid var(--color-text-main); padding: 0.25rem 0.75rem; font-weight: 500; }
.experience-list, .achievements-list, .education-list { display: grid; gap: 1.5rem; }
.experience-item h3, .education-item h3, .achievement-item h3 { font-size: 1.25rem; font-weight: 700; font-family: var(--font-heading); margin: 0; }
.experience-item .company { color: var(--primary-color); font-weight: 600; }
.duration { font-size: 0.875rem; text-transform: uppercase; font-weight: 600; opacity: 0.7; margin: 0.25rem 0; }
.experience-item p, .achievement-item p { margin: 0.25rem 0 0 0; }
.education-item .degree { font-weight: 600; }
.projects-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 1.5rem; }
.project-card { display: block; text-decoration: none; color: inherit; background-color: var(--color-card-bg); border: 3px solid var(--color-text-main); box-shadow: 6px 6px 0px var(--color-text-main); transition: all 0.2s ease-in-out; }
.project-card:hover { box-shadow: 8px 8px 0px var(--primary-color); transform: translate(-2px, -2px); border-color: var(--primary-color); }
.project-card img { width: 100%; height: 13rem; object-fit: cover; border-bottom: 2px solid var(--color-text-main); }
.project-card .info { padding: 1rem; }
.project-card h3 { font-size: 1.125rem; font-family: var(--font-heading); margin: 0 0 0.25rem 0; }
.project-card p { font-size: 0.875rem; margin: 0; }
#contact { text-align: center; }
#contact p { margin-bottom: 1.5rem; }
a.contact-button { display: inline-block; font-weight: 700; font-size: 1.125rem; background-color: var(--primary-color); color: var(--button-text); padding: 0.75rem 1.5rem; border: 3px solid var(--color-text-main); box-shadow: 6px 6px 0px var(--color-text-main); text-decoration: none; transition: all 0.2s ease-in-out; }
a.contact-button:hover { box-shadow: 8px 8px 0px var(--color-text-main); transform: translate(-2px, -2px); }
footer { text-align: center; margin-top: 3rem; padding-top: 2rem; border-top: 2px solid var(--color-text-main); }
footer p { opacity: 0.7; }
footer .social-links { display: flex; justify-content: center; gap: 1rem; margin-top: 0.5rem; }
footer a { font-weight: 700; text-decoration: underline; color: inherit; }
footer a:hover { color: var(--primary-color); }
"#;

/// Wraps section content in the shared card frame.
fn card(id: &str, title: &str, inner: &str) -> String {
    format!(
        "<section id=\"{id}\"><div class=\"brutalist-card\"><h2 class=\"section-title\">{title}</h2>{inner}</div></section>"
    )
}

impl TemplateGenerator for Neobrutalist {
    fn id(&self) -> &'static str {
        "neobrutalist"
    }

    fn display_name(&self) -> &'static str {
        "Neobrutalist"
    }

    fn title(&self, page: &Page<'_>) -> String {
        format!("{}'s Portfolio", page.name())
    }

    fn stylesheet(&self, page: &Page<'_>) -> String {
        format!(
            ":root {{ --primary-color: {accent}; --font-body: {body}; --font-heading: {heading}; \
             --color-bg-main: {bg}; --color-text-main: {text}; --color-card-bg: {card}; --button-text: {button}; }}{CSS}",
            accent = page.accent,
            body = page.fonts.body,
            heading = page.fonts.heading,
            bg = page.pick("#1a1a1a", "#f0f0f0"),
            text = page.pick("#e0e0e0", "#1a1a1a"),
            card = page.pick("#111111", "#ffffff"),
            button = page.pick("#000", "#fff"),
        )
    }

    fn render_section(&self, key: SectionKey, page: &Page<'_>) -> String {
        let data = page.data;
        match key {
            SectionKey::Profile => card(
                "profile",
                "Profile",
                &format!("<p>{}</p>", page.text(&data.bio)),
            ),
            SectionKey::Passion => card(
                "passion",
                "Passion",
                &format!("<p>{}</p>", page.text(&data.passion)),
            ),
            SectionKey::Skills => card(
                "skills",
                "Skills",
                &format!(
                    "<div class=\"skills-container\">{}</div>",
                    render_list(&data.skills, |s| format!(
                        "<span class=\"skill-tag\">{}</span>",
                        page.text(s)
                    ))
                ),
            ),
            SectionKey::Experience => card(
                "experience",
                "Experience",
                &format!(
                    "<div class=\"experience-list\">{}</div>",
                    render_list(&data.experience, |exp| format!(
                        "<div class=\"experience-item\"><h3>{}</h3><p class=\"company\">{}</p>\
                         <p class=\"duration\">{}</p><p>{}</p></div>",
                        page.text(&exp.role),
                        page.text(&exp.company),
                        page.text(&exp.duration),
                        page.text(&exp.description)
                    ))
                ),
            ),
            SectionKey::Projects => card(
                "projects",
                "Projects",
                &format!(
                    "<div class=\"projects-grid\">{}</div>",
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
            ),
            SectionKey::Achievements => card(
                "achievements",
                "Achievements",
                &format!(
                    "<div class=\"achievements-list\">{}</div>",
                    render_list(&data.achievements, |a| format!(
                        "<div class=\"achievement-item\"><h3>{}</h3><p>{}</p></div>",
                        page.text(&a.title),
                        page.text(&a.description)
                    ))
                ),
            ),
            SectionKey::Education => card(
                "education",
                "Education",
                &format!(
                    "<div class=\"education-list\">{}</div>",
                    render_list(&data.education, |e| format!(
                        "<div class=\"education-item\"><h3>{}</h3><p class=\"degree\">{}</p>\
                         <p class=\"duration\">{}</p></div>",
                        page.text(&e.institution),
                        page.text(&e.degree),
                        page.text(&e.duration)
                    ))
                ),
            ),
        }
    }

    fn body(&self, page: &Page<'_>, sections: &str) -> String {
        let data = page.data;
        let contact = page
            .mailto()
            .map(|href| {
                card(
                    "contact",
                    "Get In Touch",
                    &format!(
                        "<p>Have a project in mind or just want to say hi?</p>\
                         <a href=\"{href}\" class=\"contact-button\">Send an Email</a>"
                    ),
                )
            })
            .unwrap_or_default();
        format!(
            "<div class=\"container\">\n\
             <header><img src=\"{avatar}\" alt=\"{alt}'s avatar\"><div class=\"info\"><h1>{name}</h1>\
             <p class=\"tagline\">{tagline}</p></div></header>\n\
             <main>\n{sections}\n{contact}\n</main>\n\
             <footer><p>Designed with Folio</p><div class=\"social-links\">{socials}</div></footer>\n</div>",
            avatar = page.url(&data.avatar_url),
            alt = page.attr(&data.name),
            name = page.name(),
            tagline = page.text(&data.tagline),
            socials = page.social_anchors(&[SocialLink::GitHub, SocialLink::LinkedIn], None),
        )
    }
}
