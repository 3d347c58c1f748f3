//! Futuristic: glass panes and numbered section titles on a dark backdrop.

use crate::models::portfolio::SectionKey;
use crate::render::document::{render_list, Page, SocialLink, TemplateGenerator};

pub struct Futuristic;

const CSS: &str = r#"
*, *::before, *::after { box-sizing: border-box; }
body { margin: 0; background-color: var(--color-bg); color: var(--color-text); font-family: var(--font-body); min-height: 100vh; -webkit-font-smoothing: antialiased; }
.container { max-width: 80rem; margin: 0 auto; padding: 4rem 2rem; }
.background-effects { position: fixed; inset: 0; z-index: -1; background: radial-gradient(circle at top left, var(--accent-10), transparent 30%), radial-gradient(circle at bottom right, var(--accent-10), transparent 30%); }
.glass-pane { background-color: var(--glass-bg); -webkit-backdrop-filter: blur(12px); backdrop-filter: blur(12px); border: 1px solid var(--glass-border); box-shadow: var(--glass-shadow); }
header { display: flex; flex-direction: column; align-items: center; text-align: center; gap: 2rem; margin-bottom: 8rem; }
header img { width: 10rem; height: 10rem; border-radius: 9999px; object-fit: cover; border: 4px solid var(--primary-color); box-shadow: 0 0 25px var(--accent-20); }
header h1 { font-family: var(--font-heading); font-size: 3.75rem; font-weight: 900; text-transform: uppercase; color: var(--color-heading-text); letter-spacing: 0.05em; margin: 0; }
header p { font-size: 1.25rem; color: var(--primary-color); margin: 0; font-weight: 600; }
@media (min-width: 768px) { header { flex-direction: row; text-align: left; } }
main { max-width: 56rem; margin: 0 auto; display: grid; gap: 7rem; }
.section-title { font-family: var(--font-heading); font-size: 1.5rem; font-weight: 700; text-align: center; text-transform: uppercase; letter-spacing: 0.1em; color: var(--primary-color); margin: 0 0 2.5rem 0; }
#profile p { line-height: 1.6; max-width: 48rem; margin: 0 auto; text-align: center; padding: 2rem; border-radius: 1rem; font-weight: 500; }
#passion { text-align: center; }
#passion .content { padding: 2rem; border-radius: 1rem; border: 1px solid var(--accent-30); }
#passion h3 { font-family: var(--font-heading); font-size: 1.5rem; color: var(--color-heading-text); margin: 0 0 1rem 0; }
#passion p { color: var(--primary-color); font-size: 1.125rem; max-width: 42rem; margin: 0 auto; font-weight: 600; }
.skills-container { display: flex; flex-wrap: wrap; justify-content: center; gap: 0.75rem; }
.skill-tag { padding: 0.5rem 1rem; background-color: var(--tag-bg); border: 1px solid var(--accent-30); color: var(--primary-color); border-radius: 9999px; font-size: 0.875rem; font-weight: 600; }
.timeline { position: relative; border-left: 2px solid var(--accent-30); padding-left: 2rem; display: grid; gap: 3rem; }
.timeline-item { position: relative; }
.timeline-item::before { content: ''; position: absolute; left: -2.5rem; top: 0.25rem; width: 1.25rem; height: 1.25rem; background-color: var(--primary-color); border-radius: 9999px; border: 4px solid var(--color-bg); box-shadow: 0 0 10px var(--primary-color); }
.timeline-item .duration { font-size: 0.875rem; color: var(--color-text-light); margin: 0 0 0.25rem 0; font-weight: 600; }
.timeline-item h3 { font-family: var(--font-heading); font-size: 1.25rem; color: var(--color-heading-text); margin: 0; }
.timeline-item .company { color: var(--primary-color); margin: 0.25rem 0 0.5rem 0; font-weight: bold; }
.timeline-item p { margin: 0; }
.projects-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 2rem; }
.project-card { display: block; text-decoration: none; color: inherit; border-radius: 0.5rem; overflow: hidden; transition: transform 0.3s ease, box-shadow 0.3s ease; }
.project-card:hover { transform: translateY(-5px); box-shadow: 0 0 20px var(--accent-25); border-color: var(--primary-color); }
.project-card img { width: 100%; height: 15rem; object-fit: cover; }
.project-card .info { padding: 1.5rem; }
.project-card h3 { font-family: var(--font-heading); font-size: 1.25rem; color: var(--color-heading-text); margin: 0 0 0.5rem 0; }
.project-card p { font-size: 0.875rem; margin: 0; }
.achievements-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 1.5rem; }
.achievement-card { padding: 1.5rem; border-radius: 0.5rem; }
.achievement-card h3 { font-family: var(--font-heading); font-size: 1.125rem; color: var(--primary-color); margin: 0; }
.achievement-card p { color: var(--color-text-light); margin: 0.25rem 0 0 0; }
#contact .contact-content { text-align: center; max-width: 36rem; margin: 0 auto; }
#contact p { margin-bottom: 1.5rem; font-size: 1.125rem; font-weight: 500; }
a.contact-button { display: inline-block; padding: 1rem 2rem; border: 2px solid var(--primary-color); color: var(--primary-color); font-weight: bold; font-family: var(--font-heading); text-transform: uppercase; text-decoration: none; border-radius: 0.5rem; transition: all 0.3s ease-in-out; }
a.contact-button:hover { background-color: var(--primary-color); color: #000; box-shadow: 0 0 20px var(--primary-color); transform: scale(1.05); }
footer { text-align: center; padding-top: 3rem; margin-top: 7rem; border-top: 1px solid var(--footer-border); }
footer .social-links { display: flex; justify-content: center; gap: 1.5rem; margin-bottom: 1rem; }
footer a { color: var(--color-text-light); text-decoration: none; transition: color 0.3s; }
footer a:hover { color: var(--primary-color); }
footer p { color: var(--color-text-light); font-size: 0.875rem; margin: 0; }
"#;

impl TemplateGenerator for Futuristic {
    fn id(&self) -> &'static str {
        "futuristic"
    }

    fn display_name(&self) -> &'static str {
        "Futuristic"
    }

    fn title(&self, page: &Page<'_>) -> String {
        format!("{}'s Portfolio", page.name())
    }

    fn stylesheet(&self, page: &Page<'_>) -> String {
        let accent = &page.accent;
        format!(
            ":root {{ --primary-color: {accent}; --accent-10: {accent}1A; --accent-20: {accent}33; \
             --accent-25: {accent}40; --accent-30: {accent}4D; --font-body: {body}; --font-heading: {heading}; \
             --color-bg: {bg}; --color-text: {text}; --color-text-light: {light}; --color-heading-text: {head}; \
             --glass-bg: {glass}; --glass-border: {glass_border}; --glass-shadow: {shadow}; --tag-bg: {tag}; \
             --footer-border: {footer}; }}{CSS}",
            body = page.fonts.body,
            heading = page.fonts.heading,
            bg = page.pick("#0A0A0A", "#e2e8f0"),
            text = page.pick("#e5e7eb", "#334155"),
            light = page.pick("#9ca3af", "#64748b"),
            head = page.pick("#ffffff", "#0f172a"),
            glass = page.pick("rgba(255, 255, 255, 0.05)", "rgba(255, 255, 255, 0.7)"),
            glass_border = page.pick("rgba(255, 255, 255, 0.1)", "rgba(0, 0, 0, 0.05)"),
            shadow = page.pick("none", "0 4px 6px rgba(0,0,0,0.05)"),
            tag = page.pick("rgba(55, 65, 81, 0.5)", "rgba(255, 255, 255, 0.8)"),
            footer = page.pick("#1f2937", "#cbd5e1"),
        )
    }

    fn render_section(&self, key: SectionKey, page: &Page<'_>) -> String {
        let data = page.data;
        match key {
            SectionKey::Profile => format!(
                "<section id=\"profile\"><h2 class=\"section-title\">01 // PROFILE</h2><p class=\"glass-pane\">{}</p></section>",
                page.text(&data.bio)
            ),
            SectionKey::Passion => format!(
                "<section id=\"passion\"><div class=\"content glass-pane\"><h3>My Passion</h3><p>{}</p></div></section>",
                page.text(&data.passion)
            ),
            SectionKey::Skills => format!(
                "<section id=\"skills\"><h2 class=\"section-title\">02 // ARSENAL</h2><div class=\"skills-container\">{}</div></section>",
                render_list(&data.skills, |s| format!(
                    "<span class=\"skill-tag\">{}</span>",
                    page.text(s)
                ))
            ),
            SectionKey::Experience => format!(
                "<section id=\"experience\"><h2 class=\"section-title\">03 // CHRONICLES</h2><div class=\"timeline\">{}</div></section>",
                render_list(&data.experience, |exp| format!(
                    "<div class=\"timeline-item\"><p class=\"duration\">{}</p><h3>{}</h3><p class=\"company\">{}</p><p>{}</p></div>",
                    page.text(&exp.duration),
                    page.text(&exp.role),
                    page.text(&exp.company),
                    page.text(&exp.description)
                ))
            ),
            SectionKey::Projects => format!(
                "<section id=\"projects\"><h2 class=\"section-title\">04 // BLUEPRINTS</h2><div class=\"projects-grid\">{}</div></section>",
                render_list(&data.projects, |p| format!(
                    "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"project-card glass-pane\">\
                     <img src=\"{}\" alt=\"{}\"><div class=\"info\"><h3>{}</h3><p>{}</p></div></a>",
                    page.url(&p.link),
                    page.url(&p.image_url),
                    page.attr(&p.name),
                    page.text(&p.name),
                    page.text(&p.description)
                ))
            ),
            SectionKey::Achievements => format!(
                "<section id=\"achievements\"><h2 class=\"section-title\">05 // ACCOLADES</h2><div class=\"achievements-grid\">{}</div></section>",
                render_list(&data.achievements, |a| format!(
                    "<div class=\"achievement-card glass-pane\"><h3>{}</h3><p>{}</p></div>",
                    page.text(&a.title),
                    page.text(&a.description)
                ))
            ),
            SectionKey::Education => format!(
                "<section id=\"education\"><h2 class=\"section-title\">06 // ORIGINS</h2><div class=\"timeline\">{}</div></section>",
                render_list(&data.education, |e| format!(
                    "<div class=\"timeline-item\"><p class=\"duration\">{}</p><h3>{}</h3><p class=\"company\">{}</p></div>",
                    page.text(&e.duration),
                    page.text(&e.institution),
                    page.text(&e.degree)
                ))
            ),
        }
    }

    fn body(&self, page: &Page<'_>, sections: &str) -> String {
        let data = page.data;
        let contact = page
            .mailto()
            .map(|href| {
                format!(
                    "<section id=\"contact\"><h2 class=\"section-title\">07 // CONNECT</h2><div class=\"contact-content\">\
                     <p>I'm currently available for freelance work and open to discussing new projects. Let's create something amazing together.</p>\
                     <a href=\"{href}\" class=\"contact-button\">Get In Touch</a></div></section>"
                )
            })
            .unwrap_or_default();
        format!(
            "<div class=\"background-effects\"></div>\n<div class=\"container\">\n\
             <header><img src=\"{avatar}\" alt=\"{alt}'s avatar\"><div><h1>{name}</h1><p>{tagline}</p></div></header>\n\
             <main>\n{sections}\n{contact}\n</main>\n\
             <footer><div class=\"social-links\">{socials}</div><p>Designed with Folio</p></footer>\n</div>",
            avatar = page.url(&data.avatar_url),
            alt = page.attr(&data.name),
            name = page.name(),
            tagline = page.text(&data.tagline),
            socials = page.social_anchors(&[SocialLink::GitHub, SocialLink::LinkedIn], None),
        )
    }
}
