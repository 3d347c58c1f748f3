//! TechDoc: documentation-site layout with a fixed sidebar and system fonts.

use crate::models::portfolio::SectionKey;
use crate::render::document::{render_list, Page, SocialLink, TemplateGenerator};

pub struct TechDoc;

const CSS: &str = r#"
* { box-sizing: border-box; margin: 0; padding: 0; }
body { background: var(--bg); color: var(--text); font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif; line-height: 1.6; }
a { text-decoration: none; color: inherit; transition: 0.2s; }
.layout { display: flex; min-height: 100vh; }
aside { width: 260px; background: var(--sidebar); border-right: 1px solid var(--border); padding: 2rem; position: fixed; height: 100vh; overflow-y: auto; }
aside .brand { margin-bottom: 2rem; }
aside .logo { width: 40px; height: 40px; background: linear-gradient(to bottom right, #3b82f6, #9333ea); border-radius: 4px; margin-bottom: 1rem; }
aside .brand-label { font-size: 0.8rem; text-transform: uppercase; letter-spacing: 1px; font-weight: bold; opacity: 0.6; }
main { margin-left: 260px; padding: 4rem 5rem; max-width: 1000px; flex: 1; }
@media (max-width: 768px) { aside { display: none; } main { margin-left: 0; padding: 2rem; } }
nav a { display: block; padding: 0.5rem 0.75rem; color: var(--heading); font-weight: 500; border-radius: 4px; opacity: 0.8; font-size: 0.9rem; }
nav a:hover { background: rgba(125,125,125,0.1); opacity: 1; }
section { margin-bottom: 5rem; scroll-margin-top: 4rem; }
h1 { font-size: 2.5rem; color: var(--heading); margin-bottom: 1rem; }
h2 { font-size: 1.5rem; color: var(--heading); margin-bottom: 1.5rem; padding-bottom: 0.5rem; border-bottom: 1px solid var(--border); }
h3 { font-size: 1.2rem; color: var(--heading); font-weight: 600; }
h4 { color: var(--heading); font-weight: bold; }
.mono-tag { font-family: monospace; background: rgba(125,125,125,0.1); padding: 0.2rem 0.5rem; border-radius: 4px; color: var(--primary); font-size: 0.85rem; display: inline-block; margin-bottom: 1.5rem; }
.bio { font-size: 1.1rem; max-width: 700px; }
.profile-links { margin-top: 1.5rem; display: flex; gap: 1rem; }
.profile-links a { color: var(--primary); font-weight: 500; }
blockquote { border-left: 4px solid var(--primary); padding-left: 1rem; font-style: italic; }
.grid-2 { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
@media (max-width: 600px) { .grid-2 { grid-template-columns: 1fr; } }
.skill-item { border: 1px solid var(--border); padding: 0.75rem; border-radius: 4px; display: flex; justify-content: space-between; font-family: monospace; font-size: 0.9rem; }
.skill-item .check { color: var(--primary); }
.exp-item { position: relative; padding-left: 1.5rem; border-left: 2px solid var(--border); margin-bottom: 2rem; }
.exp-item::before { content: ''; position: absolute; left: -5px; top: 5px; width: 8px; height: 8px; border-radius: 50%; background: var(--bg); border: 2px solid var(--primary); }
.meta { font-family: monospace; font-size: 0.8rem; color: var(--primary); margin: 0.2rem 0 0.5rem; }
.project-list { display: grid; gap: 1.5rem; }
.project-card { border: 1px solid var(--border); border-radius: 8px; padding: 1.5rem; display: flex; gap: 1.5rem; transition: 0.2s; }
.project-card:hover { transform: translateY(-2px); box-shadow: 0 4px 12px rgba(0,0,0,0.1); }
.project-card h3 { margin-bottom: 0.5rem; }
.project-card p { font-size: 0.9rem; }
.project-img { width: 180px; height: 120px; object-fit: cover; border-radius: 4px; border: 1px solid var(--border); background: #ccc; }
@media (max-width: 600px) { .project-card { flex-direction: column; } .project-img { width: 100%; height: auto; } }
.achievement-list { list-style: disc inside; padding-left: 1rem; }
.edu-item { display: flex; justify-content: space-between; border-bottom: 1px solid var(--border); padding-bottom: 1rem; margin-bottom: 1rem; }
.edu-item .duration { font-family: monospace; font-size: 0.85rem; }
#contact { padding: 2rem; border: 1px solid var(--border); border-radius: 8px; background: var(--sidebar); }
#contact p { margin-bottom: 1rem; }
.btn { display: inline-block; background: var(--primary); color: #fff; padding: 0.5rem 1rem; border-radius: 4px; font-weight: 500; font-size: 0.9rem; margin-top: 1rem; }
footer { margin-top: 4rem; border-top: 1px solid var(--border); padding-top: 2rem; font-size: 0.9rem; opacity: 0.6; }
"#;

impl TemplateGenerator for TechDoc {
    fn id(&self) -> &'static str {
        "techdoc"
    }

    fn display_name(&self) -> &'static str {
        "TechDoc"
    }

    fn title(&self, page: &Page<'_>) -> String {
        format!("{} - Documentation", page.name())
    }

    /// System font stack only.
    fn font_imports(&self, _page: &Page<'_>) -> String {
        String::new()
    }

    fn stylesheet(&self, page: &Page<'_>) -> String {
        format!(
            ":root {{ --primary: {accent}; --bg: {bg}; --sidebar: {sidebar}; --text: {text}; --heading: {heading}; --border: {border}; }}{CSS}",
            accent = page.accent,
            bg = page.pick("#0f172a", "#ffffff"),
            sidebar = page.pick("#1e293b", "#f8fafc"),
            text = page.pick("#e2e8f0", "#334155"),
            heading = page.pick("#f8fafc", "#0f172a"),
            border = page.pick("#334155", "#e2e8f0"),
        )
    }

    fn render_section(&self, key: SectionKey, page: &Page<'_>) -> String {
        let data = page.data;
        match key {
            SectionKey::Profile => {
                let links = page
                    .socials(&[SocialLink::GitHub, SocialLink::LinkedIn])
                    .into_iter()
                    .map(|(label, href)| format!("<a href=\"{href}\">{label} ↗</a>"))
                    .collect::<Vec<_>>()
                    .join("\n");
                format!(
                    "<section id=\"profile\"><h1>{}</h1><div class=\"mono-tag\">&gt; {}</div>\
                     <p class=\"bio\">{}</p><div class=\"profile-links\">{links}</div></section>",
                    page.name(),
                    page.text(&data.tagline),
                    page.text(&data.bio)
                )
            }
            SectionKey::Passion => format!(
                "<section id=\"passion\"><h2>Passion</h2><blockquote>\"{}\"</blockquote></section>",
                page.text(&data.passion)
            ),
            SectionKey::Skills => format!(
                "<section id=\"skills\"><h2>Technical Skills</h2><div class=\"grid-2\">{}</div></section>",
                render_list(&data.skills, |s| format!(
                    "<div class=\"skill-item\"><span>{}</span><span class=\"check\">✓</span></div>",
                    page.text(s)
                ))
            ),
            SectionKey::Experience => format!(
                "<section id=\"experience\"><h2>Experience</h2>{}</section>",
                render_list(&data.experience, |exp| format!(
                    "<div class=\"exp-item\"><h3>{}</h3><div class=\"meta\">{} • {}</div><p>{}</p></div>",
                    page.text(&exp.role),
                    page.text(&exp.company),
                    page.text(&exp.duration),
                    page.text(&exp.description)
                ))
            ),
            SectionKey::Projects => format!(
                "<section id=\"projects\"><h2>Projects</h2><div class=\"project-list\">{}</div></section>",
                render_list(&data.projects, |p| format!(
                    "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"project-card\">\
                     <img src=\"{}\" alt=\"{}\" class=\"project-img\"><div><h3>{} ↗</h3><p>{}</p></div></a>",
                    page.url(&p.link),
                    page.url(&p.image_url),
                    page.attr(&p.name),
                    page.text(&p.name),
                    page.text(&p.description)
                ))
            ),
            SectionKey::Achievements => format!(
                "<section id=\"achievements\"><h2>Achievements</h2><ul class=\"achievement-list\">{}</ul></section>",
                render_list(&data.achievements, |a| format!(
                    "<li><strong>{}:</strong> {}</li>",
                    page.text(&a.title),
                    page.text(&a.description)
                ))
            ),
            SectionKey::Education => format!(
                "<section id=\"education\"><h2>Education</h2>{}</section>",
                render_list(&data.education, |e| format!(
                    "<div class=\"edu-item\"><div><h4>{}</h4><p>{}</p></div><div class=\"duration\">{}</div></div>",
                    page.text(&e.institution),
                    page.text(&e.degree),
                    page.text(&e.duration)
                ))
            ),
        }
    }

    fn body(&self, page: &Page<'_>, sections: &str) -> String {
        let mailto = page.mailto();

        let mut nav = page
            .sections
            .iter()
            .map(|key| format!("<a href=\"#{}\">{}</a>", key.as_str(), key.label()))
            .collect::<Vec<_>>();
        if mailto.is_some() {
            nav.push("<a href=\"#contact\">Contact</a>".to_string());
        }

        let contact = mailto
            .map(|href| {
                format!(
                    "<section id=\"contact\"><h3>Contact</h3><p>Ready to collaborate?</p>\
                     <a href=\"{href}\" class=\"btn\">Email: {}</a></section>",
                    page.text(page.data.contact_email.trim())
                )
            })
            .unwrap_or_default();

        format!(
            "<div class=\"layout\">\n\
             <aside><div class=\"brand\"><div class=\"logo\"></div><div class=\"brand-label\">Documentation</div></div>\
             <nav>{nav}</nav></aside>\n\
             <main>\n{sections}\n{contact}\n\
             <footer><p>© {year} {name}. Generated by Folio.</p></footer>\n</main>\n</div>",
            nav = nav.join("\n"),
            year = page.year,
            name = page.name(),
        )
    }
}
