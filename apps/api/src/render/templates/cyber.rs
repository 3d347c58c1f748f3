//! Cyber: terminal aesthetic with scanlines and its own font set.
//!
//! The contact link lives inside the education block rather than in its own section.

use crate::models::portfolio::SectionKey;
use crate::render::document::{render_list, Page, SocialLink, TemplateGenerator};
use crate::render::fonts::google_fonts_markup;

pub struct Cyber;

const CYBER_FONTS: &[&str] = &["Inter:wght@300;400;700;900", "Share+Tech+Mono"];

const CSS: &str = r#"
* { box-sizing: border-box; margin: 0; padding: 0; }
body { background-color: var(--bg); color: var(--text); font-family: 'Inter', sans-serif; overflow-x: hidden; min-height: 100vh; position: relative; }
a { text-decoration: none; color: inherit; transition: 0.3s; }
.font-mono { font-family: 'Share Tech Mono', monospace; }
.container { max-width: 1000px; margin: 0 auto; padding: 2rem; position: relative; z-index: 10; }
section { padding: 5rem 0; }
.scanlines { position: fixed; inset: 0; background: linear-gradient(rgba(18, 16, 16, 0) 50%, rgba(0, 0, 0, 0.25) 50%), linear-gradient(90deg, rgba(255, 0, 0, 0.06), rgba(0, 255, 0, 0.02), rgba(0, 0, 255, 0.06)); background-size: 100% 2px, 3px 100%; pointer-events: none; z-index: 999; }
.grid-bg { position: fixed; inset: 0; background-image: linear-gradient(var(--grid) 1px, transparent 1px), linear-gradient(90deg, var(--grid) 1px, transparent 1px); background-size: 40px 40px; pointer-events: none; z-index: 1; }
.profile-container { text-align: center; min-height: 80vh; display: flex; flex-direction: column; justify-content: center; align-items: center; }
.avatar { width: 150px; height: 150px; border-radius: 50%; border: 2px dashed var(--primary); padding: 5px; margin-bottom: 2rem; animation: spin 10s linear infinite; }
.avatar img { width: 100%; height: 100%; object-fit: cover; border-radius: 50%; filter: grayscale(100%); }
.glitch { font-size: 4rem; font-weight: 900; position: relative; display: inline-block; margin-bottom: 1rem; letter-spacing: -2px; }
@media (max-width: 768px) { .glitch { font-size: 2.5rem; } }
.tagline { font-family: 'Share Tech Mono', monospace; border: 1px solid rgba(255,255,255,0.2); background: rgba(255,255,255,0.05); padding: 0.5rem 1rem; text-transform: uppercase; letter-spacing: 2px; font-size: 0.9rem; display: inline-block; }
.socials { margin-top: 2rem; display: flex; gap: 1.5rem; }
.socials a { font-family: 'Share Tech Mono', monospace; font-size: 0.8rem; text-transform: uppercase; }
.socials a:hover { color: var(--primary); text-shadow: 0 0 8px var(--primary); }
.passion { text-align: center; position: relative; }
.passion .beam-down { height: 50px; width: 1px; background: linear-gradient(to bottom, transparent, var(--primary)); margin: 0 auto 1rem; }
.passion .beam-up { height: 50px; width: 1px; background: linear-gradient(to top, transparent, var(--primary)); margin: 1rem auto 0; }
.passion p { font-size: 1.5rem; font-weight: 300; line-height: 1.6; }
.accent { color: var(--primary); }
.section-title { font-family: 'Share Tech Mono', monospace; font-size: 1.2rem; text-transform: uppercase; letter-spacing: 2px; margin-bottom: 3rem; display: flex; align-items: center; gap: 1rem; }
.section-title::before { content: ''; width: 30px; height: 1px; background: var(--primary); }
.skill-tag { display: inline-block; padding: 0.5rem 1rem; margin: 0 0.5rem 0.5rem 0; background: rgba(255,255,255,0.05); border: 1px solid rgba(255,255,255,0.1); font-family: 'Share Tech Mono', monospace; font-size: 0.9rem; transition: 0.3s; cursor: crosshair; }
.skill-tag:hover { background: var(--primary); color: #000; border-color: var(--primary); }
.grid-cards { display: grid; grid-template-columns: 1fr; gap: 2rem; }
@media (min-width: 768px) { .grid-cards { grid-template-columns: 1fr 1fr; } }
.cyber-card { position: relative; display: block; border: 1px solid rgba(255,255,255,0.1); background: rgba(0,0,0,0.4); padding: 2rem; transition: 0.3s; overflow: hidden; }
.cyber-card:hover { transform: translateY(-5px); border-color: var(--primary); }
.cyber-card h3 { font-family: 'Share Tech Mono', monospace; font-size: 1.5rem; margin-bottom: 1rem; }
.cyber-card p { font-size: 0.9rem; opacity: 0.7; }
.cyber-card.trophy { border-style: dashed; background: transparent; }
.trophy .row { display: flex; gap: 1rem; }
.trophy .index { font-size: 1.5rem; opacity: 0.5; }
.trophy h4 { font-size: 1.2rem; font-weight: bold; color: var(--primary); margin-bottom: 0.5rem; }
.project-img { width: 100%; aspect-ratio: 16/9; object-fit: cover; opacity: 0.7; margin-bottom: 1.5rem; transition: 0.3s; }
.cyber-card:hover .project-img { opacity: 1; }
.exp-list { margin-left: 1rem; }
.exp-item { position: relative; padding-left: 2rem; margin-bottom: 3rem; border-left: 1px solid rgba(255,255,255,0.1); }
.exp-item::before { content: ''; position: absolute; left: -3px; top: 0; width: 5px; height: 5px; background: var(--primary); box-shadow: 0 0 10px var(--primary); }
.exp-meta { font-family: 'Share Tech Mono', monospace; font-size: 0.8rem; opacity: 0.6; margin-bottom: 0.5rem; }
.exp-role { font-size: 1.5rem; font-weight: bold; margin-bottom: 0.5rem; }
.exp-item p { font-size: 0.9rem; opacity: 0.8; }
.education { border-top: 1px solid rgba(255,255,255,0.1); padding-top: 3rem; }
.education .columns { display: flex; justify-content: space-between; flex-wrap: wrap; gap: 2rem; }
.education .section-title { opacity: 0.5; margin-bottom: 1rem; }
.edu-item { margin-bottom: 1.5rem; }
.edu-item .institution { font-weight: bold; font-size: 1.2rem; }
.edu-item .details { font-size: 0.9rem; font-family: 'Share Tech Mono', monospace; }
.connect { text-align: right; }
.connect .label { font-family: 'Share Tech Mono', monospace; opacity: 0.5; margin-bottom: 0.5rem; }
.connect a { font-size: 1.5rem; font-weight: bold; color: var(--text); }
footer { text-align: center; font-family: 'Share Tech Mono', monospace; font-size: 0.8rem; opacity: 0.4; padding-bottom: 2rem; }
@keyframes spin { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }
"#;

impl TemplateGenerator for Cyber {
    fn id(&self) -> &'static str {
        "cyber"
    }

    fn display_name(&self) -> &'static str {
        "Cyber"
    }

    fn title(&self, page: &Page<'_>) -> String {
        format!("{} [CYBER]", page.name())
    }

    /// Cyber always uses its own typefaces regardless of the selected pair.
    fn font_imports(&self, _page: &Page<'_>) -> String {
        google_fonts_markup(CYBER_FONTS)
    }

    fn stylesheet(&self, page: &Page<'_>) -> String {
        format!(
            ":root {{ --primary: {accent}; --bg: {bg}; --text: {text}; --grid: {grid}; }}{CSS}",
            accent = page.accent,
            bg = page.pick("#050505", "#f0f0f0"),
            text = page.pick("#e0e0e0", "#1a1a1a"),
            grid = page.pick("rgba(255,255,255,0.05)", "rgba(0,0,0,0.05)"),
        )
    }

    fn render_section(&self, key: SectionKey, page: &Page<'_>) -> String {
        let data = page.data;
        match key {
            SectionKey::Profile => {
                let socials = page
                    .socials(&[SocialLink::GitHub, SocialLink::LinkedIn, SocialLink::Twitter])
                    .into_iter()
                    .map(|(label, href)| {
                        format!(
                            "<a href=\"{href}\" target=\"_blank\" rel=\"noopener noreferrer\">[{}]</a>",
                            label.to_uppercase()
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n");
                format!(
                    "<div id=\"profile\" class=\"profile-container\"><div class=\"avatar\"><img src=\"{}\" alt=\"avatar\"></div>\
                     <h1 class=\"glitch\">{}</h1><div class=\"tagline\">{}</div><div class=\"socials\">{socials}</div></div>",
                    page.url(&data.avatar_url),
                    page.name(),
                    page.text(&data.tagline)
                )
            }
            SectionKey::Passion => format!(
                "<section id=\"passion\" class=\"passion\"><div class=\"beam-down\"></div>\
                 <p><span class=\"accent\">&lt;passion&gt;</span> {} <span class=\"accent\">&lt;/passion&gt;</span></p>\
                 <div class=\"beam-up\"></div></section>",
                page.text(&data.passion)
            ),
            SectionKey::Skills => format!(
                "<section id=\"skills\"><h2 class=\"section-title\">System_Capabilities</h2><div>{}</div></section>",
                render_list(&data.skills, |s| format!(
                    "<span class=\"skill-tag\">{}</span>",
                    page.text(s)
                ))
            ),
            SectionKey::Projects => format!(
                "<section id=\"projects\"><h2 class=\"section-title\">Deployed_Modules</h2><div class=\"grid-cards\">{}</div></section>",
                render_list(&data.projects, |p| format!(
                    "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"cyber-card\">\
                     <img src=\"{}\" alt=\"{}\" class=\"project-img\"><h3>{}</h3><p>{}</p></a>",
                    page.url(&p.link),
                    page.url(&p.image_url),
                    page.attr(&p.name),
                    page.text(&p.name),
                    page.text(&p.description)
                ))
            ),
            SectionKey::Experience => format!(
                "<section id=\"experience\"><h2 class=\"section-title\">Log_History</h2><div class=\"exp-list\">{}</div></section>",
                render_list(&data.experience, |exp| format!(
                    "<div class=\"exp-item\"><div class=\"exp-meta\">{} // <span class=\"accent\">{}</span></div>\
                     <div class=\"exp-role\">{}</div><p>{}</p></div>",
                    page.text(&exp.duration),
                    page.text(&exp.company),
                    page.text(&exp.role),
                    page.text(&exp.description)
                ))
            ),
            SectionKey::Achievements => {
                let trophies = data
                    .achievements
                    .iter()
                    .enumerate()
                    .map(|(i, a)| {
                        format!(
                            "<div class=\"cyber-card trophy\"><div class=\"row\"><div class=\"index\">{:02}</div>\
                             <div><h4>{}</h4><p>{}</p></div></div></div>",
                            i + 1,
                            page.text(&a.title),
                            page.text(&a.description)
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n");
                format!(
                    "<section id=\"achievements\"><h2 class=\"section-title\">Trophies</h2><div class=\"grid-cards\">{trophies}</div></section>"
                )
            }
            SectionKey::Education => {
                let connect = page
                    .mailto()
                    .map(|href| {
                        format!(
                            "<div class=\"connect\"><div class=\"label\">Initialize_Connection</div><a href=\"{href}\">{}</a></div>",
                            page.text(data.contact_email.trim())
                        )
                    })
                    .unwrap_or_default();
                format!(
                    "<section id=\"education\" class=\"education\"><div class=\"columns\"><div>\
                     <h2 class=\"section-title\">Education_Data</h2>{}</div>{connect}</div></section>",
                    render_list(&data.education, |e| format!(
                        "<div class=\"edu-item\"><div class=\"institution\">{}</div>\
                         <div class=\"details\"><span class=\"accent\">{}</span> // {}</div></div>",
                        page.text(&e.institution),
                        page.text(&e.degree),
                        page.text(&e.duration)
                    ))
                )
            }
        }
    }

    fn body(&self, page: &Page<'_>, sections: &str) -> String {
        let system_id = page
            .data
            .name
            .to_uppercase()
            .chars()
            .map(|c| if c.is_whitespace() { '_' } else { c })
            .collect::<String>();
        format!(
            "<div class=\"scanlines\"></div>\n<div class=\"grid-bg\"></div>\n<div class=\"container\">\n{sections}\n\
             <footer>System_ID: {} // v2.0.4</footer>\n</div>",
            page.text(&system_id)
        )
    }
}
