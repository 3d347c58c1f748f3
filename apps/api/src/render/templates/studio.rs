//! Studio: agency layout. Ignores the record's section order.

use crate::models::portfolio::SectionKey;
use crate::render::document::{render_list, Page, SocialLink, TemplateGenerator};

pub struct Studio;

/// Studio ignores the record's section order.
const STUDIO_ORDER: &[SectionKey] = &[
    SectionKey::Profile,
    SectionKey::Projects,
    SectionKey::Passion,
    SectionKey::Skills,
    SectionKey::Experience,
    SectionKey::Achievements,
    SectionKey::Education,
];

const CSS: &str = r#"
* { box-sizing: border-box; margin: 0; padding: 0; }
body { background: var(--bg); color: var(--text); font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif; overflow-x: hidden; }
a { text-decoration: none; color: inherit; }
.container { max-width: 1200px; margin: 0 auto; padding: 2rem; }
nav { display: flex; justify-content: space-between; align-items: center; margin-bottom: 5rem; }
.logo { font-weight: bold; font-size: 1.2rem; letter-spacing: -1px; }
.cta { font-size: 0.8rem; font-weight: bold; text-transform: uppercase; letter-spacing: 2px; border: 1px solid var(--text); padding: 0.5rem 1rem; transition: 0.3s; }
.cta:hover { background: var(--accent); border-color: var(--accent); color: var(--inverse); }
section { margin-bottom: 8rem; }
.hero { display: grid; grid-template-columns: 1fr; gap: 2rem; align-items: end; }
@media (min-width: 768px) { .hero { grid-template-columns: 4fr 8fr; } }
.hero img { width: 100%; height: auto; aspect-ratio: 3/4; object-fit: cover; filter: grayscale(100%); }
.hero h1 { font-size: 4rem; line-height: 0.9; font-weight: 900; margin-bottom: 1rem; letter-spacing: -3px; }
.hero h1 .dot { color: var(--accent); }
@media (min-width: 768px) { .hero h1 { font-size: 6rem; } }
.hero p { font-size: 1.5rem; font-weight: 300; margin-bottom: 2rem; }
.hero .socials { font-size: 0.8rem; font-weight: bold; letter-spacing: 1px; text-transform: uppercase; display: flex; gap: 1rem; }
.passion { text-align: center; padding: 5rem 0; border-top: 1px solid var(--text); border-bottom: 1px solid var(--text); }
.passion p { font-size: 2rem; font-weight: bold; text-transform: uppercase; }
.section-header { display: flex; justify-content: space-between; align-items: flex-end; border-bottom: 1px solid var(--text); padding-bottom: 1rem; margin-bottom: 2rem; }
.label { font-size: 0.8rem; font-weight: bold; text-transform: uppercase; letter-spacing: 2px; }
.mono { font-family: monospace; font-size: 0.8rem; }
.project-grid { display: grid; gap: 4rem; }
@media (min-width: 768px) { .project-grid { grid-template-columns: 1fr 1fr; gap: 2rem; } .project-card:nth-child(even) { margin-top: 5rem; } }
.project-card { display: block; }
.project-card img { width: 100%; height: auto; aspect-ratio: 4/5; object-fit: cover; margin-bottom: 1rem; transition: transform 0.5s; }
.project-card:hover img { transform: scale(1.02); }
.project-card .row { display: flex; justify-content: space-between; align-items: flex-start; }
.project-card h3 { font-size: 1.5rem; font-weight: bold; }
.project-card p { opacity: var(--muted-opacity); font-size: 0.9rem; margin-top: 0.5rem; }
.project-card .index { font-family: monospace; opacity: 0.5; }
.skill-list { display: flex; flex-wrap: wrap; gap: 1rem; }
.skill-item { font-size: 1.5rem; font-weight: 300; padding-right: 1rem; }
.exp-item { display: grid; grid-template-columns: 1fr; gap: 1rem; margin-bottom: 2rem; }
@media (min-width: 768px) { .exp-item { grid-template-columns: 3fr 9fr; } }
.exp-item .duration { font-family: monospace; opacity: 0.5; font-size: 0.9rem; }
.exp-details { border-top: 1px solid rgba(125,125,125,0.2); padding-top: 1rem; }
.exp-details h3 { font-size: 1.5rem; font-weight: bold; }
.exp-details .company { color: var(--accent); font-weight: 500; margin-bottom: 0.5rem; }
.recognition { background: var(--accent); color: var(--inverse); padding: 3rem; margin: 0 -1rem 8rem; }
.recognition .label { opacity: 0.8; margin-bottom: 2rem; display: block; }
.rec-item { border-bottom: 1px solid var(--inverse); padding-bottom: 2rem; margin-bottom: 2rem; }
.rec-item:last-child { border: 0; padding: 0; margin: 0; }
.rec-item h3 { font-size: 1.5rem; font-weight: bold; }
.rec-item p { opacity: 0.8; margin-top: 0.5rem; }
.education-item { display: flex; justify-content: space-between; margin-bottom: 1rem; align-items: baseline; }
.education-item p { opacity: 0.6; }
footer { border-top: 1px solid var(--text); padding-top: 2rem; display: flex; justify-content: space-between; font-size: 0.75rem; text-transform: uppercase; letter-spacing: 1px; }
"#;

fn header(label: &str) -> String {
    format!("<div class=\"section-header\"><span class=\"label\">{label}</span></div>")
}

impl TemplateGenerator for Studio {
    fn id(&self) -> &'static str {
        "studio"
    }

    fn display_name(&self) -> &'static str {
        "Studio"
    }

    fn fixed_order(&self) -> Option<&'static [SectionKey]> {
        Some(STUDIO_ORDER)
    }

    fn title(&self, page: &Page<'_>) -> String {
        format!("{} - Portfolio", page.name())
    }

    fn font_imports(&self, _page: &Page<'_>) -> String {
        String::new()
    }

    fn stylesheet(&self, page: &Page<'_>) -> String {
        format!(
            ":root {{ --accent: {accent}; --bg: {bg}; --text: {text}; --inverse: {inverse}; --muted-opacity: {muted}; }}{CSS}",
            accent = page.accent,
            bg = page.pick("#000000", "#ffffff"),
            text = page.pick("#ffffff", "#000000"),
            inverse = page.pick("#000000", "#ffffff"),
            muted = page.pick("0.6", "0.8"),
        )
    }

    fn render_section(&self, key: SectionKey, page: &Page<'_>) -> String {
        let data = page.data;
        match key {
            SectionKey::Profile => {
                let first_name = data.name.split_whitespace().next().unwrap_or_default();
                format!(
                    "<section id=\"profile\" class=\"hero\"><div><img src=\"{}\" alt=\"Avatar\"></div>\
                     <div><h1>{}<span class=\"dot\">.</span></h1><p>{}</p><div class=\"socials\">{}</div></div></section>",
                    page.url(&data.avatar_url),
                    page.text(first_name),
                    page.text(&data.bio),
                    page.social_anchors(&[SocialLink::LinkedIn, SocialLink::Twitter], None)
                )
            }
            SectionKey::Passion => format!(
                "<section id=\"passion\" class=\"passion\"><p>{}</p></section>",
                page.text(&data.passion)
            ),
            SectionKey::Projects => {
                let cards = data
                    .projects
                    .iter()
                    .enumerate()
                    .map(|(i, p)| {
                        format!(
                            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"project-card\">\
                             <img src=\"{}\" alt=\"{}\"><div class=\"row\"><div><h3>{}</h3><p>{}</p></div>\
                             <span class=\"index\">{:02}</span></div></a>",
                            page.url(&p.link),
                            page.url(&p.image_url),
                            page.attr(&p.name),
                            page.text(&p.name),
                            page.text(&p.description),
                            i + 1
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n");
                format!(
                    "<section id=\"projects\"><div class=\"section-header\"><span class=\"label\">Selected Works</span>\
                     <span class=\"mono\">{} Items</span></div><div class=\"project-grid\">{cards}</div></section>",
                    data.projects.len()
                )
            }
            SectionKey::Skills => format!(
                "<section id=\"skills\">{}<div class=\"skill-list\">{}</div></section>",
                header("Skillset"),
                render_list(&data.skills, |s| format!(
                    "<span class=\"skill-item\">{}</span>",
                    page.text(s)
                ))
            ),
            SectionKey::Experience => format!(
                "<section id=\"experience\">{}{}</section>",
                header("Experience"),
                render_list(&data.experience, |exp| format!(
                    "<div class=\"exp-item\"><div class=\"duration\">{}</div><div class=\"exp-details\">\
                     <h3>{}</h3><div class=\"company\">{}</div><p>{}</p></div></div>",
                    page.text(&exp.duration),
                    page.text(&exp.role),
                    page.text(&exp.company),
                    page.text(&exp.description)
                ))
            ),
            SectionKey::Achievements => format!(
                "<section id=\"achievements\" class=\"recognition\"><span class=\"label\">Recognition</span>{}</section>",
                render_list(&data.achievements, |a| format!(
                    "<div class=\"rec-item\"><h3>{}</h3><p>{}</p></div>",
                    page.text(&a.title),
                    page.text(&a.description)
                ))
            ),
            SectionKey::Education => format!(
                "<section id=\"education\">{}{}</section>",
                header("Education"),
                render_list(&data.education, |e| format!(
                    "<div class=\"education-item\"><div><h3>{}</h3><p>{}</p></div><div class=\"mono\">{}</div></div>",
                    page.text(&e.institution),
                    page.text(&e.degree),
                    page.text(&e.duration)
                ))
            ),
        }
    }

    fn body(&self, page: &Page<'_>, sections: &str) -> String {
        let cta = page
            .mailto()
            .map(|href| format!("<a href=\"{href}\" class=\"cta\">Get in touch</a>"))
            .unwrap_or_default();
        // Uppercase before escaping so entities stay lowercase.
        let logo = page.text(&page.data.name.to_uppercase());
        format!(
            "<div class=\"container\">\n\
             <nav><div class=\"logo\">{logo}</div>{cta}</nav>\n\
             <main>\n{sections}\n</main>\n\
             <footer><span>Generated by Folio</span><span>© {year}</span></footer>\n</div>",
            year = page.year,
        )
    }
}
