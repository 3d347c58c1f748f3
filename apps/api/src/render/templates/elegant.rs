//! Elegant: editorial serif headings and grayscale project imagery.

use crate::models::portfolio::SectionKey;
use crate::render::document::{render_list, Page, SocialLink, TemplateGenerator};

pub struct Elegant;

const CSS: &str = r#"
*, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }
body { background-color: var(--color-bg); color: var(--color-text); font-family: var(--font-body); -webkit-font-smoothing: antialiased; line-height: 1.6; }
.container { max-width: 70rem; margin: 0 auto; padding: 5rem 1.5rem; }
a { color: inherit; text-decoration: none; transition: color 0.3s; }
h1, h2, h3, h4 { font-family: var(--font-heading); font-weight: 400; line-height: 1.2; }
.uppercase-label { font-size: 0.8rem; text-transform: uppercase; letter-spacing: 0.15em; color: var(--color-muted); margin-bottom: 2rem; }
.section-heading { font-size: 3rem; margin-bottom: 3rem; }
header { margin-bottom: 8rem; display: flex; flex-direction: column; gap: 2rem; }
header h1 { font-size: 4rem; letter-spacing: -0.02em; }
header .tagline { font-size: 1.5rem; color: var(--color-accent); font-weight: 300; }
.socials { display: flex; gap: 1.5rem; }
.socials a { font-size: 0.8rem; text-transform: uppercase; letter-spacing: 0.1em; }
.socials a:hover { text-decoration: underline; }
@media (min-width: 768px) { header { flex-direction: row; justify-content: space-between; align-items: flex-start; } header h1 { font-size: 5.5rem; } .socials { flex-direction: column; align-items: flex-end; gap: 0.5rem; } }
section { margin-bottom: 6rem; }
#profile p { font-size: 1.25rem; font-weight: 300; opacity: var(--soft-opacity); max-width: 50rem; }
#passion { border-top: 1px solid var(--color-border); border-bottom: 1px solid var(--color-border); padding: 3rem 0; }
#passion .uppercase-label { color: var(--color-accent); margin-bottom: 1.5rem; }
#passion p { font-size: 2rem; font-family: var(--font-heading); font-style: italic; }
.grid-skills { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
.skill-item { border-top: 1px solid var(--color-border); padding-top: 0.5rem; }
@media (min-width: 768px) { .grid-skills { grid-template-columns: repeat(4, 1fr); } }
.experience-item { display: grid; gap: 1rem; margin-bottom: 4rem; }
.experience-item .duration { font-size: 0.85rem; color: var(--color-muted); text-transform: uppercase; letter-spacing: 0.05em; }
.experience-item h3 { font-size: 1.75rem; margin-bottom: 0.25rem; }
.experience-item .company { font-size: 1.1rem; color: var(--color-accent); margin-bottom: 1rem; }
.experience-item p { font-weight: 300; opacity: var(--soft-opacity); }
@media (min-width: 768px) { .experience-item { grid-template-columns: 1fr 3fr; } }
.projects-grid { display: grid; grid-template-columns: 1fr; gap: 4rem; }
.project-card img { width: 100%; aspect-ratio: 4/3; object-fit: cover; filter: grayscale(100%); transition: filter 0.5s; margin-bottom: 1.5rem; }
.project-card:hover img { filter: grayscale(0%); }
.project-card h3 { font-size: 1.5rem; margin-bottom: 0.5rem; }
.project-card:hover h3 { text-decoration: underline; }
.project-card p { font-weight: 300; color: var(--color-muted); }
@media (min-width: 768px) { .projects-grid { grid-template-columns: 1fr 1fr; } }
.achievements-grid { display: grid; grid-template-columns: 1fr; gap: 2rem; }
.achievement-item { border: 1px solid var(--color-border); padding: 2rem; }
.achievement-item h4 { font-size: 1.25rem; color: var(--color-accent); margin-bottom: 0.5rem; }
@media (min-width: 768px) { .achievements-grid { grid-template-columns: 1fr 1fr; } }
.education-row { border-top: 1px solid var(--color-border); padding-top: 2rem; display: grid; gap: 1rem; }
.edu-item { display: flex; justify-content: space-between; margin-bottom: 1.5rem; }
.edu-item h4 { font-size: 1.25rem; }
.edu-item .duration { color: var(--color-muted); font-size: 0.9rem; }
@media (min-width: 768px) { .education-row { grid-template-columns: 1fr 3fr; } }
#contact { text-align: center; margin-top: 6rem; }
#contact h2 { font-size: 2.5rem; margin-bottom: 2rem; }
#contact a { font-size: 1.25rem; border-bottom: 1px solid var(--color-text); padding-bottom: 0.25rem; }
#contact a:hover { color: var(--color-accent); border-color: var(--color-accent); }
footer { margin-top: 5rem; padding-top: 2rem; border-top: 1px solid var(--color-border); display: flex; justify-content: space-between; font-size: 0.75rem; color: var(--color-muted); text-transform: uppercase; letter-spacing: 0.1em; }
"#;

impl TemplateGenerator for Elegant {
    fn id(&self) -> &'static str {
        "elegant"
    }

    fn display_name(&self) -> &'static str {
        "Elegant"
    }

    fn title(&self, page: &Page<'_>) -> String {
        page.name()
    }

    fn stylesheet(&self, page: &Page<'_>) -> String {
        format!(
            ":root {{ --font-body: {body}; --font-heading: {heading}; --color-bg: {bg}; --color-text: {text}; \
             --color-border: {border}; --color-muted: {muted}; --color-accent: {accent}; --soft-opacity: {soft}; }}{CSS}",
            body = page.fonts.body,
            heading = page.fonts.heading,
            bg = page.pick("#121212", "#FAFAFA"),
            text = page.pick("#E0E0E0", "#000000"),
            border = page.pick("#333333", "#D4D4D4"),
            muted = page.pick("#A0A0A0", "#404040"),
            accent = page.accent,
            soft = page.pick("0.9", "1"),
        )
    }

    fn render_section(&self, key: SectionKey, page: &Page<'_>) -> String {
        let data = page.data;
        match key {
            SectionKey::Profile => format!(
                "<section id=\"profile\"><p>{}</p></section>",
                page.text(&data.bio)
            ),
            SectionKey::Passion => format!(
                "<section id=\"passion\"><div class=\"uppercase-label\">Passion</div><p>\"{}\"</p></section>",
                page.text(&data.passion)
            ),
            SectionKey::Skills => format!(
                "<section id=\"skills\"><div class=\"uppercase-label\">Expertise</div><div class=\"grid-skills\">{}</div></section>",
                render_list(&data.skills, |s| format!(
                    "<div class=\"skill-item\">{}</div>",
                    page.text(s)
                ))
            ),
            SectionKey::Experience => format!(
                "<section id=\"experience\"><h2 class=\"section-heading\">Career</h2>{}</section>",
                render_list(&data.experience, |exp| format!(
                    "<div class=\"experience-item\"><div class=\"duration\">{}</div><div><h3>{}</h3>\
                     <div class=\"company\">{}</div><p>{}</p></div></div>",
                    page.text(&exp.duration),
                    page.text(&exp.role),
                    page.text(&exp.company),
                    page.text(&exp.description)
                ))
            ),
            SectionKey::Projects => format!(
                "<section id=\"projects\"><h2 class=\"section-heading\">Selected Works</h2><div class=\"projects-grid\">{}</div></section>",
                render_list(&data.projects, |p| format!(
                    "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"project-card\">\
                     <img src=\"{}\" alt=\"{}\"><h3>{}</h3><p>{}</p></a>",
                    page.url(&p.link),
                    page.url(&p.image_url),
                    page.attr(&p.name),
                    page.text(&p.name),
                    page.text(&p.description)
                ))
            ),
            SectionKey::Achievements => format!(
                "<section id=\"achievements\"><div class=\"uppercase-label\">Recognition</div><div class=\"achievements-grid\">{}</div></section>",
                render_list(&data.achievements, |a| format!(
                    "<div class=\"achievement-item\"><h4>{}</h4><p>{}</p></div>",
                    page.text(&a.title),
                    page.text(&a.description)
                ))
            ),
            SectionKey::Education => format!(
                "<section id=\"education\"><div class=\"education-row\"><div class=\"uppercase-label\">Education</div><div>{}</div></div></section>",
                render_list(&data.education, |e| format!(
                    "<div class=\"edu-item\"><div><h4>{}</h4><p>{}</p></div><span class=\"duration\">{}</span></div>",
                    page.text(&e.institution),
                    page.text(&e.degree),
                    page.text(&e.duration)
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
                    "<section id=\"contact\"><h2>Let's create something timeless.</h2><a href=\"{href}\">{}</a></section>",
                    page.text(data.contact_email.trim())
                )
            })
            .unwrap_or_default();
        format!(
            "<div class=\"container\">\n\
             <header><div><h1>{name}</h1><div class=\"tagline\">{tagline}</div></div>\
             <div class=\"socials\">{socials}</div></header>\n\
             <main>\n{sections}\n{contact}\n</main>\n\
             <footer><span>&copy; {year} {name}</span><span>Created with Folio</span></footer>\n</div>",
            name = page.name(),
            tagline = page.text(&data.tagline),
            socials = page.social_anchors(
                &[SocialLink::LinkedIn, SocialLink::GitHub, SocialLink::Twitter],
                None
            ),
            year = page.year,
        )
    }
}
