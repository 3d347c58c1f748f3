//! Static font-pair table: pair id → heading/body CSS stacks + Google Fonts import.
//!
//! Every template that loads web fonts resolves them here. Unknown pair ids resolve
//! to the default pairing (Oswald / Quicksand) for both the families and the import
//! markup, so a document never declares a family it does not load.

use serde::Serialize;

/// Pair used when the record names an id that is not in [`FONT_PAIRS`].
pub const DEFAULT_FONT_PAIR: &str = "oswald-quicksand";

// ────────────────────────────────────────────────────────────────────────────
// Table
// ────────────────────────────────────────────────────────────────────────────

/// One heading/body pairing.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontPair {
    pub id: &'static str,
    pub name: &'static str,
    pub style: &'static str,
    /// CSS `font-family` value for headings.
    pub heading: &'static str,
    /// CSS `font-family` value for body text.
    pub body: &'static str,
    /// Google Fonts `family=` query values, already URL-encoded.
    #[serde(skip)]
    pub families: &'static [&'static str],
    /// Kept resolvable for records saved before the current picker existed.
    pub legacy: bool,
}

pub static FONT_PAIRS: &[FontPair] = &[
    FontPair {
        id: "oswald-quicksand",
        name: "Oswald / Quicksand",
        style: "Modern Condensed",
        heading: "'Oswald', sans-serif",
        body: "'Quicksand', sans-serif",
        families: &["Oswald:wght@400;500;700", "Quicksand:wght@300;400;500;600;700"],
        legacy: false,
    },
    FontPair {
        id: "syncopate-exo",
        name: "Syncopate / Exo 2",
        style: "Futuristic Wide",
        heading: "'Syncopate', sans-serif",
        body: "'Exo 2', sans-serif",
        families: &["Syncopate:wght@400;700", "Exo+2:wght@300;400;600"],
        legacy: false,
    },
    FontPair {
        id: "italiana-montserrat",
        name: "Italiana / Montserrat",
        style: "Elegant Editorial",
        heading: "'Italiana', serif",
        body: "'Montserrat', sans-serif",
        families: &["Italiana", "Montserrat:wght@300;400;500;600;700"],
        legacy: false,
    },
    FontPair {
        id: "archivo-roboto",
        name: "Archivo / Roboto",
        style: "Bold Impact",
        heading: "'Archivo Black', sans-serif",
        body: "'Roboto', sans-serif",
        families: &["Archivo+Black", "Roboto:wght@300;400;500;700"],
        legacy: false,
    },
    FontPair {
        id: "space-dm",
        name: "Space Mono / DM Sans",
        style: "Digital Brutalist",
        heading: "'Space Mono', monospace",
        body: "'DM Sans', sans-serif",
        families: &["Space+Mono:wght@400;700", "DM+Sans:wght@400;500;700"],
        legacy: false,
    },
    FontPair {
        id: "syne-inter",
        name: "Syne / Inter",
        style: "Avant-Garde",
        heading: "'Syne', sans-serif",
        body: "'Inter', sans-serif",
        families: &["Syne:wght@400;600;700;800", "Inter:wght@300;400;500;600;700"],
        legacy: false,
    },
    // Legacy pairs
    FontPair {
        id: "orbitron-poppins",
        name: "Orbitron / Poppins",
        style: "Sci-Fi",
        heading: "'Orbitron', sans-serif",
        body: "'Poppins', sans-serif",
        families: &["Orbitron:wght@400;700;900", "Poppins:wght@300;400;500;600"],
        legacy: true,
    },
    FontPair {
        id: "inter-lora",
        name: "Inter / Lora",
        style: "Clean Serif",
        heading: "'Inter', sans-serif",
        body: "'Lora', serif",
        families: &["Inter:wght@400;600;700", "Lora:wght@400;500;600"],
        legacy: true,
    },
    FontPair {
        id: "playfair-montserrat",
        name: "Playfair Display / Montserrat",
        style: "Classic Editorial",
        heading: "'Playfair Display', serif",
        body: "'Montserrat', sans-serif",
        families: &["Playfair+Display:wght@400;700", "Montserrat:wght@300;400;500;600"],
        legacy: true,
    },
    FontPair {
        id: "roboto-mono-roboto",
        name: "Roboto Mono / Roboto",
        style: "Technical",
        heading: "'Roboto Mono', monospace",
        body: "'Roboto', sans-serif",
        families: &["Roboto+Mono:wght@400;700", "Roboto:wght@300;400;500;700"],
        legacy: true,
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Lookups
// ────────────────────────────────────────────────────────────────────────────

/// Resolved CSS font stacks for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontFamilies {
    pub heading: &'static str,
    pub body: &'static str,
}

/// Looks up a pair by id, falling back to [`DEFAULT_FONT_PAIR`].
pub fn font_pair(id: &str) -> &'static FontPair {
    FONT_PAIRS
        .iter()
        .find(|p| p.id == id)
        .or_else(|| FONT_PAIRS.iter().find(|p| p.id == DEFAULT_FONT_PAIR))
        .unwrap_or(&FONT_PAIRS[0])
}

pub fn resolve_fonts(id: &str) -> FontFamilies {
    let pair = font_pair(id);
    FontFamilies {
        heading: pair.heading,
        body: pair.body,
    }
}

/// `<link>` markup loading both families of the pair from Google Fonts.
pub fn font_import_markup(id: &str) -> String {
    google_fonts_markup(font_pair(id).families)
}

/// Preconnect hints plus one stylesheet link for the given `family=` values.
pub fn google_fonts_markup(families: &[&str]) -> String {
    if families.is_empty() {
        return String::new();
    }
    let query = families
        .iter()
        .map(|f| format!("family={f}"))
        .collect::<Vec<_>>()
        .join("&amp;");
    format!(
        "<link rel=\"preconnect\" href=\"https://fonts.googleapis.com\">\n\
         <link rel=\"preconnect\" href=\"https://fonts.gstatic.com\" crossorigin>\n\
         <link href=\"https://fonts.googleapis.com/css2?{query}&amp;display=swap\" rel=\"stylesheet\">"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_pair_resolves() {
        let fonts = resolve_fonts("italiana-montserrat");
        assert_eq!(fonts.heading, "'Italiana', serif");
        assert_eq!(fonts.body, "'Montserrat', sans-serif");
    }

    #[test]
    fn test_unknown_pair_falls_back_to_default() {
        assert_eq!(resolve_fonts("comic-sans"), resolve_fonts(DEFAULT_FONT_PAIR));
        let markup = font_import_markup("comic-sans");
        assert!(markup.contains("family=Oswald"));
        assert!(markup.contains("family=Quicksand"));
    }

    #[test]
    fn test_legacy_pairs_still_resolve() {
        assert_eq!(resolve_fonts("inter-lora").body, "'Lora', serif");
        assert!(font_import_markup("orbitron-poppins").contains("family=Orbitron"));
        assert!(font_pair("roboto-mono-roboto").legacy);
    }

    #[test]
    fn test_import_markup_is_complete() {
        let markup = font_import_markup("space-dm");
        assert!(markup.contains("rel=\"preconnect\""));
        assert!(markup.contains("family=Space+Mono:wght@400;700&amp;family=DM+Sans"));
        assert!(markup.ends_with("rel=\"stylesheet\">"));
    }

    #[test]
    fn test_pair_ids_are_unique() {
        for (i, a) in FONT_PAIRS.iter().enumerate() {
            assert!(FONT_PAIRS[i + 1..].iter().all(|b| b.id != a.id), "{}", a.id);
        }
    }

    #[test]
    fn test_empty_family_list_yields_no_markup() {
        assert_eq!(google_fonts_markup(&[]), "");
    }
}
