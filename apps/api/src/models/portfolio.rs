//! Portfolio record: the single root document behind both the live preview and
//! the exported static file.
//!
//! JSON field names are camelCase so a record persisted by the builder can be read
//! back verbatim. `templateId` and `fontPair` are plain strings: an
//! unknown template is only rejected at generation time, an unknown font pair
//! resolves to the default pairing.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Section keys
// ────────────────────────────────────────────────────────────────────────────

/// One of the seven fixed content categories a template can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    Profile,
    Passion,
    Skills,
    Experience,
    Projects,
    Achievements,
    Education,
}

impl SectionKey {
    /// Every key, in the default display order.
    pub const ALL: [SectionKey; 7] = [
        SectionKey::Profile,
        SectionKey::Passion,
        SectionKey::Skills,
        SectionKey::Experience,
        SectionKey::Projects,
        SectionKey::Achievements,
        SectionKey::Education,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::Profile => "profile",
            SectionKey::Passion => "passion",
            SectionKey::Skills => "skills",
            SectionKey::Experience => "experience",
            SectionKey::Projects => "projects",
            SectionKey::Achievements => "achievements",
            SectionKey::Education => "education",
        }
    }

    /// Human-readable label, used for navigation entries.
    pub fn label(&self) -> &'static str {
        match self {
            SectionKey::Profile => "Profile",
            SectionKey::Passion => "Passion",
            SectionKey::Skills => "Skills",
            SectionKey::Experience => "Experience",
            SectionKey::Projects => "Projects",
            SectionKey::Achievements => "Achievements",
            SectionKey::Education => "Education",
        }
    }
}

pub fn default_section_order() -> Vec<SectionKey> {
    SectionKey::ALL.to_vec()
}

/// True when `order` contains every section key exactly once.
pub fn is_permutation(order: &[SectionKey]) -> bool {
    order.len() == SectionKey::ALL.len() && SectionKey::ALL.iter().all(|k| order.contains(k))
}

/// Repairs a section order so it is a permutation of all keys: the first
/// occurrence of each key is kept, missing keys are appended in default order.
pub fn normalize_section_order(order: &[SectionKey]) -> Vec<SectionKey> {
    let mut normalized: Vec<SectionKey> = Vec::with_capacity(SectionKey::ALL.len());
    for key in order {
        if !normalized.contains(key) {
            normalized.push(*key);
        }
    }
    for key in SectionKey::ALL {
        if !normalized.contains(&key) {
            normalized.push(key);
        }
    }
    normalized
}

// ────────────────────────────────────────────────────────────────────────────
// Theme
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSettings {
    /// Registry key of the template generator. Validated only at generation time.
    pub template_id: String,
    /// Accent color, normally a hex string such as `#22d3ee`.
    pub primary_color: String,
    pub font_pair: String,
    pub mode: ThemeMode,
}

// ────────────────────────────────────────────────────────────────────────────
// List items
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Socials {
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub role: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
}

/// The four editable record lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Projects,
    Experience,
    Education,
    Achievements,
}

impl ListKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListKind::Projects => "projects",
            ListKind::Experience => "experience",
            ListKind::Education => "education",
            ListKind::Achievements => "achievements",
        }
    }
}

/// Common behaviour of list records: identity plus field-by-name editing, the
/// way the builder edits one input at a time.
pub trait ListItem: Clone {
    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);

    /// A fresh item with placeholder content.
    fn placeholder(id: String) -> Self;

    /// Sets `field` to `value`. Returns `false` if the field does not exist.
    fn set_field(&mut self, field: &str, value: String) -> bool;
}

impl ListItem for Project {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn placeholder(id: String) -> Self {
        Project {
            id,
            name: "New Project".to_string(),
            description: String::new(),
            image_url: "https://picsum.photos/seed/new/600/400".to_string(),
            link: String::new(),
        }
    }

    fn set_field(&mut self, field: &str, value: String) -> bool {
        match field {
            "name" => self.name = value,
            "description" => self.description = value,
            "imageUrl" => self.image_url = value,
            "link" => self.link = value,
            _ => return false,
        }
        true
    }
}

impl ListItem for Experience {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn placeholder(id: String) -> Self {
        Experience {
            id,
            role: "New Role".to_string(),
            company: String::new(),
            duration: String::new(),
            description: String::new(),
        }
    }

    fn set_field(&mut self, field: &str, value: String) -> bool {
        match field {
            "role" => self.role = value,
            "company" => self.company = value,
            "duration" => self.duration = value,
            "description" => self.description = value,
            _ => return false,
        }
        true
    }
}

impl ListItem for Education {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn placeholder(id: String) -> Self {
        Education {
            id,
            institution: "New School".to_string(),
            degree: String::new(),
            duration: String::new(),
        }
    }

    fn set_field(&mut self, field: &str, value: String) -> bool {
        match field {
            "institution" => self.institution = value,
            "degree" => self.degree = value,
            "duration" => self.duration = value,
            _ => return false,
        }
        true
    }
}

impl ListItem for Achievement {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn placeholder(id: String) -> Self {
        Achievement {
            id,
            title: "New Achievement".to_string(),
            description: String::new(),
        }
    }

    fn set_field(&mut self, field: &str, value: String) -> bool {
        match field {
            "title" => self.title = value,
            "description" => self.description = value,
            _ => return false,
        }
        true
    }
}

/// First id that occurs more than once in `items`.
pub fn first_duplicate_id<T: ListItem>(items: &[T]) -> Option<&str> {
    let mut seen = HashSet::new();
    items.iter().map(|item| item.id()).find(|id| !seen.insert(*id))
}

/// Keeps the first item with a given id and renames every later one with an id
/// from `fresh`. Returns how many items were renamed.
pub fn reassign_duplicate_ids<T: ListItem>(
    items: &mut [T],
    mut fresh: impl FnMut() -> String,
) -> usize {
    let mut seen: HashSet<String> = HashSet::with_capacity(items.len());
    let mut renamed = 0;
    for item in items.iter_mut() {
        if !seen.insert(item.id().to_string()) {
            let id = fresh();
            seen.insert(id.clone());
            item.set_id(id);
            renamed += 1;
        }
    }
    renamed
}

// ────────────────────────────────────────────────────────────────────────────
// Root record
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioData {
    pub name: String,
    pub tagline: String,
    /// Remote URL or an embedded `data:` URI.
    pub avatar_url: String,
    pub bio: String,
    pub passion: String,
    pub contact_email: String,
    pub skills: Vec<String>,
    #[serde(default)]
    pub socials: Socials,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub achievements: Vec<Achievement>,
    pub theme_settings: ThemeSettings,
    /// Records persisted before section ordering existed lack this field.
    #[serde(default = "default_section_order")]
    pub section_order: Vec<SectionKey>,
}

impl PortfolioData {
    /// The first list holding two items with the same id, and that id.
    pub fn duplicate_id(&self) -> Option<(ListKind, String)> {
        let found = [
            (ListKind::Projects, first_duplicate_id(&self.projects)),
            (ListKind::Experience, first_duplicate_id(&self.experience)),
            (ListKind::Education, first_duplicate_id(&self.education)),
            (ListKind::Achievements, first_duplicate_id(&self.achievements)),
        ];
        found
            .into_iter()
            .find_map(|(list, id)| id.map(|id| (list, id.to_string())))
    }

    /// Makes item ids unique within every list. See `reassign_duplicate_ids`.
    pub fn reassign_duplicate_ids(&mut self, mut fresh: impl FnMut() -> String) -> usize {
        reassign_duplicate_ids(&mut self.projects, &mut fresh)
            + reassign_duplicate_ids(&mut self.experience, &mut fresh)
            + reassign_duplicate_ids(&mut self.education, &mut fresh)
            + reassign_duplicate_ids(&mut self.achievements, &mut fresh)
    }
}

/// Splits a comma-separated skills input into trimmed, non-empty entries.
/// Order and duplicates are preserved.
pub fn parse_skills(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_skills_trims_and_drops_empties() {
        assert_eq!(
            parse_skills(" Rust, Go ,, ,TypeScript,Rust"),
            vec!["Rust", "Go", "TypeScript", "Rust"]
        );
    }

    #[test]
    fn test_parse_skills_empty_input() {
        assert!(parse_skills("").is_empty());
        assert!(parse_skills(" , ,").is_empty());
    }

    #[test]
    fn test_is_permutation() {
        assert!(is_permutation(&SectionKey::ALL));
        let mut reversed = SectionKey::ALL.to_vec();
        reversed.reverse();
        assert!(is_permutation(&reversed));
        assert!(!is_permutation(&SectionKey::ALL[..6]));
        let mut duplicated = SectionKey::ALL.to_vec();
        duplicated[6] = SectionKey::Profile;
        assert!(!is_permutation(&duplicated));
    }

    #[test]
    fn test_normalize_section_order_dedups_and_appends_missing() {
        let order = [SectionKey::Skills, SectionKey::Skills, SectionKey::Education];
        assert_eq!(
            normalize_section_order(&order),
            vec![
                SectionKey::Skills,
                SectionKey::Education,
                SectionKey::Profile,
                SectionKey::Passion,
                SectionKey::Experience,
                SectionKey::Projects,
                SectionKey::Achievements,
            ]
        );
    }

    #[test]
    fn test_normalize_keeps_valid_permutation() {
        let mut order = SectionKey::ALL.to_vec();
        order.rotate_left(3);
        assert_eq!(normalize_section_order(&order), order);
    }

    #[test]
    fn test_section_key_serializes_lowercase() {
        let json = serde_json::to_string(&SectionKey::Achievements).unwrap();
        assert_eq!(json, "\"achievements\"");
        let key: SectionKey = serde_json::from_str("\"projects\"").unwrap();
        assert_eq!(key, SectionKey::Projects);
    }

    #[test]
    fn test_project_uses_camel_case_image_url() {
        let json = serde_json::json!({
            "id": "p1",
            "name": "Neo",
            "description": "d",
            "imageUrl": "https://example.com/a.png",
            "link": "#"
        });
        let project: Project = serde_json::from_value(json).unwrap();
        assert_eq!(project.image_url, "https://example.com/a.png");
    }

    #[test]
    fn test_set_field_rejects_unknown_field() {
        let mut exp = Experience::placeholder("x".to_string());
        assert!(exp.set_field("company", "Acme".to_string()));
        assert_eq!(exp.company, "Acme");
        assert!(!exp.set_field("salary", "1".to_string()));
    }

    #[test]
    fn test_first_duplicate_id() {
        let mut items = vec![
            Achievement::placeholder("a".into()),
            Achievement::placeholder("b".into()),
        ];
        assert_eq!(first_duplicate_id(&items), None);
        items.push(Achievement::placeholder("a".into()));
        assert_eq!(first_duplicate_id(&items), Some("a"));
    }

    #[test]
    fn test_reassign_duplicate_ids_keeps_first_occurrence() {
        let mut items = vec![
            Project::placeholder("p1".into()),
            Project::placeholder("p1".into()),
            Project::placeholder("p2".into()),
            Project::placeholder("p1".into()),
        ];
        let mut counter = 0;
        let renamed = reassign_duplicate_ids(&mut items, || {
            counter += 1;
            format!("fresh-{counter}")
        });

        assert_eq!(renamed, 2);
        let ids: Vec<&str> = items.iter().map(|item| item.id()).collect();
        assert_eq!(ids, vec!["p1", "fresh-1", "p2", "fresh-2"]);
        assert_eq!(first_duplicate_id(&items), None);
    }

    #[test]
    fn test_placeholders_carry_given_id() {
        assert_eq!(Project::placeholder("a".into()).id(), "a");
        assert_eq!(Education::placeholder("b".into()).id(), "b");
        assert_eq!(Achievement::placeholder("c".into()).id(), "c");
    }
}
