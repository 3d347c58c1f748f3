//! Portfolio actions: the only way the record changes.
//!
//! `apply` is a pure reducer: it takes the current record and an action and
//! returns the next record or a `StoreError`. It never touches storage; the
//! store persists after a successful apply.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::portfolio::{
    is_permutation, parse_skills, ListItem, ListKind, PortfolioData, SectionKey, ThemeMode,
};
use crate::portfolio::presets::apply_preset;
use crate::portfolio::seed::seed_portfolio;

#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("No {list} item with id '{id}'")]
    ItemNotFound { list: &'static str, id: String },

    #[error("Unknown field '{field}' for {list} items")]
    UnknownField { list: &'static str, field: String },

    #[error("Section order must contain each of the seven sections exactly once")]
    InvalidSectionOrder,

    #[error("Unknown preset '{0}'")]
    UnknownPreset(String),

    #[error("Duplicate {list} id '{id}'")]
    DuplicateId { list: &'static str, id: String },
}

/// Partial profile update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub passion: Option<String>,
    pub contact_email: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialsPatch {
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePatch {
    pub template_id: Option<String>,
    pub primary_color: Option<String>,
    pub font_pair: Option<String>,
    pub mode: Option<ThemeMode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    UpdateProfile(ProfilePatch),
    UpdateSocials(SocialsPatch),
    /// Comma-separated skills text, as typed.
    SetSkills { text: String },
    AddItem { list: ListKind },
    UpdateItem {
        list: ListKind,
        id: String,
        field: String,
        value: String,
    },
    RemoveItem { list: ListKind, id: String },
    /// Moves an item to `to_index`, clamped to the end of the list.
    MoveItem {
        list: ListKind,
        id: String,
        to_index: usize,
    },
    UpdateTheme(ThemePatch),
    ReorderSections { order: Vec<SectionKey> },
    ApplyPreset { preset: String },
    Replace { data: Box<PortfolioData> },
    Reset,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::UpdateProfile(_) => "update_profile",
            Action::UpdateSocials(_) => "update_socials",
            Action::SetSkills { .. } => "set_skills",
            Action::AddItem { .. } => "add_item",
            Action::UpdateItem { .. } => "update_item",
            Action::RemoveItem { .. } => "remove_item",
            Action::MoveItem { .. } => "move_item",
            Action::UpdateTheme(_) => "update_theme",
            Action::ReorderSections { .. } => "reorder_sections",
            Action::ApplyPreset { .. } => "apply_preset",
            Action::Replace { .. } => "replace",
            Action::Reset => "reset",
        }
    }
}

fn set_if(target: &mut String, value: Option<String>) {
    if let Some(v) = value {
        *target = v;
    }
}

/// Applies `action` to `current`, returning the next record.
pub fn apply(current: &PortfolioData, action: Action) -> Result<PortfolioData, StoreError> {
    let mut next = current.clone();

    match action {
        Action::UpdateProfile(patch) => {
            set_if(&mut next.name, patch.name);
            set_if(&mut next.tagline, patch.tagline);
            set_if(&mut next.avatar_url, patch.avatar_url);
            set_if(&mut next.bio, patch.bio);
            set_if(&mut next.passion, patch.passion);
            set_if(&mut next.contact_email, patch.contact_email);
        }
        Action::UpdateSocials(patch) => {
            set_if(&mut next.socials.github, patch.github);
            set_if(&mut next.socials.linkedin, patch.linkedin);
            set_if(&mut next.socials.twitter, patch.twitter);
        }
        Action::SetSkills { text } => next.skills = parse_skills(&text),
        Action::AddItem { list } => {
            let id = Uuid::new_v4().to_string();
            match list {
                ListKind::Projects => add_item(&mut next.projects, id),
                ListKind::Experience => add_item(&mut next.experience, id),
                ListKind::Education => add_item(&mut next.education, id),
                ListKind::Achievements => add_item(&mut next.achievements, id),
            }
        }
        Action::UpdateItem {
            list,
            id,
            field,
            value,
        } => match list {
            ListKind::Projects => update_item(&mut next.projects, list, &id, &field, value)?,
            ListKind::Experience => update_item(&mut next.experience, list, &id, &field, value)?,
            ListKind::Education => update_item(&mut next.education, list, &id, &field, value)?,
            ListKind::Achievements => {
                update_item(&mut next.achievements, list, &id, &field, value)?
            }
        },
        Action::RemoveItem { list, id } => match list {
            ListKind::Projects => remove_item(&mut next.projects, list, &id)?,
            ListKind::Experience => remove_item(&mut next.experience, list, &id)?,
            ListKind::Education => remove_item(&mut next.education, list, &id)?,
            ListKind::Achievements => remove_item(&mut next.achievements, list, &id)?,
        },
        Action::MoveItem { list, id, to_index } => match list {
            ListKind::Projects => move_item(&mut next.projects, list, &id, to_index)?,
            ListKind::Experience => move_item(&mut next.experience, list, &id, to_index)?,
            ListKind::Education => move_item(&mut next.education, list, &id, to_index)?,
            ListKind::Achievements => move_item(&mut next.achievements, list, &id, to_index)?,
        },
        Action::UpdateTheme(patch) => {
            let theme = &mut next.theme_settings;
            set_if(&mut theme.template_id, patch.template_id);
            set_if(&mut theme.primary_color, patch.primary_color);
            set_if(&mut theme.font_pair, patch.font_pair);
            if let Some(mode) = patch.mode {
                theme.mode = mode;
            }
        }
        Action::ReorderSections { order } => {
            if !is_permutation(&order) {
                return Err(StoreError::InvalidSectionOrder);
            }
            next.section_order = order;
        }
        Action::ApplyPreset { preset } => {
            next = apply_preset(&preset, current).ok_or(StoreError::UnknownPreset(preset))?;
        }
        Action::Replace { data } => {
            if !is_permutation(&data.section_order) {
                return Err(StoreError::InvalidSectionOrder);
            }
            if let Some((list, id)) = data.duplicate_id() {
                return Err(StoreError::DuplicateId {
                    list: list.as_str(),
                    id,
                });
            }
            next = *data;
        }
        Action::Reset => next = seed_portfolio(),
    }

    Ok(next)
}

fn add_item<T: ListItem>(items: &mut Vec<T>, id: String) {
    items.push(T::placeholder(id));
}

fn position<T: ListItem>(items: &[T], list: ListKind, id: &str) -> Result<usize, StoreError> {
    items
        .iter()
        .position(|item| item.id() == id)
        .ok_or_else(|| StoreError::ItemNotFound {
            list: list.as_str(),
            id: id.to_string(),
        })
}

fn update_item<T: ListItem>(
    items: &mut [T],
    list: ListKind,
    id: &str,
    field: &str,
    value: String,
) -> Result<(), StoreError> {
    let idx = position(items, list, id)?;
    if !items[idx].set_field(field, value) {
        return Err(StoreError::UnknownField {
            list: list.as_str(),
            field: field.to_string(),
        });
    }
    Ok(())
}

fn remove_item<T: ListItem>(items: &mut Vec<T>, list: ListKind, id: &str) -> Result<(), StoreError> {
    let idx = position(items, list, id)?;
    items.remove(idx);
    Ok(())
}

fn move_item<T: ListItem>(
    items: &mut Vec<T>,
    list: ListKind,
    id: &str,
    to_index: usize,
) -> Result<(), StoreError> {
    let from = position(items, list, id)?;
    let item = items.remove(from);
    let to = to_index.min(items.len());
    items.insert(to, item);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn seed() -> PortfolioData {
        seed_portfolio()
    }

    #[test]
    fn test_update_profile_is_partial() {
        let next = apply(
            &seed(),
            Action::UpdateProfile(ProfilePatch {
                name: Some("Jane Doe".to_string()),
                contact_email: Some(String::new()),
                ..Default::default()
            }),
        )
        .unwrap();
        assert_eq!(next.name, "Jane Doe");
        assert_eq!(next.contact_email, "");
        assert_eq!(next.tagline, seed().tagline);
    }

    #[test]
    fn test_update_socials_clears_single_link() {
        let next = apply(
            &seed(),
            Action::UpdateSocials(SocialsPatch {
                twitter: Some(String::new()),
                ..Default::default()
            }),
        )
        .unwrap();
        assert_eq!(next.socials.twitter, "");
        assert_eq!(next.socials.github, "https://github.com");
    }

    #[test]
    fn test_set_skills_parses_text() {
        let next = apply(
            &seed(),
            Action::SetSkills {
                text: "Rust, , Tokio ,Axum".to_string(),
            },
        )
        .unwrap();
        assert_eq!(next.skills, vec!["Rust", "Tokio", "Axum"]);
    }

    #[test]
    fn test_add_item_uses_fresh_uuid() {
        let first = apply(&seed(), Action::AddItem { list: ListKind::Projects }).unwrap();
        let second = apply(&first, Action::AddItem { list: ListKind::Projects }).unwrap();
        assert_eq!(second.projects.len(), 4);
        let a = &second.projects[2];
        let b = &second.projects[3];
        assert_eq!(a.name, "New Project");
        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }

    #[test]
    fn test_update_item_field() {
        let next = apply(
            &seed(),
            Action::UpdateItem {
                list: ListKind::Experience,
                id: "exp1".to_string(),
                field: "company".to_string(),
                value: "Acme".to_string(),
            },
        )
        .unwrap();
        assert_eq!(next.experience[0].company, "Acme");
        assert_eq!(next.experience[0].id, "exp1");
    }

    #[test]
    fn test_update_item_errors() {
        let missing = apply(
            &seed(),
            Action::UpdateItem {
                list: ListKind::Education,
                id: "nope".to_string(),
                field: "degree".to_string(),
                value: "x".to_string(),
            },
        );
        assert_eq!(
            missing.unwrap_err(),
            StoreError::ItemNotFound {
                list: "education",
                id: "nope".to_string()
            }
        );

        let bad_field = apply(
            &seed(),
            Action::UpdateItem {
                list: ListKind::Education,
                id: "edu1".to_string(),
                field: "gpa".to_string(),
                value: "4.0".to_string(),
            },
        );
        assert!(matches!(bad_field, Err(StoreError::UnknownField { .. })));
    }

    #[test]
    fn test_remove_item() {
        let next = apply(
            &seed(),
            Action::RemoveItem {
                list: ListKind::Achievements,
                id: "ach1".to_string(),
            },
        )
        .unwrap();
        assert_eq!(next.achievements.len(), 1);
        assert_eq!(next.achievements[0].id, "ach2");
    }

    #[test]
    fn test_move_item_clamps_index() {
        let next = apply(
            &seed(),
            Action::MoveItem {
                list: ListKind::Projects,
                id: "proj1".to_string(),
                to_index: 99,
            },
        )
        .unwrap();
        let ids: Vec<&str> = next.projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["proj2", "proj1"]);
    }

    #[test]
    fn test_update_theme_partial() {
        let next = apply(
            &seed(),
            Action::UpdateTheme(ThemePatch {
                template_id: Some("studio".to_string()),
                mode: Some(ThemeMode::Light),
                ..Default::default()
            }),
        )
        .unwrap();
        assert_eq!(next.theme_settings.template_id, "studio");
        assert_eq!(next.theme_settings.mode, ThemeMode::Light);
        assert_eq!(next.theme_settings.primary_color, "#22d3ee");
    }

    #[test]
    fn test_reorder_sections_requires_permutation() {
        let mut order = SectionKey::ALL.to_vec();
        order.reverse();
        let next = apply(&seed(), Action::ReorderSections { order: order.clone() }).unwrap();
        assert_eq!(next.section_order, order);

        let bad = apply(
            &seed(),
            Action::ReorderSections {
                order: vec![SectionKey::Profile, SectionKey::Profile],
            },
        );
        assert_eq!(bad.unwrap_err(), StoreError::InvalidSectionOrder);
    }

    #[test]
    fn test_apply_preset_and_unknown_preset() {
        let next = apply(
            &seed(),
            Action::ApplyPreset {
                preset: "civil".to_string(),
            },
        )
        .unwrap();
        assert_eq!(next.name, "Jordan Build");
        assert_eq!(next.theme_settings, seed().theme_settings);

        let err = apply(
            &seed(),
            Action::ApplyPreset {
                preset: "pilot".to_string(),
            },
        );
        assert_eq!(err.unwrap_err(), StoreError::UnknownPreset("pilot".to_string()));
    }

    #[test]
    fn test_replace_swaps_whole_record() {
        let mut data = seed();
        data.name = "Replaced".to_string();
        let next = apply(
            &seed(),
            Action::Replace {
                data: Box::new(data.clone()),
            },
        )
        .unwrap();
        assert_eq!(next, data);
    }

    #[test]
    fn test_replace_rejects_duplicate_item_ids() {
        let mut data = seed();
        data.projects.push(data.projects[0].clone());

        let err = apply(
            &seed(),
            Action::Replace {
                data: Box::new(data),
            },
        );
        assert_eq!(
            err.unwrap_err(),
            StoreError::DuplicateId {
                list: "projects",
                id: "proj1".to_string(),
            }
        );
    }

    #[test]
    fn test_remove_after_rejected_replace_removes_one_item() {
        let mut data = seed();
        data.projects.push(data.projects[0].clone());
        let current = apply(
            &seed(),
            Action::Replace {
                data: Box::new(data),
            },
        )
        .unwrap_or_else(|_| seed());

        let next = apply(
            &current,
            Action::RemoveItem {
                list: ListKind::Projects,
                id: "proj1".to_string(),
            },
        )
        .unwrap();
        assert!(next.projects.iter().all(|p| p.id != "proj1"));
        assert_eq!(next.projects.len(), 1);
    }

    #[test]
    fn test_seed_and_presets_have_unique_ids() {
        assert_eq!(seed().duplicate_id(), None);
        for preset in crate::portfolio::presets::preset_catalog() {
            let data = apply_preset(preset.key, &seed()).unwrap();
            assert_eq!(data.duplicate_id(), None, "preset {}", preset.key);
        }
    }

    #[test]
    fn test_reset_restores_seed() {
        let changed = apply(
            &seed(),
            Action::SetSkills {
                text: String::new(),
            },
        )
        .unwrap();
        assert_eq!(apply(&changed, Action::Reset).unwrap(), seed());
    }

    #[test]
    fn test_action_deserializes_from_tagged_json() {
        let action: Action = serde_json::from_value(serde_json::json!({
            "type": "move_item",
            "list": "projects",
            "id": "proj2",
            "to_index": 0
        }))
        .unwrap();
        assert_eq!(action.name(), "move_item");

        let action: Action = serde_json::from_value(serde_json::json!({
            "type": "update_profile",
            "avatarUrl": "data:image/png;base64,AAAA"
        }))
        .unwrap();
        match action {
            Action::UpdateProfile(p) => assert!(p.avatar_url.is_some()),
            other => panic!("unexpected action {other:?}"),
        }
    }
}
