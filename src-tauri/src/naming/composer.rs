use log::debug;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::config::naming;
use crate::naming::catalog::Catalog;
use crate::naming::date_token::{format_date_token, parse_date_input};
use crate::naming::selection::Selection;
use crate::naming::slot::AttributeSlot;

/// First unmet requirement of a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize, TS, JsonSchema)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum ValidationFailure {
    #[error("Please choose a valid date")]
    MissingDate,

    #[error("Please choose a media art")]
    MissingMediaArt,

    #[error("Please enter a title")]
    MissingTitle,
}

impl ValidationFailure {
    pub fn slot(self) -> AttributeSlot {
        match self {
            ValidationFailure::MissingDate => AttributeSlot::Date,
            ValidationFailure::MissingMediaArt => AttributeSlot::MediaArt,
            ValidationFailure::MissingTitle => AttributeSlot::Title,
        }
    }
}

/// One segment of a composed name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, JsonSchema)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NameToken {
    pub slot: AttributeSlot,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, JsonSchema)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ComposedName {
    pub file_name: String,
    /// Trimmed title, the value recorded in the title history
    pub title: String,
    pub tokens: Vec<NameToken>,
}

impl ComposedName {
    pub fn as_str(&self) -> &str {
        &self.file_name
    }
}

impl std::fmt::Display for ComposedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.file_name)
    }
}

/// Builds the file name for `selection`.
///
/// Checks media art, then date, then title, and stops at the first
/// failure. Optional slots are emitted only when the catalog offers them
/// for the selected media art and the selected value is one of those
/// options; anything else is dropped.
pub fn compose(selection: &Selection, catalog: &Catalog) -> Result<ComposedName, ValidationFailure> {
    let media_art = selection
        .value(AttributeSlot::MediaArt)
        .and_then(|key| catalog.media_art(key))
        .ok_or(ValidationFailure::MissingMediaArt)?;

    // A media art whose token sanitizes away cannot hold its position
    let media_art_token = sanitize_token(&media_art.value);
    if media_art_token.is_empty() {
        return Err(ValidationFailure::MissingMediaArt);
    }

    let date = parse_date_input(&selection.date).ok_or(ValidationFailure::MissingDate)?;

    let title = selection.title.trim();
    if title.is_empty() {
        return Err(ValidationFailure::MissingTitle);
    }

    let mut tokens = vec![
        NameToken {
            slot: AttributeSlot::Date,
            value: format_date_token(date),
        },
        NameToken {
            slot: AttributeSlot::MediaArt,
            value: media_art_token,
        },
        NameToken {
            slot: AttributeSlot::Title,
            value: title.to_string(),
        },
    ];

    for slot in [
        AttributeSlot::ContentType,
        AttributeSlot::ContentCategory,
        AttributeSlot::Language,
        AttributeSlot::Country,
    ] {
        let Some(selected) = selection.value(slot) else {
            continue;
        };
        let Some(option) = catalog.find_option(slot, &media_art.key, selected) else {
            debug!(
                "Dropping {} '{}': not offered for media art '{}'",
                slot, selected, media_art.key
            );
            continue;
        };
        let value = sanitize_token(&option.value);
        if value.is_empty() {
            debug!("Dropping {} '{}': empty token", slot, selected);
            continue;
        }
        tokens.push(NameToken { slot, value });
    }

    let delimiter = naming::DELIMITER.to_string();
    let file_name = tokens
        .iter()
        .map(|t| t.value.as_str())
        .collect::<Vec<_>>()
        .join(delimiter.as_str());

    Ok(ComposedName {
        file_name,
        title: title.to_string(),
        tokens,
    })
}

/// Strips whitespace and replaces the delimiter inside a catalog value
pub fn sanitize_token(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            if c == naming::DELIMITER {
                naming::DELIMITER_REPLACEMENT
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_values::*;
    use crate::naming::catalog::{MediaArt, NameOption};
    use std::collections::BTreeMap;

    fn reference_selection() -> Selection {
        Selection {
            date: TEST_DATE_INPUT.to_string(),
            media_art: Some(TEST_MEDIA_LAYOUT.to_string()),
            title: TEST_TITLE.to_string(),
            content_type: Some("BRO".to_string()),
            content_category: Some("gen".to_string()),
            language: None,
            country: None,
        }
    }

    #[test]
    fn test_reference_scenario() {
        let catalog = Catalog::builtin();
        let name = compose(&reference_selection(), &catalog).expect("Failed to compose");
        assert_eq!(name.file_name, TEST_FILE_NAME);
        assert_eq!(name.to_string(), TEST_FILE_NAME);
        assert_eq!(name.title, TEST_TITLE);
    }

    #[test]
    fn test_full_token_order() {
        let catalog = Catalog::builtin();
        let selection = Selection {
            language: Some("en".to_string()),
            country: Some("de".to_string()),
            ..reference_selection()
        };

        let name = compose(&selection, &catalog).unwrap();
        assert_eq!(name.file_name, "250314_lay_ISH2025_BRO_gen_en_de");

        let slots: Vec<_> = name.tokens.iter().map(|t| t.slot).collect();
        assert_eq!(slots, AttributeSlot::ALL.to_vec());
    }

    #[test]
    fn test_optional_slots_are_skipped_without_gaps() {
        let catalog = Catalog::builtin();
        let selection = Selection {
            content_type: None,
            content_category: Some(String::new()),
            country: Some("ch".to_string()),
            ..reference_selection()
        };

        let name = compose(&selection, &catalog).unwrap();
        assert_eq!(name.file_name, "250314_lay_ISH2025_ch");
        assert!(!name.file_name.contains("__"));
    }

    #[test]
    fn test_missing_media_art_wins_over_everything() {
        let catalog = Catalog::builtin();

        let selections = [
            Selection {
                media_art: None,
                ..reference_selection()
            },
            Selection {
                media_art: None,
                date: String::new(),
                title: String::new(),
                ..reference_selection()
            },
            Selection {
                media_art: Some("hologram".to_string()),
                ..reference_selection()
            },
            Selection::default(),
        ];

        for selection in &selections {
            assert_eq!(
                compose(selection, &catalog),
                Err(ValidationFailure::MissingMediaArt)
            );
        }
    }

    #[test]
    fn test_missing_date_precedes_missing_title() {
        let catalog = Catalog::builtin();
        let selection = Selection {
            date: String::new(),
            title: String::new(),
            ..reference_selection()
        };
        assert_eq!(
            compose(&selection, &catalog),
            Err(ValidationFailure::MissingDate)
        );

        let unparseable = Selection {
            date: "2025-02-30".to_string(),
            ..reference_selection()
        };
        assert_eq!(
            compose(&unparseable, &catalog),
            Err(ValidationFailure::MissingDate)
        );
    }

    #[test]
    fn test_blank_title_is_missing() {
        let catalog = Catalog::builtin();
        for title in ["", "   ", "\t\n"] {
            let selection = Selection {
                title: title.to_string(),
                ..reference_selection()
            };
            assert_eq!(
                compose(&selection, &catalog),
                Err(ValidationFailure::MissingTitle)
            );
        }
    }

    #[test]
    fn test_title_is_trimmed_but_otherwise_verbatim() {
        let catalog = Catalog::builtin();
        let selection = Selection {
            title: "  Trade Fair_2025 ".to_string(),
            content_type: None,
            content_category: None,
            ..reference_selection()
        };
        let name = compose(&selection, &catalog).unwrap();
        assert_eq!(name.file_name, "250314_lay_Trade Fair_2025");
        assert_eq!(name.title, "Trade Fair_2025");
    }

    #[test]
    fn test_stale_category_never_reaches_drawing_names() {
        let catalog = Catalog::builtin();
        let selection = Selection {
            media_art: Some(TEST_MEDIA_DRAWING.to_string()),
            content_type: Some("ILL".to_string()),
            content_category: Some("gen".to_string()),
            ..reference_selection()
        };

        let name = compose(&selection, &catalog).unwrap();
        assert_eq!(name.file_name, "250314_dra_ISH2025_ILL");
        assert!(!name
            .tokens
            .iter()
            .any(|t| t.slot == AttributeSlot::ContentCategory));
    }

    #[test]
    fn test_value_from_other_media_art_is_dropped() {
        let catalog = Catalog::builtin();
        let selection = Selection {
            media_art: Some(TEST_MEDIA_VIDEO.to_string()),
            content_type: Some("BRO".to_string()),
            ..reference_selection()
        };
        let name = compose(&selection, &catalog).unwrap();
        assert_eq!(name.file_name, "250314_video_ISH2025_gen");
    }

    #[test]
    fn test_compose_is_idempotent() {
        let catalog = Catalog::builtin();
        let selection = reference_selection();
        let first = compose(&selection, &catalog).unwrap();
        let second = compose(&selection, &catalog).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_dirty_catalog_values_are_sanitized() {
        let catalog = Catalog::new(
            vec![MediaArt {
                key: "layout".to_string(),
                label: "Layouts".to_string(),
                value: "la y".to_string(),
            }],
            BTreeMap::from([(
                "layout".to_string(),
                BTreeMap::from([(
                    AttributeSlot::ContentType,
                    vec![NameOption::new("Roll up", "ROLL_UP")],
                )]),
            )]),
            Vec::new(),
            Vec::new(),
            Vec::new(),
        );
        let selection = Selection {
            content_type: Some("ROLL_UP".to_string()),
            content_category: None,
            ..reference_selection()
        };

        let name = compose(&selection, &catalog).unwrap();
        assert_eq!(name.file_name, "250314_lay_ISH2025_ROLL-UP");
    }

    #[test]
    fn test_padded_keys_match_catalog() {
        let catalog = Catalog::builtin();
        let selection = Selection {
            media_art: Some(" layout".to_string()),
            content_type: Some("BRO ".to_string()),
            ..reference_selection()
        };
        let name = compose(&selection, &catalog).unwrap();
        assert_eq!(name.file_name, TEST_FILE_NAME);
    }

    #[test]
    fn test_blank_media_art_token_is_rejected() {
        let catalog = Catalog::new(
            vec![MediaArt {
                key: "layout".to_string(),
                label: "Layouts".to_string(),
                value: "  ".to_string(),
            }],
            BTreeMap::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
        );

        assert_eq!(
            compose(&reference_selection(), &catalog),
            Err(ValidationFailure::MissingMediaArt)
        );
    }

    #[test]
    fn test_blank_option_value_never_yields_empty_token() {
        let catalog = Catalog::new(
            vec![MediaArt {
                key: "layout".to_string(),
                label: "Layouts".to_string(),
                value: "lay".to_string(),
            }],
            BTreeMap::from([(
                "layout".to_string(),
                BTreeMap::from([(
                    AttributeSlot::ContentType,
                    vec![NameOption::new("Blank", " \t ")],
                )]),
            )]),
            Vec::new(),
            Vec::new(),
            Vec::new(),
        );
        let selection = Selection {
            content_type: Some(" \t ".to_string()),
            content_category: None,
            ..reference_selection()
        };
        let name = compose(&selection, &catalog).unwrap();
        assert_eq!(name.file_name, "250314_lay_ISH2025");
        assert_eq!(name.tokens.len(), 3);
        assert!(name.tokens.iter().all(|t| !t.value.is_empty()));
    }

    #[test]
    fn test_failure_messages_and_slots() {
        assert_eq!(ValidationFailure::MissingDate.slot(), AttributeSlot::Date);
        assert_eq!(ValidationFailure::MissingTitle.slot(), AttributeSlot::Title);
        assert_eq!(
            ValidationFailure::MissingMediaArt.to_string(),
            "Please choose a media art"
        );
        assert_eq!(
            serde_json::to_string(&ValidationFailure::MissingTitle).unwrap(),
            "\"missingTitle\""
        );
    }
}
