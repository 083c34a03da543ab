use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::naming::catalog::Catalog;
use crate::naming::slot::AttributeSlot;

/// The user's current choices, sent by the UI on every request.
///
/// Option slots hold the option `value`; media art holds the catalog key.
/// `date` and `title` are the raw field contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS, JsonSchema)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct Selection {
    pub date: String,
    pub media_art: Option<String>,
    pub title: String,
    pub content_type: Option<String>,
    pub content_category: Option<String>,
    pub language: Option<String>,
    pub country: Option<String>,
}

impl Selection {
    /// Selected value for an option slot, trimmed, with blank values treated as unset
    pub fn value(&self, slot: AttributeSlot) -> Option<&str> {
        let value = match slot {
            AttributeSlot::MediaArt => self.media_art.as_deref(),
            AttributeSlot::ContentType => self.content_type.as_deref(),
            AttributeSlot::ContentCategory => self.content_category.as_deref(),
            AttributeSlot::Language => self.language.as_deref(),
            AttributeSlot::Country => self.country.as_deref(),
            AttributeSlot::Date | AttributeSlot::Title => None,
        };
        value.map(str::trim).filter(|v| !v.is_empty())
    }

    fn value_mut(&mut self, slot: AttributeSlot) -> Option<&mut Option<String>> {
        match slot {
            AttributeSlot::MediaArt => Some(&mut self.media_art),
            AttributeSlot::ContentType => Some(&mut self.content_type),
            AttributeSlot::ContentCategory => Some(&mut self.content_category),
            AttributeSlot::Language => Some(&mut self.language),
            AttributeSlot::Country => Some(&mut self.country),
            AttributeSlot::Date | AttributeSlot::Title => None,
        }
    }

    /// Switches the media art and drops dependent choices the new media art
    /// does not offer. Returns the slots that were cleared.
    pub fn select_media_art(&mut self, key: Option<&str>, catalog: &Catalog) -> Vec<AttributeSlot> {
        let key = key.map(str::trim).filter(|k| !k.is_empty());
        self.media_art = key.map(str::to_string);

        let media_art = key.unwrap_or_default();
        let mut cleared = Vec::new();
        for slot in [AttributeSlot::ContentType, AttributeSlot::ContentCategory] {
            let keep = self
                .value(slot)
                .map(|v| catalog.find_option(slot, media_art, v).is_some())
                .unwrap_or(true);
            if keep {
                continue;
            }
            if let Some(value) = self.value_mut(slot) {
                *value = None;
                cleared.push(slot);
            }
        }
        cleared
    }

    /// Slots the UI should show for the current media art
    pub fn visible_slots(&self, catalog: &Catalog) -> Vec<AttributeSlot> {
        let media_art = self.value(AttributeSlot::MediaArt).unwrap_or_default();
        AttributeSlot::ALL
            .iter()
            .copied()
            .filter(|slot| slot.is_mandatory() || !catalog.options_for(*slot, media_art).is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_values::*;

    fn layout_selection() -> Selection {
        Selection {
            date: TEST_DATE_INPUT.to_string(),
            media_art: Some(TEST_MEDIA_LAYOUT.to_string()),
            title: TEST_TITLE.to_string(),
            content_type: Some("BRO".to_string()),
            content_category: Some("gen".to_string()),
            language: Some("ger".to_string()),
            country: None,
        }
    }

    #[test]
    fn test_switching_media_art_clears_stale_choices() {
        let catalog = Catalog::builtin();
        let mut selection = layout_selection();

        let cleared = selection.select_media_art(Some(TEST_MEDIA_DRAWING), &catalog);

        assert_eq!(
            cleared,
            vec![AttributeSlot::ContentType, AttributeSlot::ContentCategory]
        );
        assert_eq!(selection.media_art.as_deref(), Some(TEST_MEDIA_DRAWING));
        assert_eq!(selection.content_type, None);
        assert_eq!(selection.content_category, None);
        // Unconditional slots survive
        assert_eq!(selection.language.as_deref(), Some("ger"));
    }

    #[test]
    fn test_switching_media_art_keeps_shared_choices() {
        let catalog = Catalog::builtin();
        let mut selection = layout_selection();

        let cleared = selection.select_media_art(Some(TEST_MEDIA_VIDEO), &catalog);

        // "gen" exists for video too, "BRO" does not
        assert_eq!(cleared, vec![AttributeSlot::ContentType]);
        assert_eq!(selection.content_category.as_deref(), Some("gen"));
    }

    #[test]
    fn test_clearing_media_art_clears_dependents() {
        let catalog = Catalog::builtin();
        let mut selection = layout_selection();

        let cleared = selection.select_media_art(None, &catalog);

        assert_eq!(cleared.len(), 2);
        assert_eq!(selection.media_art, None);

        let mut blank = layout_selection();
        blank.select_media_art(Some("  "), &catalog);
        assert_eq!(blank.media_art, None);
    }

    #[test]
    fn test_blank_values_count_as_unset() {
        let selection = Selection {
            content_type: Some("   ".to_string()),
            ..Selection::default()
        };
        assert_eq!(selection.value(AttributeSlot::ContentType), None);
        assert_eq!(selection.value(AttributeSlot::Title), None);
    }

    #[test]
    fn test_values_are_trimmed() {
        let selection = Selection {
            media_art: Some(" layout ".to_string()),
            language: Some("ger\n".to_string()),
            ..Selection::default()
        };
        assert_eq!(selection.value(AttributeSlot::MediaArt), Some(TEST_MEDIA_LAYOUT));
        assert_eq!(selection.value(AttributeSlot::Language), Some("ger"));
    }

    #[test]
    fn test_visible_slots_follow_media_art() {
        let catalog = Catalog::builtin();
        let mut selection = Selection::default();

        assert_eq!(
            selection.visible_slots(&catalog),
            vec![
                AttributeSlot::Date,
                AttributeSlot::MediaArt,
                AttributeSlot::Title,
                AttributeSlot::Language,
                AttributeSlot::Country,
            ]
        );

        selection.select_media_art(Some(TEST_MEDIA_DRAWING), &catalog);
        let visible = selection.visible_slots(&catalog);
        assert!(visible.contains(&AttributeSlot::ContentType));
        assert!(!visible.contains(&AttributeSlot::ContentCategory));

        selection.select_media_art(Some(TEST_MEDIA_IMAGE), &catalog);
        let visible = selection.visible_slots(&catalog);
        assert!(!visible.contains(&AttributeSlot::ContentType));
        assert!(visible.contains(&AttributeSlot::ContentCategory));
    }

    #[test]
    fn test_selection_deserializes_partial_json() {
        let selection: Selection =
            serde_json::from_str(r#"{"mediaArt": "layout", "title": "ISH2025"}"#).unwrap();
        assert_eq!(selection.media_art.as_deref(), Some(TEST_MEDIA_LAYOUT));
        assert_eq!(selection.date, "");
        assert_eq!(selection.country, None);
    }
}
