use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One position in the composed file name.
///
/// The derived ordering is the output token order, so variants must stay
/// declared in that order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS, JsonSchema,
)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum AttributeSlot {
    Date,
    MediaArt,
    Title,
    ContentType,
    ContentCategory,
    Language,
    Country,
}

impl AttributeSlot {
    pub const ALL: [AttributeSlot; 7] = [
        AttributeSlot::Date,
        AttributeSlot::MediaArt,
        AttributeSlot::Title,
        AttributeSlot::ContentType,
        AttributeSlot::ContentCategory,
        AttributeSlot::Language,
        AttributeSlot::Country,
    ];

    /// Slots that must be filled before a name can be composed
    pub fn is_mandatory(self) -> bool {
        matches!(
            self,
            AttributeSlot::Date | AttributeSlot::MediaArt | AttributeSlot::Title
        )
    }

    /// Slots whose option set depends on the selected media art
    pub fn depends_on_media_art(self) -> bool {
        matches!(
            self,
            AttributeSlot::ContentType | AttributeSlot::ContentCategory
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            AttributeSlot::Date => "Date",
            AttributeSlot::MediaArt => "Media Art",
            AttributeSlot::Title => "Title",
            AttributeSlot::ContentType => "Content Type",
            AttributeSlot::ContentCategory => "Content Category",
            AttributeSlot::Language => "Language",
            AttributeSlot::Country => "Country",
        }
    }
}

impl std::fmt::Display for AttributeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
