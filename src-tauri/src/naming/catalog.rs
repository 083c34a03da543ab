use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use log::{info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::config::naming;
use crate::errors::{AppError, AppResult};
use crate::naming::slot::AttributeSlot;

/// A selectable value. Only `value` ever reaches the file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, JsonSchema)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NameOption {
    pub label: String,
    pub value: String,
}

impl NameOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Top-level classification of an asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, JsonSchema)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MediaArt {
    /// Key stored in the selection and used to index dependent options
    pub key: String,
    pub label: String,
    /// Token emitted into the file name
    pub value: String,
}

/// Static vocabulary of every selectable option.
///
/// Dependent option sets are a single two-level lookup,
/// media art key -> slot -> options. A missing entry at either level
/// means "nothing to offer", which is a normal state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    media_arts: Vec<MediaArt>,
    #[serde(default)]
    options_by_media_art: BTreeMap<String, BTreeMap<AttributeSlot, Vec<NameOption>>>,
    #[serde(default)]
    languages: Vec<NameOption>,
    #[serde(default)]
    countries: Vec<NameOption>,
    #[serde(default)]
    default_titles: Vec<String>,
}

impl Catalog {
    pub fn new(
        media_arts: Vec<MediaArt>,
        options_by_media_art: BTreeMap<String, BTreeMap<AttributeSlot, Vec<NameOption>>>,
        languages: Vec<NameOption>,
        countries: Vec<NameOption>,
        default_titles: Vec<String>,
    ) -> Self {
        Self {
            media_arts,
            options_by_media_art,
            languages,
            countries,
            default_titles,
        }
    }

    pub fn media_arts(&self) -> &[MediaArt] {
        &self.media_arts
    }

    pub fn media_art(&self, key: &str) -> Option<&MediaArt> {
        self.media_arts.iter().find(|m| m.key == key)
    }

    pub fn languages(&self) -> &[NameOption] {
        &self.languages
    }

    pub fn countries(&self) -> &[NameOption] {
        &self.countries
    }

    pub fn default_titles(&self) -> &[String] {
        &self.default_titles
    }

    /// Options offered for `slot` while `media_art` is selected.
    ///
    /// Unknown media arts and unconfigured slots yield an empty slice.
    /// Language and country ignore the media art.
    pub fn options_for(&self, slot: AttributeSlot, media_art: &str) -> &[NameOption] {
        match slot {
            AttributeSlot::ContentType | AttributeSlot::ContentCategory => self
                .options_by_media_art
                .get(media_art)
                .and_then(|by_slot| by_slot.get(&slot))
                .map(Vec::as_slice)
                .unwrap_or(&[]),
            AttributeSlot::Language => &self.languages,
            AttributeSlot::Country => &self.countries,
            AttributeSlot::Date | AttributeSlot::MediaArt | AttributeSlot::Title => &[],
        }
    }

    pub fn find_option(
        &self,
        slot: AttributeSlot,
        media_art: &str,
        value: &str,
    ) -> Option<&NameOption> {
        self.options_for(slot, media_art)
            .iter()
            .find(|o| o.value == value)
    }

    /// Reads a JSON catalog from `path`, or falls back to the built-in one
    /// when the file does not exist.
    pub fn load_or_builtin(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            info!("No catalog override at {}, using built-in catalog", path.display());
            return Ok(Self::builtin());
        }

        let content = std::fs::read_to_string(path)?;
        let catalog: Catalog = serde_json::from_str(&content).map_err(|e| {
            AppError::config(format!("Invalid catalog file {}: {}", path.display(), e))
        })?;

        if catalog.media_arts.is_empty() {
            return Err(AppError::config(format!(
                "Catalog file {} defines no media arts",
                path.display()
            )));
        }

        for warning in catalog.lint() {
            warn!("Catalog: {}", warning);
        }
        info!(
            "Loaded catalog override from {} ({} media arts)",
            path.display(),
            catalog.media_arts.len()
        );
        Ok(catalog)
    }

    /// Problems worth reporting that do not prevent using the catalog
    pub fn lint(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        for media_art in &self.media_arts {
            if !is_clean_token(&media_art.value) {
                warnings.push(format!(
                    "media art '{}' has unusable token '{}'",
                    media_art.key, media_art.value
                ));
            }
        }

        for (key, by_slot) in &self.options_by_media_art {
            if self.media_art(key).is_none() {
                warnings.push(format!("options configured for unknown media art '{key}'"));
            }
            for (slot, options) in by_slot {
                if !slot.depends_on_media_art() {
                    warnings.push(format!(
                        "{slot} options under media art '{key}' are ignored"
                    ));
                }
                for option in options.iter().filter(|o| !is_clean_token(&o.value)) {
                    warnings.push(format!(
                        "{slot} value '{}' under '{key}' contains whitespace or the delimiter",
                        option.value
                    ));
                }
            }
        }

        for (slot, options) in [
            (AttributeSlot::Language, &self.languages),
            (AttributeSlot::Country, &self.countries),
        ] {
            for option in options.iter().filter(|o| !is_clean_token(&o.value)) {
                warnings.push(format!(
                    "{slot} value '{}' contains whitespace or the delimiter",
                    option.value
                ));
            }
        }

        let language_values: BTreeSet<&str> =
            self.languages.iter().map(|o| o.value.as_str()).collect();
        for country in &self.countries {
            if language_values.contains(country.value.as_str()) {
                warnings.push(format!(
                    "value '{}' is used both as a language and as a country",
                    country.value
                ));
            }
        }

        warnings
    }

    /// Built-in marketing asset vocabulary
    pub fn builtin() -> Self {
        let media_arts = vec![
            media_art("layout", "Layouts", "lay"),
            media_art("video", "Videos", "video"),
            media_art("drawing", "Drawings", "dra"),
            media_art("image", "Images", "img"),
        ];

        let categories = vec![
            opt("General Content", "gen"),
            opt("Fairs and Events (e.g. trade fair wall)", "event"),
            opt("Campaigning (e.g. special sizes for ads)", "camp"),
            opt("Sales Support", "sales"),
            opt("Service Support", "serv"),
            opt("Product", "prod"),
            opt("Communication", "com"),
            opt("Management", "manag"),
        ];

        let mut options_by_media_art = BTreeMap::new();
        options_by_media_art.insert(
            "layout".to_string(),
            BTreeMap::from([
                (
                    AttributeSlot::ContentType,
                    vec![
                        opt("Brochure", "BRO"),
                        opt("Flyer", "FLY"),
                        opt("Know-How", "KNOW"),
                        opt("OnePaper", "P1"),
                        opt("TwoPaper", "P2P"),
                        opt("ReferenceLeaflets", "REF"),
                        opt("WhitePaper", "WP"),
                        opt("Presentations", "PPT"),
                        opt("Advertising", "AD"),
                        opt("Keyvisual", "KEY"),
                        opt("TradeFair", "TF"),
                        opt("CircularWall", "CWALL"),
                        opt("RollUp", "ROLLUP"),
                        opt("Poster", "PS"),
                        opt("Labelling", "LAB"),
                    ],
                ),
                (AttributeSlot::ContentCategory, categories.clone()),
            ]),
        );
        options_by_media_art.insert(
            "video".to_string(),
            BTreeMap::from([
                (
                    AttributeSlot::ContentType,
                    vec![
                        opt("ExpertVideo", "EXP"),
                        opt("QuickGuideVideo", "GUID"),
                        opt("FootageVideo", "FOOT"),
                        opt("OnlineSeminarVideo", "SEMIN"),
                        opt("ProductVideo", "PROD"),
                        opt("DocumentaryVideo", "DOC"),
                        opt("ImageVideo", "IMAG"),
                        opt("StoryTellingVideo", "STORY"),
                        opt("Message&NewsVideo", "NEW"),
                    ],
                ),
                (AttributeSlot::ContentCategory, categories.clone()),
            ]),
        );
        // Drawings are typed but never categorized
        options_by_media_art.insert(
            "drawing".to_string(),
            BTreeMap::from([(
                AttributeSlot::ContentType,
                vec![
                    opt("CharacteristicCurve", "CC"),
                    opt("Grafic", "GRAF"),
                    opt("Illustration", "ILL"),
                    opt("SectionalDrawing", "SD"),
                    opt("Logos", "LOG"),
                    opt("Product", "prod"),
                ],
            )]),
        );
        options_by_media_art.insert(
            "image".to_string(),
            BTreeMap::from([(AttributeSlot::ContentCategory, categories)]),
        );

        let languages = vec![
            opt("German", "ger"),
            opt("French", "fr"),
            opt("English", "en"),
            opt("Italian", "it"),
            opt("Spanish", "es"),
        ];

        let countries = vec![
            opt("Germany", "de"),
            opt("Austria", "at"),
            opt("Switzerland", "ch"),
            opt("France", "fr"),
            opt("United Kingdom", "gb"),
            opt("United States", "us"),
        ];

        Self::new(
            media_arts,
            options_by_media_art,
            languages,
            countries,
            vec!["ISH2025".to_string()],
        )
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// True when `value` can be used as a token without corrupting the name
pub fn is_clean_token(value: &str) -> bool {
    !value.is_empty()
        && !value.contains(naming::DELIMITER)
        && !value.chars().any(char::is_whitespace)
}

fn opt(label: &str, value: &str) -> NameOption {
    NameOption::new(label, value)
}

fn media_art(key: &str, label: &str, value: &str) -> MediaArt {
    MediaArt {
        key: key.to_string(),
        label: label.to_string(),
        value: value.to_string(),
    }
}
