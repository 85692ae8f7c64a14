use serde::{Deserialize, Serialize};

/// Character budget communicated to the generator for a `Title` element.
pub const TITLE_MAX_LENGTH: u32 = 64;
/// Character budget communicated to the generator for a `Subtitle` element.
pub const SUBTITLE_MAX_LENGTH: u32 = 96;
/// Character budget communicated to the generator for a `Description` element.
pub const DESCRIPTION_MAX_LENGTH: u32 = 240;

/// Slide element as it appears in the raw generation response: semantic
/// content only, no presentation metadata.
///
/// The `type` tag must be one of the three kinds below; any other tag fails
/// deserialization. `text` must be present and be a string. `maxLength`
/// falls back to the kind's budget when the generator omits it, and unknown
/// extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum UnstyledElement {
    Title {
        text: String,
        #[serde(default = "title_max_length")]
        max_length: u32,
    },
    Subtitle {
        text: String,
        #[serde(default = "subtitle_max_length")]
        max_length: u32,
    },
    Description {
        text: String,
        #[serde(default = "description_max_length")]
        max_length: u32,
    },
}

fn title_max_length() -> u32 {
    TITLE_MAX_LENGTH
}

fn subtitle_max_length() -> u32 {
    SUBTITLE_MAX_LENGTH
}

fn description_max_length() -> u32 {
    DESCRIPTION_MAX_LENGTH
}

impl UnstyledElement {
    pub fn text(&self) -> &str {
        match self {
            Self::Title { text, .. } | Self::Subtitle { text, .. } | Self::Description { text, .. } => text,
        }
    }

    /// Attach the kind's presentation defaults.
    pub fn into_styled(self) -> Element {
        match self {
            Self::Title { text, max_length } => Element::Title {
                text,
                max_length,
                style: TextStyle {
                    font_size: FontSize::Large,
                    align: Alignment::Center,
                },
            },
            Self::Subtitle { text, max_length } => Element::Subtitle {
                text,
                max_length,
                style: TextStyle {
                    font_size: FontSize::Medium,
                    align: Alignment::Center,
                },
            },
            Self::Description { text, max_length } => Element::Description {
                text,
                max_length,
                style: TextStyle {
                    font_size: FontSize::Small,
                    align: Alignment::Left,
                },
            },
        }
    }
}

/// Slide element in the shape the editor consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum Element {
    Title {
        text: String,
        max_length: u32,
        style: TextStyle,
    },
    Subtitle {
        text: String,
        max_length: u32,
        style: TextStyle,
    },
    Description {
        text: String,
        max_length: u32,
        style: TextStyle,
    },
}

impl Element {
    pub fn text(&self) -> &str {
        match self {
            Self::Title { text, .. } | Self::Subtitle { text, .. } | Self::Description { text, .. } => text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_size: FontSize,
    pub align: Alignment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}
