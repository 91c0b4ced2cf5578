use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Notion text colour: `default`, a named foreground colour, or a colour
/// name ending in `_background`.
///
/// Names Notion adds later are kept as [`Color::Other`] so that a single
/// unfamiliar colour never fails the object carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Color {
    #[default]
    Default,
    Gray,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    GrayBackground,
    BrownBackground,
    RedBackground,
    OrangeBackground,
    YellowBackground,
    GreenBackground,
    BlueBackground,
    PurpleBackground,
    PinkBackground,
    /// Any other colour name, as sent by the API.
    Other(String),
}

const BACKGROUND_SUFFIX: &str = "_background";

impl Color {
    fn known(name: &str) -> Option<Self> {
        let color = match name {
            "default" => Color::Default,
            "gray" => Color::Gray,
            "brown" => Color::Brown,
            "red" => Color::Red,
            "orange" => Color::Orange,
            "yellow" => Color::Yellow,
            "green" => Color::Green,
            "blue" => Color::Blue,
            "purple" => Color::Purple,
            "pink" => Color::Pink,
            "gray_background" => Color::GrayBackground,
            "brown_background" => Color::BrownBackground,
            "red_background" => Color::RedBackground,
            "orange_background" => Color::OrangeBackground,
            "yellow_background" => Color::YellowBackground,
            "green_background" => Color::GreenBackground,
            "blue_background" => Color::BlueBackground,
            "purple_background" => Color::PurpleBackground,
            "pink_background" => Color::PinkBackground,
            _ => return None,
        };
        Some(color)
    }

    /// Notion's wire name for the colour.
    pub fn as_str(&self) -> &str {
        match self {
            Color::Default => "default",
            Color::Gray => "gray",
            Color::Brown => "brown",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Purple => "purple",
            Color::Pink => "pink",
            Color::GrayBackground => "gray_background",
            Color::BrownBackground => "brown_background",
            Color::RedBackground => "red_background",
            Color::OrangeBackground => "orange_background",
            Color::YellowBackground => "yellow_background",
            Color::GreenBackground => "green_background",
            Color::BlueBackground => "blue_background",
            Color::PurpleBackground => "purple_background",
            Color::PinkBackground => "pink_background",
            Color::Other(name) => name,
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Color::Default
    }

    pub fn is_background(&self) -> bool {
        self.as_str().ends_with(BACKGROUND_SUFFIX)
    }

    /// The colour name without the `_background` suffix, usable as a CSS value.
    pub fn css_value(&self) -> &str {
        let name = self.as_str();
        name.strip_suffix(BACKGROUND_SUFFIX).unwrap_or(name)
    }
}

/// Strict parsing for user input: the name must be lowercase ASCII letters
/// and underscores.
impl std::str::FromStr for Color {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_lowercase() || c == '_') {
            return Err(ValidationError::InvalidColor(s.to_string()));
        }
        Ok(Color::from(s.to_string()))
    }
}

impl From<String> for Color {
    fn from(name: String) -> Self {
        Color::known(&name).unwrap_or_else(|| {
            log::debug!("Keeping unrecognized colour '{}'", name);
            Color::Other(name)
        })
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        match color {
            Color::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
