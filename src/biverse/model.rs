use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The emotions a reader can pick from, in menu order.
pub const EMOTIONS: [&str; 29] = [
    "happiness",
    "love",
    "excitement",
    "gratitude",
    "pride",
    "serenity",
    "amusement",
    "joy",
    "hope",
    "contentment",
    "sadness",
    "anger",
    "fear",
    "disgust",
    "jealousy",
    "guilt",
    "shame",
    "frustration",
    "despair",
    "anxiety",
    "confusion",
    "surprise",
    "empathy",
    "awe",
    "relief",
    "nostalgia",
    "regret",
    "envy",
    "compassion",
];

/// Menu label for an emotion: "hope" becomes "Hope".
pub fn emotion_label(emotion: &str) -> String {
    let mut chars = emotion.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Normal form used for every comparison against user input.
pub(crate) fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// A single verse record.
///
/// Two verses are the same favorite when both `reference` and `text` match exactly;
/// `emotion` is only a category label and plays no part in identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Verse {
    #[serde(rename = "Emotion", default)]
    pub emotion: String,
    #[serde(rename = "Reference")]
    pub reference: String,
    #[serde(rename = "Verse")]
    pub text: String,
}

impl Verse {
    pub fn new(
        emotion: impl Into<String>,
        reference: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            emotion: emotion.into(),
            reference: reference.into(),
            text: text.into(),
        }
    }

    pub fn same_identity(&self, other: &Verse) -> bool {
        self.reference == other.reference && self.text == other.text
    }

    pub fn has_emotion(&self, emotion: &str) -> bool {
        normalize(&self.emotion) == normalize(emotion)
    }
}

/// Display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_capitalize_first_letter() {
        assert_eq!(emotion_label("hope"), "Hope");
        assert_eq!(emotion_label("awe"), "Awe");
        assert_eq!(emotion_label(""), "");
    }

    #[test]
    fn identity_ignores_emotion() {
        let a = Verse::new("Hope", "Isaiah 40:31", "They shall mount up");
        let b = Verse::new("Joy", "Isaiah 40:31", "They shall mount up");
        let c = Verse::new("Hope", "Isaiah 40:31", "they shall mount up");
        assert!(a.same_identity(&b));
        assert!(!a.same_identity(&c));
    }

    #[test]
    fn emotion_match_is_trimmed_and_case_insensitive() {
        let v = Verse::new("  Hope ", "Ref", "Text");
        assert!(v.has_emotion("hope"));
        assert!(v.has_emotion(" HOPE"));
        assert!(!v.has_emotion("joy"));
    }

    #[test]
    fn verse_uses_source_field_names() {
        let v = Verse::new("Hope", "Jeremiah 29:11", "For I know the plans");
        let json = serde_json::to_string(&v).unwrap();
        assert!(json.contains("\"Emotion\":\"Hope\""));
        assert!(json.contains("\"Reference\":\"Jeremiah 29:11\""));
        assert!(json.contains("\"Verse\":\"For I know the plans\""));
    }

    #[test]
    fn verse_without_emotion_deserializes() {
        let v: Verse = serde_json::from_str(r#"{"Reference":"Ps 23:1","Verse":"The LORD"}"#)
            .unwrap();
        assert_eq!(v.emotion, "");
        assert_eq!(v.reference, "Ps 23:1");
    }

    #[test]
    fn theme_parses_and_toggles() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(" Light ".parse::<Theme>(), Ok(Theme::Light));
        assert!("sepia".parse::<Theme>().is_err());
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().to_string(), "light");
    }
}
