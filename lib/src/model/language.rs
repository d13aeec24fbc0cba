use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A spoken or subtitle language as it appears in the catalog.
///
/// Collectorz stores languages as free display text ("English", "Deutsch", ...), the media center wants
/// ISO 639-2 codes, so the common ones are recognized and everything else is kept verbatim in [`Language::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Language {
    /// No language information was present
    #[default]
    Undetermined,
    English,
    German,
    French,
    Spanish,
    Italian,
    Dutch,
    Portuguese,
    Swedish,
    Danish,
    Norwegian,
    Finnish,
    Polish,
    Russian,
    Japanese,
    Chinese,
    Korean,
    /// Any language not known by name, stored as given
    Other(String),
}

impl Language {
    /// Recognize a language by its english name, native name or ISO 639-1 / 639-2 code.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    pub fn from_name(name: &str) -> Self {
        let trimmed = name.trim();
        match trimmed.to_lowercase().as_str() {
            "" | "und" => Self::Undetermined,
            "english" | "en" | "eng" => Self::English,
            "german" | "deutsch" | "de" | "ger" | "deu" => Self::German,
            "french" | "français" | "francais" | "fr" | "fre" | "fra" => Self::French,
            "spanish" | "español" | "espanol" | "es" | "spa" => Self::Spanish,
            "italian" | "italiano" | "it" | "ita" => Self::Italian,
            "dutch" | "nederlands" | "nl" | "dut" | "nld" => Self::Dutch,
            "portuguese" | "português" | "portugues" | "pt" | "por" => Self::Portuguese,
            "swedish" | "svenska" | "sv" | "swe" => Self::Swedish,
            "danish" | "dansk" | "da" | "dan" => Self::Danish,
            "norwegian" | "norsk" | "no" | "nor" => Self::Norwegian,
            "finnish" | "suomi" | "fi" | "fin" => Self::Finnish,
            "polish" | "polski" | "pl" | "pol" => Self::Polish,
            "russian" | "ru" | "rus" => Self::Russian,
            "japanese" | "ja" | "jpn" => Self::Japanese,
            "chinese" | "mandarin" | "zh" | "chi" | "zho" => Self::Chinese,
            "korean" | "ko" | "kor" => Self::Korean,
            _ => Self::Other(trimmed.to_string()),
        }
    }

    /// The english display name
    pub fn name(&self) -> &str {
        match self {
            Self::Undetermined => "",
            Self::English => "English",
            Self::German => "German",
            Self::French => "French",
            Self::Spanish => "Spanish",
            Self::Italian => "Italian",
            Self::Dutch => "Dutch",
            Self::Portuguese => "Portuguese",
            Self::Swedish => "Swedish",
            Self::Danish => "Danish",
            Self::Norwegian => "Norwegian",
            Self::Finnish => "Finnish",
            Self::Polish => "Polish",
            Self::Russian => "Russian",
            Self::Japanese => "Japanese",
            Self::Chinese => "Chinese",
            Self::Korean => "Korean",
            Self::Other(name) => name,
        }
    }

    /// The ISO 639-2/B code used in `<streamdetails>`, unknown languages fall back to their name
    pub fn code(&self) -> &str {
        match self {
            Self::Undetermined => "und",
            Self::English => "eng",
            Self::German => "ger",
            Self::French => "fre",
            Self::Spanish => "spa",
            Self::Italian => "ita",
            Self::Dutch => "dut",
            Self::Portuguese => "por",
            Self::Swedish => "swe",
            Self::Danish => "dan",
            Self::Norwegian => "nor",
            Self::Finnish => "fin",
            Self::Polish => "pol",
            Self::Russian => "rus",
            Self::Japanese => "jpn",
            Self::Chinese => "chi",
            Self::Korean => "kor",
            Self::Other(name) => name,
        }
    }

    pub fn is_undetermined(&self) -> bool {
        *self == Self::Undetermined
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<String> for Language {
    fn from(value: String) -> Self {
        Self::from_name(&value)
    }
}

impl From<&str> for Language {
    fn from(value: &str) -> Self {
        Self::from_name(value)
    }
}

impl From<Language> for String {
    fn from(value: Language) -> Self {
        value.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn should_recognize_names_and_codes() {
        assert_eq!(Language::from_name("English"), Language::English);
        assert_eq!(Language::from_name("  deutsch "), Language::German);
        assert_eq!(Language::from_name("FRE"), Language::French);
        assert_eq!(Language::from_name(""), Language::Undetermined);
    }

    #[test]
    fn should_keep_unknown_languages_verbatim() {
        let lang = Language::from_name(" Klingon ");
        assert_eq!(lang, Language::Other("Klingon".to_string()));
        assert_eq!(lang.code(), "Klingon");
        assert_eq!(lang.to_string(), "Klingon");
    }

    #[test]
    fn should_provide_iso_codes() {
        assert_eq!(Language::German.code(), "ger");
        assert_eq!(Language::English.code(), "eng");
        assert_eq!(Language::Undetermined.code(), "und");
    }
}
