//! Language and internationalization types

use serde::{Deserialize, Serialize};

/// Language used to localize error messages.
///
/// English is the primary language: every lookup that cannot be satisfied in
/// the requested language falls back to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "pt")]
    Portuguese,
}

impl Default for Language {
    fn default() -> Self {
        Language::PRIMARY
    }
}

impl Language {
    /// Language used when nothing else matches
    pub const PRIMARY: Language = Language::English;

    /// All supported languages, primary first
    pub const ALL: [Language; 2] = [Language::English, Language::Portuguese];

    /// Resolve a single language tag such as `pt-BR` or `en`.
    ///
    /// Unknown tags resolve to the primary language.
    pub fn from_tag(tag: &str) -> Self {
        Self::recognize(tag).unwrap_or(Language::PRIMARY)
    }

    fn recognize(tag: &str) -> Option<Self> {
        let primary_subtag = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_lowercase();

        match primary_subtag.as_str() {
            "en" => Some(Language::English),
            "pt" => Some(Language::Portuguese),
            _ => None,
        }
    }

    /// Pick a language from an `Accept-Language` header value.
    ///
    /// Entries are weighted by their `q=` parameter; the highest weighted
    /// supported language wins and ties keep the earlier entry.
    /// Example: "pt-BR,pt;q=0.9,en-US;q=0.8,en;q=0.7"
    pub fn from_accept_language(header: &str) -> Self {
        let mut preferred = None;
        let mut max_quality = 0.0_f32;

        for entry in header.split(',') {
            let mut parts = entry.trim().split(';');
            let tag = parts.next().unwrap_or_default();
            let quality = parts
                .find_map(|param| param.trim().strip_prefix("q="))
                .and_then(|q| q.trim().parse::<f32>().ok())
                .unwrap_or(1.0);

            if let Some(language) = Self::recognize(tag) {
                if quality > max_quality {
                    preferred = Some(language);
                    max_quality = quality;
                }
            }
        }

        preferred.unwrap_or(Language::PRIMARY)
    }

    /// Get language code (ISO 639-1)
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Portuguese => "pt",
        }
    }

    /// Get locale code
    pub fn locale(&self) -> &'static str {
        match self {
            Language::English => "en-US",
            Language::Portuguese => "pt-BR",
        }
    }

    /// Whether this is the primary language
    pub fn is_primary(&self) -> bool {
        *self == Language::PRIMARY
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "eng" | "english" | "en-us" => Ok(Language::English),
            "pt" | "por" | "portuguese" | "português" | "pt-br" => Ok(Language::Portuguese),
            _ => Err(format!("Unsupported language: {}", s)),
        }
    }
}
