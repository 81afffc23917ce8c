//! Language presets for device clipping exports
//!
//! This module provides a data-driven system for the per-language markers,
//! delimiters, month names and date layouts that device exports use. Presets
//! are TOML documents embedded in the crate, validated on load, and compiled
//! into read-only lookup tables.

pub(crate) mod config;
pub(crate) mod loader;
pub mod tables;

pub use config::DatePart;
pub use loader::preset_index;

use std::fmt;

/// Languages with a shipped clipping preset.
///
/// The declaration order is significant: it is the stable ordering used when
/// an ambiguous decode has to pick one remaining candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Language {
    English,
    Portuguese,
    Italian,
    Dutch,
    German,
    Spanish,
    French,
    Russian,
    Japanese,
    Chinese,
}

impl Language {
    /// All shipped languages, in stable order.
    pub const ALL: [Language; 10] = [
        Language::English,
        Language::Portuguese,
        Language::Italian,
        Language::Dutch,
        Language::German,
        Language::Spanish,
        Language::French,
        Language::Russian,
        Language::Japanese,
        Language::Chinese,
    ];

    /// Create a Language from a language code
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "en" | "english" => Some(Language::English),
            "pt" | "portuguese" => Some(Language::Portuguese),
            "it" | "italian" => Some(Language::Italian),
            "nl" | "dutch" => Some(Language::Dutch),
            "de" | "german" => Some(Language::German),
            "es" | "spanish" => Some(Language::Spanish),
            "fr" | "french" => Some(Language::French),
            "ru" | "russian" => Some(Language::Russian),
            "ja" | "japanese" => Some(Language::Japanese),
            "zh" | "chinese" => Some(Language::Chinese),
            _ => None,
        }
    }

    /// Get the language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Portuguese => "pt",
            Language::Italian => "it",
            Language::Dutch => "nl",
            Language::German => "de",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::Russian => "ru",
            Language::Japanese => "ja",
            Language::Chinese => "zh",
        }
    }

    /// Get the full language name
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Portuguese => "Portuguese",
            Language::Italian => "Italian",
            Language::Dutch => "Dutch",
            Language::German => "German",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::Russian => "Russian",
            Language::Japanese => "Japanese",
            Language::Chinese => "Chinese",
        }
    }

    #[inline]
    fn bit(self) -> u16 {
        1 << (self as u8)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A set of candidate languages, narrowed stage by stage during one decode.
///
/// This is a plain `Copy` value: decoder stages take a set in and return a
/// (possibly narrower) set out, which keeps each stage independently
/// testable. Iteration follows the stable [`Language::ALL`] order.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LanguageSet(u16);

impl LanguageSet {
    /// The empty set.
    pub const EMPTY: LanguageSet = LanguageSet(0);

    /// The set of all shipped languages.
    pub fn all() -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < Language::ALL.len() {
            bits |= Language::ALL[i].bit();
            i += 1;
        }
        LanguageSet(bits)
    }

    /// A set containing exactly one language.
    pub fn single(lang: Language) -> Self {
        LanguageSet(lang.bit())
    }

    /// The set with `lang` added.
    #[inline]
    pub fn with(self, lang: Language) -> LanguageSet {
        LanguageSet(self.0 | lang.bit())
    }

    /// Whether the set contains `lang`.
    #[inline]
    pub fn contains(&self, lang: Language) -> bool {
        self.0 & lang.bit() != 0
    }

    /// Set intersection.
    #[inline]
    pub fn intersect(&self, other: LanguageSet) -> LanguageSet {
        LanguageSet(self.0 & other.0)
    }

    /// Whether the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of languages in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// The first language in stable order, if any.
    pub fn first(&self) -> Option<Language> {
        self.iter().next()
    }

    /// Iterate the languages in stable order.
    pub fn iter(&self) -> impl Iterator<Item = Language> + '_ {
        let bits = self.0;
        Language::ALL
            .into_iter()
            .filter(move |lang| bits & lang.bit() != 0)
    }
}

impl FromIterator<Language> for LanguageSet {
    fn from_iter<I: IntoIterator<Item = Language>>(iter: I) -> Self {
        let mut set = LanguageSet::EMPTY;
        for lang in iter {
            set.0 |= lang.bit();
        }
        set
    }
}

impl fmt::Debug for LanguageSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|l| l.code())).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
            assert_eq!(Language::from_code(lang.name()), Some(lang));
        }
        assert_eq!(Language::from_code("xx"), None);
    }

    #[test]
    fn all_set_contains_every_language() {
        let all = LanguageSet::all();
        assert_eq!(all.len(), Language::ALL.len());
        for lang in Language::ALL {
            assert!(all.contains(lang));
        }
    }

    #[test]
    fn intersection_narrows() {
        let a: LanguageSet = [Language::English, Language::Dutch].into_iter().collect();
        let b: LanguageSet = [Language::Dutch, Language::German].into_iter().collect();
        let narrowed = a.intersect(b);
        assert_eq!(narrowed.len(), 1);
        assert!(narrowed.contains(Language::Dutch));
        assert!(a.intersect(LanguageSet::EMPTY).is_empty());
    }

    #[test]
    fn first_follows_stable_order() {
        let set: LanguageSet = [Language::Chinese, Language::Portuguese, Language::French]
            .into_iter()
            .collect();
        assert_eq!(set.first(), Some(Language::Portuguese));
        assert_eq!(LanguageSet::EMPTY.first(), None);
    }

    #[test]
    fn iteration_is_stable() {
        let set: LanguageSet = [Language::Japanese, Language::English].into_iter().collect();
        let order: Vec<Language> = set.iter().collect();
        assert_eq!(order, vec![Language::English, Language::Japanese]);
    }
}
