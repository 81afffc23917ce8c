//! Language preset loader
//!
//! Parses the embedded per-language TOML presets once and caches the
//! compiled [`PresetIndex`].

use std::sync::OnceLock;

use crate::error::ConfigError;
use crate::language::config::PresetConfig;
use crate::language::tables::PresetIndex;
use crate::language::Language;

/// Embedded preset sources, one per shipped language, in [`Language::ALL`]
/// order.
const EMBEDDED: [(Language, &str); 10] = [
    (
        Language::English,
        include_str!("../../configs/languages/english.toml"),
    ),
    (
        Language::Portuguese,
        include_str!("../../configs/languages/portuguese.toml"),
    ),
    (
        Language::Italian,
        include_str!("../../configs/languages/italian.toml"),
    ),
    (
        Language::Dutch,
        include_str!("../../configs/languages/dutch.toml"),
    ),
    (
        Language::German,
        include_str!("../../configs/languages/german.toml"),
    ),
    (
        Language::Spanish,
        include_str!("../../configs/languages/spanish.toml"),
    ),
    (
        Language::French,
        include_str!("../../configs/languages/french.toml"),
    ),
    (
        Language::Russian,
        include_str!("../../configs/languages/russian.toml"),
    ),
    (
        Language::Japanese,
        include_str!("../../configs/languages/japanese.toml"),
    ),
    (
        Language::Chinese,
        include_str!("../../configs/languages/chinese.toml"),
    ),
];

static INDEX: OnceLock<PresetIndex> = OnceLock::new();

/// The compiled preset index, built on first access.
///
/// Panics if an embedded preset fails to parse or validate. The presets are
/// compile-time data covered by tests, so a failure here is a packaging
/// defect, not a runtime condition.
pub fn preset_index() -> &'static PresetIndex {
    INDEX.get_or_init(|| match load_embedded() {
        Ok(configs) => PresetIndex::build(configs),
        Err(e) => panic!("built-in language preset is invalid: {e}"),
    })
}

/// Parse and validate every embedded preset.
pub(crate) fn load_embedded() -> Result<Vec<(Language, PresetConfig)>, ConfigError> {
    EMBEDDED
        .iter()
        .map(|(lang, source)| {
            let config = parse_preset(lang.code(), source)?;
            if Language::from_code(&config.metadata.code) != Some(*lang) {
                return Err(ConfigError::Validation {
                    language: lang.code().to_string(),
                    message: format!("metadata.code is {:?}", config.metadata.code),
                });
            }
            Ok((*lang, config))
        })
        .collect()
}

/// Parse one preset from TOML and run the invariant checks.
pub(crate) fn parse_preset(code: &str, source: &str) -> Result<PresetConfig, ConfigError> {
    let config: PresetConfig = toml::from_str(source).map_err(|e| ConfigError::Parse {
        language: code.to_string(),
        message: e.to_string(),
    })?;
    config.validate().map_err(|message| ConfigError::Validation {
        language: code.to_string(),
        message,
    })?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_embedded_presets_load() {
        let configs = load_embedded().expect("embedded presets are valid");
        assert_eq!(configs.len(), Language::ALL.len());
        for ((lang, config), expected) in configs.iter().zip(Language::ALL) {
            assert_eq!(*lang, expected);
            assert_eq!(config.metadata.code, expected.code());
        }
    }

    #[test]
    fn month_bearing_presets_have_twelve_names() {
        for (lang, config) in load_embedded().unwrap() {
            match lang {
                Language::Japanese | Language::Chinese => {
                    assert!(config.dates.months.is_empty(), "{lang} dates are numeric")
                }
                _ => assert_eq!(config.dates.months.len(), 12, "{lang}"),
            }
        }
    }

    #[test]
    fn parse_preset_rejects_bad_toml() {
        let err = parse_preset("en", "not toml at all [").unwrap_err();
        assert!(err.to_string().contains("en"));
    }

    #[test]
    fn index_is_cached() {
        let first = preset_index() as *const PresetIndex;
        let second = preset_index() as *const PresetIndex;
        assert_eq!(first, second);
    }
}
