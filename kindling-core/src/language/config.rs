//! Configuration structures and validation
//!
//! This module defines the TOML schema for one language preset.

use serde::{Deserialize, Serialize};

/// Root preset configuration for one language
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetConfig {
    pub metadata: Metadata,
    pub markers: Markers,
    pub delimiters: Delimiters,
    pub dates: Dates,
}

/// Language metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Marker strings as they appear on a metadata line (lowercase)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Markers {
    pub highlight: String,
    pub note: String,
    pub bookmark: String,
    pub page: String,
    pub location: String,
}

/// Delimiter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Delimiters {
    /// Separates the start and end of a page or location range ("-", "t/m", ...)
    pub range: String,
    /// Separates the page segment from the location segment
    pub page_location: String,
}

/// Date phrase configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dates {
    /// Twelve month names in order, or empty for purely numeric dates
    #[serde(default)]
    pub months: Vec<String>,
    /// Optional (AM, PM) marker pair
    #[serde(default)]
    pub twelve_hour: Vec<String>,
    /// Accepted date layouts, each an ordered list of date-part tags
    pub formats: Vec<Vec<DatePart>>,
}

/// Semantic role of one positional token in a date layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DatePart {
    /// Four-digit year
    Year,
    /// 1-based numeric month
    Month,
    /// 0-based numeric month, normalized with +1
    MonthIso,
    /// Day of month
    Day,
    /// An "HH:MM:SS"-shaped token
    Time,
    /// AM/PM-equivalent token
    TwelveHourMark,
    /// Placeholder, ignored
    Skip,
}

impl PresetConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        for (field, value) in [
            ("markers.highlight", &self.markers.highlight),
            ("markers.note", &self.markers.note),
            ("markers.bookmark", &self.markers.bookmark),
            ("markers.page", &self.markers.page),
            ("markers.location", &self.markers.location),
            ("delimiters.range", &self.delimiters.range),
            ("delimiters.page_location", &self.delimiters.page_location),
        ] {
            if value.is_empty() {
                return Err(format!("{field} must not be empty"));
            }
        }

        if !self.dates.months.is_empty() && self.dates.months.len() != 12 {
            return Err(format!(
                "dates.months must list exactly 12 names, got {}",
                self.dates.months.len()
            ));
        }

        if !self.dates.twelve_hour.is_empty() && self.dates.twelve_hour.len() != 2 {
            return Err("dates.twelve_hour must be an (AM, PM) pair".to_string());
        }

        if self.dates.formats.is_empty() {
            return Err("dates.formats must list at least one layout".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_config() -> PresetConfig {
        toml::from_str(
            r#"
            [metadata]
            code = "en"
            name = "English"

            [markers]
            highlight = "your highlight"
            note = "your note"
            bookmark = "your bookmark"
            page = "page"
            location = "location"

            [delimiters]
            range = "-"
            page_location = "|"

            [dates]
            months = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l"]
            twelve_hour = ["am", "pm"]
            formats = [["day", "year", "time", "twelve-hour-mark"]]
            "#,
        )
        .expect("valid test config")
    }

    #[test]
    fn valid_config_passes() {
        assert!(minimal_config().validate().is_ok());
    }

    #[test]
    fn wrong_month_count_fails() {
        let mut config = minimal_config();
        config.dates.months.pop();
        let err = config.validate().unwrap_err();
        assert!(err.contains("12 names"));
    }

    #[test]
    fn empty_months_allowed_for_numeric_dates() {
        let mut config = minimal_config();
        config.dates.months.clear();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_marker_fails() {
        let mut config = minimal_config();
        config.markers.bookmark.clear();
        let err = config.validate().unwrap_err();
        assert!(err.contains("markers.bookmark"));
    }

    #[test]
    fn incomplete_twelve_hour_pair_fails() {
        let mut config = minimal_config();
        config.dates.twelve_hour.truncate(1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_formats_fail() {
        let mut config = minimal_config();
        config.dates.formats.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn date_part_kebab_case_names() {
        let parts: Vec<DatePart> =
            serde_json::from_str(r#"["year", "month-iso", "twelve-hour-mark", "skip"]"#).unwrap();
        assert_eq!(
            parts,
            vec![
                DatePart::Year,
                DatePart::MonthIso,
                DatePart::TwelveHourMark,
                DatePart::Skip
            ]
        );
    }
}
