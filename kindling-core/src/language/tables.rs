//! Pre-indexed preset lookup tables
//!
//! The ten shipped presets are folded once into the structures the decoder
//! stages need: marker lists keyed by clipping-type category, a month-name
//! map, and per-language scalars. The fold runs at first access and the
//! result is read-only thereafter.

use std::collections::HashMap;

use smallvec::SmallVec;

use crate::language::config::{DatePart, PresetConfig};
use crate::language::{Language, LanguageSet};

/// Months that share one spelling across languages ("april" covers three).
pub type MonthEntry = SmallVec<[(Language, u32); 4]>;

/// Per-language scalars used by the decoder stages.
#[derive(Debug, Clone)]
pub struct PresetData {
    /// Separates range start from range end, e.g. "-" or "t/m".
    pub range_delimiter: String,
    /// Separates the page segment from the location segment.
    pub page_location_delimiter: String,
    /// Lowercase (AM, PM) marker pair, if the language uses one.
    pub twelve_hour: Option<(String, String)>,
    /// Accepted date layouts in priority order.
    pub date_formats: Vec<Vec<DatePart>>,
}

/// A marker list for one category: lowercase marker string plus the set of
/// languages sharing that spelling, in fixed preset order.
pub type MarkerList = Vec<(String, LanguageSet)>;

/// Read-only index over all shipped language presets.
#[derive(Debug)]
pub struct PresetIndex {
    highlight_markers: MarkerList,
    note_markers: MarkerList,
    bookmark_markers: MarkerList,
    page_markers: MarkerList,
    location_markers: MarkerList,
    months: HashMap<String, MonthEntry>,
    presets: Vec<PresetData>,
}

impl PresetIndex {
    /// Fold validated preset configurations into the index.
    ///
    /// `configs` must cover every shipped language exactly once, in
    /// [`Language::ALL`] order; the loader guarantees this.
    pub(crate) fn build(configs: Vec<(Language, PresetConfig)>) -> Self {
        let mut index = PresetIndex {
            highlight_markers: Vec::new(),
            note_markers: Vec::new(),
            bookmark_markers: Vec::new(),
            page_markers: Vec::new(),
            location_markers: Vec::new(),
            months: HashMap::new(),
            presets: Vec::with_capacity(configs.len()),
        };

        for (lang, config) in configs {
            insert_marker(&mut index.highlight_markers, &config.markers.highlight, lang);
            insert_marker(&mut index.note_markers, &config.markers.note, lang);
            insert_marker(&mut index.bookmark_markers, &config.markers.bookmark, lang);
            insert_marker(&mut index.page_markers, &config.markers.page, lang);
            insert_marker(&mut index.location_markers, &config.markers.location, lang);

            for (i, month) in config.dates.months.iter().enumerate() {
                index
                    .months
                    .entry(month.to_lowercase())
                    .or_default()
                    .push((lang, i as u32 + 1));
            }

            let twelve_hour = match config.dates.twelve_hour.as_slice() {
                [am, pm] => Some((am.to_lowercase(), pm.to_lowercase())),
                _ => None,
            };
            index.presets.push(PresetData {
                range_delimiter: config.delimiters.range.clone(),
                page_location_delimiter: config.delimiters.page_location.clone(),
                twelve_hour,
                date_formats: config.dates.formats.clone(),
            });
        }

        index
    }

    /// Marker list for highlight clippings.
    pub fn highlight_markers(&self) -> &MarkerList {
        &self.highlight_markers
    }

    /// Marker list for note clippings.
    pub fn note_markers(&self) -> &MarkerList {
        &self.note_markers
    }

    /// Marker list for bookmark clippings.
    pub fn bookmark_markers(&self) -> &MarkerList {
        &self.bookmark_markers
    }

    /// Marker list for page numbers. Kept for symmetry with the location
    /// list; page markers carry no disambiguating role of their own.
    pub fn page_markers(&self) -> &MarkerList {
        &self.page_markers
    }

    /// Marker list for location numbers.
    pub fn location_markers(&self) -> &MarkerList {
        &self.location_markers
    }

    /// Look up a lowercase month name.
    pub fn month(&self, name: &str) -> Option<&MonthEntry> {
        self.months.get(name)
    }

    /// Per-language scalars.
    pub fn preset(&self, lang: Language) -> &PresetData {
        &self.presets[lang as u8 as usize]
    }
}

/// Merge a marker into a category list, OR-ing the language in when another
/// language already uses the same spelling (Japanese and Chinese share 位置).
fn insert_marker(list: &mut MarkerList, marker: &str, lang: Language) {
    let marker = marker.to_lowercase();
    if let Some((_, set)) = list.iter_mut().find(|(m, _)| *m == marker) {
        *set = set.with(lang);
    } else {
        list.push((marker, LanguageSet::single(lang)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::preset_index;

    #[test]
    fn every_language_has_scalars() {
        let index = preset_index();
        for lang in Language::ALL {
            let preset = index.preset(lang);
            assert!(!preset.range_delimiter.is_empty(), "{lang}");
            assert!(!preset.page_location_delimiter.is_empty(), "{lang}");
            assert!(!preset.date_formats.is_empty(), "{lang}");
        }
    }

    #[test]
    fn marker_lists_cover_all_languages() {
        let index = preset_index();
        for list in [
            index.highlight_markers(),
            index.note_markers(),
            index.bookmark_markers(),
            index.page_markers(),
            index.location_markers(),
        ] {
            let covered: LanguageSet = list.iter().flat_map(|(_, set)| set.iter()).collect();
            assert_eq!(covered, LanguageSet::all());
        }
    }

    #[test]
    fn shared_month_spellings_list_every_language() {
        let index = preset_index();
        let april = index.month("april").expect("april is a known month");
        let langs: Vec<Language> = april.iter().map(|(l, _)| *l).collect();
        assert!(langs.contains(&Language::English));
        assert!(langs.contains(&Language::Dutch));
        assert!(langs.contains(&Language::German));
        assert!(april.iter().all(|(_, n)| *n == 4));
    }

    #[test]
    fn location_marker_shared_by_japanese_and_chinese() {
        let index = preset_index();
        let (_, set) = index
            .location_markers()
            .iter()
            .find(|(m, _)| m == "位置")
            .expect("CJK location marker present");
        assert!(set.contains(Language::Japanese));
        assert!(set.contains(Language::Chinese));
    }

    #[test]
    fn numeric_date_languages_have_no_months() {
        let index = preset_index();
        for name in ["1月", "一月"] {
            assert!(index.month(name).is_none(), "{name} should not be indexed");
        }
    }
}
