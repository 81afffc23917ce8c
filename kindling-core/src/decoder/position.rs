//! Stage B: page and location range extraction
//!
//! Normalizes the part of the metadata line before the date phrase into a
//! digits-and-separators string driven by the candidate languages'
//! delimiters, then reads one or two range segments out of it. This stage
//! never fails; dimensions that cannot be read stay at the sentinel.

use crate::language::tables::PresetIndex;
use crate::language::LanguageSet;
use crate::types::PositionRange;

/// Internal separator marking a range pair ("184-185" -> "184_185").
const RANGE_SEP: char = '_';
/// Internal separator marking a segment boundary (page vs. location).
const SEGMENT_SEP: char = ';';

/// Decode the page and location ranges from the positions part of a line.
///
/// `lower_line` is the full lowercased metadata line; the sole-segment
/// disambiguation searches it for a location marker. Returns the page range,
/// the location range and the (possibly narrowed) candidate set.
pub(super) fn decode(
    index: &PresetIndex,
    positions_part: &str,
    lower_line: &str,
    candidates: LanguageSet,
) -> (PositionRange, PositionRange, LanguageSet) {
    let segments = segments(index, positions_part, candidates);
    match segments.as_slice() {
        [] => (PositionRange::ABSENT, PositionRange::ABSENT, candidates),
        [only] => disambiguate(index, *only, lower_line, candidates),
        [page, location, ..] => (*page, *location, candidates),
    }
}

/// Normalize and split the positions part into parsed range segments.
fn segments(
    index: &PresetIndex,
    positions_part: &str,
    candidates: LanguageSet,
) -> Vec<PositionRange> {
    // Drop the leading punctuation marker so it cannot be mistaken for a
    // range delimiter, then strip spaces so delimiters like "t/m" collapse
    // against their numbers.
    let body = match positions_part.chars().next() {
        Some(c) => &positions_part[c.len_utf8()..],
        None => positions_part,
    };
    let mut normalized: String = body.chars().filter(|c| !c.is_whitespace()).collect();

    for lang in candidates.iter() {
        let preset = index.preset(lang);
        normalized = normalized.replace(&preset.range_delimiter, "_");
        normalized = normalized.replace(&preset.page_location_delimiter, ";");
    }

    let digits: String = normalized
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == RANGE_SEP || *c == SEGMENT_SEP)
        .collect();

    digits.split(SEGMENT_SEP).filter_map(parse_segment).collect()
}

/// Parse one segment into a range; a lone integer means start = end.
fn parse_segment(segment: &str) -> Option<PositionRange> {
    let mut parts = segment.split(RANGE_SEP).filter(|p| !p.is_empty());
    let start: i32 = parts.next()?.parse().ok()?;
    match parts.next() {
        Some(end) => Some(PositionRange::new(start, end.parse().ok()?)),
        None => Some(PositionRange::single(start)),
    }
}

/// A sole segment is ambiguous between a page and a location range.
///
/// It is a location exactly when a candidate language's location marker
/// appears in the original line; that match also narrows the candidate set.
/// This is a literal substring search and is known to be sensitive to marker
/// spellings that occur inside unrelated words.
fn disambiguate(
    index: &PresetIndex,
    segment: PositionRange,
    lower_line: &str,
    candidates: LanguageSet,
) -> (PositionRange, PositionRange, LanguageSet) {
    for (marker, languages) in index.location_markers() {
        let narrowed = languages.intersect(candidates);
        if !narrowed.is_empty() && lower_line.contains(marker.as_str()) {
            return (PositionRange::ABSENT, segment, narrowed);
        }
    }
    (segment, PositionRange::ABSENT, candidates)
}
