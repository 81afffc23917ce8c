//! Stage C: timestamp extraction
//!
//! Reads the trailing date phrase: first month-name detection over the
//! candidate languages, then a character scan that reduces the phrase to a
//! stream of numeric, "H:M:S"-shaped and AM/PM tokens, then a positional
//! match against the candidate language's configured date layouts. Anything
//! unreadable resolves to the epoch default; this stage never fails.

use chrono::{NaiveDate, NaiveDateTime};

use crate::language::config::DatePart;
use crate::language::tables::PresetIndex;
use crate::language::{Language, LanguageSet};
use crate::types::DecodedMetadata;

/// Normalized AM token emitted by the scan.
const AM: &str = "AM";
/// Normalized PM token emitted by the scan.
const PM: &str = "PM";

/// Decode the date phrase into a timestamp.
///
/// Returns the timestamp and the candidate set as narrowed by month-name
/// detection. When several candidates survive the whole decode, the first in
/// stable order is used and the ambiguity is logged.
pub(super) fn decode(
    index: &PresetIndex,
    date_part: &str,
    candidates: LanguageSet,
) -> (NaiveDateTime, LanguageSet) {
    let (month_from_name, candidates) = detect_month(index, date_part, candidates);
    let tokens = scan_tokens(index, date_part, candidates);

    let Some(language) = candidates.first() else {
        return (DecodedMetadata::epoch(), candidates);
    };
    if candidates.len() > 1 {
        log::warn!(
            "date phrase {date_part:?} is consistent with {candidates:?}; using {language}"
        );
    }

    let timestamp = index
        .preset(language)
        .date_formats
        .iter()
        .find(|format| format.len() == tokens.len())
        .and_then(|format| interpret(format, &tokens, month_from_name))
        .unwrap_or_else(DecodedMetadata::epoch);
    (timestamp, candidates)
}

/// Look for a spelled month name among the words of the phrase.
///
/// The first hit wins and narrows the candidates to exactly the languages
/// sharing that spelling, which resolves same-name collisions like "april".
fn detect_month(
    index: &PresetIndex,
    date_part: &str,
    candidates: LanguageSet,
) -> (Option<u32>, LanguageSet) {
    for word in date_part.split_whitespace() {
        let word = word.trim_matches(|c: char| c.is_ascii_punctuation());
        if word.is_empty() {
            continue;
        }
        if let Some(entry) = index.month(word) {
            let known: Vec<(Language, u32)> = entry
                .iter()
                .filter(|(lang, _)| candidates.contains(*lang))
                .copied()
                .collect();
            if let Some((_, number)) = known.first() {
                let narrowed = known.iter().map(|(lang, _)| *lang).collect();
                return (Some(*number), narrowed);
            }
        }
    }
    (None, candidates)
}

/// Reduce the date phrase to normalized tokens.
///
/// Digits accumulate; a colon after a digit is kept to preserve the
/// "HH:MM:SS" shape; a candidate language's AM/PM marker emits a literal
/// token of its own; everything else separates tokens.
fn scan_tokens(index: &PresetIndex, date_part: &str, candidates: LanguageSet) -> Vec<String> {
    let marks: Vec<&(String, String)> = candidates
        .iter()
        .filter_map(|lang| index.preset(lang).twelve_hour.as_ref())
        .collect();

    let mut tokens = Vec::new();
    let mut buf = String::new();
    let mut rest = date_part;
    while let Some(c) = rest.chars().next() {
        if c.is_ascii_digit() {
            buf.push(c);
            rest = &rest[c.len_utf8()..];
            continue;
        }
        if c == ':' && buf.chars().last().is_some_and(|d| d.is_ascii_digit()) {
            buf.push(c);
            rest = &rest[c.len_utf8()..];
            continue;
        }
        if let Some((literal, len)) = match_mark(rest, &marks) {
            flush(&mut buf, &mut tokens);
            tokens.push(literal.to_string());
            rest = &rest[len..];
            continue;
        }
        flush(&mut buf, &mut tokens);
        rest = &rest[c.len_utf8()..];
    }
    flush(&mut buf, &mut tokens);
    tokens
}

fn flush(buf: &mut String, tokens: &mut Vec<String>) {
    if !buf.is_empty() {
        tokens.push(std::mem::take(buf));
    }
}

/// Match an AM/PM marker at the start of `rest`.
fn match_mark(rest: &str, marks: &[&(String, String)]) -> Option<(&'static str, usize)> {
    for (am, pm) in marks.iter() {
        if rest.starts_with(am.as_str()) {
            return Some((AM, am.len()));
        }
        if rest.starts_with(pm.as_str()) {
            return Some((PM, pm.len()));
        }
    }
    None
}

/// Zip a date layout against the token list and build the timestamp.
///
/// Returns `None` when a token does not fit its slot or the resulting
/// calendar date is invalid; the caller substitutes the epoch.
fn interpret(
    format: &[DatePart],
    tokens: &[String],
    month_from_name: Option<u32>,
) -> Option<NaiveDateTime> {
    let mut year: Option<i32> = None;
    let mut month = month_from_name;
    let mut day: Option<u32> = None;
    let mut hour = 0u32;
    let mut minute = 0u32;
    let mut second = 0u32;
    let mut mark: Option<&str> = None;

    for (part, token) in format.iter().zip(tokens) {
        match part {
            DatePart::Year => year = Some(token.parse().ok()?),
            DatePart::Month => month = Some(token.parse().ok()?),
            DatePart::MonthIso => month = Some(token.parse::<u32>().ok()? + 1),
            DatePart::Day => day = Some(token.parse().ok()?),
            DatePart::Time => {
                let mut parts = token.split(':');
                hour = parts.next()?.parse().ok()?;
                minute = match parts.next() {
                    Some(p) => p.parse().ok()?,
                    None => 0,
                };
                second = match parts.next() {
                    Some(p) => p.parse().ok()?,
                    None => 0,
                };
            }
            DatePart::TwelveHourMark => match token.as_str() {
                // A later mark overrides an earlier one; tolerated rather
                // than rejected.
                AM | PM => mark = Some(token.as_str()),
                _ => return None,
            },
            DatePart::Skip => {}
        }
    }

    hour = match (mark, hour) {
        (Some(AM), 12) => 0,
        (Some(PM), h) if h < 12 => h + 12,
        (_, h) => h,
    };

    NaiveDate::from_ymd_opt(year?, month?, day?)?.and_hms_opt(hour, minute, second)
}
