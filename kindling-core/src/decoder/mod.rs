//! Metadata line decoder
//!
//! Turns one raw metadata line into a [`DecodedMetadata`] without being told
//! which language the line is written in. Three stages run in order
//! (clipping type, page/location ranges, timestamp), each taking the current
//! candidate language set and returning a narrowed one, so later stages only
//! consider markers of languages still consistent with what was seen.
//!
//! Only the first stage can fail; the others degrade to sentinel values so a
//! partially-unparseable line still imports.

mod date;
mod position;

use crate::error::{DecodeError, Result};
use crate::language::tables::PresetIndex;
use crate::language::{preset_index, LanguageSet};
use crate::types::{ClippingType, DecodedMetadata};

/// Decoder over the shipped language presets.
#[derive(Debug, Clone, Copy)]
pub struct MetadataDecoder {
    index: &'static PresetIndex,
}

impl MetadataDecoder {
    /// Create a decoder backed by the built-in preset index.
    pub fn new() -> Self {
        MetadataDecoder {
            index: preset_index(),
        }
    }

    /// Decode one metadata line.
    ///
    /// Fails only when no clipping-type marker of any language matches; an
    /// unreadable page, location or date resolves to its sentinel instead.
    pub fn decode(&self, line: &str) -> Result<DecodedMetadata> {
        let lower = line.to_lowercase();
        let candidates = LanguageSet::all();

        let (kind, candidates) = self.clipping_type(&lower, candidates)?;

        let (positions_part, date_part) = split_at_date(&lower);
        let (page, location, candidates) =
            position::decode(self.index, positions_part, &lower, candidates);
        let (added, _candidates) = date::decode(self.index, date_part, candidates);

        Ok(DecodedMetadata {
            kind,
            page,
            location,
            added,
        })
    }

    /// Stage A: determine the clipping type.
    ///
    /// Categories are scanned in fixed priority order. A marker matches when
    /// it is a substring of the lowercased line and its languages intersect
    /// the candidate set; the first match narrows the set and decides.
    fn clipping_type(
        &self,
        lower: &str,
        candidates: LanguageSet,
    ) -> Result<(ClippingType, LanguageSet)> {
        let categories = [
            (ClippingType::Highlight, self.index.highlight_markers()),
            (ClippingType::Note, self.index.note_markers()),
            (ClippingType::Bookmark, self.index.bookmark_markers()),
        ];
        for (kind, markers) in categories {
            for (marker, languages) in markers {
                let narrowed = languages.intersect(candidates);
                if !narrowed.is_empty() && lower.contains(marker.as_str()) {
                    return Ok((kind, narrowed));
                }
            }
        }
        Err(DecodeError::UnknownClippingType {
            line: lower.to_string(),
        })
    }
}

impl Default for MetadataDecoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a metadata line at its trailing date phrase.
///
/// Every shipped format places the date after the line's last `|`, including
/// Chinese, whose configured page/location delimiter is the fullwidth `（`.
/// Lines with no `|` at all get an empty date part and decode to the epoch.
fn split_at_date(lower: &str) -> (&str, &str) {
    match lower.rfind('|') {
        Some(i) => (&lower[..i], &lower[i + 1..]),
        None => (lower, ""),
    }
}
