//! Core data types shared by the tokenizer and the decoder

use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

/// Kind of clipping recorded by the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClippingType {
    /// A highlighted passage
    Highlight,
    /// A typed note
    Note,
    /// A bare bookmark
    Bookmark,
}

impl fmt::Display for ClippingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClippingType::Highlight => "highlight",
            ClippingType::Note => "note",
            ClippingType::Bookmark => "bookmark",
        };
        write!(f, "{name}")
    }
}

/// A page or location range, with `(-1, -1)` meaning "absent from the line"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PositionRange {
    pub start: i32,
    pub end: i32,
}

impl PositionRange {
    /// The sentinel for a dimension the metadata line did not carry.
    pub const ABSENT: PositionRange = PositionRange { start: -1, end: -1 };

    /// A range covering a single value.
    pub fn single(value: i32) -> Self {
        PositionRange {
            start: value,
            end: value,
        }
    }

    /// A range with distinct start and end.
    pub fn new(start: i32, end: i32) -> Self {
        PositionRange { start, end }
    }

    /// Whether this dimension was absent from the source line.
    pub fn is_absent(&self) -> bool {
        *self == Self::ABSENT
    }
}

impl fmt::Display for PositionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// One raw entry produced by the tokenizer, not yet decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawClipping {
    /// The title line, conventionally `"<Book Title> (<Author>)"`
    pub title: String,
    /// The raw metadata line
    pub metadata: String,
    /// Content body lines, blank lines preserved
    pub content: Vec<String>,
}

impl RawClipping {
    pub(crate) fn new(title: String) -> Self {
        RawClipping {
            title,
            metadata: String::new(),
            content: Vec::new(),
        }
    }
}

/// The decoded fields of one metadata line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DecodedMetadata {
    /// Clipping kind
    pub kind: ClippingType,
    /// Page range, `(-1, -1)` if the line carried no page
    pub page: PositionRange,
    /// Location range, `(-1, -1)` if the line carried no location
    pub location: PositionRange,
    /// Timestamp, 1970-01-01T00:00:00 when the date phrase is undecodable
    pub added: NaiveDateTime,
}

impl DecodedMetadata {
    /// The timestamp used when no date can be recovered.
    pub fn epoch() -> NaiveDateTime {
        chrono::DateTime::UNIX_EPOCH.naive_utc()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_range_is_sentinel() {
        assert!(PositionRange::ABSENT.is_absent());
        assert!(!PositionRange::single(2).is_absent());
        assert_eq!(PositionRange::single(2), PositionRange::new(2, 2));
    }

    #[test]
    fn range_display() {
        assert_eq!(PositionRange::single(7).to_string(), "7");
        assert_eq!(PositionRange::new(1, 10).to_string(), "1-10");
    }

    #[test]
    fn epoch_is_1970() {
        assert_eq!(
            DecodedMetadata::epoch().to_string(),
            "1970-01-01 00:00:00"
        );
    }

    #[test]
    fn clipping_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ClippingType::Highlight).unwrap(),
            "\"highlight\""
        );
    }
}
