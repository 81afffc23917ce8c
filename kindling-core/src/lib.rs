//! Language-aware parser for e-reader clipping exports
//!
//! An e-reader writes every highlight, note and bookmark to one plain-text
//! export file, in whichever of ten languages the device is set to. This
//! crate turns that loosely-structured text into structured records:
//!
//! - **Tokenizer**: a three-state machine that splits the line stream into
//!   raw entries (title / metadata line / content body) at the fixed
//!   separator line.
//! - **Decoder**: a heuristic, multi-language decoder that reads the
//!   clipping type, page range, location range and timestamp out of one
//!   metadata line, narrowing a candidate set of languages stage by stage.
//!
//! Parsing is deliberately forgiving: only an unrecognizable clipping type
//! fails a record; unreadable ranges and dates degrade to sentinels so a
//! corrupted field never loses the whole clipping.
//!
//! # Example
//!
//! ```rust
//! use kindling_core::{ClippingType, LineTokenizer, MetadataDecoder, SEPARATOR};
//!
//! let mut tokenizer = LineTokenizer::new();
//! let decoder = MetadataDecoder::new();
//!
//! let lines = [
//!     "Walden (Henry David Thoreau)",
//!     "- Your Highlight on page 3 | location 184-185 | Added on Sunday, April 28, 2019 11:22:02 AM",
//!     "",
//!     "The mass of men lead lives of quiet desperation.",
//!     SEPARATOR,
//! ];
//! let mut clippings = Vec::new();
//! for line in lines {
//!     tokenizer.push_line(line);
//!     if let Some(record) = tokenizer.take_record() {
//!         clippings.push((record.title.clone(), decoder.decode(&record.metadata).unwrap()));
//!     }
//! }
//!
//! let (title, decoded) = &clippings[0];
//! assert_eq!(title, "Walden (Henry David Thoreau)");
//! assert_eq!(decoded.kind, ClippingType::Highlight);
//! assert_eq!(decoded.page.start, 3);
//! assert_eq!(decoded.location.end, 185);
//! ```

pub mod decoder;
pub mod error;
pub mod language;
pub mod tokenizer;
pub mod types;

pub use decoder::MetadataDecoder;
pub use error::{ConfigError, DecodeError, Result};
pub use language::{preset_index, DatePart, Language, LanguageSet};
pub use tokenizer::{LineTokenizer, SEPARATOR};
pub use types::{ClippingType, DecodedMetadata, PositionRange, RawClipping};
