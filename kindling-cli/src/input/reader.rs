//! Streaming adapter from a line source to decoded clippings

use kindling_core::{DecodeError, DecodedMetadata, LineTokenizer, MetadataDecoder, RawClipping};
use serde::Serialize;
use std::fmt;
use std::io::{self, BufRead};

/// One fully decoded clipping ready for output
#[derive(Debug, Clone, Serialize)]
pub struct ImportCandidate {
    /// Book title with any trailing author parenthetical removed
    pub book: String,
    /// Author name, when the title line carried one
    pub author: Option<String>,
    #[serde(flatten)]
    pub metadata: DecodedMetadata,
    /// Content body with surrounding blank lines trimmed
    pub text: String,
}

/// Errors surfaced while reading a clippings stream
#[derive(Debug)]
pub enum ReadError {
    /// The underlying reader failed
    Io(io::Error),
    /// One record carried an undecodable metadata line; the stream continues
    Record {
        title: String,
        source: DecodeError,
    },
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Io(err) => write!(f, "read error: {err}"),
            ReadError::Record { title, source } => {
                write!(f, "undecodable clipping from {title:?}: {source}")
            }
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::Io(err) => Some(err),
            ReadError::Record { source, .. } => Some(source),
        }
    }
}

/// Iterator over the clippings in a `My Clippings.txt` stream
///
/// Each item is either a decoded clipping or a per-record error. A record
/// error does not end the stream; callers can skip it and keep iterating.
pub struct ClippingReader<R: BufRead> {
    lines: io::Lines<R>,
    tokenizer: LineTokenizer,
    decoder: MetadataDecoder,
    first_line: bool,
}

impl<R: BufRead> ClippingReader<R> {
    pub fn new(reader: R) -> Self {
        ClippingReader {
            lines: reader.lines(),
            tokenizer: LineTokenizer::new(),
            decoder: MetadataDecoder::new(),
            first_line: true,
        }
    }

    fn candidate(&self, record: RawClipping) -> Result<ImportCandidate, ReadError> {
        match self.decoder.decode(&record.metadata) {
            Ok(metadata) => {
                let (book, author) = split_title(&record.title);
                Ok(ImportCandidate {
                    book,
                    author,
                    metadata,
                    text: join_content(&record.content),
                })
            }
            Err(source) => Err(ReadError::Record {
                title: record.title,
                source,
            }),
        }
    }
}

impl<R: BufRead> Iterator for ClippingReader<R> {
    type Item = Result<ImportCandidate, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(err)) => return Some(Err(ReadError::Io(err))),
                None => return None,
            };
            if self.first_line {
                // Device exports start with a UTF-8 byte order mark.
                if let Some(stripped) = line.strip_prefix('\u{feff}') {
                    line = stripped.to_string();
                }
                self.first_line = false;
            }
            self.tokenizer.push_line(&line);
            if let Some(record) = self.tokenizer.take_record() {
                return Some(self.candidate(record));
            }
        }
    }
}

/// Split `"Title (Author)"` into title and author.
///
/// Only a parenthetical at the very end of the line counts; titles
/// containing parentheses elsewhere are left intact.
fn split_title(title: &str) -> (String, Option<String>) {
    if let Some(open) = title.rfind(" (") {
        if let Some(inner) = title[open + 2..].strip_suffix(')') {
            if !inner.is_empty() {
                return (title[..open].trim_end().to_string(), Some(inner.to_string()));
            }
        }
    }
    (title.to_string(), None)
}

fn join_content(lines: &[String]) -> String {
    let start = lines.iter().position(|l| !l.is_empty());
    let end = lines.iter().rposition(|l| !l.is_empty());
    match (start, end) {
        (Some(start), Some(end)) => lines[start..=end].join("\n"),
        _ => String::new(),
    }
}
