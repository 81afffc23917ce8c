//! Line tokenizer for device clipping exports
//!
//! Splits the raw export stream into discrete entries. Each entry is a title
//! line, a metadata line, and a content body, closed by the fixed separator
//! line. The tokenizer is an explicit three-state machine driven one line at
//! a time; the caller feeds a line, then polls for a finished record, so
//! memory stays O(1) in the number of already-yielded records.

use std::collections::VecDeque;

use crate::types::RawClipping;

/// The line that closes every entry in a device export.
pub const SEPARATOR: &str = "==========";

/// Tokenizer state. The cycle is fixed: Title -> Metadata -> Content -> Title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Title,
    Metadata,
    Content,
}

/// Streaming tokenizer over the lines of one export file.
///
/// Not synchronized: one tokenizer serves one sequential stream. Separate
/// streams get separate instances; there is no shared state between them.
#[derive(Debug)]
pub struct LineTokenizer {
    state: State,
    current: Option<RawClipping>,
    finished: VecDeque<RawClipping>,
}

impl LineTokenizer {
    /// Create a tokenizer awaiting the first title line.
    pub fn new() -> Self {
        LineTokenizer {
            state: State::Title,
            current: None,
            finished: VecDeque::new(),
        }
    }

    /// Feed one line, already stripped of its trailing newline.
    ///
    /// Leading and trailing whitespace is trimmed here. Malformed streams
    /// never error: stray lines are absorbed into whichever record is in
    /// progress.
    pub fn push_line(&mut self, line: &str) {
        let line = line.trim();
        match self.state {
            State::Title => {
                // Blank lines between entries are ignored.
                if !line.is_empty() {
                    self.current = Some(RawClipping::new(line.to_string()));
                    self.state = State::Metadata;
                }
            }
            State::Metadata => {
                if let (Some(record), false) = (self.current.as_mut(), line.is_empty()) {
                    record.metadata = line.to_string();
                    self.state = State::Content;
                }
            }
            State::Content => {
                if line == SEPARATOR {
                    if let Some(record) = self.current.take() {
                        self.finished.push_back(record);
                    }
                    self.state = State::Title;
                } else if let Some(record) = self.current.as_mut() {
                    // Blank lines are meaningful inside content.
                    record.content.push(line.to_string());
                }
            }
        }
    }

    /// Take the next finished record, if the current entry has been closed.
    ///
    /// Records come out in input order and are removed from internal storage;
    /// an entry still short of its separator line is never returned.
    pub fn take_record(&mut self) -> Option<RawClipping> {
        self.finished.pop_front()
    }
}

impl Default for LineTokenizer {
    fn default() -> Self {
        Self::new()
    }
}
