//! Plain text output formatter

use super::OutputFormatter;
use crate::input::ImportCandidate;
use anyhow::Result;
use std::io::{self, Write};

/// Plain text formatter - one block per clipping
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

fn meta_line(clipping: &ImportCandidate) -> String {
    let meta = &clipping.metadata;
    let mut parts = vec![meta.kind.to_string()];
    if !meta.page.is_absent() {
        parts.push(format!("page {}", meta.page));
    }
    if !meta.location.is_absent() {
        parts.push(format!("location {}", meta.location));
    }
    parts.push(meta.added.format("%Y-%m-%d %H:%M:%S").to_string());
    parts.join(" | ")
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn write_clipping(&mut self, clipping: &ImportCandidate) -> Result<()> {
        match &clipping.author {
            Some(author) => writeln!(self.writer, "{} ({})", clipping.book, author)?,
            None => writeln!(self.writer, "{}", clipping.book)?,
        }
        writeln!(self.writer, "  {}", meta_line(clipping))?;
        for line in clipping.text.lines() {
            writeln!(self.writer, "  {line}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ClippingReader;
    use std::io::Cursor;

    fn sample() -> ImportCandidate {
        let input = "Walden (Henry David Thoreau)\n\
- Your Highlight on page 3 | location 184-185 | Added on Sunday, April 28, 2019 11:22:02 AM\n\
\n\
The mass of men lead lives of quiet desperation.\n\
==========\n";
        ClippingReader::new(Cursor::new(input.to_string()))
            .next()
            .unwrap()
            .unwrap()
    }

    #[test]
    fn formats_one_block_per_clipping() {
        let mut out = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut out);
            formatter.write_clipping(&sample()).unwrap();
            formatter.finish().unwrap();
        }
        let rendered = String::from_utf8(out).unwrap();
        // Built line by line; a \-continuation would swallow the two-space
        // indentation the formatter emits.
        let expected = [
            "Walden (Henry David Thoreau)",
            "  highlight | page 3 | location 184-185 | 2019-04-28 11:22:02",
            "  The mass of men lead lives of quiet desperation.",
            "",
            "",
        ]
        .join("\n");
        assert_eq!(rendered, expected);
    }

    #[test]
    fn absent_page_is_omitted_from_the_meta_line() {
        let mut clipping = sample();
        clipping.metadata.page = kindling_core::PositionRange::ABSENT;
        assert_eq!(
            meta_line(&clipping),
            "highlight | location 184-185 | 2019-04-28 11:22:02"
        );
    }
}
