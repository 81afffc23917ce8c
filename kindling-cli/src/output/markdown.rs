//! Markdown output formatter

use super::OutputFormatter;
use crate::input::ImportCandidate;
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs clippings as quoted sections
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    clipping_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            clipping_count: 0,
        }
    }
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn write_clipping(&mut self, clipping: &ImportCandidate) -> Result<()> {
        self.clipping_count += 1;
        match &clipping.author {
            Some(author) => writeln!(self.writer, "## {} ({})", clipping.book, author)?,
            None => writeln!(self.writer, "## {}", clipping.book)?,
        }
        writeln!(self.writer)?;
        if !clipping.text.is_empty() {
            for line in clipping.text.lines() {
                writeln!(self.writer, "> {line}")?;
            }
            writeln!(self.writer)?;
        }
        let meta = &clipping.metadata;
        write!(self.writer, "*{}", meta.kind)?;
        if !meta.page.is_absent() {
            write!(self.writer, ", page {}", meta.page)?;
        }
        if !meta.location.is_absent() {
            write!(self.writer, ", location {}", meta.location)?;
        }
        writeln!(self.writer, ", {}*", meta.added.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total clippings: {}*", self.clipping_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ClippingReader;
    use std::io::Cursor;

    #[test]
    fn renders_quoted_sections_and_a_total() {
        let input = "Walden (Henry David Thoreau)\n\
- Your Highlight on page 3 | location 184-185 | Added on Sunday, April 28, 2019 11:22:02 AM\n\
\n\
The mass of men lead lives of quiet desperation.\n\
==========\n";
        let mut out = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut out);
            for item in ClippingReader::new(Cursor::new(input.to_string())) {
                formatter.write_clipping(&item.unwrap()).unwrap();
            }
            formatter.finish().unwrap();
        }
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.starts_with("## Walden (Henry David Thoreau)\n"));
        assert!(rendered.contains("> The mass of men lead lives of quiet desperation.\n"));
        assert!(rendered.contains("*highlight, page 3, location 184-185, 2019-04-28 11:22:02*\n"));
        assert!(rendered.ends_with("---\n*Total clippings: 1*\n"));
    }
}
