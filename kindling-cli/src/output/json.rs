//! JSON output formatter

use super::OutputFormatter;
use crate::input::ImportCandidate;
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs clippings as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    clippings: Vec<ImportCandidate>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            clippings: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn write_clipping(&mut self, clipping: &ImportCandidate) -> Result<()> {
        self.clippings.push(clipping.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.clippings)?;
        writeln!(self.writer)?;
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
    fn emits_an_array_with_flattened_metadata() {
        let input = "Walden (Henry David Thoreau)\n\
- Your Highlight on page 3 | location 184-185 | Added on Sunday, April 28, 2019 11:22:02 AM\n\
\n\
The mass of men lead lives of quiet desperation.\n\
==========\n";
        let mut out = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut out);
            for item in ClippingReader::new(Cursor::new(input.to_string())) {
                formatter.write_clipping(&item.unwrap()).unwrap();
            }
            formatter.finish().unwrap();
        }
        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let array = parsed.as_array().unwrap();
        assert_eq!(array.len(), 1);
        assert_eq!(array[0]["book"], "Walden");
        assert_eq!(array[0]["author"], "Henry David Thoreau");
        assert_eq!(array[0]["kind"], "highlight");
        assert_eq!(array[0]["location"]["start"], 184);
    }

    #[test]
    fn empty_stream_is_an_empty_array() {
        let mut out = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut out);
            formatter.finish().unwrap();
        }
        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, serde_json::json!([]));
    }
}
