//! Machine-readable run reports.

use crate::error::Result;
use evolve_words_core::ProgressSink;
use evolve_words_data::{Outcome, ProgressEvent};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Record<'a> {
    Progress(&'a ProgressEvent),
    Finished(&'a Outcome),
}

/// Writes one JSON object per line: a `progress` record per generation and
/// a final `finished` record.
///
/// Write failures are remembered rather than raised so the simulation is
/// never interrupted by a broken pipe; check [`JsonLinesSink::finish`].
pub struct JsonLinesSink<W: Write> {
    writer: W,
    error: Option<crate::error::IoError>,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    fn write_record(&mut self, record: &Record<'_>) {
        if self.error.is_some() {
            return;
        }
        let result: Result<()> = serde_json::to_writer(&mut self.writer, record)
            .map_err(Into::into)
            .and_then(|()| writeln!(self.writer).map_err(Into::into));
        if let Err(e) = result {
            tracing::warn!("Failed to write report: {e}");
            self.error = Some(e);
        }
    }

    /// Flushes and returns the writer, or the first error seen.
    pub fn finish(mut self) -> Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> ProgressSink for JsonLinesSink<W> {
    fn progress(&mut self, event: ProgressEvent) {
        self.write_record(&Record::Progress(&event));
    }

    fn finished(&mut self, outcome: &Outcome) {
        self.write_record(&Record::Finished(outcome));
    }
}
