use fuzzytime::{Sink, Source, SourceData};
use std::io::Write;

struct Row {
    timestamp: String,
    text: String,
}

/// Renders each watched timestamp as a line of output.
///
/// Targets are addressed by their position on the command line. A line is
/// written only when a target's phrase changes, so a quiet terminal means
/// nothing moved.
pub struct TerminalHost<W> {
    rows: Vec<Row>,
    width: usize,
    out: W,
}

impl<W: Write> TerminalHost<W> {
    pub fn new(timestamps: impl IntoIterator<Item = String>, out: W) -> Self {
        let rows: Vec<Row> = timestamps
            .into_iter()
            .map(|timestamp| Row {
                timestamp,
                text: String::new(),
            })
            .collect();
        let width = rows.iter().map(|r| r.timestamp.len()).max().unwrap_or(0);
        Self { rows, width, out }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.out
    }
}

impl<W> Source<usize> for TerminalHost<W> {
    fn read(&self, target: &usize) -> Option<SourceData> {
        self.rows.get(*target).map(|row| SourceData {
            timestamp: Some(row.timestamp.clone()),
            text: None,
        })
    }
}

impl<W: Write> Sink<usize> for TerminalHost<W> {
    fn set_text(&mut self, target: &usize, text: &str) {
        let Some(row) = self.rows.get_mut(*target) else {
            return;
        };
        if row.text == text {
            return;
        }
        row.text.clear();
        row.text.push_str(text);

        let width = self.width;
        if let Err(e) = writeln!(self.out, "{:<width$}  {text}", row.timestamp)
            .and_then(|()| self.out.flush())
        {
            tracing::warn!(error = %e, "failed to write output");
        }
    }

    fn threshold_crossed(&mut self, target: &usize, threshold: f64) {
        if let Some(row) = self.rows.get(*target) {
            tracing::info!(timestamp = %row.timestamp, threshold, "threshold crossed");
        }
    }
}
