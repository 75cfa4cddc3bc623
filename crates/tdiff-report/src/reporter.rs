//! Text rendering of divergence records.

use std::fmt;
use std::io::Write;

use colored::Colorize;
use tdiff_diff::{Divergence, DivergenceSet};

use crate::error::ReportResult;
use crate::json::JsonReport;

/// Records shown when no limit is configured.
pub const DEFAULT_LIMIT: usize = 30;

/// One rendered line of a text report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReportLine {
    /// A shown divergence record.
    Divergence(String),
    /// Count of records left out by the limit.
    Omitted(usize),
    /// Count of all records, shown or not.
    Total(usize),
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportLine::Divergence(message) => f.write_str(message),
            ReportLine::Omitted(n) => write!(f, "... ({n} more)"),
            ReportLine::Total(n) => write!(f, "\nTotal: {n} differences"),
        }
    }
}

/// Renders divergence records up to a display limit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reporter {
    limit: usize,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT)
    }
}

impl Reporter {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Number of records that will be shown for `set`.
    pub fn shown(&self, set: &DivergenceSet) -> usize {
        set.len().min(self.limit)
    }

    /// Number of records that will be left out for `set`.
    pub fn omitted(&self, set: &DivergenceSet) -> usize {
        set.len().saturating_sub(self.limit)
    }

    /// Render the first `limit` records in emission order, then an
    /// omitted-count line if anything was cut, then the total.
    pub fn render(&self, set: &DivergenceSet) -> Vec<ReportLine> {
        let mut lines: Vec<ReportLine> = set
            .iter()
            .take(self.limit)
            .map(|d| ReportLine::Divergence(d.message.clone()))
            .collect();
        let omitted = self.omitted(set);
        if omitted > 0 {
            lines.push(ReportLine::Omitted(omitted));
        }
        lines.push(ReportLine::Total(set.len()));
        lines
    }

    /// Write the text report, one line per [`ReportLine`].
    pub fn write_text<W: Write>(
        &self,
        set: &DivergenceSet,
        out: &mut W,
        color: bool,
    ) -> ReportResult<()> {
        if !color {
            for line in self.render(set) {
                writeln!(out, "{line}")?;
            }
            return Ok(());
        }

        // An explicit request wins over tty detection and CLICOLOR/NO_COLOR.
        colored::control::set_override(true);
        for d in set.iter().take(self.limit) {
            writeln!(out, "{}", styled_record(d))?;
        }
        let omitted = self.omitted(set);
        if omitted > 0 {
            writeln!(out, "{}", ReportLine::Omitted(omitted).to_string().dimmed())?;
        }
        let total = ReportLine::Total(set.len()).to_string();
        if set.is_empty() {
            writeln!(out, "{}", total.green().bold())?;
        } else {
            writeln!(out, "{}", total.red().bold())?;
        }
        Ok(())
    }

    /// Write the JSON report followed by a newline.
    pub fn write_json<W: Write>(&self, set: &DivergenceSet, out: &mut W) -> ReportResult<()> {
        let report = JsonReport::new(self, set);
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        Ok(())
    }
}

fn styled_record(d: &Divergence) -> String {
    let path = d.path.to_string();
    match d.message.strip_prefix(path.as_str()) {
        Some(rest) => format!("{}{}", path.yellow(), rest),
        None => d.message.clone(),
    }
}
