//! Report sinks: where the finished reports of a run end up.

use crate::error::Result;
use crate::report::{save_reports, write_reports, GameReports, Report};
use crossbeam_channel::Receiver;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Destination for the reports of one run.
///
/// [`pipeline::run`](crate::pipeline::run) hands over the complete set of
/// reports once, after every stage has finished cleanly.
pub trait ReportSink {
    fn persist(&mut self, reports: &GameReports) -> Result<()>;
}

/// Writes the reports as a JSON file, atomically replacing any previous
/// file at the same path.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSink for JsonFile {
    fn persist(&mut self, reports: &GameReports) -> Result<()> {
        save_reports(&self.path, reports)
    }
}

/// Writes the reports as JSON into any [`Write`].
#[derive(Debug)]
pub struct JsonWriter<W> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        JsonWriter { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for JsonWriter<W> {
    fn persist(&mut self, reports: &GameReports) -> Result<()> {
        write_reports(&mut self.writer, reports)
    }
}

/// Keeps every persisted report set in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub reports: GameReports,
}

impl ReportSink for MemorySink {
    fn persist(&mut self, reports: &GameReports) -> Result<()> {
        self.reports.extend(reports.iter().map(|(k, v)| (k.clone(), v.clone())));
        Ok(())
    }
}

/// Drain `reports` until the producer hangs up, keying each report by its
/// game name.
pub fn collect_reports(reports: Receiver<Report>) -> GameReports {
    let mut collected = GameReports::new();
    for report in reports {
        collected.insert(report.game_name.clone(), report);
    }
    collected
}
