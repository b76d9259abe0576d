//! Three-stage pipeline: line source, aggregator, report collector.
//!
//! ```text
//! reader ──lines──▶ GameAggregator ──reports──▶ collector ──▶ ReportSink
//! ```
//!
//! Both channels are rendezvous channels (capacity 0): a stage blocks on
//! send until the next stage receives. End of input is signalled only by
//! dropping senders; the aggregator flushes its last game when the line
//! channel disconnects and then drops the report sender.

use crate::aggregator::GameAggregator;
use crate::error::{Error, Result};
use crate::report::Report;
use crate::sink::{collect_reports, ReportSink};
use crate::source::read_lines;
use crossbeam_channel::{bounded, Receiver, Sender};
use log::info;
use std::io::BufRead;
use std::thread::{self, ScopedJoinHandle};

/// Counters describing one pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub lines_read: u64,
    /// Lines that carried a known marker but failed to parse.
    pub lines_skipped: u64,
    pub games_started: u32,
    pub reports_written: usize,
}

/// Run the full pipeline over `reader` and persist the reports to `sink`.
///
/// The reader runs on the calling thread; aggregation and collection run
/// on scoped threads. The sink is only invoked once every stage finished
/// cleanly, so a failed read never leaves partial output behind.
///
/// # Errors
///
/// Returns [`Error::Read`] if the input cannot be read, any error from the
/// sink, or [`Error::StagePanicked`] if a stage thread panicked.
///
/// # Examples
///
/// ```
/// use gamefold::pipeline;
/// use gamefold::sink::MemorySink;
///
/// let log = "  0:00 InitGame: \\sv_floodProtect\\1\n\
///            20:34 ClientUserinfoChanged: 2 n\\Isgalamido\\t\\0\n";
/// let mut sink = MemorySink::default();
/// let summary = pipeline::run(log.as_bytes(), &mut sink).unwrap();
///
/// assert_eq!(summary.lines_read, 2);
/// assert_eq!(summary.reports_written, 1);
/// assert!(sink.reports["game_001"].players.contains("Isgalamido"));
/// ```
pub fn run<R, S>(reader: R, sink: &mut S) -> Result<RunSummary>
where
    R: BufRead,
    S: ReportSink + ?Sized,
{
    let (line_tx, line_rx) = bounded::<String>(0);
    let (report_tx, report_rx) = bounded::<Report>(0);

    let (read, aggregated, collected) = thread::scope(|scope| {
        let aggregator = scope.spawn(move || aggregate(line_rx, report_tx));
        let collector = scope.spawn(move || collect_reports(report_rx));

        let read = read_lines(reader, &line_tx);
        drop(line_tx);

        (
            read,
            join(aggregator, "aggregator"),
            join(collector, "collector"),
        )
    });

    let reports = collected?;
    let (games_started, lines_skipped) = aggregated??;
    let lines_read = read?;

    sink.persist(&reports)?;

    let summary = RunSummary {
        lines_read,
        lines_skipped,
        games_started,
        reports_written: reports.len(),
    };
    info!(
        "processed {} lines ({} skipped): {} games, {} reports",
        summary.lines_read, summary.lines_skipped, summary.games_started, summary.reports_written
    );
    Ok(summary)
}

/// The aggregator stage. Returns the number of games started and the
/// number of lines skipped.
fn aggregate(lines: Receiver<String>, reports: Sender<Report>) -> Result<(u32, u64)> {
    let mut aggregator = GameAggregator::new();
    for line in lines {
        if let Some(report) = aggregator.process_line(&line) {
            reports
                .send(report)
                .map_err(|_| Error::Disconnected("collector"))?;
        }
    }

    let games_started = aggregator.game_count();
    let lines_skipped = aggregator.skipped_lines();
    if let Some(report) = aggregator.finish() {
        reports
            .send(report)
            .map_err(|_| Error::Disconnected("collector"))?;
    }
    Ok((games_started, lines_skipped))
}

fn join<T>(handle: ScopedJoinHandle<'_, T>, stage: &'static str) -> Result<T> {
    handle.join().map_err(|_| Error::StagePanicked(stage))
}
