use crate::event::{classify, Event};
use crate::report::{game_name, GameState, Report};
use log::{debug, warn};

/// Folds a stream of log lines into one [`Report`] per game.
///
/// The aggregator is idle until the first `InitGame`: player and kill
/// events seen before that have no game to belong to and are dropped.
/// Every later `InitGame` closes the game in flight and opens the next
/// one. Call [`finish`](GameAggregator::finish) at end of input to close
/// the last game.
///
/// # Examples
///
/// ```
/// use gamefold::GameAggregator;
///
/// let mut aggregator = GameAggregator::new();
/// assert!(aggregator.process_line("  0:00 InitGame: \\sv_hostname\\Code Miner Server").is_none());
/// assert!(aggregator.process_line(r"  0:25 ClientUserinfoChanged: 2 n\Isgalamido\t\0").is_none());
///
/// let report = aggregator.finish().unwrap();
/// assert_eq!(report.game_name, "game_001");
/// assert!(report.players.contains("Isgalamido"));
/// ```
#[derive(Debug, Default)]
pub struct GameAggregator {
    state: GameState,
    game_count: u32,
    skipped_lines: u64,
}

impl GameAggregator {
    /// Create an idle aggregator with an empty game state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify `line` and apply the resulting event.
    ///
    /// Lines that carry a known marker but fail to parse are logged at
    /// warn level and skipped. Returns the report of the game this line
    /// closed, if any.
    pub fn process_line(&mut self, line: &str) -> Option<Report> {
        match classify(line) {
            Ok(event) => self.apply(event),
            Err(err) => {
                warn!("skipping line: {err}");
                self.skipped_lines += 1;
                None
            }
        }
    }

    /// Apply one event to the game in flight.
    ///
    /// Returns the finished game's report when `event` is a
    /// [`Event::NewGame`] that closes a game with at least one player.
    pub fn apply(&mut self, event: Event) -> Option<Report> {
        match event {
            Event::NewGame => self.start_game(),
            Event::PlayerInfoChanged { id, name } if self.is_active() => {
                self.state.record_player(id, name);
                None
            }
            Event::KillOccurred {
                killer,
                killed,
                cause,
            } if self.is_active() => {
                self.state.record_kill(killer, killed, cause);
                None
            }
            _ => None,
        }
    }

    /// Close the game in flight at end of input.
    ///
    /// Returns its report if it saw at least one player.
    pub fn finish(mut self) -> Option<Report> {
        self.close_game()
    }

    /// `true` once an `InitGame` has been seen.
    pub fn is_active(&self) -> bool {
        self.game_count > 0
    }

    /// Number of games started so far; also the counter in the name of
    /// the game in flight.
    pub fn game_count(&self) -> u32 {
        self.game_count
    }

    /// Number of lines dropped because they failed to parse.
    pub fn skipped_lines(&self) -> u64 {
        self.skipped_lines
    }

    /// Statistics of the game in flight.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    fn start_game(&mut self) -> Option<Report> {
        let finished = self.close_game();
        self.game_count += 1;
        debug!("{} started", game_name(self.game_count));
        finished
    }

    fn close_game(&mut self) -> Option<Report> {
        let state = std::mem::take(&mut self.state);
        if !self.is_active() {
            return None;
        }

        let name = game_name(self.game_count);
        if !state.has_players() {
            debug!("{name} ended without players, no report");
            return None;
        }

        debug!(
            "{name} ended: {} players, {} kills",
            state.players.len(),
            state.total_kills
        );
        Some(state.into_report(name))
    }
}

/// Fold every line of `lines` and collect the reports in game order.
///
/// The single-threaded counterpart of [`pipeline::run`](crate::pipeline::run)
/// for logs already held in memory.
///
/// # Examples
///
/// ```
/// let log = [
///     "  0:00 InitGame: \\sv_floodProtect\\1",
///     r" 20:34 ClientUserinfoChanged: 2 n\Isgalamido\t\0\model\xian/default",
///     r" 20:34 ClientUserinfoChanged: 3 n\Mocinha\t\0\model\sarge",
///     " 22:06 Kill: 2 3 7: Isgalamido killed Mocinha by MOD_ROCKET_SPLASH",
/// ];
/// let reports = gamefold::aggregate_lines(log);
/// assert_eq!(reports.len(), 1);
/// assert_eq!(reports[0].kills["Isgalamido"], 1);
/// ```
pub fn aggregate_lines<I, S>(lines: I) -> Vec<Report>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut aggregator = GameAggregator::new();
    let mut reports: Vec<Report> = lines
        .into_iter()
        .filter_map(|line| aggregator.process_line(line.as_ref()))
        .collect();
    reports.extend(aggregator.finish());
    reports
}
