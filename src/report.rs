//! Per-game statistics: the in-flight [`GameState`] and the immutable
//! [`Report`] it turns into once its game is over.

use crate::error::{Error, Result};
use crate::event::{PlayerId, WORLD_PLAYER_ID};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Statistics of the game currently being played.
///
/// Owned by exactly one [`GameAggregator`](crate::GameAggregator) and reset
/// at every game boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    /// Every kill line counts, including world kills and suicides.
    pub total_kills: u64,

    /// Last announced name for each client id.
    pub players: BTreeMap<PlayerId, String>,

    /// Score per client id. World kills subtract from the victim, so this
    /// can go negative.
    pub kills: BTreeMap<PlayerId, i64>,

    /// Number of deaths per cause token.
    pub kills_by_means: HashMap<String, u64>,
}

impl GameState {
    /// Bind `id` to `name`, replacing any earlier name.
    pub fn record_player(&mut self, id: PlayerId, name: String) {
        self.players.insert(id, name);
    }

    /// Count one kill.
    ///
    /// The total and the cause tally always move. A world kill costs the
    /// victim a point, a suicide changes nobody's score, anything else
    /// credits the killer.
    pub fn record_kill(&mut self, killer: PlayerId, killed: PlayerId, cause: String) {
        self.total_kills += 1;
        *self.kills_by_means.entry(cause).or_default() += 1;

        if killer == WORLD_PLAYER_ID {
            *self.kills.entry(killed).or_default() -= 1;
        } else if killer != killed {
            *self.kills.entry(killer).or_default() += 1;
        }
    }

    /// `true` once at least one player has been announced. Games without
    /// players never produce a report.
    pub fn has_players(&self) -> bool {
        !self.players.is_empty()
    }

    /// Consume the state and build the report for `game_name`.
    ///
    /// Scores are rekeyed from client id to player name. An id that never
    /// announced a name is reported under the empty string. If two ids
    /// resolve to the same name, the higher id's score is kept.
    pub fn into_report(self, game_name: String) -> Report {
        let mut kills = HashMap::with_capacity(self.kills.len());
        for (id, score) in self.kills {
            let name = self.players.get(&id).cloned().unwrap_or_default();
            kills.insert(name, score);
        }

        Report {
            game_name,
            total_kills: self.total_kills,
            players: self.players.into_values().collect(),
            kills,
            kills_by_means: self.kills_by_means,
        }
    }
}

/// Final statistics of one finished game.
///
/// Serialized as
///
/// ```text
/// {
///   "total_kills": 11,
///   "players": ["Isgalamido", "Mocinha"],
///   "kills": { "Isgalamido": -5 },
///   "kills_by_means": { "MOD_TRIGGER_HURT": 7, "MOD_ROCKET_SPLASH": 3, "MOD_FALLING": 1 }
/// }
/// ```
///
/// The game name is not a field of its own; it keys the report in
/// [`GameReports`]. `players` and `kills` carry no ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    #[serde(skip)]
    pub game_name: String,
    pub total_kills: u64,
    pub players: HashSet<String>,
    pub kills: HashMap<String, i64>,
    pub kills_by_means: HashMap<String, u64>,
}

/// All reports of one run, keyed by game name.
pub type GameReports = BTreeMap<String, Report>;

/// Name of the `counter`-th game of a run, e.g. `game_007`.
///
/// # Examples
///
/// ```
/// assert_eq!(gamefold::game_name(1), "game_001");
/// assert_eq!(gamefold::game_name(21), "game_021");
/// assert_eq!(gamefold::game_name(1000), "game_1000");
/// ```
pub fn game_name(counter: u32) -> String {
    format!("game_{counter:03}")
}

/// Serialize `reports` as one JSON object into `writer`.
///
/// # Errors
///
/// Returns [`Error::Serialize`] or [`Error::Write`] if encoding or writing
/// fails.
pub fn write_reports<W: Write>(mut writer: W, reports: &GameReports) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, reports)?;
    writer.write_all(b"\n").map_err(Error::Write)?;
    writer.flush().map_err(Error::Write)
}

/// Save `reports` to `path` atomically.
///
/// Writes to a `.tmp` sibling first, syncs, then renames over `path`. If
/// the process dies mid-write the previous result file survives intact.
///
/// # Errors
///
/// Returns [`Error::Write`] if any file operation fails.
pub fn save_reports(path: &Path, reports: &GameReports) -> Result<()> {
    let tmp_path = path.with_extension("json.tmp");

    let file = fs::File::create(&tmp_path).map_err(Error::Write)?;
    let mut writer = io::BufWriter::new(file);
    write_reports(&mut writer, reports)?;
    let file = writer
        .into_inner()
        .map_err(|e| Error::Write(e.into_error()))?;
    file.sync_data().map_err(Error::Write)?;
    drop(file);

    fs::rename(&tmp_path, path).map_err(Error::Write)
}
