use thiserror::Error;

/// Identifier a game server assigns to a connected client.
pub type PlayerId = u32;

/// Killer id the server uses for deaths caused by the map itself
/// (falling, lava, crushers, ...). It never names a real player.
pub const WORLD_PLAYER_ID: PlayerId = 1022;

const NEW_GAME_MARKER: &str = "InitGame";
const USER_INFO_MARKER: &str = "ClientUserinfoChanged";
const KILL_MARKER: &str = " Kill: ";

/// A typed event recognized in one line of a game-server log.
///
/// Events are produced by [`classify`] and have no meaning on their own;
/// the [`GameAggregator`](crate::GameAggregator) folds them into per-game
/// statistics.
///
/// # Examples
///
/// ```
/// use gamefold::{classify, Event};
///
/// let event = classify(r"20:34 ClientUserinfoChanged: 2 n\Isgalamido\t\0\model\xian/default").unwrap();
/// assert_eq!(
///     event,
///     Event::PlayerInfoChanged { id: 2, name: "Isgalamido".to_string() }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A new game session starts (`InitGame`).
    NewGame,

    /// A client announced or changed its name.
    PlayerInfoChanged { id: PlayerId, name: String },

    /// One player (or the world) killed another.
    KillOccurred {
        killer: PlayerId,
        killed: PlayerId,
        /// Death cause token, e.g. `MOD_ROCKET_SPLASH`.
        cause: String,
    },

    /// Any line the log format does not care about.
    Unrecognized,
}

/// A line carried a known marker but not the shape that goes with it.
///
/// Never fatal: the offending line is dropped and the stream continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("malformed user info line: {line}")]
    MalformedUserInfo { line: String },

    #[error("malformed kill line: {line}")]
    MalformedKill { line: String },

    #[error("player id `{id}` out of range in line: {line}")]
    PlayerIdOutOfRange { id: String, line: String },
}

/// Classify one raw log line.
///
/// Markers are checked in priority order, by substring, before any
/// structural parsing:
///
/// 1. `InitGame` is a [`Event::NewGame`], whatever else the line holds.
/// 2. `ClientUserinfoChanged` must parse as `<mm:ss> ClientUserinfoChanged: <id> n\<name>\t\...`.
/// 3. ` Kill: ` must parse as `<mm:ss> Kill: <killer> <killed> <means>: <a> killed <b> by <cause>`.
/// 4. Anything else is [`Event::Unrecognized`].
///
/// # Errors
///
/// Returns a [`ClassifyError`] when the line contains marker 2 or 3 but
/// does not have the matching shape.
///
/// # Examples
///
/// ```
/// use gamefold::{classify, Event};
///
/// assert_eq!(classify("  0:00 InitGame: \\sv_floodProtect\\1").unwrap(), Event::NewGame);
/// assert_eq!(classify("  0:00 ------------").unwrap(), Event::Unrecognized);
///
/// let kill = classify("22:06 Kill: 2 3 7: Isgalamido killed Mocinha by MOD_ROCKET_SPLASH").unwrap();
/// assert_eq!(
///     kill,
///     Event::KillOccurred { killer: 2, killed: 3, cause: "MOD_ROCKET_SPLASH".to_string() }
/// );
///
/// assert!(classify(" Kill: 1022 2 19: <world> killed Isgalamido by MOD_TRIGGER_HURT").is_err());
/// ```
pub fn classify(line: &str) -> Result<Event, ClassifyError> {
    if line.contains(NEW_GAME_MARKER) {
        return Ok(Event::NewGame);
    }

    if line.contains(USER_INFO_MARKER) {
        return parse_user_info(line);
    }

    if line.contains(KILL_MARKER) {
        return parse_kill(line);
    }

    Ok(Event::Unrecognized)
}

fn parse_user_info(line: &str) -> Result<Event, ClassifyError> {
    let malformed = || ClassifyError::MalformedUserInfo {
        line: line.to_string(),
    };

    let (head, rest) = line
        .split_once(" ClientUserinfoChanged: ")
        .ok_or_else(malformed)?;
    if !ends_with_timestamp(head) {
        return Err(malformed());
    }

    let (id, fields) = rest.split_once(' ').ok_or_else(malformed)?;
    let id = parse_id(id, line, malformed)?;

    // The name runs up to the last `\t\` so names containing backslashes survive.
    let fields = fields.strip_prefix("n\\").ok_or_else(malformed)?;
    let end = fields.rfind("\\t\\").ok_or_else(malformed)?;
    let name = &fields[..end];
    if name.is_empty() {
        return Err(malformed());
    }

    Ok(Event::PlayerInfoChanged {
        id,
        name: name.to_string(),
    })
}

fn parse_kill(line: &str) -> Result<Event, ClassifyError> {
    let malformed = || ClassifyError::MalformedKill {
        line: line.to_string(),
    };

    let (head, rest) = line.split_once(KILL_MARKER).ok_or_else(malformed)?;
    if !ends_with_timestamp(head) {
        return Err(malformed());
    }

    let (killer, rest) = rest.split_once(' ').ok_or_else(malformed)?;
    let (killed, rest) = rest.split_once(' ').ok_or_else(malformed)?;
    let (means, narrative) = rest.split_once(": ").ok_or_else(malformed)?;
    if !is_digits(means) {
        return Err(malformed());
    }

    let killer = parse_id(killer, line, malformed)?;
    let killed = parse_id(killed, line, malformed)?;

    let (who, cause) = narrative.rsplit_once(" by ").ok_or_else(malformed)?;
    let (killer_name, victim_name) = who.rsplit_once(" killed ").ok_or_else(malformed)?;
    if cause.is_empty() || killer_name.is_empty() || victim_name.is_empty() {
        return Err(malformed());
    }

    Ok(Event::KillOccurred {
        killer,
        killed,
        cause: cause.to_string(),
    })
}

fn parse_id(
    token: &str,
    line: &str,
    malformed: impl Fn() -> ClassifyError,
) -> Result<PlayerId, ClassifyError> {
    if !is_digits(token) {
        return Err(malformed());
    }
    token
        .parse()
        .map_err(|_| ClassifyError::PlayerIdOutOfRange {
            id: token.to_string(),
            line: line.to_string(),
        })
}

/// `true` if `text` ends with `<digits>:<digits>`.
fn ends_with_timestamp(text: &str) -> bool {
    match text.rsplit_once(':') {
        Some((minutes, seconds)) => {
            is_digits(seconds) && minutes.bytes().next_back().is_some_and(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}
