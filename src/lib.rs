mod aggregator;
mod config;
pub mod error;
mod event;
mod logging;
pub mod pipeline;
mod report;
pub mod sink;
mod source;

pub use aggregator::{aggregate_lines, GameAggregator};
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use event::{classify, ClassifyError, Event, PlayerId, WORLD_PLAYER_ID};
pub use logging::init_logging;
pub use pipeline::RunSummary;
pub use report::{game_name, save_reports, write_reports, GameReports, GameState, Report};
pub use source::{read_lines, LogLines};
