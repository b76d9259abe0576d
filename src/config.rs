use std::path::{Path, PathBuf};

const DEFAULT_APP_NAME: &str = "gamefold";
const DEFAULT_LOG_PATH: &str = "./qgames.log";
const DEFAULT_OUTPUT_PATH: &str = "./result.json";

/// Settings of one `gamefold` run.
///
/// # Examples
///
/// ```
/// use gamefold::Config;
///
/// let config = Config::builder()
///     .log_path("logs/games.log")
///     .log_debug(false)
///     .build();
/// assert_eq!(config.log_path().to_str(), Some("logs/games.log"));
/// assert_eq!(config.output_path().to_str(), Some("./result.json"));
/// assert_eq!(config.log_level(), "info");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    app_name: String,
    log_debug: bool,
    log_path: PathBuf,
    output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            app_name: DEFAULT_APP_NAME.to_string(),
            log_debug: true,
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl Config {
    /// Start from the defaults: debug logging on, `./qgames.log` in,
    /// `./result.json` out.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder {
            config: Config::default(),
        }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn log_debug(&self) -> bool {
        self.log_debug
    }

    /// The game log to read.
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Where the JSON reports are written.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Default log filter directive; `RUST_LOG` takes precedence.
    pub fn log_level(&self) -> &'static str {
        if self.log_debug { "debug" } else { "info" }
    }
}

/// Builder for [`Config`].
#[derive(Debug, Clone)]
#[must_use]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.config.app_name = name.into();
        self
    }

    pub fn log_debug(mut self, enabled: bool) -> Self {
        self.config.log_debug = enabled;
        self
    }

    pub fn log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.log_path = path.into();
        self
    }

    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_path = path.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
