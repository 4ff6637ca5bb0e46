use crate::consts;
use crate::grid::Bounds;
use log::LevelFilter;
use serde::Deserialize;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Settings for the play area and its pacing
    #[serde(default)]
    pub(crate) game: GameConfig,

    /// Settings for the log file
    #[serde(default)]
    pub(crate) log: LogConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// Load the configuration file from its default location, if there is
    /// one
    pub(crate) fn load_default() -> Result<Config, ConfigError> {
        match Config::default_path() {
            Ok(path) => Config::load(&path, true),
            Err(ConfigError::NoPath) => Ok(Config::default()),
            Err(e) => Err(e),
        }
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawGameConfig")]
pub(crate) struct GameConfig {
    bounds: Bounds,
    tick_period: Duration,
}

impl GameConfig {
    const SIZE_RANGE: RangeInclusive<u16> = 2..=64;
    const TICK_MS_RANGE: RangeInclusive<u64> = 50..=2000;

    pub(crate) fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub(crate) fn tick_period(&self) -> Duration {
        self.tick_period
    }
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            bounds: Bounds::default(),
            tick_period: consts::TICK_PERIOD,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawGameConfig {
    width: u16,
    height: u16,
    tick_ms: u64,
}

impl Default for RawGameConfig {
    fn default() -> RawGameConfig {
        RawGameConfig {
            width: consts::DEFAULT_BOARD_WIDTH,
            height: consts::DEFAULT_BOARD_HEIGHT,
            tick_ms: consts::TICK_MILLIS,
        }
    }
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = InvalidValue;

    fn try_from(value: RawGameConfig) -> Result<GameConfig, InvalidValue> {
        let check_size = |key: &str, size: u16| {
            if GameConfig::SIZE_RANGE.contains(&size) {
                Ok(size)
            } else {
                Err(InvalidValue::out_of_range(
                    key,
                    size,
                    &GameConfig::SIZE_RANGE,
                ))
            }
        };
        let width = check_size("width", value.width)?;
        let height = check_size("height", value.height)?;
        if !GameConfig::TICK_MS_RANGE.contains(&value.tick_ms) {
            return Err(InvalidValue::out_of_range(
                "tick-ms",
                value.tick_ms,
                &GameConfig::TICK_MS_RANGE,
            ));
        }
        let bounds = Bounds::new(width, height).ok_or_else(|| InvalidValue {
            msg: format!("a {width}x{height} board is too small"),
        })?;
        Ok(GameConfig {
            bounds,
            tick_period: Duration::from_millis(value.tick_ms),
        })
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct LogConfig {
    /// Maximum level of messages written to the log file
    pub(crate) level: LevelFilter,

    /// Path at which to write the log file
    pub(crate) file: Option<PathBuf>,
}

impl LogConfig {
    /// Return the configured log file path or, if that is not set, the
    /// default one.  Returns `None` if no path is configured and the local
    /// data directory could not be determined.
    pub(crate) fn log_file(&self) -> Option<PathBuf> {
        self.file.clone().or_else(|| {
            dirs::data_local_dir().map(|p| p.join("gridsnake").join("gridsnake.log"))
        })
    }
}

impl Default for LogConfig {
    fn default() -> LogConfig {
        LogConfig {
            level: LevelFilter::Info,
            file: None,
        }
    }
}

/// A configuration value that deserialized fine but cannot be used
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("{msg}")]
pub(crate) struct InvalidValue {
    msg: String,
}

impl InvalidValue {
    fn out_of_range<T: std::fmt::Display>(
        key: &str,
        value: T,
        range: &RangeInclusive<T>,
    ) -> InvalidValue {
        InvalidValue {
            msg: format!(
                "{key} = {value} is out of range; expected {}..={}",
                range.start(),
                range.end()
            ),
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
