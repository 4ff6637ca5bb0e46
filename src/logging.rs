//! Logging to a file.  The terminal is taken over by the game, so nothing is
//! ever logged to stdout or stderr while it runs.
use crate::config::LogConfig;
use log::LevelFilter;
use simplelog::WriteLogger;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Install a global logger writing to the file named by `config`.  Returns
/// the path of the log file, or `None` if logging is turned off.
pub(crate) fn init(config: &LogConfig) -> Result<Option<PathBuf>, LogError> {
    if config.level == LevelFilter::Off {
        return Ok(None);
    }
    let path = config.log_file().ok_or(LogError::NoPath)?;
    let file = open_log_file(&path)?;
    WriteLogger::init(config.level, simplelog::Config::default(), file)?;
    Ok(Some(path))
}

/// Open `path` for appending, creating it and its parent directories as
/// needed
fn open_log_file(path: &Path) -> Result<fs_err::File, LogError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent).map_err(LogError::Mkdir)?;
    }
    fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(LogError::Open)
}

#[derive(Debug, Error)]
pub(crate) enum LogError {
    #[error("failed to determine path to local data directory")]
    NoPath,
    #[error("failed to create log directory")]
    Mkdir(#[source] io::Error),
    #[error("failed to open log file")]
    Open(#[source] io::Error),
    #[error("failed to install logger")]
    Install(#[from] log::SetLoggerError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn open_creates_parents_and_appends() {
        let dir = tempfile::tempdir().expect("failed to create temporary directory");
        let path = dir.path().join("nested").join("dir").join("gridsnake.log");
        {
            let mut file = open_log_file(&path).expect("log file should open");
            file.write_all(b"first\n").expect("write should succeed");
        }
        {
            let mut file = open_log_file(&path).expect("log file should reopen");
            file.write_all(b"second\n").expect("write should succeed");
        }
        let content = fs_err::read_to_string(&path).expect("log file should be readable");
        assert_eq!(content, "first\nsecond\n");
    }

    #[test]
    fn logging_off() {
        let config = LogConfig {
            level: LevelFilter::Off,
            file: None,
        };
        assert!(matches!(init(&config), Ok(None)));
    }
}
