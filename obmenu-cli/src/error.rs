use obmenu_babel::FormatError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("cannot open file '{}': {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("cannot run command '{command}': {source}")]
    Run { command: String, source: io::Error },

    #[error("cannot open openbox menu file: $HOME is not set")]
    NoHome,

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Format(#[from] FormatError),
}
