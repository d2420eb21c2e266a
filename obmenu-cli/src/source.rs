//! Where the Openbox menu comes from
//!
//! A file named on the command line, the standard output of a pipe-menu command, or the
//! user's default Openbox menu.

use crate::error::CliError;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuSource {
    File(PathBuf),
    /// Shell command whose output is an `<openbox_pipe_menu>` document
    Command(String),
}

impl MenuSource {
    /// Read the whole menu into memory
    pub fn read(&self) -> Result<String, CliError> {
        match self {
            MenuSource::File(path) => {
                debug!("reading menu from {}", path.display());
                fs::read_to_string(path).map_err(|source| CliError::Open {
                    path: path.clone(),
                    source,
                })
            }
            MenuSource::Command(command) => {
                debug!("reading menu from `{}`", command);
                let output = Command::new("sh")
                    .arg("-c")
                    .arg(command)
                    .stdin(Stdio::null())
                    .stderr(Stdio::inherit())
                    .output()
                    .map_err(|source| CliError::Run {
                        command: command.clone(),
                        source,
                    })?;
                if !output.status.success() {
                    debug!("`{}` exited with {}", command, output.status);
                }
                Ok(String::from_utf8_lossy(&output.stdout).into_owned())
            }
        }
    }
}
