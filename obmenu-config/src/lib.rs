//! Shared configuration loader for obmenu.
//!
//! `defaults/obmenu.default.toml` is embedded into the binary so that docs and runtime
//! behavior stay in sync. Applications layer user-specific files on top of those defaults
//! via [`Loader`] before deserializing into [`ObmenuConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat};
use obmenu_babel::{JgmenuFormat, OpenboxFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/obmenu.default.toml");

/// Top-level configuration consumed by obmenu.
#[derive(Debug, Clone, Deserialize)]
pub struct ObmenuConfig {
    pub menu: MenuConfig,
    pub output: OutputConfig,
    pub input: InputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuConfig {
    pub root_tag: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub pipe_helper: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Relative to the home directory
    pub default_menu: PathBuf,
}

impl ObmenuConfig {
    /// Openbox reader using the configured root tag.
    pub fn openbox_format(&self) -> OpenboxFormat {
        OpenboxFormat::new(self.menu.root_tag.clone())
    }

    /// jgmenu writer using the configured pipe helper.
    pub fn jgmenu_format(&self) -> JgmenuFormat {
        JgmenuFormat::new(self.output.pipe_helper.clone())
    }

    /// Location of the default menu below `home`.
    pub fn default_menu_path(&self, home: impl AsRef<Path>) -> PathBuf {
        home.as_ref().join(&self.input.default_menu)
    }
}

/// Per-user configuration file, relative to the home directory
pub const USER_CONFIG_PATH: &str = ".config/obmenu/config.toml";

/// Stacks configuration layers over the embedded defaults; later layers win.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Self {
            builder: Config::builder().add_source(defaults),
        }
    }

    /// Layer `~/.config/obmenu/config.toml` when it exists
    pub fn with_user_config(self, home: impl AsRef<Path>) -> Self {
        let path = home.as_ref().join(USER_CONFIG_PATH);
        self.with_toml(&path, false)
    }

    /// Layer a file given explicitly; it must exist
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), true)
    }

    fn with_toml(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Force the id of the root tag, whatever the files say
    pub fn with_root_tag(mut self, tag: &str) -> Result<Self, ConfigError> {
        self.builder = self.builder.set_override("menu.root_tag", tag)?;
        Ok(self)
    }

    pub fn build(self) -> Result<ObmenuConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
