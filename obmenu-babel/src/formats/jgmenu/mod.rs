//! jgmenu CSV format (serialization only)
//!
//! # Data Model
//!
//! | Menu model | jgmenu line | Notes |
//! |------------|-------------|-------|
//! | Tag | `label,^tag(id)` | followed by `Back,^back()` when the tag has a parent |
//! | Command | `label,command` | |
//! | Checkout | `label,^checkout(id)` | |
//! | PipeMenu | `label,^pipe(helper --cmd='command' --tag='label')` | the helper re-runs the conversion on the command's output |
//! | Separator | `^sep(label)` | |
//!
//! Every tag block ends with a blank line. Item labels are escaped with [`escape_label`];
//! the `^tag()` line and the `^pipe()` arguments carry labels verbatim.

pub mod serializer;

pub use serializer::{escape_label, serialize_menu};

use crate::error::FormatError;
use crate::format::Format;
use crate::menu::MenuModel;

/// Command jgmenu runs to expand a pipe-menu when it is opened
pub const DEFAULT_PIPE_HELPER: &str = "jgmenu_run ob";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JgmenuFormat {
    pub pipe_helper: String,
}

impl JgmenuFormat {
    pub fn new(pipe_helper: impl Into<String>) -> Self {
        Self {
            pipe_helper: pipe_helper.into(),
        }
    }
}

impl Default for JgmenuFormat {
    fn default() -> Self {
        Self::new(DEFAULT_PIPE_HELPER)
    }
}

impl Format for JgmenuFormat {
    fn name(&self) -> &str {
        "jgmenu"
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, model: &MenuModel) -> Result<String, FormatError> {
        Ok(serialize_menu(model, &self.pipe_helper))
    }
}
