//! Openbox menu format (parsing only)
//!
//! Strategy: XML → markup tree → MenuModel
//!
//! Reads both a regular `menu.xml` (rooted at `<openbox_menu>`) and the output of a
//! pipe-menu command (rooted at `<openbox_pipe_menu>`, whose first level is not wrapped
//! in a `<menu>`).
//!
//! # Example
//!
//! ```ignore
//! use obmenu_babel::formats::openbox::OpenboxFormat;
//! use obmenu_babel::Format;
//!
//! let model = OpenboxFormat::default().parse(xml)?;
//! ```

pub mod markup;
pub mod parser;

use crate::error::FormatError;
use crate::format::Format;
use crate::menu::MenuModel;

/// Identifier given to the root tag unless configured otherwise
pub const DEFAULT_ROOT_TAG: &str = "root-menu";

/// Openbox format, parameterised by the identifier of the root tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenboxFormat {
    pub root_tag: String,
}

impl OpenboxFormat {
    pub fn new(root_tag: impl Into<String>) -> Self {
        Self {
            root_tag: root_tag.into(),
        }
    }
}

impl Default for OpenboxFormat {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT_TAG)
    }
}

impl Format for OpenboxFormat {
    fn name(&self) -> &str {
        "openbox"
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<MenuModel, FormatError> {
        let root = markup::parse_markup(source)?;
        Ok(parser::interpret(&root, &self.root_tag))
    }
}
