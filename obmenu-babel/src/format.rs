//! Format trait definition
//!
//! This module defines the Format trait shared by the menu formats. A format reads source
//! text into a [`MenuModel`], writes a [`MenuModel`] back out as text, or both.

use crate::error::FormatError;
use crate::menu::MenuModel;

/// Trait for menu formats
///
/// Openbox menus are only ever read and jgmenu menus are only ever written, so each
/// implementor usually overrides one direction and keeps the default for the other.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, model: &MenuModel) -> Result<String, FormatError> {
///         todo!()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "openbox", "jgmenu")
    fn name(&self) -> &str;

    /// Whether this format supports parsing (source → MenuModel)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (MenuModel → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a MenuModel
    ///
    /// Default implementation returns NotSupported error.
    fn parse(&self, _source: &str) -> Result<MenuModel, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize a MenuModel into source text
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _model: &MenuModel) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }
}
