//! Format implementations
//!
//! Openbox is read into the menu model, jgmenu is written from it.

pub mod jgmenu;
pub mod openbox;

pub use jgmenu::JgmenuFormat;
pub use openbox::OpenboxFormat;
