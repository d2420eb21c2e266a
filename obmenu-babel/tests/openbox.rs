//! Openbox → jgmenu conversion tests
//!
//! Rust does not discover tests in subdirectories, so the files under ./openbox are
//! declared here.

#[path = "openbox/convert.rs"]
mod convert;
#[path = "openbox/pipe_menu.rs"]
mod pipe_menu;
