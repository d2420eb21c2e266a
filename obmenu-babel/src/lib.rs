//! Openbox menu conversion for jgmenu
//!
//!     This crate turns an Openbox menu (a `menu.xml` file, or the output of an Openbox
//!     pipe-menu command) into the CSV menu description jgmenu reads.
//!
//!     This is a pure lib: it powers obmenu-cli but makes no assumption about a shell.
//!     Reading files, running commands, env vars and printing all belong to the caller.
//!
//! Architecture
//!
//!     Openbox XML → markup tree → MenuModel → jgmenu CSV
//!
//!     - Format trait: uniform interface for the formats (parsing and/or serialization)
//!     - MenuModel: tags (menu sections) and their items, see ./menu.rs
//!     - formats/openbox: xmltree parsing and the tree interpreter that rebuilds the
//!       menu structure
//!     - formats/jgmenu: the CSV serializer
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── menu.rs                 # MenuModel, Tag, Item
//!     ├── formats
//!     │   ├── openbox
//!     │   │   ├── markup.rs       # XML → markup tree
//!     │   │   ├── parser.rs       # markup tree → MenuModel
//!     │   │   └── mod.rs
//!     │   └── jgmenu
//!     │       ├── serializer.rs   # MenuModel → CSV
//!     │       └── mod.rs
//!     ├── lib.rs
//!
//! Testing
//!     tests
//!     ├── openbox.rs
//!     ├── openbox
//!     │   └── <testname>.rs
//!     └── fixtures
//!         ├── <menu>.xml
//!         └── <menu>.csv
//!
//! Known limitation
//!
//!     A `<menu id="…"/>` link takes its label from the menu with that id as it stands
//!     when the link is read. Linking to a menu defined further down the document gives
//!     an entry with an empty label. Openbox menus normally define submenus before the
//!     root menu, which avoids this.
//!
pub mod error;
pub mod format;
pub mod formats;
pub mod menu;

pub use error::FormatError;
pub use format::Format;
pub use formats::{JgmenuFormat, OpenboxFormat};
pub use menu::{Item, MenuModel, Tag, TagHandle};

/// Convert a menu from one format to another, typically [`OpenboxFormat`] to
/// [`JgmenuFormat`].
///
/// Nothing is produced when the source cannot be parsed.
pub fn convert(source: &str, from: &dyn Format, to: &dyn Format) -> Result<String, FormatError> {
    if !from.supports_parsing() {
        return Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            from.name()
        )));
    }
    if !to.supports_serialization() {
        return Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            to.name()
        )));
    }

    let model = from.parse(source)?;
    to.serialize(&model)
}
