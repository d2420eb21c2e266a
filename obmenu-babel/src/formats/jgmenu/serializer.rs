//! jgmenu CSV serialization
//!
//! Writes the root tag first, then every other tag in creation order. Tags without
//! items are left out. Each tag becomes one block:
//!
//! ```text
//! Openbox,^tag(root-menu)
//! Terminal,xterm
//! Applications,^checkout(apps)
//! Places,^pipe(jgmenu_run ob --cmd='obpipe places' --tag='Places')
//! ^sep(Tools)
//!
//! Applications,^tag(apps)
//! Back,^back()
//! ...
//! ```

use crate::menu::{Item, MenuModel, Tag};
use std::borrow::Cow;

/// Escape a label for jgmenu, which may render it as markup
pub fn escape_label(label: &str) -> Cow<'_, str> {
    if label.contains('&') {
        Cow::Owned(label.replace('&', "&amp;"))
    } else {
        Cow::Borrowed(label)
    }
}

/// Serialize a menu model to jgmenu CSV
pub fn serialize_menu(model: &MenuModel, pipe_helper: &str) -> String {
    let mut serializer = JgmenuSerializer::new(pipe_helper);
    let root = model.root_id();

    for tag in model.tags().filter(|tag| tag.id == root) {
        serializer.serialize_tag(tag);
    }
    for tag in model.tags().filter(|tag| tag.id != root) {
        serializer.serialize_tag(tag);
    }
    serializer.output
}

struct JgmenuSerializer<'a> {
    output: String,
    pipe_helper: &'a str,
}

impl<'a> JgmenuSerializer<'a> {
    fn new(pipe_helper: &'a str) -> Self {
        Self {
            output: String::new(),
            pipe_helper,
        }
    }

    fn line(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }

    fn serialize_tag(&mut self, tag: &Tag) {
        if tag.items.is_empty() {
            return;
        }

        // Only item labels are escaped
        let label = tag.label.as_deref().unwrap_or("");
        self.line(&format!("{},^tag({})", label, tag.id));
        if tag.parent.is_some() {
            self.line("Back,^back()");
        }
        for item in &tag.items {
            let line = self.item_line(item);
            self.line(&line);
        }
        self.line("");
    }

    fn item_line(&self, item: &Item) -> String {
        let raw_label = item.label().unwrap_or("");
        let label = escape_label(raw_label);

        match item {
            Item::Command { command, .. } => {
                format!("{},{}", label, command.as_deref().unwrap_or(""))
            }
            Item::Checkout { target, .. } => format!("{},^checkout({})", label, target),
            Item::PipeMenu { command, .. } => format!(
                "{},^pipe({} --cmd='{}' --tag='{}')",
                label, self.pipe_helper, command, raw_label
            ),
            Item::Separator { .. } => format!("^sep({})", label),
        }
    }
}
