//! Openbox menu interpreter (markup tree → MenuModel)
//!
//! Walks the markup tree depth-first in document order and rebuilds the menu structure.
//!
//! # Node kinds
//!
//! | Node | Effect |
//! |------|--------|
//! | `<menu label=…>` (no `execute`) | new tag, plus a checkout item in its parent tag |
//! | `<menu execute=…>` | pipe-menu item in the current tag |
//! | `<menu id=…>` | checkout item pointing at a tag defined elsewhere |
//! | `<item>` | command item, filled in by the action nodes below it |
//! | `<separator>` | separator item |
//! | comments | skipped with their subtree |
//! | anything else | action/content node, see [`ActionScope`] |
//!
//! Node kinds are matched case-insensitively. Checkout labels are looked up when the
//! checkout is met, so a checkout pointing at a menu defined further down the document
//! keeps an empty label.

use crate::formats::openbox::markup::{Element, Markup};
use crate::menu::{Item, MenuModel, Tag, TagHandle};
use tracing::{debug, trace};

/// Element name Openbox uses for the top level of a pipe-menu's output
pub const PIPE_MENU_ROOT: &str = "openbox_pipe_menu";

pub const RECONFIGURE_COMMAND: &str = "openbox --reconfigure";
pub const RESTART_COMMAND: &str = "openbox --restart";

/// Build the menu model for the tree rooted at `root`
pub fn interpret(root: &Element, root_id: &str) -> MenuModel {
    let mut interpreter = Interpreter::new(root_id);
    interpreter.visit_element(root, Enclosing::Document, ActionScope::default());
    interpreter.finish()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeKind {
    Menu,
    Item,
    Separator,
    Comment,
    Other,
}

impl NodeKind {
    fn of(name: &str) -> Self {
        if name.eq_ignore_ascii_case("menu") {
            NodeKind::Menu
        } else if name.eq_ignore_ascii_case("item") {
            NodeKind::Item
        } else if name.eq_ignore_ascii_case("separator") {
            NodeKind::Separator
        } else if name.eq_ignore_ascii_case("comment") {
            NodeKind::Comment
        } else {
            NodeKind::Other
        }
    }
}

/// The three meanings of a `<menu>` element, decided by its attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuNode<'a> {
    Submenu {
        label: &'a str,
        id: Option<&'a str>,
    },
    Pipe {
        command: &'a str,
        label: Option<&'a str>,
    },
    Link {
        target: &'a str,
    },
    Empty,
}

impl<'a> MenuNode<'a> {
    fn classify(element: &'a Element) -> Self {
        let label = element.attr("label");
        let execute = element.attr("execute");
        let id = element.attr("id");

        match (label, execute, id) {
            (Some(label), None, id) => MenuNode::Submenu { label, id },
            (label, Some(command), _) => MenuNode::Pipe { command, label },
            (None, None, Some(target)) => MenuNode::Link { target },
            (None, None, None) => MenuNode::Empty,
        }
    }
}

/// The direct parent of a node, as far as tag parenting is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Enclosing<'a> {
    Document,
    /// Pipe-menus do not wrap their first level in `<menu>`; this stands for the root tag
    PipeMenuRoot,
    Element { id: Option<&'a str> },
}

impl<'a> Enclosing<'a> {
    fn of(element: &'a Element) -> Self {
        if element.name == PIPE_MENU_ROOT {
            Enclosing::PipeMenuRoot
        } else {
            Enclosing::Element {
                id: element.attr("id"),
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Tail {
    #[default]
    Other,
    Item,
    ItemAction,
}

/// Where a node sits relative to `item` → `action` → `command` nesting.
///
/// Fed the names of a node's ancestors, `menu` elements excluded. The matching reproduces
/// a substring search for `item.action` and `item.action.command` in the dot-joined
/// ancestor path: names are split on their own dots, the `item` segment may carry a
/// prefix and the last segment of the pattern may carry a suffix. Names are compared
/// case-sensitively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionScope {
    tail: Tail,
    in_action: bool,
    in_command: bool,
}

impl ActionScope {
    pub fn enter(self, name: &str) -> Self {
        name.split('.').fold(self, ActionScope::enter_segment)
    }

    fn enter_segment(self, name: &str) -> Self {
        let mut next = self;

        if self.tail == Tail::Item && name.starts_with("action") {
            next.in_action = true;
        }
        if self.tail == Tail::ItemAction && name.starts_with("command") {
            next.in_command = true;
        }

        next.tail = if name.ends_with("item") {
            Tail::Item
        } else if self.tail == Tail::Item && name == "action" {
            Tail::ItemAction
        } else {
            Tail::Other
        };
        next
    }

    /// Inside an item's action
    pub fn in_action(self) -> bool {
        self.in_action
    }

    /// Inside the command of an item's action
    pub fn in_command(self) -> bool {
        self.in_command
    }
}

/// Command for an action that has no command text of its own
fn builtin_action(name: &str) -> Option<&'static str> {
    if name.eq_ignore_ascii_case("reconfigure") {
        Some(RECONFIGURE_COMMAND)
    } else if name.eq_ignore_ascii_case("restart") {
        Some(RESTART_COMMAND)
    } else {
        // Execute carries its command in a nested <command> node
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ItemCursor {
    tag: TagHandle,
    index: usize,
}

/// Walk state: the model under construction plus the tag and item being filled in
struct Interpreter {
    model: MenuModel,
    current_tag: Option<TagHandle>,
    current_item: Option<ItemCursor>,
}

impl Interpreter {
    fn new(root_id: &str) -> Self {
        Self {
            model: MenuModel::new(root_id),
            current_tag: None,
            current_item: None,
        }
    }

    fn finish(self) -> MenuModel {
        self.model
    }

    fn visit_children(&mut self, parent: &Element, scope: ActionScope) {
        let enclosing = Enclosing::of(parent);
        for child in &parent.children {
            match child {
                Markup::Element(element) => self.visit_element(element, enclosing, scope),
                Markup::Text(text) => self.visit_text(text, scope),
                Markup::Comment => {}
            }
        }
    }

    fn visit_element(&mut self, element: &Element, enclosing: Enclosing<'_>, scope: ActionScope) {
        match NodeKind::of(&element.name) {
            NodeKind::Menu => {
                let opened = self.open_menu(element, enclosing);
                self.visit_children(element, scope);
                if opened {
                    self.revert_to_parent();
                }
            }
            NodeKind::Item => {
                self.append_item(Item::Command {
                    label: element.attr("label").map(str::to_string),
                    command: None,
                });
                self.visit_children(element, scope.enter(&element.name));
            }
            NodeKind::Separator => {
                self.append_item(Item::Separator {
                    label: element.attr("label").map(str::to_string),
                });
                self.visit_children(element, scope.enter(&element.name));
            }
            NodeKind::Comment => {}
            NodeKind::Other => {
                let scope = scope.enter(&element.name);
                if scope.in_action() {
                    if let Some(command) = element.attr("name").and_then(builtin_action) {
                        trace!("builtin action -> {}", command);
                        self.set_command(command);
                    }
                }
                self.visit_children(element, scope);
            }
        }
    }

    fn visit_text(&mut self, text: &str, scope: ActionScope) {
        if scope.in_command() {
            self.set_command(text.trim());
        }
    }

    /// Handle a `<menu>` element; returns true when it opened a new tag
    fn open_menu(&mut self, element: &Element, enclosing: Enclosing<'_>) -> bool {
        match MenuNode::classify(element) {
            MenuNode::Submenu { label, id } => {
                self.open_tag(Some(label), id, enclosing);
                true
            }
            MenuNode::Pipe { command, label } => {
                self.append_item(Item::PipeMenu {
                    label: label.map(str::to_string),
                    command: command.to_string(),
                });
                false
            }
            MenuNode::Link { target } => {
                let label = self.model.tag_label(target).map(str::to_string);
                if label.is_none() {
                    debug!("checkout of '{}' has no label yet", target);
                }
                self.append_item(Item::Checkout {
                    label,
                    target: target.to_string(),
                });
                false
            }
            MenuNode::Empty => false,
        }
    }

    /// Create a tag and make it current. A tag with a parent and its own id also gets a
    /// checkout entry in the parent so the parent can open it.
    fn open_tag(&mut self, label: Option<&str>, id: Option<&str>, enclosing: Enclosing<'_>) {
        let parent = self.parent_tag(enclosing);
        let id = id.unwrap_or(self.model.root_id()).to_string();
        let label = label.map(str::to_string);

        debug!("tag '{}' ({})", id, label.as_deref().unwrap_or(""));
        let handle = self.model.add_tag(Tag::new(label.clone(), id.clone(), parent));
        self.current_tag = Some(handle);

        if let Some(parent) = parent {
            if id != self.model.root_id() {
                let index = self.model.push_item(parent, Item::Checkout { label, target: id });
                self.current_item = Some(ItemCursor { tag: parent, index });
            }
        }
    }

    fn parent_tag(&self, enclosing: Enclosing<'_>) -> Option<TagHandle> {
        match enclosing {
            Enclosing::Document => None,
            Enclosing::PipeMenuRoot => self.model.find_tag(self.model.root_id()),
            Enclosing::Element { id } => id.and_then(|id| self.model.find_tag(id)),
        }
    }

    fn revert_to_parent(&mut self) {
        if let Some(parent) = self
            .current_tag
            .and_then(|handle| self.model.tag(handle).parent)
        {
            self.current_tag = Some(parent);
        }
    }

    /// Append to the current tag, creating the root tag first if nothing is open yet
    fn append_item(&mut self, item: Item) {
        let tag = match self.current_tag {
            Some(tag) => tag,
            None => {
                self.open_tag(None, None, Enclosing::Document);
                match self.current_tag {
                    Some(tag) => tag,
                    None => return,
                }
            }
        };
        trace!("item {:?}", item);
        let index = self.model.push_item(tag, item);
        self.current_item = Some(ItemCursor { tag, index });
    }

    fn set_command(&mut self, command: &str) {
        if let Some(cursor) = self.current_item {
            if let Some(item) = self.model.item_mut(cursor.tag, cursor.index) {
                item.set_command(command);
            }
        }
    }
}
