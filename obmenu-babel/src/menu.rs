//! Menu model
//!
//!     The semantic structure recovered from an Openbox menu: a flat list of tags (menu
//!     sections), each owning an ordered list of items. Tags live in an arena owned by
//!     [`MenuModel`] and refer to their parent through a [`TagHandle`], so the parent link is
//!     a plain index rather than an owning pointer.
//!
//!     Tags are kept in creation order, which is document order. The model is filled in by
//!     the Openbox interpreter and only read afterwards.

/// Index of a tag inside its [`MenuModel`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagHandle(usize);

/// A named menu section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Display name; absent for the synthetic pipe-menu root
    pub label: Option<String>,
    pub id: String,
    pub parent: Option<TagHandle>,
    pub items: Vec<Item>,
}

impl Tag {
    pub fn new(label: Option<String>, id: impl Into<String>, parent: Option<TagHandle>) -> Self {
        Self {
            label,
            id: id.into(),
            parent,
            items: Vec::new(),
        }
    }
}

/// One entry of a tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    /// Runs `command` when activated
    Command {
        label: Option<String>,
        command: Option<String>,
    },
    /// Opens the tag whose id is `target` in place
    Checkout {
        label: Option<String>,
        target: String,
    },
    /// Runs `command` when opened and interprets its output as another Openbox menu
    PipeMenu {
        label: Option<String>,
        command: String,
    },
    Separator { label: Option<String> },
}

impl Item {
    pub fn label(&self) -> Option<&str> {
        match self {
            Item::Command { label, .. }
            | Item::Checkout { label, .. }
            | Item::PipeMenu { label, .. }
            | Item::Separator { label } => label.as_deref(),
        }
    }

    /// Overwrite the field that carries this item's command.
    ///
    /// A command node always lands on whatever item is current, so a checkout gets a new
    /// target and a pipe-menu a new command. Separators have nothing to run.
    pub fn set_command(&mut self, value: impl Into<String>) {
        match self {
            Item::Command { command, .. } => *command = Some(value.into()),
            Item::Checkout { target, .. } => *target = value.into(),
            Item::PipeMenu { command, .. } => *command = value.into(),
            Item::Separator { .. } => {}
        }
    }
}

/// All tags of a menu plus the identifier of its root tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuModel {
    root_id: String,
    tags: Vec<Tag>,
}

impl MenuModel {
    pub fn new(root_id: impl Into<String>) -> Self {
        Self {
            root_id: root_id.into(),
            tags: Vec::new(),
        }
    }

    /// Identifier of the tag printed first
    pub fn root_id(&self) -> &str {
        &self.root_id
    }

    pub fn add_tag(&mut self, tag: Tag) -> TagHandle {
        self.tags.push(tag);
        TagHandle(self.tags.len() - 1)
    }

    pub fn tag(&self, handle: TagHandle) -> &Tag {
        &self.tags[handle.0]
    }

    /// Tags in creation order
    pub fn tags(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter()
    }

    /// First tag registered under `id`
    pub fn find_tag(&self, id: &str) -> Option<TagHandle> {
        self.tags.iter().position(|tag| tag.id == id).map(TagHandle)
    }

    /// Label of the first tag registered under `id`, if that tag exists and has one
    pub fn tag_label(&self, id: &str) -> Option<&str> {
        self.find_tag(id)
            .and_then(|handle| self.tag(handle).label.as_deref())
    }

    /// Append `item` to a tag and return its position in the tag's item list
    pub fn push_item(&mut self, handle: TagHandle, item: Item) -> usize {
        let items = &mut self.tags[handle.0].items;
        items.push(item);
        items.len() - 1
    }

    pub fn item_mut(&mut self, handle: TagHandle, index: usize) -> Option<&mut Item> {
        self.tags
            .get_mut(handle.0)
            .and_then(|tag| tag.items.get_mut(index))
    }
}
