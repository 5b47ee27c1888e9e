//! Item stacks as seen by the storage mod.
//!
//! Only the parts of the host's item model that the grid layer touches are
//! represented: an item kind and the optional attached [`DataTag`].

use serde::{Deserialize, Serialize};

use crate::tag::DataTag;

/// Host-registered item kind identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemKind(pub u16);

/// An item stack carrying an optional persisted data tag.
///
/// The tag is created lazily on first write, mirroring the host's behavior
/// of leaving untouched stacks tagless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStack {
    /// Item kind.
    pub kind: ItemKind,
    /// Attached persisted data, if any writes have happened.
    pub tag: Option<DataTag>,
}

impl ItemStack {
    /// Creates a tagless stack of the given kind.
    pub fn new(kind: ItemKind) -> Self {
        Self { kind, tag: None }
    }

    /// Returns `true` if the stack carries a tag.
    pub fn has_tag(&self) -> bool {
        self.tag.is_some()
    }

    /// Read-only view of the tag, if present.
    pub fn tag(&self) -> Option<&DataTag> {
        self.tag.as_ref()
    }

    /// Mutable tag access, creating an empty tag on first write.
    pub fn tag_or_insert(&mut self) -> &mut DataTag {
        self.tag.get_or_insert_with(DataTag::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stack_is_tagless() {
        let stack = ItemStack::new(ItemKind(3));
        assert!(!stack.has_tag());
        assert_eq!(stack.tag(), None);
    }

    #[test]
    fn test_tag_created_on_first_write() {
        let mut stack = ItemStack::new(ItemKind(3));
        stack.tag_or_insert().put_int("TabSelected", -1);
        assert!(stack.has_tag());
        assert_eq!(stack.tag().unwrap().int("TabSelected"), Some(-1));
    }

    #[test]
    fn test_tag_or_insert_preserves_existing_entries() {
        let mut stack = ItemStack::new(ItemKind(1));
        stack.tag_or_insert().put_int("Size", 2);
        stack.tag_or_insert().put_int("TabPage", 0);
        let tag = stack.tag().unwrap();
        assert_eq!(tag.int("Size"), Some(2));
        assert_eq!(tag.int("TabPage"), Some(0));
    }
}
