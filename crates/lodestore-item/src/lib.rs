//! Item stacks and their attached persisted data.
//!
//! The host game attaches a key-value tag blob to every item stack it
//! persists. This crate models that boundary: [`DataTag`] is the blob,
//! [`ItemStack`] is the carrying stack. Higher layers read and write fixed
//! keys into the tag; the host owns actual disk persistence.

mod stack;
mod tag;

pub use stack::{ItemKind, ItemStack};
pub use tag::{DataTag, TagCodecError, TagValue};
