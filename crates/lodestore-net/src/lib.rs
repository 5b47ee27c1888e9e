//! Settings-sync wire contract: message kinds, fixed-order integer codec,
//! and the fire-and-forget channel the host networking layer drains.
//!
//! This crate knows nothing about sessions or worlds. It defines the
//! bit-exact payload of each settings-update message and the sink through
//! which a client-side grid pushes updates toward the server. Receipt-side
//! semantics (session lookup, validation, partial apply) live in
//! `lodestore-grid`.

mod channel;
mod messages;
mod wire;

pub use channel::{QueuedSink, SettingsSink, queued_sink};
pub use messages::{
    GridSettingsUpdate, MessageKind, SettingsUpdate, WirelessFluidGridSettingsUpdate,
    WirelessGridSettingsUpdate,
};
pub use wire::{PacketReader, PacketWriter, WireError};
