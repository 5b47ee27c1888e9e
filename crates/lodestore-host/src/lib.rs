//! Host-game boundary: worlds, block entities, network nodes, and the
//! storage networks they belong to.
//!
//! Everything a grid session needs from the host lives behind this crate's
//! lookup surface. Resolution is handed an explicit [`HostWorlds`] context —
//! there is no ambient world registry — and every hop
//! (world → block entity → node → network) returns `Option` because any of
//! them can vanish between accesses (chunk unload, block removal).

mod network;
mod pos;
mod world;

pub use network::{
    CachedStack, Network, NetworkId, NetworkItemManager, StorageCache, StorageChannel,
};
pub use pos::{BlockPos, Player, PlayerId, WorldId};
pub use world::{BlockEntity, BlockEntityKind, HostWorld, HostWorlds, NetworkNode};
