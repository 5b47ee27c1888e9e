//! Storage networks at their boundary.
//!
//! The network's actual storage routing (insert/extract across providers,
//! prioritization, crafting) is outside this crate. What a grid session
//! consumes is modeled here: per-channel [`StorageCache`]s as the readable
//! view of network contents, a running flag, and the [`NetworkItemManager`]
//! that tracks which players hold an open wireless session.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::pos::PlayerId;

/// Storage network identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetworkId(pub u64);

// ---------------------------------------------------------------------------
// StorageCache
// ---------------------------------------------------------------------------

/// Which kind of stacks a cache tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageChannel {
    /// Item stacks.
    Item,
    /// Fluid stacks.
    Fluid,
}

/// One aggregated entry in a storage cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedStack {
    /// Host-registered stack identifier.
    pub id: u64,
    /// Total amount across the network.
    pub amount: u64,
}

/// Aggregated, revision-counted view of one channel of network contents.
///
/// Grid UIs render from this cache; the revision lets them detect staleness
/// without diffing. Mutations come from the network internals (out of
/// scope) and from tests.
#[derive(Debug, Clone)]
pub struct StorageCache {
    channel: StorageChannel,
    revision: u64,
    stacks: Vec<CachedStack>,
}

impl StorageCache {
    /// Creates an empty cache for the given channel.
    pub fn new(channel: StorageChannel) -> Self {
        Self {
            channel,
            revision: 0,
            stacks: Vec::new(),
        }
    }

    /// The channel this cache tracks.
    pub fn channel(&self) -> StorageChannel {
        self.channel
    }

    /// Monotonic revision counter, bumped on every mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The aggregated stacks.
    pub fn stacks(&self) -> &[CachedStack] {
        &self.stacks
    }

    /// Adds `amount` of `id`, merging with an existing entry.
    pub fn add(&mut self, id: u64, amount: u64) {
        match self.stacks.iter_mut().find(|s| s.id == id) {
            Some(entry) => entry.amount += amount,
            None => self.stacks.push(CachedStack { id, amount }),
        }
        self.revision += 1;
    }

    /// Removes up to `amount` of `id`, dropping the entry when it empties.
    /// Returns the amount actually removed.
    pub fn remove(&mut self, id: u64, amount: u64) -> u64 {
        let Some(idx) = self.stacks.iter().position(|s| s.id == id) else {
            return 0;
        };
        let entry = &mut self.stacks[idx];
        let removed = entry.amount.min(amount);
        entry.amount -= removed;
        if entry.amount == 0 {
            self.stacks.swap_remove(idx);
        }
        self.revision += 1;
        removed
    }

    /// Empties the cache.
    pub fn clear(&mut self) {
        self.stacks.clear();
        self.revision += 1;
    }
}

// ---------------------------------------------------------------------------
// NetworkItemManager
// ---------------------------------------------------------------------------

/// Tracks players that currently hold an open wireless session against the
/// network. Closing a session that was never opened is a no-op.
#[derive(Debug, Clone, Default)]
pub struct NetworkItemManager {
    open: HashSet<PlayerId>,
}

impl NetworkItemManager {
    /// Creates a manager with no open sessions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `player` as holding an open session.
    pub fn open(&mut self, player: PlayerId) {
        self.open.insert(player);
    }

    /// Releases `player`'s session. Returns `true` if one was open.
    pub fn close(&mut self, player: PlayerId) -> bool {
        self.open.remove(&player)
    }

    /// Returns `true` if `player` holds an open session.
    pub fn is_open(&self, player: PlayerId) -> bool {
        self.open.contains(&player)
    }

    /// Number of players with an open session.
    pub fn open_count(&self) -> usize {
        self.open.len()
    }
}

// ---------------------------------------------------------------------------
// Network
// ---------------------------------------------------------------------------

/// A live storage network.
#[derive(Debug, Clone)]
pub struct Network {
    id: NetworkId,
    running: bool,
    item_cache: StorageCache,
    fluid_cache: StorageCache,
    item_manager: NetworkItemManager,
}

impl Network {
    /// Creates a running network with empty caches.
    pub fn new(id: NetworkId) -> Self {
        Self {
            id,
            running: true,
            item_cache: StorageCache::new(StorageChannel::Item),
            fluid_cache: StorageCache::new(StorageChannel::Fluid),
            item_manager: NetworkItemManager::new(),
        }
    }

    /// Network identifier.
    pub fn id(&self) -> NetworkId {
        self.id
    }

    /// Returns `true` if the network is powered and running.
    pub fn can_run(&self) -> bool {
        self.running
    }

    /// Sets the running state (the energy model behind it is out of scope).
    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// The item-channel cache.
    pub fn item_cache(&self) -> &StorageCache {
        &self.item_cache
    }

    /// Mutable item-channel cache.
    pub fn item_cache_mut(&mut self) -> &mut StorageCache {
        &mut self.item_cache
    }

    /// The fluid-channel cache.
    pub fn fluid_cache(&self) -> &StorageCache {
        &self.fluid_cache
    }

    /// Mutable fluid-channel cache.
    pub fn fluid_cache_mut(&mut self) -> &mut StorageCache {
        &mut self.fluid_cache
    }

    /// Open wireless sessions against this network.
    pub fn item_manager(&self) -> &NetworkItemManager {
        &self.item_manager
    }

    /// Mutable session tracking.
    pub fn item_manager_mut(&mut self) -> &mut NetworkItemManager {
        &mut self.item_manager
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_add_merges_by_id() {
        let mut cache = StorageCache::new(StorageChannel::Item);
        cache.add(7, 10);
        cache.add(7, 5);
        cache.add(9, 1);
        assert_eq!(cache.stacks().len(), 2);
        let entry = cache.stacks().iter().find(|s| s.id == 7).unwrap();
        assert_eq!(entry.amount, 15);
    }

    #[test]
    fn test_cache_remove_clamps_and_drops_empty() {
        let mut cache = StorageCache::new(StorageChannel::Fluid);
        cache.add(3, 8);
        assert_eq!(cache.remove(3, 100), 8);
        assert!(cache.stacks().is_empty());
        assert_eq!(cache.remove(3, 1), 0);
    }

    #[test]
    fn test_cache_revision_bumps_on_every_mutation() {
        let mut cache = StorageCache::new(StorageChannel::Item);
        let r0 = cache.revision();
        cache.add(1, 1);
        let r1 = cache.revision();
        cache.remove(1, 1);
        let r2 = cache.revision();
        cache.clear();
        let r3 = cache.revision();
        assert!(r0 < r1 && r1 < r2 && r2 < r3);
    }

    #[test]
    fn test_item_manager_open_close() {
        let mut mgr = NetworkItemManager::new();
        let alice = PlayerId(1);
        let bob = PlayerId(2);

        mgr.open(alice);
        mgr.open(bob);
        assert!(mgr.is_open(alice));
        assert_eq!(mgr.open_count(), 2);

        assert!(mgr.close(alice));
        assert!(!mgr.is_open(alice));
        // Double close is a no-op.
        assert!(!mgr.close(alice));
        assert_eq!(mgr.open_count(), 1);
    }

    #[test]
    fn test_network_caches_are_per_channel() {
        let mut net = Network::new(NetworkId(1));
        net.item_cache_mut().add(1, 64);
        net.fluid_cache_mut().add(2, 1000);

        assert_eq!(net.item_cache().channel(), StorageChannel::Item);
        assert_eq!(net.fluid_cache().channel(), StorageChannel::Fluid);
        assert_eq!(net.item_cache().stacks().len(), 1);
        assert_eq!(net.fluid_cache().stacks().len(), 1);
        assert!(net.can_run());
    }
}
