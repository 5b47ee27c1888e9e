//! The client-to-server settings channel.
//!
//! Settings updates are fire-and-forget with at-most-once delivery: no
//! acknowledgment, no retry. A dropped message leaves client and server
//! settings divergent until the next change, which is acceptable for UI
//! preferences. The host's networking layer owns the transport; this crate
//! only hands it a queue to drain on its own worker context.

use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::messages::SettingsUpdate;

/// Destination for client-side settings updates.
///
/// Implementations must not block; `send` may silently drop the update
/// (lost connection simply stops delivery).
pub trait SettingsSink {
    /// Queues `update` for delivery to the authoritative side.
    fn send(&mut self, update: SettingsUpdate);
}

/// A [`SettingsSink`] backed by an unbounded channel. The host networking
/// layer holds the matching [`Receiver`] and drains it when it serializes
/// outbound traffic.
#[derive(Debug, Clone)]
pub struct QueuedSink {
    tx: Sender<SettingsUpdate>,
}

impl SettingsSink for QueuedSink {
    fn send(&mut self, update: SettingsUpdate) {
        // A disconnected receiver means the connection is gone; the update
        // is dropped without error, matching at-most-once semantics.
        if self.tx.send(update).is_err() {
            tracing::debug!(kind = ?update.kind(), "settings update dropped: channel closed");
        }
    }
}

/// Creates a connected sink/receiver pair.
pub fn queued_sink() -> (QueuedSink, Receiver<SettingsUpdate>) {
    let (tx, rx) = unbounded();
    (QueuedSink { tx }, rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::WirelessFluidGridSettingsUpdate;

    fn fluid_update(sorting_type: i32) -> SettingsUpdate {
        SettingsUpdate::WirelessFluidGrid(WirelessFluidGridSettingsUpdate {
            sorting_direction: 0,
            sorting_type,
            search_box_mode: 0,
            size: 1,
            tab_selected: -1,
            tab_page: 0,
        })
    }

    #[test]
    fn test_updates_arrive_in_send_order() {
        let (mut sink, rx) = queued_sink();
        sink.send(fluid_update(1));
        sink.send(fluid_update(2));
        sink.send(fluid_update(3));

        let received: Vec<_> = rx.try_iter().collect();
        assert_eq!(received.len(), 3);
        for (i, update) in received.iter().enumerate() {
            match update {
                SettingsUpdate::WirelessFluidGrid(m) => {
                    assert_eq!(m.sorting_type, i as i32 + 1);
                }
                other => panic!("unexpected update: {other:?}"),
            }
        }
    }

    #[test]
    fn test_send_after_receiver_drop_is_silent() {
        let (mut sink, rx) = queued_sink();
        drop(rx);
        // Must not panic or error.
        sink.send(fluid_update(1));
    }
}
