//! Settings-update messages.
//!
//! One message struct per grid session kind, each a fixed-order tuple of
//! raw `i32` fields. The field order below **is** the wire contract: the
//! sender and receiver must agree exactly, and there is no version field —
//! a schema change means a new [`MessageKind`].
//!
//! Fields are carried raw (not as enums) because validation happens on the
//! receiving side, field by field; the wire layer must be able to transport
//! out-of-range values unchanged.

use crate::wire::{PacketReader, PacketWriter, WireError};

// ---------------------------------------------------------------------------
// MessageKind
// ---------------------------------------------------------------------------

/// Stable message identifiers for registration with the host's packet
/// dispatch layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// Block-anchored grid settings (7 fields).
    GridSettings,
    /// Wireless item grid settings (7 fields).
    WirelessGridSettings,
    /// Wireless fluid grid settings (6 fields, no view type).
    WirelessFluidGridSettings,
}

impl MessageKind {
    /// The id this message registers under.
    pub fn id(self) -> u8 {
        match self {
            Self::GridSettings => 0x10,
            Self::WirelessGridSettings => 0x11,
            Self::WirelessFluidGridSettings => 0x12,
        }
    }

    /// Reverse lookup for host-side dispatch.
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0x10 => Some(Self::GridSettings),
            0x11 => Some(Self::WirelessGridSettings),
            0x12 => Some(Self::WirelessFluidGridSettings),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Message structs
// ---------------------------------------------------------------------------

/// Settings update for a block-anchored grid.
///
/// Wire order: view_type, sorting_direction, sorting_type, search_box_mode,
/// size, tab_selected, tab_page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSettingsUpdate {
    /// Raw view type.
    pub view_type: i32,
    /// Raw sorting direction.
    pub sorting_direction: i32,
    /// Raw sorting type.
    pub sorting_type: i32,
    /// Raw search box mode.
    pub search_box_mode: i32,
    /// Raw grid size.
    pub size: i32,
    /// Selected tab index, −1 for none.
    pub tab_selected: i32,
    /// Tab page index.
    pub tab_page: i32,
}

/// Settings update for a wireless item grid. Same 7-field layout as
/// [`GridSettingsUpdate`] but a distinct message kind, because the receiver
/// applies it to a different session kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WirelessGridSettingsUpdate {
    /// Raw view type.
    pub view_type: i32,
    /// Raw sorting direction.
    pub sorting_direction: i32,
    /// Raw sorting type.
    pub sorting_type: i32,
    /// Raw search box mode.
    pub search_box_mode: i32,
    /// Raw grid size.
    pub size: i32,
    /// Selected tab index, −1 for none.
    pub tab_selected: i32,
    /// Tab page index.
    pub tab_page: i32,
}

/// Settings update for a wireless fluid grid.
///
/// Wire order: sorting_direction, sorting_type, search_box_mode, size,
/// tab_selected, tab_page. Fluid grids have no view type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WirelessFluidGridSettingsUpdate {
    /// Raw sorting direction.
    pub sorting_direction: i32,
    /// Raw sorting type.
    pub sorting_type: i32,
    /// Raw search box mode.
    pub search_box_mode: i32,
    /// Raw grid size.
    pub size: i32,
    /// Selected tab index, −1 for none.
    pub tab_selected: i32,
    /// Tab page index.
    pub tab_page: i32,
}

impl GridSettingsUpdate {
    /// Encodes the 7-field tuple in wire order.
    pub fn encode(&self, w: &mut PacketWriter) {
        w.write_i32(self.view_type);
        w.write_i32(self.sorting_direction);
        w.write_i32(self.sorting_type);
        w.write_i32(self.search_box_mode);
        w.write_i32(self.size);
        w.write_i32(self.tab_selected);
        w.write_i32(self.tab_page);
    }

    /// Decodes the 7-field tuple in wire order.
    pub fn decode(r: &mut PacketReader<'_>) -> Result<Self, WireError> {
        Ok(Self {
            view_type: r.read_i32()?,
            sorting_direction: r.read_i32()?,
            sorting_type: r.read_i32()?,
            search_box_mode: r.read_i32()?,
            size: r.read_i32()?,
            tab_selected: r.read_i32()?,
            tab_page: r.read_i32()?,
        })
    }
}

impl WirelessGridSettingsUpdate {
    /// Encodes the 7-field tuple in wire order.
    pub fn encode(&self, w: &mut PacketWriter) {
        w.write_i32(self.view_type);
        w.write_i32(self.sorting_direction);
        w.write_i32(self.sorting_type);
        w.write_i32(self.search_box_mode);
        w.write_i32(self.size);
        w.write_i32(self.tab_selected);
        w.write_i32(self.tab_page);
    }

    /// Decodes the 7-field tuple in wire order.
    pub fn decode(r: &mut PacketReader<'_>) -> Result<Self, WireError> {
        Ok(Self {
            view_type: r.read_i32()?,
            sorting_direction: r.read_i32()?,
            sorting_type: r.read_i32()?,
            search_box_mode: r.read_i32()?,
            size: r.read_i32()?,
            tab_selected: r.read_i32()?,
            tab_page: r.read_i32()?,
        })
    }
}

impl WirelessFluidGridSettingsUpdate {
    /// Encodes the 6-field tuple in wire order.
    pub fn encode(&self, w: &mut PacketWriter) {
        w.write_i32(self.sorting_direction);
        w.write_i32(self.sorting_type);
        w.write_i32(self.search_box_mode);
        w.write_i32(self.size);
        w.write_i32(self.tab_selected);
        w.write_i32(self.tab_page);
    }

    /// Decodes the 6-field tuple in wire order.
    pub fn decode(r: &mut PacketReader<'_>) -> Result<Self, WireError> {
        Ok(Self {
            sorting_direction: r.read_i32()?,
            sorting_type: r.read_i32()?,
            search_box_mode: r.read_i32()?,
            size: r.read_i32()?,
            tab_selected: r.read_i32()?,
            tab_page: r.read_i32()?,
        })
    }
}

// ---------------------------------------------------------------------------
// SettingsUpdate
// ---------------------------------------------------------------------------

/// Any settings-update message, tagged by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsUpdate {
    /// Block-anchored grid.
    Grid(GridSettingsUpdate),
    /// Wireless item grid.
    WirelessGrid(WirelessGridSettingsUpdate),
    /// Wireless fluid grid.
    WirelessFluidGrid(WirelessFluidGridSettingsUpdate),
}

impl SettingsUpdate {
    /// The message kind this update travels as.
    pub fn kind(&self) -> MessageKind {
        match self {
            Self::Grid(_) => MessageKind::GridSettings,
            Self::WirelessGrid(_) => MessageKind::WirelessGridSettings,
            Self::WirelessFluidGrid(_) => MessageKind::WirelessFluidGridSettings,
        }
    }

    /// Encodes the payload tuple for this update's kind.
    pub fn encode_payload(&self) -> Vec<u8> {
        let mut w = PacketWriter::new();
        match self {
            Self::Grid(m) => m.encode(&mut w),
            Self::WirelessGrid(m) => m.encode(&mut w),
            Self::WirelessFluidGrid(m) => m.encode(&mut w),
        }
        w.into_bytes()
    }

    /// Decodes a payload previously routed by `kind`.
    pub fn decode_payload(kind: MessageKind, data: &[u8]) -> Result<Self, WireError> {
        let mut r = PacketReader::new(data);
        Ok(match kind {
            MessageKind::GridSettings => Self::Grid(GridSettingsUpdate::decode(&mut r)?),
            MessageKind::WirelessGridSettings => {
                Self::WirelessGrid(WirelessGridSettingsUpdate::decode(&mut r)?)
            }
            MessageKind::WirelessFluidGridSettings => {
                Self::WirelessFluidGrid(WirelessFluidGridSettingsUpdate::decode(&mut r)?)
            }
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wireless_grid_roundtrip() {
        let msg = WirelessGridSettingsUpdate {
            view_type: 2,
            sorting_direction: 1,
            sorting_type: 3,
            search_box_mode: 0,
            size: 1,
            tab_selected: -1,
            tab_page: 4,
        };
        let update = SettingsUpdate::WirelessGrid(msg);
        let bytes = update.encode_payload();
        assert_eq!(bytes.len(), 7 * 4);

        let decoded =
            SettingsUpdate::decode_payload(MessageKind::WirelessGridSettings, &bytes).unwrap();
        assert_eq!(decoded, update);
    }

    #[test]
    fn test_wireless_fluid_grid_roundtrip() {
        let msg = WirelessFluidGridSettingsUpdate {
            sorting_direction: 1,
            sorting_type: 2,
            search_box_mode: 0,
            size: 1,
            tab_selected: -1,
            tab_page: 0,
        };
        let update = SettingsUpdate::WirelessFluidGrid(msg);
        let bytes = update.encode_payload();
        assert_eq!(bytes.len(), 6 * 4);

        let decoded =
            SettingsUpdate::decode_payload(MessageKind::WirelessFluidGridSettings, &bytes).unwrap();
        assert_eq!(decoded, update);
    }

    #[test]
    fn test_grid_roundtrip() {
        let msg = GridSettingsUpdate {
            view_type: 0,
            sorting_direction: 0,
            sorting_type: 1,
            search_box_mode: 3,
            size: 2,
            tab_selected: 7,
            tab_page: 1,
        };
        let update = SettingsUpdate::Grid(msg);
        let decoded =
            SettingsUpdate::decode_payload(MessageKind::GridSettings, &update.encode_payload())
                .unwrap();
        assert_eq!(decoded, update);
    }

    #[test]
    fn test_field_order_on_the_wire() {
        // The first field of the 6-int fluid message is sorting_direction.
        let msg = WirelessFluidGridSettingsUpdate {
            sorting_direction: 0x01020304,
            sorting_type: 0,
            search_box_mode: 0,
            size: 0,
            tab_selected: 0,
            tab_page: 0,
        };
        let bytes = SettingsUpdate::WirelessFluidGrid(msg).encode_payload();
        assert_eq!(&bytes[0..4], &[0x01, 0x02, 0x03, 0x04]);

        // The first field of the 7-int wireless message is view_type.
        let msg = WirelessGridSettingsUpdate {
            view_type: 0x0A0B0C0D,
            sorting_direction: 0,
            sorting_type: 0,
            search_box_mode: 0,
            size: 0,
            tab_selected: 0,
            tab_page: 0,
        };
        let bytes = SettingsUpdate::WirelessGrid(msg).encode_payload();
        assert_eq!(&bytes[0..4], &[0x0A, 0x0B, 0x0C, 0x0D]);
    }

    #[test]
    fn test_out_of_range_values_survive_transport() {
        // The wire layer must carry invalid discriminants unchanged; the
        // receiver is the one that validates.
        let msg = WirelessFluidGridSettingsUpdate {
            sorting_direction: 999,
            sorting_type: -42,
            search_box_mode: i32::MAX,
            size: i32::MIN,
            tab_selected: -1,
            tab_page: 0,
        };
        let update = SettingsUpdate::WirelessFluidGrid(msg);
        let decoded = SettingsUpdate::decode_payload(
            MessageKind::WirelessFluidGridSettings,
            &update.encode_payload(),
        )
        .unwrap();
        assert_eq!(decoded, update);
    }

    #[test]
    fn test_truncated_payload_is_an_error() {
        let msg = WirelessGridSettingsUpdate {
            view_type: 0,
            sorting_direction: 0,
            sorting_type: 0,
            search_box_mode: 0,
            size: 0,
            tab_selected: 0,
            tab_page: 0,
        };
        let mut bytes = SettingsUpdate::WirelessGrid(msg).encode_payload();
        bytes.truncate(bytes.len() - 1);
        let result = SettingsUpdate::decode_payload(MessageKind::WirelessGridSettings, &bytes);
        assert!(result.is_err());
    }

    #[test]
    fn test_message_kind_ids_are_stable() {
        assert_eq!(MessageKind::GridSettings.id(), 0x10);
        assert_eq!(MessageKind::WirelessGridSettings.id(), 0x11);
        assert_eq!(MessageKind::WirelessFluidGridSettings.id(), 0x12);
        for kind in [
            MessageKind::GridSettings,
            MessageKind::WirelessGridSettings,
            MessageKind::WirelessFluidGridSettings,
        ] {
            assert_eq!(MessageKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(MessageKind::from_id(0xFF), None);
    }
}
