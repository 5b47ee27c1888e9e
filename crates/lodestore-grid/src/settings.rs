//! Grid view settings and their wire discriminants.
//!
//! Every setting travels as a raw `i32` on the wire and in persisted tags;
//! the enums here own the mapping. `from_raw` doubles as the validity
//! predicate used at every boundary: an out-of-range raw value reads as
//! `None` and the caller keeps its prior value.

use lodestore_config::GridDefaultsConfig;
use lodestore_host::{BlockPos, WorldId};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Setting enums
// ---------------------------------------------------------------------------

/// Which stacks the grid view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewType {
    /// Every stack in the network.
    All,
    /// Only stacks without a crafting recipe.
    NonCraftables,
    /// Only craftable stacks.
    Craftables,
}

/// Sort key for the grid view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortingType {
    /// By stored amount.
    Quantity,
    /// By display name.
    Name,
    /// By registry id.
    Id,
    /// By last modification time.
    LastModified,
}

/// Sort direction for the grid view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortingDirection {
    /// Ascending.
    Ascending,
    /// Descending.
    Descending,
}

/// Behavior of the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchBoxMode {
    /// Plain text search.
    Normal,
    /// Plain search, focused when the screen opens.
    NormalAutoselected,
    /// Query synchronized with the host's recipe viewer.
    Synchronized,
    /// Synchronized and focused when the screen opens.
    SynchronizedAutoselected,
}

/// On-screen size of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridSize {
    /// Three rows.
    Small,
    /// Five rows.
    Medium,
    /// Eight rows.
    Large,
}

macro_rules! raw_discriminants {
    ($ty:ty { $($variant:ident = $raw:literal),+ $(,)? }) => {
        impl $ty {
            /// Maps a raw wire value to the enum; `None` for out-of-range
            /// values.
            pub fn from_raw(raw: i32) -> Option<Self> {
                match raw {
                    $($raw => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// The raw wire value of this variant.
            pub fn as_raw(self) -> i32 {
                match self {
                    $(Self::$variant => $raw,)+
                }
            }
        }
    };
}

raw_discriminants!(ViewType { All = 0, NonCraftables = 1, Craftables = 2 });
raw_discriminants!(SortingType { Quantity = 0, Name = 1, Id = 2, LastModified = 3 });
raw_discriminants!(SortingDirection { Ascending = 0, Descending = 1 });
raw_discriminants!(SearchBoxMode {
    Normal = 0,
    NormalAutoselected = 1,
    Synchronized = 2,
    SynchronizedAutoselected = 3,
});
raw_discriminants!(GridSize { Small = 0, Medium = 1, Large = 2 });

// ---------------------------------------------------------------------------
// GridSettings
// ---------------------------------------------------------------------------

/// The mutable, user-facing settings of one grid session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSettings {
    /// Which stacks are shown.
    pub view_type: ViewType,
    /// Sort key.
    pub sorting_type: SortingType,
    /// Sort direction.
    pub sorting_direction: SortingDirection,
    /// Search box behavior.
    pub search_box_mode: SearchBoxMode,
    /// Grid size.
    pub size: GridSize,
    /// Selected tab index, −1 for none.
    pub tab_selected: i32,
    /// Current tab page, ≥ 0.
    pub tab_page: i32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            view_type: ViewType::All,
            sorting_type: SortingType::Quantity,
            sorting_direction: SortingDirection::Descending,
            search_box_mode: SearchBoxMode::Normal,
            size: GridSize::Medium,
            tab_selected: -1,
            tab_page: 0,
        }
    }
}

impl GridSettings {
    /// Builds the defaults for a freshly-configured grid from the mod
    /// config. Out-of-range raw values in the config degrade to the
    /// built-in defaults field by field.
    pub fn from_config(cfg: &GridDefaultsConfig) -> Self {
        let built_in = Self::default();
        Self {
            view_type: ViewType::from_raw(cfg.view_type).unwrap_or(built_in.view_type),
            sorting_type: SortingType::from_raw(cfg.sorting_type).unwrap_or(built_in.sorting_type),
            sorting_direction: SortingDirection::from_raw(cfg.sorting_direction)
                .unwrap_or(built_in.sorting_direction),
            search_box_mode: SearchBoxMode::from_raw(cfg.search_box_mode)
                .unwrap_or(built_in.search_box_mode),
            size: GridSize::from_raw(cfg.size).unwrap_or(built_in.size),
            tab_selected: -1,
            tab_page: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// GridTarget
// ---------------------------------------------------------------------------

/// Identity of the remote block a session binds to. Wireless items persist
/// this alongside their settings; block grids target their own position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridTarget {
    /// World the target block lives in.
    pub world: WorldId,
    /// Position of the target block.
    pub pos: BlockPos,
}

impl GridTarget {
    /// Creates a target identity.
    pub fn new(world: WorldId, pos: BlockPos) -> Self {
        Self { world, pos }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_values_roundtrip() {
        for raw in 0..=2 {
            assert_eq!(ViewType::from_raw(raw).unwrap().as_raw(), raw);
            assert_eq!(GridSize::from_raw(raw).unwrap().as_raw(), raw);
        }
        for raw in 0..=3 {
            assert_eq!(SortingType::from_raw(raw).unwrap().as_raw(), raw);
            assert_eq!(SearchBoxMode::from_raw(raw).unwrap().as_raw(), raw);
        }
        for raw in 0..=1 {
            assert_eq!(SortingDirection::from_raw(raw).unwrap().as_raw(), raw);
        }
    }

    #[test]
    fn test_out_of_range_raw_is_rejected() {
        assert_eq!(ViewType::from_raw(3), None);
        assert_eq!(SortingType::from_raw(999), None);
        assert_eq!(SortingDirection::from_raw(-1), None);
        assert_eq!(SearchBoxMode::from_raw(4), None);
        assert_eq!(GridSize::from_raw(i32::MIN), None);
    }

    #[test]
    fn test_defaults() {
        let s = GridSettings::default();
        assert_eq!(s.view_type, ViewType::All);
        assert_eq!(s.sorting_direction, SortingDirection::Descending);
        assert_eq!(s.tab_selected, -1);
        assert_eq!(s.tab_page, 0);
    }

    #[test]
    fn test_from_config_takes_valid_fields() {
        let cfg = GridDefaultsConfig {
            view_type: 2,
            sorting_type: 1,
            sorting_direction: 0,
            search_box_mode: 3,
            size: 0,
        };
        let s = GridSettings::from_config(&cfg);
        assert_eq!(s.view_type, ViewType::Craftables);
        assert_eq!(s.sorting_type, SortingType::Name);
        assert_eq!(s.sorting_direction, SortingDirection::Ascending);
        assert_eq!(s.search_box_mode, SearchBoxMode::SynchronizedAutoselected);
        assert_eq!(s.size, GridSize::Small);
    }

    #[test]
    fn test_from_config_invalid_fields_degrade_per_field() {
        let cfg = GridDefaultsConfig {
            view_type: 99,
            sorting_type: 3,
            sorting_direction: -5,
            search_box_mode: 0,
            size: 42,
        };
        let s = GridSettings::from_config(&cfg);
        let built_in = GridSettings::default();
        assert_eq!(s.view_type, built_in.view_type);
        assert_eq!(s.sorting_type, SortingType::LastModified);
        assert_eq!(s.sorting_direction, built_in.sorting_direction);
        assert_eq!(s.size, built_in.size);
    }
}
