//! Persisted grid data: the fixed tag keys and the tolerant readers and
//! write-through writers over a [`DataTag`].
//!
//! The same keys serve both carriers — a wireless item's stack tag and a
//! grid block entity's data blob. Readers never fail: a missing or invalid
//! entry falls back field by field, so a tag written by an older version
//! (or hand-edited into nonsense) still produces a usable session.

use lodestore_host::{BlockPos, WorldId};
use lodestore_item::DataTag;

use crate::filter::FilterList;
use crate::settings::{
    GridSettings, GridSize, GridTarget, SearchBoxMode, SortingDirection, SortingType, ViewType,
};

/// Tag keys for grid data.
pub mod keys {
    /// Raw view type (`Int`).
    pub const VIEW_TYPE: &str = "ViewType";
    /// Raw sorting type (`Int`).
    pub const SORTING_TYPE: &str = "SortingType";
    /// Raw sorting direction (`Int`).
    pub const SORTING_DIRECTION: &str = "SortingDirection";
    /// Raw search box mode (`Int`).
    pub const SEARCH_BOX_MODE: &str = "SearchBoxMode";
    /// Raw grid size (`Int`).
    pub const SIZE: &str = "Size";
    /// Selected tab index (`Int`).
    pub const TAB_SELECTED: &str = "TabSelected";
    /// Tab page index (`Int`).
    pub const TAB_PAGE: &str = "TabPage";
    /// Target world id (`Long`).
    pub const TARGET_WORLD: &str = "TargetWorld";
    /// Target block X (`Int`).
    pub const TARGET_X: &str = "TargetX";
    /// Target block Y (`Int`).
    pub const TARGET_Y: &str = "TargetY";
    /// Target block Z (`Int`).
    pub const TARGET_Z: &str = "TargetZ";
    /// Serialized [`FilterList`](crate::filter::FilterList) (`Bytes`).
    pub const FILTERS: &str = "Filters";
}

/// Reads settings from `tag`, falling back to `defaults` per field.
///
/// `tab_page` is floored at 0; `tab_selected` passes through unchanged
/// (−1 is the "none" sentinel).
pub fn read_settings(tag: Option<&DataTag>, defaults: &GridSettings) -> GridSettings {
    let Some(tag) = tag else { return *defaults };
    GridSettings {
        view_type: tag
            .int(keys::VIEW_TYPE)
            .and_then(ViewType::from_raw)
            .unwrap_or(defaults.view_type),
        sorting_type: tag
            .int(keys::SORTING_TYPE)
            .and_then(SortingType::from_raw)
            .unwrap_or(defaults.sorting_type),
        sorting_direction: tag
            .int(keys::SORTING_DIRECTION)
            .and_then(SortingDirection::from_raw)
            .unwrap_or(defaults.sorting_direction),
        search_box_mode: tag
            .int(keys::SEARCH_BOX_MODE)
            .and_then(SearchBoxMode::from_raw)
            .unwrap_or(defaults.search_box_mode),
        size: tag
            .int(keys::SIZE)
            .and_then(GridSize::from_raw)
            .unwrap_or(defaults.size),
        tab_selected: tag.int(keys::TAB_SELECTED).unwrap_or(defaults.tab_selected),
        tab_page: tag.int(keys::TAB_PAGE).unwrap_or(defaults.tab_page).max(0),
    }
}

/// Writes every settings field into `tag`.
pub fn write_settings(tag: &mut DataTag, settings: &GridSettings) {
    tag.put_int(keys::VIEW_TYPE, settings.view_type.as_raw());
    tag.put_int(keys::SORTING_TYPE, settings.sorting_type.as_raw());
    tag.put_int(keys::SORTING_DIRECTION, settings.sorting_direction.as_raw());
    tag.put_int(keys::SEARCH_BOX_MODE, settings.search_box_mode.as_raw());
    tag.put_int(keys::SIZE, settings.size.as_raw());
    tag.put_int(keys::TAB_SELECTED, settings.tab_selected);
    tag.put_int(keys::TAB_PAGE, settings.tab_page);
}

/// Reads the target identity, present only if all four keys are.
pub fn read_target(tag: Option<&DataTag>) -> Option<GridTarget> {
    let tag = tag?;
    let world = WorldId(tag.long(keys::TARGET_WORLD)? as u64);
    let x = tag.int(keys::TARGET_X)?;
    let y = tag.int(keys::TARGET_Y)?;
    let z = tag.int(keys::TARGET_Z)?;
    Some(GridTarget::new(world, BlockPos::new(x, y, z)))
}

/// Writes the target identity.
pub fn write_target(tag: &mut DataTag, target: GridTarget) {
    tag.put_long(keys::TARGET_WORLD, target.world.0 as i64);
    tag.put_int(keys::TARGET_X, target.pos.x);
    tag.put_int(keys::TARGET_Y, target.pos.y);
    tag.put_int(keys::TARGET_Z, target.pos.z);
}

/// Reads the filter list; missing or corrupt data reads as empty.
pub fn read_filters(tag: Option<&DataTag>) -> FilterList {
    let Some(bytes) = tag.and_then(|t| t.bytes(keys::FILTERS)) else {
        return FilterList::new();
    };
    match FilterList::from_bytes(bytes) {
        Ok(list) => list,
        Err(err) => {
            tracing::warn!(%err, "discarding corrupt filter list");
            FilterList::new()
        }
    }
}

/// Serializes the filter list into `tag`.
pub fn write_filters(tag: &mut DataTag, filters: &FilterList) {
    match filters.to_bytes() {
        Ok(bytes) => tag.put_bytes(keys::FILTERS, bytes),
        Err(err) => tracing::warn!(%err, "filter list not persisted"),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
