//! User-configured filters and tabs.
//!
//! A grid's filter list narrows what the view shows; tabs group filters and
//! are paged [`TABS_PER_PAGE`] at a time. The list is owned by the carrying
//! item (or block entity) and persisted into its data blob as postcard
//! bytes on every mutation.

use serde::{Deserialize, Serialize};

/// Tabs shown per page of the tab bar.
pub const TABS_PER_PAGE: i32 = 5;

/// A single stack filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridFilter {
    /// Host-registered stack id the filter matches.
    pub stack_id: u64,
    /// Match every stack from the same mod instead of the exact stack.
    pub match_mod: bool,
}

/// A named group of filters with an icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridTab {
    /// Display name.
    pub name: String,
    /// Stack id rendered as the tab icon.
    pub icon_stack_id: u64,
    /// Filters active while this tab is selected.
    pub filters: Vec<GridFilter>,
}

/// Errors from the filter-list binary round-trip.
#[derive(Debug, thiserror::Error)]
pub enum FilterCodecError {
    /// Postcard serialization failed.
    #[error("failed to encode filter list: {0}")]
    Encode(#[source] postcard::Error),
    /// Postcard deserialization failed.
    #[error("failed to decode filter list: {0}")]
    Decode(#[source] postcard::Error),
}

/// The ordered filters and tabs of one grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterList {
    /// Loose filters, active when no tab is selected.
    pub filters: Vec<GridFilter>,
    /// Tab groups.
    pub tabs: Vec<GridTab>,
}

impl FilterList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tabs.
    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// Serializes the list to compact bytes for tag embedding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, FilterCodecError> {
        postcard::to_allocvec(self).map_err(FilterCodecError::Encode)
    }

    /// Deserializes a list from bytes produced by
    /// [`to_bytes`](FilterList::to_bytes).
    pub fn from_bytes(data: &[u8]) -> Result<Self, FilterCodecError> {
        postcard::from_bytes(data).map_err(FilterCodecError::Decode)
    }
}

/// Last valid tab page index for `tab_count` tabs:
/// `floor(max(0, tab_count − 1) / TABS_PER_PAGE)`.
pub fn total_tab_pages(tab_count: usize) -> i32 {
    (tab_count.saturating_sub(1) / TABS_PER_PAGE as usize) as i32
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
