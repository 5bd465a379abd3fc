use contracts::domain::a002_vip_number::aggregate::VipNumber;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

use crate::shared::list_session::ListRecord;
use crate::shared::list_utils::Searchable;

pub const PAGE_SIZE: usize = 20;

/// Server-side filter set plus the local search string. Changing any of
/// the filters restarts the feed from page one; the search string only
/// narrows what is already loaded.
#[derive(Clone, Debug, Default)]
pub struct VipNumberListState {
    pub status_filter: String,
    pub category_filter: String,
    pub date_from: String,
    pub date_to: String,
    pub search: String,
    pub is_loaded: bool,
}

// Create state within component scope instead of thread-local
// This ensures state is properly disposed when component unmounts
pub fn create_state() -> RwSignal<VipNumberListState> {
    RwSignal::new(VipNumberListState::default())
}

impl ListRecord for VipNumber {
    fn list_id(&self) -> String {
        self.id.as_string()
    }
}

impl Searchable for VipNumber {
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.to_lowercase();
        self.number.contains(&needle)
            || self
                .highlight
                .as_deref()
                .map(|h| h.to_lowercase().contains(&needle))
                .unwrap_or(false)
    }
}
