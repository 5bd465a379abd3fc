use contracts::domain::a003_number_pack::aggregate::NumberPack;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

use crate::shared::list_session::ListRecord;
use crate::shared::list_utils::Searchable;

pub const PAGE_SIZE: usize = 20;

#[derive(Clone, Debug, Default)]
pub struct NumberPackListState {
    pub status_filter: String,
    pub category_filter: String,
    pub date_from: String,
    pub date_to: String,
    pub search: String,
    pub is_loaded: bool,
}

pub fn create_state() -> RwSignal<NumberPackListState> {
    RwSignal::new(NumberPackListState::default())
}

impl ListRecord for NumberPack {
    fn list_id(&self) -> String {
        self.id.as_string()
    }
}

impl Searchable for NumberPack {
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.numbers.iter().any(|n| n.contains(&needle))
    }
}
