use contracts::domain::a005_refund::aggregate::Refund;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

use crate::shared::list_session::ListRecord;
use crate::shared::list_utils::Searchable;

pub const PAGE_SIZE: usize = 20;

#[derive(Clone, Debug, Default)]
pub struct RefundListState {
    pub status_filter: String,
    pub date_from: String,
    pub date_to: String,
    pub search: String,
    pub is_loaded: bool,
}

pub fn create_state() -> RwSignal<RefundListState> {
    RwSignal::new(RefundListState::default())
}

impl ListRecord for Refund {
    fn list_id(&self) -> String {
        self.id.as_string()
    }
}

impl Searchable for Refund {
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.to_lowercase();
        self.refund_ref.to_lowercase().contains(&needle)
            || self.payment_ref.to_lowercase().contains(&needle)
            || self.order_ref.to_lowercase().contains(&needle)
            || self.email.to_lowercase().contains(&needle)
    }
}
