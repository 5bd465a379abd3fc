use contracts::domain::a004_payment::aggregate::Payment;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

use crate::shared::list_session::ListRecord;
use crate::shared::list_utils::Searchable;

pub const PAGE_SIZE: usize = 20;

#[derive(Clone, Debug, Default)]
pub struct PaymentListState {
    pub status_filter: String,
    pub method_filter: String,
    pub date_from: String,
    pub date_to: String,
    pub search: String,
    pub is_loaded: bool,
}

pub fn create_state() -> RwSignal<PaymentListState> {
    RwSignal::new(PaymentListState::default())
}

impl ListRecord for Payment {
    fn list_id(&self) -> String {
        self.id.as_string()
    }
}

impl Searchable for Payment {
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.to_lowercase();
        self.payment_ref.to_lowercase().contains(&needle)
            || self.order_ref.to_lowercase().contains(&needle)
            || self.email.to_lowercase().contains(&needle)
    }
}
