use crate::domain::common::{AggregateId, EntityMetadata};
use crate::enums::payment_method::PaymentMethod;
use crate::enums::payment_status::PaymentStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaymentId(pub Uuid);

impl PaymentId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for PaymentId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(PaymentId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Transaction record written by the storefront checkout; the admin UI
/// only reads (and occasionally prunes) these
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    /// Gateway payment identifier ("pay_...")
    pub payment_ref: String,
    /// Storefront order identifier ("order_...")
    pub order_ref: String,
    /// Buyer e-mail as entered at checkout
    pub email: String,
    /// Amount in minor currency units
    pub amount: i64,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    /// Human-readable label of the purchased item
    pub item_label: String,
    pub metadata: EntityMetadata,
}

impl Payment {
    pub fn new_for_insert(
        payment_ref: String,
        order_ref: String,
        email: String,
        amount: i64,
        method: PaymentMethod,
        status: PaymentStatus,
        item_label: String,
    ) -> Self {
        Self {
            id: PaymentId::new_v4(),
            payment_ref,
            order_ref,
            email,
            amount,
            method,
            status,
            item_label,
            metadata: EntityMetadata::new(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.payment_ref.trim().is_empty() {
            return Err("Payment reference must not be empty".into());
        }
        if self.amount <= 0 {
            return Err("Amount must be greater than zero".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.metadata.touch();
        self.metadata.increment_version();
    }
}
