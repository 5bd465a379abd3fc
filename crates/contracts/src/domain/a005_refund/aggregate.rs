use crate::domain::common::{AggregateId, EntityMetadata};
use crate::enums::refund_status::RefundStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RefundId(pub Uuid);

impl RefundId {
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

impl AggregateId for RefundId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(RefundId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Refund raised against a captured payment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Refund {
    pub id: RefundId,
    /// Gateway refund identifier ("rfnd_...")
    pub refund_ref: String,
    pub payment_ref: String,
    pub order_ref: String,
    pub email: String,
    /// Amount refunded, minor currency units
    pub amount: i64,
    pub status: RefundStatus,
    pub reason: Option<String>,
    pub metadata: EntityMetadata,
}

impl Refund {
    pub fn new_for_insert(
        refund_ref: String,
        payment_ref: String,
        order_ref: String,
        email: String,
        amount: i64,
        status: RefundStatus,
        reason: Option<String>,
    ) -> Self {
        Self {
            id: RefundId::new_v4(),
            refund_ref,
            payment_ref,
            order_ref,
            email,
            amount,
            status,
            reason,
            metadata: EntityMetadata::new(),
        }
    }

    pub fn update(&mut self, dto: &RefundDto) {
        self.refund_ref = dto.refund_ref.clone();
        self.payment_ref = dto.payment_ref.clone();
        self.order_ref = dto.order_ref.clone();
        self.email = dto.email.clone();
        self.amount = dto.amount;
        self.status = dto.status;
        self.reason = dto.reason.clone();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.payment_ref.trim().is_empty() {
            return Err("Payment reference must not be empty".into());
        }
        if self.amount <= 0 {
            return Err("Amount must be greater than zero".into());
        }
        if !self.email.trim().is_empty() && !self.email.contains('@') {
            return Err("E-mail address is malformed".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.metadata.touch();
        self.metadata.increment_version();
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefundDto {
    pub id: Option<String>,
    pub refund_ref: String,
    pub payment_ref: String,
    pub order_ref: String,
    pub email: String,
    pub amount: i64,
    pub status: RefundStatus,
    pub reason: Option<String>,
}

impl Default for RefundDto {
    fn default() -> Self {
        Self {
            id: None,
            refund_ref: String::new(),
            payment_ref: String::new(),
            order_ref: String::new(),
            email: String::new(),
            amount: 0,
            status: RefundStatus::Pending,
            reason: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_needs_payment_ref_and_positive_amount() {
        let refund = Refund::new_for_insert(
            "rfnd_001".into(),
            "pay_001".into(),
            "order_001".into(),
            "buyer@example.com".into(),
            150_000,
            RefundStatus::Pending,
            None,
        );
        assert!(refund.validate().is_ok());

        let mut bad = refund.clone();
        bad.payment_ref = "  ".into();
        assert!(bad.validate().is_err());

        let mut bad = refund.clone();
        bad.amount = 0;
        assert!(bad.validate().is_err());

        let mut bad = refund;
        bad.email = "not-an-email".into();
        assert!(bad.validate().is_err());
    }
}
