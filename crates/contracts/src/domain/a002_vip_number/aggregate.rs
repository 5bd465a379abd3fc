use crate::domain::common::{AggregateId, EntityMetadata};
use crate::enums::vip_number_status::VipNumberStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VipNumberId(pub Uuid);

impl VipNumberId {
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

impl AggregateId for VipNumberId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(VipNumberId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Strip everything but digits from a phone number as entered.
/// Both the pre-save duplicate probe and the write-boundary uniqueness
/// check compare normalized strings, so "98765 43210" and "9876543210"
/// are the same number.
pub fn normalize_number(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// A single VIP phone number listed for sale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VipNumber {
    pub id: VipNumberId,
    /// Normalized digit string; unique among non-deleted records
    pub number: String,
    /// Price in minor currency units
    pub price: i64,
    pub status: VipNumberStatus,
    pub category_slug: Option<String>,
    /// Optional storefront highlight line ("Ends in 7777")
    pub highlight: Option<String>,
    pub comment: Option<String>,
    pub metadata: EntityMetadata,
}

impl VipNumber {
    pub fn new_for_insert(
        number: String,
        price: i64,
        status: VipNumberStatus,
        category_slug: Option<String>,
        highlight: Option<String>,
        comment: Option<String>,
    ) -> Self {
        Self {
            id: VipNumberId::new_v4(),
            number: normalize_number(&number),
            price,
            status,
            category_slug,
            highlight,
            comment,
            metadata: EntityMetadata::new(),
        }
    }

    pub fn update(&mut self, dto: &VipNumberDto) {
        self.number = normalize_number(&dto.number);
        self.price = dto.price;
        self.status = dto.status;
        self.category_slug = dto.category_slug.clone();
        self.highlight = dto.highlight.clone();
        self.comment = dto.comment.clone();
    }

    pub fn validate(&self) -> Result<(), String> {
        let digits = self.number.len();
        if digits == 0 {
            return Err("Number must not be empty".into());
        }
        if !(7..=15).contains(&digits) {
            return Err("Number must contain between 7 and 15 digits".into());
        }
        if self.price <= 0 {
            return Err("Price must be greater than zero".into());
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
pub struct VipNumberDto {
    pub id: Option<String>,
    pub number: String,
    pub price: i64,
    pub status: VipNumberStatus,
    pub category_slug: Option<String>,
    pub highlight: Option<String>,
    pub comment: Option<String>,
}

impl Default for VipNumberDto {
    fn default() -> Self {
        Self {
            id: None,
            number: String::new(),
            price: 0,
            status: VipNumberStatus::Available,
            category_slug: None,
            highlight: None,
            comment: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_keeps_digits_only() {
        assert_eq!(normalize_number("98765 43210"), "9876543210");
        assert_eq!(normalize_number("+91-98765-43210"), "919876543210");
        assert_eq!(normalize_number("abc"), "");
    }

    #[test]
    fn validate_checks_digit_count_and_price() {
        let number = VipNumber::new_for_insert(
            "9876543210".into(),
            150_000,
            VipNumberStatus::Available,
            None,
            None,
            None,
        );
        assert!(number.validate().is_ok());

        let short = VipNumber::new_for_insert(
            "12345".into(),
            150_000,
            VipNumberStatus::Available,
            None,
            None,
            None,
        );
        assert!(short.validate().is_err());

        let free = VipNumber::new_for_insert(
            "9876543210".into(),
            0,
            VipNumberStatus::Available,
            None,
            None,
            None,
        );
        assert!(free.validate().is_err());
    }

    #[test]
    fn insert_constructor_normalizes() {
        let number = VipNumber::new_for_insert(
            "98765 43210".into(),
            1,
            VipNumberStatus::Available,
            None,
            None,
            None,
        );
        assert_eq!(number.number, "9876543210");
    }
}
