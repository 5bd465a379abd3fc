use crate::domain::a002_vip_number::aggregate::normalize_number;
use crate::domain::common::{AggregateId, EntityMetadata};
use crate::enums::pack_status::PackStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NumberPackId(pub Uuid);

impl NumberPackId {
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

impl AggregateId for NumberPackId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(NumberPackId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Bundle of VIP numbers sold as one listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumberPack {
    pub id: NumberPackId,
    pub name: String,
    /// Normalized digit strings; a pack needs at least two
    pub numbers: Vec<String>,
    /// Price for the whole pack, minor currency units
    pub price: i64,
    pub status: PackStatus,
    pub category_slug: Option<String>,
    pub comment: Option<String>,
    pub metadata: EntityMetadata,
}

impl NumberPack {
    pub fn new_for_insert(
        name: String,
        numbers: Vec<String>,
        price: i64,
        status: PackStatus,
        category_slug: Option<String>,
        comment: Option<String>,
    ) -> Self {
        Self {
            id: NumberPackId::new_v4(),
            name,
            numbers: numbers.iter().map(|n| normalize_number(n)).collect(),
            price,
            status,
            category_slug,
            comment,
            metadata: EntityMetadata::new(),
        }
    }

    pub fn update(&mut self, dto: &NumberPackDto) {
        self.name = dto.name.clone();
        self.numbers = dto.numbers.iter().map(|n| normalize_number(n)).collect();
        self.price = dto.price;
        self.status = dto.status;
        self.category_slug = dto.category_slug.clone();
        self.comment = dto.comment.clone();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name must not be empty".into());
        }
        if self.numbers.len() < 2 {
            return Err("A pack must contain at least two numbers".into());
        }
        for number in &self.numbers {
            if !(7..=15).contains(&number.len()) {
                return Err(format!(
                    "Number '{}' must contain between 7 and 15 digits",
                    number
                ));
            }
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
pub struct NumberPackDto {
    pub id: Option<String>,
    pub name: String,
    pub numbers: Vec<String>,
    pub price: i64,
    pub status: PackStatus,
    pub category_slug: Option<String>,
    pub comment: Option<String>,
}

impl Default for NumberPackDto {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            numbers: Vec::new(),
            price: 0,
            status: PackStatus::Available,
            category_slug: None,
            comment: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pack(numbers: Vec<&str>) -> NumberPack {
        NumberPack::new_for_insert(
            "Twin pack".into(),
            numbers.into_iter().map(String::from).collect(),
            250_000,
            PackStatus::Available,
            None,
            None,
        )
    }

    #[test]
    fn validate_requires_two_numbers() {
        assert!(pack(vec!["9876543210", "9876543211"]).validate().is_ok());
        assert!(pack(vec!["9876543210"]).validate().is_err());
    }

    #[test]
    fn numbers_are_normalized_on_insert() {
        let p = pack(vec!["98765 43210", "98765-43211"]);
        assert_eq!(p.numbers, vec!["9876543210", "9876543211"]);
    }
}
