use crate::domain::common::{AggregateId, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub Uuid);

impl CategoryId {
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

impl AggregateId for CategoryId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CategoryId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Storefront category a number or pack is listed under
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    /// URL-safe slug referenced by numbers and packs
    pub slug: String,
    pub name: String,
    pub comment: Option<String>,
    pub metadata: EntityMetadata,
}

impl Category {
    pub fn new_for_insert(slug: String, name: String, comment: Option<String>) -> Self {
        Self {
            id: CategoryId::new_v4(),
            slug,
            name,
            comment,
            metadata: EntityMetadata::new(),
        }
    }

    pub fn update(&mut self, dto: &CategoryDto) {
        self.slug = dto.slug.clone();
        self.name = dto.name.clone();
        self.comment = dto.comment.clone();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name must not be empty".into());
        }
        let slug = self.slug.trim();
        if slug.is_empty() {
            return Err("Slug must not be empty".into());
        }
        if !slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err("Slug may only contain lowercase letters, digits and dashes".into());
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

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CategoryDto {
    pub id: Option<String>,
    pub slug: String,
    pub name: String,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_bad_slug() {
        let mut category =
            Category::new_for_insert("gold-numbers".into(), "Gold numbers".into(), None);
        assert!(category.validate().is_ok());

        category.slug = "Gold Numbers".into();
        assert!(category.validate().is_err());

        category.slug = "".into();
        assert!(category.validate().is_err());
    }
}
