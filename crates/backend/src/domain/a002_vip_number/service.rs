use super::repository::{self, VipNumberQuery};
use crate::shared::dates::{day_ceil, day_floor};
use crate::shared::error::{DomainError, DomainResult};
use crate::shared::pagination::PageCursor;
use contracts::domain::a002_vip_number::aggregate::{normalize_number, VipNumber, VipNumberDto};
use contracts::enums::vip_number_status::VipNumberStatus;
use uuid::Uuid;

/// Create a new VIP number listing
pub async fn create(dto: VipNumberDto) -> DomainResult<Uuid> {
    let mut aggregate = VipNumber::new_for_insert(
        dto.number,
        dto.price,
        dto.status,
        dto.category_slug,
        dto.highlight,
        dto.comment,
    );

    aggregate.validate().map_err(DomainError::Validation)?;
    guard_unique_number(&aggregate.number, None).await?;

    aggregate.before_write();
    Ok(repository::insert(&aggregate).await?)
}

/// Update an existing listing
pub async fn update(dto: VipNumberDto) -> DomainResult<()> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| DomainError::Validation("Invalid ID".into()))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or(DomainError::NotFound)?;

    aggregate.update(&dto);
    aggregate.validate().map_err(DomainError::Validation)?;
    guard_unique_number(&aggregate.number, Some(id)).await?;

    aggregate.before_write();
    Ok(repository::update(&aggregate).await?)
}

/// Reject a write whose normalized number already belongs to a different
/// live record
async fn guard_unique_number(number: &str, own_id: Option<Uuid>) -> DomainResult<()> {
    if let Some(existing) = repository::find_by_number(number).await? {
        if Some(existing.id.value()) != own_id {
            return Err(DomainError::Duplicate(format!(
                "number {} is already listed",
                number
            )));
        }
    }
    Ok(())
}

pub async fn delete(id: Uuid) -> DomainResult<bool> {
    Ok(repository::soft_delete(id).await?)
}

pub async fn get_by_id(id: Uuid) -> DomainResult<Option<VipNumber>> {
    Ok(repository::get_by_id(id).await?)
}

/// Duplicate probe used by the edit form before it submits
pub async fn find_by_number(raw: &str) -> DomainResult<Option<VipNumber>> {
    let normalized = normalize_number(raw);
    if normalized.is_empty() {
        return Ok(None);
    }
    Ok(repository::find_by_number(&normalized).await?)
}

pub async fn list_page(
    status: Option<String>,
    category: Option<String>,
    date_from: Option<String>,
    date_to: Option<String>,
    cursor: Option<PageCursor>,
    page_size: u64,
) -> DomainResult<Vec<VipNumber>> {
    let filters = VipNumberQuery {
        status: parse_status(status)?,
        category_slug: category.filter(|c| !c.is_empty()),
        created_from: date_from
            .filter(|d| !d.is_empty())
            .map(|d| day_floor(&d))
            .transpose()
            .map_err(|e| DomainError::Validation(e.to_string()))?,
        created_to: date_to
            .filter(|d| !d.is_empty())
            .map(|d| day_ceil(&d))
            .transpose()
            .map_err(|e| DomainError::Validation(e.to_string()))?,
    };
    Ok(repository::list_page(&filters, cursor.as_ref(), page_size).await?)
}

fn parse_status(status: Option<String>) -> DomainResult<Option<VipNumberStatus>> {
    match status.filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(code) => VipNumberStatus::from_code(&code)
            .map(Some)
            .ok_or_else(|| DomainError::Validation(format!("unknown status '{}'", code))),
    }
}

/// Seed a handful of listings for development
pub async fn insert_test_data() -> DomainResult<()> {
    let data = vec![
        ("9999900001", 450_000, VipNumberStatus::Available, "gold", "Five nines"),
        ("9999900002", 450_000, VipNumberStatus::Booked, "gold", "Five nines"),
        ("9888811111", 275_000, VipNumberStatus::Available, "mirror", "Penta ones"),
        ("9777712345", 125_000, VipNumberStatus::Sold, "sequence", "Ascending run"),
        ("9123412341", 95_000, VipNumberStatus::Available, "repeating", "1234 twice"),
    ];

    for (number, price, status, category, highlight) in data {
        let dto = VipNumberDto {
            id: None,
            number: number.into(),
            price,
            status,
            category_slug: Some(category.into()),
            highlight: Some(highlight.into()),
            comment: None,
        };
        match create(dto).await {
            Ok(_) | Err(DomainError::Duplicate(_)) => {}
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
