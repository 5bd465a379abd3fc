use super::repository::{self, NumberPackQuery};
use crate::shared::dates::{day_ceil, day_floor};
use crate::shared::error::{DomainError, DomainResult};
use crate::shared::pagination::PageCursor;
use contracts::domain::a003_number_pack::aggregate::{NumberPack, NumberPackDto};
use contracts::enums::pack_status::PackStatus;
use uuid::Uuid;

pub async fn create(dto: NumberPackDto) -> DomainResult<Uuid> {
    let mut aggregate = NumberPack::new_for_insert(
        dto.name,
        dto.numbers,
        dto.price,
        dto.status,
        dto.category_slug,
        dto.comment,
    );

    aggregate.validate().map_err(DomainError::Validation)?;

    aggregate.before_write();
    Ok(repository::insert(&aggregate).await?)
}

pub async fn update(dto: NumberPackDto) -> DomainResult<()> {
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

    aggregate.before_write();
    Ok(repository::update(&aggregate).await?)
}

pub async fn delete(id: Uuid) -> DomainResult<bool> {
    Ok(repository::soft_delete(id).await?)
}

pub async fn get_by_id(id: Uuid) -> DomainResult<Option<NumberPack>> {
    Ok(repository::get_by_id(id).await?)
}

pub async fn list_page(
    status: Option<String>,
    category: Option<String>,
    date_from: Option<String>,
    date_to: Option<String>,
    cursor: Option<PageCursor>,
    page_size: u64,
) -> DomainResult<Vec<NumberPack>> {
    let filters = NumberPackQuery {
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

fn parse_status(status: Option<String>) -> DomainResult<Option<PackStatus>> {
    match status.filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(code) => PackStatus::from_code(&code)
            .map(Some)
            .ok_or_else(|| DomainError::Validation(format!("unknown status '{}'", code))),
    }
}
