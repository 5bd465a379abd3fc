use super::repository::{self, RefundQuery};
use crate::shared::dates::{day_ceil, day_floor};
use crate::shared::error::{DomainError, DomainResult};
use crate::shared::pagination::PageCursor;
use contracts::domain::a005_refund::aggregate::{Refund, RefundDto};
use contracts::enums::refund_status::RefundStatus;
use uuid::Uuid;

pub async fn create(dto: RefundDto) -> DomainResult<Uuid> {
    let refund_ref = if dto.refund_ref.trim().is_empty() {
        // Gateway reference is assigned later for manually raised refunds
        format!("rfnd_{}", &Uuid::new_v4().simple().to_string()[..12])
    } else {
        dto.refund_ref
    };

    let mut aggregate = Refund::new_for_insert(
        refund_ref,
        dto.payment_ref,
        dto.order_ref,
        dto.email,
        dto.amount,
        dto.status,
        dto.reason,
    );

    aggregate.validate().map_err(DomainError::Validation)?;

    aggregate.before_write();
    Ok(repository::insert(&aggregate).await?)
}

pub async fn update(dto: RefundDto) -> DomainResult<()> {
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

pub async fn get_by_id(id: Uuid) -> DomainResult<Option<Refund>> {
    Ok(repository::get_by_id(id).await?)
}

pub async fn list_page(
    status: Option<String>,
    date_from: Option<String>,
    date_to: Option<String>,
    cursor: Option<PageCursor>,
    page_size: u64,
) -> DomainResult<Vec<Refund>> {
    let filters = RefundQuery {
        status: parse_status(status)?,
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

fn parse_status(status: Option<String>) -> DomainResult<Option<RefundStatus>> {
    match status.filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(code) => RefundStatus::from_code(&code)
            .map(Some)
            .ok_or_else(|| DomainError::Validation(format!("unknown status '{}'", code))),
    }
}
