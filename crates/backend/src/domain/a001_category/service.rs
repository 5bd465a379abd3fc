use super::repository;
use crate::shared::error::{DomainError, DomainResult};
use contracts::domain::a001_category::aggregate::{Category, CategoryDto};
use uuid::Uuid;

pub async fn create(dto: CategoryDto) -> DomainResult<Uuid> {
    let mut aggregate = Category::new_for_insert(dto.slug, dto.name, dto.comment);

    aggregate.validate().map_err(DomainError::Validation)?;
    guard_unique_slug(&aggregate.slug, None).await?;

    aggregate.before_write();
    Ok(repository::insert(&aggregate).await?)
}

pub async fn update(dto: CategoryDto) -> DomainResult<()> {
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
    guard_unique_slug(&aggregate.slug, Some(id)).await?;

    aggregate.before_write();
    Ok(repository::update(&aggregate).await?)
}

async fn guard_unique_slug(slug: &str, own_id: Option<Uuid>) -> DomainResult<()> {
    if let Some(existing) = repository::find_by_slug(slug).await? {
        if Some(existing.id.value()) != own_id {
            return Err(DomainError::Duplicate(format!(
                "slug '{}' is already in use",
                slug
            )));
        }
    }
    Ok(())
}

pub async fn delete(id: Uuid) -> DomainResult<bool> {
    Ok(repository::soft_delete(id).await?)
}

pub async fn get_by_id(id: Uuid) -> DomainResult<Option<Category>> {
    Ok(repository::get_by_id(id).await?)
}

pub async fn list_all() -> DomainResult<Vec<Category>> {
    Ok(repository::list_all().await?)
}
