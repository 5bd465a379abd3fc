use axum::extract::{Path, Query};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use super::{bad_request, map_domain_error, ApiError};
use crate::domain::a003_number_pack::service;
use crate::shared::error::DomainError;
use crate::shared::pagination::{clamp_page_size, PageCursor};
use contracts::domain::a003_number_pack::aggregate::{NumberPack, NumberPackDto};
use contracts::shared::page::Page;

#[derive(Debug, Deserialize)]
pub struct ListFilters {
    pub cursor: Option<String>,
    pub page_size: Option<u64>,
    pub status: Option<String>,
    pub category: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

pub async fn list(
    Query(filters): Query<ListFilters>,
) -> Result<Json<Page<NumberPack>>, ApiError> {
    let cursor = filters
        .cursor
        .as_deref()
        .filter(|c| !c.is_empty())
        .map(PageCursor::decode)
        .transpose()
        .map_err(bad_request)?;
    let page_size = clamp_page_size(filters.page_size);

    let items = service::list_page(
        filters.status,
        filters.category,
        filters.date_from,
        filters.date_to,
        cursor,
        page_size,
    )
    .await
    .map_err(|e| map_domain_error("Failed to list number packs", e))?;

    let next_cursor = items
        .last()
        .map(|p| PageCursor::new(p.metadata.created_at, p.id.value().to_string()).encode());

    Ok(Json(Page { items, next_cursor }))
}

pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<serde_json::Value>, ApiError> {
    let uuid = Uuid::parse_str(&id).map_err(|_| bad_request("invalid id"))?;

    let pack = service::get_by_id(uuid)
        .await
        .map_err(|e| map_domain_error("Failed to get number pack", e))?
        .ok_or_else(|| map_domain_error("", DomainError::NotFound))?;

    Ok(Json(serde_json::json!(pack)))
}

pub async fn upsert(Json(dto): Json<NumberPackDto>) -> Result<Json<serde_json::Value>, ApiError> {
    match dto.id {
        Some(_) => {
            service::update(dto)
                .await
                .map_err(|e| map_domain_error("Failed to update number pack", e))?;
            Ok(Json(serde_json::json!({"success": true})))
        }
        None => {
            let id = service::create(dto)
                .await
                .map_err(|e| map_domain_error("Failed to create number pack", e))?;
            Ok(Json(serde_json::json!({"success": true, "id": id})))
        }
    }
}

pub async fn delete(Path(id): Path<String>) -> Result<Json<serde_json::Value>, ApiError> {
    let uuid = Uuid::parse_str(&id).map_err(|_| bad_request("invalid id"))?;

    let deleted = service::delete(uuid)
        .await
        .map_err(|e| map_domain_error("Failed to delete number pack", e))?;

    if !deleted {
        return Err(map_domain_error("", DomainError::NotFound));
    }

    Ok(Json(serde_json::json!({"success": true})))
}
