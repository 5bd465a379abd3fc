use axum::extract::{Path, Query};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use super::{bad_request, map_domain_error, ApiError};
use crate::domain::a004_payment::service;
use crate::shared::error::DomainError;
use crate::shared::pagination::{clamp_page_size, PageCursor};
use contracts::domain::a004_payment::aggregate::Payment;
use contracts::shared::page::Page;

#[derive(Debug, Deserialize)]
pub struct ListFilters {
    pub cursor: Option<String>,
    pub page_size: Option<u64>,
    pub status: Option<String>,
    pub method: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

pub async fn list(Query(filters): Query<ListFilters>) -> Result<Json<Page<Payment>>, ApiError> {
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
        filters.method,
        filters.date_from,
        filters.date_to,
        cursor,
        page_size,
    )
    .await
    .map_err(|e| map_domain_error("Failed to list payments", e))?;

    let next_cursor = items
        .last()
        .map(|p| PageCursor::new(p.metadata.created_at, p.id.value().to_string()).encode());

    Ok(Json(Page { items, next_cursor }))
}

pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<serde_json::Value>, ApiError> {
    let uuid = Uuid::parse_str(&id).map_err(|_| bad_request("invalid id"))?;

    let payment = service::get_by_id(uuid)
        .await
        .map_err(|e| map_domain_error("Failed to get payment", e))?
        .ok_or_else(|| map_domain_error("", DomainError::NotFound))?;

    Ok(Json(serde_json::json!(payment)))
}

pub async fn delete(Path(id): Path<String>) -> Result<Json<serde_json::Value>, ApiError> {
    let uuid = Uuid::parse_str(&id).map_err(|_| bad_request("invalid id"))?;

    let deleted = service::delete(uuid)
        .await
        .map_err(|e| map_domain_error("Failed to delete payment", e))?;

    if !deleted {
        return Err(map_domain_error("", DomainError::NotFound));
    }

    Ok(Json(serde_json::json!({"success": true})))
}

pub async fn insert_test_data() -> Result<Json<serde_json::Value>, ApiError> {
    service::insert_test_data()
        .await
        .map_err(|e| map_domain_error("Failed to insert test data", e))?;
    Ok(Json(serde_json::json!({"success": true})))
}
