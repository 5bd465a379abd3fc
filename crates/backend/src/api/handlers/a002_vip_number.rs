use axum::extract::{Path, Query};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use super::{bad_request, map_domain_error, ApiError};
use crate::domain::a002_vip_number::service;
use crate::shared::error::DomainError;
use crate::shared::pagination::{clamp_page_size, PageCursor};
use contracts::domain::a002_vip_number::aggregate::{VipNumber, VipNumberDto};
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

/// One page of the VIP number feed, newest first
pub async fn list(
    Query(filters): Query<ListFilters>,
) -> Result<Json<Page<VipNumber>>, ApiError> {
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
    .map_err(|e| map_domain_error("Failed to list VIP numbers", e))?;

    let next_cursor = items
        .last()
        .map(|n| PageCursor::new(n.metadata.created_at, n.id.value().to_string()).encode());

    Ok(Json(Page { items, next_cursor }))
}

pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<serde_json::Value>, ApiError> {
    let uuid = Uuid::parse_str(&id).map_err(|_| bad_request("invalid id"))?;

    let number = service::get_by_id(uuid)
        .await
        .map_err(|e| map_domain_error("Failed to get VIP number", e))?
        .ok_or_else(|| map_domain_error("", DomainError::NotFound))?;

    Ok(Json(serde_json::json!(number)))
}

#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    pub number: String,
}

/// Duplicate probe for the edit form: returns the live record holding
/// this (normalized) number, if any
pub async fn lookup(
    Query(query): Query<LookupQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let found = service::find_by_number(&query.number)
        .await
        .map_err(|e| map_domain_error("Failed to look up VIP number", e))?;

    Ok(Json(serde_json::json!(found)))
}

/// Create or update depending on whether the DTO carries an id
pub async fn upsert(Json(dto): Json<VipNumberDto>) -> Result<Json<serde_json::Value>, ApiError> {
    match dto.id {
        Some(_) => {
            service::update(dto)
                .await
                .map_err(|e| map_domain_error("Failed to update VIP number", e))?;
            Ok(Json(serde_json::json!({"success": true})))
        }
        None => {
            let id = service::create(dto)
                .await
                .map_err(|e| map_domain_error("Failed to create VIP number", e))?;
            Ok(Json(serde_json::json!({"success": true, "id": id})))
        }
    }
}

pub async fn delete(Path(id): Path<String>) -> Result<Json<serde_json::Value>, ApiError> {
    let uuid = Uuid::parse_str(&id).map_err(|_| bad_request("invalid id"))?;

    let deleted = service::delete(uuid)
        .await
        .map_err(|e| map_domain_error("Failed to delete VIP number", e))?;

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
