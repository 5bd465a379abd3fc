use axum::extract::Path;
use axum::Json;
use uuid::Uuid;

use super::{bad_request, map_domain_error, ApiError};
use crate::domain::a001_category::service;
use crate::shared::error::DomainError;
use contracts::domain::a001_category::aggregate::CategoryDto;

pub async fn list_all() -> Result<Json<serde_json::Value>, ApiError> {
    let categories = service::list_all()
        .await
        .map_err(|e| map_domain_error("Failed to list categories", e))?;
    Ok(Json(serde_json::json!(categories)))
}

pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<serde_json::Value>, ApiError> {
    let uuid = Uuid::parse_str(&id).map_err(|_| bad_request("invalid id"))?;

    let category = service::get_by_id(uuid)
        .await
        .map_err(|e| map_domain_error("Failed to get category", e))?
        .ok_or_else(|| map_domain_error("", DomainError::NotFound))?;

    Ok(Json(serde_json::json!(category)))
}

pub async fn upsert(Json(dto): Json<CategoryDto>) -> Result<Json<serde_json::Value>, ApiError> {
    match dto.id {
        Some(_) => {
            service::update(dto)
                .await
                .map_err(|e| map_domain_error("Failed to update category", e))?;
            Ok(Json(serde_json::json!({"success": true})))
        }
        None => {
            let id = service::create(dto)
                .await
                .map_err(|e| map_domain_error("Failed to create category", e))?;
            Ok(Json(serde_json::json!({"success": true, "id": id})))
        }
    }
}

pub async fn delete(Path(id): Path<String>) -> Result<Json<serde_json::Value>, ApiError> {
    let uuid = Uuid::parse_str(&id).map_err(|_| bad_request("invalid id"))?;

    let deleted = service::delete(uuid)
        .await
        .map_err(|e| map_domain_error("Failed to delete category", e))?;

    if !deleted {
        return Err(map_domain_error("", DomainError::NotFound));
    }

    Ok(Json(serde_json::json!({"success": true})))
}
