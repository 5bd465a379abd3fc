pub mod a001_category;
pub mod a002_vip_number;
pub mod a003_number_pack;
pub mod a004_payment;
pub mod a005_refund;

use crate::shared::error::DomainError;
use axum::http::StatusCode;
use axum::Json;

/// Error half of every handler result: status plus a JSON body whose
/// `error` field the frontend shows verbatim
pub type ApiError = (StatusCode, Json<serde_json::Value>);

pub fn api_error(status: StatusCode, message: impl std::fmt::Display) -> ApiError {
    (
        status,
        Json(serde_json::json!({ "error": message.to_string() })),
    )
}

/// Map a service failure onto HTTP. Store errors keep the context the
/// repository attached (index hints included), so the client sees what
/// went wrong and what to create.
pub fn map_domain_error(context: &str, err: DomainError) -> ApiError {
    match err {
        DomainError::Validation(msg) => api_error(StatusCode::UNPROCESSABLE_ENTITY, msg),
        DomainError::Duplicate(msg) => api_error(StatusCode::UNPROCESSABLE_ENTITY, msg),
        DomainError::NotFound => api_error(StatusCode::NOT_FOUND, "not found"),
        DomainError::Store(e) => {
            tracing::error!("{}: {:#}", context, e);
            api_error(StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", e))
        }
    }
}

pub fn bad_request(message: impl std::fmt::Display) -> ApiError {
    api_error(StatusCode::BAD_REQUEST, message)
}
