use contracts::domain::a005_refund::aggregate::{Refund, RefundDto};

use crate::shared::api_utils::{get_json, post_json};

pub async fn fetch_by_id(id: String) -> Result<Refund, String> {
    get_json::<Refund>(&format!("/api/refund/{}", id)).await
}

pub async fn save_form(dto: &RefundDto) -> Result<(), String> {
    let _: serde_json::Value = post_json("/api/refund", dto).await?;
    Ok(())
}
