use contracts::domain::a002_vip_number::aggregate::{VipNumber, VipNumberDto};

use crate::shared::api_utils::{get_json, post_json};

pub async fn fetch_by_id(id: String) -> Result<VipNumber, String> {
    get_json::<VipNumber>(&format!("/api/vip_number/{}", id)).await
}

/// Duplicate probe: the live record holding this number, if any
pub async fn lookup_number(number: &str) -> Result<Option<VipNumber>, String> {
    get_json::<Option<VipNumber>>(&format!("/api/vip_number/lookup?number={}", number)).await
}

pub async fn save_form(dto: &VipNumberDto) -> Result<(), String> {
    let _: serde_json::Value = post_json("/api/vip_number", dto).await?;
    Ok(())
}
