use contracts::domain::a003_number_pack::aggregate::{NumberPack, NumberPackDto};

use crate::shared::api_utils::{get_json, post_json};

pub async fn fetch_by_id(id: String) -> Result<NumberPack, String> {
    get_json::<NumberPack>(&format!("/api/number_pack/{}", id)).await
}

pub async fn save_form(dto: &NumberPackDto) -> Result<(), String> {
    let _: serde_json::Value = post_json("/api/number_pack", dto).await?;
    Ok(())
}
