use crate::shared::api_utils::{self, SendMethod};
use contracts::domain::a004_validity::{Validity, ValidityDto};
use contracts::domain::common::AggregateRoot;
use contracts::shared::api::SavedResponse;

pub async fn fetch_list() -> Result<Vec<Validity>, String> {
    api_utils::get_json(&Validity::api_path()).await
}

pub async fn save(dto: &ValidityDto) -> Result<SavedResponse, String> {
    api_utils::send_json(SendMethod::Post, &Validity::api_path(), dto).await
}

pub async fn delete(id: &str) -> Result<(), String> {
    api_utils::delete(&format!("{}/{}", Validity::api_path(), id)).await
}
