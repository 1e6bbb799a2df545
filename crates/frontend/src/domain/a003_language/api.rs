use crate::shared::api_utils::{self, SendMethod};
use contracts::domain::a003_language::{Language, LanguageDto};
use contracts::domain::common::AggregateRoot;
use contracts::shared::api::SavedResponse;

pub async fn fetch_list() -> Result<Vec<Language>, String> {
    api_utils::get_json(&Language::api_path()).await
}

pub async fn save(dto: &LanguageDto) -> Result<SavedResponse, String> {
    api_utils::send_json(SendMethod::Post, &Language::api_path(), dto).await
}

pub async fn delete(id: &str) -> Result<(), String> {
    api_utils::delete(&format!("{}/{}", Language::api_path(), id)).await
}
