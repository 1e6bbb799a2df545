use crate::shared::api_utils::{self, SendMethod};
use contracts::domain::a002_subcategory::{SubCategory, SubCategoryDto, SubCategoryQuery};
use contracts::domain::common::AggregateRoot;
use contracts::shared::api::SavedResponse;

/// `GET /api/subcategories`; с `categoryId` это scoped-запрос каскада
pub async fn fetch_list(query: &SubCategoryQuery) -> Result<Vec<SubCategory>, String> {
    api_utils::get_json(&api_utils::with_query(&SubCategory::api_path(), query)).await
}

pub async fn fetch_by_id(id: &str) -> Result<SubCategory, String> {
    api_utils::get_json(&format!("{}/{}", SubCategory::api_path(), id)).await
}

pub async fn save(dto: &SubCategoryDto) -> Result<SavedResponse, String> {
    api_utils::send_json(SendMethod::Post, &SubCategory::api_path(), dto).await
}

pub async fn delete(id: &str) -> Result<(), String> {
    api_utils::delete(&format!("{}/{}", SubCategory::api_path(), id)).await
}
