use crate::shared::api_utils::{self, SendMethod};
use contracts::domain::a001_category::{Category, CategoryDto, CategoryListQuery};
use contracts::domain::common::AggregateRoot;
use contracts::enums::ContentType;
use contracts::shared::api::SavedResponse;

pub async fn fetch_list(query: &CategoryListQuery) -> Result<Vec<Category>, String> {
    api_utils::get_json(&api_utils::with_query(&Category::api_path(), query)).await
}

/// Активные категории одного раздела (для форм классификации)
pub async fn fetch_active(content_type: ContentType) -> Result<Vec<Category>, String> {
    fetch_list(&CategoryListQuery {
        content_type: Some(content_type),
        active_only: true,
    })
    .await
}

/// Все категории раздела, включая неактивные (для поиска родителей подкатегорий)
pub async fn fetch_all(content_type: ContentType) -> Result<Vec<Category>, String> {
    fetch_list(&CategoryListQuery {
        content_type: Some(content_type),
        active_only: false,
    })
    .await
}

pub async fn fetch_by_id(id: &str) -> Result<Category, String> {
    api_utils::get_json(&format!("{}/{}", Category::api_path(), id)).await
}

pub async fn save(dto: &CategoryDto) -> Result<SavedResponse, String> {
    api_utils::send_json(SendMethod::Post, &Category::api_path(), dto).await
}

pub async fn delete(id: &str) -> Result<(), String> {
    api_utils::delete(&format!("{}/{}", Category::api_path(), id)).await
}
