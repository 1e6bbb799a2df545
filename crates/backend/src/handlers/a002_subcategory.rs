use axum::{
    extract::{Path, Query},
    Json,
};
use contracts::domain::a002_subcategory::{SubCategory, SubCategoryDto, SubCategoryQuery};
use contracts::shared::api::SavedResponse;

use crate::domain::a002_subcategory;
use crate::shared::api_error::ApiError;

/// GET /api/subcategories?contentType=COURSE&categoryId=...
///
/// `category` в ответе заполнен `{_id, name}`, если родитель существует,
/// иначе это голый идентификатор.
pub async fn list(
    Query(query): Query<SubCategoryQuery>,
) -> Result<Json<Vec<SubCategory>>, ApiError> {
    Ok(Json(a002_subcategory::service::list(query).await?))
}

/// GET /api/subcategories/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<SubCategory>, ApiError> {
    let uuid = ApiError::parse_id(&id)?;
    a002_subcategory::service::get_by_id(uuid)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Subcategory {} not found", id)))
}

/// POST /api/subcategories
pub async fn upsert(Json(dto): Json<SubCategoryDto>) -> Result<Json<SavedResponse>, ApiError> {
    let id = if dto.id.is_some() {
        a002_subcategory::service::update(dto).await?
    } else {
        a002_subcategory::service::create(dto).await?
    };
    Ok(Json(SavedResponse { id: id.to_string() }))
}

/// DELETE /api/subcategories/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), ApiError> {
    let uuid = ApiError::parse_id(&id)?;
    if a002_subcategory::service::delete(uuid).await? {
        Ok(())
    } else {
        Err(ApiError::NotFound(format!("Subcategory {} not found", id)))
    }
}
