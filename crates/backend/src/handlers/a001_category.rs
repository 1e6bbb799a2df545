use axum::{
    extract::{Path, Query},
    Json,
};
use contracts::domain::a001_category::{Category, CategoryDto, CategoryListQuery};
use contracts::shared::api::SavedResponse;

use crate::domain::a001_category;
use crate::shared::api_error::ApiError;

/// GET /api/categories?contentType=COURSE&activeOnly=true
pub async fn list(Query(query): Query<CategoryListQuery>) -> Result<Json<Vec<Category>>, ApiError> {
    Ok(Json(a001_category::service::list(query).await?))
}

/// GET /api/categories/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Category>, ApiError> {
    let uuid = ApiError::parse_id(&id)?;
    a001_category::service::get_by_id(uuid)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Category {} not found", id)))
}

/// POST /api/categories
pub async fn upsert(Json(dto): Json<CategoryDto>) -> Result<Json<SavedResponse>, ApiError> {
    let id = if dto.id.is_some() {
        a001_category::service::update(dto).await?
    } else {
        a001_category::service::create(dto).await?
    };
    Ok(Json(SavedResponse { id: id.to_string() }))
}

/// DELETE /api/categories/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), ApiError> {
    let uuid = ApiError::parse_id(&id)?;
    if a001_category::service::delete(uuid).await? {
        Ok(())
    } else {
        Err(ApiError::NotFound(format!("Category {} not found", id)))
    }
}
