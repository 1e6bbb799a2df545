use axum::{extract::Path, Json};
use contracts::domain::a004_validity::{Validity, ValidityDto};
use contracts::shared::api::SavedResponse;

use crate::domain::a004_validity;
use crate::shared::api_error::ApiError;

/// GET /api/validities
pub async fn list_all() -> Result<Json<Vec<Validity>>, ApiError> {
    Ok(Json(a004_validity::service::list_all().await?))
}

/// GET /api/validities/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Validity>, ApiError> {
    let uuid = ApiError::parse_id(&id)?;
    a004_validity::service::get_by_id(uuid)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Validity {} not found", id)))
}

/// POST /api/validities
pub async fn upsert(Json(dto): Json<ValidityDto>) -> Result<Json<SavedResponse>, ApiError> {
    let id = if dto.id.is_some() {
        a004_validity::service::update(dto).await?
    } else {
        a004_validity::service::create(dto).await?
    };
    Ok(Json(SavedResponse { id: id.to_string() }))
}

/// DELETE /api/validities/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), ApiError> {
    let uuid = ApiError::parse_id(&id)?;
    if a004_validity::service::delete(uuid).await? {
        Ok(())
    } else {
        Err(ApiError::NotFound(format!("Validity {} not found", id)))
    }
}
