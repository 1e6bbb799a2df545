use axum::{extract::Path, Json};
use contracts::domain::a003_language::{Language, LanguageDto};
use contracts::shared::api::SavedResponse;

use crate::domain::a003_language;
use crate::shared::api_error::ApiError;

/// GET /api/languages
pub async fn list_all() -> Result<Json<Vec<Language>>, ApiError> {
    Ok(Json(a003_language::service::list_all().await?))
}

/// GET /api/languages/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Language>, ApiError> {
    let uuid = ApiError::parse_id(&id)?;
    a003_language::service::get_by_id(uuid)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Language {} not found", id)))
}

/// POST /api/languages
pub async fn upsert(Json(dto): Json<LanguageDto>) -> Result<Json<SavedResponse>, ApiError> {
    let id = if dto.id.is_some() {
        a003_language::service::update(dto).await?
    } else {
        a003_language::service::create(dto).await?
    };
    Ok(Json(SavedResponse { id: id.to_string() }))
}

/// DELETE /api/languages/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), ApiError> {
    let uuid = ApiError::parse_id(&id)?;
    if a003_language::service::delete(uuid).await? {
        Ok(())
    } else {
        Err(ApiError::NotFound(format!("Language {} not found", id)))
    }
}
