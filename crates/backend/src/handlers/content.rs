//! Обработчики контентных разделов (курсы, публикации, PYQ, тест-серии).
//!
//! Все четыре раздела обслуживаются одними и теми же обобщёнными функциями,
//! роутер инстанцирует их под конкретный агрегат.

use axum::{extract::Path, Json};
use contracts::domain::common::AggregateRoot;
use contracts::shared::api::SavedResponse;
use contracts::shared::classification::Classification;
use contracts::shared::content::ContentItem;
use contracts::shared::pricing::Pricing;

use crate::domain::content::{service, ContentStore};
use crate::shared::api_error::ApiError;

fn not_found<T: ContentStore>(id: &str) -> ApiError {
    ApiError::NotFound(format!("{} {} not found", T::element_name(), id))
}

/// GET /api/<collection>
pub async fn list_all<T: ContentStore>() -> Result<Json<Vec<T>>, ApiError> {
    Ok(Json(service::list_all::<T>().await?))
}

/// GET /api/<collection>/:id
pub async fn get_by_id<T: ContentStore>(Path(id): Path<String>) -> Result<Json<T>, ApiError> {
    let uuid = ApiError::parse_id(&id)?;
    service::get_by_id::<T>(uuid)
        .await?
        .map(Json)
        .ok_or_else(|| not_found::<T>(&id))
}

/// POST /api/<collection> — создание или обновление основной информации
pub async fn upsert_basic<T: ContentStore>(
    Json(dto): Json<<T as ContentItem>::BasicDto>,
) -> Result<Json<SavedResponse>, ApiError> {
    let id = service::upsert_basic::<T>(dto).await?;
    Ok(Json(SavedResponse { id: id.to_string() }))
}

/// PUT /api/<collection>/:id/pricing
pub async fn update_pricing<T: ContentStore>(
    Path(id): Path<String>,
    Json(pricing): Json<Pricing>,
) -> Result<Json<SavedResponse>, ApiError> {
    let uuid = ApiError::parse_id(&id)?;
    service::update_pricing::<T>(uuid, pricing).await?;
    Ok(Json(SavedResponse { id }))
}

/// PUT /api/<collection>/:id/classification
pub async fn update_classification<T: ContentStore>(
    Path(id): Path<String>,
    Json(classification): Json<Classification>,
) -> Result<Json<SavedResponse>, ApiError> {
    let uuid = ApiError::parse_id(&id)?;
    service::update_classification::<T>(uuid, classification).await?;
    Ok(Json(SavedResponse { id }))
}

/// DELETE /api/<collection>/:id
pub async fn delete<T: ContentStore>(Path(id): Path<String>) -> Result<(), ApiError> {
    let uuid = ApiError::parse_id(&id)?;
    if service::delete::<T>(uuid).await? {
        Ok(())
    } else {
        Err(not_found::<T>(&id))
    }
}
