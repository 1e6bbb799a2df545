use axum::Json;

use crate::domain::testdata::service;
use crate::shared::api_error::ApiError;
use contracts::shared::api::SeedReport;

/// POST /api/testdata
pub async fn insert_test_data() -> Result<Json<SeedReport>, ApiError> {
    Ok(Json(service::insert_test_data().await?))
}
