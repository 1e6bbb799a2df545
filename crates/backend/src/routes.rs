use axum::{
    routing::{get, post, put},
    Router,
};
use contracts::domain::a005_course::Course;
use contracts::domain::a006_publication::Publication;
use contracts::domain::a007_pyq::Pyq;
use contracts::domain::a008_test_series::TestSeries;
use contracts::domain::common::AggregateRoot;

use crate::domain::content::ContentStore;
use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // СПРАВОЧНИКИ КЛАССИФИКАЦИИ
        // ========================================
        .route(
            "/api/categories",
            get(handlers::a001_category::list).post(handlers::a001_category::upsert),
        )
        .route(
            "/api/categories/:id",
            get(handlers::a001_category::get_by_id).delete(handlers::a001_category::delete),
        )
        .route(
            "/api/subcategories",
            get(handlers::a002_subcategory::list).post(handlers::a002_subcategory::upsert),
        )
        .route(
            "/api/subcategories/:id",
            get(handlers::a002_subcategory::get_by_id)
                .delete(handlers::a002_subcategory::delete),
        )
        .route(
            "/api/languages",
            get(handlers::a003_language::list_all).post(handlers::a003_language::upsert),
        )
        .route(
            "/api/languages/:id",
            get(handlers::a003_language::get_by_id).delete(handlers::a003_language::delete),
        )
        .route(
            "/api/validities",
            get(handlers::a004_validity::list_all).post(handlers::a004_validity::upsert),
        )
        .route(
            "/api/validities/:id",
            get(handlers::a004_validity::get_by_id).delete(handlers::a004_validity::delete),
        )
        .route(
            "/api/testdata",
            post(handlers::testdata::insert_test_data),
        )
        // ========================================
        // КОНТЕНТ
        // ========================================
        .merge(content_routes::<Course>())
        .merge(content_routes::<Publication>())
        .merge(content_routes::<Pyq>())
        .merge(content_routes::<TestSeries>())
}

/// Роуты одного контентного раздела, путь берётся из `collection_name`
fn content_routes<T: ContentStore>() -> Router {
    let base = T::api_path();
    Router::new()
        .route(
            &base,
            get(handlers::content::list_all::<T>).post(handlers::content::upsert_basic::<T>),
        )
        .route(
            &format!("{}/:id", base),
            get(handlers::content::get_by_id::<T>).delete(handlers::content::delete::<T>),
        )
        .route(
            &format!("{}/:id/pricing", base),
            put(handlers::content::update_pricing::<T>),
        )
        .route(
            &format!("{}/:id/classification", base),
            put(handlers::content::update_classification::<T>),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_paths() {
        assert_eq!(Course::api_path(), "/api/courses");
        assert_eq!(Publication::api_path(), "/api/publications");
        assert_eq!(Pyq::api_path(), "/api/pyqs");
        assert_eq!(TestSeries::api_path(), "/api/test-series");
    }

    #[test]
    fn test_router_builds_without_conflicts() {
        let _ = configure_routes();
    }
}
