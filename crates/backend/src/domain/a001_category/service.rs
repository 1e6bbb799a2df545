use super::repository;
use crate::shared::api_error::DomainError;
use contracts::domain::a001_category::{Category, CategoryDto, CategoryListQuery};
use uuid::Uuid;

pub async fn create(dto: CategoryDto) -> anyhow::Result<Uuid> {
    let mut aggregate = Category::new_for_insert(
        String::new(),
        dto.content_type,
        dto.is_active,
        None,
    );
    aggregate.update(&dto);

    aggregate.validate().map_err(DomainError::validation)?;
    aggregate.before_write();

    repository::insert(&aggregate).await
}

pub async fn update(dto: CategoryDto) -> anyhow::Result<Uuid> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| DomainError::validation("Invalid ID"))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Category"))?;

    aggregate.update(&dto);

    aggregate.validate().map_err(DomainError::validation)?;
    aggregate.before_write();

    repository::update(&aggregate).await?;
    Ok(id)
}

/// Мягкое удаление. Подкатегории не трогаются: они становятся "осиротевшими"
/// и скрываются в формах, но остаются в БД.
pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    let deleted = repository::soft_delete(id).await?;
    if deleted {
        tracing::info!("Category {} deleted, its subcategories are now orphaned", id);
    }
    Ok(deleted)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Category>> {
    repository::get_by_id(id).await
}

pub async fn list(query: CategoryListQuery) -> anyhow::Result<Vec<Category>> {
    repository::list(query.content_type, query.active_only).await
}
