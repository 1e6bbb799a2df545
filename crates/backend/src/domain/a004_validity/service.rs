use super::repository;
use crate::shared::api_error::DomainError;
use contracts::domain::a004_validity::{Validity, ValidityDto};
use uuid::Uuid;

pub async fn create(dto: ValidityDto) -> anyhow::Result<Uuid> {
    let mut aggregate = Validity::new_for_insert(String::new(), dto.months);
    aggregate.update(&dto);

    aggregate.validate().map_err(DomainError::validation)?;
    aggregate.before_write();

    repository::insert(&aggregate).await
}

pub async fn update(dto: ValidityDto) -> anyhow::Result<Uuid> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| DomainError::validation("Invalid ID"))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Validity"))?;

    aggregate.update(&dto);

    aggregate.validate().map_err(DomainError::validation)?;
    aggregate.before_write();

    repository::update(&aggregate).await?;
    Ok(id)
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::soft_delete(id).await
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Validity>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Validity>> {
    repository::list_all().await
}
