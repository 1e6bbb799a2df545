use super::repository;
use crate::shared::api_error::DomainError;
use contracts::domain::a003_language::{Language, LanguageDto};
use uuid::Uuid;

/// Код языка уникален среди неудалённых записей
async fn check_code_unique(aggregate: &Language) -> anyhow::Result<()> {
    if let Some(existing) = repository::find_by_code(&aggregate.code).await? {
        if existing.base.id != aggregate.base.id {
            return Err(DomainError::validation(format!(
                "Language with code '{}' already exists",
                aggregate.code
            )));
        }
    }
    Ok(())
}

pub async fn create(dto: LanguageDto) -> anyhow::Result<Uuid> {
    let mut aggregate = Language::new_for_insert(String::new(), String::new());
    aggregate.update(&dto);

    aggregate.validate().map_err(DomainError::validation)?;
    check_code_unique(&aggregate).await?;
    aggregate.before_write();

    repository::insert(&aggregate).await
}

pub async fn update(dto: LanguageDto) -> anyhow::Result<Uuid> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| DomainError::validation("Invalid ID"))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Language"))?;

    aggregate.update(&dto);

    aggregate.validate().map_err(DomainError::validation)?;
    check_code_unique(&aggregate).await?;
    aggregate.before_write();

    repository::update(&aggregate).await?;
    Ok(id)
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::soft_delete(id).await
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Language>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Language>> {
    repository::list_all().await
}
