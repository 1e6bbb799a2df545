//! Обобщённый сервис контентных записей: секции сохраняются независимо.

use super::classification_check;
use super::store::ContentStore;
use crate::shared::api_error::DomainError;
use contracts::domain::common::AggregateRoot;
use contracts::shared::classification::Classification;
use contracts::shared::content::ContentItem;
use contracts::shared::pricing::Pricing;
use uuid::Uuid;

pub async fn list_all<T: ContentStore>() -> anyhow::Result<Vec<T>> {
    T::list_all().await
}

pub async fn get_by_id<T: ContentStore>(id: Uuid) -> anyhow::Result<Option<T>> {
    T::get_by_id(id).await
}

async fn load<T: ContentStore>(id: Uuid) -> anyhow::Result<T> {
    T::get_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found(T::element_name()))
}

/// Создать запись или обновить её основную информацию
pub async fn upsert_basic<T: ContentStore>(dto: T::BasicDto) -> anyhow::Result<Uuid> {
    match T::basic_id(&dto).map(str::to_owned) {
        Some(raw) => {
            let id = Uuid::parse_str(&raw)
                .map_err(|_| DomainError::validation(format!("Invalid ID: {}", raw)))?;
            let mut item: T = load(id).await?;
            item.apply_basic(&dto);
            item.validate().map_err(DomainError::validation)?;
            item.before_write();
            T::update(&item).await?;
            Ok(id)
        }
        None => {
            let mut item = T::from_basic(&dto);
            item.validate().map_err(DomainError::validation)?;
            item.before_write();
            let id = T::insert(&item).await?;
            tracing::info!("{} created: {}", T::element_name(), id);
            Ok(id)
        }
    }
}

pub async fn update_pricing<T: ContentStore>(id: Uuid, pricing: Pricing) -> anyhow::Result<()> {
    pricing.validate().map_err(DomainError::validation)?;
    let mut item: T = load(id).await?;
    *item.pricing_mut() = pricing;
    item.validate().map_err(DomainError::validation)?;
    item.before_write();
    T::update(&item).await
}

pub async fn update_classification<T: ContentStore>(
    id: Uuid,
    mut classification: Classification,
) -> anyhow::Result<()> {
    classification_check::dedup_selection(&mut classification);
    classification_check::validate(&classification, T::content_type()).await?;

    let mut item: T = load(id).await?;
    *item.classification_mut() = classification;
    item.before_write();
    T::update(&item).await
}

pub async fn delete<T: ContentStore>(id: Uuid) -> anyhow::Result<bool> {
    T::soft_delete(id).await
}
