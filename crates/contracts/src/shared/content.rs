//! Общий контракт контентных агрегатов (курсы, публикации, PYQ, тест-серии).
//!
//! Каждая запись редактируется тремя независимыми секциями: основная
//! информация, цена и классификация. Бэкенд и фронтенд работают с секциями
//! обобщённо через этот трейт.

use crate::domain::common::AggregateRoot;
use crate::enums::ContentType;
use crate::shared::classification::Classification;
use crate::shared::pricing::Pricing;
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

pub trait ContentItem: AggregateRoot + Clone + Serialize + DeserializeOwned {
    /// DTO секции "основная информация"
    type BasicDto: Clone
        + Default
        + Serialize
        + DeserializeOwned
        + Send
        + Sync
        + 'static
        + for<'a> From<&'a Self>;

    fn content_type() -> ContentType;

    fn uuid(&self) -> Uuid;

    /// Новая запись из основной информации (цена и классификация пустые)
    fn from_basic(dto: &Self::BasicDto) -> Self;

    fn apply_basic(&mut self, dto: &Self::BasicDto);

    fn basic_id(dto: &Self::BasicDto) -> Option<&str>;

    fn pricing(&self) -> &Pricing;

    fn pricing_mut(&mut self) -> &mut Pricing;

    fn classification(&self) -> &Classification;

    fn classification_mut(&mut self) -> &mut Classification;

    fn is_active(&self) -> bool;

    fn validate(&self) -> Result<(), String>;

    fn before_write(&mut self);
}

/// Проверка имени, общая для всех контентных записей
pub(crate) fn validate_title(kind: &str, name: &str) -> Result<(), String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("{} name must not be empty", kind));
    }
    if name.chars().count() > 200 {
        return Err(format!("{} name must be at most 200 characters", kind));
    }
    Ok(())
}
