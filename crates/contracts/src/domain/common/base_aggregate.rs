use super::EntityMetadata;
use serde::{Deserialize, Serialize};

/// Базовый агрегат с обязательными полями для всех агрегатов
///
/// `id` уходит на провод как `_id`, как его ждёт панель администратора.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseAggregate<Id> {
    /// Уникальный идентификатор записи
    #[serde(rename = "_id")]
    pub id: Id,
    /// Отображаемое название
    pub name: String,
    /// Метаданные жизненного цикла
    #[serde(default)]
    pub metadata: EntityMetadata,
}

impl<Id> BaseAggregate<Id> {
    /// Создать новый агрегат
    pub fn new(id: Id, name: String) -> Self {
        Self {
            id,
            name,
            metadata: EntityMetadata::new(),
        }
    }

    /// Создать агрегат с существующими метаданными (для загрузки из БД)
    pub fn with_metadata(id: Id, name: String, metadata: EntityMetadata) -> Self {
        Self { id, name, metadata }
    }

    /// Обновить timestamp и версию перед записью
    pub fn touch(&mut self) {
        self.metadata.touch();
    }
}
