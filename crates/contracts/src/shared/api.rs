//! Общие обёртки ответов REST API

use serde::{Deserialize, Serialize};

/// Тело ответа при ошибке
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Машинный код: `not_found`, `validation_error`, ...
    pub error: String,
    /// Сообщение для показа пользователю
    pub message: String,
}

/// Ответ на создание/обновление записи
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedResponse {
    pub id: String,
}

/// Сколько записей создала загрузка тестовых справочников
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedReport {
    pub categories: usize,
    pub subcategories: usize,
    pub languages: usize,
    pub validities: usize,
}

impl SeedReport {
    /// Справочники уже были заполнены, ничего не создано
    pub fn is_empty(&self) -> bool {
        self.categories + self.subcategories + self.languages + self.validities == 0
    }
}
