use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Служебные поля записи справочника или контента
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityMetadata {
    pub created_at: DateTime<Utc>,
    /// Колонка "Updated" в таблицах панели
    pub updated_at: DateTime<Utc>,
    /// Удалённые записи остаются в БД, но не попадают в выборки
    #[serde(default)]
    pub is_deleted: bool,
    /// Растёт на каждом сохранении
    #[serde(default)]
    pub version: i32,
}

impl EntityMetadata {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            is_deleted: false,
            version: 0,
        }
    }

    /// Отметка о сохранении: новое время изменения и следующая версия
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
        self.version += 1;
    }
}

impl Default for EntityMetadata {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_bumps_version_and_time() {
        let mut m = EntityMetadata::new();
        let created = m.created_at;
        m.touch();
        m.touch();
        assert_eq!(m.version, 2);
        assert_eq!(m.created_at, created);
        assert!(m.updated_at >= created);
    }

    #[test]
    fn test_flags_default_when_absent_on_wire() {
        let json = r#"{"createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-02T00:00:00Z"}"#;
        let m: EntityMetadata = serde_json::from_str(json).unwrap();
        assert!(!m.is_deleted);
        assert_eq!(m.version, 0);
    }
}
