//! Общие преобразования строк таблиц в поля агрегатов.

use chrono::{DateTime, Utc};
use contracts::domain::common::EntityMetadata;
use contracts::enums::ContentType;
use uuid::Uuid;

pub fn metadata(
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    is_deleted: bool,
    version: i32,
) -> EntityMetadata {
    EntityMetadata {
        created_at: created_at.unwrap_or_else(Utc::now),
        updated_at: updated_at.unwrap_or_else(Utc::now),
        is_deleted,
        version,
    }
}

pub fn uuid(table: &str, raw: &str) -> Uuid {
    Uuid::parse_str(raw).unwrap_or_else(|_| {
        tracing::warn!("Invalid id '{}' in table {}", raw, table);
        Uuid::nil()
    })
}

pub fn content_type(table: &str, raw: &str) -> ContentType {
    ContentType::from_code(raw).unwrap_or_else(|| {
        tracing::warn!("Unknown content type '{}' in table {}", raw, table);
        ContentType::Course
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_values_fall_back() {
        assert_eq!(uuid("a001_category", "zzz"), Uuid::nil());
        assert_eq!(content_type("a001_category", "TEST_SERIES"), ContentType::TestSeries);
        assert_eq!(content_type("a001_category", "VIDEO"), ContentType::Course);
    }
}
