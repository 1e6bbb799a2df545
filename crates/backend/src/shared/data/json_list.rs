//! Списки (идентификаторы классификации, авторы) хранятся в одной TEXT-колонке как JSON-массив.

use serde::{de::DeserializeOwned, Serialize};

pub fn encode<T: Serialize>(items: &[T]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

/// Битое значение в БД не роняет чтение записи: возвращается пустой список
pub fn decode<T: DeserializeOwned>(column: &str, raw: &str) -> Vec<T> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!("Malformed JSON list in column {}: {}", column, e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::CategoryId;

    #[test]
    fn test_ids_are_stored_as_plain_strings() {
        let id = CategoryId(uuid::Uuid::from_u128(1));
        let raw = encode(&[id]);
        assert_eq!(raw, "[\"00000000-0000-0000-0000-000000000001\"]");
        let back: Vec<CategoryId> = decode("category_ids", &raw);
        assert_eq!(back, vec![id]);
    }

    #[test]
    fn test_malformed_or_empty_column_is_empty_list() {
        let empty: Vec<String> = decode("authors", "");
        assert!(empty.is_empty());
        let broken: Vec<String> = decode("authors", "{not json");
        assert!(broken.is_empty());
    }
}
