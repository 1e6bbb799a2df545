//! Ссылка подкатегории на родительскую категорию.
//!
//! Бэкенд отдаёт поле `category` либо строкой-идентификатором, либо
//! заполненным объектом `{_id, name}`. Оба варианта сводятся к одному
//! типу прямо при десериализации, дальше по коду ходит только `CategoryRef`.

use crate::domain::a001_category::CategoryId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Нормализованная ссылка на категорию
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryRef {
    pub id: CategoryId,
    /// Есть только если бэкенд прислал заполненный объект
    pub name: Option<String>,
}

impl CategoryRef {
    pub fn id_only(id: CategoryId) -> Self {
        Self { id, name: None }
    }

    pub fn populated(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
        }
    }

    pub fn is_populated(&self) -> bool {
        self.name.is_some()
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum CategoryRefWire {
    Populated {
        #[serde(rename = "_id")]
        id: CategoryId,
        name: String,
    },
    Id(CategoryId),
}

impl<'de> Deserialize<'de> for CategoryRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match CategoryRefWire::deserialize(deserializer)? {
            CategoryRefWire::Populated { id, name } => CategoryRef::populated(id, name),
            CategoryRefWire::Id(id) => CategoryRef::id_only(id),
        })
    }
}

impl Serialize for CategoryRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let wire = match &self.name {
            Some(name) => CategoryRefWire::Populated {
                id: self.id,
                name: name.clone(),
            },
            None => CategoryRefWire::Id(self.id),
        };
        wire.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_id_and_populated_object_normalize_to_same_id() {
        let id = CategoryId::new_v4();
        let raw: CategoryRef = serde_json::from_str(&format!("\"{}\"", id)).unwrap();
        let populated: CategoryRef =
            serde_json::from_str(&format!(r#"{{"_id":"{}","name":"Banking"}}"#, id)).unwrap();

        assert_eq!(raw.id, id);
        assert_eq!(populated.id, id);
        assert!(!raw.is_populated());
        assert_eq!(populated.name.as_deref(), Some("Banking"));
    }

    #[test]
    fn test_serializes_back_to_original_shape() {
        let id = CategoryId::new_v4();
        let raw = serde_json::to_value(CategoryRef::id_only(id)).unwrap();
        assert_eq!(raw, serde_json::Value::String(id.to_string()));

        let populated = serde_json::to_value(CategoryRef::populated(id, "SSC")).unwrap();
        assert_eq!(populated["_id"], id.to_string());
        assert_eq!(populated["name"], "SSC");
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(serde_json::from_str::<CategoryRef>("42").is_err());
        assert!(serde_json::from_str::<CategoryRef>(r#"{"name":"x"}"#).is_err());
    }
}
