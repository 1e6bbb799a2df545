use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::ContentType;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

crate::aggregate_id!(
    /// Уникальный идентификатор категории
    CategoryId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Категория: верхний уровень классификации внутри раздела платформы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(flatten)]
    pub base: BaseAggregate<CategoryId>,

    pub content_type: ContentType,
    pub is_active: bool,
    #[serde(default)]
    pub description: Option<String>,
}

impl Category {
    /// Создать новую категорию для вставки в БД
    pub fn new_for_insert(
        name: String,
        content_type: ContentType,
        is_active: bool,
        description: Option<String>,
    ) -> Self {
        Self {
            base: BaseAggregate::new(CategoryId::new_v4(), name),
            content_type,
            is_active,
            description,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Обновить данные из DTO
    pub fn update(&mut self, dto: &CategoryDto) {
        self.base.name = dto.name.trim().to_string();
        self.content_type = dto.content_type;
        self.is_active = dto.is_active;
        self.description = dto.description.clone().filter(|d| !d.trim().is_empty());
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.base.name.trim().is_empty() {
            return Err("Category name must not be empty".into());
        }
        if self.base.name.chars().count() > 120 {
            return Err("Category name must be at most 120 characters".into());
        }
        Ok(())
    }

    /// Хук перед записью
    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Category {
    type Id = CategoryId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn name(&self) -> &str {
        &self.base.name
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "categories"
    }

    fn element_name() -> &'static str {
        "Category"
    }

    fn list_name() -> &'static str {
        "Categories"
    }

    fn table_name() -> &'static str {
        "a001_category"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления категории
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: Option<String>,
    pub name: String,
    pub content_type: ContentType,
    pub is_active: bool,
    pub description: Option<String>,
}

impl Default for CategoryDto {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            content_type: ContentType::Course,
            is_active: true,
            description: None,
        }
    }
}

impl From<&Category> for CategoryDto {
    fn from(c: &Category) -> Self {
        Self {
            id: Some(c.to_string_id()),
            name: c.base.name.clone(),
            content_type: c.content_type,
            is_active: c.is_active,
            description: c.description.clone(),
        }
    }
}

/// Параметры `GET /api/categories`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryListQuery {
    pub content_type: Option<ContentType>,
    #[serde(default)]
    pub active_only: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape_uses_underscore_id() {
        let c = Category::new_for_insert("Banking".into(), ContentType::Course, true, None);
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["_id"], c.to_string_id());
        assert_eq!(json["name"], "Banking");
        assert_eq!(json["contentType"], "COURSE");
        assert_eq!(json["isActive"], true);
    }

    #[test]
    fn test_minimal_wire_payload_deserializes() {
        let id = CategoryId::new_v4();
        let json = format!(
            r#"{{"_id":"{}","name":"SSC","contentType":"TEST_SERIES","isActive":false}}"#,
            id
        );
        let c: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(c.base.id, id);
        assert_eq!(c.content_type, ContentType::TestSeries);
        assert!(c.description.is_none());
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let c = Category::new_for_insert("   ".into(), ContentType::Pyq, true, None);
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_update_drops_blank_description() {
        let mut c = Category::new_for_insert("UPSC".into(), ContentType::Course, true, None);
        let dto = CategoryDto {
            name: "  UPSC CSE ".into(),
            description: Some("  ".into()),
            is_active: false,
            ..CategoryDto::from(&c)
        };
        c.update(&dto);
        assert_eq!(c.base.name, "UPSC CSE");
        assert!(c.description.is_none());
        assert!(!c.is_active);
    }

    #[test]
    fn test_list_query_from_camel_case() {
        let q: CategoryListQuery =
            serde_json::from_str(r#"{"contentType":"PUBLICATION","activeOnly":true}"#).unwrap();
        assert_eq!(q.content_type, Some(ContentType::Publication));
        assert!(q.active_only);
    }
}
