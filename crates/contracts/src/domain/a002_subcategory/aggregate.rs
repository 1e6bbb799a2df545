use super::category_ref::CategoryRef;
use crate::domain::a001_category::CategoryId;
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::ContentType;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

crate::aggregate_id!(
    /// Уникальный идентификатор подкатегории
    SubCategoryId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Подкатегория: принадлежит ровно одной категории
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategory {
    #[serde(flatten)]
    pub base: BaseAggregate<SubCategoryId>,

    pub category: CategoryRef,
    pub content_type: ContentType,
}

impl SubCategory {
    /// Создать новую подкатегорию для вставки в БД
    pub fn new_for_insert(name: String, category_id: CategoryId, content_type: ContentType) -> Self {
        Self {
            base: BaseAggregate::new(SubCategoryId::new_v4(), name),
            category: CategoryRef::id_only(category_id),
            content_type,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Идентификатор родительской категории независимо от формы ссылки
    pub fn category_id(&self) -> CategoryId {
        self.category.id
    }

    pub fn category_name(&self) -> Option<&str> {
        self.category.name.as_deref()
    }

    /// Обновить данные из DTO
    pub fn update(&mut self, dto: &SubCategoryDto) {
        self.base.name = dto.name.trim().to_string();
        self.content_type = dto.content_type;
        if self.category.id != dto.category_id {
            self.category = CategoryRef::id_only(dto.category_id);
        }
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.base.name.trim().is_empty() {
            return Err("Subcategory name must not be empty".into());
        }
        if self.base.name.chars().count() > 120 {
            return Err("Subcategory name must be at most 120 characters".into());
        }
        Ok(())
    }

    /// Хук перед записью
    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for SubCategory {
    type Id = SubCategoryId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "subcategories"
    }

    fn element_name() -> &'static str {
        "Subcategory"
    }

    fn list_name() -> &'static str {
        "Subcategories"
    }

    fn table_name() -> &'static str {
        "a002_subcategory"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления подкатегории
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategoryDto {
    pub id: Option<String>,
    pub name: String,
    pub category_id: CategoryId,
    pub content_type: ContentType,
}

impl From<&SubCategory> for SubCategoryDto {
    fn from(s: &SubCategory) -> Self {
        Self {
            id: Some(s.to_string_id()),
            name: s.base.name.clone(),
            category_id: s.category_id(),
            content_type: s.content_type,
        }
    }
}

/// Параметры scoped-запроса `GET /api/subcategories?contentType=..&categoryId=..`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategoryQuery {
    pub content_type: Option<ContentType>,
    pub category_id: Option<CategoryId>,
}

impl SubCategoryQuery {
    pub fn scoped(content_type: ContentType, category_id: CategoryId) -> Self {
        Self {
            content_type: Some(content_type),
            category_id: Some(category_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_both_category_shapes() {
        let sub_id = SubCategoryId::new_v4();
        let cat_id = CategoryId::new_v4();

        let raw = format!(
            r#"{{"_id":"{sub_id}","name":"PO","category":"{cat_id}","contentType":"COURSE"}}"#
        );
        let populated = format!(
            r#"{{"_id":"{sub_id}","name":"PO","category":{{"_id":"{cat_id}","name":"Banking"}},"contentType":"COURSE"}}"#
        );

        let a: SubCategory = serde_json::from_str(&raw).unwrap();
        let b: SubCategory = serde_json::from_str(&populated).unwrap();
        assert_eq!(a.category_id(), cat_id);
        assert_eq!(b.category_id(), cat_id);
        assert_eq!(a.category_name(), None);
        assert_eq!(b.category_name(), Some("Banking"));
    }

    #[test]
    fn test_update_moves_to_new_category() {
        let old_cat = CategoryId::new_v4();
        let new_cat = CategoryId::new_v4();
        let mut sub = SubCategory::new_for_insert("Clerk".into(), old_cat, ContentType::Course);
        sub.category = CategoryRef::populated(old_cat, "Banking");

        let mut dto = SubCategoryDto::from(&sub);
        dto.category_id = new_cat;
        sub.update(&dto);

        assert_eq!(sub.category_id(), new_cat);
        assert!(!sub.category.is_populated());
    }

    #[test]
    fn test_scoped_query_serializes_camel_case() {
        let cat = CategoryId::new_v4();
        let q = SubCategoryQuery::scoped(ContentType::TestSeries, cat);
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["contentType"], "TEST_SERIES");
        assert_eq!(json["categoryId"], cat.to_string());
    }
}
