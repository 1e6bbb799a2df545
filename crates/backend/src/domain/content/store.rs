use async_trait::async_trait;
use contracts::shared::classification::Classification;
use contracts::shared::content::ContentItem;
use contracts::shared::pricing::Pricing;
use uuid::Uuid;

use crate::shared::data::json_list;

/// Хранилище контентного агрегата. Реализуется репозиторием каждой таблицы
/// a005..a008, обобщённый сервис работает только через этот трейт.
#[async_trait]
pub trait ContentStore: ContentItem + Send + Sync + 'static {
    async fn list_all() -> anyhow::Result<Vec<Self>>;

    async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Self>>;

    async fn insert(item: &Self) -> anyhow::Result<Uuid>;

    async fn update(item: &Self) -> anyhow::Result<()>;

    async fn soft_delete(id: Uuid) -> anyhow::Result<bool>;
}

/// Колонки секций "цена" и "классификация", одинаковые во всех контентных таблицах
#[derive(Debug, Clone, PartialEq)]
pub struct SectionColumns {
    pub price: f64,
    pub discount_price: Option<f64>,
    pub category_ids: String,
    pub sub_category_ids: String,
    pub language_ids: String,
    pub validity_ids: String,
}

impl SectionColumns {
    pub fn from_item<T: ContentItem>(item: &T) -> Self {
        let pricing = item.pricing();
        let c = item.classification();
        Self {
            price: pricing.price,
            discount_price: pricing.discount_price,
            category_ids: json_list::encode(&c.category_ids),
            sub_category_ids: json_list::encode(&c.sub_category_ids),
            language_ids: json_list::encode(&c.language_ids),
            validity_ids: json_list::encode(&c.validity_ids),
        }
    }

    pub fn pricing(&self) -> Pricing {
        Pricing {
            price: self.price,
            discount_price: self.discount_price,
        }
    }

    pub fn classification(&self) -> Classification {
        Classification {
            category_ids: json_list::decode("category_ids", &self.category_ids),
            sub_category_ids: json_list::decode("sub_category_ids", &self.sub_category_ids),
            language_ids: json_list::decode("language_ids", &self.language_ids),
            validity_ids: json_list::decode("validity_ids", &self.validity_ids),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::CategoryId;
    use contracts::domain::a005_course::Course;

    #[test]
    fn test_sections_survive_columns() {
        let mut course = Course::new_for_insert("Calculus".into(), String::new(), 30);
        course.pricing = Pricing {
            price: 1200.0,
            discount_price: Some(999.0),
        };
        course
            .classification
            .select_category(CategoryId(Uuid::from_u128(7)));

        let columns = SectionColumns::from_item(&course);
        assert_eq!(columns.sub_category_ids, "[]");
        assert_eq!(columns.pricing(), course.pricing);
        assert_eq!(columns.classification(), course.classification);
    }
}
