use super::repository;
use crate::domain::a001_category;
use crate::shared::api_error::DomainError;
use contracts::domain::a001_category::Category;
use contracts::domain::a002_subcategory::{
    CategoryRef, SubCategory, SubCategoryDto, SubCategoryQuery,
};
use std::collections::HashMap;
use uuid::Uuid;

/// Подставить имя родительской категории.
///
/// Если родитель удалён или не найден, ссылка остаётся голым идентификатором,
/// по которому клиент опознаёт осиротевшую подкатегорию.
pub fn populate_categories(subs: Vec<SubCategory>, categories: &[Category]) -> Vec<SubCategory> {
    let names: HashMap<_, _> = categories
        .iter()
        .map(|c| (c.base.id, c.base.name.as_str()))
        .collect();
    subs.into_iter()
        .map(|mut s| {
            let id = s.category_id();
            s.category = match names.get(&id) {
                Some(name) => CategoryRef::populated(id, *name),
                None => CategoryRef::id_only(id),
            };
            s
        })
        .collect()
}

pub async fn list(query: SubCategoryQuery) -> anyhow::Result<Vec<SubCategory>> {
    let subs = repository::list(query.content_type, query.category_id).await?;
    let categories = a001_category::repository::list(query.content_type, false).await?;
    Ok(populate_categories(subs, &categories))
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<SubCategory>> {
    let Some(sub) = repository::get_by_id(id).await? else {
        return Ok(None);
    };
    let parent: Vec<Category> = a001_category::repository::get_by_id(sub.category_id().value())
        .await?
        .into_iter()
        .collect();
    Ok(populate_categories(vec![sub], &parent).pop())
}

/// Родитель должен существовать и иметь тот же тип контента
async fn check_parent(sub: &SubCategory) -> anyhow::Result<()> {
    let parent = a001_category::repository::get_by_id(sub.category_id().value())
        .await?
        .ok_or_else(|| DomainError::validation("Parent category does not exist"))?;
    if parent.content_type != sub.content_type {
        return Err(DomainError::validation(format!(
            "Parent category '{}' belongs to {}, not {}",
            parent.base.name, parent.content_type, sub.content_type
        )));
    }
    Ok(())
}

pub async fn create(dto: SubCategoryDto) -> anyhow::Result<Uuid> {
    let mut aggregate =
        SubCategory::new_for_insert(String::new(), dto.category_id, dto.content_type);
    aggregate.update(&dto);

    aggregate.validate().map_err(DomainError::validation)?;
    check_parent(&aggregate).await?;
    aggregate.before_write();

    repository::insert(&aggregate).await
}

pub async fn update(dto: SubCategoryDto) -> anyhow::Result<Uuid> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| DomainError::validation("Invalid ID"))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Subcategory"))?;

    aggregate.update(&dto);

    aggregate.validate().map_err(DomainError::validation)?;
    check_parent(&aggregate).await?;
    aggregate.before_write();

    repository::update(&aggregate).await?;
    Ok(id)
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::soft_delete(id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::CategoryId;
    use contracts::enums::ContentType;

    #[test]
    fn test_populate_marks_orphans_with_raw_id() {
        let parent = Category::new_for_insert("Science".into(), ContentType::Course, true, None);
        let gone = CategoryId::new_v4();
        let subs = vec![
            SubCategory::new_for_insert("Physics".into(), parent.base.id, ContentType::Course),
            SubCategory::new_for_insert("Alchemy".into(), gone, ContentType::Course),
        ];

        let populated = populate_categories(subs, &[parent.clone()]);
        assert_eq!(populated[0].category_name(), Some("Science"));
        assert!(!populated[1].category.is_populated());

        let json = serde_json::to_value(&populated).unwrap();
        assert_eq!(json[0]["category"]["name"], "Science");
        assert_eq!(json[1]["category"], serde_json::json!(gone.value().to_string()));
    }
}
