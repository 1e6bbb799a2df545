//! Серверная проверка классификации перед сохранением.

use crate::domain::{a001_category, a002_subcategory, a003_language, a004_validity};
use crate::shared::api_error::DomainError;
use contracts::enums::ContentType;
use contracts::shared::classification::{Classification, ClassificationCatalog};
use std::collections::HashSet;
use std::hash::Hash;

/// Повторы в списках выбора не сохраняются; порядок первого вхождения сохраняется
pub fn dedup_selection(c: &mut Classification) {
    dedup(&mut c.category_ids);
    dedup(&mut c.sub_category_ids);
    dedup(&mut c.language_ids);
    dedup(&mut c.validity_ids);
}

fn dedup<T: Copy + Eq + Hash>(items: &mut Vec<T>) {
    let mut seen = HashSet::new();
    items.retain(|i| seen.insert(*i));
}

/// Проверяет, что все идентификаторы существуют и каждая подкатегория
/// принадлежит одной из выбранных категорий того же типа контента.
pub async fn validate(c: &Classification, content_type: ContentType) -> anyhow::Result<()> {
    let categories = a001_category::repository::list(Some(content_type), false).await?;
    let subcategories = a002_subcategory::repository::list(Some(content_type), None).await?;
    ClassificationCatalog::new(categories, subcategories)
        .validate_selection(c, content_type)
        .map_err(DomainError::validation)?;

    if !c.language_ids.is_empty() {
        let known: HashSet<_> = a003_language::repository::list_all()
            .await?
            .into_iter()
            .map(|l| l.base.id)
            .collect();
        if let Some(missing) = c.language_ids.iter().find(|id| !known.contains(id)) {
            return Err(DomainError::validation(format!("Unknown language: {}", missing)));
        }
    }

    if !c.validity_ids.is_empty() {
        let known: HashSet<_> = a004_validity::repository::list_all()
            .await?
            .into_iter()
            .map(|v| v.base.id)
            .collect();
        if let Some(missing) = c.validity_ids.iter().find(|id| !known.contains(id)) {
            return Err(DomainError::validation(format!("Unknown validity: {}", missing)));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_language::LanguageId;
    use uuid::Uuid;

    #[test]
    fn test_dedup_keeps_first_occurrence_order() {
        let a = LanguageId(Uuid::from_u128(1));
        let b = LanguageId(Uuid::from_u128(2));
        let mut c = Classification {
            language_ids: vec![b, a, b, a],
            ..Default::default()
        };
        dedup_selection(&mut c);
        assert_eq!(c.language_ids, vec![b, a]);
    }
}
