use super::selection::Classification;
use crate::domain::a001_category::{Category, CategoryId};
use crate::domain::a002_subcategory::SubCategory;
use crate::enums::ContentType;
use std::collections::HashSet;

/// Подкатегории, принадлежащие категории `category_id`.
///
/// Без выбранной категории список пуст. Сравнение идёт по нормализованному
/// id ссылки, форма исходного поля `category` значения не имеет.
pub fn compute_visible_subcategories(
    category_id: Option<CategoryId>,
    all: &[SubCategory],
) -> Vec<SubCategory> {
    let Some(category_id) = category_id else {
        return Vec::new();
    };
    all.iter()
        .filter(|s| s.category_id() == category_id)
        .cloned()
        .collect()
}

/// Подкатегория "осиротела": её родителя нет среди известных категорий
pub fn is_orphan(sub: &SubCategory, categories: &[Category]) -> bool {
    !categories.iter().any(|c| c.base.id == sub.category_id())
}

/// Убирает осиротевшие подкатегории из отображения. Сами записи не трогаются.
pub fn exclude_orphans(subs: Vec<SubCategory>, categories: &[Category]) -> Vec<SubCategory> {
    let known: HashSet<CategoryId> = categories.iter().map(|c| c.base.id).collect();
    subs.into_iter()
        .filter(|s| known.contains(&s.category_id()))
        .collect()
}

/// Полный справочник классификации одного раздела
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassificationCatalog {
    pub categories: Vec<Category>,
    pub subcategories: Vec<SubCategory>,
}

impl ClassificationCatalog {
    pub fn new(categories: Vec<Category>, subcategories: Vec<SubCategory>) -> Self {
        Self {
            categories,
            subcategories,
        }
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.base.id == id)
    }

    /// Видимые подкатегории для выбранной категории без сирот
    pub fn visible_subcategories(&self, category_id: Option<CategoryId>) -> Vec<SubCategory> {
        exclude_orphans(
            compute_visible_subcategories(category_id, &self.subcategories),
            &self.categories,
        )
    }

    pub fn orphans(&self) -> Vec<&SubCategory> {
        self.subcategories
            .iter()
            .filter(|s| is_orphan(s, &self.categories))
            .collect()
    }

    /// Проверка классификации перед сохранением записи раздела `content_type`
    pub fn validate_selection(
        &self,
        selection: &Classification,
        content_type: ContentType,
    ) -> Result<(), String> {
        for id in &selection.category_ids {
            match self.category(*id) {
                None => return Err(format!("Unknown category {}", id)),
                Some(c) if c.content_type != content_type => {
                    return Err(format!(
                        "Category \"{}\" belongs to {}, not {}",
                        c.base.name,
                        c.content_type.display_name(),
                        content_type.display_name()
                    ))
                }
                Some(_) => {}
            }
        }
        for id in &selection.sub_category_ids {
            let sub = self
                .subcategories
                .iter()
                .find(|s| s.base.id == *id)
                .ok_or_else(|| format!("Unknown subcategory {}", id))?;
            if !selection.category_ids.contains(&sub.category_id()) {
                return Err(format!(
                    "Subcategory \"{}\" does not belong to the selected category",
                    sub.base.name
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::domain::a001_category::{Category, CategoryId};
    use crate::domain::a002_subcategory::{CategoryRef, SubCategory, SubCategoryId};
    use crate::domain::common::BaseAggregate;
    use crate::enums::ContentType;
    use uuid::Uuid;

    pub fn cat_id(n: u128) -> CategoryId {
        CategoryId(Uuid::from_u128(0xC000 + n))
    }

    pub fn sub_id(n: u128) -> SubCategoryId {
        SubCategoryId(Uuid::from_u128(0x5000 + n))
    }

    pub fn category(n: u128) -> Category {
        Category {
            base: BaseAggregate::new(cat_id(n), format!("c{}", n)),
            content_type: ContentType::Course,
            is_active: true,
            description: None,
        }
    }

    pub fn sub(n: u128, parent: CategoryId, populated: bool) -> SubCategory {
        SubCategory {
            base: BaseAggregate::new(sub_id(n), format!("s{}", n)),
            category: if populated {
                CategoryRef::populated(parent, "parent")
            } else {
                CategoryRef::id_only(parent)
            },
            content_type: ContentType::Course,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_selecting_c1_yields_exactly_s1() {
        let subs = vec![sub(1, cat_id(1), false), sub(2, cat_id(2), false)];
        let mut sel = Classification::default();
        sel.select_category(cat_id(1));

        let visible = compute_visible_subcategories(sel.primary_category(), &subs);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].base.id, sub_id(1));
    }

    #[test]
    fn test_membership_iff_category_matches_for_all_pairs() {
        let categories: Vec<_> = (1..=3).map(category).collect();
        let subs = vec![
            sub(1, cat_id(1), false),
            sub(2, cat_id(1), true),
            sub(3, cat_id(2), true),
            sub(4, cat_id(3), false),
            sub(5, cat_id(99), false),
        ];
        for c in &categories {
            let visible = compute_visible_subcategories(Some(c.base.id), &subs);
            for s in &subs {
                let shown = visible.iter().any(|v| v.base.id == s.base.id);
                assert_eq!(shown, s.category_id() == c.base.id);
            }
        }
    }

    #[test]
    fn test_unset_category_yields_nothing() {
        let subs = vec![sub(1, cat_id(1), false)];
        assert!(compute_visible_subcategories(None, &subs).is_empty());
    }

    #[test]
    fn test_orphan_never_visible() {
        let catalog = ClassificationCatalog::new(
            vec![category(1), category(2)],
            vec![sub(1, cat_id(1), true), sub(9, cat_id(42), false)],
        );
        for c in [None, Some(cat_id(1)), Some(cat_id(2)), Some(cat_id(42))] {
            let visible = catalog.visible_subcategories(c);
            assert!(visible.iter().all(|s| s.base.id != sub_id(9)));
        }
        assert_eq!(catalog.orphans().len(), 1);
        // запись не удаляется, только скрывается
        assert_eq!(catalog.subcategories.len(), 2);
    }

    #[test]
    fn test_validate_selection() {
        let catalog = ClassificationCatalog::new(
            vec![category(1), category(2)],
            vec![sub(1, cat_id(1), false), sub(2, cat_id(2), false)],
        );

        let ok = Classification {
            category_ids: vec![cat_id(1)],
            sub_category_ids: vec![sub_id(1)],
            ..Default::default()
        };
        assert!(catalog.validate_selection(&ok, ContentType::Course).is_ok());

        let mismatched = Classification {
            category_ids: vec![cat_id(1)],
            sub_category_ids: vec![sub_id(2)],
            ..Default::default()
        };
        assert!(catalog.validate_selection(&mismatched, ContentType::Course).is_err());

        let wrong_section = Classification {
            category_ids: vec![cat_id(1)],
            ..Default::default()
        };
        assert!(catalog
            .validate_selection(&wrong_section, ContentType::Publication)
            .is_err());

        let unknown = Classification {
            category_ids: vec![cat_id(77)],
            ..Default::default()
        };
        assert!(catalog.validate_selection(&unknown, ContentType::Course).is_err());
    }
}
