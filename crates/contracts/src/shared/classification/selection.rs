use crate::domain::a001_category::CategoryId;
use crate::domain::a002_subcategory::SubCategoryId;
use crate::domain::a003_language::LanguageId;
use crate::domain::a004_validity::ValidityId;
use serde::{Deserialize, Serialize};

/// Выбранная классификация записи.
///
/// Инвариант: каждая подкатегория из `sub_category_ids` принадлежит одной из
/// `category_ids`. Поддерживается очисткой подкатегорий при любом изменении
/// списка категорий.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    #[serde(default)]
    pub category_ids: Vec<CategoryId>,
    #[serde(default)]
    pub sub_category_ids: Vec<SubCategoryId>,
    #[serde(default)]
    pub language_ids: Vec<LanguageId>,
    #[serde(default)]
    pub validity_ids: Vec<ValidityId>,
}

impl Classification {
    /// Первая (в большинстве форм единственная) выбранная категория
    pub fn primary_category(&self) -> Option<CategoryId> {
        self.category_ids.first().copied()
    }

    /// Выбор одной категории. Подкатегории сбрасываются всегда.
    pub fn select_category(&mut self, id: CategoryId) {
        self.category_ids = vec![id];
        self.sub_category_ids.clear();
    }

    /// Множественный выбор категорий.
    ///
    /// Возвращает `true`, если список изменился (и подкатегории сброшены).
    pub fn set_category_ids(&mut self, ids: Vec<CategoryId>) -> bool {
        let mut deduped: Vec<CategoryId> = Vec::with_capacity(ids.len());
        for id in ids {
            if !deduped.contains(&id) {
                deduped.push(id);
            }
        }
        if deduped == self.category_ids {
            return false;
        }
        self.category_ids = deduped;
        self.sub_category_ids.clear();
        true
    }

    pub fn clear_category(&mut self) {
        self.category_ids.clear();
        self.sub_category_ids.clear();
    }

    /// Возвращает `true`, если подкатегория теперь выбрана
    pub fn toggle_sub_category(&mut self, id: SubCategoryId) -> bool {
        toggle(&mut self.sub_category_ids, id)
    }

    pub fn toggle_language(&mut self, id: LanguageId) -> bool {
        toggle(&mut self.language_ids, id)
    }

    pub fn toggle_validity(&mut self, id: ValidityId) -> bool {
        toggle(&mut self.validity_ids, id)
    }

    pub fn is_empty(&self) -> bool {
        self.category_ids.is_empty()
            && self.sub_category_ids.is_empty()
            && self.language_ids.is_empty()
            && self.validity_ids.is_empty()
    }
}

fn toggle<T: PartialEq>(list: &mut Vec<T>, id: T) -> bool {
    if let Some(pos) = list.iter().position(|x| *x == id) {
        list.remove(pos);
        false
    } else {
        list.push(id);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Classification {
        Classification {
            category_ids: vec![CategoryId::new_v4()],
            sub_category_ids: vec![SubCategoryId::new_v4(), SubCategoryId::new_v4()],
            language_ids: vec![LanguageId::new_v4()],
            validity_ids: vec![ValidityId::new_v4()],
        }
    }

    #[test]
    fn test_select_category_always_clears_subcategories() {
        let mut sel = seeded();
        let same = sel.category_ids[0];
        sel.select_category(same);
        assert_eq!(sel.category_ids, vec![same]);
        assert!(sel.sub_category_ids.is_empty());

        let mut sel = seeded();
        let other = CategoryId::new_v4();
        sel.select_category(other);
        assert_eq!(sel.category_ids, vec![other]);
        assert!(sel.sub_category_ids.is_empty());
    }

    #[test]
    fn test_any_change_of_category_list_clears_subcategories() {
        let base = seeded();
        let first = base.category_ids[0];
        let candidates = vec![
            vec![],
            vec![CategoryId::new_v4()],
            vec![first, CategoryId::new_v4()],
            vec![CategoryId::new_v4(), first],
        ];
        for ids in candidates {
            let mut sel = base.clone();
            assert!(sel.set_category_ids(ids.clone()));
            assert!(sel.sub_category_ids.is_empty(), "not cleared for {:?}", ids);
        }
    }

    #[test]
    fn test_unchanged_category_list_keeps_subcategories() {
        let mut sel = seeded();
        let ids = sel.category_ids.clone();
        assert!(!sel.set_category_ids(ids));
        assert_eq!(sel.sub_category_ids.len(), 2);
    }

    #[test]
    fn test_set_category_ids_dedups() {
        let mut sel = Classification::default();
        let a = CategoryId::new_v4();
        sel.set_category_ids(vec![a, a]);
        assert_eq!(sel.category_ids, vec![a]);
    }

    #[test]
    fn test_language_and_validity_untouched_by_category_change() {
        let mut sel = seeded();
        let langs = sel.language_ids.clone();
        let vals = sel.validity_ids.clone();
        sel.select_category(CategoryId::new_v4());
        assert_eq!(sel.language_ids, langs);
        assert_eq!(sel.validity_ids, vals);
    }

    #[test]
    fn test_toggle() {
        let mut sel = Classification::default();
        let l = LanguageId::new_v4();
        assert!(sel.toggle_language(l));
        assert!(!sel.toggle_language(l));
        assert!(sel.language_ids.is_empty());
        assert!(sel.is_empty());
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let sel: Classification = serde_json::from_str(r#"{"categoryIds":[]}"#).unwrap();
        assert!(sel.is_empty());
    }
}
