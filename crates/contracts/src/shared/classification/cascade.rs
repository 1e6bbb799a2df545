//! Контроллер каскада "категория → подкатегории" для одной открытой формы.
//!
//! Не зависит от UI-фреймворка: фронтенд держит его в сигнале, выполняет
//! `ScopedFetch` и возвращает результат через `apply`. Ответ применяется
//! только если его билет последний выданный и категория с тех пор не менялась
//! (last-write-wins), иначе отбрасывается как устаревший.

use super::filter::{compute_visible_subcategories, exclude_orphans};
use super::selection::Classification;
use crate::domain::a001_category::{Category, CategoryId};
use crate::domain::a002_subcategory::{SubCategory, SubCategoryId, SubCategoryQuery};
use crate::domain::a003_language::LanguageId;
use crate::domain::a004_validity::ValidityId;
use crate::enums::ContentType;

/// Билет запроса подкатегорий
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    seq: u64,
    category_id: CategoryId,
}

impl RequestTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn category_id(&self) -> CategoryId {
        self.category_id
    }
}

/// Запрос, который должен выполнить вызывающий код
#[derive(Debug, Clone, PartialEq)]
pub struct ScopedFetch {
    pub ticket: RequestTicket,
    pub query: SubCategoryQuery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Список подкатегорий заменён
    Applied,
    /// Запрос упал: список пуст, ошибка записана
    Failed,
    /// Ответ устарел и проигнорирован
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubCategoryCascade {
    content_type: ContentType,
    selection: Classification,
    categories: Option<Vec<Category>>,
    visible: Vec<SubCategory>,
    loading: bool,
    error: Option<String>,
    notice: Option<String>,
    last_seq: u64,
    pending: Option<RequestTicket>,
}

impl SubCategoryCascade {
    /// Состояние формы: из сохранённой классификации или пустое для создания
    pub fn new(content_type: ContentType, seed: Classification) -> Self {
        Self {
            content_type,
            selection: seed,
            categories: None,
            visible: Vec::new(),
            loading: false,
            error: None,
            notice: None,
            last_seq: 0,
            pending: None,
        }
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    pub fn selection(&self) -> &Classification {
        &self.selection
    }

    pub fn into_selection(self) -> Classification {
        self.selection
    }

    pub fn visible(&self) -> &[SubCategory] {
        &self.visible
    }

    pub fn categories(&self) -> &[Category] {
        self.categories.as_deref().unwrap_or(&[])
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Последнее отклонённое действие пользователя
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Варианты для выпадающего списка категорий: активные плюс уже выбранная,
    /// даже если её выключили.
    pub fn category_options(&self) -> Vec<&Category> {
        let selected = self.selection.primary_category();
        self.categories()
            .iter()
            .filter(|c| c.is_active || Some(c.base.id) == selected)
            .collect()
    }

    /// Контрол подкатегорий заблокирован во время загрузки и без категории
    pub fn sub_category_control_disabled(&self) -> bool {
        self.loading || self.selection.primary_category().is_none()
    }

    /// Полный список категорий раздела, включая неактивные.
    ///
    /// По нему скрываются осиротевшие подкатегории: сиротой считается только
    /// подкатегория, родителя которой больше нет.
    pub fn set_categories(&mut self, categories: Vec<Category>) {
        let categories: Vec<Category> = categories
            .into_iter()
            .filter(|c| c.content_type == self.content_type)
            .collect();
        self.visible = exclude_orphans(std::mem::take(&mut self.visible), &categories);
        self.categories = Some(categories);
    }

    /// Первая загрузка для формы, открытой по существующей записи.
    ///
    /// Сохранённые подкатегории не сбрасываются.
    pub fn initial_fetch(&mut self) -> Option<ScopedFetch> {
        let category_id = self.selection.primary_category()?;
        Some(self.issue(category_id))
    }

    /// Пользователь выбрал категорию
    pub fn select_category(&mut self, category_id: CategoryId) -> ScopedFetch {
        self.selection.select_category(category_id);
        self.visible.clear();
        self.error = None;
        self.notice = None;
        self.issue(category_id)
    }

    /// Пользователь снял выбор категории. Запрос в полёте становится устаревшим.
    pub fn clear_category(&mut self) {
        self.selection.clear_category();
        self.visible.clear();
        self.error = None;
        self.notice = None;
        self.pending = None;
        self.loading = false;
    }

    fn issue(&mut self, category_id: CategoryId) -> ScopedFetch {
        self.last_seq += 1;
        let ticket = RequestTicket {
            seq: self.last_seq,
            category_id,
        };
        self.pending = Some(ticket);
        self.loading = true;
        ScopedFetch {
            ticket,
            query: SubCategoryQuery::scoped(self.content_type, category_id),
        }
    }

    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        self.pending.as_ref() == Some(ticket)
            && self.selection.primary_category() == Some(ticket.category_id)
    }

    /// Применить результат scoped-запроса
    pub fn apply(
        &mut self,
        ticket: RequestTicket,
        result: Result<Vec<SubCategory>, String>,
    ) -> FetchOutcome {
        if !self.is_current(&ticket) {
            return FetchOutcome::Stale;
        }
        self.pending = None;
        self.loading = false;

        match result {
            Ok(list) => {
                let visible = compute_visible_subcategories(Some(ticket.category_id), &list);
                self.visible = match &self.categories {
                    Some(categories) => exclude_orphans(visible, categories),
                    None => visible,
                };
                self.error = None;
                FetchOutcome::Applied
            }
            Err(message) => {
                self.visible.clear();
                self.error = Some(message);
                FetchOutcome::Failed
            }
        }
    }

    /// Переключить подкатегорию.
    ///
    /// Выбрать можно только видимую подкатегорию; снять выбор можно с любой.
    pub fn toggle_sub_category(&mut self, id: SubCategoryId) -> Result<bool, String> {
        let selected = self.selection.sub_category_ids.contains(&id);
        if !selected && !self.visible.iter().any(|s| s.base.id == id) {
            let message = String::from("Subcategory is not available for the selected category");
            self.notice = Some(message.clone());
            return Err(message);
        }
        self.notice = None;
        Ok(self.selection.toggle_sub_category(id))
    }

    pub fn toggle_language(&mut self, id: LanguageId) -> bool {
        self.selection.toggle_language(id)
    }

    pub fn toggle_validity(&mut self, id: ValidityId) -> bool {
        self.selection.toggle_validity(id)
    }
}

#[cfg(test)]
mod tests {
    use super::super::filter::fixtures::*;
    use super::*;

    fn server_response(category_id: CategoryId, all: &[SubCategory]) -> Vec<SubCategory> {
        all.iter()
            .filter(|s| s.category_id() == category_id)
            .cloned()
            .collect()
    }

    #[test]
    fn test_select_then_apply_shows_scoped_list() {
        let all = vec![sub(1, cat_id(1), true), sub(2, cat_id(2), true)];
        let mut cascade = SubCategoryCascade::new(ContentType::Course, Classification::default());
        assert!(cascade.sub_category_control_disabled());

        let fetch = cascade.select_category(cat_id(1));
        assert_eq!(fetch.query.category_id, Some(cat_id(1)));
        assert_eq!(fetch.query.content_type, Some(ContentType::Course));
        assert!(cascade.is_loading());
        assert!(cascade.sub_category_control_disabled());

        let outcome = cascade.apply(fetch.ticket, Ok(server_response(cat_id(1), &all)));
        assert_eq!(outcome, FetchOutcome::Applied);
        assert!(!cascade.sub_category_control_disabled());
        let ids: Vec<_> = cascade.visible().iter().map(|s| s.base.id).collect();
        assert_eq!(ids, vec![sub_id(1)]);
    }

    #[test]
    fn test_late_response_for_previous_category_is_discarded() {
        let all = vec![
            sub(1, cat_id(1), false),
            sub(2, cat_id(2), false),
            sub(3, cat_id(2), true),
        ];
        let mut cascade = SubCategoryCascade::new(ContentType::Course, Classification::default());

        let first = cascade.select_category(cat_id(1));
        let second = cascade.select_category(cat_id(2));

        // c2 отвечает первым, c1 опаздывает
        assert_eq!(
            cascade.apply(second.ticket, Ok(server_response(cat_id(2), &all))),
            FetchOutcome::Applied
        );
        assert_eq!(
            cascade.apply(first.ticket, Ok(server_response(cat_id(1), &all))),
            FetchOutcome::Stale
        );

        let ids: Vec<_> = cascade.visible().iter().map(|s| s.base.id).collect();
        assert_eq!(ids, vec![sub_id(2), sub_id(3)]);
    }

    #[test]
    fn test_late_response_arriving_while_newer_in_flight_is_discarded() {
        let all = vec![sub(1, cat_id(1), false), sub(2, cat_id(2), false)];
        let mut cascade = SubCategoryCascade::new(ContentType::Course, Classification::default());

        let first = cascade.select_category(cat_id(1));
        let second = cascade.select_category(cat_id(2));

        assert_eq!(
            cascade.apply(first.ticket, Ok(server_response(cat_id(1), &all))),
            FetchOutcome::Stale
        );
        assert!(cascade.visible().is_empty());
        assert!(cascade.is_loading());

        cascade.apply(second.ticket, Ok(server_response(cat_id(2), &all)));
        let ids: Vec<_> = cascade.visible().iter().map(|s| s.base.id).collect();
        assert_eq!(ids, vec![sub_id(2)]);
    }

    #[test]
    fn test_reselecting_same_category_invalidates_older_ticket() {
        let mut cascade = SubCategoryCascade::new(ContentType::Course, Classification::default());
        let first = cascade.select_category(cat_id(1));
        let second = cascade.select_category(cat_id(1));
        assert_ne!(first.ticket, second.ticket);
        assert_eq!(cascade.apply(first.ticket, Ok(vec![])), FetchOutcome::Stale);
        assert_eq!(cascade.apply(second.ticket, Ok(vec![])), FetchOutcome::Applied);
    }

    #[test]
    fn test_clear_category_discards_in_flight_response() {
        let mut cascade = SubCategoryCascade::new(ContentType::Course, Classification::default());
        let fetch = cascade.select_category(cat_id(1));
        cascade.clear_category();
        assert_eq!(
            cascade.apply(fetch.ticket, Ok(vec![sub(1, cat_id(1), false)])),
            FetchOutcome::Stale
        );
        assert!(cascade.visible().is_empty());
        assert!(!cascade.is_loading());
    }

    #[test]
    fn test_failed_fetch_empties_list_and_keeps_category() {
        let mut cascade = SubCategoryCascade::new(ContentType::Course, Classification::default());
        let fetch = cascade.select_category(cat_id(1));
        let outcome = cascade.apply(fetch.ticket, Err("HTTP 500".into()));

        assert_eq!(outcome, FetchOutcome::Failed);
        assert!(cascade.visible().is_empty());
        assert_eq!(cascade.error(), Some("HTTP 500"));
        assert_eq!(cascade.selection().category_ids, vec![cat_id(1)]);
        assert!(!cascade.is_loading());
    }

    #[test]
    fn test_changing_category_clears_selected_subcategories() {
        let all = vec![sub(1, cat_id(1), false), sub(2, cat_id(2), false)];
        let mut cascade = SubCategoryCascade::new(ContentType::Course, Classification::default());
        let fetch = cascade.select_category(cat_id(1));
        cascade.apply(fetch.ticket, Ok(server_response(cat_id(1), &all)));
        assert_eq!(cascade.toggle_sub_category(sub_id(1)), Ok(true));

        cascade.select_category(cat_id(2));
        assert!(cascade.selection().sub_category_ids.is_empty());
    }

    #[test]
    fn test_cannot_pick_subcategory_outside_visible_list() {
        let mut cascade = SubCategoryCascade::new(ContentType::Course, Classification::default());
        let fetch = cascade.select_category(cat_id(1));
        cascade.apply(fetch.ticket, Ok(vec![sub(1, cat_id(1), false)]));
        assert!(cascade.toggle_sub_category(sub_id(2)).is_err());
        assert!(cascade.selection().sub_category_ids.is_empty());
    }

    #[test]
    fn test_seeded_form_keeps_stored_subcategories_on_initial_fetch() {
        let seed = Classification {
            category_ids: vec![cat_id(1)],
            sub_category_ids: vec![sub_id(1)],
            ..Default::default()
        };
        let mut cascade = SubCategoryCascade::new(ContentType::Course, seed);
        let fetch = cascade.initial_fetch().expect("seeded category");
        assert_eq!(cascade.selection().sub_category_ids, vec![sub_id(1)]);

        cascade.apply(fetch.ticket, Ok(vec![sub(1, cat_id(1), true)]));
        assert_eq!(cascade.selection().sub_category_ids, vec![sub_id(1)]);
        // снять выбор с сохранённой подкатегории можно всегда
        assert_eq!(cascade.toggle_sub_category(sub_id(1)), Ok(false));
    }

    #[test]
    fn test_empty_seed_has_no_initial_fetch() {
        let mut cascade = SubCategoryCascade::new(ContentType::Pyq, Classification::default());
        assert!(cascade.initial_fetch().is_none());
        assert!(!cascade.is_loading());
    }

    #[test]
    fn test_orphans_hidden_once_categories_known() {
        let mut cascade = SubCategoryCascade::new(ContentType::Course, Classification::default());
        // категория выбрана, но в справочнике её уже нет
        let fetch = cascade.select_category(cat_id(5));
        cascade.apply(fetch.ticket, Ok(vec![sub(7, cat_id(5), false)]));
        assert_eq!(cascade.visible().len(), 1);

        cascade.set_categories(vec![category(1)]);
        assert!(cascade.visible().is_empty());

        let fetch = cascade.select_category(cat_id(5));
        cascade.apply(fetch.ticket, Ok(vec![sub(7, cat_id(5), false)]));
        assert!(cascade.visible().is_empty());
    }

    #[test]
    fn test_inactive_parent_is_not_an_orphan() {
        let seed = Classification {
            category_ids: vec![cat_id(1)],
            sub_category_ids: vec![sub_id(1)],
            ..Default::default()
        };
        let mut cascade = SubCategoryCascade::new(ContentType::Course, seed);
        let fetch = cascade.initial_fetch().expect("seeded category");

        let mut inactive = category(1);
        inactive.is_active = false;
        cascade.set_categories(vec![inactive, category(2)]);
        cascade.apply(fetch.ticket, Ok(vec![sub(1, cat_id(1), true)]));

        let ids: Vec<_> = cascade.visible().iter().map(|s| s.base.id).collect();
        assert_eq!(ids, vec![sub_id(1)]);
        assert_eq!(cascade.toggle_sub_category(sub_id(1)), Ok(false));
    }

    #[test]
    fn test_category_options_keep_selected_inactive_category() {
        let mut inactive = category(1);
        inactive.is_active = false;
        let mut other_inactive = category(3);
        other_inactive.is_active = false;

        let seed = Classification {
            category_ids: vec![cat_id(1)],
            ..Default::default()
        };
        let mut cascade = SubCategoryCascade::new(ContentType::Course, seed);
        cascade.set_categories(vec![inactive, category(2), other_inactive]);

        let ids: Vec<_> = cascade.category_options().iter().map(|c| c.base.id).collect();
        assert_eq!(ids, vec![cat_id(1), cat_id(2)]);

        cascade.select_category(cat_id(2));
        let ids: Vec<_> = cascade.category_options().iter().map(|c| c.base.id).collect();
        assert_eq!(ids, vec![cat_id(2)]);
    }

    #[test]
    fn test_rejected_toggle_leaves_notice_until_next_action() {
        let mut cascade = SubCategoryCascade::new(ContentType::Course, Classification::default());
        let fetch = cascade.select_category(cat_id(1));
        cascade.apply(fetch.ticket, Ok(vec![sub(1, cat_id(1), false)]));

        assert!(cascade.toggle_sub_category(sub_id(9)).is_err());
        assert!(cascade.notice().is_some());

        assert_eq!(cascade.toggle_sub_category(sub_id(1)), Ok(true));
        assert!(cascade.notice().is_none());
    }

    #[test]
    fn test_set_categories_keeps_only_own_content_type() {
        let mut cascade = SubCategoryCascade::new(ContentType::Course, Classification::default());
        let mut foreign = category(2);
        foreign.content_type = ContentType::Publication;
        cascade.set_categories(vec![category(1), foreign]);
        assert_eq!(cascade.categories().len(), 1);
    }
}
