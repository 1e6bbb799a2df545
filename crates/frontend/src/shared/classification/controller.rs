use crate::domain::a001_category::api as category_api;
use crate::domain::a002_subcategory::api as subcategory_api;
use crate::domain::a003_language::api as language_api;
use crate::domain::a004_validity::api as validity_api;
use contracts::domain::a001_category::CategoryId;
use contracts::domain::a002_subcategory::SubCategoryId;
use contracts::domain::a003_language::{Language, LanguageId};
use contracts::domain::a004_validity::{Validity, ValidityId};
use contracts::domain::common::AggregateId;
use contracts::enums::ContentType;
use contracts::shared::classification::{Classification, FetchOutcome, ScopedFetch, SubCategoryCascade};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Реактивная обёртка над `SubCategoryCascade` для одной открытой формы.
///
/// Каждый выбор категории порождает scoped-запрос; ответ проходит через
/// `apply` с билетом, поэтому опоздавшие ответы не затирают текущий список.
#[derive(Clone, Copy)]
pub struct CascadeController {
    pub cascade: RwSignal<SubCategoryCascade>,
    pub languages: RwSignal<Vec<Language>>,
    pub validities: RwSignal<Vec<Validity>>,
    pub lookup_error: RwSignal<Option<String>>,
}

impl CascadeController {
    pub fn new(content_type: ContentType, seed: Classification) -> Self {
        Self {
            cascade: RwSignal::new(SubCategoryCascade::new(content_type, seed)),
            languages: RwSignal::new(Vec::new()),
            validities: RwSignal::new(Vec::new()),
            lookup_error: RwSignal::new(None),
        }
    }

    /// Загрузка справочников формы. Для сохранённой записи сразу
    /// подтягиваются подкатегории выбранной категории.
    pub fn load(&self) {
        let content_type = self.cascade.with_untracked(|c| c.content_type());
        let cascade = self.cascade;
        let languages = self.languages;
        let validities = self.validities;
        let lookup_error = self.lookup_error;

        spawn_local(async move {
            match category_api::fetch_all(content_type).await {
                Ok(list) => {
                    cascade.try_update(|c| c.set_categories(list));
                }
                Err(e) => {
                    lookup_error.try_set(Some(format!("Failed to load categories: {}", e)));
                }
            }
        });

        spawn_local(async move {
            match language_api::fetch_list().await {
                Ok(list) => {
                    languages.try_set(list);
                }
                Err(e) => {
                    lookup_error.try_set(Some(format!("Failed to load languages: {}", e)));
                }
            }
        });

        spawn_local(async move {
            match validity_api::fetch_list().await {
                Ok(list) => {
                    validities.try_set(list);
                }
                Err(e) => {
                    lookup_error.try_set(Some(format!("Failed to load validities: {}", e)));
                }
            }
        });

        if let Some(fetch) = self.cascade.try_update(|c| c.initial_fetch()).flatten() {
            self.run(fetch);
        }
    }

    fn run(&self, fetch: ScopedFetch) {
        let cascade = self.cascade;
        spawn_local(async move {
            let result = subcategory_api::fetch_list(&fetch.query).await;
            // форма могла закрыться, пока шёл запрос
            match cascade.try_update(|c| c.apply(fetch.ticket, result)) {
                Some(FetchOutcome::Stale) => {
                    log::debug!("stale subcategory response dropped (seq {})", fetch.ticket.seq())
                }
                Some(FetchOutcome::Failed) => {
                    log::warn!("subcategory fetch failed for category {}", fetch.ticket.category_id())
                }
                Some(FetchOutcome::Applied) | None => {}
            }
        });
    }

    /// Значение из `<select>`: пустая строка снимает выбор
    pub fn select_category(&self, raw: &str) {
        match CategoryId::from_string(raw) {
            Ok(id) => {
                if let Some(fetch) = self.cascade.try_update(|c| c.select_category(id)) {
                    self.run(fetch);
                }
            }
            Err(_) => self.cascade.update(|c| c.clear_category()),
        }
    }

    /// Отказ остаётся в `notice()` каскада и показывается под списком
    pub fn toggle_sub_category(&self, id: SubCategoryId) {
        if let Some(Err(e)) = self.cascade.try_update(|c| c.toggle_sub_category(id)) {
            log::debug!("subcategory toggle rejected: {}", e);
        }
    }

    pub fn toggle_language(&self, id: LanguageId) {
        self.cascade.update(|c| {
            c.toggle_language(id);
        });
    }

    pub fn toggle_validity(&self, id: ValidityId) {
        self.cascade.update(|c| {
            c.toggle_validity(id);
        });
    }

    pub fn selection(&self) -> Classification {
        self.cascade.with_untracked(|c| c.selection().clone())
    }
}
