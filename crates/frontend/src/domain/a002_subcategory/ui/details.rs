use crate::domain::a001_category::api as category_api;
use crate::domain::a002_subcategory::api;
use crate::shared::components::ui::{Input, Select};
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalHeader;
use crate::shared::toast::ToastService;
use contracts::domain::a001_category::{Category, CategoryId};
use contracts::domain::a002_subcategory::{SubCategory, SubCategoryDto};
use contracts::domain::common::AggregateId;
use contracts::enums::ContentType;
use leptos::prelude::*;

/// Состояние формы: категория может быть ещё не выбрана
#[derive(Clone, Debug, PartialEq)]
pub struct SubCategoryForm {
    pub id: Option<String>,
    pub name: String,
    pub content_type: ContentType,
    pub category_id: Option<CategoryId>,
}

impl Default for SubCategoryForm {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            content_type: ContentType::Course,
            category_id: None,
        }
    }
}

impl From<&SubCategory> for SubCategoryForm {
    fn from(s: &SubCategory) -> Self {
        Self {
            id: Some(s.to_string_id()),
            name: s.base.name.clone(),
            content_type: s.content_type,
            category_id: Some(s.category_id()),
        }
    }
}

impl SubCategoryForm {
    /// Собрать DTO; ошибки те же, что вернул бы сервер
    pub fn to_dto(&self) -> Result<SubCategoryDto, String> {
        let category_id = self
            .category_id
            .ok_or_else(|| "Select a parent category".to_string())?;
        let dto = SubCategoryDto {
            id: self.id.clone(),
            name: self.name.clone(),
            category_id,
            content_type: self.content_type,
        };
        let mut probe = SubCategory::new_for_insert(String::new(), category_id, self.content_type);
        probe.update(&dto);
        probe.validate()?;
        Ok(dto)
    }

    /// Смена раздела сбрасывает категорию: она принадлежит другому разделу
    pub fn set_content_type(&mut self, content_type: ContentType) {
        if self.content_type != content_type {
            self.content_type = content_type;
            self.category_id = None;
        }
    }
}

#[component]
pub fn SubCategoryDetails(
    id: Option<String>,
    saving: RwSignal<bool>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found");
    let form = RwSignal::new(SubCategoryForm::default());
    let error = RwSignal::new(None::<String>);
    let categories = RwSignal::new(Vec::<Category>::new());
    let is_edit = id.is_some();

    if let Some(existing_id) = id {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_by_id(&existing_id).await {
                Ok(s) => form.set(SubCategoryForm::from(&s)),
                Err(e) => error.set(Some(format!("Failed to load subcategory: {}", e))),
            }
        });
    }

    // список категорий перезагружается при смене раздела
    Effect::new(move |_| {
        let ct = form.with(|f| f.content_type);
        wasm_bindgen_futures::spawn_local(async move {
            match category_api::fetch_active(ct).await {
                Ok(list) => {
                    let _ = categories.try_set(list);
                }
                Err(e) => {
                    let _ = error.try_set(Some(format!("Failed to load categories: {}", e)));
                }
            }
        });
    });

    let content_type_options: Vec<(String, String)> = ContentType::all()
        .into_iter()
        .map(|ct| (ct.code().to_string(), ct.display_name().to_string()))
        .collect();

    let category_options = Signal::derive(move || {
        std::iter::once((String::new(), "Select category".to_string()))
            .chain(
                categories
                    .get()
                    .into_iter()
                    .map(|c| (c.to_string_id(), c.base.name)),
            )
            .collect::<Vec<_>>()
    });

    let save = move || {
        let dto = match form.with_untracked(|f| f.to_dto()) {
            Ok(dto) => dto,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        error.set(None);
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::save(&dto).await {
                Ok(_) => {
                    toasts.success(format!("Subcategory \"{}\" saved", dto.name.trim()));
                    saving.set(false);
                    on_saved.run(());
                }
                Err(e) => {
                    toasts.error(format!("Failed to save subcategory: {}", e));
                    error.set(Some(e));
                    saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="details-container">
            <ModalHeader
                title=Signal::derive(move || if is_edit { "Edit subcategory".to_string() } else { "New subcategory".to_string() })
                on_close=on_cancel
            />

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <Input
                    label="Name"
                    id="subcategory-name"
                    required=true
                    value=Signal::derive(move || form.get().name)
                    on_input=Callback::new(move |v| form.update(|f| f.name = v))
                />
                <Select
                    label="Section"
                    id="subcategory-content-type"
                    value=Signal::derive(move || form.get().content_type.code().to_string())
                    options=content_type_options
                    on_change=Callback::new(move |code: String| {
                        if let Some(ct) = ContentType::from_code(&code) {
                            form.update(|f| f.set_content_type(ct));
                        }
                    })
                />
                <Select
                    label="Category"
                    id="subcategory-category"
                    value=Signal::derive(move || form.get().category_id.map(|c| c.as_string()).unwrap_or_default())
                    options=category_options
                    on_change=Callback::new(move |raw: String| {
                        form.update(|f| f.category_id = CategoryId::from_string(&raw).ok());
                    })
                />
            </div>

            <div class="details-actions">
                <button class="button button--primary" disabled=move || saving.get() on:click=move |_| save()>
                    {icon("save")}
                    {move || if saving.get() { "Saving..." } else if is_edit { "Save" } else { "Create" }}
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_category_is_rejected() {
        let form = SubCategoryForm {
            name: "Quant".into(),
            ..SubCategoryForm::default()
        };
        assert_eq!(form.to_dto(), Err("Select a parent category".to_string()));
    }

    #[test]
    fn test_section_change_clears_category() {
        let mut form = SubCategoryForm {
            name: "Quant".into(),
            category_id: Some(CategoryId::new_v4()),
            ..SubCategoryForm::default()
        };
        form.set_content_type(ContentType::Course);
        assert!(form.category_id.is_some());
        form.set_content_type(ContentType::Pyq);
        assert!(form.category_id.is_none());
    }

    #[test]
    fn test_valid_form_builds_dto() {
        let cat = CategoryId::new_v4();
        let form = SubCategoryForm {
            name: " Reasoning ".into(),
            category_id: Some(cat),
            content_type: ContentType::TestSeries,
            ..SubCategoryForm::default()
        };
        let dto = form.to_dto().unwrap();
        assert_eq!(dto.category_id, cat);
        assert_eq!(dto.content_type, ContentType::TestSeries);
    }
}
