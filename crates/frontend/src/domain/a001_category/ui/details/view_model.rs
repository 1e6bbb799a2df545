use crate::domain::a001_category::api;
use crate::shared::toast::ToastService;
use contracts::domain::a001_category::{Category, CategoryDto};
use leptos::prelude::*;

/// Проверка формы теми же правилами, что и на сервере
pub fn validate_form(dto: &CategoryDto) -> Result<(), String> {
    let mut probe =
        Category::new_for_insert(String::new(), dto.content_type, dto.is_active, None);
    probe.update(dto);
    probe.validate()
}

#[derive(Clone, Copy)]
pub struct CategoryDetailsViewModel {
    pub form: RwSignal<CategoryDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl CategoryDetailsViewModel {
    pub fn new(saving: RwSignal<bool>) -> Self {
        Self {
            form: RwSignal::new(CategoryDto::default()),
            error: RwSignal::new(None),
            saving,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    /// Для существующей записи подтягиваем свежую версию с сервера
    pub fn load_if_needed(&self, id: Option<String>) {
        let Some(existing_id) = id else {
            return;
        };
        let form = self.form;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_by_id(&existing_id).await {
                Ok(category) => form.set(CategoryDto::from(&category)),
                Err(e) => error.set(Some(format!("Failed to load category: {}", e))),
            }
        });
    }

    pub fn save_command(&self, toasts: ToastService, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        if let Err(message) = validate_form(&current) {
            self.error.set(Some(message));
            return;
        }

        self.error.set(None);
        self.saving.set(true);
        let error = self.error;
        let saving = self.saving;
        wasm_bindgen_futures::spawn_local(async move {
            match api::save(&current).await {
                Ok(_) => {
                    toasts.success(format!("Category \"{}\" saved", current.name.trim()));
                    saving.set(false);
                    on_saved.run(());
                }
                Err(e) => {
                    toasts.error(format!("Failed to save category: {}", e));
                    error.set(Some(e));
                    saving.set(false);
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::ContentType;

    #[test]
    fn test_blank_name_is_rejected_before_request() {
        let dto = CategoryDto {
            name: "   ".into(),
            ..CategoryDto::default()
        };
        assert!(validate_form(&dto).is_err());
    }

    #[test]
    fn test_valid_form_passes() {
        let dto = CategoryDto {
            name: "Banking".into(),
            content_type: ContentType::Pyq,
            ..CategoryDto::default()
        };
        assert_eq!(validate_form(&dto), Ok(()));
    }
}
