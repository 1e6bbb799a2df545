use super::{api, validate_basic, ContentPage};
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalHeader;
use crate::shared::toast::ToastService;
use leptos::prelude::*;

/// Модалка "основная информация". Для существующей записи форма
/// заполняется свежей версией с сервера.
pub fn basic_info_form<T: ContentPage>(
    id: Option<String>,
    saving: RwSignal<bool>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> AnyView {
    let toasts = use_context::<ToastService>().expect("ToastService not found");
    let form = RwSignal::new(T::BasicDto::default());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(id.is_some());
    let is_edit = id.is_some();

    if let Some(existing_id) = id {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_by_id::<T>(&existing_id).await {
                Ok(item) => {
                    form.try_set(T::BasicDto::from(&item));
                }
                Err(e) => {
                    error.try_set(Some(format!("Failed to load {}: {}", T::element_name().to_lowercase(), e)));
                }
            }
            loading.try_set(false);
        });
    }

    let save = move || {
        let dto = form.get_untracked();
        if let Err(message) = validate_basic::<T>(&dto) {
            error.set(Some(message));
            return;
        }
        error.set(None);
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::save_basic::<T>(&dto).await {
                Ok(_) => {
                    toasts.success(format!("{} saved", T::element_name()));
                    saving.set(false);
                    on_saved.run(());
                }
                Err(e) => {
                    toasts.error(format!("Failed to save {}: {}", T::element_name().to_lowercase(), e));
                    error.set(Some(e));
                    saving.set(false);
                }
            }
        });
    };

    let title = if is_edit {
        format!("Edit {}", T::element_name().to_lowercase())
    } else {
        format!("New {}", T::element_name().to_lowercase())
    };

    view! {
        <div class="details-container">
            <ModalHeader title=Signal::derive(move || title.clone()) on_close=on_cancel />
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="form__hint">"Loading..."</div> }
            >
                <div class="details-form">{T::basic_fields(form)}</div>
            </Show>
            <div class="details-actions">
                <button
                    class="button button--primary"
                    disabled=move || saving.get() || loading.get()
                    on:click=move |_| save()
                >
                    {icon("save")}
                    {move || if saving.get() { "Saving..." } else if is_edit { "Save" } else { "Create" }}
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>"Cancel"</button>
            </div>
        </div>
    }
    .into_any()
}
