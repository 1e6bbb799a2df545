//! Справочник языков: таблица и модалка редактирования в одном файле.

use crate::domain::a003_language::api;
use crate::shared::components::ui::{Button, ButtonVariant, Input};
use crate::shared::confirm::confirm;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalHeader;
use crate::shared::modal_stack::{ModalOptions, ModalStackService};
use crate::shared::toast::ToastService;
use contracts::domain::a003_language::{Language, LanguageDto};
use leptos::prelude::*;

fn validate_form(dto: &LanguageDto) -> Result<(), String> {
    let mut probe = Language::new_for_insert(String::new(), String::new());
    probe.update(dto);
    probe.validate()
}

#[component]
fn LanguageDetails(
    initial: LanguageDto,
    saving: RwSignal<bool>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found");
    let is_edit = initial.id.is_some();
    let form = RwSignal::new(initial);
    let error = RwSignal::new(None::<String>);

    let save = move || {
        let dto = form.get_untracked();
        if let Err(message) = validate_form(&dto) {
            error.set(Some(message));
            return;
        }
        error.set(None);
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::save(&dto).await {
                Ok(_) => {
                    toasts.success(format!("Language \"{}\" saved", dto.name.trim()));
                    saving.set(false);
                    on_saved.run(());
                }
                Err(e) => {
                    toasts.error(format!("Failed to save language: {}", e));
                    error.set(Some(e));
                    saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="details-container">
            <ModalHeader
                title=Signal::derive(move || if is_edit { "Edit language".to_string() } else { "New language".to_string() })
                on_close=on_cancel
            />
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            <div class="details-form">
                <Input
                    label="Name"
                    id="language-name"
                    required=true
                    value=Signal::derive(move || form.get().name)
                    on_input=Callback::new(move |v| form.update(|f| f.name = v))
                    placeholder="Hindi"
                />
                <Input
                    label="Code"
                    id="language-code"
                    required=true
                    value=Signal::derive(move || form.get().code)
                    on_input=Callback::new(move |v| form.update(|f| f.code = v))
                    placeholder="hi"
                />
            </div>
            <div class="details-actions">
                <button class="button button--primary" disabled=move || saving.get() on:click=move |_| save()>
                    {icon("save")}
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>"Cancel"</button>
            </div>
        </div>
    }
}

#[component]
pub fn LanguageList() -> impl IntoView {
    let modal_stack = use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let items = RwSignal::new(Vec::<Language>::new());
    let error = RwSignal::new(None::<String>);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_list().await {
                Ok(mut v) => {
                    v.sort_by(|a, b| a.base.name.to_lowercase().cmp(&b.base.name.to_lowercase()));
                    items.set(v);
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let open_details = move |initial: LanguageDto| {
        let saving = RwSignal::new(false);
        modal_stack.push(
            ModalOptions::sized(480, "language-details-modal").guarded(move || !saving.get_untracked()),
            move |handle| {
                let close = handle.clone();
                view! {
                    <LanguageDetails
                        initial=initial.clone()
                        saving=saving
                        on_saved=Callback::new(move |_| {
                            handle.close();
                            fetch();
                        })
                        on_cancel=Callback::new(move |_| close.close())
                    />
                }
                .into_any()
            },
        );
    };

    let delete_row = move |id: String, name: String| {
        if !confirm(&format!("Delete language \"{}\"?", name)) {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete(&id).await {
                Ok(()) => {
                    toasts.success(format!("Language \"{}\" deleted", name));
                    fetch();
                }
                Err(e) => toasts.error(format!("Failed to delete language: {}", e)),
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Languages"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_details(LanguageDto::default())>
                        {icon("plus")}
                        "New language"
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="warning-box warning-box--error">{e}</div> })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Code"</th>
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|lang| {
                            let dto = LanguageDto::from(&lang);
                            let id = lang.to_string_id();
                            let name = lang.base.name.clone();
                            view! {
                                <tr class="table__row" on:click=move |_| open_details(dto.clone())>
                                    <td class="table__cell">{lang.base.name}</td>
                                    <td class="table__cell"><code>{lang.code}</code></td>
                                    <td class="table__cell table__cell--actions">
                                        <Button
                                            variant=ButtonVariant::Danger
                                            small=true
                                            title="Delete"
                                            on_click=Callback::new(move |_| delete_row(id.clone(), name.clone()))
                                        >
                                            {icon("delete")}
                                        </Button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_with_digits_is_rejected() {
        let dto = LanguageDto {
            id: None,
            name: "English".into(),
            code: "en1".into(),
        };
        assert!(validate_form(&dto).is_err());
    }

    #[test]
    fn test_upper_case_code_is_accepted() {
        let dto = LanguageDto {
            id: None,
            name: "English".into(),
            code: " EN ".into(),
        };
        assert_eq!(validate_form(&dto), Ok(()));
    }
}
