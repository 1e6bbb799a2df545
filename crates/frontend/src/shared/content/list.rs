use super::basic_form::basic_info_form;
use super::{api, ContentPage};
use crate::shared::classification::ClassificationForm;
use crate::shared::components::ui::{Badge, BadgeVariant, Button, ButtonVariant};
use crate::shared::confirm::confirm;
use crate::shared::date_utils::{format_relative, format_timestamp};
use crate::shared::icons::icon;
use crate::shared::list_utils::{contains_ci, filter_active, SearchInput};
use crate::shared::modal_stack::{ModalHandle, ModalOptions, ModalStackService};
use crate::shared::pricing::{format_price, PricingForm};
use crate::shared::toast::ToastService;
use contracts::shared::api::SavedResponse;
use contracts::shared::classification::Classification;
use contracts::shared::pricing::Pricing;
use leptos::prelude::*;
use std::future::Future;

/// Отправка секции из модалки: успех - тост, закрытие и обновление списка;
/// ошибка - тост, модалка остаётся открытой с введёнными данными.
fn submit_section<Fut>(
    label: String,
    request: Fut,
    saving: RwSignal<bool>,
    toasts: ToastService,
    handle: ModalHandle,
    refresh: impl Fn() + 'static,
) where
    Fut: Future<Output = Result<SavedResponse, String>> + 'static,
{
    saving.set(true);
    wasm_bindgen_futures::spawn_local(async move {
        match request.await {
            Ok(_) => {
                toasts.success(format!("{} saved", label));
                saving.set(false);
                handle.close();
                refresh();
            }
            Err(e) => {
                toasts.error(format!("Failed to save {}: {}", label.to_lowercase(), e));
                saving.set(false);
            }
        }
    });
}

/// Сводка классификации для таблицы
fn classification_summary(c: &Classification) -> String {
    if c.is_empty() {
        return "Not classified".to_string();
    }
    format!(
        "{} cat · {} sub · {} lang · {} validity",
        c.category_ids.len(),
        c.sub_category_ids.len(),
        c.language_ids.len(),
        c.validity_ids.len()
    )
}

fn filter_items<T: ContentPage>(items: Vec<T>, filter: &str) -> Vec<T> {
    if !filter_active(filter) {
        return items;
    }
    items
        .into_iter()
        .filter(|item| contains_ci(&item.search_text(), filter))
        .collect()
}

/// Страница-список контентных записей одного типа
pub fn content_list_page<T: ContentPage>() -> impl IntoView {
    let modal_stack = use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let items = RwSignal::new(Vec::<T>::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);
    let search = RwSignal::new(String::new());

    let fetch = move || {
        loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_list::<T>().await {
                Ok(mut v) => {
                    v.sort_by(|a, b| a.name().to_lowercase().cmp(&b.name().to_lowercase()));
                    items.try_set(v);
                    error.try_set(None);
                }
                Err(e) => {
                    error.try_set(Some(e));
                }
            }
            loading.try_set(false);
        });
    };

    let open_basic = move |id: Option<String>| {
        let saving = RwSignal::new(false);
        modal_stack.push(
            ModalOptions::sized(720, "content-basic-modal").guarded(move || !saving.get_untracked()),
            move |handle| {
                let close = handle.clone();
                basic_info_form::<T>(
                    id.clone(),
                    saving,
                    Callback::new(move |_| {
                        handle.close();
                        fetch();
                    }),
                    Callback::new(move |_| close.close()),
                )
            },
        );
    };

    let open_pricing = move |item: T| {
        let saving = RwSignal::new(false);
        let id = item.uuid().to_string();
        let initial = item.pricing().clone();
        let title = format!("Pricing: {}", item.name());
        modal_stack.push(
            ModalOptions::sized(480, "content-pricing-modal").guarded(move || !saving.get_untracked()),
            move |handle| {
                let id = id.clone();
                let submit_handle = handle.clone();
                view! {
                    <PricingForm
                        title=title.clone()
                        initial=initial.clone()
                        saving=saving
                        on_submit=Callback::new(move |pricing: Pricing| {
                            let id = id.clone();
                            submit_section(
                                "Pricing".to_string(),
                                async move { api::save_pricing::<T>(&id, &pricing).await },
                                saving,
                                toasts,
                                submit_handle.clone(),
                                fetch,
                            );
                        })
                        on_cancel=Callback::new(move |_| handle.close())
                    />
                }
                .into_any()
            },
        );
    };

    let open_classification = move |item: T| {
        let saving = RwSignal::new(false);
        let id = item.uuid().to_string();
        let seed = item.classification().clone();
        let title = format!("Classification: {}", item.name());
        modal_stack.push(
            ModalOptions::sized(720, "content-classification-modal").guarded(move || !saving.get_untracked()),
            move |handle| {
                let id = id.clone();
                let submit_handle = handle.clone();
                view! {
                    <ClassificationForm
                        title=title.clone()
                        content_type=T::content_type()
                        seed=seed.clone()
                        saving=saving
                        on_submit=Callback::new(move |classification: Classification| {
                            let id = id.clone();
                            submit_section(
                                "Classification".to_string(),
                                async move { api::save_classification::<T>(&id, &classification).await },
                                saving,
                                toasts,
                                submit_handle.clone(),
                                fetch,
                            );
                        })
                        on_cancel=Callback::new(move |_| handle.close())
                    />
                }
                .into_any()
            },
        );
    };

    let delete_item = move |id: String, name: String| {
        if !confirm(&format!("Delete {} \"{}\"?", T::element_name().to_lowercase(), name)) {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete::<T>(&id).await {
                Ok(()) => {
                    toasts.success(format!("{} \"{}\" deleted", T::element_name(), name));
                    fetch();
                }
                Err(e) => toasts.error(format!("Failed to delete: {}", e)),
            }
        });
    };

    fetch();

    let extra_headers = T::columns()
        .into_iter()
        .map(|col| view! { <th class="table__header-cell">{col.title}</th> })
        .collect_view();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{T::list_name()}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_basic(None)>
                        {icon("plus")}
                        {format!("New {}", T::element_name().to_lowercase())}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch() disabled=move || loading.get()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            <div class="filter-bar">
                <SearchInput value=search on_change=Callback::new(move |v| search.set(v)) />
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Name"</th>
                            {extra_headers}
                            <th class="table__header-cell">"Price"</th>
                            <th class="table__header-cell">"Classification"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Updated"</th>
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let now = chrono::Utc::now();
                            filter_items(items.get(), &search.get()).into_iter().map(|item| {
                            let id = item.uuid().to_string();
                            let name = item.name().to_string();
                            let cells = T::columns()
                                .into_iter()
                                .map(|col| view! { <td class="table__cell">{(col.value)(&item)}</td> })
                                .collect_view();
                            let status = if item.is_active() {
                                view! { <Badge variant=BadgeVariant::Success>"Active"</Badge> }.into_any()
                            } else {
                                view! { <Badge>"Inactive"</Badge> }.into_any()
                            };
                            let price = format_price(item.pricing());
                            let summary = classification_summary(item.classification());
                            let updated_at = item.metadata().updated_at;
                            let updated = format_relative(&updated_at, &now);
                            let updated_exact = format_timestamp(&updated_at);
                            let name_for_delete = name.clone();
                            let id_for_edit = id.clone();
                            let item_for_pricing = item.clone();
                            let item_for_classification = item.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{name.clone()}</td>
                                    {cells}
                                    <td class="table__cell">{price}</td>
                                    <td class="table__cell">{summary}</td>
                                    <td class="table__cell">{status}</td>
                                    <td class="table__cell" title=updated_exact>{updated}</td>
                                    <td class="table__cell table__cell--actions">
                                        <Button variant=ButtonVariant::Ghost small=true title="Basic info"
                                            on_click=Callback::new(move |_| open_basic(Some(id_for_edit.clone())))>
                                            {icon("edit")}
                                        </Button>
                                        <Button variant=ButtonVariant::Ghost small=true title="Pricing"
                                            on_click=Callback::new(move |_| open_pricing(item_for_pricing.clone()))>
                                            {icon("tag")}
                                        </Button>
                                        <Button variant=ButtonVariant::Ghost small=true title="Classification"
                                            on_click=Callback::new(move |_| open_classification(item_for_classification.clone()))>
                                            {icon("layers")}
                                        </Button>
                                        <Button variant=ButtonVariant::Danger small=true title="Delete"
                                            on_click=Callback::new(move |_| delete_item(id.clone(), name_for_delete.clone()))>
                                            {icon("delete")}
                                        </Button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::CategoryId;

    #[test]
    fn test_classification_summary() {
        assert_eq!(classification_summary(&Classification::default()), "Not classified");
        let mut c = Classification::default();
        c.select_category(CategoryId::new_v4());
        assert_eq!(classification_summary(&c), "1 cat · 0 sub · 0 lang · 0 validity");
    }
}
