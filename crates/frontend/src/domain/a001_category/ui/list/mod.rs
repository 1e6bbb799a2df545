use crate::domain::a001_category::api;
use crate::domain::a001_category::ui::details::CategoryDetails;
use crate::shared::components::ui::{Badge, BadgeVariant, Button, ButtonVariant, Select};
use crate::shared::confirm::confirm;
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    contains_ci, create_sort_toggle, filter_list, get_sort_indicator, sort_list, SearchInput,
    Searchable, Sortable,
};
use crate::shared::modal_stack::{ModalOptions, ModalStackService};
use crate::shared::toast::ToastService;
use contracts::domain::a001_category::{Category, CategoryListQuery};
use contracts::enums::ContentType;
use leptos::prelude::*;
use std::cmp::Ordering;

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryRow {
    pub id: String,
    pub name: String,
    pub content_type: ContentType,
    pub is_active: bool,
    pub description: String,
    pub updated_at: String,
}

impl From<Category> for CategoryRow {
    fn from(c: Category) -> Self {
        Self {
            id: c.to_string_id(),
            updated_at: format_timestamp(&c.base.metadata.updated_at),
            name: c.base.name,
            content_type: c.content_type,
            is_active: c.is_active,
            description: c.description.unwrap_or_default(),
        }
    }
}

impl Searchable for CategoryRow {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.name, filter) || contains_ci(&self.description, filter)
    }
}

impl Sortable for CategoryRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "content_type" => self.content_type.code().cmp(other.content_type.code()),
            "updated_at" => self.updated_at.cmp(&other.updated_at),
            _ => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
        }
    }
}

/// Опции фильтра по разделу: пустое значение - все разделы
fn content_type_filter_options() -> Vec<(String, String)> {
    std::iter::once((String::new(), "All sections".to_string()))
        .chain(
            ContentType::all()
                .into_iter()
                .map(|ct| (ct.code().to_string(), ct.display_name().to_string())),
        )
        .collect()
}

#[component]
pub fn CategoryList() -> impl IntoView {
    let modal_stack = use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let items = RwSignal::new(Vec::<CategoryRow>::new());
    let error = RwSignal::new(None::<String>);
    let content_type = RwSignal::new(None::<ContentType>);
    let search = RwSignal::new(String::new());
    let sort_field = RwSignal::new("name".to_string());
    let sort_ascending = RwSignal::new(true);

    let fetch = move || {
        let query = CategoryListQuery {
            content_type: content_type.get_untracked(),
            active_only: false,
        };
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_list(&query).await {
                Ok(v) => {
                    items.set(v.into_iter().map(CategoryRow::from).collect());
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let visible_rows = move || {
        let mut rows = filter_list(items.get(), &search.get());
        sort_list(&mut rows, &sort_field.get(), sort_ascending.get());
        rows
    };

    let open_details = move |id: Option<String>| {
        let saving = RwSignal::new(false);
        modal_stack.push(
            ModalOptions::sized(640, "category-details-modal").guarded(move || !saving.get_untracked()),
            move |handle| {
                let close = handle.clone();
                let on_saved = Callback::new(move |_| {
                    handle.close();
                    fetch();
                });
                let on_cancel = Callback::new(move |_| close.close());
                view! {
                    <CategoryDetails id=id.clone() saving=saving on_saved=on_saved on_cancel=on_cancel />
                }
                .into_any()
            },
        );
    };

    let delete_row = move |row: CategoryRow| {
        if !confirm(&format!(
            "Delete category \"{}\"? Its subcategories stay but are hidden from forms.",
            row.name
        )) {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete(&row.id).await {
                Ok(()) => {
                    toasts.success(format!("Category \"{}\" deleted", row.name));
                    fetch();
                }
                Err(e) => toasts.error(format!("Failed to delete category: {}", e)),
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Categories"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_details(None)>
                        {icon("plus")}
                        "New category"
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            <div class="filter-bar">
                <Select
                    value=Signal::derive(move || content_type.get().map(|ct| ct.code().to_string()).unwrap_or_default())
                    options=content_type_filter_options()
                    on_change=Callback::new(move |code: String| {
                        content_type.set(ContentType::from_code(&code));
                        fetch();
                    })
                />
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
                            <th class="table__header-cell table__header-cell--sortable" on:click=create_sort_toggle("name", sort_field, sort_ascending)>
                                "Name" {move || get_sort_indicator(&sort_field.get(), "name", sort_ascending.get())}
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=create_sort_toggle("content_type", sort_field, sort_ascending)>
                                "Section" {move || get_sort_indicator(&sort_field.get(), "content_type", sort_ascending.get())}
                            </th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Description"</th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=create_sort_toggle("updated_at", sort_field, sort_ascending)>
                                "Updated" {move || get_sort_indicator(&sort_field.get(), "updated_at", sort_ascending.get())}
                            </th>
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible_rows().into_iter().map(|row| {
                            let id_for_edit = row.id.clone();
                            let row_for_delete = row.clone();
                            view! {
                                <tr class="table__row" on:click=move |_| open_details(Some(id_for_edit.clone()))>
                                    <td class="table__cell">{row.name}</td>
                                    <td class="table__cell">{row.content_type.display_name()}</td>
                                    <td class="table__cell">
                                        {if row.is_active {
                                            view! { <Badge variant=BadgeVariant::Success>"Active"</Badge> }.into_any()
                                        } else {
                                            view! { <Badge>"Inactive"</Badge> }.into_any()
                                        }}
                                    </td>
                                    <td class="table__cell">{row.description}</td>
                                    <td class="table__cell">{row.updated_at}</td>
                                    <td class="table__cell table__cell--actions">
                                        <Button
                                            variant=ButtonVariant::Danger
                                            small=true
                                            title="Delete"
                                            on_click=Callback::new(move |_| delete_row(row_for_delete.clone()))
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
    fn test_filter_options_start_with_all_sections() {
        let options = content_type_filter_options();
        assert_eq!(options.len(), ContentType::all().len() + 1);
        assert_eq!(options[0].0, "");
        assert_eq!(ContentType::from_code(&options[0].0), None);
        assert_eq!(options[1].0, "COURSE");
    }

    #[test]
    fn test_row_from_category() {
        let c = Category::new_for_insert(
            "Banking".into(),
            ContentType::Pyq,
            false,
            Some("Bank PO and clerk".into()),
        );
        let row = CategoryRow::from(c.clone());
        assert_eq!(row.id, c.to_string_id());
        assert_eq!(row.content_type, ContentType::Pyq);
        assert!(!row.is_active);
        assert!(row.matches_filter("clerk"));
    }
}
