use super::details::SubCategoryDetails;
use crate::domain::a001_category::api as category_api;
use crate::domain::a002_subcategory::api;
use crate::shared::components::ui::{Badge, BadgeVariant, Button, ButtonVariant, Select};
use crate::shared::confirm::confirm;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    contains_ci, create_sort_toggle, filter_list, get_sort_indicator, sort_list, SearchInput,
    Searchable, Sortable,
};
use crate::shared::modal_stack::{ModalOptions, ModalStackService};
use crate::shared::toast::ToastService;
use contracts::domain::a001_category::{Category, CategoryId, CategoryListQuery};
use contracts::domain::a002_subcategory::{SubCategory, SubCategoryQuery};
use contracts::domain::common::AggregateId;
use contracts::enums::ContentType;
use leptos::prelude::*;
use std::cmp::Ordering;

#[derive(Clone, Debug, PartialEq)]
pub struct SubCategoryRow {
    pub id: String,
    pub name: String,
    pub content_type: ContentType,
    /// None - родитель удалён или не найден
    pub category_name: Option<String>,
}

impl From<SubCategory> for SubCategoryRow {
    fn from(s: SubCategory) -> Self {
        Self {
            id: s.to_string_id(),
            category_name: s.category_name().map(str::to_string),
            content_type: s.content_type,
            name: s.base.name,
        }
    }
}

impl SubCategoryRow {
    pub fn is_orphan(&self) -> bool {
        self.category_name.is_none()
    }
}

impl Searchable for SubCategoryRow {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.name, filter)
            || self
                .category_name
                .as_deref()
                .map(|c| contains_ci(c, filter))
                .unwrap_or(false)
    }
}

impl Sortable for SubCategoryRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            // сироты в конце списка
            "category" => match (&self.category_name, &other.category_name) {
                (Some(a), Some(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            _ => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
        }
    }
}

#[component]
pub fn SubCategoryList() -> impl IntoView {
    let modal_stack = use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let items = RwSignal::new(Vec::<SubCategoryRow>::new());
    let categories = RwSignal::new(Vec::<Category>::new());
    let error = RwSignal::new(None::<String>);
    let content_type = RwSignal::new(None::<ContentType>);
    let category_id = RwSignal::new(None::<CategoryId>);
    let search = RwSignal::new(String::new());
    let sort_field = RwSignal::new("name".to_string());
    let sort_ascending = RwSignal::new(true);

    let fetch = move || {
        let query = SubCategoryQuery {
            content_type: content_type.get_untracked(),
            category_id: category_id.get_untracked(),
        };
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_list(&query).await {
                Ok(v) => {
                    items.set(v.into_iter().map(SubCategoryRow::from).collect());
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let fetch_categories = move || {
        let query = CategoryListQuery {
            content_type: content_type.get_untracked(),
            active_only: false,
        };
        wasm_bindgen_futures::spawn_local(async move {
            match category_api::fetch_list(&query).await {
                Ok(v) => categories.set(v),
                Err(e) => log::warn!("category filter not loaded: {}", e),
            }
        });
    };

    let content_type_options: Vec<(String, String)> = std::iter::once((String::new(), "All sections".to_string()))
        .chain(
            ContentType::all()
                .into_iter()
                .map(|ct| (ct.code().to_string(), ct.display_name().to_string())),
        )
        .collect();

    let category_options = Signal::derive(move || {
        std::iter::once((String::new(), "All categories".to_string()))
            .chain(
                categories
                    .get()
                    .into_iter()
                    .map(|c| (c.to_string_id(), c.base.name)),
            )
            .collect::<Vec<_>>()
    });

    let visible_rows = move || {
        let mut rows = filter_list(items.get(), &search.get());
        sort_list(&mut rows, &sort_field.get(), sort_ascending.get());
        rows
    };

    let open_details = move |id: Option<String>| {
        let saving = RwSignal::new(false);
        modal_stack.push(
            ModalOptions::sized(560, "subcategory-details-modal").guarded(move || !saving.get_untracked()),
            move |handle| {
                let close = handle.clone();
                view! {
                    <SubCategoryDetails
                        id=id.clone()
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

    let delete_row = move |row: SubCategoryRow| {
        if !confirm(&format!("Delete subcategory \"{}\"?", row.name)) {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete(&row.id).await {
                Ok(()) => {
                    toasts.success(format!("Subcategory \"{}\" deleted", row.name));
                    fetch();
                }
                Err(e) => toasts.error(format!("Failed to delete subcategory: {}", e)),
            }
        });
    };

    fetch_categories();
    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Subcategories"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_details(None)>
                        {icon("plus")}
                        "New subcategory"
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
                    options=content_type_options
                    on_change=Callback::new(move |code: String| {
                        content_type.set(ContentType::from_code(&code));
                        // фильтр категории относится к прежнему разделу
                        category_id.set(None);
                        fetch_categories();
                        fetch();
                    })
                />
                <Select
                    value=Signal::derive(move || category_id.get().map(|c| c.as_string()).unwrap_or_default())
                    options=category_options
                    on_change=Callback::new(move |raw: String| {
                        category_id.set(CategoryId::from_string(&raw).ok());
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
                            <th class="table__header-cell table__header-cell--sortable" on:click=create_sort_toggle("category", sort_field, sort_ascending)>
                                "Category" {move || get_sort_indicator(&sort_field.get(), "category", sort_ascending.get())}
                            </th>
                            <th class="table__header-cell">"Section"</th>
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible_rows().into_iter().map(|row| {
                            let id_for_edit = row.id.clone();
                            let row_for_delete = row.clone();
                            let orphan = row.is_orphan();
                            view! {
                                <tr class="table__row" on:click=move |_| open_details(Some(id_for_edit.clone()))>
                                    <td class="table__cell">{row.name}</td>
                                    <td class="table__cell">
                                        {if orphan {
                                            view! { <Badge variant=BadgeVariant::Warning>"Orphaned"</Badge> }.into_any()
                                        } else {
                                            row.category_name.unwrap_or_default().into_any()
                                        }}
                                    </td>
                                    <td class="table__cell">{row.content_type.display_name()}</td>
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
    use contracts::domain::a002_subcategory::CategoryRef;

    fn sub(name: &str, parent: Option<&str>) -> SubCategory {
        let mut s = SubCategory::new_for_insert(name.into(), CategoryId::new_v4(), ContentType::Course);
        if let Some(parent_name) = parent {
            s.category = CategoryRef::populated(s.category_id(), parent_name);
        }
        s
    }

    #[test]
    fn test_raw_category_reference_is_orphan() {
        assert!(SubCategoryRow::from(sub("Quant", None)).is_orphan());
        assert!(!SubCategoryRow::from(sub("Quant", Some("Banking"))).is_orphan());
    }

    #[test]
    fn test_orphans_sort_last_by_category() {
        let mut rows = vec![
            SubCategoryRow::from(sub("A", None)),
            SubCategoryRow::from(sub("B", Some("SSC"))),
            SubCategoryRow::from(sub("C", Some("Banking"))),
        ];
        sort_list(&mut rows, "category", true);
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["C", "B", "A"]);
    }

    #[test]
    fn test_search_matches_parent_name() {
        let row = SubCategoryRow::from(sub("Quant", Some("Banking")));
        assert!(row.matches_filter("bank"));
        assert!(!row.matches_filter("upsc"));
    }
}
