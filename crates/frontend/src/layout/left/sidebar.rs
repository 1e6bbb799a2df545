//! Sidebar с раскрывающимися группами меню

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "content",
            label: "Content",
            icon: "layers",
            items: vec![
                ("a005_course", tab_label_for_key("a005_course"), "book"),
                ("a006_publication", tab_label_for_key("a006_publication"), "book-open"),
                ("a007_pyq", tab_label_for_key("a007_pyq"), "file-text"),
                ("a008_test_series", tab_label_for_key("a008_test_series"), "clipboard"),
            ],
        },
        MenuGroup {
            id: "classification",
            label: "Classification",
            icon: "database",
            items: vec![
                ("a001_category", tab_label_for_key("a001_category"), "folder-closed"),
                ("a002_subcategory", tab_label_for_key("a002_subcategory"), "list"),
                ("a003_language", tab_label_for_key("a003_language"), "globe"),
                ("a004_validity", tab_label_for_key("a004_validity"), "calendar"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let expanded_groups = RwSignal::new(vec!["content".to_string(), "classification".to_string()]);

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let group_id = group.id.to_string();
                let gid_click = group_id.clone();
                let gid_chevron = group_id.clone();
                let items = StoredValue::new(group.items.clone());

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = gid_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&gid_chevron)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&group_id)>
                            <div class="app-sidebar__children">
                                {items.get_value().into_iter().map(|(id, label, icon_name)| {
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.get().as_deref() == Some(id)
                                            }
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_tab(id, label)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_menu_item_has_a_label() {
        for group in get_menu_groups() {
            for (id, label, _) in group.items {
                assert!(!label.is_empty(), "missing label for {}", id);
            }
        }
    }
}
