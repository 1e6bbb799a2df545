//! Application Shell - корневой layout приложения
//!
//! `MainLayout` = Shell (TopHeader + Sidebar + вкладки).

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::Sidebar;
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use leptos::prelude::*;

/// Основной layout.
///
/// Инициализирует синхронизацию вкладок с URL (?active=...).
#[component]
pub fn MainLayout() -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            view! { <TabPage tab=tab tabs_store=tabs_store /> }
                        }
                    />
                }
                .into_any()
            }
        />
    }
}
