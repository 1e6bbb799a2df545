use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::ev;
use leptos::prelude::*;

/// Полоса заголовков открытых вкладок
#[component]
pub fn TabBar() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <Show
            when=move || tabs_store.opened.with(|tabs| !tabs.is_empty())
            fallback=|| view! {
                <div class="tabs__empty">"Pick a section in the sidebar to get started."</div>
            }
        >
            <div class="tabs__bar">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab: TabData| view! { <TabHeader tab=tab /> }
                />
            </div>
        </Show>
    }
}

#[component]
fn TabHeader(tab: TabData) -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let key_for_active = tab.key.clone();
    let is_active = Memo::new(move |_| tabs_store.active.get().as_deref() == Some(&key_for_active));

    let key_for_click = tab.key.clone();
    let on_click = move |_| tabs_store.activate_tab(&key_for_click);

    let key_for_close = tab.key.clone();
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        tabs_store.close_tab(&key_for_close);
    };

    view! {
        <div class="tabs__tab" class:tabs__tab--active=is_active on:click=on_click>
            <span>{tab.title}</span>
            <button class="tabs__close" on:click=on_close title="Close">
                "×"
            </button>
        </div>
    }
}
