use super::tab_bar::TabBar;
use leptos::prelude::*;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <div data-zone="center" class="app-tabs" style="flex: 1; overflow: auto;">
            <TabBar />
            {children()}
        </div>
    }
}
