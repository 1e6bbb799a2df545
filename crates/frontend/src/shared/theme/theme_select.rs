use super::{use_theme, Theme};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Выпадающий список тем в верхней панели
#[component]
pub fn ThemeSelect() -> impl IntoView {
    let ctx = use_theme();
    let is_open = RwSignal::new(false);

    let change_theme = move |theme: Theme| {
        ctx.set_theme(theme);
        is_open.set(false);
    };

    view! {
        <div class="theme-select-wrapper">
            <button
                class="button button--ghost button--smallall"
                on:click=move |_| is_open.update(|v| *v = !*v)
            >
                {icon("moon")}
                "Theme"
            </button>

            <Show when=move || is_open.get()>
                <div class="theme-dropdown">
                    {Theme::all().into_iter().map(|theme| {
                        view! {
                            <button
                                class="theme-dropdown__item"
                                class:theme-dropdown__item--active=move || ctx.theme.get() == theme
                                on:click=move |_| change_theme(theme)
                            >
                                {theme.display_name()}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
