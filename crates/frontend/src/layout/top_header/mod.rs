//! TopHeader - верхняя панель приложения.
//!
//! Содержит:
//! - кнопку скрытия/показа сайдбара
//! - заголовок приложения
//! - загрузку тестовых справочников
//! - выбор темы

use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_utils;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeSelect;
use crate::shared::toast::ToastService;
use contracts::shared::api::SeedReport;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let toasts = use_context::<ToastService>().expect("ToastService not found");

    let is_sidebar_visible = move || ctx.left_open.get();
    let seeding = RwSignal::new(false);

    let seed_test_data = move |_| {
        if seeding.get_untracked() {
            return;
        }
        seeding.set(true);
        spawn_local(async move {
            match api_utils::post_empty::<SeedReport>("/api/testdata").await {
                Ok(report) if report.is_empty() => {
                    toasts.info("Lookup data already present, nothing seeded")
                }
                Ok(report) => toasts.success(format!(
                    "Seeded {} categories, {} subcategories, {} languages, {} validities",
                    report.categories, report.subcategories, report.languages, report.validities
                )),
                Err(e) => toasts.error(format!("Seeding failed: {}", e)),
            }
            seeding.set(false);
        });
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Content Admin"</span>
            </div>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    on:click=seed_test_data
                    disabled=move || seeding.get()
                    title="Seed test lookup data"
                >
                    {icon("database")}
                </button>

                <ThemeSelect />
            </div>
        </div>
    }
}
