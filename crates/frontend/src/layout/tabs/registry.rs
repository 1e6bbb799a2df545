//! Маппинг tab.key → View. Все ключи вкладок собраны здесь.

use crate::domain::a001_category::ui::CategoryList;
use crate::domain::a002_subcategory::ui::SubCategoryList;
use crate::domain::a003_language::ui::LanguageList;
use crate::domain::a004_validity::ui::ValidityList;
use crate::domain::a005_course::ui::CourseList;
use crate::domain::a006_publication::ui::PublicationList;
use crate::domain::a007_pyq::ui::PyqList;
use crate::domain::a008_test_series::ui::TestSeriesList;
use leptos::prelude::*;

/// Рендерит контент вкладки по ключу; для неизвестного ключа - заглушка.
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        // Классификация
        "a001_category" => view! { <CategoryList /> }.into_any(),
        "a002_subcategory" => view! { <SubCategoryList /> }.into_any(),
        "a003_language" => view! { <LanguageList /> }.into_any(),
        "a004_validity" => view! { <ValidityList /> }.into_any(),

        // Контент
        "a005_course" => view! { <CourseList /> }.into_any(),
        "a006_publication" => view! { <PublicationList /> }.into_any(),
        "a007_pyq" => view! { <PyqList /> }.into_any(),
        "a008_test_series" => view! { <TestSeriesList /> }.into_any(),

        unknown => {
            log::warn!("Unknown tab key: {}", unknown);
            let key = unknown.to_string();
            view! {
                <div class="placeholder">{format!("Unknown section: {}", key)}</div>
            }
            .into_any()
        }
    }
}
