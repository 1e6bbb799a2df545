use crate::shared::components::ui::{Checkbox, Input, Textarea};
use crate::shared::content::{content_list_page, Column, ContentPage};
use contracts::domain::a008_test_series::{TestSeries, TestSeriesDto};
use leptos::prelude::*;

impl ContentPage for TestSeries {
    fn columns() -> Vec<Column<Self>> {
        vec![Column::new("Tests", |t| t.total_tests.to_string())]
    }

    fn basic_fields(form: RwSignal<TestSeriesDto>) -> AnyView {
        view! {
            <Input
                label="Name"
                id="test-series-name"
                required=true
                value=Signal::derive(move || form.get().name)
                on_input=Callback::new(move |v| form.update(|f| f.name = v))
            />
            <Input
                label="Total tests"
                id="test-series-total"
                input_type="number"
                value=Signal::derive(move || form.get().total_tests.to_string())
                on_input=Callback::new(move |v: String| {
                    form.update(|f| f.total_tests = v.trim().parse().unwrap_or(0))
                })
            />
            <Textarea
                label="Description"
                id="test-series-description"
                rows=3
                value=Signal::derive(move || form.get().description)
                on_input=Callback::new(move |v| form.update(|f| f.description = v))
            />
            <Checkbox
                label="Active"
                checked=Signal::derive(move || form.get().is_active)
                on_change=Callback::new(move |v| form.update(|f| f.is_active = v))
            />
        }
        .into_any()
    }
}

#[component]
pub fn TestSeriesList() -> impl IntoView {
    content_list_page::<TestSeries>()
}
