use crate::shared::components::ui::{Checkbox, Input, Textarea};
use crate::shared::content::{content_list_page, Column, ContentPage};
use contracts::domain::a007_pyq::{Pyq, PyqDto};
use leptos::prelude::*;

impl ContentPage for Pyq {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Exam", |p| p.exam_name.clone()),
            Column::new("Year", |p| p.year.to_string()),
        ]
    }

    fn basic_fields(form: RwSignal<PyqDto>) -> AnyView {
        view! {
            <Input
                label="Name"
                id="pyq-name"
                required=true
                value=Signal::derive(move || form.get().name)
                on_input=Callback::new(move |v| form.update(|f| f.name = v))
                placeholder="UPSC Prelims GS Paper I"
            />
            <Input
                label="Exam"
                id="pyq-exam"
                required=true
                value=Signal::derive(move || form.get().exam_name)
                on_input=Callback::new(move |v| form.update(|f| f.exam_name = v))
            />
            <Input
                label="Year"
                id="pyq-year"
                input_type="number"
                required=true
                value=Signal::derive(move || form.get().year.to_string())
                on_input=Callback::new(move |v: String| {
                    if let Ok(year) = v.trim().parse() {
                        form.update(|f| f.year = year);
                    }
                })
            />
            <Textarea
                label="Description"
                id="pyq-description"
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

    fn search_text(&self) -> String {
        format!("{} {} {}", self.base.name, self.exam_name, self.year)
    }
}

#[component]
pub fn PyqList() -> impl IntoView {
    content_list_page::<Pyq>()
}
