use crate::shared::components::ui::{Checkbox, Input, Textarea};
use crate::shared::content::{content_list_page, Column, ContentPage};
use contracts::domain::a005_course::{Course, CourseDto};
use leptos::prelude::*;

fn format_duration(hours: u32) -> String {
    match hours {
        0 => "-".to_string(),
        1 => "1 hour".to_string(),
        h => format!("{} hours", h),
    }
}

impl ContentPage for Course {
    fn columns() -> Vec<Column<Self>> {
        vec![Column::new("Duration", |c| format_duration(c.duration_hours))]
    }

    fn basic_fields(form: RwSignal<CourseDto>) -> AnyView {
        view! {
            <Input
                label="Title"
                id="course-name"
                required=true
                value=Signal::derive(move || form.get().name)
                on_input=Callback::new(move |v| form.update(|f| f.name = v))
            />
            <Textarea
                label="Description"
                id="course-description"
                rows=4
                value=Signal::derive(move || form.get().description)
                on_input=Callback::new(move |v| form.update(|f| f.description = v))
            />
            <Input
                label="Duration, hours"
                id="course-duration"
                input_type="number"
                value=Signal::derive(move || form.get().duration_hours.to_string())
                on_input=Callback::new(move |v: String| {
                    form.update(|f| f.duration_hours = v.trim().parse().unwrap_or(0))
                })
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
        format!("{} {}", self.base.name, self.description)
    }
}

#[component]
pub fn CourseList() -> impl IntoView {
    content_list_page::<Course>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "-");
        assert_eq!(format_duration(1), "1 hour");
        assert_eq!(format_duration(40), "40 hours");
    }
}
