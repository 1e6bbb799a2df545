use crate::shared::components::ui::{Checkbox, Input, Textarea};
use crate::shared::content::{content_list_page, Column, ContentPage};
use contracts::domain::a006_publication::{Publication, PublicationDto};
use leptos::prelude::*;

/// Авторы вводятся одной строкой через запятую
pub fn parse_authors(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(str::to_string)
        .collect()
}

impl ContentPage for Publication {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Authors", |p| p.authors.join(", ")),
            Column::new("ISBN", |p| p.isbn.clone().unwrap_or_default()),
        ]
    }

    fn basic_fields(form: RwSignal<PublicationDto>) -> AnyView {
        // строка авторов живёт отдельно, иначе запятая в конце съедается при вводе
        let authors_raw = RwSignal::new(form.get_untracked().authors.join(", "));
        Effect::new(move |_| {
            let loaded = form.with(|f| f.authors.clone());
            if parse_authors(&authors_raw.get_untracked()) != loaded {
                authors_raw.set(loaded.join(", "));
            }
        });

        view! {
            <Input
                label="Name"
                id="publication-name"
                required=true
                value=Signal::derive(move || form.get().name)
                on_input=Callback::new(move |v| form.update(|f| f.name = v))
            />
            <Input
                label="Authors"
                id="publication-authors"
                value=authors_raw
                placeholder="Comma separated"
                on_input=Callback::new(move |v: String| {
                    form.update(|f| f.authors = parse_authors(&v));
                    authors_raw.set(v);
                })
            />
            <Input
                label="ISBN"
                id="publication-isbn"
                value=Signal::derive(move || form.get().isbn.unwrap_or_default())
                on_input=Callback::new(move |v: String| {
                    form.update(|f| f.isbn = if v.trim().is_empty() { None } else { Some(v.trim().to_string()) })
                })
            />
            <Textarea
                label="Description"
                id="publication-description"
                rows=4
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
        format!(
            "{} {} {}",
            self.base.name,
            self.authors.join(" "),
            self.isbn.as_deref().unwrap_or_default()
        )
    }
}

#[component]
pub fn PublicationList() -> impl IntoView {
    content_list_page::<Publication>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_authors() {
        assert_eq!(parse_authors(" R. S. Aggarwal, , Arihant Experts "), vec!["R. S. Aggarwal", "Arihant Experts"]);
        assert!(parse_authors("  ").is_empty());
    }
}
