use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Neutral,
    Success,
    Warning,
    Error,
}

impl BadgeVariant {
    fn class(self) -> &'static str {
        match self {
            BadgeVariant::Neutral => "badge badge--neutral",
            BadgeVariant::Success => "badge badge--success",
            BadgeVariant::Warning => "badge badge--warning",
            BadgeVariant::Error => "badge badge--error",
        }
    }
}

/// Статусная метка в ячейке таблицы
#[component]
pub fn Badge(#[prop(optional)] variant: BadgeVariant, children: Children) -> impl IntoView {
    view! { <span class=variant.class()>{children()}</span> }
}
