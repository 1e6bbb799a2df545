use leptos::ev::MouseEvent;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Danger,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "button--primary",
            ButtonVariant::Secondary => "button--secondary",
            ButtonVariant::Ghost => "button--ghost",
            ButtonVariant::Danger => "button--danger",
        }
    }
}

/// Кнопка действия в строке таблицы. Клик не всплывает до строки.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] small: bool,
    #[prop(optional, into)] title: MaybeProp<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    on_click: Callback<MouseEvent>,
    children: Children,
) -> impl IntoView {
    let class = if small {
        format!("button {} button--small", variant.class())
    } else {
        format!("button {}", variant.class())
    };

    view! {
        <button
            type="button"
            class=class
            title=move || title.get().unwrap_or_default()
            disabled=move || disabled.get()
            on:click=move |ev: MouseEvent| {
                ev.stop_propagation();
                on_click.run(ev);
            }
        >
            {children()}
        </button>
    }
}
