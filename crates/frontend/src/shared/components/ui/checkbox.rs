use leptos::prelude::*;

#[component]
pub fn Checkbox(
    #[prop(into)] label: Signal<String>,
    #[prop(into)] checked: Signal<bool>,
    #[prop(optional)] on_change: Option<Callback<bool>>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <label
            class="form__checkbox-wrapper"
            class:form__checkbox-wrapper--disabled=move || disabled.get()
        >
            <input
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                disabled=move || disabled.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <span class="form__checkbox-label">{move || label.get()}</span>
        </label>
    }
}
