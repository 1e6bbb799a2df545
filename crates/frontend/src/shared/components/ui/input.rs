use leptos::prelude::*;

/// Поле ввода с подписью. `input_type`: "text" (по умолчанию), "number", ...
#[component]
pub fn Input(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional, into)] input_type: MaybeProp<String>,
    #[prop(optional, into)] id: MaybeProp<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                    {required.then_some(" *")}
                </label>
            })}
            <input
                id=input_id
                class="form__input"
                type=move || input_type.get().unwrap_or_else(|| "text".to_string())
                prop:value=move || value.get()
                placeholder=move || placeholder.get().unwrap_or_default()
                required=required
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
