use leptos::prelude::*;

/// Выпадающий список. `options` - пары (значение, подпись).
#[component]
pub fn Select(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional, into)] id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>{l}</label>
            })}
            <select
                id=select_id
                class="form__select"
                disabled=move || disabled.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                <For
                    each=move || options.get()
                    key=|(val, label)| (val.clone(), label.clone())
                    children=move |(val, label)| {
                        let val_for_check = val.clone();
                        let is_selected = move || value.get() == val_for_check;
                        view! {
                            <option value=val selected=is_selected>{label}</option>
                        }
                    }
                />
            </select>
        </div>
    }
}
