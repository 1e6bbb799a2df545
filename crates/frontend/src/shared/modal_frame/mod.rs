use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Оверлей + поверхность модального окна.
///
/// Заголовок и кнопки рисует сама форма (`ModalHeader`, `.modal__actions`).
#[component]
pub fn ModalFrame(
    on_close: Callback<()>,
    #[prop(optional)] z_index: Option<i32>,
    #[prop(optional)] modal_class: Option<String>,
    #[prop(optional)] modal_style: Option<String>,
    children: Children,
) -> impl IntoView {
    let z_index = z_index.unwrap_or(1000);
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // закрываем только если и нажатие, и отпускание были на самом оверлее
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let modal_class = match modal_class {
        Some(cls) if !cls.is_empty() => format!("modal {cls}"),
        _ => "modal".to_string(),
    };
    let modal_style = format!("position: relative; {}", modal_style.unwrap_or_default());

    view! {
        <div
            class="modal-overlay"
            style=format!("z-index: {z_index};")
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class=modal_class style=modal_style on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                {children()}
            </div>
        </div>
    }
}

/// Шапка формы в модалке: заголовок и крестик
#[component]
pub fn ModalHeader(
    #[prop(into)] title: Signal<String>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal__header">
            <h3 class="modal__title">{move || title.get()}</h3>
            <button class="modal__close" title="Close" on:click=move |_| on_close.run(())>
                {crate::shared::icons::icon("x")}
            </button>
        </div>
    }
}
