use crate::shared::modal_frame::ModalFrame;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

type ModalBuilder = Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;
type CloseGuard = Arc<dyn Fn() -> bool + Send + Sync>;

/// Оформление и защита от закрытия для одной модалки
#[derive(Clone, Default)]
pub struct ModalOptions {
    pub style: Option<String>,
    pub class: Option<String>,
    /// false - оверлей и Escape модалку не закрывают (например, идёт сохранение)
    pub can_close: Option<CloseGuard>,
}

impl ModalOptions {
    pub fn sized(max_width_px: u32, class: &str) -> Self {
        Self {
            style: Some(format!(
                "max-width: min({w}px, 95vw); width: min({w}px, 95vw);",
                w = max_width_px
            )),
            class: Some(class.to_string()),
            can_close: None,
        }
    }

    pub fn guarded(mut self, can_close: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        self.can_close = Some(Arc::new(can_close));
        self
    }
}

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    builder: ModalBuilder,
    options: ModalOptions,
}

impl ModalEntry {
    fn may_close(&self) -> bool {
        self.options.can_close.as_ref().map(|f| f()).unwrap_or(true)
    }
}

/// Хэндл открытой модалки, закрывает её из обработчиков формы
#[derive(Clone)]
pub struct ModalHandle {
    id: u64,
    svc: ModalStackService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }
}

/// Стек модальных окон приложения.
///
/// Escape закрывает только верхнюю модалку (см. `ModalHost`).
#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<Vec<ModalEntry>>,
    next_id: StoredValue<u64>,
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    // удаление модалки синхронно внутри DOM-события роняет обработчик, откладываем на тик
    fn defer(&self, f: impl FnOnce(ModalStackService) + 'static) {
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            f(svc);
        });
    }

    pub fn is_open(&self) -> bool {
        self.stack.with(|s| !s.is_empty())
    }

    /// Открыть модалку поверх текущих. `builder` получает хэндл для самозакрытия.
    pub fn push<F>(&self, options: ModalOptions, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.stack.update(|s| {
            s.push(ModalEntry {
                id,
                builder: Arc::new(builder),
                options,
            })
        });

        ModalHandle { id, svc: *self }
    }

    pub fn close(&self, id: u64) {
        self.stack.update(|s| s.retain(|e| e.id != id));
    }

    pub fn close_deferred(&self, id: u64) {
        self.defer(move |svc| svc.close(id));
    }

    /// Закрыть верхнюю модалку, если её guard разрешает
    pub fn pop_if_allowed(&self) {
        let top_allows = self
            .stack
            .with_untracked(|s| s.last().map(ModalEntry::may_close).unwrap_or(false));
        if top_allows {
            self.defer(|svc| svc.stack.update(|s| {
                s.pop();
            }));
        }
    }
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}

/// Рендерит стек модалок. Монтируется один раз в корне приложения.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_context::<ModalStackService>()
        .expect("ModalStackService not provided in context (provide it in app root)");

    // глобальный Escape
    let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
        if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
            if keyboard_event.key() == "Escape" && svc.stack.with_untracked(|s| !s.is_empty()) {
                svc.pop_if_allowed();
            }
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    // ModalHost живёт всё время работы приложения
    closure.forget();

    view! {
        <Show when=move || svc.is_open()>
            <For
                each={move || svc.stack.get().into_iter().enumerate().collect::<Vec<_>>()}
                key=|(_, entry)| entry.id
                children=move |(idx, entry)| {
                    let z_index = 1000 + idx as i32;
                    let id = entry.id;
                    let guard_entry = entry.clone();
                    let on_close = Callback::new(move |_| {
                        if guard_entry.may_close() {
                            svc.close_deferred(id);
                        }
                    });

                    let view = (entry.builder)(ModalHandle { id, svc });

                    view! {
                        <ModalFrame
                            z_index=z_index
                            on_close=on_close
                            modal_style=entry.options.style.clone().unwrap_or_default()
                            modal_class=entry.options.class.clone().unwrap_or_default()
                        >
                            {view}
                        </ModalFrame>
                    }
                }
            />
        </Show>
    }
}
