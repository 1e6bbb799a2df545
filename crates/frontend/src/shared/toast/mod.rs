//! Всплывающие уведомления о результате операций.
//!
//! Показ делает thaw (`ToasterProvider` в корне приложения). `ToastService`
//! запоминает `ToasterInjection` при создании, поэтому им можно пользоваться
//! после `await`, когда контекст уже недоступен.

use leptos::prelude::*;
use std::time::Duration;
use thaw::{Toast, ToastIntent, ToastOptions, ToastTitle, ToasterInjection};

const TOAST_TTL_MS: u64 = 4000;
/// Ошибки висят дольше: их текст приходит с бэкенда и его надо успеть прочитать
const ERROR_TTL_MS: u64 = 7000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

impl ToastKind {
    fn intent(&self) -> ToastIntent {
        match self {
            ToastKind::Success => ToastIntent::Success,
            ToastKind::Info => ToastIntent::Info,
            ToastKind::Error => ToastIntent::Error,
        }
    }

    fn timeout(&self) -> Duration {
        match self {
            ToastKind::Error => Duration::from_millis(ERROR_TTL_MS),
            _ => Duration::from_millis(TOAST_TTL_MS),
        }
    }

    fn options(&self) -> ToastOptions {
        ToastOptions::default()
            .with_intent(self.intent())
            .with_timeout(self.timeout())
    }
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toaster: StoredValue<ToasterInjection, LocalStorage>,
}

impl ToastService {
    /// Вызывать внутри `ToasterProvider`
    pub fn new() -> Self {
        Self {
            toaster: StoredValue::new_local(ToasterInjection::expect_context()),
        }
    }

    pub fn show(&self, kind: ToastKind, message: impl Into<String>) {
        let message = message.into();
        match kind {
            ToastKind::Error => log::warn!("toast: {}", message),
            _ => log::info!("toast: {}", message),
        }
        // форма могла закрыться вместе со своим owner
        self.toaster.try_with_value(|toaster| {
            toaster.dispatch_toast(
                move || {
                    view! {
                        <Toast>
                            <ToastTitle>{message}</ToastTitle>
                        </Toast>
                    }
                },
                kind.options(),
            )
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(ToastKind::Info, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_stay_longer_than_other_toasts() {
        assert_eq!(ToastKind::Success.timeout(), Duration::from_secs(4));
        assert_eq!(ToastKind::Info.timeout(), Duration::from_secs(4));
        assert_eq!(ToastKind::Error.timeout(), Duration::from_secs(7));
    }

    #[test]
    fn test_kind_maps_to_thaw_intent() {
        assert!(matches!(ToastKind::Success.intent(), ToastIntent::Success));
        assert!(matches!(ToastKind::Info.intent(), ToastIntent::Info));
        assert!(matches!(ToastKind::Error.intent(), ToastIntent::Error));
    }
}
