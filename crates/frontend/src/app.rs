use crate::app_shell::MainLayout;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::theme::ThemeProvider;
use crate::shared::toast::ToastService;
use leptos::prelude::*;
use thaw::{ConfigProvider, ToastPosition, ToasterProvider};

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());
    provide_context(ModalStackService::new());

    view! {
        <ThemeProvider>
            <ConfigProvider>
                <ToasterProvider position=ToastPosition::BottomEnd>
                    <AppBody />
                </ToasterProvider>
            </ConfigProvider>
        </ThemeProvider>
    }
}

/// Всё, что ниже `ToasterProvider`: здесь уже доступен `ToasterInjection`
#[component]
fn AppBody() -> impl IntoView {
    provide_context(ToastService::new());

    view! {
        <MainLayout />
        <ModalHost />
    }
}
