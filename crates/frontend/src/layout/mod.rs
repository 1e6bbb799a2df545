pub mod center;
pub mod global_context;
pub mod left;
pub mod tabs;
pub mod top_header;
pub mod zoom;

use leptos::prelude::*;
use top_header::TopHeader;

/// Оболочка приложения.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// |   (Left)  |   (Center: вкладки)          |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    let zoom = zoom::use_viewport_zoom();

    view! {
        <div class="app-layout" style:zoom=move || zoom.get().to_string()>
            <TopHeader />

            <div class="app-body">
                <left::Left>
                    {left()}
                </left::Left>

                <div class="app-main">
                    <center::Center>
                        {center()}
                    </center::Center>
                </div>
            </div>
        </div>
    }
}
