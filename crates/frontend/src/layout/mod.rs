pub mod global_context;
pub mod sidebar;

use crate::shared::icons::icon;
use leptos::prelude::*;

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |         Content              |
/// |   (Left)  |        (Center)              |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <div class="app-left">
                    {left()}
                </div>

                <div class="app-main">
                    {center()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn TopHeader() -> impl IntoView {
    view! {
        <header class="top-header">
            <div class="top-header__title">
                {icon("bar-chart")}
                <span>"Месячные продажи"</span>
            </div>
            <div class="top-header__caption">
                "Загрузите CSV: колонки Месяц (YYYY-MM), Выручка, Прошлый год, Прирост %. \
                 Пустой прирост считается по прошлому году автоматически."
            </div>
        </header>
    }
}
