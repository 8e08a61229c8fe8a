//! Application Shell - корневой layout приложения
//!
//! Страница одна: слева панель настроек источника данных, по центру дашборд.

use crate::dashboards::SalesOverviewDashboard;
use crate::layout::sidebar::Sidebar;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn AppShell() -> impl IntoView {
    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <SalesOverviewDashboard /> }.into_any()
        />
    }
}
