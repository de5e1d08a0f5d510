use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Sidebar open/close state shared by the menu button and the sidebar
    provide_context(AppGlobalContext::new());

    view! {
        <AppRoutes />
    }
}
