use crate::layout::global_context::use_global_context;
use leptos::prelude::*;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_global_context();
    let is_open = move || ctx.sidebar_open.get();

    view! {
        <aside id="sidebar" data-zone="left" class="sidebar" class:open=is_open>
            {children()}
        </aside>
    }
}
