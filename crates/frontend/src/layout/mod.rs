pub mod global_context;
pub mod left;

use global_context::use_global_context;
use leptos::prelude::*;

/// Application shell.
///
/// ```text
/// +-----------+----------------------------+
/// |  Sidebar  |          Content        [≡]|
/// | (overlay) |                            |
/// +-----------+----------------------------+
/// ```
///
/// The sidebar is off-canvas on every screen size. A single menu button opens
/// and closes it; while open the button sits inside the sidebar header.
#[component]
pub fn Shell<L>(left: L, children: Children) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
{
    let ctx = use_global_context();
    let is_open = move || ctx.sidebar_open.get();

    view! {
        <div class="app-layout">
            <left::Left>
                {left()}
            </left::Left>

            <button
                id="btnMenu"
                type="button"
                class="menu-btn"
                class:menu-btn-internal=is_open
                title="Menü"
                on:click=move |_| ctx.toggle_sidebar()
            >
                <i class="fa-solid fa-bars"></i>
            </button>

            <main class="main">
                {children()}
            </main>
        </div>
    }
}
