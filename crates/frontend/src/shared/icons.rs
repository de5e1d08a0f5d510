use leptos::prelude::*;

/// Font Awesome solid icon, e.g. `fa("fa-gear")`
pub fn fa(name: &str) -> impl IntoView {
    view! { <i class=format!("fa-solid {}", name) aria-hidden="true"></i> }
}
