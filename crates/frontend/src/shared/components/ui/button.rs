use leptos::prelude::*;

/// Button with variants (primary, secondary, ghost) and an optional leading icon
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "secondary", or "ghost"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Font Awesome icon class, e.g. "fa-floppy-disk"
    #[prop(optional, into)]
    icon: MaybeProp<String>,
    /// Tooltip
    #[prop(optional, into)]
    title: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button--secondary",
        "ghost" => "button--ghost",
        _ => "button--primary",
    };
    let button_title = move || title.get().unwrap_or_default();

    view! {
        <button
            type="button"
            class=move || format!("button {}", variant_class())
            title=button_title
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {move || icon.get().map(|i| view! { <i class=format!("fa-solid {}", i)></i> })}
            <span>{children()}</span>
        </button>
    }
}
