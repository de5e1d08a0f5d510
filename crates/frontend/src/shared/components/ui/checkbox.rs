use leptos::prelude::*;

/// On/off switch rendered as a labelled checkbox
#[component]
pub fn Switch(
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    /// Label next to the switch
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// ID for the checkbox element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let checkbox_id = move || id.get().unwrap_or_default();
    let label_text = move || label.get().unwrap_or_else(|| "Açık".to_string());

    view! {
        <label class="form__switch" for=checkbox_id>
            <input
                id=checkbox_id
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <span>{label_text}</span>
        </label>
    }
}
