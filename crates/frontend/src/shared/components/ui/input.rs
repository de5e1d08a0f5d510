use leptos::prelude::*;

/// Text input bound to a value signal
#[component]
pub fn Input(
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <input
            id=input_id
            class=move || format!("form__input {}", additional_class())
            type="text"
            prop:value=move || value.get()
            placeholder=input_placeholder
            on:input=move |ev| {
                if let Some(handler) = on_input {
                    handler.run(event_target_value(&ev));
                }
            }
        />
    }
}

/// Number input with display bounds and step.
///
/// The browser does not stop out-of-range typing; `on_input` receives the raw text.
#[component]
pub fn NumberInput(
    #[prop(into)]
    value: Signal<String>,
    min: i64,
    max: i64,
    step: i64,
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    // Unbounded sides are left without an attribute
    let min_attr = (min != i64::MIN).then(|| min.to_string());
    let max_attr = (max != i64::MAX).then(|| max.to_string());

    view! {
        <input
            id=input_id
            class="form__input form__input--number"
            type="number"
            min=min_attr
            max=max_attr
            step=step.to_string()
            prop:value=move || value.get()
            on:input=move |ev| {
                if let Some(handler) = on_input {
                    handler.run(event_target_value(&ev));
                }
            }
        />
    }
}
