use leptos::prelude::*;

/// Search input with a clear button that is shown only while the query is non-empty.
///
/// Every keystroke writes `value`; clearing resets it to the empty string.
#[component]
pub fn SearchBox(
    /// Current query
    value: RwSignal<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let has_query = move || value.with(|v| !v.is_empty());

    view! {
        <div class="search-box">
            <i class="fa-solid fa-magnifying-glass search-box__icon" aria-hidden="true"></i>
            <input
                id=input_id
                type="search"
                class="form__input search-box__input"
                placeholder=input_placeholder
                autocomplete="off"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <button
                type="button"
                class="search-box__clear"
                class:d-none=move || !has_query()
                title="Temizle"
                on:click=move |_| value.set(String::new())
            >
                <i class="fa-solid fa-xmark"></i>
            </button>
        </div>
    }
}
