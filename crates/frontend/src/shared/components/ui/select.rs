use contracts::domain::a002_configuration_parameter::SelectOption;
use leptos::prelude::*;

/// Single-select dropdown over fixed options
#[component]
pub fn Select(
    /// Value of the selected option
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options in display order
    options: Vec<SelectOption>,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();

    view! {
        <select
            id=select_id
            class="form__select"
            on:change=move |ev| {
                if let Some(handler) = on_change {
                    handler.run(event_target_value(&ev));
                }
            }
        >
            {options
                .into_iter()
                .map(|option| {
                    let option_value = option.value.clone();
                    let is_selected = move || value.with(|v| v == &option_value);
                    view! {
                        <option value=option.value selected=is_selected>
                            {option.label}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
