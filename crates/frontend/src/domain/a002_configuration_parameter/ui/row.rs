use crate::shared::components::ui::{Input, NumberInput, Select, Switch};
use contracts::domain::a002_configuration_parameter::{
    ControlSpec, ControlValue, ControlValues, DisplayRow,
};
use leptos::prelude::*;

/// One parameter line: code, name, description and the bound input control.
///
/// The row stays mounted while filtered out so its value keeps being collected.
#[component]
pub fn ParameterRow(
    row: DisplayRow,
    /// Current values of all controls on the page
    values: RwSignal<ControlValues>,
    /// Whether the name filter hides this row
    #[prop(into)]
    hidden: Signal<bool>,
) -> impl IntoView {
    let dom_id = row.dom_id();
    let control = render_control(&row, &dom_id, values);

    view! {
        <div
            class="param-row"
            class:yd-hidden=move || hidden.get()
            data-name=row.data_name()
            data-code=row.code.to_string()
        >
            <div class="param-row__info">
                <label class="param-row__name" for=dom_id>
                    <span class="param-row__code">{row.code.to_string()}</span>
                    {row.name.clone()}
                </label>
                <div class="param-row__desc">{row.description.clone()}</div>
            </div>
            <div class="param-row__control">{control}</div>
        </div>
    }
}

fn render_control(row: &DisplayRow, dom_id: &str, values: RwSignal<ControlValues>) -> AnyView {
    let code = row.code.clone();
    let current = {
        let code = code.clone();
        move || {
            values.with(|v| {
                v.get(&code)
                    .map(ControlValue::to_input_string)
                    .unwrap_or_default()
            })
        }
    };
    let id = dom_id.to_string();

    match &row.control {
        ControlSpec::Toggle { .. } => {
            let checked = {
                let code = code.clone();
                move || values.with(|v| v.get(&code).and_then(ControlValue::as_bool).unwrap_or(false))
            };
            view! {
                <Switch
                    id=id
                    checked=Signal::derive(checked)
                    on_change=Callback::new(move |on: bool| {
                        values.update(|v| v.set(code.clone(), ControlValue::Bool(on)))
                    })
                />
            }
            .into_any()
        }
        ControlSpec::Number { min, max, step, .. } => view! {
            <NumberInput
                id=id
                value=Signal::derive(current)
                min=*min
                max=*max
                step=*step
                on_input=Callback::new(move |raw: String| {
                    values.update(|v| v.set(code.clone(), ControlValue::from_number_input(&raw)))
                })
            />
        }
        .into_any(),
        ControlSpec::Select { options, .. } => view! {
            <Select
                id=id
                value=Signal::derive(current)
                options=options.clone()
                on_change=Callback::new(move |selected: String| {
                    values.update(|v| v.set(code.clone(), ControlValue::Text(selected)))
                })
            />
        }
        .into_any(),
        ControlSpec::Text { .. } => view! {
            <Input
                id=id
                value=Signal::derive(current)
                on_input=Callback::new(move |text: String| {
                    values.update(|v| v.set(code.clone(), ControlValue::Text(text)))
                })
            />
        }
        .into_any(),
    }
}
