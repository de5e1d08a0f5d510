use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::row::{ControlSpec, DisplayRow};
use crate::domain::common::ParameterCode;

/// Current content of one input control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ControlValue {
    Bool(bool),
    Number(i64),
    Text(String),
}

impl ControlValue {
    /// Interpret the raw content of a number input. Anything that is not an
    /// integer is kept verbatim as text.
    pub fn from_number_input(raw: &str) -> Self {
        match raw.trim().parse::<i64>() {
            Ok(n) => ControlValue::Number(n),
            Err(_) => ControlValue::Text(raw.to_string()),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ControlValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Display form used to seed text-like inputs
    pub fn to_input_string(&self) -> String {
        match self {
            ControlValue::Bool(b) => b.to_string(),
            ControlValue::Number(n) => n.to_string(),
            ControlValue::Text(s) => s.clone(),
        }
    }
}

impl From<&ControlSpec> for ControlValue {
    fn from(spec: &ControlSpec) -> Self {
        match spec {
            ControlSpec::Toggle { checked } => ControlValue::Bool(*checked),
            ControlSpec::Number { value, .. } => ControlValue::Number(*value),
            ControlSpec::Select { selected, options } => ControlValue::Text(
                selected
                    .clone()
                    .or_else(|| options.first().map(|o| o.value.clone()))
                    .unwrap_or_default(),
            ),
            ControlSpec::Text { value } => ControlValue::Text(value.clone()),
        }
    }
}

/// Current value of every control, keyed by parameter code.
///
/// Seeded from the rendered rows and updated by input events; read by [`collect`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlValues {
    values: HashMap<ParameterCode, ControlValue>,
}

impl ControlValues {
    pub fn seeded(rows: &[DisplayRow]) -> Self {
        Self {
            values: rows
                .iter()
                .map(|row| (row.code.clone(), ControlValue::from(&row.control)))
                .collect(),
        }
    }

    pub fn get(&self, code: &ParameterCode) -> Option<&ControlValue> {
        self.values.get(code)
    }

    pub fn set(&mut self, code: ParameterCode, value: ControlValue) {
        self.values.insert(code, value);
    }

    /// Flip a boolean control. Returns the new state, or `None` when the code
    /// has no boolean value.
    pub fn toggle(&mut self, code: &ParameterCode) -> Option<bool> {
        match self.values.get_mut(code) {
            Some(ControlValue::Bool(b)) => {
                *b = !*b;
                Some(*b)
            }
            _ => None,
        }
    }

    pub fn remove(&mut self, code: &ParameterCode) -> Option<ControlValue> {
        self.values.remove(code)
    }
}

/// One collected (code, name, value) triple
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditResult {
    pub code: ParameterCode,
    pub name: String,
    pub value: Option<ControlValue>,
}

/// Read the current value of every row, hidden rows included, in row order.
/// A row without a control value yields `value: None`.
pub fn collect(rows: &[DisplayRow], values: &ControlValues) -> Vec<EditResult> {
    rows.iter()
        .map(|row| EditResult {
            code: row.code.clone(),
            name: row.name.clone(),
            value: values.get(&row.code).cloned(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_configuration_parameter::aggregate::{
        build_catalog, RawParam, SelectOption,
    };
    use crate::domain::a002_configuration_parameter::row::{filter, render};
    use crate::domain::common::DocumentCode;

    fn fifteen_rows() -> Vec<DisplayRow> {
        let raws = (1..=15).map(|i| {
            if i % 5 == 0 {
                RawParam::switch(&format!("Gizli {i}"), "", i % 2 == 0)
            } else {
                RawParam::number(&format!("Sayaç {i}"), "", 1, 100, 1, i)
            }
        });
        render(&build_catalog(&DocumentCode::new("YPLN-0003"), raws))
    }

    #[test]
    fn hidden_rows_are_still_collected() {
        let mut rows = fifteen_rows();
        let values = ControlValues::seeded(&rows);
        assert_eq!(filter(&mut rows, "sayaç"), 12);
        assert_eq!(rows.iter().filter(|r| !r.visible).count(), 3);

        let results = collect(&rows, &values);
        assert_eq!(results.len(), 15);
        assert!(results.iter().all(|r| r.value.is_some()));
        let codes: Vec<_> = results.iter().map(|r| r.code.clone()).collect();
        let row_codes: Vec<_> = rows.iter().map(|r| r.code.clone()).collect();
        assert_eq!(codes, row_codes);
    }

    #[test]
    fn toggled_value_wins_over_default() {
        let rows = render(&build_catalog(
            &DocumentCode::new("YPLN-0003"),
            vec![RawParam::switch("Fire bildirimi", "", true)],
        ));
        let mut values = ControlValues::seeded(&rows);
        assert_eq!(values.toggle(&rows[0].code), Some(false));

        let results = collect(&rows, &values);
        assert_eq!(results[0].value, Some(ControlValue::Bool(false)));
    }

    #[test]
    fn edited_number_and_text_are_collected() {
        let rows = render(&build_catalog(
            &DocumentCode::new("YPLN-0003"),
            vec![
                RawParam::number("Gün", "", 1, 365, 1, 7),
                RawParam::text("Not", "", Some("eski")),
            ],
        ));
        let mut values = ControlValues::seeded(&rows);
        values.set(rows[0].code.clone(), ControlValue::from_number_input("14"));
        values.set(rows[1].code.clone(), ControlValue::Text("yeni".into()));

        let results = collect(&rows, &values);
        assert_eq!(results[0].value, Some(ControlValue::Number(14)));
        assert_eq!(results[1].value, Some(ControlValue::Text("yeni".into())));
    }

    #[test]
    fn missing_control_yields_null_without_aborting() {
        let rows = fifteen_rows();
        let mut values = ControlValues::seeded(&rows);
        values.remove(&rows[4].code);

        let results = collect(&rows, &values);
        assert_eq!(results.len(), 15);
        assert_eq!(results[4].value, None);
        assert!(results[5].value.is_some());

        let json = serde_json::to_value(&results[4]).unwrap();
        assert!(json["value"].is_null());
    }

    #[test]
    fn toggle_ignores_non_boolean_controls() {
        let rows = render(&build_catalog(
            &DocumentCode::new("YPLN-0003"),
            vec![RawParam::number("Gün", "", 1, 365, 1, 7)],
        ));
        let mut values = ControlValues::seeded(&rows);
        assert_eq!(values.toggle(&rows[0].code), None);
        assert_eq!(values.get(&rows[0].code), Some(&ControlValue::Number(7)));
    }

    #[test]
    fn select_with_unmatched_default_seeds_first_option() {
        let rows = render(&build_catalog(
            &DocumentCode::new("YPLN-0003"),
            vec![RawParam::select(
                "Vardiya",
                "",
                vec![SelectOption::new("a", "Sabah"), SelectOption::new("b", "Akşam")],
                "z",
            )],
        ));
        let values = ControlValues::seeded(&rows);
        assert_eq!(values.get(&rows[0].code), Some(&ControlValue::Text("a".into())));

        let results = collect(&rows, &values);
        assert_eq!(results[0].value, Some(ControlValue::Text("a".into())));
    }

    #[test]
    fn values_serialize_untagged() {
        assert_eq!(serde_json::to_string(&ControlValue::Bool(true)).unwrap(), "true");
        assert_eq!(serde_json::to_string(&ControlValue::Number(7)).unwrap(), "7");
        assert_eq!(
            serde_json::to_string(&ControlValue::Text("start".into())).unwrap(),
            "\"start\""
        );
        assert_eq!(
            ControlValue::from_number_input("abc"),
            ControlValue::Text("abc".into())
        );
    }
}
