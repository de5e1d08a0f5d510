use serde::{Deserialize, Serialize};

use super::aggregate::{Catalog, ParamKind, ParameterDefinition, SelectOption};
use crate::domain::common::ParameterCode;
use crate::shared::text_fold::{apply_name_filter, fold_tr, NameFilterable};

/// Input control a row should be bound to, seeded with the parameter default
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "control", rename_all = "snake_case")]
pub enum ControlSpec {
    Toggle {
        checked: bool,
    },
    Number {
        value: i64,
        min: i64,
        max: i64,
        step: i64,
    },
    Select {
        options: Vec<SelectOption>,
        /// Value of the option that starts selected, `None` when the default matches no option
        selected: Option<String>,
    },
    Text {
        value: String,
    },
}

impl ControlSpec {
    fn for_kind(kind: &ParamKind) -> Self {
        match kind {
            ParamKind::BooleanToggle { default } => ControlSpec::Toggle { checked: *default },
            ParamKind::BoundedInteger {
                min,
                max,
                step,
                default,
            } => ControlSpec::Number {
                value: *default,
                min: *min,
                max: *max,
                step: *step,
            },
            ParamKind::SingleSelect { options, default } => ControlSpec::Select {
                options: options.clone(),
                selected: options
                    .iter()
                    .find(|o| &o.value == default)
                    .map(|o| o.value.clone()),
            },
            ParamKind::FreeText { default } => ControlSpec::Text {
                value: default.clone().unwrap_or_default(),
            },
        }
    }
}

/// One rendered, filterable parameter row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayRow {
    pub code: ParameterCode,
    pub name: String,
    pub description: String,
    pub control: ControlSpec,
    pub visible: bool,
}

impl DisplayRow {
    fn from_definition(def: &ParameterDefinition) -> Self {
        Self {
            code: def.code.clone(),
            name: def.name.clone(),
            description: def.description.clone(),
            control: ControlSpec::for_kind(&def.kind),
            visible: true,
        }
    }

    /// Value of the `data-name` attribute: the folded name
    pub fn data_name(&self) -> String {
        fold_tr(&self.name)
    }

    pub fn dom_id(&self) -> String {
        self.code.dom_id()
    }
}

impl NameFilterable for DisplayRow {
    fn filter_name(&self) -> &str {
        &self.name
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// Project every definition of `catalog` into a visible row, in catalog order
pub fn render(catalog: &Catalog) -> Vec<DisplayRow> {
    catalog
        .definitions()
        .iter()
        .map(DisplayRow::from_definition)
        .collect()
}

/// Show the rows whose name contains `query` (Turkish folding), hide the rest.
/// Returns the number of visible rows.
pub fn filter(rows: &mut [DisplayRow], query: &str) -> usize {
    apply_name_filter(rows, query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_configuration_parameter::aggregate::{build_catalog, RawParam};
    use crate::domain::common::DocumentCode;

    fn catalog(raws: Vec<RawParam>) -> Catalog {
        build_catalog(&DocumentCode::new("YPLN-0003"), raws)
    }

    #[test]
    fn render_seeds_controls_from_defaults() {
        let cat = catalog(vec![
            RawParam::switch("Operatör kodu okutulsun", "", true),
            RawParam::number("Gün aralığı", "", 1, 365, 1, 7),
            RawParam::select(
                "Operatör seçimi ekranı",
                "",
                vec![
                    SelectOption::new("start", "Başlangıç ekranı"),
                    SelectOption::new("end", "Bitiş ekranı"),
                ],
                "end",
            ),
            RawParam::text("Not", "", None),
        ]);
        let rows = render(&cat);

        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.visible));
        assert_eq!(rows[0].control, ControlSpec::Toggle { checked: true });
        assert_eq!(
            rows[1].control,
            ControlSpec::Number {
                value: 7,
                min: 1,
                max: 365,
                step: 1
            }
        );
        match &rows[2].control {
            ControlSpec::Select { options, selected } => {
                assert_eq!(options.len(), 2);
                assert_eq!(selected.as_deref(), Some("end"));
            }
            other => panic!("unexpected control {other:?}"),
        }
        assert_eq!(
            rows[3].control,
            ControlSpec::Text {
                value: String::new()
            }
        );
    }

    #[test]
    fn select_default_outside_options_selects_nothing() {
        let cat = catalog(vec![RawParam::select(
            "Mod",
            "",
            vec![SelectOption::new("a", "A")],
            "zzz",
        )]);
        let rows = render(&cat);
        assert!(matches!(
            &rows[0].control,
            ControlSpec::Select { selected: None, .. }
        ));
    }

    #[test]
    fn rerender_keeps_codes() {
        let cat = catalog(vec![RawParam::switch("a", "", true), RawParam::switch("b", "", true)]);
        let first: Vec<_> = render(&cat).into_iter().map(|r| r.code).collect();
        let second: Vec<_> = render(&cat).into_iter().map(|r| r.code).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn case_insensitive_filter_keeps_all_three() {
        let cat = catalog(vec![
            RawParam::switch("Alpha", "", true),
            RawParam::switch("beta", "", true),
            RawParam::switch("Gamma", "", true),
        ]);
        let mut rows = render(&cat);
        assert_eq!(filter(&mut rows, "a"), 3);
        assert_eq!(filter(&mut rows, "A"), 3);
        assert_eq!(filter(&mut rows, "amm"), 1);
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "beta", "Gamma"]);
        assert!(rows[2].visible);
    }

    #[test]
    fn empty_query_after_filter_restores_rows() {
        let cat = catalog(vec![
            RawParam::switch("Fire bildirimi", "", true),
            RawParam::switch("Duruş girişi", "", true),
        ]);
        let mut rows = render(&cat);
        assert_eq!(filter(&mut rows, "fire"), 1);
        assert_eq!(filter(&mut rows, ""), 2);
        assert!(rows.iter().all(|r| r.visible));
    }

    #[test]
    fn dotted_capital_matches_plain_i() {
        let cat = catalog(vec![
            RawParam::switch("İş emri", "", true),
            RawParam::switch("Isı kontrolü", "", true),
        ]);
        let mut rows = render(&cat);
        assert_eq!(filter(&mut rows, "iş"), 1);
        assert!(rows[0].visible);
        assert!(!rows[1].visible);

        assert_eq!(filter(&mut rows, "I"), 1);
        assert!(!rows[0].visible);
        assert!(rows[1].visible);
    }

    #[test]
    fn data_name_is_folded() {
        let cat = catalog(vec![RawParam::switch("İş Emri", "", true)]);
        assert_eq!(render(&cat)[0].data_name(), "iş emri");
    }
}
