use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::common::{CodeSequence, DocumentCode, ParameterCode};

// ============================================================================
// Raw input
// ============================================================================

/// One (value, label) entry of a single-select parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Parameter as it is written in a document's static definition list.
///
/// `kind` is the untyped tag (`switch`, `number`, `select`, `text`);
/// [`build_catalog`] turns it into a [`ParamKind`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawParam {
    pub name: String,
    #[serde(default, rename = "desc")]
    pub description: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub min: Option<i64>,
    #[serde(default)]
    pub max: Option<i64>,
    #[serde(default)]
    pub step: Option<i64>,
    #[serde(default)]
    pub options: Vec<SelectOption>,
    #[serde(default)]
    pub default: Option<Value>,
}

impl RawParam {
    pub fn switch(name: &str, description: &str, default: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: "switch".into(),
            default: Some(Value::Bool(default)),
            ..Default::default()
        }
    }

    pub fn number(name: &str, description: &str, min: i64, max: i64, step: i64, default: i64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: "number".into(),
            min: Some(min),
            max: Some(max),
            step: Some(step),
            default: Some(Value::from(default)),
            ..Default::default()
        }
    }

    pub fn select(name: &str, description: &str, options: Vec<SelectOption>, default: &str) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: "select".into(),
            options,
            default: Some(Value::String(default.into())),
            ..Default::default()
        }
    }

    pub fn text(name: &str, description: &str, default: Option<&str>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: "text".into(),
            default: default.map(|d| Value::String(d.into())),
            ..Default::default()
        }
    }
}

// ============================================================================
// Typed definition
// ============================================================================

/// Parameter type together with its constraints and default
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ParamKind {
    BooleanToggle {
        default: bool,
    },
    BoundedInteger {
        min: i64,
        max: i64,
        step: i64,
        default: i64,
    },
    SingleSelect {
        options: Vec<SelectOption>,
        default: String,
    },
    FreeText {
        default: Option<String>,
    },
}

impl ParamKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            ParamKind::BooleanToggle { .. } => "boolean-toggle",
            ParamKind::BoundedInteger { .. } => "bounded-integer",
            ParamKind::SingleSelect { .. } => "single-select",
            ParamKind::FreeText { .. } => "free-text",
        }
    }

    fn from_raw(raw: &RawParam) -> Self {
        match raw.kind.as_str() {
            "switch" | "boolean-toggle" => ParamKind::BooleanToggle {
                default: raw.default.as_ref().and_then(Value::as_bool).unwrap_or(false),
            },
            "number" | "bounded-integer" => {
                let min = raw.min.unwrap_or(i64::MIN);
                let max = raw.max.unwrap_or(i64::MAX).max(min);
                let default = raw
                    .default
                    .as_ref()
                    .and_then(|v| v.as_i64().or_else(|| v.as_str()?.trim().parse().ok()))
                    .unwrap_or_else(|| raw.min.unwrap_or(0));
                ParamKind::BoundedInteger {
                    min,
                    max,
                    step: raw.step.filter(|s| *s > 0).unwrap_or(1),
                    default,
                }
            }
            "select" | "single-select" => {
                let default = raw
                    .default
                    .as_ref()
                    .and_then(|v| v.as_str().map(str::to_string))
                    .or_else(|| raw.options.first().map(|o| o.value.clone()))
                    .unwrap_or_default();
                ParamKind::SingleSelect {
                    options: raw.options.clone(),
                    default,
                }
            }
            _ => ParamKind::FreeText {
                default: raw.default.as_ref().and_then(value_as_text),
            },
        }
    }
}

fn value_as_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// A configuration parameter with its code assigned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDefinition {
    pub code: ParameterCode,
    pub name: String,
    pub description: String,
    #[serde(flatten)]
    pub kind: ParamKind,
}

// ============================================================================
// Catalog
// ============================================================================

/// Ordered parameter definitions of one configuration document.
///
/// Codes are fixed at build time; nothing in the catalog changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    document: DocumentCode,
    definitions: Vec<ParameterDefinition>,
}

impl Catalog {
    pub fn document(&self) -> &DocumentCode {
        &self.document
    }

    pub fn definitions(&self) -> &[ParameterDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Build the catalog of `document`, numbering parameters `<document>.0001`, `.0002`, ...
/// in input order. Unknown `type` tags degrade to free text.
pub fn build_catalog<I>(document: &DocumentCode, raws: I) -> Catalog
where
    I: IntoIterator<Item = RawParam>,
{
    let mut sequence = CodeSequence::starting_at_one();
    let definitions = raws
        .into_iter()
        .map(|raw| {
            let kind = ParamKind::from_raw(&raw);
            ParameterDefinition {
                code: ParameterCode::new(document, sequence.next_ordinal()),
                name: raw.name,
                description: raw.description,
                kind,
            }
        })
        .collect();

    Catalog {
        document: document.clone(),
        definitions,
    }
}
