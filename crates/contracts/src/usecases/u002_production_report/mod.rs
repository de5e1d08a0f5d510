//! Production reporting (üretim bildirme) screen data

use serde::{Deserialize, Serialize};

/// Payload of `GET /UretimBildirme01/GetData`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionReportData {
    #[serde(rename = "Message")]
    pub message: String,
}

impl Default for ProductionReportData {
    fn default() -> Self {
        Self {
            message: "Hello World!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_pascal_case_key() {
        let json = serde_json::to_string(&ProductionReportData::default()).unwrap();
        assert_eq!(json, r#"{"Message":"Hello World!"}"#);
    }
}
