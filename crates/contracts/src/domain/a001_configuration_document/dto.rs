use serde::{Deserialize, Serialize};

use super::aggregate::{ConfigurationDocument, DocumentCard};
use crate::domain::a002_configuration_parameter::{build_catalog, Catalog, RawParam};
use crate::domain::common::DocumentCode;

/// Name shown for a code that matches no known document
pub const UNKNOWN_DOCUMENT_NAME: &str = "Tanımsız yapılandırma";

/// Response of `GET /api/configuration`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationListResponse {
    pub items: Vec<DocumentCard>,
}

/// Response of `GET /api/configuration/detail?evrakno=...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationDetail {
    pub code: DocumentCode,
    pub name: String,
    pub description: String,
    /// `false` when the code did not resolve to a document
    pub known: bool,
    pub catalog: Catalog,
}

impl ConfigurationDetail {
    pub fn from_document(doc: &ConfigurationDocument) -> Self {
        Self {
            code: doc.code.clone(),
            name: doc.name.clone(),
            description: doc.description.clone(),
            known: true,
            catalog: doc.catalog.clone(),
        }
    }

    /// Placeholder detail for a code with no document behind it
    pub fn unknown(code: DocumentCode) -> Self {
        let catalog = build_catalog(&code, Vec::<RawParam>::new());
        Self {
            code,
            name: UNKNOWN_DOCUMENT_NAME.to_string(),
            description: String::new(),
            known: false,
            catalog,
        }
    }
}

/// Query of the detail route
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetailQuery {
    pub evrakno: Option<String>,
}

impl DetailQuery {
    pub fn document_code(&self) -> DocumentCode {
        DocumentCode::from_query(self.evrakno.as_deref())
    }
}
