use serde::{Deserialize, Serialize};

use crate::domain::a002_configuration_parameter::{build_catalog, Catalog, RawParam};
use crate::domain::common::{CodeSequence, DocumentCode};
use crate::shared::text_fold::{fold_tr, NameFilterable};

/// Route of the detail page; the document code travels in `evrakno`
pub const DETAIL_PATH: &str = "/Yapilandirma/Detay";

/// Static definition of a configuration document before codes are assigned
#[derive(Debug, Clone, Default)]
pub struct RawDocument {
    pub name: String,
    pub icon: String,
    pub description: String,
    pub parameters: Vec<RawParam>,
}

/// Configuration document (Satış, Üretim, ...) with its code and parameter catalog
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurationDocument {
    pub code: DocumentCode,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub catalog: Catalog,
}

impl ConfigurationDocument {
    pub fn card(&self) -> DocumentCard {
        DocumentCard {
            code: self.code.clone(),
            name: self.name.clone(),
            icon: self.icon.clone(),
            description: self.description.clone(),
            parameter_count: self.catalog.len(),
            visible: true,
        }
    }
}

/// Numbers documents `YPLN-0001`, `YPLN-0002`, ... in input order and builds
/// each document's catalog under its own code.
pub fn build_document_list<I>(raws: I) -> Vec<ConfigurationDocument>
where
    I: IntoIterator<Item = RawDocument>,
{
    let mut sequence = CodeSequence::starting_at_one();
    raws.into_iter()
        .map(|raw| {
            let code = DocumentCode::sequential(sequence.next_ordinal());
            let catalog = build_catalog(&code, raw.parameters);
            ConfigurationDocument {
                code,
                name: raw.name,
                icon: raw.icon,
                description: raw.description,
                catalog,
            }
        })
        .collect()
}

/// Card shown on the configuration list page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentCard {
    pub code: DocumentCode,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub parameter_count: usize,
    #[serde(default = "visible_by_default")]
    pub visible: bool,
}

fn visible_by_default() -> bool {
    true
}

impl DocumentCard {
    /// `/Yapilandirma/Detay?evrakno=<code>` with the code URL-encoded
    pub fn detail_href(&self) -> String {
        detail_href(&self.code)
    }

    pub fn data_name(&self) -> String {
        fold_tr(&self.name)
    }
}

impl NameFilterable for DocumentCard {
    fn filter_name(&self) -> &str {
        &self.name
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

pub fn detail_href(code: &DocumentCode) -> String {
    format!("{}?evrakno={}", DETAIL_PATH, urlencoding::encode(code.as_str()))
}
