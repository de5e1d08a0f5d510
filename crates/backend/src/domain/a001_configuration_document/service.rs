use contracts::domain::a001_configuration_document::{
    build_document_list, builtin_documents, ConfigurationDetail, ConfigurationDocument,
    DocumentCard, RawDocument,
};
use contracts::domain::common::DocumentCode;
use contracts::usecases::u001_save_configuration::{
    SaveConfigurationRequest, SaveConfigurationResponse, SaveSink, SAVED_MESSAGE,
};

/// Configuration documents built once at start-up and read by every request
#[derive(Debug)]
pub struct ConfigurationService {
    documents: Vec<ConfigurationDocument>,
}

impl ConfigurationService {
    pub fn new(raws: Vec<RawDocument>) -> Self {
        let documents = build_document_list(raws);
        tracing::info!(
            "Configuration catalogs built: {} documents, {} parameters",
            documents.len(),
            documents.iter().map(|d| d.catalog.len()).sum::<usize>()
        );
        Self { documents }
    }

    pub fn builtin() -> Self {
        Self::new(builtin_documents())
    }

    pub fn list_cards(&self) -> Vec<DocumentCard> {
        self.documents.iter().map(ConfigurationDocument::card).collect()
    }

    pub fn find(&self, code: &DocumentCode) -> Option<&ConfigurationDocument> {
        self.documents.iter().find(|d| &d.code == code)
    }

    /// Detail of `code`; unknown codes yield an empty placeholder instead of an error
    pub fn detail(&self, code: DocumentCode) -> ConfigurationDetail {
        match self.find(&code) {
            Some(doc) => ConfigurationDetail::from_document(doc),
            None => {
                tracing::warn!("Configuration document {} not found", code);
                ConfigurationDetail::unknown(code)
            }
        }
    }

    /// Log the submitted values. Nothing is persisted.
    pub fn record_save(&self, request: &SaveConfigurationRequest) -> SaveConfigurationResponse {
        LogSink.forward(request);
        SaveConfigurationResponse {
            success: true,
            message: SAVED_MESSAGE.to_string(),
            saved_count: request.values.len(),
        }
    }
}

/// Writes saved values to the server log
struct LogSink;

impl SaveSink for LogSink {
    fn forward(&self, request: &SaveConfigurationRequest) {
        tracing::info!(
            "Kaydedilen veriler: document={} count={}",
            request.document,
            request.values.len()
        );
        for result in &request.values {
            let value = result
                .value
                .as_ref()
                .map(|v| v.to_input_string())
                .unwrap_or_else(|| "null".to_string());
            tracing::info!("  {} | {} = {}", result.code, result.name, value);
        }
    }
}
