use crate::domain::a001_configuration_document::api;
use contracts::domain::a001_configuration_document::ConfigurationDetail;
use contracts::domain::common::DocumentCode;
use contracts::usecases::u001_save_configuration::{SaveConfigurationRequest, SaveSink};

pub async fn fetch_detail(code: DocumentCode) -> Result<ConfigurationDetail, String> {
    api::fetch_detail(&code).await
}

/// Writes collected values to the browser console and posts them to the
/// backend in the background
pub struct BrowserSink;

impl SaveSink for BrowserSink {
    fn forward(&self, request: &SaveConfigurationRequest) {
        match serde_json::to_string_pretty(&request.values) {
            Ok(json) => log::info!("Kaydedilen veriler: {}", json),
            Err(e) => log::warn!("Could not serialize saved values: {}", e),
        }

        let request = request.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match api::post_save(&request).await {
                Ok(response) => log::debug!(
                    "Backend accepted {} values for {}",
                    response.saved_count,
                    request.document
                ),
                Err(e) => log::warn!("Save request for {} failed: {}", request.document, e),
            }
        });
    }
}
