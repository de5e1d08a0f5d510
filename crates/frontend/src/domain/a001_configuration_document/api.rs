//! HTTP client for configuration documents

use crate::shared::api_utils::{api_url, ensure_ok};
use contracts::domain::a001_configuration_document::{
    ConfigurationDetail, ConfigurationListResponse,
};
use contracts::domain::common::DocumentCode;
use contracts::usecases::u001_save_configuration::{
    SaveConfigurationRequest, SaveConfigurationResponse,
};
use gloo_net::http::Request;

/// Fetch the cards shown on the list page
pub async fn fetch_list() -> Result<ConfigurationListResponse, String> {
    let response = Request::get(&api_url("/api/configuration"))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    ensure_ok(response)?.json().await.map_err(|e| e.to_string())
}

/// Fetch the catalog of one document
pub async fn fetch_detail(code: &DocumentCode) -> Result<ConfigurationDetail, String> {
    let url = format!(
        "{}?evrakno={}",
        api_url("/api/configuration/detail"),
        urlencoding::encode(code.as_str())
    );
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    ensure_ok(response)?.json().await.map_err(|e| e.to_string())
}

pub async fn post_save(
    request: &SaveConfigurationRequest,
) -> Result<SaveConfigurationResponse, String> {
    let response = Request::post(&api_url("/api/configuration/save"))
        .json(request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    ensure_ok(response)?.json().await.map_err(|e| e.to_string())
}
