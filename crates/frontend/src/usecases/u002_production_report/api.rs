use crate::shared::api_utils::{api_url, ensure_ok};
use contracts::usecases::u002_production_report::ProductionReportData;
use gloo_net::http::Request;

/// Fetch the production report payload
pub async fn fetch_data() -> Result<ProductionReportData, String> {
    let response = Request::get(&api_url("/UretimBildirme01/GetData"))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    ensure_ok(response)?.json().await.map_err(|e| e.to_string())
}
