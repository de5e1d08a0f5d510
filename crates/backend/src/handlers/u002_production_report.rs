use axum::Json;
use contracts::usecases::u002_production_report::ProductionReportData;

/// GET /UretimBildirme01/GetData
pub async fn get_data() -> Json<ProductionReportData> {
    Json(ProductionReportData::default())
}
