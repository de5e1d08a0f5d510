use axum::extract::{Query, State};
use axum::Json;
use contracts::domain::a001_configuration_document::{
    ConfigurationDetail, ConfigurationListResponse, DetailQuery,
};
use contracts::usecases::u001_save_configuration::{
    SaveConfigurationRequest, SaveConfigurationResponse,
};

use crate::shared::state::AppState;

/// GET /api/configuration
pub async fn list_all(State(state): State<AppState>) -> Json<ConfigurationListResponse> {
    Json(ConfigurationListResponse {
        items: state.configurations.list_cards(),
    })
}

/// GET /api/configuration/detail?evrakno=YPLN-0001
///
/// Missing or blank `evrakno` resolves to `YPLN-0000`.
pub async fn get_detail(
    State(state): State<AppState>,
    Query(query): Query<DetailQuery>,
) -> Json<ConfigurationDetail> {
    Json(state.configurations.detail(query.document_code()))
}

/// POST /api/configuration/save
pub async fn save(
    State(state): State<AppState>,
    Json(request): Json<SaveConfigurationRequest>,
) -> Json<SaveConfigurationResponse> {
    Json(state.configurations.record_save(&request))
}
