use axum::http::{header, Method};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers;
use crate::shared::request_logger::request_logger;
use crate::shared::state::AppState;

/// Page routes rendered by the client application
const SPA_PAGES: &[&str] = &[
    "/",
    "/Yapilandirma/Liste",
    "/Yapilandirma/Detay",
    "/UretimBildirme01/Index",
];

/// Build the application router: JSON API, page routes and static files
pub fn configure_routes(state: AppState) -> Router {
    let index = ServeFile::new(state.index_html());

    // The client may be served by `trunk serve` on another port during development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let mut router = Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // CONFIGURATION (YAPILANDIRMA)
        // ========================================
        .route(
            "/api/configuration",
            get(handlers::a001_configuration::list_all),
        )
        .route(
            "/api/configuration/detail",
            get(handlers::a001_configuration::get_detail),
        )
        .route(
            "/api/configuration/save",
            post(handlers::a001_configuration::save),
        )
        // ========================================
        // PRODUCTION REPORTING (ÜRETİM BİLDİRME)
        // ========================================
        .route(
            "/UretimBildirme01/GetData",
            get(handlers::u002_production_report::get_data),
        );

    for page in SPA_PAGES {
        router = router.route_service(page, index.clone());
    }

    router
        .fallback_service(ServeDir::new(&state.static_dir))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_configuration_document::ConfigurationService;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use contracts::domain::a001_configuration_document::{
        ConfigurationDetail, ConfigurationListResponse,
    };
    use contracts::domain::a002_configuration_parameter::{collect, render, ControlValues};
    use contracts::usecases::u001_save_configuration::{
        SaveConfigurationRequest, SaveConfigurationResponse,
    };
    use serde::de::DeserializeOwned;
    use std::path::PathBuf;
    use tower::ServiceExt;

    fn static_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("hednova-{}-{}", tag, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<html><body>hednova</body></html>").unwrap();
        dir
    }

    fn app(tag: &str) -> Router {
        configure_routes(AppState::new(
            ConfigurationService::builtin(),
            static_dir(tag),
        ))
    }

    async fn get_json<T: DeserializeOwned>(router: Router, uri: &str) -> (StatusCode, T) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn lists_configuration_documents() {
        let (status, body): (_, ConfigurationListResponse) =
            get_json(app("list"), "/api/configuration").await;
        assert_eq!(status, StatusCode::OK);
        let codes: Vec<_> = body.items.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(
            codes,
            vec!["YPLN-0001", "YPLN-0002", "YPLN-0003", "YPLN-0004", "YPLN-0005", "YPLN-0006"]
        );
    }

    #[tokio::test]
    async fn detail_resolves_evrakno() {
        let (status, detail): (_, ConfigurationDetail) =
            get_json(app("detail"), "/api/configuration/detail?evrakno=%20YPLN-0003%20").await;
        assert_eq!(status, StatusCode::OK);
        assert!(detail.known);
        assert_eq!(detail.name, "Üretim");
        assert_eq!(detail.catalog.len(), 15);
    }

    #[tokio::test]
    async fn missing_or_blank_evrakno_uses_sentinel() {
        for uri in [
            "/api/configuration/detail",
            "/api/configuration/detail?evrakno=",
            "/api/configuration/detail?evrakno=%20%20",
        ] {
            let (status, detail): (_, ConfigurationDetail) = get_json(app("sentinel"), uri).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(detail.code.as_str(), "YPLN-0000");
            assert!(!detail.known);
        }
    }

    #[tokio::test]
    async fn save_logs_and_confirms() {
        let service = ConfigurationService::builtin();
        let detail = service.detail(contracts::domain::common::DocumentCode::new("YPLN-0003"));
        let rows = render(&detail.catalog);
        let request = SaveConfigurationRequest {
            document: detail.code.clone(),
            values: collect(&rows, &ControlValues::seeded(&rows)),
        };

        let response = app("save")
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/configuration/save")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(serde_json::to_vec(&request).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: SaveConfigurationResponse = serde_json::from_slice(&bytes).unwrap();
        assert!(body.success);
        assert_eq!(body.saved_count, 15);
        assert_eq!(body.message, "Ayarlar kaydedildi.");
    }

    #[tokio::test]
    async fn production_report_stub_says_hello() {
        let (status, body): (_, serde_json::Value) =
            get_json(app("report"), "/UretimBildirme01/GetData").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({ "Message": "Hello World!" }));
    }

    #[tokio::test]
    async fn page_routes_serve_the_client_shell() {
        for uri in ["/Yapilandirma/Liste", "/Yapilandirma/Detay?evrakno=YPLN-0001"] {
            let response = app("spa")
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            assert!(String::from_utf8_lossy(&bytes).contains("hednova"));
        }
    }

    #[tokio::test]
    async fn health_is_ok() {
        let response = app("health")
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
