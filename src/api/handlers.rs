//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;

use super::AppState;
use super::types::CatalogResponse;
use crate::finance::inputs::RawInputs;
use crate::finance::types::ProjectionResult;
use crate::report::ReportRequest;

/// Returns the active catalogs and horizons.
///
/// `GET /catalog` → 200 + `CatalogResponse` JSON
pub async fn get_catalog(State(state): State<Arc<AppState>>) -> Json<CatalogResponse> {
    Json(CatalogResponse {
        catalog: state.catalog.clone(),
        horizons: state.engine.horizons().to_vec(),
    })
}

/// Runs one calculation on the posted raw inputs.
///
/// `POST /calculate` → 200 + `ProjectionResult` JSON. Unparseable field
/// values are coerced, never rejected.
pub async fn post_calculate(
    State(state): State<Arc<AppState>>,
    Json(raw): Json<RawInputs>,
) -> Json<ProjectionResult> {
    Json(calculate(&state, &raw))
}

/// Builds the report collaborator request body for the posted raw inputs.
///
/// `POST /report/metrics` → 200 + `{"metrics": {...}}`
pub async fn post_report_metrics(
    State(state): State<Arc<AppState>>,
    Json(raw): Json<RawInputs>,
) -> Json<ReportRequest> {
    let result = calculate(&state, &raw);
    Json(ReportRequest::from(&result))
}

/// Completes a collaborator request body posted by a client.
///
/// `POST /report/request` → 200 + the same body, with `decision` derived
/// from the figures when it was absent.
pub async fn post_report_request(Json(request): Json<ReportRequest>) -> Json<ReportRequest> {
    Json(request.with_resolved_decision())
}

fn calculate(state: &AppState, raw: &RawInputs) -> ProjectionResult {
    let inputs = raw.normalize(&state.catalog);
    let result = state.engine.calculate(&inputs);
    tracing::debug!(
        lifespan_years = inputs.lifespan_years,
        decision = ?result.decision,
        "calculated projection"
    );
    result
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::util::ServiceExt;

    use super::*;
    use crate::api::router;
    use crate::config::ScenarioConfig;

    fn make_test_state() -> Arc<AppState> {
        Arc::new(AppState::from_config(&ScenarioConfig::baseline()))
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn catalog_returns_200() {
        let app = router(make_test_state());

        let req = Request::builder()
            .uri("/catalog")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json["plant_types"]["natural_gas"].is_number());
        assert_eq!(json["horizons"], serde_json::json!([5, 10, 20]));
    }

    #[tokio::test]
    async fn calculate_empty_body_is_all_zero() {
        let app = router(make_test_state());

        let resp = app.oneshot(post_json("/calculate", "{}")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["plant_capex"], 0.0);
        assert_eq!(json["npv_smart"], 0.0);
        assert_eq!(json["projections"], serde_json::json!([]));
        assert_eq!(json["decision"], "new_plant_preferred");
    }

    #[tokio::test]
    async fn calculate_coerces_bad_values() {
        let app = router(make_test_state());

        let body = r#"{"additional_capacity_mw": "1", "hours_per_day": 10, "tariff": "5", "lifespan_years": "1", "meter_count": "lots"}"#;
        let resp = app.oneshot(post_json("/calculate", body)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["annual_plant_revenue"], 18_250_000.0);
        assert_eq!(json["total_plant_revenue"], 18_250_000.0);
        assert_eq!(json["smart_grid_capex"], 0.0);
    }

    #[tokio::test]
    async fn report_metrics_uses_collaborator_names() {
        let app = router(make_test_state());

        let body = r#"{"additional_capacity_mw": 10, "plant_type": "wind", "region": "europe", "lifespan_years": 10}"#;
        let resp = app
            .oneshot(post_json("/report/metrics", body))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let metrics = &json["metrics"];
        assert!(metrics["Cplant"].as_f64().is_some_and(|v| v > 0.0));
        assert!(metrics["decision"].is_string());
    }

    #[tokio::test]
    async fn report_request_fills_missing_decision() {
        let app = router(make_test_state());

        let body = r#"{"metrics": {"Cplant": 100, "Csmart": 50, "Rplant": 1, "revenuesmart": 2,
            "ROIplant": 50, "ROIsmart": 10, "NPVplant": 5, "NPVsmart": -5}}"#;
        let resp = app
            .oneshot(post_json("/report/request", body))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json["metrics"]["decision"],
            crate::finance::decision::Decision::NewPlantPreferred.text()
        );
    }

    #[tokio::test]
    async fn malformed_json_is_rejected() {
        let app = router(make_test_state());

        let resp = app
            .oneshot(post_json("/calculate", "{not json"))
            .await
            .unwrap();
        assert!(resp.status().is_client_error());
    }
}
