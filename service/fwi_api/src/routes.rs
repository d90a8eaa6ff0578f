use std::sync::Arc;

use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};

use fwi_core::evaluate;

use crate::dto::{
    round2, ErrorResponse, ExampleDto, ExamplesResponse, HealthResponse, ModelInfoResponse,
    PredictResponse,
};
use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/", get(home))
        .route("/api/predict", post(predict))
        .route("/api/model-info", get(model_info))
        .route("/api/example-predictions", get(example_predictions))
        .route("/api/health", get(health))
        .fallback(not_found)
        .layer(cors)
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

async fn home(State(state): State<Arc<AppState>>) -> Html<String> {
    let regions = state
        .artifacts
        .as_ref()
        .map(|a| a.regions().names())
        .unwrap_or_default();
    let items: String = regions.iter().map(|r| format!("<li>{r}</li>")).collect();
    let meta = &state.metadata;
    Html(format!(
        "<!DOCTYPE html>\n<html>\n<head><title>FWI Prediction Service</title></head>\n<body>\n\
         <h1>Fire Weather Index Prediction</h1>\n\
         <p>{} (alpha {}) &middot; R2 {} &middot; MAE {}</p>\n\
         <h2>Available regions</h2>\n<ul>{items}</ul>\n\
         </body>\n</html>\n",
        meta.algorithm, meta.optimal_alpha, meta.r2_score, meta.mae,
    ))
}

async fn predict(State(state): State<Arc<AppState>>, Json(body): Json<Value>) -> Response {
    let Some(artifacts) = state.artifacts.as_ref() else {
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Model not loaded");
    };
    match evaluate(&body, artifacts) {
        Ok(result) => {
            log::debug!("scored {:.2} -> {}", result.score, result.level.as_str());
            (
                StatusCode::OK,
                Json(PredictResponse::new(result, &state.metadata)),
            )
                .into_response()
        }
        Err(e) => error_response(StatusCode::BAD_REQUEST, &e.to_string()),
    }
}

async fn model_info(State(state): State<Arc<AppState>>) -> Json<ModelInfoResponse> {
    let (features, regions) = match state.artifacts.as_ref() {
        Some(a) => (a.features().to_vec(), a.regions().names()),
        None => (Vec::new(), Vec::new()),
    };
    Json(ModelInfoResponse {
        success: true,
        model_info: state.metadata.clone(),
        features,
        regions,
        model_loaded: state.model_loaded(),
    })
}

/// Three canned inputs demonstrating the risk bands.
fn canned_examples() -> [(&'static str, Value); 3] {
    [
        (
            "Low Fire Risk (Cool, Humid)",
            json!({
                "temperature": 20, "humidity": 80, "wind_speed": 5,
                "rain": 2, "ffmc": 30, "dmc": 100, "isi": 10, "region": "Bejaia"
            }),
        ),
        (
            "High Fire Risk (Hot, Dry, Windy)",
            json!({
                "temperature": 35, "humidity": 30, "wind_speed": 15,
                "rain": 0, "ffmc": 90, "dmc": 200, "isi": 40, "region": "Sidi-Bel-Abbes"
            }),
        ),
        (
            "Moderate Fire Risk",
            json!({
                "temperature": 28, "humidity": 55, "wind_speed": 10,
                "rain": 1, "ffmc": 50, "dmc": 150, "isi": 25, "region": "Bejaia"
            }),
        ),
    ]
}

async fn example_predictions(State(state): State<Arc<AppState>>) -> Json<ExamplesResponse> {
    let mut examples = Vec::new();
    if let Some(artifacts) = state.artifacts.as_ref() {
        for (name, data) in canned_examples() {
            // Examples that fail to score are skipped, not surfaced.
            if let Ok(result) = evaluate(&data, artifacts) {
                examples.push(ExampleDto {
                    name,
                    data,
                    fwi_prediction: round2(result.score),
                });
            }
        }
    }
    Json(ExamplesResponse {
        success: true,
        examples,
    })
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        model_loaded: state.model_loaded(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Endpoint not found")
}

fn handle_panic(_err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}
