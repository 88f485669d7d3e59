use crate::presenter::{ResultView, EMPTY_QUESTION_WARNING};
use crate::server::pages::{self, Outcome};
use crate::state::{AppState, ModelStatus};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use serde::Deserialize;
use tracing::{error, warn};

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub question: String,
}

// ============================================================================
// HTML pages
// ============================================================================

pub async fn index(State(state): State<AppState>) -> Response {
    match state.model.as_ref() {
        ModelStatus::Ready(_) => Html(pages::index_page("", None)).into_response(),
        ModelStatus::Unavailable {
            error,
            expected_files,
        } => unavailable(error, expected_files),
    }
}

pub async fn analyze_form(
    State(state): State<AppState>,
    Form(req): Form<AnalyzeRequest>,
) -> Response {
    metrics::counter!("qdiff_requests_total", "endpoint" => "form").increment(1);

    let analyzer = match state.model.as_ref() {
        ModelStatus::Ready(analyzer) => analyzer,
        ModelStatus::Unavailable {
            error,
            expected_files,
        } => return unavailable(error, expected_files),
    };

    match analyzer.analyze(&req.question) {
        Ok(prediction) => {
            let outcome = Outcome::Result(ResultView::from_prediction(&prediction));
            Html(pages::index_page(&req.question, Some(&outcome))).into_response()
        }
        Err(qdiff_core::Error::EmptyQuestion) => {
            warn!("Rejected empty question");
            let outcome = Outcome::Warning(EMPTY_QUESTION_WARNING.to_string());
            Html(pages::index_page(&req.question, Some(&outcome))).into_response()
        }
        Err(e) => {
            error!("Analysis failed: {}", e);
            metrics::counter!("qdiff_errors_total", "type" => "pipeline").increment(1);
            let outcome = Outcome::Error(format!("Analysis failed: {e}"));
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(pages::index_page(&req.question, Some(&outcome))),
            )
                .into_response()
        }
    }
}

fn unavailable(error: &str, expected_files: &[String]) -> Response {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Html(pages::unavailable_page(error, expected_files)),
    )
        .into_response()
}

// ============================================================================
// JSON API
// ============================================================================

pub async fn api_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<ResultView>, AppError> {
    metrics::counter!("qdiff_requests_total", "endpoint" => "api").increment(1);

    let analyzer = match state.model.as_ref() {
        ModelStatus::Ready(analyzer) => analyzer,
        ModelStatus::Unavailable { error, .. } => {
            return Err(AppError::ModelUnavailable(error.clone()))
        }
    };

    let prediction = analyzer.analyze(&req.question)?;
    Ok(Json(ResultView::from_prediction(&prediction)))
}

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let loaded = state.is_model_loaded();
    let status = if loaded { "ok" } else { "degraded" };
    Json(serde_json::json!({
        "status": status,
        "model_loaded": loaded,
    }))
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    match &state.metrics_handle {
        Some(handle) => handle.render().into_response(),
        None => (StatusCode::NOT_FOUND, "Metrics recorder not installed").into_response(),
    }
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    EmptyQuestion,
    ModelUnavailable(String),
    Analysis(qdiff_core::Error),
}

impl From<qdiff_core::Error> for AppError {
    fn from(err: qdiff_core::Error) -> Self {
        match err {
            qdiff_core::Error::EmptyQuestion => AppError::EmptyQuestion,
            other => AppError::Analysis(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            AppError::EmptyQuestion => {
                warn!("Rejected empty question");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "empty_question",
                    EMPTY_QUESTION_WARNING.to_string(),
                )
            }
            AppError::ModelUnavailable(reason) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "model_unavailable",
                format!("Model artifacts are not loaded: {}", reason),
            ),
            AppError::Analysis(e) => {
                error!("Analysis failed: {}", e);
                metrics::counter!("qdiff_errors_total", "type" => "pipeline").increment(1);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "analysis_error",
                    e.to_string(),
                )
            }
        };

        let body = Json(serde_json::json!({
            "error": {
                "message": message,
                "type": error_type,
            }
        }));

        (status, body).into_response()
    }
}
