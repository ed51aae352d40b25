use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::catalog::ProjectId;
use super::pricing::PricingInput;
use super::quality::ComparisonError;
use super::repository::{Project, ProjectRepository, RepositoryError};
use super::selection::SelectionError;
use super::service::{QuoteService, QuoteServiceError};

/// Router builder exposing HTTP endpoints for project hand-over, pricing,
/// and quality comparison.
pub fn quote_router<R>(service: Arc<QuoteService<R>>) -> Router
where
    R: ProjectRepository + 'static,
{
    Router::new()
        .route("/api/v1/projects", post(register_handler::<R>))
        .route("/api/v1/projects/:project_id", get(status_handler::<R>))
        .route(
            "/api/v1/projects/:project_id/selection",
            get(selection_handler::<R>),
        )
        .route(
            "/api/v1/projects/:project_id/pricing",
            post(pricing_handler::<R>),
        )
        .route(
            "/api/v1/projects/:project_id/comparison",
            post(comparison_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn register_handler<R>(
    State(service): State<Arc<QuoteService<R>>>,
    axum::Json(project): axum::Json<Project>,
) -> Response
where
    R: ProjectRepository + 'static,
{
    match service.register(project) {
        Ok(record) => (StatusCode::ACCEPTED, axum::Json(record.status_view())).into_response(),
        Err(QuoteServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({ "error": "project already exists" });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn status_handler<R>(
    State(service): State<Arc<QuoteService<R>>>,
    Path(project_id): Path<String>,
) -> Response
where
    R: ProjectRepository + 'static,
{
    let id = ProjectId(project_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn selection_handler<R>(
    State(service): State<Arc<QuoteService<R>>>,
    Path(project_id): Path<String>,
) -> Response
where
    R: ProjectRepository + 'static,
{
    let id = ProjectId(project_id);
    match service.resolved_products(&id) {
        Ok(resolution) => (StatusCode::OK, axum::Json(resolution)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn pricing_handler<R>(
    State(service): State<Arc<QuoteService<R>>>,
    Path(project_id): Path<String>,
    axum::Json(input): axum::Json<PricingInput>,
) -> Response
where
    R: ProjectRepository + 'static,
{
    let id = ProjectId(project_id);
    match service.price(&id, input) {
        Ok(data) => (StatusCode::OK, axum::Json(data)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn comparison_handler<R>(
    State(service): State<Arc<QuoteService<R>>>,
    Path(project_id): Path<String>,
) -> Response
where
    R: ProjectRepository + 'static,
{
    let id = ProjectId(project_id);
    match service.compare(&id) {
        Ok(comparison) => (StatusCode::OK, axum::Json(comparison)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: QuoteServiceError) -> Response {
    match error {
        QuoteServiceError::Selection(SelectionError::ShapeMismatch { .. })
        | QuoteServiceError::Comparison(ComparisonError::EmptyInput) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        QuoteServiceError::Repository(RepositoryError::NotFound) => {
            let payload = json!({ "error": "project not found" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        other => internal_error(other),
    }
}

fn internal_error(error: QuoteServiceError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
