use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{LookbackWindow, RepositoryRecord, ReportRequest, ReportResponse};
use crate::report::ReportWriter;
use crate::search::RepositorySource;
use axum::{Json, extract::State};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

pub struct AppState {
    pub config: Config,
    pub search: Arc<dyn RepositorySource>,
    pub reports: Arc<dyn ReportWriter>,
}

/// Search trending repositories for a topic and summarize them as a report
#[utoipa::path(
    post,
    path = "/summary",
    request_body = ReportRequest,
    responses(
        (status = 200, description = "Repositories and generated report", body = ReportResponse),
        (status = 500, description = "Invalid days, search failure or generation failure")
    ),
    tag = "summary"
)]
pub async fn create_summary(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ReportRequest>,
) -> Result<Json<ReportResponse>> {
    // Coerce before any outbound call
    let days = request
        .days
        .as_ref()
        .ok_or_else(|| Error::InputCoercion {
            msg: "days is required".to_string(),
        })?
        .to_days()?;

    let window = LookbackWindow::from_days(days).map(LookbackWindow::label);
    tracing::info!(query = %request.query, days, window, "Generating trend report");

    let repos = state
        .search
        .fetch_trending_repositories(&request.query, days)
        .await?;

    let summary = state.reports.generate_report(&repos, &request.query).await?;

    tracing::info!(repos = repos.len(), summary_len = summary.len(), "Trend report ready");

    Ok(Json(ReportResponse { repos, summary }))
}

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(RepositoryRecord, ReportRequest, ReportResponse)
    ),
    tags(
        (name = "summary", description = "Trending repository reports")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(create_summary))
        .with_state(state)
}
