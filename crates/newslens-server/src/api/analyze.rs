use axum::{
    extract::{Path, State},
    Extension, Json,
};
use newslens_analysis::{ArticleSource, ComparativeReport};

use crate::middleware::RequestId;

use super::{ApiError, AppState};

/// Fetch and compare the latest coverage of one company.
///
/// The report is returned bare, in the published JSON shape, rather than in
/// the `data`/`meta` envelope. A failing feed still yields a 200 with the
/// empty-batch report.
pub(super) async fn analyze_company<S>(
    State(state): State<AppState<S>>,
    Extension(req_id): Extension<RequestId>,
    Path(company): Path<String>,
) -> Result<Json<ComparativeReport>, ApiError>
where
    S: ArticleSource + Send + Sync + 'static,
{
    let company = company.trim();
    if company.is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "company name must not be blank",
        ));
    }

    tracing::info!(company, request_id = %req_id.0, "analyzing company coverage");
    let report = state
        .analyzer
        .analyze_company(state.source.as_ref(), company)
        .await;

    Ok(Json(report))
}
