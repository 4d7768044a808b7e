//! Explain endpoint handler (/api/explain)

use crate::backends::SharedGenerator;
use crate::error::{ApiError, ApiResult};
use crate::models::{ExplainRequest, ExplainResponse};
use crate::prompt;
use axum::{Extension, Json};

/// Generate a clear explanation for the given topic and level.
pub async fn explain_handler(
    Extension(generator): Extension<SharedGenerator>,
    Json(req): Json<ExplainRequest>,
) -> ApiResult<Json<ExplainResponse>> {
    if req.topic.trim().is_empty() {
        return Err(ApiError::Validation("topic must not be empty".into()));
    }

    tracing::debug!("Explain request: topic={:?} level={:?}", req.topic, req.level);

    let prompt = prompt::explain_prompt(&req.topic, &req.level);
    let text = generator.generate(&prompt).await?;

    let explanation = text.trim();
    if explanation.is_empty() {
        return Err(ApiError::EmptyCompletion);
    }

    Ok(Json(ExplainResponse {
        explanation: explanation.to_string(),
    }))
}
