//! Quiz endpoint handler (/api/quiz)

use crate::backends::SharedGenerator;
use crate::error::{ApiError, ApiResult};
use crate::extract;
use crate::models::QuizRequest;
use crate::prompt;
use axum::{Extension, Json};
use serde_json::Value;

/// Generate multiple-choice quiz questions for the topic.
///
/// The model's JSON is returned verbatim after span extraction and the
/// `questions`-array check; per-question shape is trusted to the prompt.
pub async fn quiz_handler(
    Extension(generator): Extension<SharedGenerator>,
    Json(req): Json<QuizRequest>,
) -> ApiResult<Json<Value>> {
    if req.topic.trim().is_empty() {
        return Err(ApiError::Validation("topic must not be empty".into()));
    }
    if req.num_questions == 0 {
        return Err(ApiError::Validation(
            "num_questions must be positive".into(),
        ));
    }

    tracing::debug!(
        "Quiz request: topic={:?} num_questions={}",
        req.topic,
        req.num_questions
    );

    let prompt = prompt::quiz_prompt(&req.topic, req.num_questions);
    let text = generator.generate(&prompt).await?;

    let data = extract::parse_quiz(text.trim())?;

    Ok(Json(data))
}
