use serde::{Deserialize, Serialize};

/// Request body for `POST /api/explain`
#[derive(Debug, Clone, Deserialize)]
pub struct ExplainRequest {
    pub topic: String,
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "beginner".to_string()
}

/// Request body for `POST /api/quiz`
#[derive(Debug, Clone, Deserialize)]
pub struct QuizRequest {
    pub topic: String,
    #[serde(default = "default_num_questions")]
    pub num_questions: u32,
}

fn default_num_questions() -> u32 {
    5
}

/// Response body for `POST /api/explain`
#[derive(Debug, Clone, Serialize)]
pub struct ExplainResponse {
    pub explanation: String,
}

/// One multiple-choice question as requested from the model.
///
/// The quiz endpoint returns the model's parsed JSON verbatim and only checks
/// the top-level `questions` array, so this shape is what the prompt asks for
/// rather than what the handler enforces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
    pub explanation: String,
}
