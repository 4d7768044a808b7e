//! Prompt construction
//!
//! Deterministic instruction strings sent to the upstream model. Both
//! endpoints build their prompt here so the wording stays in one place.

/// Build the instruction for a topic explanation.
pub fn explain_prompt(topic: &str, level: &str) -> String {
    format!(
        "Explain the topic '{}' at a {} level. \
        Be concise, educational, and structured using Markdown for clarity. \
        Include examples if relevant.",
        topic, level
    )
}

/// Build the instruction for quiz generation.
///
/// Asks for exactly `num_questions` multiple-choice questions, each with 4
/// options, and a JSON object under a top-level `questions` key so the
/// response extractor has a stable shape to look for.
pub fn quiz_prompt(topic: &str, num_questions: u32) -> String {
    format!(
        "Create {} multiple-choice quiz questions on '{}'. \
        For each question, include exactly 4 options, specify the correct answer, \
        and provide a one-sentence explanation. \
        Return valid JSON in this format:\n\n\
        {{\"questions\":[{{\"question\":...,\"options\":[],\"answer\":...,\"explanation\":...}}]}}",
        num_questions, topic
    )
}
