use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod backends;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod prompt;

pub use backends::{SharedGenerator, TextGenerator};
pub use config::Config;

/// Build the application router with an injected upstream generator.
///
/// The generator is the only shared state besides configuration; tests pass a
/// stub here instead of the real OpenAI backend.
pub fn create_router(generator: SharedGenerator) -> Router {
    // Development posture: every origin, method and header is allowed.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root_handler))
        .route("/api/explain", post(handlers::explain_handler))
        .route("/api/quiz", post(handlers::quiz_handler))
        .layer(Extension(generator))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
