use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    analyze_skip_handler, audio_file_handler, get_drug_handler, health_handler,
    languages_handler, list_drugs_handler, root_handler, synthesize_handler, transcribe_handler,
    translate_handler,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState, max_upload_bytes: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/analyze_skip", post(analyze_skip_handler))
        .route("/voice/transcribe", post(transcribe_handler))
        .route("/voice/languages", get(languages_handler))
        .route("/voice/translate", post(translate_handler))
        .route("/voice/synthesize", post(synthesize_handler))
        .route("/voice/audio/{filename}", get(audio_file_handler))
        .route("/drugs", get(list_drugs_handler))
        .route("/drugs/{drug_name}", get(get_drug_handler))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
