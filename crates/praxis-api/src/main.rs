use std::env;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{delete, get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod error;
mod middleware;
mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let bucket = env::var("PRAXIS_BUCKET").unwrap_or_else(|_| "praxis".to_string());
    let model_id = env::var("PRAXIS_MODEL_ID")
        .unwrap_or_else(|_| "us.anthropic.claude-sonnet-4-20250514-v1:0".to_string());

    let s3 = praxis_storage::client::build_client().await;
    let bedrock = praxis_bedrock::build_client().await;

    let state = AppState {
        s3,
        bucket,
        bedrock,
        model_id,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        // Health (no auth)
        .route("/health", get(routes::health::health_check))
        // Practice records
        .route("/clients", get(routes::clients::list_clients))
        .route("/clients", post(routes::clients::create_client))
        .route("/clients/{id}", get(routes::clients::get_client))
        .route("/clients/{id}", put(routes::clients::update_client))
        .route("/clients/{id}", delete(routes::clients::delete_client))
        .route("/clinicians", get(routes::clinicians::list_clinicians))
        .route("/clinicians", post(routes::clinicians::create_clinician))
        .route("/clinicians/{id}", get(routes::clinicians::get_clinician))
        .route("/clinicians/{id}", put(routes::clinicians::update_clinician))
        .route(
            "/clinicians/{id}/signature-upload",
            post(routes::clinicians::presign_signature_upload),
        )
        .route(
            "/settings/practice",
            get(routes::settings::get_practice_settings),
        )
        .route(
            "/settings/practice",
            put(routes::settings::update_practice_settings),
        )
        // Assessment templates
        .route("/templates", get(routes::templates::list_templates))
        .route("/templates", post(routes::templates::create_template))
        .route("/templates/{id}", get(routes::templates::get_template))
        .route("/templates/{id}", put(routes::templates::update_template))
        .route(
            "/templates/{id}",
            delete(routes::templates::delete_template),
        )
        // Assignments and responses
        .route("/assignments", get(routes::assignments::list_assignments))
        .route(
            "/assignments",
            post(routes::assignments::create_assignment),
        )
        .route(
            "/assignments/{id}",
            get(routes::assignments::get_assignment),
        )
        .route(
            "/assignments/{id}/complete",
            post(routes::assignments::complete_assignment),
        )
        .route(
            "/assignments/{id}/responses",
            get(routes::assignments::get_responses),
        )
        .route(
            "/assignments/{id}/responses",
            put(routes::assignments::put_responses),
        )
        .route(
            "/assignments/{id}/answers",
            get(routes::assignments::get_answers),
        )
        // Report lifecycle
        .route("/assignments/{id}/report", get(routes::reports::get_report))
        .route("/assignments/{id}/report", put(routes::reports::save_draft))
        .route(
            "/assignments/{id}/report/generate",
            post(routes::reports::generate_report),
        )
        .route(
            "/assignments/{id}/report/finalize",
            post(routes::reports::finalize_report),
        )
        .route(
            "/assignments/{id}/report/unfinalize",
            post(routes::reports::unfinalize_report),
        )
        .route(
            "/assignments/{id}/report/export",
            get(routes::reports::export_report),
        )
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state);

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
