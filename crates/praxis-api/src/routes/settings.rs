use axum::Json;
use axum::extract::State;

use praxis_core::models::practice::PracticeSettings;
use praxis_core::s3_keys;
use praxis_storage::error::StorageError;
use praxis_storage::{objects, state as storage_state};

use crate::error::ApiError;
use crate::state::AppState;

/// Fetch the practice letterhead settings; defaults until first saved.
pub async fn get_practice_settings(
    State(state): State<AppState>,
) -> Result<Json<PracticeSettings>, ApiError> {
    match objects::get_object(&state.s3, &state.bucket, s3_keys::PRACTICE_SETTINGS).await {
        Ok(output) => {
            let settings: PracticeSettings = serde_json::from_slice(&output.body)?;
            Ok(Json(settings))
        }
        Err(StorageError::NotFound { .. }) => Ok(Json(PracticeSettings::default())),
        Err(e) => Err(e.into()),
    }
}

pub async fn update_practice_settings(
    State(state): State<AppState>,
    Json(settings): Json<PracticeSettings>,
) -> Result<Json<PracticeSettings>, ApiError> {
    storage_state::save_state(&state.s3, &state.bucket, s3_keys::PRACTICE_SETTINGS, &settings)
        .await?;
    Ok(Json(settings))
}
