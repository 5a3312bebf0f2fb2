use std::time::Duration;

use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use praxis_core::models::clinician::Clinician;
use praxis_core::s3_keys;
use praxis_storage::objects;

use crate::error::ApiError;
use crate::state::AppState;

const SIGNATURE_UPLOAD_EXPIRY: Duration = Duration::from_secs(900);

pub async fn list_clinicians(
    State(state): State<AppState>,
) -> Result<Json<Vec<Clinician>>, ApiError> {
    let keys =
        objects::list_objects(&state.s3, &state.bucket, s3_keys::CLINICIANS_PREFIX).await?;

    let mut clinicians = Vec::new();
    for key in &keys {
        let output = objects::get_object(&state.s3, &state.bucket, key).await?;
        let clinician: Clinician = serde_json::from_slice(&output.body)?;
        clinicians.push(clinician);
    }

    Ok(Json(clinicians))
}

pub async fn get_clinician(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Clinician>, ApiError> {
    let key = s3_keys::clinician(id);
    let output = objects::get_object(&state.s3, &state.bucket, &key).await?;
    let clinician: Clinician = serde_json::from_slice(&output.body)?;
    Ok(Json(clinician))
}

pub async fn create_clinician(
    State(state): State<AppState>,
    Json(clinician): Json<Clinician>,
) -> Result<Json<Clinician>, ApiError> {
    let key = s3_keys::clinician(clinician.id);
    let body = serde_json::to_vec(&clinician)?;
    objects::put_object(&state.s3, &state.bucket, &key, body, Some("application/json")).await?;
    Ok(Json(clinician))
}

pub async fn update_clinician(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(mut clinician): Json<Clinician>,
) -> Result<Json<Clinician>, ApiError> {
    clinician.id = id;
    let key = s3_keys::clinician(id);
    let body = serde_json::to_vec(&clinician)?;
    objects::put_object(&state.s3, &state.bucket, &key, body, Some("application/json")).await?;
    Ok(Json(clinician))
}

#[derive(Deserialize)]
pub struct SignatureUploadRequest {
    pub filename: String,
    pub content_type: Option<String>,
}

#[derive(Serialize)]
pub struct SignatureUploadResponse {
    pub upload_url: String,
    pub s3_key: String,
}

/// Presign a PUT URL for uploading the clinician's signature image. The
/// caller stores the returned key on the clinician record afterwards.
pub async fn presign_signature_upload(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SignatureUploadRequest>,
) -> Result<Json<SignatureUploadResponse>, ApiError> {
    let key = s3_keys::signature(id, &req.filename);
    let upload_url = objects::presign_put(
        &state.s3,
        &state.bucket,
        &key,
        req.content_type.as_deref(),
        SIGNATURE_UPLOAD_EXPIRY,
    )
    .await?;

    Ok(Json(SignatureUploadResponse {
        upload_url,
        s3_key: key,
    }))
}
