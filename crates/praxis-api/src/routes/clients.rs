use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use praxis_core::models::client::Client;
use praxis_core::s3_keys;
use praxis_storage::objects;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_clients(State(state): State<AppState>) -> Result<Json<Vec<Client>>, ApiError> {
    let keys = objects::list_objects(&state.s3, &state.bucket, s3_keys::CLIENTS_PREFIX).await?;

    let mut clients = Vec::new();
    for key in &keys {
        let output = objects::get_object(&state.s3, &state.bucket, key).await?;
        let client: Client = serde_json::from_slice(&output.body)?;
        clients.push(client);
    }

    Ok(Json(clients))
}

pub async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Client>, ApiError> {
    let key = s3_keys::client(id);
    let output = objects::get_object(&state.s3, &state.bucket, &key).await?;
    let client: Client = serde_json::from_slice(&output.body)?;
    Ok(Json(client))
}

pub async fn create_client(
    State(state): State<AppState>,
    Json(client): Json<Client>,
) -> Result<Json<Client>, ApiError> {
    let key = s3_keys::client(client.id);
    let body = serde_json::to_vec(&client)?;
    objects::put_object(&state.s3, &state.bucket, &key, body, Some("application/json")).await?;
    Ok(Json(client))
}

pub async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(mut client): Json<Client>,
) -> Result<Json<Client>, ApiError> {
    client.id = id;
    let key = s3_keys::client(id);
    let body = serde_json::to_vec(&client)?;
    objects::put_object(&state.s3, &state.bucket, &key, body, Some("application/json")).await?;
    Ok(Json(client))
}

pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, ApiError> {
    let key = s3_keys::client(id);
    objects::delete_object(&state.s3, &state.bucket, &key).await?;
    Ok(Json(()))
}
