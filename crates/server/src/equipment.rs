//! Equipment registry endpoints.

use api_types::Created;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use engine::{Dumper, Equipment, EquipmentInput};
use uuid::Uuid;

use crate::{ServerError, server::ServerState};

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Equipment>>, ServerError> {
    Ok(Json(state.engine.list_equipment().await?))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EquipmentInput>,
) -> Result<(StatusCode, Json<Created>), ServerError> {
    let id = state.engine.add_equipment(&payload).await?;
    Ok((StatusCode::CREATED, Json(Created { id })))
}

/// Deleting a dumper leaves its trips in place; reports list them as unattributed.
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_equipment(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Registered dumpers in report column order.
pub async fn dumpers(State(state): State<ServerState>) -> Result<Json<Vec<Dumper>>, ServerError> {
    Ok(Json(state.engine.list_registered_dumpers().await?))
}
