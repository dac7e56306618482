//! Expense category endpoints.

use api_types::Created;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use engine::{ExpenseCategory, ExpenseCategoryInput};
use uuid::Uuid;

use crate::{ServerError, server::ServerState};

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<ExpenseCategory>>, ServerError> {
    Ok(Json(state.engine.list_categories().await?))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ExpenseCategoryInput>,
) -> Result<(StatusCode, Json<Created>), ServerError> {
    let id = state.engine.add_category(&payload).await?;
    Ok((StatusCode::CREATED, Json(Created { id })))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_category(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
