//! Profit sharing endpoints. The partner split comes from the server state.

use axum::{
    Json,
    extract::{Path, State},
};
use engine::ProfitSharingRecord;

use crate::{ServerError, period, server::ServerState};

/// Compute the split of a finalised month and store it.
pub async fn calculate(
    State(state): State<ServerState>,
    Path((year, month)): Path<(i32, u32)>,
) -> Result<Json<ProfitSharingRecord>, ServerError> {
    let period = period(year, month)?;
    let result = state
        .engine
        .profit_sharing_for(period, &state.shares)
        .await?;
    Ok(Json(state.engine.save_profit_sharing(&result).await?))
}

pub async fn get(
    State(state): State<ServerState>,
    Path((year, month)): Path<(i32, u32)>,
) -> Result<Json<ProfitSharingRecord>, ServerError> {
    let period = period(year, month)?;
    Ok(Json(state.engine.profit_sharing(period).await?))
}
