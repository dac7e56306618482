//! Daily production entries and monthly reconciliation.

use api_types::{
    Created,
    production::{FinalizeRequest, ReconcileRequest},
    records::DateRangeQuery,
    summary::YearQuery,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use engine::{
    DailyProductionEntry, DailyProductionInput, DailyReconciliation, LiveProduction,
    MonthlyProductionSummary, MonthlySalesInputs, reconcile_daily_production,
};
use uuid::Uuid;

use crate::{ServerError, date_range, period, server::ServerState};

/// Fill a missing clay/dust percentage with the configured default.
fn with_default_percent(state: &ServerState, mut input: DailyProductionInput) -> DailyProductionInput {
    input.clay_dust_percent = input
        .clay_dust_percent
        .or(Some(state.defaults.clay_dust_percent));
    input
}

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<DateRangeQuery>,
) -> Result<Json<Vec<DailyProductionEntry>>, ServerError> {
    let range = date_range(&query)?;
    Ok(Json(state.engine.list_daily_production(&range).await?))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DailyProductionInput>,
) -> Result<(StatusCode, Json<Created>), ServerError> {
    let input = with_default_percent(&state, payload);
    let id = state.engine.add_daily_production(&input).await?;
    Ok((StatusCode::CREATED, Json(Created { id })))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<DailyProductionInput>,
) -> Result<Json<DailyProductionEntry>, ServerError> {
    let input = with_default_percent(&state, payload);
    Ok(Json(state.engine.update_daily_production(id, &input).await?))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_daily_production(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn reconcile(
    State(state): State<ServerState>,
    Json(payload): Json<ReconcileRequest>,
) -> Result<Json<DailyReconciliation>, ServerError> {
    let percent = payload
        .clay_dust_percent
        .unwrap_or(state.defaults.clay_dust_percent);
    Ok(Json(reconcile_daily_production(
        payload.gravel_cft,
        Some(percent),
    )?))
}

pub async fn live(
    State(state): State<ServerState>,
    Path((year, month)): Path<(i32, u32)>,
) -> Result<Json<LiveProduction>, ServerError> {
    let period = period(year, month)?;
    Ok(Json(state.engine.live_production(period).await?))
}

pub async fn list_summaries(
    State(state): State<ServerState>,
    Query(query): Query<YearQuery>,
) -> Result<Json<Vec<MonthlyProductionSummary>>, ServerError> {
    Ok(Json(state.engine.list_monthly_summaries(query.year).await?))
}

pub async fn summary(
    State(state): State<ServerState>,
    Path((year, month)): Path<(i32, u32)>,
) -> Result<Json<MonthlyProductionSummary>, ServerError> {
    let period = period(year, month)?;
    Ok(Json(state.engine.monthly_summary(period).await?))
}

/// Reconcile and store a month. Calling it again overwrites the month.
pub async fn finalize(
    State(state): State<ServerState>,
    Path((year, month)): Path<(i32, u32)>,
    Json(payload): Json<FinalizeRequest>,
) -> Result<Json<MonthlyProductionSummary>, ServerError> {
    let period = period(year, month)?;
    let inputs = MonthlySalesInputs {
        sold_at_site_cft: payload.sold_at_site_cft,
        sold_at_site_amount: payload.sold_at_site_amount,
        approx_per_cft_cost: payload.approx_per_cft_cost,
        allowance_percent: payload
            .allowance_percent
            .unwrap_or(state.defaults.allowance_percent),
    };
    Ok(Json(state.engine.finalize_month(period, &inputs).await?))
}
