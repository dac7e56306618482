use axum::{
    Router,
    routing::{delete, get, post, put},
};
use engine::{DEFAULT_CLAY_DUST_PERCENT, Engine, ProfitShares};

use std::sync::Arc;

use crate::{categories, equipment, production, profit, records, reports};

/// Fallbacks applied when a request leaves a percentage out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProductionDefaults {
    pub clay_dust_percent: f64,
    pub allowance_percent: f64,
}

impl Default for ProductionDefaults {
    fn default() -> Self {
        Self {
            clay_dust_percent: DEFAULT_CLAY_DUST_PERCENT,
            allowance_percent: 0.0,
        }
    }
}

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
    pub shares: Arc<ProfitShares>,
    pub defaults: ProductionDefaults,
}

impl ServerState {
    pub fn new(engine: Engine, shares: ProfitShares, defaults: ProductionDefaults) -> Self {
        Self {
            engine: Arc::new(engine),
            shares: Arc::new(shares),
            defaults,
        }
    }
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/equipment", get(equipment::list).post(equipment::create))
        .route("/equipment/dumpers", get(equipment::dumpers))
        .route("/equipment/{id}", delete(equipment::remove))
        .route("/categories", get(categories::list).post(categories::create))
        .route("/categories/{id}", delete(categories::remove))
        .route(
            "/operations",
            get(records::operations::list).post(records::operations::create),
        )
        .route(
            "/operations/{id}",
            put(records::operations::update).delete(records::operations::remove),
        )
        .route(
            "/dumper-trips",
            get(records::dumper_trips::list).post(records::dumper_trips::create),
        )
        .route(
            "/dumper-trips/{id}",
            put(records::dumper_trips::update).delete(records::dumper_trips::remove),
        )
        .route(
            "/dumper-misc",
            get(records::dumper_misc::list).post(records::dumper_misc::create),
        )
        .route(
            "/dumper-misc/{id}",
            put(records::dumper_misc::update).delete(records::dumper_misc::remove),
        )
        .route(
            "/blasting",
            get(records::blasting::list).post(records::blasting::create),
        )
        .route(
            "/blasting/{id}",
            put(records::blasting::update).delete(records::blasting::remove),
        )
        .route(
            "/expenses",
            get(records::expenses::list).post(records::expenses::create),
        )
        .route(
            "/expenses/{id}",
            put(records::expenses::update).delete(records::expenses::remove),
        )
        .route(
            "/salaries",
            get(records::salaries::list).post(records::salaries::create),
        )
        .route(
            "/salaries/{id}",
            put(records::salaries::update).delete(records::salaries::remove),
        )
        .route("/production", get(production::list).post(production::create))
        .route(
            "/production/{id}",
            put(production::update).delete(production::remove),
        )
        .route("/production/reconcile", post(production::reconcile))
        .route("/production/live/{year}/{month}", get(production::live))
        .route("/monthly-summaries", get(production::list_summaries))
        .route(
            "/monthly-summaries/{year}/{month}",
            get(production::summary).put(production::finalize),
        )
        .route("/summary/monthly", get(reports::monthly))
        .route("/summary/yearly/{year}", get(reports::yearly))
        .route(
            "/profit-sharing/{year}/{month}",
            get(profit::get).post(profit::calculate),
        )
        .with_state(state)
}

pub async fn run_with_listener(
    state: ServerState,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(state)).await
}
