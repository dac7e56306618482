use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::{DateRange, EngineError, Period};

pub use server::{ProductionDefaults, ServerState, router, run_with_listener};

mod categories;
mod equipment;
mod production;
mod profit;
mod records;
mod reports;
mod server;

pub mod types {
    pub use api_types::{Created, ErrorBody};

    pub mod records {
        pub use api_types::records::DateRangeQuery;
    }

    pub mod summary {
        pub use api_types::summary::{MonthlySummaryQuery, YearQuery};

        pub use crate::reports::{MonthlyReport, MonthlySummaryResponse, YearlyReport};
    }

    pub mod production {
        pub use api_types::production::{FinalizeRequest, ReconcileRequest};
    }
}

pub enum ServerError {
    Engine(EngineError),
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        EngineError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        EngineError::ExistingKey(_) => StatusCode::CONFLICT,
        EngineError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let ServerError::Engine(err) = self;
        let (status, error) = (status_for_engine_error(&err), message_for_engine_error(err));

        (status, Json(types::ErrorBody { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

fn date_range(query: &types::records::DateRangeQuery) -> Result<DateRange, ServerError> {
    Ok(DateRange::new(query.start, query.end)?)
}

fn period(year: i32, month: u32) -> Result<Period, ServerError> {
    Ok(Period::new(year, month)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::DbErr;

    #[test]
    fn engine_not_found_maps_to_404() {
        let res = ServerError::from(EngineError::KeyNotFound("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn engine_conflict_maps_to_409() {
        let res = ServerError::from(EngineError::ExistingKey("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn engine_validation_maps_to_422() {
        let err = EngineError::Validation {
            field: "gravel_cft",
            reason: "must be > 0".to_string(),
        };
        let res = ServerError::from(err).into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn database_errors_are_hidden() {
        let err = EngineError::Database(DbErr::Custom("disk on fire".to_string()));
        assert_eq!(message_for_engine_error(err), "internal server error");
    }
}
