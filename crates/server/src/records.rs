//! CRUD endpoints of the dated record types.

use api_types::{Created, records::DateRangeQuery};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{ServerError, date_range, server::ServerState};

/// One module per record type with `list`, `create`, `update` and `remove`.
macro_rules! record_handlers {
    ($module:ident, $domain:ty, $input:ty, $add:ident, $update:ident, $delete:ident, $list:ident) => {
        pub mod $module {
            use super::*;

            pub async fn list(
                State(state): State<ServerState>,
                Query(query): Query<DateRangeQuery>,
            ) -> Result<Json<Vec<$domain>>, ServerError> {
                let range = date_range(&query)?;
                Ok(Json(state.engine.$list(&range).await?))
            }

            pub async fn create(
                State(state): State<ServerState>,
                Json(payload): Json<$input>,
            ) -> Result<(StatusCode, Json<Created>), ServerError> {
                let id = state.engine.$add(&payload).await?;
                Ok((StatusCode::CREATED, Json(Created { id })))
            }

            pub async fn update(
                State(state): State<ServerState>,
                Path(id): Path<Uuid>,
                Json(payload): Json<$input>,
            ) -> Result<Json<$domain>, ServerError> {
                Ok(Json(state.engine.$update(id, &payload).await?))
            }

            pub async fn remove(
                State(state): State<ServerState>,
                Path(id): Path<Uuid>,
            ) -> Result<StatusCode, ServerError> {
                state.engine.$delete(id).await?;
                Ok(StatusCode::NO_CONTENT)
            }
        }
    };
}

record_handlers!(
    operations,
    engine::MachineOperation,
    engine::MachineOperationInput,
    add_machine_operation,
    update_machine_operation,
    delete_machine_operation,
    list_machine_operations
);

record_handlers!(
    dumper_trips,
    engine::DumperTrip,
    engine::DumperTripInput,
    add_dumper_trip,
    update_dumper_trip,
    delete_dumper_trip,
    list_dumper_trips
);

record_handlers!(
    dumper_misc,
    engine::DumperMiscExpense,
    engine::DumperMiscExpenseInput,
    add_dumper_misc_expense,
    update_dumper_misc_expense,
    delete_dumper_misc_expense,
    list_dumper_misc_expenses
);

record_handlers!(
    blasting,
    engine::BlastingPurchase,
    engine::BlastingPurchaseInput,
    add_blasting_purchase,
    update_blasting_purchase,
    delete_blasting_purchase,
    list_blasting_purchases
);

record_handlers!(
    expenses,
    engine::Expense,
    engine::ExpenseInput,
    add_expense,
    update_expense,
    delete_expense,
    list_expenses
);

record_handlers!(
    salaries,
    engine::SalaryRecord,
    engine::SalaryInput,
    add_salary,
    update_salary,
    delete_salary,
    list_salaries
);
