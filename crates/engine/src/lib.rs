//! Bookkeeping core for a crushing plant.
//!
//! The pure engines ([`aggregate_months`], [`reconcile_daily_production`],
//! [`reconcile_monthly_sales`], [`ExpenseSummary::summarize`] and
//! [`calculate_profit_sharing`]) work on plain values. [`Engine`] wraps them
//! around a sea-orm record store.

pub use aggregation::{
    CostBreakdown, Dumper, DumperRegistry, DumperTotals, EquipmentRef, MonthlyAggregation,
    MonthlyBucket, ProductionBreakdown, RecordKind, TransactionRecord, UnattributedRecord,
    YearlyBucket, aggregate_months,
};
pub use blasting::{BlastingPurchase, BlastingPurchaseInput};
pub use categories::{ExpenseCategory, ExpenseCategoryInput};
pub use dumper_misc::{DumperMiscExpense, DumperMiscExpenseInput};
pub use dumper_trips::{DumperTrip, DumperTripInput};
pub use equipment::{Equipment, EquipmentInput, EquipmentKind};
pub use error::EngineError;
pub use expenses::{Expense, ExpenseInput, ExpenseLedger};
pub use monthly_summaries::MonthlyProductionSummary;
pub use operations::{MachineKind, MachineOperation, MachineOperationInput};
pub use ops::{Engine, EngineBuilder};
pub use period::{DateRange, Period, PeriodFilter};
pub use production::{DailyProductionEntry, DailyProductionInput};
pub use profit::{Partner, ProfitShares, ProfitSharingResult, calculate_profit_sharing};
pub use profit_records::ProfitSharingRecord;
pub use reconciliation::{
    DEFAULT_CLAY_DUST_PERCENT, DailyReconciliation, LiveProduction, MonthlySalesInputs,
    MonthlySalesSnapshot, reconcile_daily_production, reconcile_monthly_sales,
};
pub use salaries::{SalaryInput, SalaryRecord};
pub use summary::ExpenseSummary;

mod aggregation;
mod blasting;
mod categories;
mod dumper_misc;
mod dumper_trips;
mod equipment;
mod error;
mod expenses;
mod monthly_summaries;
mod operations;
mod ops;
mod period;
mod production;
mod profit;
mod profit_records;
mod reconciliation;
mod salaries;
mod summary;
mod util;

type ResultEngine<T> = Result<T, EngineError>;
