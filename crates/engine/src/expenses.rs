//! Langar (site kitchen), plant and misc expenses.
//!
//! All three share one table, discriminated by `ledger`. Entries may carry
//! an expense category code for labelling.

use chrono::NaiveDate;
use sea_orm::entity::{ActiveValue, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    EngineError, ResultEngine,
    aggregation::{RecordKind, TransactionRecord},
    util::{ensure_non_negative, normalize_optional_text},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseLedger {
    Langar,
    Plant,
    Misc,
}

impl ExpenseLedger {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Langar => "langar",
            Self::Plant => "plant",
            Self::Misc => "misc",
        }
    }
}

impl TryFrom<&str> for ExpenseLedger {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "langar" => Ok(Self::Langar),
            "plant" => Ok(Self::Plant),
            "misc" => Ok(Self::Misc),
            other => Err(EngineError::validation(
                "ledger",
                format!("invalid expense ledger: {other}"),
            )),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub ledger: ExpenseLedger,
    pub expense_date: NaiveDate,
    pub category_code: Option<String>,
    pub description: Option<String>,
    pub amount: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExpenseInput {
    pub ledger: ExpenseLedger,
    pub expense_date: NaiveDate,
    #[serde(default)]
    pub category_code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub amount: f64,
}

impl ExpenseInput {
    pub(crate) fn category_code(&self) -> Option<String> {
        normalize_optional_text(self.category_code.as_deref())
    }

    pub(crate) fn to_active(&self, id: Uuid) -> ResultEngine<ActiveModel> {
        ensure_non_negative("amount", self.amount)?;

        Ok(ActiveModel {
            id: ActiveValue::Set(id),
            ledger: ActiveValue::Set(self.ledger.as_str().to_string()),
            expense_date: ActiveValue::Set(self.expense_date),
            category_code: ActiveValue::Set(self.category_code()),
            description: ActiveValue::Set(normalize_optional_text(self.description.as_deref())),
            amount: ActiveValue::Set(self.amount),
        })
    }
}

impl From<&Expense> for TransactionRecord {
    fn from(expense: &Expense) -> Self {
        let amount = expense.amount;
        let kind = match expense.ledger {
            ExpenseLedger::Langar => RecordKind::Langar { amount },
            ExpenseLedger::Plant => RecordKind::PlantExpense { amount },
            ExpenseLedger::Misc => RecordKind::MiscExpense { amount },
        };
        Self {
            id: expense.id,
            date: Some(expense.expense_date),
            kind,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub ledger: String,
    pub expense_date: NaiveDate,
    pub category_code: Option<String>,
    pub description: Option<String>,
    pub amount: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Expense {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            ledger: ExpenseLedger::try_from(model.ledger.as_str())?,
            expense_date: model.expense_date,
            category_code: model.category_code,
            description: model.description,
            amount: model.amount,
        })
    }
}
