//! Monthly salary entries.

use sea_orm::entity::{ActiveValue, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    EngineError, ResultEngine,
    aggregation::{RecordKind, TransactionRecord},
    period::Period,
    util::{ensure_non_negative, normalize_optional_text, normalize_required_text},
};

/// A salary paid for a month. It counts on day 1 of that month.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SalaryRecord {
    pub id: Uuid,
    pub employee_name: String,
    pub designation: Option<String>,
    pub period: Period,
    pub amount: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SalaryInput {
    pub employee_name: String,
    #[serde(default)]
    pub designation: Option<String>,
    pub period: Period,
    pub amount: f64,
}

impl SalaryInput {
    pub(crate) fn to_active(&self, id: Uuid) -> ResultEngine<ActiveModel> {
        ensure_non_negative("amount", self.amount)?;

        Ok(ActiveModel {
            id: ActiveValue::Set(id),
            employee_name: ActiveValue::Set(normalize_required_text(
                "employee_name",
                &self.employee_name,
            )?),
            designation: ActiveValue::Set(normalize_optional_text(self.designation.as_deref())),
            salary_year: ActiveValue::Set(self.period.year()),
            salary_month: ActiveValue::Set(self.period.month() as i32),
            amount: ActiveValue::Set(self.amount),
        })
    }
}

impl From<&SalaryRecord> for TransactionRecord {
    fn from(salary: &SalaryRecord) -> Self {
        Self {
            id: salary.id,
            date: Some(salary.period.first_day()),
            kind: RecordKind::Salary {
                amount: salary.amount,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "salaries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub employee_name: String,
    pub designation: Option<String>,
    pub salary_year: i32,
    pub salary_month: i32,
    pub amount: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for SalaryRecord {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let month = u32::try_from(model.salary_month)
            .map_err(|_| EngineError::validation("salary_month", "stored month is negative"))?;
        Ok(Self {
            id: model.id,
            employee_name: model.employee_name,
            designation: model.designation,
            period: Period::new(model.salary_year, month)?,
            amount: model.amount,
        })
    }
}
