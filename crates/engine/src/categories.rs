//! Expense category reference list.

use sea_orm::entity::{ActiveValue, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{ResultEngine, util::normalize_required_text};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseCategory {
    pub id: Uuid,
    pub category_code: String,
    pub category_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseCategoryInput {
    pub category_code: String,
    pub category_name: String,
}

impl ExpenseCategoryInput {
    pub(crate) fn to_active(&self, id: Uuid) -> ResultEngine<ActiveModel> {
        Ok(ActiveModel {
            id: ActiveValue::Set(id),
            category_code: ActiveValue::Set(normalize_required_text(
                "category_code",
                &self.category_code,
            )?),
            category_name: ActiveValue::Set(normalize_required_text(
                "category_name",
                &self.category_name,
            )?),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "expense_categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub category_code: String,
    pub category_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ExpenseCategory {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            category_code: model.category_code,
            category_name: model.category_name,
        }
    }
}
