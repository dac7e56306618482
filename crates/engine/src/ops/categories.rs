use sea_orm::{ConnectionTrait, QueryFilter, QueryOrder, TransactionTrait, prelude::*};
use uuid::Uuid;

use crate::{EngineError, ExpenseCategory, ExpenseCategoryInput, ResultEngine, categories};

use super::{Engine, delete_existing, with_tx};

impl Engine {
    /// Add an expense category. Codes are unique.
    pub async fn add_category(&self, input: &ExpenseCategoryInput) -> ResultEngine<Uuid> {
        let id = Uuid::new_v4();
        let active = input.to_active(id)?;
        let code = input.category_code.trim().to_string();
        with_tx!(self, |db_tx| {
            if Self::category_exists(&db_tx, &code).await? {
                return Err(EngineError::ExistingKey(code));
            }
            active.insert(&db_tx).await?;
            Ok(id)
        })
    }

    pub async fn list_categories(&self) -> ResultEngine<Vec<ExpenseCategory>> {
        Ok(categories::Entity::find()
            .order_by_asc(categories::Column::CategoryCode)
            .all(&self.database)
            .await?
            .into_iter()
            .map(ExpenseCategory::from)
            .collect())
    }

    pub async fn delete_category(&self, id: Uuid) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            delete_existing::<categories::Entity>(&db_tx, id, "category").await
        })
    }

    pub(super) async fn category_exists(
        db: &impl ConnectionTrait,
        code: &str,
    ) -> ResultEngine<bool> {
        let found = categories::Entity::find()
            .filter(categories::Column::CategoryCode.eq(code))
            .one(db)
            .await?;
        Ok(found.is_some())
    }
}
