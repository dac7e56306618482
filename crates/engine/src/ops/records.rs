//! Add/update/delete/list for every dated record type.

use sea_orm::{ConnectionTrait, QueryFilter, QueryOrder, TransactionTrait, prelude::*};
use uuid::Uuid;

use crate::{
    BlastingPurchase, BlastingPurchaseInput, DailyProductionEntry, DailyProductionInput,
    DateRange, DumperMiscExpense, DumperMiscExpenseInput, DumperTrip, DumperTripInput,
    EngineError, Expense, ExpenseInput, MachineOperation, MachineOperationInput, ResultEngine,
    SalaryInput, SalaryRecord, blasting, dumper_misc, dumper_trips, expenses, operations,
    production, salaries,
};

use super::{Engine, delete_existing, require, with_tx};

/// Generate the four lifecycle operations of a record table keyed by a date column.
macro_rules! record_ops {
    (
        $entity:ident, $domain:ty, $input:ty, $date:ident, $label:literal,
        add: $add:ident, update: $update:ident, delete: $delete:ident, list: $list:ident $(,)?
    ) => {
        impl Engine {
            #[doc = concat!("Validate and store a new ", $label, ".")]
            pub async fn $add(&self, input: &$input) -> ResultEngine<Uuid> {
                let id = Uuid::new_v4();
                let active = input.to_active(id)?;
                with_tx!(self, |db_tx| {
                    active.insert(&db_tx).await?;
                    Ok(id)
                })
            }

            #[doc = concat!("Replace every editable field of a ", $label, ".")]
            pub async fn $update(&self, id: Uuid, input: &$input) -> ResultEngine<$domain> {
                let active = input.to_active(id)?;
                with_tx!(self, |db_tx| {
                    require::<$entity::Entity>(&db_tx, id, $label).await?;
                    let model = active.update(&db_tx).await?;
                    <$domain>::try_from(model)
                })
            }

            pub async fn $delete(&self, id: Uuid) -> ResultEngine<()> {
                with_tx!(self, |db_tx| {
                    delete_existing::<$entity::Entity>(&db_tx, id, $label).await
                })
            }

            #[doc = concat!("Every ", $label, " inside `range`, oldest first.")]
            pub async fn $list(&self, range: &DateRange) -> ResultEngine<Vec<$domain>> {
                let mut query = $entity::Entity::find();
                if let Some(start) = range.start {
                    query = query.filter($entity::Column::$date.gte(start));
                }
                if let Some(end) = range.end {
                    query = query.filter($entity::Column::$date.lte(end));
                }
                query
                    .order_by_asc($entity::Column::$date)
                    .order_by_asc($entity::Column::Id)
                    .all(&self.database)
                    .await?
                    .into_iter()
                    .map(<$domain>::try_from)
                    .collect()
            }
        }
    };
}

record_ops!(
    operations, MachineOperation, MachineOperationInput, OperationDate, "machine operation",
    add: add_machine_operation,
    update: update_machine_operation,
    delete: delete_machine_operation,
    list: list_machine_operations,
);

record_ops!(
    dumper_trips, DumperTrip, DumperTripInput, TripDate, "dumper trip",
    add: add_dumper_trip,
    update: update_dumper_trip,
    delete: delete_dumper_trip,
    list: list_dumper_trips,
);

record_ops!(
    dumper_misc, DumperMiscExpense, DumperMiscExpenseInput, ExpenseDate, "dumper misc expense",
    add: add_dumper_misc_expense,
    update: update_dumper_misc_expense,
    delete: delete_dumper_misc_expense,
    list: list_dumper_misc_expenses,
);

record_ops!(
    blasting, BlastingPurchase, BlastingPurchaseInput, PurchaseDate, "blasting purchase",
    add: add_blasting_purchase,
    update: update_blasting_purchase,
    delete: delete_blasting_purchase,
    list: list_blasting_purchases,
);

record_ops!(
    production, DailyProductionEntry, DailyProductionInput, ProductionDate, "production entry",
    add: add_daily_production,
    update: update_daily_production,
    delete: delete_daily_production,
    list: list_daily_production,
);

impl Engine {
    /// Store a langar, plant or misc expense.
    ///
    /// A given `category_code` must name an existing category.
    pub async fn add_expense(&self, input: &ExpenseInput) -> ResultEngine<Uuid> {
        let id = Uuid::new_v4();
        let active = input.to_active(id)?;
        let code = input.category_code();
        with_tx!(self, |db_tx| {
            Self::ensure_known_category(&db_tx, code.as_deref()).await?;
            active.insert(&db_tx).await?;
            Ok(id)
        })
    }

    pub async fn update_expense(&self, id: Uuid, input: &ExpenseInput) -> ResultEngine<Expense> {
        let active = input.to_active(id)?;
        let code = input.category_code();
        with_tx!(self, |db_tx| {
            require::<expenses::Entity>(&db_tx, id, "expense").await?;
            Self::ensure_known_category(&db_tx, code.as_deref()).await?;
            let model = active.update(&db_tx).await?;
            Expense::try_from(model)
        })
    }

    pub async fn delete_expense(&self, id: Uuid) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            delete_existing::<expenses::Entity>(&db_tx, id, "expense").await
        })
    }

    pub async fn list_expenses(&self, range: &DateRange) -> ResultEngine<Vec<Expense>> {
        let mut query = expenses::Entity::find();
        if let Some(start) = range.start {
            query = query.filter(expenses::Column::ExpenseDate.gte(start));
        }
        if let Some(end) = range.end {
            query = query.filter(expenses::Column::ExpenseDate.lte(end));
        }
        query
            .order_by_asc(expenses::Column::ExpenseDate)
            .order_by_asc(expenses::Column::Id)
            .all(&self.database)
            .await?
            .into_iter()
            .map(Expense::try_from)
            .collect()
    }

    async fn ensure_known_category(
        db: &impl ConnectionTrait,
        code: Option<&str>,
    ) -> ResultEngine<()> {
        let Some(code) = code else {
            return Ok(());
        };
        if !Self::category_exists(db, code).await? {
            return Err(EngineError::validation(
                "category_code",
                format!("unknown category {code}"),
            ));
        }
        Ok(())
    }

    pub async fn add_salary(&self, input: &SalaryInput) -> ResultEngine<Uuid> {
        let id = Uuid::new_v4();
        let active = input.to_active(id)?;
        with_tx!(self, |db_tx| {
            active.insert(&db_tx).await?;
            Ok(id)
        })
    }

    pub async fn update_salary(&self, id: Uuid, input: &SalaryInput) -> ResultEngine<SalaryRecord> {
        let active = input.to_active(id)?;
        with_tx!(self, |db_tx| {
            require::<salaries::Entity>(&db_tx, id, "salary").await?;
            let model = active.update(&db_tx).await?;
            SalaryRecord::try_from(model)
        })
    }

    pub async fn delete_salary(&self, id: Uuid) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            delete_existing::<salaries::Entity>(&db_tx, id, "salary").await
        })
    }

    /// Salaries whose month starts inside `range`, oldest month first.
    pub async fn list_salaries(&self, range: &DateRange) -> ResultEngine<Vec<SalaryRecord>> {
        let (from, to) = range.period_bounds();
        let mut query = salaries::Entity::find();
        if let Some(from) = from {
            query = query.filter(salaries::Column::SalaryYear.gte(from.year()));
        }
        if let Some(to) = to {
            query = query.filter(salaries::Column::SalaryYear.lte(to.year()));
        }
        let models = query
            .order_by_asc(salaries::Column::SalaryYear)
            .order_by_asc(salaries::Column::SalaryMonth)
            .order_by_asc(salaries::Column::EmployeeName)
            .all(&self.database)
            .await?;

        let mut records = Vec::with_capacity(models.len());
        for model in models {
            let salary = SalaryRecord::try_from(model)?;
            if range.contains(salary.period.first_day()) {
                records.push(salary);
            }
        }
        Ok(records)
    }
}
