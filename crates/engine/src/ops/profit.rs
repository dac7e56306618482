use chrono::Utc;
use sea_orm::{QueryFilter, TransactionTrait, prelude::*};
use tracing::info;
use uuid::Uuid;

use crate::{
    EngineError, Period, ProfitShares, ProfitSharingRecord, ProfitSharingResult, ResultEngine,
    calculate_profit_sharing, profit_records,
};

use super::{Engine, with_tx};

impl Engine {
    /// Split the profit of a finalised month.
    ///
    /// Revenue and expense both come from the stored monthly summary, so
    /// records edited after finalisation do not move the split.
    pub async fn profit_sharing_for(
        &self,
        period: Period,
        shares: &ProfitShares,
    ) -> ResultEngine<ProfitSharingResult> {
        let summary = self.monthly_summary(period).await?;
        calculate_profit_sharing(
            period,
            summary.total_cost,
            summary.snapshot.total_revenue,
            shares,
        )
    }

    /// Upsert a profit sharing result, one per `(month, year)`.
    pub async fn save_profit_sharing(
        &self,
        result: &ProfitSharingResult,
    ) -> ResultEngine<ProfitSharingRecord> {
        let period = result.period;
        let saved_at = Utc::now();
        with_tx!(self, |db_tx| {
            let existing = profit_records::Entity::find()
                .filter(profit_records::Column::PeriodMonth.eq(period.month_name()))
                .filter(profit_records::Column::PeriodYear.eq(period.year()))
                .one(&db_tx)
                .await?;
            let model = match existing {
                Some(existing) => {
                    info!(%period, "overwriting profit sharing record");
                    profit_records::active_model(existing.id, result, saved_at)
                        .update(&db_tx)
                        .await?
                }
                None => {
                    info!(%period, "saving profit sharing record");
                    profit_records::active_model(Uuid::new_v4(), result, saved_at)
                        .insert(&db_tx)
                        .await?
                }
            };
            ProfitSharingRecord::try_from(model)
        })
    }

    pub async fn profit_sharing(&self, period: Period) -> ResultEngine<ProfitSharingRecord> {
        let model = profit_records::Entity::find()
            .filter(profit_records::Column::PeriodMonth.eq(period.month_name()))
            .filter(profit_records::Column::PeriodYear.eq(period.year()))
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound(format!("profit sharing {period}")))?;
        ProfitSharingRecord::try_from(model)
    }
}
