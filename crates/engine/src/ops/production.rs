use chrono::Utc;
use sea_orm::{QueryFilter, TransactionTrait, prelude::*};
use tracing::info;
use uuid::Uuid;

use crate::{
    DumperRegistry, EngineError, LiveProduction, MonthlyProductionSummary, MonthlySalesInputs,
    MonthlySalesSnapshot, Period, PeriodFilter, ResultEngine, TransactionRecord,
    aggregate_months, monthly_summaries, util::ensure_non_negative,
};

use super::{Engine, with_tx};

impl Engine {
    /// Sum the daily production entries of `period` as they are stored now.
    pub async fn live_production(&self, period: Period) -> ResultEngine<LiveProduction> {
        let records = self
            .list_daily_production(&period.date_range())
            .await?
            .iter()
            .map(TransactionRecord::from)
            .collect::<Vec<_>>();
        let breakdown = aggregate_months(
            &records,
            &DumperRegistry::default(),
            Some(&PeriodFilter::period(period)),
        )
        .months
        .remove(&period)
        .map(|bucket| bucket.production)
        .unwrap_or_default();
        Ok(LiveProduction::new(period, &breakdown))
    }

    /// Reconcile `period` against its live production and expenses and store
    /// the result, replacing any earlier summary of the same month.
    pub async fn finalize_month(
        &self,
        period: Period,
        inputs: &MonthlySalesInputs,
    ) -> ResultEngine<MonthlyProductionSummary> {
        let live = self.live_production(period).await?;
        let snapshot = live.snapshot(inputs)?;
        let total_cost = self.live_total_cost(period).await?;
        self.save_monthly_summary(&snapshot, total_cost).await
    }

    /// Upsert an already reconciled month. At most one summary exists per
    /// `(year, month)`; saving again overwrites it and keeps its id.
    pub async fn save_monthly_summary(
        &self,
        snapshot: &MonthlySalesSnapshot,
        total_cost: f64,
    ) -> ResultEngine<MonthlyProductionSummary> {
        ensure_non_negative("total_cost", total_cost)?;
        let period = snapshot.period;
        let saved_at = Utc::now();
        with_tx!(self, |db_tx| {
            let existing = monthly_summaries::Entity::find()
                .filter(monthly_summaries::Column::SummaryYear.eq(period.year()))
                .filter(monthly_summaries::Column::SummaryMonth.eq(period.month_name()))
                .one(&db_tx)
                .await?;
            let model = match existing {
                Some(existing) => {
                    info!(%period, "overwriting monthly production summary");
                    monthly_summaries::active_model(existing.id, snapshot, total_cost, saved_at)
                        .update(&db_tx)
                        .await?
                }
                None => {
                    info!(%period, "saving monthly production summary");
                    monthly_summaries::active_model(Uuid::new_v4(), snapshot, total_cost, saved_at)
                        .insert(&db_tx)
                        .await?
                }
            };
            MonthlyProductionSummary::try_from(model)
        })
    }

    pub async fn monthly_summary(&self, period: Period) -> ResultEngine<MonthlyProductionSummary> {
        let model = monthly_summaries::Entity::find()
            .filter(monthly_summaries::Column::SummaryYear.eq(period.year()))
            .filter(monthly_summaries::Column::SummaryMonth.eq(period.month_name()))
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound(format!("monthly summary {period}")))?;
        MonthlyProductionSummary::try_from(model)
    }

    /// Stored summaries, newest month first.
    pub async fn list_monthly_summaries(
        &self,
        year: Option<i32>,
    ) -> ResultEngine<Vec<MonthlyProductionSummary>> {
        let mut query = monthly_summaries::Entity::find();
        if let Some(year) = year {
            query = query.filter(monthly_summaries::Column::SummaryYear.eq(year));
        }
        let mut summaries = query
            .all(&self.database)
            .await?
            .into_iter()
            .map(MonthlyProductionSummary::try_from)
            .collect::<ResultEngine<Vec<_>>>()?;
        summaries.sort_by_key(|summary| std::cmp::Reverse(summary.period()));
        Ok(summaries)
    }
}
