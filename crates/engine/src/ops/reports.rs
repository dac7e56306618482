use tracing::debug;

use crate::{
    DateRange, MonthlyAggregation, MonthlyBucket, Period, PeriodFilter, ResultEngine,
    TransactionRecord, YearlyBucket, aggregate_months,
};

use super::Engine;

impl Engine {
    /// Lower every stored record dated inside `range` into the aggregation input.
    async fn load_records(&self, range: &DateRange) -> ResultEngine<Vec<TransactionRecord>> {
        let mut records: Vec<TransactionRecord> = Vec::new();
        records.extend(
            self.list_machine_operations(range)
                .await?
                .iter()
                .map(TransactionRecord::from),
        );
        records.extend(
            self.list_dumper_trips(range)
                .await?
                .iter()
                .map(TransactionRecord::from),
        );
        records.extend(
            self.list_dumper_misc_expenses(range)
                .await?
                .iter()
                .map(TransactionRecord::from),
        );
        records.extend(
            self.list_blasting_purchases(range)
                .await?
                .iter()
                .map(TransactionRecord::from),
        );
        records.extend(
            self.list_expenses(range)
                .await?
                .iter()
                .map(TransactionRecord::from),
        );
        records.extend(
            self.list_salaries(range)
                .await?
                .iter()
                .map(TransactionRecord::from),
        );
        records.extend(
            self.list_daily_production(range)
                .await?
                .iter()
                .map(TransactionRecord::from),
        );
        debug!(count = records.len(), "loaded records for aggregation");
        Ok(records)
    }

    /// Aggregate the stored records by month against the current dumper registry.
    pub async fn monthly_aggregation(
        &self,
        filter: &PeriodFilter,
    ) -> ResultEngine<MonthlyAggregation> {
        let registry = self.dumper_registry().await?;
        let records = self.load_records(&filter.date_range()).await?;
        Ok(aggregate_months(&records, &registry, Some(filter)))
    }

    /// The bucket of one month, `None` when nothing was recorded in it.
    pub async fn monthly_bucket(&self, period: Period) -> ResultEngine<Option<MonthlyBucket>> {
        let aggregation = self.monthly_aggregation(&PeriodFilter::period(period)).await?;
        Ok(aggregation.months.into_values().next())
    }

    /// Every bucket of `year` folded into one.
    pub async fn yearly_bucket(&self, year: i32) -> ResultEngine<Option<YearlyBucket>> {
        let aggregation = self.monthly_aggregation(&PeriodFilter::year(year)).await?;
        Ok(aggregation.year(year))
    }

    /// Operational expense total of `period` as the records add up now.
    pub(super) async fn live_total_cost(&self, period: Period) -> ResultEngine<f64> {
        Ok(self
            .monthly_bucket(period)
            .await?
            .map(|bucket| bucket.total())
            .unwrap_or(0.0))
    }
}
