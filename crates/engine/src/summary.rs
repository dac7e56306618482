//! Human facing grouping of a [`CostBreakdown`].

use serde::{Deserialize, Serialize};

use crate::aggregation::{CostBreakdown, MonthlyBucket, YearlyBucket};

/// Expense groups of a month or a year.
///
/// `total` is the operational total consumed by profit sharing. Misc
/// sub-amounts are only in `misc_reference` and `grand_total`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseSummary {
    /// Generator + excavator + loaders.
    pub equipment: f64,
    /// Every registered dumper's primary amount.
    pub dumpers: f64,
    pub blasting: f64,
    /// Langar + plant expenses.
    pub operating: f64,
    pub human_resources: f64,
    pub misc_expenses: f64,
    pub total: f64,
    pub misc_reference: f64,
    pub grand_total: f64,
    /// Dumper amounts not attributed to any registered dumper.
    pub unattributed: f64,
}

impl ExpenseSummary {
    pub fn summarize(costs: &CostBreakdown) -> Self {
        let equipment = costs.generator + costs.excavator + costs.loaders;
        let dumpers = costs.dumper_total();
        let operating = costs.langar + costs.plant_exp;
        let total = costs.total();
        let misc_reference = costs.misc_total();
        Self {
            equipment,
            dumpers,
            blasting: costs.blasting,
            operating,
            human_resources: costs.human_res,
            misc_expenses: costs.misc_exp,
            total,
            misc_reference,
            grand_total: total + misc_reference,
            unattributed: costs.unattributed_dumper + costs.unattributed_dumper_misc,
        }
    }
}

impl From<&MonthlyBucket> for ExpenseSummary {
    fn from(bucket: &MonthlyBucket) -> Self {
        Self::summarize(&bucket.costs)
    }
}

impl From<&YearlyBucket> for ExpenseSummary {
    fn from(bucket: &YearlyBucket) -> Self {
        Self::summarize(&bucket.costs)
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::aggregation::DumperTotals;

    #[test]
    fn groups_add_up_to_total() {
        let costs = CostBreakdown {
            generator: 10.0,
            excavator: 20.0,
            excavator_misc: 1.0,
            loaders: 30.0,
            loaders_misc: 2.0,
            dumpers: vec![
                DumperTotals {
                    dumper_id: Uuid::new_v4(),
                    code: "D1".to_string(),
                    name: "One".to_string(),
                    amount: 40.0,
                    misc: 3.0,
                },
                DumperTotals {
                    dumper_id: Uuid::new_v4(),
                    code: "D2".to_string(),
                    name: "Two".to_string(),
                    amount: 50.0,
                    misc: 4.0,
                },
            ],
            blasting: 60.0,
            langar: 70.0,
            plant_exp: 80.0,
            human_res: 90.0,
            misc_exp: 100.0,
            unattributed_dumper: 500.0,
            unattributed_dumper_misc: 5.0,
        };

        let summary = ExpenseSummary::summarize(&costs);
        assert_eq!(summary.equipment, 60.0);
        assert_eq!(summary.dumpers, 90.0);
        assert_eq!(summary.operating, 150.0);
        assert_eq!(summary.total, 550.0);
        assert_eq!(
            summary.equipment
                + summary.dumpers
                + summary.blasting
                + summary.operating
                + summary.human_resources
                + summary.misc_expenses,
            summary.total
        );
        assert_eq!(summary.misc_reference, 10.0);
        assert_eq!(summary.grand_total, 560.0);
        assert_eq!(summary.unattributed, 505.0);
    }
}
