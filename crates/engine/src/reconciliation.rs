//! Production reconciliation.
//!
//! Deduction happens in two stages:
//!
//! 1. Daily: the clay/dust share of the crushed gravel is removed, leaving
//!    the net aggregate ([`reconcile_daily_production`]).
//! 2. Monthly: the period's net aggregate is rounded to whole cubic feet and
//!    an allowance (handling/shrinkage margin) is taken off once before the
//!    sold quantity and remaining stock are worked out
//!    ([`reconcile_monthly_sales`]).
//!
//! The monthly result is a [`MonthlySalesSnapshot`]: it freezes the net
//! production figure it was given. [`LiveProduction`] is the separate value
//! for "what the daily entries add up to right now".

use serde::{Deserialize, Serialize};

use crate::{
    ResultEngine,
    aggregation::ProductionBreakdown,
    period::Period,
    util::{ensure_non_negative, ensure_percent, ensure_positive},
};

/// Used when a daily entry does not say otherwise.
pub const DEFAULT_CLAY_DUST_PERCENT: f64 = 33.33;

/// Daily split of crushed gravel into clay/dust and aggregate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailyReconciliation {
    pub gravel_cft: f64,
    pub clay_dust_percent: f64,
    pub clay_dust_cft: f64,
    pub aggregate_produced: f64,
    /// Equal to `aggregate_produced`; the allowance is only taken monthly.
    pub net_aggregate_cft: f64,
}

/// Split `gravel_cft` using `clay_dust_percent` (defaults to
/// [`DEFAULT_CLAY_DUST_PERCENT`]).
///
/// Requires `gravel_cft > 0` and a percentage in `[0, 100]`.
pub fn reconcile_daily_production(
    gravel_cft: f64,
    clay_dust_percent: Option<f64>,
) -> ResultEngine<DailyReconciliation> {
    let clay_dust_percent = clay_dust_percent.unwrap_or(DEFAULT_CLAY_DUST_PERCENT);
    ensure_positive("gravel_cft", gravel_cft)?;
    ensure_percent("clay_dust_percent", clay_dust_percent)?;

    let clay_dust_cft = gravel_cft * clay_dust_percent / 100.0;
    let aggregate_produced = gravel_cft - clay_dust_cft;

    Ok(DailyReconciliation {
        gravel_cft,
        clay_dust_percent,
        clay_dust_cft,
        aggregate_produced,
        net_aggregate_cft: aggregate_produced,
    })
}

/// User supplied sales figures for one month.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlySalesInputs {
    pub sold_at_site_cft: f64,
    pub sold_at_site_amount: f64,
    /// Expected rate applied to the *remaining* stock.
    pub approx_per_cft_cost: f64,
    pub allowance_percent: f64,
}

impl MonthlySalesInputs {
    fn validate(&self) -> ResultEngine<()> {
        ensure_non_negative("sold_at_site_cft", self.sold_at_site_cft)?;
        ensure_non_negative("sold_at_site_amount", self.sold_at_site_amount)?;
        ensure_non_negative("approx_per_cft_cost", self.approx_per_cft_cost)?;
        ensure_percent("allowance_percent", self.allowance_percent)
    }
}

/// Monthly sales/stock reconciliation, frozen at the moment it was computed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlySalesSnapshot {
    pub period: Period,
    pub sold_at_site_cft: f64,
    pub sold_at_site_amount: f64,
    pub approx_per_cft_cost: f64,
    pub allowance_percent: f64,
    /// Net production of the period, rounded to whole cft.
    pub total_produced_raw: f64,
    pub allowance_deduction: f64,
    pub total_produced: f64,
    /// Remaining stock. Negative when more was sold than produced.
    pub stock_at_site_cft: f64,
    pub per_cft_selling_price: f64,
    pub stock_value: f64,
    pub total_revenue: f64,
}

/// Reconcile a month's sales against `net_produced_for_period`.
///
/// The caller passes the net production explicitly; nothing is read from
/// daily entries here, so re-running with the same arguments always gives
/// the same snapshot.
pub fn reconcile_monthly_sales(
    period: Period,
    inputs: &MonthlySalesInputs,
    net_produced_for_period: f64,
) -> ResultEngine<MonthlySalesSnapshot> {
    inputs.validate()?;
    ensure_non_negative("net_produced_for_period", net_produced_for_period)?;

    let total_produced_raw = net_produced_for_period.round();
    let allowance_deduction = (total_produced_raw * inputs.allowance_percent / 100.0).round();
    let total_produced = total_produced_raw - allowance_deduction;
    let stock_at_site_cft = total_produced - inputs.sold_at_site_cft;
    let per_cft_selling_price = if inputs.sold_at_site_cft > 0.0 {
        inputs.sold_at_site_amount / inputs.sold_at_site_cft
    } else {
        0.0
    };
    let stock_value = stock_at_site_cft * inputs.approx_per_cft_cost;
    let total_revenue = inputs.sold_at_site_amount + stock_value;

    Ok(MonthlySalesSnapshot {
        period,
        sold_at_site_cft: inputs.sold_at_site_cft,
        sold_at_site_amount: inputs.sold_at_site_amount,
        approx_per_cft_cost: inputs.approx_per_cft_cost,
        allowance_percent: inputs.allowance_percent,
        total_produced_raw,
        allowance_deduction,
        total_produced,
        stock_at_site_cft,
        per_cft_selling_price,
        stock_value,
        total_revenue,
    })
}

/// Production of a period as the daily entries currently add up.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LiveProduction {
    pub period: Period,
    pub entries: u32,
    pub gravel_cft: f64,
    pub clay_dust_cft: f64,
    pub net_aggregate_cft: f64,
}

impl LiveProduction {
    pub fn new(period: Period, breakdown: &ProductionBreakdown) -> Self {
        Self {
            period,
            entries: breakdown.entries,
            gravel_cft: breakdown.gravel_cft,
            clay_dust_cft: breakdown.clay_dust_cft,
            net_aggregate_cft: breakdown.net_aggregate_cft,
        }
    }

    /// Reconcile against this live figure, freezing it into a snapshot.
    pub fn snapshot(&self, inputs: &MonthlySalesInputs) -> ResultEngine<MonthlySalesSnapshot> {
        reconcile_monthly_sales(self.period, inputs, self.net_aggregate_cft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EngineError;

    fn close(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn feb() -> Period {
        Period::new(2025, 2).unwrap()
    }

    #[test]
    fn daily_deduction_conserves_gravel() {
        for gravel in [0.25, 1.0, 17.5, 1234.56, 58186.0, 1.0e7] {
            for percent in [0.0, 0.01, 12.5, 33.33, 50.0, 99.99, 100.0] {
                let daily = reconcile_daily_production(gravel, Some(percent)).unwrap();
                assert!(close(daily.clay_dust_cft + daily.net_aggregate_cft, gravel, 1e-9));
                assert_eq!(daily.net_aggregate_cft, daily.aggregate_produced);
            }
        }
    }

    #[test]
    fn daily_scenario_uses_the_entry_percentage() {
        let daily = reconcile_daily_production(58186.0, Some(33.33)).unwrap();
        assert!(close(daily.clay_dust_cft, 19393.3938, 1e-6));
        assert!(close(daily.net_aggregate_cft, 38792.6062, 1e-6));
    }

    #[test]
    fn daily_defaults_missing_percentage() {
        let daily = reconcile_daily_production(300.0, None).unwrap();
        assert_eq!(daily.clay_dust_percent, DEFAULT_CLAY_DUST_PERCENT);
        assert!(close(daily.clay_dust_cft, 99.99, 1e-9));
    }

    #[test]
    fn daily_rejects_bad_input() {
        assert_eq!(
            reconcile_daily_production(0.0, Some(10.0)).unwrap_err().field(),
            Some("gravel_cft")
        );
        assert_eq!(
            reconcile_daily_production(-5.0, Some(10.0)).unwrap_err().field(),
            Some("gravel_cft")
        );
        assert_eq!(
            reconcile_daily_production(10.0, Some(100.5)).unwrap_err(),
            EngineError::validation("clay_dust_percent", "must be <= 100")
        );
    }

    #[test]
    fn monthly_scenario() {
        let inputs = MonthlySalesInputs {
            sold_at_site_cft: 20000.0,
            sold_at_site_amount: 600000.0,
            approx_per_cft_cost: 25.0,
            allowance_percent: 15.0,
        };
        let snapshot = reconcile_monthly_sales(feb(), &inputs, 38794.66).unwrap();
        assert_eq!(snapshot.total_produced_raw, 38795.0);
        assert_eq!(snapshot.allowance_deduction, 5819.0);
        assert_eq!(snapshot.total_produced, 32976.0);
        assert_eq!(snapshot.stock_at_site_cft, 12976.0);
        assert_eq!(snapshot.per_cft_selling_price, 30.0);
        assert_eq!(snapshot.stock_value, 324400.0);
        assert_eq!(snapshot.total_revenue, 924400.0);
    }

    #[test]
    fn monthly_is_idempotent() {
        let inputs = MonthlySalesInputs {
            sold_at_site_cft: 123.0,
            sold_at_site_amount: 4567.0,
            approx_per_cft_cost: 8.9,
            allowance_percent: 3.3,
        };
        let a = reconcile_monthly_sales(feb(), &inputs, 9876.54).unwrap();
        let b = reconcile_monthly_sales(feb(), &inputs, 9876.54).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn zero_sold_gives_zero_unit_price() {
        let inputs = MonthlySalesInputs {
            sold_at_site_cft: 0.0,
            sold_at_site_amount: 0.0,
            approx_per_cft_cost: 10.0,
            allowance_percent: 0.0,
        };
        let snapshot = reconcile_monthly_sales(feb(), &inputs, 100.0).unwrap();
        assert_eq!(snapshot.per_cft_selling_price, 0.0);
        assert_eq!(snapshot.stock_value, 1000.0);
    }

    #[test]
    fn oversold_stock_stays_negative() {
        let inputs = MonthlySalesInputs {
            sold_at_site_cft: 15000.0,
            sold_at_site_amount: 450000.0,
            approx_per_cft_cost: 25.0,
            allowance_percent: 0.0,
        };
        let snapshot = reconcile_monthly_sales(feb(), &inputs, 10000.0).unwrap();
        assert_eq!(snapshot.total_produced, 10000.0);
        assert_eq!(snapshot.stock_at_site_cft, -5000.0);
        assert_eq!(snapshot.stock_value, -125000.0);
        assert_eq!(snapshot.total_revenue, 325000.0);
    }

    #[test]
    fn monthly_rejects_bad_input() {
        let mut inputs = MonthlySalesInputs {
            allowance_percent: 120.0,
            ..MonthlySalesInputs::default()
        };
        assert_eq!(
            reconcile_monthly_sales(feb(), &inputs, 1.0).unwrap_err().field(),
            Some("allowance_percent")
        );
        inputs.allowance_percent = 0.0;
        inputs.sold_at_site_cft = -1.0;
        assert_eq!(
            reconcile_monthly_sales(feb(), &inputs, 1.0).unwrap_err().field(),
            Some("sold_at_site_cft")
        );
        inputs.sold_at_site_cft = 0.0;
        assert_eq!(
            reconcile_monthly_sales(feb(), &inputs, f64::NAN).unwrap_err().field(),
            Some("net_produced_for_period")
        );
    }

    #[test]
    fn live_production_freezes_into_snapshot() {
        let live = LiveProduction::new(
            feb(),
            &ProductionBreakdown {
                entries: 2,
                gravel_cft: 600.0,
                clay_dust_cft: 199.98,
                net_aggregate_cft: 400.02,
            },
        );
        let snapshot = live.snapshot(&MonthlySalesInputs::default()).unwrap();
        assert_eq!(snapshot.total_produced_raw, 400.0);
        assert_eq!(snapshot.period, feb());
    }
}
