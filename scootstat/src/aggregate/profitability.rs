use crate::config::RevenueConfig;
use crate::model::{Operator, Trip};
use itertools::Itertools;
use serde::Serialize;

/// revenue and cost estimate of one operator over the analyzed period, in euro
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperatorProfitability {
    pub operator: Operator,
    pub trips: usize,
    pub total_duration_min: f64,
    pub total_km: f64,
    pub revenue: f64,
    pub variable_cost: f64,
    pub fixed_cost: f64,
    pub total_cost: f64,
    pub profit: f64,
    /// profit over revenue in percent, None without revenue
    pub margin_pct: Option<f64>,
}

/// estimates revenue from the unlock fee and per-minute tariff of each rental, and
/// costs from the distance driven plus the fixed yearly cost of running the fleet.
/// operators without trips are omitted.
pub fn profitability(trips: &[Trip], config: &RevenueConfig) -> Vec<OperatorProfitability> {
    let by_operator = trips.iter().into_group_map_by(|t| t.operator);
    Operator::ALL
        .iter()
        .filter_map(|op| {
            let op_trips = by_operator.get(op)?;
            let per_minute = config.per_minute.get(op);
            let total_duration_min: f64 = op_trips.iter().map(|t| t.duration_min).sum();
            let total_km: f64 = op_trips.iter().map(|t| t.distance_km).sum();
            let revenue: f64 = op_trips
                .iter()
                .map(|t| config.unlock_fee + per_minute * t.duration_min)
                .sum();
            let variable_cost = config.variable_cost_per_km() * total_km;
            let fixed_cost = config.fixed_annual_cost.get(op) * config.period_years;
            let total_cost = variable_cost + fixed_cost;
            let profit = revenue - total_cost;
            let margin_pct = if revenue > 0.0 {
                Some(100.0 * profit / revenue)
            } else {
                None
            };
            Some(OperatorProfitability {
                operator: *op,
                trips: op_trips.len(),
                total_duration_min,
                total_km,
                revenue,
                variable_cost,
                fixed_cost,
                total_cost,
                profit,
                margin_pct,
            })
        })
        .collect_vec()
}
