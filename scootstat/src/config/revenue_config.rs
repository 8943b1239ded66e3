use crate::model::Operator;
use serde::{Deserialize, Serialize};

/// one value per operator, written as `{ lime = .., void = .., bird = .. }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatorValues {
    pub lime: f64,
    pub void: f64,
    pub bird: f64,
}

impl OperatorValues {
    pub fn get(&self, operator: &Operator) -> f64 {
        match operator {
            Operator::Lime => self.lime,
            Operator::Void => self.void,
            Operator::Bird => self.bird,
        }
    }
}

/// tariff and cost assumptions of the profitability estimate, in euro.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RevenueConfig {
    pub unlock_fee: f64,
    pub per_minute: OperatorValues,
    pub energy_per_km: f64,
    pub vehicle_purchase_cost: f64,
    pub maintenance_cost: f64,
    /// distance over which purchase and maintenance costs are spread
    pub vehicle_lifetime_km: f64,
    pub fixed_annual_cost: OperatorValues,
    /// length of the analyzed period in years, applied to the fixed costs
    pub period_years: f64,
}

impl RevenueConfig {
    /// energy, amortization and maintenance cost of one kilometer
    pub fn variable_cost_per_km(&self) -> f64 {
        self.energy_per_km
            + self.vehicle_purchase_cost / self.vehicle_lifetime_km
            + self.maintenance_cost / self.vehicle_lifetime_km
    }
}

impl Default for RevenueConfig {
    fn default() -> Self {
        Self {
            unlock_fee: 1.0,
            per_minute: OperatorValues {
                lime: 0.19,
                void: 0.19,
                bird: 0.20,
            },
            energy_per_km: 0.00308,
            vehicle_purchase_cost: 600.0,
            maintenance_cost: 100.0,
            vehicle_lifetime_km: 5000.0,
            fixed_annual_cost: OperatorValues {
                lime: 1_500_000.0,
                void: 1_200_000.0,
                bird: 1_500_000.0,
            },
            period_years: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_cost_per_km() {
        let conf = RevenueConfig::default();
        assert!((conf.variable_cost_per_km() - (0.00308 + 0.12 + 0.02)).abs() < 1e-12);
    }
}
