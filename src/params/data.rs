//! Parameter data structures matching the calculator's snapshot format
//!
//! Every field carries a serde default so a partial snapshot decodes by
//! merging onto the zero-state baseline (missing fields keep their default).

use serde::{Deserialize, Serialize};

fn default_gr_est_pct() -> f64 {
    3.5
}

fn default_notary_pct() -> f64 {
    1.0
}

fn default_land_reg_pct() -> f64 {
    0.5
}

fn default_land_share_pct() -> f64 {
    34.0
}

fn default_vacancy_pct() -> f64 {
    3.0
}

fn default_mgmt_monthly() -> f64 {
    75.0
}

fn default_capex_monthly() -> f64 {
    50.0
}

fn default_growth_pct() -> f64 {
    1.5
}

fn default_term_years() -> u32 {
    10
}

fn default_marginal_rate_pct() -> f64 {
    42.0
}

fn default_depreciation_pct() -> f64 {
    4.0
}

fn default_horizon_years() -> u32 {
    10
}

/// Purchase price, one-time transaction costs, and the land/building split
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Acquisition {
    /// Purchase price of the property (currency units)
    #[serde(default)]
    pub price_property: f64,

    /// Furniture/fixtures bought alongside (not part of the building value)
    #[serde(default)]
    pub price_furniture: f64,

    /// Real-estate transfer tax rate in percent (Grunderwerbsteuer)
    #[serde(rename = "grEStPct", default = "default_gr_est_pct")]
    pub gr_est_pct: f64,

    /// Notary fee rate in percent
    #[serde(default = "default_notary_pct")]
    pub notary_pct: f64,

    /// Land registry fee rate in percent
    #[serde(default = "default_land_reg_pct")]
    pub land_reg_pct: f64,

    /// Additional one-time acquisition costs
    #[serde(default)]
    pub other_costs: f64,

    /// Additional recurring annual costs (charged in every projected year)
    #[serde(default)]
    pub other_costs_annual: f64,

    /// Share of the purchase price attributed to non-depreciable land, percent
    #[serde(default = "default_land_share_pct")]
    pub land_share_pct: f64,
}

impl Default for Acquisition {
    fn default() -> Self {
        Self {
            price_property: 0.0,
            price_furniture: 0.0,
            gr_est_pct: default_gr_est_pct(),
            notary_pct: default_notary_pct(),
            land_reg_pct: default_land_reg_pct(),
            other_costs: 0.0,
            other_costs_annual: 0.0,
            land_share_pct: default_land_share_pct(),
        }
    }
}

/// Rental income and recurring operating charges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentOps {
    /// Cold rent per month (excluding utilities)
    #[serde(default)]
    pub cold_rent_monthly: f64,

    /// Expected vacancy in percent of gross rent
    #[serde(default = "default_vacancy_pct")]
    pub vacancy_pct: f64,

    /// Non-recoverable owner costs per month
    #[serde(default)]
    pub owner_costs_monthly: f64,

    /// Property management fee per month
    #[serde(default = "default_mgmt_monthly")]
    pub mgmt_monthly: f64,

    /// Maintenance reserve per month
    #[serde(default = "default_capex_monthly")]
    pub capex_monthly: f64,

    /// Annual rent growth in percent (compounds from year 2)
    #[serde(default = "default_growth_pct")]
    pub rent_growth_pct: f64,

    /// Annual market value growth in percent (compounds from year 1)
    #[serde(default = "default_growth_pct")]
    pub value_growth_pct: f64,
}

impl Default for RentOps {
    fn default() -> Self {
        Self {
            cold_rent_monthly: 0.0,
            vacancy_pct: default_vacancy_pct(),
            owner_costs_monthly: 0.0,
            mgmt_monthly: default_mgmt_monthly(),
            capex_monthly: default_capex_monthly(),
            rent_growth_pct: default_growth_pct(),
            value_growth_pct: default_growth_pct(),
        }
    }
}

/// Equity commitment and the fixed-annuity loan terms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Financing {
    /// Equity paid in at acquisition
    #[serde(default)]
    pub equity_amount: f64,

    /// Nominal annual loan interest rate in percent
    #[serde(default)]
    pub interest_pct: f64,

    /// Initial annual amortization rate in percent; together with the
    /// interest rate it fixes the constant annuity on the initial principal
    #[serde(default)]
    pub initial_redemption_pct: f64,

    /// Contractual fixed-interest term in years (informational only)
    #[serde(default = "default_term_years")]
    pub term_years: u32,
}

impl Default for Financing {
    fn default() -> Self {
        Self {
            equity_amount: 0.0,
            interest_pct: 0.0,
            initial_redemption_pct: 0.0,
            term_years: default_term_years(),
        }
    }
}

/// Income tax treatment of the rental result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tax {
    /// Marginal income tax rate in percent
    #[serde(default = "default_marginal_rate_pct")]
    pub marginal_rate_pct: f64,

    /// Straight-line depreciation rate in percent of the building value (AfA)
    #[serde(default = "default_depreciation_pct")]
    pub depreciation_pct: f64,
}

impl Default for Tax {
    fn default() -> Self {
        Self {
            marginal_rate_pct: default_marginal_rate_pct(),
            depreciation_pct: default_depreciation_pct(),
        }
    }
}

/// Projection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Number of years to project (1-indexed schedule)
    #[serde(default = "default_horizon_years")]
    pub horizon_years: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            horizon_years: default_horizon_years(),
        }
    }
}

/// Complete input record for one projection run
///
/// Owned by the caller and passed by value into the engine; the engine never
/// mutates or validates it (range enforcement lives in [`crate::params::validate`]).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterSet {
    #[serde(default)]
    pub acquisition: Acquisition,

    #[serde(default)]
    pub rent_ops: RentOps,

    #[serde(default)]
    pub financing: Financing,

    #[serde(default)]
    pub tax: Tax,

    #[serde(default)]
    pub settings: Settings,
}

impl ParameterSet {
    /// Baseline with all monetary fields at 0 and rates at realistic defaults
    pub fn zero_state() -> Self {
        Self::default()
    }

    /// Representative demo scenario: 300k property, 1200/month cold rent,
    /// 10% equity of total costs, 4% interest, 2% initial redemption
    pub fn demo_data() -> Self {
        let mut params = Self::zero_state();
        params.acquisition.price_property = 300_000.0;
        params.rent_ops.cold_rent_monthly = 1_200.0;
        params.financing.interest_pct = 4.0;
        params.financing.initial_redemption_pct = 2.0;
        params.financing.equity_amount = (params.total_costs() * 0.10).round();
        params
    }

    /// One-time transaction costs: transfer tax, notary, land registry, other
    pub fn ancillary_costs(&self) -> f64 {
        let a = &self.acquisition;
        a.price_property * (a.gr_est_pct + a.notary_pct + a.land_reg_pct) / 100.0 + a.other_costs
    }

    /// Full acquisition outlay including furniture and ancillary costs
    pub fn total_costs(&self) -> f64 {
        self.acquisition.price_property + self.acquisition.price_furniture + self.ancillary_costs()
    }

    /// Depreciable building portion of the purchase price (AfA base)
    pub fn building_share(&self) -> f64 {
        self.acquisition.price_property * (1.0 - self.acquisition.land_share_pct / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_zero_state_defaults() {
        let params = ParameterSet::zero_state();

        assert_eq!(params.acquisition.price_property, 0.0);
        assert_eq!(params.acquisition.gr_est_pct, 3.5);
        assert_eq!(params.acquisition.notary_pct, 1.0);
        assert_eq!(params.acquisition.land_reg_pct, 0.5);
        assert_eq!(params.acquisition.land_share_pct, 34.0);
        assert_eq!(params.rent_ops.vacancy_pct, 3.0);
        assert_eq!(params.rent_ops.mgmt_monthly, 75.0);
        assert_eq!(params.rent_ops.capex_monthly, 50.0);
        assert_eq!(params.financing.equity_amount, 0.0);
        assert_eq!(params.tax.marginal_rate_pct, 42.0);
        assert_eq!(params.tax.depreciation_pct, 4.0);
        assert_eq!(params.settings.horizon_years, 10);
    }

    #[test]
    fn test_demo_data_equity_derivation() {
        let params = ParameterSet::demo_data();

        // Ancillary 300000 * 5% = 15000, total 315000, equity 10% = 31500
        assert_abs_diff_eq!(params.ancillary_costs(), 15_000.0);
        assert_abs_diff_eq!(params.total_costs(), 315_000.0);
        assert_abs_diff_eq!(params.financing.equity_amount, 31_500.0);
        assert_eq!(params.rent_ops.cold_rent_monthly, 1_200.0);
        assert_eq!(params.financing.interest_pct, 4.0);
        assert_eq!(params.financing.initial_redemption_pct, 2.0);
    }

    #[test]
    fn test_building_share() {
        let params = ParameterSet::demo_data();

        // 34% land share leaves 66% of 300000 as depreciable building value
        assert_abs_diff_eq!(params.building_share(), 198_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_total_costs_includes_furniture() {
        let mut params = ParameterSet::demo_data();
        params.acquisition.price_furniture = 10_000.0;

        assert_abs_diff_eq!(params.total_costs(), 325_000.0);
    }
}
