//! Caller-side input validation: readiness gating and range clamping
//!
//! The engine is a total function and never rejects input; the checks here
//! mirror what the calculator's input layer enforces before it computes.

use super::ParameterSet;

/// Required-field gate
///
/// Consumers run the projection and render results only while this holds;
/// the zero state is deliberately not ready.
pub fn is_ready(params: &ParameterSet) -> bool {
    params.acquisition.price_property > 0.0
        && params.rent_ops.cold_rent_monthly > 0.0
        && params.financing.equity_amount >= 0.0
        && params.financing.interest_pct >= 0.0
        && params.financing.initial_redemption_pct >= 0.0
        && params.settings.horizon_years >= 1
}

/// Coerce every field into the range its input widget allows
///
/// Monetary fields floor at 0, slider-backed rates clamp to their widget
/// bounds, and equity is capped at total acquisition costs. `termYears` is
/// informational and stays untouched.
pub fn clamp(mut params: ParameterSet) -> ParameterSet {
    let a = &mut params.acquisition;
    a.price_property = a.price_property.max(0.0);
    a.price_furniture = a.price_furniture.max(0.0);
    a.gr_est_pct = a.gr_est_pct.max(0.0);
    a.notary_pct = a.notary_pct.max(0.0);
    a.land_reg_pct = a.land_reg_pct.max(0.0);
    a.other_costs = a.other_costs.max(0.0);
    a.other_costs_annual = a.other_costs_annual.max(0.0);
    a.land_share_pct = a.land_share_pct.clamp(0.0, 80.0);

    let r = &mut params.rent_ops;
    r.cold_rent_monthly = r.cold_rent_monthly.max(0.0);
    r.vacancy_pct = r.vacancy_pct.clamp(0.0, 15.0);
    r.owner_costs_monthly = r.owner_costs_monthly.max(0.0);
    r.mgmt_monthly = r.mgmt_monthly.max(0.0);
    r.capex_monthly = r.capex_monthly.max(0.0);
    r.rent_growth_pct = r.rent_growth_pct.clamp(0.0, 10.0);
    r.value_growth_pct = r.value_growth_pct.clamp(0.0, 10.0);

    let f = &mut params.financing;
    f.equity_amount = f.equity_amount.max(0.0);
    f.interest_pct = f.interest_pct.clamp(0.0, 10.0);
    f.initial_redemption_pct = f.initial_redemption_pct.clamp(0.0, 10.0);

    let t = &mut params.tax;
    t.marginal_rate_pct = t.marginal_rate_pct.clamp(0.0, 45.0);
    t.depreciation_pct = t.depreciation_pct.clamp(2.0, 5.0);

    params.settings.horizon_years = params.settings.horizon_years.clamp(1, 35);

    // Equity cannot exceed the acquisition outlay it is meant to cover
    let total_costs = params.total_costs();
    if total_costs > 0.0 && params.financing.equity_amount > total_costs {
        log::warn!(
            "equity {} exceeds total costs {}, capping",
            params.financing.equity_amount,
            total_costs
        );
        params.financing.equity_amount = total_costs;
    }

    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_state_is_not_ready() {
        assert!(!is_ready(&ParameterSet::zero_state()));
    }

    #[test]
    fn test_demo_data_is_ready() {
        assert!(is_ready(&ParameterSet::demo_data()));
    }

    #[test]
    fn test_each_readiness_condition_gates() {
        let ready = ParameterSet::demo_data();

        let mut p = ready.clone();
        p.acquisition.price_property = 0.0;
        assert!(!is_ready(&p));

        let mut p = ready.clone();
        p.rent_ops.cold_rent_monthly = 0.0;
        assert!(!is_ready(&p));

        let mut p = ready.clone();
        p.financing.equity_amount = -1.0;
        assert!(!is_ready(&p));

        let mut p = ready.clone();
        p.financing.interest_pct = -0.1;
        assert!(!is_ready(&p));

        let mut p = ready.clone();
        p.financing.initial_redemption_pct = -0.1;
        assert!(!is_ready(&p));

        let mut p = ready;
        p.settings.horizon_years = 0;
        assert!(!is_ready(&p));
    }

    #[test]
    fn test_clamp_coerces_out_of_range_fields() {
        let mut params = ParameterSet::demo_data();
        params.rent_ops.cold_rent_monthly = -500.0;
        params.rent_ops.vacancy_pct = 50.0;
        params.acquisition.land_share_pct = 95.0;
        params.financing.interest_pct = 12.0;
        params.tax.marginal_rate_pct = 49.0;
        params.tax.depreciation_pct = 1.0;
        params.settings.horizon_years = 99;

        let clamped = clamp(params);

        assert_eq!(clamped.rent_ops.cold_rent_monthly, 0.0);
        assert_eq!(clamped.rent_ops.vacancy_pct, 15.0);
        assert_eq!(clamped.acquisition.land_share_pct, 80.0);
        assert_eq!(clamped.financing.interest_pct, 10.0);
        assert_eq!(clamped.tax.marginal_rate_pct, 45.0);
        assert_eq!(clamped.tax.depreciation_pct, 2.0);
        assert_eq!(clamped.settings.horizon_years, 35);
    }

    #[test]
    fn test_clamp_floors_horizon_at_one_year() {
        let mut params = ParameterSet::demo_data();
        params.settings.horizon_years = 0;

        assert_eq!(clamp(params).settings.horizon_years, 1);
    }

    #[test]
    fn test_clamp_caps_equity_at_total_costs() {
        let mut params = ParameterSet::demo_data();
        params.financing.equity_amount = 1_000_000.0;

        let clamped = clamp(params);

        assert_eq!(clamped.financing.equity_amount, clamped.total_costs());
        assert_eq!(clamped.financing.equity_amount, 315_000.0);
    }

    #[test]
    fn test_clamp_leaves_valid_input_untouched() {
        let params = ParameterSet::demo_data();

        assert_eq!(clamp(params.clone()), params);
    }
}
