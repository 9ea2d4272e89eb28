//! Core projection engine for yearly investment cashflow projections

use super::schedule::{ResultsSummary, YearRow};
use super::state::ProjectionState;
use crate::params::ParameterSet;

/// Main projection engine
///
/// Deterministic and side-effect free; equal input yields identical output.
/// Validation is the caller's job, so degenerate input produces defined
/// numeric output instead of errors.
pub struct ProjectionEngine {
    parameters: ParameterSet,
}

impl ProjectionEngine {
    /// Create a new projection engine over one parameter set
    pub fn new(parameters: ParameterSet) -> Self {
        Self { parameters }
    }

    /// Run the projection: acquisition aggregates, the year loop, and the
    /// summary KPIs derived from the finished schedule
    pub fn run(&self) -> ResultsSummary {
        let loan0 = (self.parameters.total_costs() - self.parameters.financing.equity_amount).max(0.0);
        let afa_annual = self.parameters.building_share() * self.parameters.tax.depreciation_pct / 100.0;

        let horizon_years = self.parameters.settings.horizon_years;
        let mut state = ProjectionState::new(loan0);
        let mut rows = Vec::with_capacity(horizon_years as usize);

        for _year in 1..=horizon_years {
            state.advance_year();
            rows.push(self.calculate_year(&mut state, loan0, afa_annual));
        }

        self.summarize(rows, loan0, afa_annual)
    }

    /// Calculate one year's row and advance the carried balances
    fn calculate_year(&self, state: &mut ProjectionState, loan0: f64, afa_annual: f64) -> YearRow {
        let acquisition = &self.parameters.acquisition;
        let rent_ops = &self.parameters.rent_ops;
        let financing = &self.parameters.financing;
        let year = state.year;

        // Rent growth starts compounding in year 2; market value below
        // already grows in year 1
        let rent_growth_factor = (1.0 + rent_ops.rent_growth_pct / 100.0).powf((year - 1) as f64);
        let net_rent = rent_ops.cold_rent_monthly * 12.0
            * (1.0 - rent_ops.vacancy_pct / 100.0)
            * rent_growth_factor;

        // Operating costs stay flat across the horizon
        let ops = (rent_ops.owner_costs_monthly + rent_ops.mgmt_monthly + rent_ops.capex_monthly) * 12.0
            + acquisition.other_costs_annual;

        // Constant nominal annuity fixed at origination on the initial
        // principal; interest accrues on the declining balance
        let scheduled_annuity = if loan0 > 0.0 {
            loan0 * (financing.interest_pct + financing.initial_redemption_pct) / 100.0
        } else {
            0.0
        };
        let interest = state.remaining_loan * financing.interest_pct / 100.0;
        let principal = if loan0 > 0.0 {
            (scheduled_annuity - interest).min(state.remaining_loan)
        } else {
            0.0
        };

        // Debt service actually paid: the full scheduled annuity while the
        // balance covers it, a reduced final payment in the payoff year,
        // zero once the loan is retired
        let annuity = interest + principal;

        let cf_before_tax = net_rent - ops - annuity;

        // Deductible: interest and depreciation, never principal
        let tax_base = net_rent - ops - interest - afa_annual;
        let tax_amount = tax_base * self.parameters.tax.marginal_rate_pct / 100.0;

        let cf_after_tax = cf_before_tax - tax_amount;
        state.accumulate_cash(cf_after_tax);

        let market_value =
            acquisition.price_property * (1.0 + rent_ops.value_growth_pct / 100.0).powf(year as f64);

        state.repay(principal);

        // Emitted fields are rounded; the state keeps full precision.
        // remaining_loan reports the post-payment balance for this year.
        YearRow {
            year,
            net_rent: net_rent.round(),
            ops: ops.round(),
            annuity: annuity.round(),
            interest: interest.round(),
            principal: principal.round(),
            tax: tax_amount.round(),
            cf_before_tax: cf_before_tax.round(),
            cf_after_tax: cf_after_tax.round(),
            remaining_loan: state.remaining_loan.round(),
            market_value: market_value.round(),
            cumulated_cash: state.cumulated_cash.round(),
            net_wealth: (market_value - state.remaining_loan + state.cumulated_cash).round(),
        }
    }

    /// Aggregate KPIs and end-of-horizon snapshots from the schedule
    fn summarize(&self, rows: Vec<YearRow>, loan0: f64, afa_annual: f64) -> ResultsSummary {
        let equity = self.parameters.financing.equity_amount;
        let price_property = self.parameters.acquisition.price_property;

        let brutto_yield = if price_property > 0.0 {
            (self.parameters.rent_ops.cold_rent_monthly * 12.0) / price_property
        } else {
            0.0
        };

        let first_year_cf = rows.first().map(|r| r.cf_after_tax).unwrap_or(0.0);
        let last = rows.last();

        // Unbounded return when no equity was committed; consumers
        // special-case the sentinel
        let net_wealth_end = last.map(|r| r.net_wealth).unwrap_or(equity);
        let coc_return = if equity > 0.0 {
            (net_wealth_end - equity) / equity
        } else {
            f64::INFINITY
        };
        let total_profit = if last.is_some() {
            (net_wealth_end - equity).round()
        } else {
            0.0
        };

        let market_value_end = last.map(|r| r.market_value).unwrap_or(0.0);
        let remaining_loan_end = last.map(|r| r.remaining_loan).unwrap_or(loan0);
        let cumulated_cash_end = last.map(|r| r.cumulated_cash).unwrap_or(0.0);

        ResultsSummary {
            ancillary_costs: self.parameters.ancillary_costs().round(),
            total_costs: self.parameters.total_costs().round(),
            equity: equity.round(),
            loan0: loan0.round(),
            afa_annual: afa_annual.round(),
            rows,
            brutto_yield,
            monthly_cf1: (first_year_cf / 12.0).round(),
            coc_return,
            total_profit,
            market_value_end,
            remaining_loan_end,
            cumulated_cash_end,
        }
    }
}
