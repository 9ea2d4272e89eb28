//! Report surfaces: CSV schedule exports and the plain-text analysis summary

use std::io;

use chrono::Local;

use crate::params::ParameterSet;
use crate::projection::ResultsSummary;

/// Write the cashflow schedule as CSV, one line per projected year
pub fn write_schedule_csv<W: io::Write>(writer: W, results: &ResultsSummary) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record([
        "Jahr",
        "Netto-Miete",
        "Bewirtschaftung",
        "Steuern",
        "CF vor Steuer",
        "CF nach Steuer",
        "Nettovermögen",
    ])?;

    for row in &results.rows {
        csv_writer.write_record([
            row.year.to_string(),
            whole_units(row.net_rent),
            whole_units(row.ops),
            whole_units(row.tax),
            whole_units(row.cf_before_tax),
            whole_units(row.cf_after_tax),
            whole_units(row.net_wealth),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write the loan amortization schedule as CSV
pub fn write_amortization_csv<W: io::Write>(
    writer: W,
    results: &ResultsSummary,
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["Jahr", "Annuität", "Zinsen", "Tilgung", "Restschuld"])?;

    for row in &results.rows {
        csv_writer.write_record([
            row.year.to_string(),
            whole_units(row.annuity),
            whole_units(row.interest),
            whole_units(row.principal),
            whole_units(row.remaining_loan),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Render the shareable analysis summary: KPIs, object data, financing,
/// and assumptions, in the product's German wording
pub fn text_summary(parameters: &ParameterSet, results: &ResultsSummary) -> String {
    let mut out = String::new();

    out.push_str("PrimeRendit Immobilien-Analyse\n");
    out.push_str("=============================\n\n");

    out.push_str("📊 KENNZAHLEN:\n");
    out.push_str(&format!("• Brutto-Rendite: {:.2}%\n", results.brutto_yield * 100.0));
    out.push_str(&format!("• Cashflow p.M. (Jahr 1): {} €\n", german_units(results.monthly_cf1)));
    out.push_str(&format!("• Eigenkapital eingesetzt: {} €\n", german_units(results.equity)));
    out.push_str(&format!("• EK-Rendite gesamt: {}\n", coc_return_display(results.coc_return)));
    out.push_str(&format!("• Marktwert (Ende): {} €\n", german_units(results.market_value_end)));
    out.push_str(&format!("• Restschuld (Ende): {} €\n\n", german_units(results.remaining_loan_end)));

    out.push_str("🏠 OBJEKTDATEN:\n");
    out.push_str(&format!(
        "• Kaufpreis Immobilie: {} €\n",
        german_units(parameters.acquisition.price_property)
    ));
    out.push_str(&format!(
        "• Kaltmiete p.M.: {} €\n",
        german_units(parameters.rent_ops.cold_rent_monthly)
    ));
    out.push_str(&format!(
        "• Eigenkapital-Einsatz: {} €\n\n",
        german_units(parameters.financing.equity_amount)
    ));

    out.push_str("💰 FINANZIERUNG:\n");
    out.push_str(&format!("• Sollzins: {}% p.a.\n", parameters.financing.interest_pct));
    out.push_str(&format!(
        "• Anfangstilgung: {}% p.a.\n",
        parameters.financing.initial_redemption_pct
    ));
    out.push_str(&format!(
        "• Planungshorizont: {} Jahre\n\n",
        parameters.settings.horizon_years
    ));

    out.push_str("📈 ANNAHMEN:\n");
    out.push_str(&format!("• Leerstand: {}%\n", parameters.rent_ops.vacancy_pct));
    out.push_str(&format!("• Verwaltung: {} €/Monat\n", parameters.rent_ops.mgmt_monthly));
    out.push_str(&format!("• Instandhaltung: {} €/Monat\n", parameters.rent_ops.capex_monthly));
    out.push_str(&format!("• Mietsteigerung: {}% p.a.\n", parameters.rent_ops.rent_growth_pct));
    out.push_str(&format!("• Wertsteigerung: {}% p.a.\n", parameters.rent_ops.value_growth_pct));
    out.push_str(&format!("• Grenzsteuersatz: {}%\n", parameters.tax.marginal_rate_pct));
    out.push_str(&format!("• AfA-Satz: {}%\n", parameters.tax.depreciation_pct));
    out.push_str(&format!(
        "• AfA-Basis (Gebäudewert): {} €\n\n",
        german_units(parameters.building_share())
    ));

    out.push_str(&format!(
        "Erstellt mit PrimeRendit Kalkulator am {}\n",
        Local::now().format("%d.%m.%Y")
    ));
    out.push_str("Alle Angaben ohne Gewähr.\n");

    out
}

/// Total return on equity as a percentage, `∞` for the zero-equity sentinel
fn coc_return_display(coc_return: f64) -> String {
    if coc_return.is_finite() {
        format!("{:.1}%", coc_return * 100.0)
    } else {
        "∞".to_string()
    }
}

/// Whole-unit value for CSV cells
fn whole_units(value: f64) -> String {
    (value.round() as i64).to_string()
}

/// Whole-unit value with German thousands grouping (31500 -> "31.500")
fn german_units(value: f64) -> String {
    let whole = value.round() as i64;
    let digits = whole.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if whole < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::ProjectionEngine;

    fn demo_results() -> ResultsSummary {
        ProjectionEngine::new(ParameterSet::demo_data()).run()
    }

    fn csv_lines(buffer: Vec<u8>) -> Vec<String> {
        String::from_utf8(buffer)
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn test_schedule_csv_layout() {
        let results = demo_results();
        let mut buffer = Vec::new();
        write_schedule_csv(&mut buffer, &results).unwrap();

        let lines = csv_lines(buffer);
        assert_eq!(lines.len(), 11); // header + 10 years
        assert_eq!(
            lines[0],
            "Jahr,Netto-Miete,Bewirtschaftung,Steuern,CF vor Steuer,CF nach Steuer,Nettovermögen"
        );
        assert_eq!(lines[1], "1,13968,1500,-2853,-4542,-1689,24981");
    }

    #[test]
    fn test_amortization_csv_layout() {
        let results = demo_results();
        let mut buffer = Vec::new();
        write_amortization_csv(&mut buffer, &results).unwrap();

        let lines = csv_lines(buffer);
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "Jahr,Annuität,Zinsen,Tilgung,Restschuld");
        assert_eq!(lines[1], "1,17010,11340,5670,277830");
    }

    #[test]
    fn test_text_summary_kpi_lines() {
        let parameters = ParameterSet::demo_data();
        let results = ProjectionEngine::new(parameters.clone()).run();
        let summary = text_summary(&parameters, &results);

        assert!(summary.contains("PrimeRendit Immobilien-Analyse"));
        assert!(summary.contains("• Brutto-Rendite: 4.80%"));
        assert!(summary.contains("• Cashflow p.M. (Jahr 1): -141 €"));
        assert!(summary.contains("• Eigenkapital eingesetzt: 31.500 €"));
        assert!(summary.contains("• Sollzins: 4% p.a."));
        assert!(summary.contains("• AfA-Basis (Gebäudewert): 198.000 €"));
        assert!(summary.contains("Alle Angaben ohne Gewähr."));
    }

    #[test]
    fn test_text_summary_renders_infinite_return() {
        let mut parameters = ParameterSet::demo_data();
        parameters.financing.equity_amount = 0.0;
        let results = ProjectionEngine::new(parameters.clone()).run();
        let summary = text_summary(&parameters, &results);

        assert!(summary.contains("• EK-Rendite gesamt: ∞"));
    }

    #[test]
    fn test_german_units_grouping() {
        assert_eq!(german_units(0.0), "0");
        assert_eq!(german_units(999.0), "999");
        assert_eq!(german_units(31_500.0), "31.500");
        assert_eq!(german_units(1_234_567.0), "1.234.567");
        assert_eq!(german_units(-141.0), "-141");
    }
}
