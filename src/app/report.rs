use crate::core::catalog::InventorySummary;
use crate::core::format::{format_area, format_currency};
use crate::core::pricing::InterestSchedule;
use crate::core::{Lot, PlanBreakdown, Quote};
use std::fmt::Write;

pub fn render_lot_table(lots: &[&Lot]) -> String {
    let width = lots
        .iter()
        .map(|lot| lot.identifier.chars().count())
        .max()
        .unwrap_or(0)
        .max("Lote".len());

    let mut out = String::new();
    let _ = writeln!(out, "{:>5}  {:<width$}  {:>10}  Status", "ID", "Lote", "Área (m²)");
    for lot in lots {
        let _ = writeln!(
            out,
            "{:>5}  {:<width$}  {:>10}  {}",
            lot.id,
            lot.identifier,
            format_area(lot.area),
            lot.status
        );
    }
    out
}

pub fn render_summary(summary: &InventorySummary) -> String {
    format!(
        "Disponíveis: {} | Vendidos: {} | Total: {}",
        summary.available, summary.sold, summary.total
    )
}

pub fn render_terms() -> String {
    let mut out = String::from("Prazo (meses)  Juros totais\n");
    for (term, percent) in InterestSchedule::TABLE {
        let _ = writeln!(out, "{:>13}  {:>11}%", term, percent);
    }
    out
}

pub fn render_quote(lot: &Lot, quote: &Quote) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({} m²)", lot.identifier, format_area(lot.area));
    let _ = writeln!(out, "Valor do m²: R$ {}", format_currency(quote.unit_price));
    let _ = writeln!(out, "Valor base: R$ {}", format_currency(quote.base_value));
    match quote.breakdown {
        PlanBreakdown::Cash { discount_percent } => {
            let _ = writeln!(out, "Desconto: {}%", discount_percent);
            let _ = writeln!(out, "Valor final: R$ {}", format_currency(quote.final_value));
        }
        PlanBreakdown::Installment {
            term_months,
            interest_percent,
            installment_value,
        } => {
            let _ = writeln!(out, "Prazo: {} meses", term_months);
            let _ = writeln!(out, "Juros: {}%", interest_percent);
            let _ = writeln!(
                out,
                "Valor total a prazo: R$ {}",
                format_currency(quote.final_value)
            );
            let _ = writeln!(
                out,
                "Parcela mensal: R$ {}",
                format_currency(installment_value)
            );
        }
    }
    out
}
