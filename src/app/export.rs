use crate::core::format::format_currency;
use crate::core::{Lot, PlanBreakdown, Quote, Storage};
use crate::utils::error::{LotError, Result};
use crate::utils::validation::validate_file_extension;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct QuoteRow<'a> {
    id: u64,
    lote: &'a str,
    area: f64,
    valor_m2: String,
    valor_base: String,
    valor_final: String,
    desconto_percent: Option<u32>,
    prazo_meses: Option<u32>,
    juros_percent: Option<u32>,
    parcela: Option<String>,
}

impl<'a> QuoteRow<'a> {
    fn new(lot: &'a Lot, quote: &Quote) -> Self {
        let mut row = QuoteRow {
            id: lot.id,
            lote: &lot.identifier,
            area: lot.area,
            valor_m2: format_currency(quote.unit_price),
            valor_base: format_currency(quote.base_value),
            valor_final: format_currency(quote.final_value),
            desconto_percent: None,
            prazo_meses: None,
            juros_percent: None,
            parcela: None,
        };
        match quote.breakdown {
            PlanBreakdown::Cash { discount_percent } => row.desconto_percent = Some(discount_percent),
            PlanBreakdown::Installment {
                term_months,
                interest_percent,
                installment_value,
            } => {
                row.prazo_meses = Some(term_months);
                row.juros_percent = Some(interest_percent);
                row.parcela = Some(format_currency(installment_value));
            }
        }
        row
    }
}

/// Semicolon-separated, so the pt-BR decimal commas stay inside their cells.
pub fn quotes_to_csv(quotes: &[(&Lot, Quote)]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    for (lot, quote) in quotes {
        writer.serialize(QuoteRow::new(lot, quote))?;
    }

    writer.into_inner().map_err(|e| LotError::IoError(e.into_error()))
}

pub async fn export_quotes<S: Storage>(
    storage: &S,
    path: &str,
    quotes: &[(&Lot, Quote)],
) -> Result<usize> {
    validate_file_extension("output", path, &["csv"])?;

    let data = quotes_to_csv(quotes)?;
    tracing::debug!("Writing {} quotes ({} bytes) to {}", quotes.len(), data.len(), path);
    storage.write_file(path, &data).await?;
    Ok(quotes.len())
}
