use crate::utils::error::{LotError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_positive_real, Validate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::num::NonZeroU32;

/// Monetary amount in centavos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_centavos(centavos: i64) -> Self {
        Money(centavos)
    }

    /// Nearest centavo, halves away from zero.
    pub fn from_reais(value: f64) -> Self {
        Money((value * 100.0).round() as i64)
    }

    pub const fn centavos(self) -> i64 {
        self.0
    }

    pub fn as_reais(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// `self * numerator / denominator`, rounded half-up to the centavo.
    pub(crate) fn scale(self, numerator: i64, denominator: i64) -> Money {
        debug_assert!(denominator > 0);
        Money(div_half_up(self.0 as i128 * numerator as i128, denominator as i128) as i64)
    }

    /// `self * area * numerator / denominator` with a single half-up rounding
    /// at the end. `area` is taken to the nearest millionth of a square meter,
    /// so the intermediate product is exact.
    pub(crate) fn times_area(self, area: f64, numerator: i64, denominator: i64) -> Money {
        debug_assert!(denominator > 0);
        let area_micros = (area * AREA_MICROS as f64).round() as i128;
        let product = self.0 as i128 * area_micros * numerator as i128;
        Money(div_half_up(product, denominator as i128 * AREA_MICROS) as i64)
    }
}

/// Fixed-point scale for areas in [`Money::times_area`].
const AREA_MICROS: i128 = 1_000_000;

fn div_half_up(n: i128, d: i128) -> i128 {
    let q = (2 * n.abs() + d) / (2 * d);
    if n < 0 {
        -q
    } else {
        q
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::core::format::format_currency(*self))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_reais())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LotStatus {
    Available,
    Sold,
}

impl LotStatus {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "disponível" | "disponivel" | "available" => Some(LotStatus::Available),
            "vendido" | "sold" => Some(LotStatus::Sold),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LotStatus::Available => "Disponível",
            LotStatus::Sold => "Vendido",
        }
    }
}

impl fmt::Display for LotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl<'de> Deserialize<'de> for LotStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        LotStatus::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown lot status '{}'", raw)))
    }
}

impl Serialize for LotStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// A parcel as delivered by the inventory service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lot {
    pub id: u64,
    #[serde(rename = "lote", alias = "identifier")]
    pub identifier: String,
    /// Square meters.
    pub area: f64,
    pub status: LotStatus,
}

impl Lot {
    pub fn is_available(&self) -> bool {
        self.status == LotStatus::Available
    }
}

impl Validate for Lot {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("lote", &self.identifier).map_err(|_| {
            LotError::ValidationError {
                message: format!("lot {} has an empty identifier", self.id),
            }
        })?;
        validate_positive_real("area", self.area)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentPlan {
    Cash,
    Installment(NonZeroU32),
}

impl PaymentPlan {
    /// Builds an installment plan from user input, accepting only offered terms.
    pub fn installment(months: u32) -> Result<Self> {
        match NonZeroU32::new(months) {
            Some(term) if crate::core::pricing::InterestSchedule::offers(months) => {
                Ok(PaymentPlan::Installment(term))
            }
            _ => Err(LotError::UnsupportedTerm { months }),
        }
    }

    pub fn from_term(term: Option<u32>) -> Result<Self> {
        term.map_or(Ok(PaymentPlan::Cash), PaymentPlan::installment)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "plan", rename_all = "snake_case")]
pub enum PlanBreakdown {
    Cash {
        discount_percent: u32,
    },
    Installment {
        term_months: u32,
        /// Total interest over the whole term, not a monthly rate.
        interest_percent: u32,
        installment_value: Money,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub unit_price: Money,
    pub base_value: Money,
    pub final_value: Money,
    #[serde(flatten)]
    pub breakdown: PlanBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_synonyms_are_case_insensitive() {
        assert_eq!(LotStatus::parse("Disponível"), Some(LotStatus::Available));
        assert_eq!(LotStatus::parse("DISPONÍVEL"), Some(LotStatus::Available));
        assert_eq!(LotStatus::parse(" disponivel "), Some(LotStatus::Available));
        assert_eq!(LotStatus::parse("Vendido"), Some(LotStatus::Sold));
        assert_eq!(LotStatus::parse("SOLD"), Some(LotStatus::Sold));
        assert_eq!(LotStatus::parse("reservado"), None);
    }

    #[test]
    fn test_lot_deserializes_from_service_shape() {
        let lot: Lot = serde_json::from_str(
            r#"{"id": 3, "lote": "QUADRA 12 LOTE 04", "area": 250.5, "status": "Disponível"}"#,
        )
        .unwrap();

        assert_eq!(lot.id, 3);
        assert_eq!(lot.identifier, "QUADRA 12 LOTE 04");
        assert_eq!(lot.area, 250.5);
        assert!(lot.is_available());
    }

    #[test]
    fn test_lot_rejects_unknown_status() {
        let result: std::result::Result<Lot, _> = serde_json::from_str(
            r#"{"id": 3, "lote": "QUADRA 1 LOTE 1", "area": 200, "status": "reservado"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_lot_validation() {
        let mut lot = Lot {
            id: 1,
            identifier: "QUADRA 1 LOTE 1".to_string(),
            area: 200.0,
            status: LotStatus::Sold,
        };
        assert!(lot.validate().is_ok());

        lot.area = 0.0;
        assert!(lot.validate().is_err());

        lot.area = 200.0;
        lot.identifier = "   ".to_string();
        assert!(lot.validate().is_err());
    }

    #[test]
    fn test_money_half_up_scaling() {
        assert_eq!(Money::from_centavos(1_117_250).scale(1, 36).centavos(), 31_035);
        assert_eq!(Money::from_centavos(5).scale(1, 2).centavos(), 3);
        assert_eq!(Money::from_centavos(-5).scale(1, 2).centavos(), -3);
        assert_eq!(Money::from_reais(19_475.0).centavos(), 1_947_500);
    }

    #[test]
    fn test_times_area_rounds_once() {
        let unit = Money::from_centavos(205_00);
        // 100.001 * 205 = 20500.205
        assert_eq!(unit.times_area(100.001, 1, 1).centavos(), 2_050_021);
        // 20500.205 * 0.95 = 19475.19475, not 20500.21 * 0.95 = 19475.1995
        assert_eq!(unit.times_area(100.001, 95, 100).centavos(), 1_947_519);
        assert_eq!(unit.times_area(100.0, 95, 100).centavos(), 1_947_500);
    }

    #[test]
    fn test_installment_plan_accepts_only_offered_terms() {
        assert!(PaymentPlan::installment(36).is_ok());
        assert!(matches!(
            PaymentPlan::installment(0),
            Err(LotError::UnsupportedTerm { months: 0 })
        ));
        assert!(matches!(
            PaymentPlan::installment(30),
            Err(LotError::UnsupportedTerm { months: 30 })
        ));
        assert_eq!(PaymentPlan::from_term(None).unwrap(), PaymentPlan::Cash);
    }
}
