use crate::core::zone::is_premium_zone;
use crate::domain::model::{Lot, Money, PaymentPlan, PlanBreakdown, Quote};

/// Price per m² on the avenue.
pub const PREMIUM_UNIT_PRICE: Money = Money::from_centavos(205_00);
/// Price per m² everywhere else.
pub const STANDARD_UNIT_PRICE: Money = Money::from_centavos(190_00);
pub const CASH_DISCOUNT_PERCENT: u32 = 5;

/// Total interest charged over each offered term, in months.
pub struct InterestSchedule;

impl InterestSchedule {
    pub const TABLE: [(u32, u32); 10] = [
        (12, 0),
        (24, 6),
        (36, 9),
        (48, 12),
        (60, 15),
        (72, 18),
        (84, 21),
        (96, 24),
        (108, 26),
        (120, 30),
    ];

    /// Terms not in the table carry no interest.
    pub fn interest_percent(months: u32) -> u32 {
        Self::TABLE
            .iter()
            .find(|(term, _)| *term == months)
            .map_or(0, |(_, percent)| *percent)
    }

    pub fn offers(months: u32) -> bool {
        Self::TABLE.iter().any(|(term, _)| *term == months)
    }

    pub fn terms() -> impl Iterator<Item = u32> {
        Self::TABLE.iter().map(|(term, _)| *term)
    }
}

pub fn unit_price(identifier: &str) -> Money {
    if is_premium_zone(identifier) {
        PREMIUM_UNIT_PRICE
    } else {
        STANDARD_UNIT_PRICE
    }
}

/// Quotes `lot` under `plan`.
///
/// Base and final values are each rounded half-up to the centavo once, from
/// the unrounded `area * unit_price` product. The installment is the rounded
/// final value split over the term. `lot.area` must be positive.
pub fn price(lot: &Lot, plan: PaymentPlan) -> Quote {
    debug_assert!(lot.area > 0.0, "lot {} has non-positive area", lot.id);

    let unit_price = unit_price(&lot.identifier);
    let base_value = unit_price.times_area(lot.area, 1, 1);

    match plan {
        PaymentPlan::Cash => {
            let final_value =
                unit_price.times_area(lot.area, 100 - CASH_DISCOUNT_PERCENT as i64, 100);
            Quote {
                unit_price,
                base_value,
                final_value,
                breakdown: PlanBreakdown::Cash {
                    discount_percent: CASH_DISCOUNT_PERCENT,
                },
            }
        }
        PaymentPlan::Installment(term) => {
            let months = term.get();
            let interest_percent = InterestSchedule::interest_percent(months);
            let final_value =
                unit_price.times_area(lot.area, 100 + interest_percent as i64, 100);
            let installment_value = final_value.scale(1, months as i64);
            Quote {
                unit_price,
                base_value,
                final_value,
                breakdown: PlanBreakdown::Installment {
                    term_months: months,
                    interest_percent,
                    installment_value,
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::LotStatus;
    use proptest::prelude::*;
    use std::num::NonZeroU32;

    fn lot(identifier: &str, area: f64) -> Lot {
        Lot {
            id: 1,
            identifier: identifier.to_string(),
            area,
            status: LotStatus::Available,
        }
    }

    fn months(n: u32) -> PaymentPlan {
        PaymentPlan::Installment(NonZeroU32::new(n).unwrap())
    }

    #[test]
    fn test_cash_quote_on_the_avenue() {
        let quote = price(&lot("QUADRA 31 LOTE 10", 100.0), PaymentPlan::Cash);

        assert_eq!(quote.unit_price, Money::from_centavos(205_00));
        assert_eq!(quote.base_value, Money::from_centavos(20_500_00));
        assert_eq!(quote.final_value, Money::from_centavos(19_475_00));
        assert_eq!(quote.breakdown, PlanBreakdown::Cash { discount_percent: 5 });
    }

    #[test]
    fn test_cash_quote_off_the_avenue() {
        let quote = price(&lot("QUADRA 50 LOTE 10", 100.0), PaymentPlan::Cash);

        assert_eq!(quote.unit_price, Money::from_centavos(190_00));
        assert_eq!(quote.base_value, Money::from_centavos(19_000_00));
        assert_eq!(quote.final_value, Money::from_centavos(18_050_00));
    }

    #[test]
    fn test_installment_quote() {
        let quote = price(&lot("QUADRA 1 LOTE 3", 50.0), months(36));

        assert_eq!(quote.unit_price, Money::from_centavos(205_00));
        assert_eq!(quote.base_value, Money::from_centavos(10_250_00));
        assert_eq!(quote.final_value, Money::from_centavos(11_172_50));
        assert_eq!(
            quote.breakdown,
            PlanBreakdown::Installment {
                term_months: 36,
                interest_percent: 9,
                installment_value: Money::from_centavos(310_35),
            }
        );
    }

    #[test]
    fn test_twelve_months_is_interest_free() {
        let quote = price(&lot("QUADRA 50 LOTE 10", 300.0), months(12));
        assert_eq!(quote.final_value, quote.base_value);
        assert_eq!(
            quote.breakdown,
            PlanBreakdown::Installment {
                term_months: 12,
                interest_percent: 0,
                installment_value: Money::from_centavos(4_750_00),
            }
        );
    }

    #[test]
    fn test_unknown_term_carries_no_interest() {
        let quote = price(&lot("QUADRA 50 LOTE 10", 100.0), months(18));
        assert_eq!(quote.final_value, Money::from_centavos(19_000_00));
        assert!(matches!(
            quote.breakdown,
            PlanBreakdown::Installment {
                interest_percent: 0,
                installment_value,
                ..
            } if installment_value == Money::from_centavos(1_055_56)
        ));
    }

    #[test]
    fn test_fractional_area() {
        // 250.35 m² * 190 = 47566.50
        let quote = price(&lot("QUADRA 40 LOTE 12", 250.35), PaymentPlan::Cash);
        assert_eq!(quote.base_value, Money::from_centavos(47_566_50));
        // 47566.50 * 0.95 = 45188.175 -> 45188.18
        assert_eq!(quote.final_value, Money::from_centavos(45_188_18));
    }

    #[test]
    fn test_final_value_is_not_derived_from_rounded_base() {
        let avenue = lot("QUADRA 31 LOTE 10", 100.001);

        let cash = price(&avenue, PaymentPlan::Cash);
        assert_eq!(cash.base_value, Money::from_centavos(20_500_21));
        assert_eq!(cash.final_value, Money::from_centavos(19_475_19));

        let financed = price(&avenue, months(36));
        assert_eq!(financed.final_value, Money::from_centavos(22_345_22));

        let long = price(&lot("QUADRA 31 LOTE 10", 100.003), months(120));
        assert_eq!(long.final_value, Money::from_centavos(26_650_80));
        assert!(matches!(
            long.breakdown,
            PlanBreakdown::Installment { installment_value, .. }
                if installment_value == Money::from_centavos(222_09)
        ));
    }

    #[test]
    fn test_schedule() {
        assert_eq!(InterestSchedule::interest_percent(120), 30);
        assert_eq!(InterestSchedule::interest_percent(108), 26);
        assert_eq!(InterestSchedule::interest_percent(7), 0);
        assert!(InterestSchedule::offers(60));
        assert!(!InterestSchedule::offers(0));
        assert_eq!(
            InterestSchedule::terms().collect::<Vec<_>>(),
            vec![12, 24, 36, 48, 60, 72, 84, 96, 108, 120]
        );
    }

    proptest! {
        #[test]
        fn price_is_referentially_transparent(
            block in 1u32..80,
            number in 1u32..60,
            area in 1.0f64..5_000.0,
            term in prop::sample::select(InterestSchedule::terms().collect::<Vec<_>>()),
        ) {
            let lot = lot(&format!("QUADRA {} LOTE {}", block, number), area);
            prop_assert_eq!(price(&lot, PaymentPlan::Cash), price(&lot, PaymentPlan::Cash));
            prop_assert_eq!(price(&lot, months(term)), price(&lot, months(term)));
        }

        #[test]
        fn installments_cover_the_financed_total(
            area in 1.0f64..5_000.0,
            term in prop::sample::select(InterestSchedule::terms().collect::<Vec<_>>()),
        ) {
            let quote = price(&lot("QUADRA 50 LOTE 3", area), months(term));
            prop_assert!(quote.final_value >= quote.base_value);
            if let PlanBreakdown::Installment { installment_value, .. } = quote.breakdown {
                let paid = installment_value.centavos() * term as i64;
                prop_assert!((paid - quote.final_value.centavos()).abs() <= term as i64 / 2);
            } else {
                prop_assert!(false, "expected an installment breakdown");
            }
        }
    }
}
