//! Pricing and seat allocation over aggregated totals.
//!
//! Both functions are pure and total. Arithmetic saturates at `u64::MAX`.

use crate::config::{PriceTable, SeatExemptSet};
use crate::totals::CategoryTotals;

/// Σ over categories of `quantity * unit price`.
pub fn total_price(totals: &CategoryTotals, prices: &PriceTable) -> u64 {
    totals.iter().fold(0u64, |acc, (category, quantity)| {
        acc.saturating_add(quantity.saturating_mul(prices.unit_price(category)))
    })
}

/// Σ of quantities over categories that occupy a seat.
pub fn seats_to_reserve(totals: &CategoryTotals, exempt: &SeatExemptSet) -> u64 {
    totals
        .iter()
        .filter(|(category, _)| !exempt.contains(*category))
        .fold(0u64, |acc, (_, quantity)| acc.saturating_add(quantity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::TicketCategory;
    use crate::line::TicketLine;
    use proptest::prelude::*;

    #[test]
    fn prices_mixed_purchase() {
        let totals = CategoryTotals::new(3, 1, 2);
        assert_eq!(total_price(&totals, &PriceTable::default()), 70);
        assert_eq!(seats_to_reserve(&totals, &SeatExemptSet::default()), 4);
    }

    #[test]
    fn prices_repeated_categories() {
        let totals = CategoryTotals::new(6, 3, 6);
        assert_eq!(total_price(&totals, &PriceTable::default()), 150);
        assert_eq!(seats_to_reserve(&totals, &SeatExemptSet::default()), 9);
    }

    #[test]
    fn without_exemptions_every_ticket_takes_a_seat() {
        let totals = CategoryTotals::new(8, 0, 6);
        assert_eq!(seats_to_reserve(&totals, &SeatExemptSet::none()), 14);
        assert_eq!(seats_to_reserve(&totals, &SeatExemptSet::default()), 8);
    }

    #[test]
    fn custom_price_table_is_honoured() {
        let prices = PriceTable::new(25, 15, 5);
        let totals = CategoryTotals::new(2, 1, 1);
        assert_eq!(total_price(&totals, &prices), 70);
    }

    #[test]
    fn arithmetic_saturates() {
        let totals = CategoryTotals::new(u64::MAX, 1, 0);
        let prices = PriceTable::new(2, 1, 0);
        assert_eq!(total_price(&totals, &prices), u64::MAX);
        assert_eq!(seats_to_reserve(&totals, &SeatExemptSet::none()), u64::MAX);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: splitting one line into several lines of the same category
        /// never changes the price or the seat count.
        #[test]
        fn price_and_seats_ignore_how_lines_are_split(
            adult in 0u32..50,
            child in 0u32..50,
            infant in 0u32..50,
            adult_cut in 0u32..50
        ) {
            let adult_cut = adult_cut.min(adult);
            let whole = [
                TicketLine::new(TicketCategory::Adult, adult),
                TicketLine::new(TicketCategory::Child, child),
                TicketLine::new(TicketCategory::Infant, infant),
            ];
            let split = [
                TicketLine::new(TicketCategory::Infant, infant),
                TicketLine::new(TicketCategory::Adult, adult_cut),
                TicketLine::new(TicketCategory::Child, child),
                TicketLine::new(TicketCategory::Adult, adult - adult_cut),
            ];

            let prices = PriceTable::default();
            let exempt = SeatExemptSet::default();
            let a = CategoryTotals::from_lines(&whole);
            let b = CategoryTotals::from_lines(&split);

            prop_assert_eq!(total_price(&a, &prices), total_price(&b, &prices));
            prop_assert_eq!(seats_to_reserve(&a, &exempt), seats_to_reserve(&b, &exempt));
            prop_assert_eq!(
                total_price(&a, &prices),
                u64::from(adult) * 20 + u64::from(child) * 10
            );
        }
    }
}
