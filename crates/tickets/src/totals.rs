use serde::{Deserialize, Serialize};

use crate::category::TicketCategory;
use crate::line::TicketLine;

/// Per-category ticket quantities for one purchase attempt.
///
/// All three categories are always present; absent categories count as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotals {
    pub adult: u64,
    pub child: u64,
    pub infant: u64,
}

impl CategoryTotals {
    pub const fn new(adult: u64, child: u64, infant: u64) -> Self {
        Self {
            adult,
            child,
            infant,
        }
    }

    /// Sum quantities per category. Line order and repeated categories do not
    /// affect the result.
    pub fn from_lines(lines: &[TicketLine]) -> Self {
        lines.iter().collect()
    }

    pub fn get(&self, category: TicketCategory) -> u64 {
        match category {
            TicketCategory::Adult => self.adult,
            TicketCategory::Child => self.child,
            TicketCategory::Infant => self.infant,
        }
    }

    /// Total quantity across every category.
    pub fn total(&self) -> u64 {
        self.iter().fold(0u64, |acc, (_, n)| acc.saturating_add(n))
    }

    pub fn iter(&self) -> impl Iterator<Item = (TicketCategory, u64)> + '_ {
        TicketCategory::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    fn slot_mut(&mut self, category: TicketCategory) -> &mut u64 {
        match category {
            TicketCategory::Adult => &mut self.adult,
            TicketCategory::Child => &mut self.child,
            TicketCategory::Infant => &mut self.infant,
        }
    }

    fn add(&mut self, line: &TicketLine) {
        let slot = self.slot_mut(line.category());
        *slot = slot.saturating_add(u64::from(line.quantity()));
    }
}

impl<'a> FromIterator<&'a TicketLine> for CategoryTotals {
    fn from_iter<I: IntoIterator<Item = &'a TicketLine>>(iter: I) -> Self {
        let mut totals = CategoryTotals::default();
        for line in iter {
            totals.add(line);
        }
        totals
    }
}

impl<'a> Extend<&'a TicketLine> for CategoryTotals {
    fn extend<I: IntoIterator<Item = &'a TicketLine>>(&mut self, iter: I) {
        for line in iter {
            self.add(line);
        }
    }
}
