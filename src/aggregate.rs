use std::collections::BTreeMap;

use crate::models::season::{PeriodId, PeriodStats};

/// Career totals across every tracked period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateStats {
    pub total_games: u64,
    pub total_wins: u64,
}

impl AggregateStats {
    fn add(self, period: &PeriodStats) -> Self {
        Self {
            total_games: self.total_games + u64::from(period.number_of_games),
            total_wins: self.total_wins + u64::from(period.wins),
        }
    }
}

/// Sums games and wins over [`PeriodId::ALL`]. Absent periods count as zero.
pub fn aggregate(periods: &BTreeMap<PeriodId, PeriodStats>) -> AggregateStats {
    PeriodId::ALL
        .iter()
        .filter_map(|id| periods.get(id))
        .fold(AggregateStats::default(), AggregateStats::add)
}
