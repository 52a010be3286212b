//! KPI tiles
//!
//! The dashboard header shows five tiles. Four of them count a status and
//! double as a shortcut filter; the fifth shows outstanding premium and
//! selects nothing.

use serde::{Deserialize, Serialize};

use crate::aggregate::AggregateResult;
use crate::record::PolicyStatus;

/// One of the summary tiles, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KpiTile {
    Booked,
    Rejected,
    InProcess,
    Pending,
    OutstandingPremium,
}

impl KpiTile {
    pub const ALL: [KpiTile; 5] = [
        KpiTile::Booked,
        KpiTile::Rejected,
        KpiTile::InProcess,
        KpiTile::Pending,
        KpiTile::OutstandingPremium,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            KpiTile::Booked => "Booked",
            KpiTile::Rejected => "Rejected",
            KpiTile::InProcess => "In Process",
            KpiTile::Pending => "Pending",
            KpiTile::OutstandingPremium => "Outstanding Premium",
        }
    }

    /// Status the tile filters on; `None` for the premium tile
    pub fn status(&self) -> Option<PolicyStatus> {
        match self {
            KpiTile::Booked => Some(PolicyStatus::Booked),
            KpiTile::Rejected => Some(PolicyStatus::Rejected),
            KpiTile::InProcess => Some(PolicyStatus::InProcess),
            KpiTile::Pending => Some(PolicyStatus::Pending),
            KpiTile::OutstandingPremium => None,
        }
    }

    /// Tile for a status, if that status has one
    pub fn for_status(status: PolicyStatus) -> Option<KpiTile> {
        KpiTile::ALL.into_iter().find(|tile| tile.status() == Some(status))
    }

    /// Display value of this tile for `stats`
    pub fn value(&self, stats: &AggregateResult) -> String {
        match self {
            KpiTile::Booked => stats.booked.to_string(),
            KpiTile::Rejected => stats.rejected.to_string(),
            KpiTile::InProcess => stats.in_process.to_string(),
            KpiTile::Pending => stats.pending.to_string(),
            KpiTile::OutstandingPremium => stats.outstanding_premium.format_grouped(),
        }
    }

    /// All five cards for `stats`
    pub fn cards(stats: &AggregateResult) -> Vec<KpiCard> {
        KpiTile::ALL
            .into_iter()
            .map(|tile| KpiCard {
                tile,
                title: tile.title(),
                value: tile.value(stats),
            })
            .collect()
    }
}

/// A rendered tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KpiCard {
    pub tile: KpiTile,
    pub title: &'static str,
    pub value: String,
}

impl std::str::FromStr for KpiTile {
    type Err = crate::error::DashboardError;

    /// Accepts a tile title or the status key ("InProcess", "outstanding")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("outstanding") {
            return Ok(KpiTile::OutstandingPremium);
        }
        KpiTile::ALL
            .into_iter()
            .find(|tile| {
                tile.title().eq_ignore_ascii_case(trimmed)
                    || tile
                        .status()
                        .is_some_and(|status| status.as_str().eq_ignore_ascii_case(trimmed))
            })
            .ok_or_else(|| crate::error::DashboardError::unknown_label("KPI tile", trimmed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_premium_tile_has_no_status() {
        assert_eq!(KpiTile::OutstandingPremium.status(), None);
        assert_eq!(KpiTile::InProcess.status(), Some(PolicyStatus::InProcess));
    }

    #[test]
    fn test_for_status() {
        assert_eq!(KpiTile::for_status(PolicyStatus::Pending), Some(KpiTile::Pending));
        assert_eq!(KpiTile::for_status(PolicyStatus::Hold), None);
    }

    #[test]
    fn test_parse_tile() {
        assert_eq!("In Process".parse::<KpiTile>().unwrap(), KpiTile::InProcess);
        assert_eq!("inprocess".parse::<KpiTile>().unwrap(), KpiTile::InProcess);
        assert_eq!("outstanding".parse::<KpiTile>().unwrap(), KpiTile::OutstandingPremium);
        assert!("Hold".parse::<KpiTile>().is_err());
    }
}
