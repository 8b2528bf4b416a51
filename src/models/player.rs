use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::ValidationError;
use crate::models::season::{known_periods, null_as_default, PeriodId, PeriodStats};

/// Envelope returned by `GET /valorant/v2/mmr/{region}/{target}`.
#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MmrResponse {
    pub status: u16,
    pub data: PlayerRecord,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct PlayerRecord {
    pub name: String,
    pub tag: String,
    pub puuid: String,
    pub current_data: CurrentData,
    #[serde(deserialize_with = "known_periods")]
    pub by_season: BTreeMap<PeriodId, PeriodStats>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct CurrentData {
    pub currenttier: Option<i64>,
    pub currenttierpatched: Option<String>,
    pub ranking_in_tier: Option<i64>,
    pub mmr_change_to_last_game: Option<i64>,
    pub elo: Option<i64>,
    pub games_needed_for_rating: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub old: bool,
}

impl PlayerRecord {
    /// Decode the upstream MMR document.
    pub fn parse(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let envelope: MmrResponse = serde_json::from_slice(bytes)?;
        Ok(envelope.data)
    }

    /// Rejects records without a usable identity or ranked elo.
    ///
    /// Checks run in order: name, tag, elo. Only the first failure is reported.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.tag.is_empty() {
            return Err(ValidationError::EmptyTag);
        }
        if self.elo() == 0 {
            return Err(ValidationError::ZeroElo);
        }
        Ok(())
    }

    pub fn elo(&self) -> i64 {
        self.current_data.elo.unwrap_or_default()
    }

    pub fn tier(&self) -> i64 {
        self.current_data.currenttier.unwrap_or_default()
    }
}
