use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// One competitive act, `e<episode>a<act>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PeriodId {
    E1A1,
    E1A2,
    E1A3,
    E2A1,
    E2A2,
    E2A3,
    E3A1,
    E3A2,
    E3A3,
    E4A1,
    E4A2,
    E4A3,
    E5A1,
    E5A2,
    E5A3,
}

pub const ACTS_PER_EPISODE: u8 = 3;

impl PeriodId {
    /// Every period tracked by the MMR v2 `by_season` block, oldest first.
    pub const ALL: [PeriodId; 15] = [
        PeriodId::E1A1,
        PeriodId::E1A2,
        PeriodId::E1A3,
        PeriodId::E2A1,
        PeriodId::E2A2,
        PeriodId::E2A3,
        PeriodId::E3A1,
        PeriodId::E3A2,
        PeriodId::E3A3,
        PeriodId::E4A1,
        PeriodId::E4A2,
        PeriodId::E4A3,
        PeriodId::E5A1,
        PeriodId::E5A2,
        PeriodId::E5A3,
    ];

    pub fn episode(self) -> u8 {
        self as u8 / ACTS_PER_EPISODE + 1
    }

    pub fn act(self) -> u8 {
        self as u8 % ACTS_PER_EPISODE + 1
    }

    /// Wire key used by the upstream document.
    pub fn key(self) -> &'static str {
        match self {
            PeriodId::E1A1 => "e1a1",
            PeriodId::E1A2 => "e1a2",
            PeriodId::E1A3 => "e1a3",
            PeriodId::E2A1 => "e2a1",
            PeriodId::E2A2 => "e2a2",
            PeriodId::E2A3 => "e2a3",
            PeriodId::E3A1 => "e3a1",
            PeriodId::E3A2 => "e3a2",
            PeriodId::E3A3 => "e3a3",
            PeriodId::E4A1 => "e4a1",
            PeriodId::E4A2 => "e4a2",
            PeriodId::E4A3 => "e4a3",
            PeriodId::E5A1 => "e5a1",
            PeriodId::E5A2 => "e5a2",
            PeriodId::E5A3 => "e5a3",
        }
    }
}

impl fmt::Display for PeriodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPeriod(pub String);

impl fmt::Display for UnknownPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown period `{}`", self.0)
    }
}

impl std::error::Error for UnknownPeriod {}

impl FromStr for PeriodId {
    type Err = UnknownPeriod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PeriodId::ALL
            .into_iter()
            .find(|id| id.key() == s)
            .ok_or_else(|| UnknownPeriod(s.to_string()))
    }
}

impl Serialize for PeriodId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for PeriodId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        key.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PeriodStats {
    pub wins: u32,
    pub number_of_games: u32,
    pub final_rank: Option<i64>,
    pub final_rank_patched: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub act_rank_wins: Vec<ActRankWin>,
    #[serde(deserialize_with = "null_as_default")]
    pub old: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ActRankWin {
    pub patched_tier: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub tier: i64,
}

/// Reads `null` as the type's zero value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads `by_season`, keeping only the tracked periods.
///
/// Keys outside [`PeriodId::ALL`] are dropped and `null` entries count as absent.
pub(crate) fn known_periods<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<PeriodId, PeriodStats>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<BTreeMap<String, Option<PeriodStats>>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(key, stats)| Some((key.parse::<PeriodId>().ok()?, stats?)))
        .collect())
}
