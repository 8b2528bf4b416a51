//! Per-request probe pipeline.
//!
//! Every probe builds its own [`Registry`] holding exactly four gauge
//! families. Nothing here is shared between requests, so two scrapes for
//! different players can never see each other's series.

use prometheus_client::encoding::text::encode;
use prometheus_client::encoding::EncodeLabelSet;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::registry::Registry;
use tokio::sync::watch;

use crate::aggregate::{aggregate, AggregateStats};
use crate::client::ValorantClient;
use crate::error::ProbeError;
use crate::models::player::PlayerRecord;
use crate::transport::Transport;

pub const OPENMETRICS_CONTENT_TYPE: &str =
    "application/openmetrics-text; version=1.0.0; charset=utf-8";

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct PlayerLabels {
    pub username: String,
    pub tagline: String,
}

#[derive(Debug)]
pub struct ProbeMetrics {
    elo: Family<PlayerLabels, Gauge>,
    tier: Family<PlayerLabels, Gauge>,
    games: Family<PlayerLabels, Gauge>,
    wins: Family<PlayerLabels, Gauge>,
}

impl ProbeMetrics {
    pub fn register(registry: &mut Registry) -> Self {
        let metrics = Self {
            elo: Family::default(),
            tier: Family::default(),
            games: Family::default(),
            wins: Family::default(),
        };
        registry.register("valorant_elo", "Current elo of player", metrics.elo.clone());
        registry.register("valorant_tier", "Current tier of player", metrics.tier.clone());
        registry.register("valorant_games", "Number of games played", metrics.games.clone());
        registry.register("valorant_wins", "Number of games won", metrics.wins.clone());
        metrics
    }

    pub fn observe(&self, record: &PlayerRecord, totals: &AggregateStats) {
        let labels = PlayerLabels {
            username: record.name.clone(),
            tagline: record.tag.clone(),
        };
        self.elo.get_or_create(&labels).set(record.elo());
        self.tier.get_or_create(&labels).set(record.tier());
        self.games.get_or_create(&labels).set(saturating_i64(totals.total_games));
        self.wins.get_or_create(&labels).set(saturating_i64(totals.total_wins));
    }
}

fn saturating_i64(v: u64) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}

/// Registry populated from one validated record.
pub fn snapshot(record: &PlayerRecord) -> Registry {
    let totals = aggregate(&record.by_season);
    let mut registry = Registry::default();
    let metrics = ProbeMetrics::register(&mut registry);
    metrics.observe(record, &totals);
    registry
}

/// Run the whole probe for `target`.
///
/// The registry only exists once the record has been fetched and validated;
/// any earlier failure returns before a gauge is created.
pub async fn run<T: Transport>(
    client: &ValorantClient<T>,
    target: Option<&str>,
    cancel: watch::Receiver<bool>,
) -> Result<Registry, ProbeError> {
    let target = target.filter(|t| !t.is_empty()).ok_or(ProbeError::MissingTarget)?;
    let record = client.player(target, cancel).await?;
    Ok(snapshot(&record))
}

pub fn render(registry: &Registry) -> Result<String, std::fmt::Error> {
    let mut buffer = String::new();
    encode(&mut buffer, registry)?;
    Ok(buffer)
}
