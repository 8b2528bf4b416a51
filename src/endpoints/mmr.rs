use tokio::sync::watch;
use tracing::debug;

use crate::client::ValorantClient;
use crate::error::{FetchError, ProbeError};
use crate::models::player::PlayerRecord;
use crate::transport::Transport;

impl<T: Transport> ValorantClient<T> {
    /// Raw MMR v2 document for `target`. One request, no retries.
    pub async fn fetch_mmr(
        &self,
        target: &str,
        cancel: watch::Receiver<bool>,
    ) -> Result<Vec<u8>, FetchError> {
        let url = self.mmr_url(target);
        debug!(%url, "fetching mmr");
        self.transport.get(&url, cancel).await
    }

    /// Fetch, decode and validate the ranked record for `target`.
    pub async fn player(
        &self,
        target: &str,
        cancel: watch::Receiver<bool>,
    ) -> Result<PlayerRecord, ProbeError> {
        let body = self.fetch_mmr(target, cancel).await?;
        let record = PlayerRecord::parse(&body)?;
        record.validate()?;
        Ok(record)
    }
}
