use std::sync::Arc;

use crate::config::Config;
use crate::error::FetchError;
use crate::transport::{HttpTransport, Transport};

/// Read-only handle on the HenrikDev MMR API, shared by every probe.
pub struct ValorantClient<T = HttpTransport> {
    pub(crate) transport: Arc<T>,
    pub(crate) base_url: String,
    pub(crate) region: String,
}

impl<T> Clone for ValorantClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            base_url: self.base_url.clone(),
            region: self.region.clone(),
        }
    }
}

impl ValorantClient<HttpTransport> {
    /// Build a client backed by a real HTTP transport.
    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        let transport = HttpTransport::new(config.upstream_timeout())?;
        Ok(Self::with_transport(transport, &config.api_base_url, &config.region))
    }
}

impl<T: Transport> ValorantClient<T> {
    pub fn with_transport(transport: T, base_url: &str, region: &str) -> Self {
        Self {
            transport: Arc::new(transport),
            base_url: base_url.trim_end_matches('/').to_string(),
            region: region.trim_matches('/').to_string(),
        }
    }

    /// `target` is substituted verbatim, so `name/tag` composites become two path segments.
    pub(crate) fn mmr_url(&self, target: &str) -> String {
        format!("{}/{}/{}", self.base_url, self.region, target)
    }

    pub fn region(&self) -> &str {
        &self.region
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::watch;

    struct Unused;

    impl Transport for Unused {
        async fn get(
            &self,
            _url: &str,
            _cancel: watch::Receiver<bool>,
        ) -> Result<Vec<u8>, FetchError> {
            unreachable!("url building never hits the transport")
        }
    }

    #[test]
    fn mmr_url_passes_target_through() {
        let client = ValorantClient::with_transport(
            Unused,
            "https://api.henrikdev.xyz/valorant/v2/mmr/",
            "eu",
        );
        assert_eq!(
            client.mmr_url("Foo/1234"),
            "https://api.henrikdev.xyz/valorant/v2/mmr/eu/Foo/1234"
        );
        assert_eq!(
            client.mmr_url("a1b2"),
            "https://api.henrikdev.xyz/valorant/v2/mmr/eu/a1b2"
        );
    }

    #[test]
    fn clones_share_transport() {
        let client = ValorantClient::with_transport(Unused, "http://upstream", "na");
        let clone = client.clone();
        assert!(Arc::ptr_eq(&client.transport, &clone.transport));
        assert_eq!(clone.region(), "na");
    }
}
