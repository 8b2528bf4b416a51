use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use tokio::sync::watch;

use crate::error::FetchError;

/// Outbound "GET these bytes" capability used by [`ValorantClient`](crate::ValorantClient).
///
/// Implementations must stop waiting on the upstream as soon as `cancel`
/// flips to `true` (or its sender goes away) and return [`FetchError::Cancelled`].
pub trait Transport: Send + Sync + 'static {
    fn get(
        &self,
        url: &str,
        cancel: watch::Receiver<bool>,
    ) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send;
}

/// Creates a per-request cancellation pair.
///
/// The guard flips the flag when dropped, so holding it inside a request
/// future ties the outbound fetch to the lifetime of that request.
pub fn cancellation() -> (CancelGuard, watch::Receiver<bool>) {
    let (tx, rx) = watch::channel(false);
    (CancelGuard(tx), rx)
}

pub struct CancelGuard(watch::Sender<bool>);

impl CancelGuard {
    pub fn cancel(&self) {
        let _ = self.0.send(true);
    }
}

impl Drop for CancelGuard {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Resolves once the request has been cancelled.
pub async fn cancelled(mut cancel: watch::Receiver<bool>) {
    // A dropped sender means the owning request is gone as well.
    let _ = cancel.wait_for(|cancelled| *cancelled).await;
}

/// Default transport backed by a shared `reqwest::Client`.
#[derive(Clone)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str, cancel: watch::Receiver<bool>) -> Result<Vec<u8>, FetchError> {
        let request = async {
            let resp = self.http.get(url).send().await?;
            let status = resp.status();
            if !status.is_success() {
                return Err(FetchError::ApiError {
                    status: status.as_u16(),
                    message: status
                        .canonical_reason()
                        .unwrap_or("unexpected status")
                        .to_string(),
                });
            }
            Ok(resp.bytes().await?.to_vec())
        };

        tokio::select! {
            biased;
            _ = cancelled(cancel) => Err(FetchError::Cancelled),
            result = request => result,
        }
    }
}
