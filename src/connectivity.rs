//! Reachability check over HTTP.

use tracing::debug;

use crate::traits::Connectivity;

/// Considers the network up when a `HEAD` to `check_url` gets any response.
#[derive(Debug, Clone)]
pub struct HttpConnectivity {
    check_url: String,
    client: reqwest::blocking::Client,
}

impl HttpConnectivity {
    pub fn new(check_url: impl Into<String>, timeout_secs: u64) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            check_url: check_url.into(),
            client,
        })
    }
}

impl Connectivity for HttpConnectivity {
    fn is_connected(&self) -> bool {
        match self.client.head(&self.check_url).send() {
            Ok(_) => true,
            Err(err) => {
                debug!(url = %self.check_url, error = %err, "connectivity check failed");
                false
            }
        }
    }
}
