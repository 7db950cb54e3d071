use std::time::Duration;

use serde_json::Value;

use custodial_relay_core::{FullnodePort, PortError, ViewRequest};

use crate::RelayAdapterConfig;

/// Read-only view calls against a public full node: one JSON POST to
/// `{base}/view` per call, no retry, no caching.
#[derive(Debug, Clone)]
pub struct FullnodeViewAdapter {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl Default for FullnodeViewAdapter {
    fn default() -> Self {
        Self::with_config(RelayAdapterConfig::from_env())
    }
}

impl FullnodeViewAdapter {
    pub fn with_config(config: RelayAdapterConfig) -> Self {
        let timeout = Duration::from_millis(config.http_timeout_ms);
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::blocking::Client::new());
        Self {
            base_url: config.fullnode_base_url.trim_end_matches('/').to_owned(),
            client,
        }
    }

    fn view_url(&self) -> String {
        format!("{}/view", self.base_url)
    }
}

impl FullnodePort for FullnodeViewAdapter {
    fn view(&self, request: &ViewRequest) -> Result<Vec<Value>, PortError> {
        let response = self
            .client
            .post(self.view_url())
            .json(request)
            .send()
            .map_err(|e| PortError::Transport(format!("view request failed: {e}")))?;
        let status = response.status();
        let body: Value = response
            .json()
            .map_err(|e| PortError::Transport(format!("view json decode failed: {e}")))?;
        if !status.is_success() {
            return Err(PortError::Transport(format!(
                "view status {}: {}",
                status, body
            )));
        }
        match body {
            Value::Array(values) => Ok(values),
            other => Err(PortError::Transport(format!(
                "view response must be a JSON array, got: {other}"
            ))),
        }
    }
}
