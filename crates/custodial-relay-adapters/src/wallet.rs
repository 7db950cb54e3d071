use std::time::Duration;

use serde_json::Value;
use sha2::{Digest, Sha256};

use custodial_relay_core::{
    EntryFunctionRequest, PortError, SubmittedTx, WalletAccount, WalletPort,
};

use crate::RelayAdapterConfig;

const DETERMINISTIC_ACCOUNT: &str =
    "0x1000000000000000000000000000000000000000000000000000000000000001";

/// Wallet capability adapter. In `Bridge` mode every call is a JSON-RPC 2.0
/// POST to a wallet host that fronts the injected browser wallet; without a
/// bridge the adapter falls back to a deterministic in-process wallet for
/// development and tests, unless the runtime profile forbids it.
#[derive(Debug, Clone)]
pub struct WalletBridgeAdapter {
    mode: WalletMode,
}

#[derive(Debug, Clone)]
enum WalletMode {
    Disabled(String),
    Deterministic,
    Bridge(BridgeRuntime),
}

#[derive(Debug, Clone)]
struct BridgeRuntime {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl Default for WalletBridgeAdapter {
    fn default() -> Self {
        Self::with_config(RelayAdapterConfig::from_env())
    }
}

impl WalletBridgeAdapter {
    pub fn with_config(config: RelayAdapterConfig) -> Self {
        let mode = if let Some(ref base_url) = config.wallet_bridge_url {
            let timeout = Duration::from_millis(config.http_timeout_ms);
            match reqwest::blocking::Client::builder().timeout(timeout).build() {
                Ok(client) => WalletMode::Bridge(BridgeRuntime {
                    base_url: base_url.clone(),
                    client,
                }),
                Err(e) => {
                    if config.strict_runtime_required() {
                        WalletMode::Disabled(format!(
                            "failed to initialize wallet bridge client in production profile: {e}"
                        ))
                    } else {
                        WalletMode::Deterministic
                    }
                }
            }
        } else if config.strict_runtime_required() {
            WalletMode::Disabled(
                "wallet bridge URL not configured in production runtime profile".to_owned(),
            )
        } else {
            WalletMode::Deterministic
        };

        Self { mode }
    }

    fn check_mode(&self) -> Result<(), PortError> {
        if let WalletMode::Disabled(reason) = &self.mode {
            return Err(PortError::CapabilityUnavailable(reason.clone()));
        }
        Ok(())
    }

    fn bridge_call(&self, method: &str, params: Value) -> Result<Value, PortError> {
        let bridge = match &self.mode {
            WalletMode::Bridge(bridge) => bridge,
            WalletMode::Disabled(reason) => {
                return Err(PortError::CapabilityUnavailable(reason.clone()))
            }
            WalletMode::Deterministic => {
                return Err(PortError::Transport(
                    "wallet bridge runtime not enabled".to_owned(),
                ))
            }
        };

        let payload = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });
        let response = bridge
            .client
            .post(&bridge.base_url)
            .json(&payload)
            .send()
            .map_err(|e| PortError::Transport(format!("wallet bridge request failed: {e}")))?;
        let status = response.status();
        let body: Value = response
            .json()
            .map_err(|e| PortError::Transport(format!("wallet bridge json decode failed: {e}")))?;
        if !status.is_success() {
            return Err(PortError::Transport(format!(
                "wallet bridge status {}: {}",
                status, body
            )));
        }
        if let Some(err) = body.get("error") {
            let message = err
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_owned)
                .unwrap_or_else(|| err.to_string());
            return Err(PortError::Transport(message));
        }
        body.get("result")
            .cloned()
            .ok_or_else(|| PortError::Transport("wallet bridge missing result".to_owned()))
    }

    fn deterministic_submit_hash(request: &EntryFunctionRequest) -> Result<String, PortError> {
        let canonical = serde_json::to_vec(request)
            .map_err(|e| PortError::Validation(format!("payload serialization failed: {e}")))?;
        let digest = Sha256::digest(&canonical);
        Ok(format!("0x{}", hex::encode(digest)))
    }
}

impl WalletPort for WalletBridgeAdapter {
    fn connect(&self) -> Result<WalletAccount, PortError> {
        self.check_mode()?;

        if matches!(self.mode, WalletMode::Bridge(_)) {
            let result = self.bridge_call("connect", serde_json::json!([]))?;
            let address = result
                .get("address")
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    PortError::Transport("connect result must carry an address".to_owned())
                })?;
            if address.trim().is_empty() {
                return Err(PortError::Validation("connect returned empty address".to_owned()));
            }
            return Ok(WalletAccount {
                address: address.to_owned(),
            });
        }

        Ok(WalletAccount {
            address: DETERMINISTIC_ACCOUNT.to_owned(),
        })
    }

    fn sign_and_submit(&self, request: &EntryFunctionRequest) -> Result<SubmittedTx, PortError> {
        self.check_mode()?;

        if matches!(self.mode, WalletMode::Bridge(_)) {
            let payload = serde_json::to_value(request)
                .map_err(|e| PortError::Validation(format!("payload serialization failed: {e}")))?;
            let result =
                self.bridge_call("signAndSubmitTransaction", serde_json::json!([payload]))?;
            let hash = result.get("hash").and_then(Value::as_str).ok_or_else(|| {
                PortError::Transport("signAndSubmitTransaction result must carry a hash".to_owned())
            })?;
            return Ok(SubmittedTx {
                hash: hash.to_owned(),
            });
        }

        Ok(SubmittedTx {
            hash: Self::deterministic_submit_hash(request)?,
        })
    }
}
