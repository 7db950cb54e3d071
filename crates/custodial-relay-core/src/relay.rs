use std::fmt;

use serde_json::Value;

use crate::domain::{Command, ViewRequest};
use crate::ports::{FullnodePort, PortError, WalletPort};

/// Textual outcome of one relay round trip. `Display` produces the exact
/// string shown in the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayStatus {
    Connected(String),
    WalletMissing,
    ConnectFailed,
    Submitted(String),
    Balance(String),
    Failed(String),
}

impl RelayStatus {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            RelayStatus::WalletMissing | RelayStatus::ConnectFailed | RelayStatus::Failed(_)
        )
    }
}

impl fmt::Display for RelayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelayStatus::Connected(address) => write!(f, "✅ Connected: {address}"),
            RelayStatus::WalletMissing => write!(f, "❌ Petra wallet not found!"),
            RelayStatus::ConnectFailed => write!(f, "❌ Connection failed!"),
            RelayStatus::Submitted(hash) => write!(f, "✅ Submitted: {hash}"),
            RelayStatus::Balance(value) => write!(f, "ℹ️ Balance: {value}"),
            RelayStatus::Failed(message) => write!(f, "❌ {message}"),
        }
    }
}

/// The wallet command relay. Stateless pass-through between the command
/// set and the two ports; every operation is a single request/response
/// with two outcomes, success or failure, folded into a `RelayStatus`.
#[derive(Debug, Clone)]
pub struct Relay<W, F> {
    wallet: W,
    fullnode: F,
}

impl<W: WalletPort, F: FullnodePort> Relay<W, F> {
    pub fn new(wallet: W, fullnode: F) -> Self {
        Self { wallet, fullnode }
    }

    pub fn wallet(&self) -> &W {
        &self.wallet
    }

    pub fn fullnode(&self) -> &F {
        &self.fullnode
    }

    /// Request address disclosure from the wallet capability. No retry.
    pub fn connect(&self) -> RelayStatus {
        match self.wallet.connect() {
            Ok(account) => RelayStatus::Connected(account.address),
            Err(PortError::CapabilityUnavailable(_)) => RelayStatus::WalletMissing,
            Err(_) => RelayStatus::ConnectFailed,
        }
    }

    /// Build the entry-function request for `command` and hand it to the
    /// wallet for signing and submission. Arguments pass through verbatim.
    pub fn invoke(&self, command: &Command) -> RelayStatus {
        let request = command.to_request();
        match self.wallet.sign_and_submit(&request) {
            Ok(tx) => RelayStatus::Submitted(tx.hash),
            Err(PortError::CapabilityUnavailable(_)) => RelayStatus::WalletMissing,
            Err(e) => RelayStatus::Failed(e.to_string()),
        }
    }

    /// Read-only balance lookup; the response array's first element is the
    /// balance.
    pub fn query_balance(&self, address: &str) -> RelayStatus {
        let request = ViewRequest::balance_of(address);
        match self.fullnode.view(&request) {
            Ok(values) => match values.first() {
                Some(value) => RelayStatus::Balance(render_scalar(value)),
                None => RelayStatus::Failed("view response missing balance value".to_owned()),
            },
            Err(e) => RelayStatus::Failed(e.to_string()),
        }
    }
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
