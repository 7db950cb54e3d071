use serde_json::Value;
use thiserror::Error;

use crate::domain::{EntryFunctionRequest, SubmittedTx, ViewRequest, WalletAccount};

#[derive(Debug, Error)]
pub enum PortError {
    #[error("wallet capability unavailable: {0}")]
    CapabilityUnavailable(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("validation error: {0}")]
    Validation(String),
}

/// The injected wallet capability: address disclosure plus
/// sign-and-submit. Both calls are fallible; neither is retried.
pub trait WalletPort {
    fn connect(&self) -> Result<WalletAccount, PortError>;
    fn sign_and_submit(&self, request: &EntryFunctionRequest) -> Result<SubmittedTx, PortError>;
}

/// Read-only view calls against a public full node.
pub trait FullnodePort {
    fn view(&self, request: &ViewRequest) -> Result<Vec<Value>, PortError>;
}
