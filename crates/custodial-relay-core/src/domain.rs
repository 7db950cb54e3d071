use serde::{Deserialize, Serialize};

/// Module-qualified path of the on-chain custodial USDT module. Every entry
/// and view function identifier is `MODULE_PATH::<name>`.
pub const MODULE_PATH: &str =
    "0xfc26c5948f1865f748fe43751cd2973fc0fd5b14126104122ca50483386c4085::custodial_usdt";

/// Read-only balance lookup on the module.
pub const BALANCE_VIEW_FUNCTION: &str = "balance_of";

const ENTRY_FUNCTION_PAYLOAD: &str = "entry_function_payload";

/// One signed entry-function submission. Built fresh per invocation,
/// discarded after the wallet responds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFunctionRequest {
    #[serde(rename = "type")]
    pub payload_type: String,
    pub function: String,
    pub type_arguments: Vec<String>,
    pub arguments: Vec<String>,
}

impl EntryFunctionRequest {
    /// Arguments are carried verbatim, in order; the caller does no
    /// coercion or validation.
    pub fn new(function_name: &str, arguments: Vec<String>) -> Self {
        Self {
            payload_type: ENTRY_FUNCTION_PAYLOAD.to_owned(),
            function: format!("{MODULE_PATH}::{function_name}"),
            type_arguments: Vec::new(),
            arguments,
        }
    }
}

/// One read-only view call against the full node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewRequest {
    pub function: String,
    pub type_arguments: Vec<String>,
    pub arguments: Vec<String>,
}

impl ViewRequest {
    pub fn balance_of(address: &str) -> Self {
        Self {
            function: format!("{MODULE_PATH}::{BALANCE_VIEW_FUNCTION}"),
            type_arguments: Vec::new(),
            arguments: vec![address.to_owned()],
        }
    }
}

/// Address disclosed by the wallet capability on connect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletAccount {
    pub address: String,
}

/// Identifier of a submitted transaction, as returned by the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedTx {
    pub hash: String,
}

/// The fixed command set wired to the relay. Each variant carries its
/// ordered argument fields exactly as they appear in the input form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Deposit { target: String, amount: String },
    Withdraw { amount: String },
    Transfer { target: String, amount: String },
    AdminResetOne { target: String, new_amount: String },
    AdminResetAll { new_amount: String },
    AdminResetTopK { k: String, new_amount: String },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Deposit { .. } => "deposit",
            Command::Withdraw { .. } => "withdraw",
            Command::Transfer { .. } => "transfer",
            Command::AdminResetOne { .. } => "admin_reset_one",
            Command::AdminResetAll { .. } => "admin_reset_all",
            Command::AdminResetTopK { .. } => "admin_reset_top_k",
        }
    }

    pub fn arguments(&self) -> Vec<String> {
        match self {
            Command::Deposit { target, amount } | Command::Transfer { target, amount } => {
                vec![target.clone(), amount.clone()]
            }
            Command::Withdraw { amount } => vec![amount.clone()],
            Command::AdminResetOne { target, new_amount } => {
                vec![target.clone(), new_amount.clone()]
            }
            Command::AdminResetAll { new_amount } => vec![new_amount.clone()],
            Command::AdminResetTopK { k, new_amount } => vec![k.clone(), new_amount.clone()],
        }
    }

    pub fn to_request(&self) -> EntryFunctionRequest {
        EntryFunctionRequest::new(self.name(), self.arguments())
    }
}
