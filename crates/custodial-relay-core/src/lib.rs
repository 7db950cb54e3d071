pub mod domain;
pub mod ports;
pub mod relay;

pub use domain::{
    Command, EntryFunctionRequest, SubmittedTx, ViewRequest, WalletAccount, BALANCE_VIEW_FUNCTION,
    MODULE_PATH,
};
pub use ports::{FullnodePort, PortError, WalletPort};
pub use relay::{Relay, RelayStatus};
