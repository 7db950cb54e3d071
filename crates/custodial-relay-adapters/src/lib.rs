pub mod config;
pub mod fullnode;
pub mod wallet;

pub use config::{RelayAdapterConfig, RuntimeProfile};
pub use fullnode::FullnodeViewAdapter;
pub use wallet::WalletBridgeAdapter;
