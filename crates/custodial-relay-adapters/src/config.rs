use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeProfile {
    Development,
    Production,
}

#[derive(Debug, Clone)]
pub struct RelayAdapterConfig {
    pub fullnode_base_url: String,
    pub wallet_bridge_url: Option<String>,
    pub http_timeout_ms: u64,
    pub runtime_profile: RuntimeProfile,
}

impl Default for RelayAdapterConfig {
    fn default() -> Self {
        Self {
            fullnode_base_url: "https://fullnode.testnet.aptoslabs.com/v1".to_owned(),
            wallet_bridge_url: None,
            http_timeout_ms: 15_000,
            runtime_profile: RuntimeProfile::Development,
        }
    }
}

impl RelayAdapterConfig {
    /// Production profiles refuse the deterministic wallet fallback; the
    /// capability must be reachable through a configured bridge.
    pub fn strict_runtime_required(&self) -> bool {
        self.runtime_profile == RuntimeProfile::Production
    }

    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = env::var("CUSTODIAL_FULLNODE_URL") {
            if !url.trim().is_empty() {
                config.fullnode_base_url = url.trim().trim_end_matches('/').to_owned();
            }
        }
        if let Ok(url) = env::var("CUSTODIAL_WALLET_BRIDGE_URL") {
            if !url.trim().is_empty() {
                config.wallet_bridge_url = Some(url.trim().to_owned());
            }
        }
        if let Ok(raw) = env::var("CUSTODIAL_HTTP_TIMEOUT_MS") {
            if let Ok(timeout) = raw.trim().parse() {
                config.http_timeout_ms = timeout;
            }
        }
        if let Ok(profile) = env::var("CUSTODIAL_RUNTIME_PROFILE") {
            if profile.trim().eq_ignore_ascii_case("production") {
                config.runtime_profile = RuntimeProfile::Production;
            }
        }
        config
    }
}
