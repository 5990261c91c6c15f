use rusty_passkey_wallet_core::Cluster;

/// Fixed deployment settings for the demo. The paymaster service URL is the
/// one configuration point of the system, supplied at provider construction.
#[derive(Debug, Clone)]
pub struct WalletAdapterConfig {
    pub paymaster_url: String,
    pub cluster: Cluster,
    pub request_timeout_ms: u64,
}

impl Default for WalletAdapterConfig {
    fn default() -> Self {
        Self {
            paymaster_url: "https://kora.devnet.lazorkit.com".to_owned(),
            cluster: Cluster::Devnet,
            request_timeout_ms: 30_000,
        }
    }
}
