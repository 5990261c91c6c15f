use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

/// Fee-payment mode requested at connect time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeeMode {
    Paymaster,
}

impl FeeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeeMode::Paymaster => "paymaster",
        }
    }
}

/// Target cluster, used for the submission simulation option and explorer links.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cluster {
    #[default]
    Devnet,
}

impl Cluster {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cluster::Devnet => "devnet",
        }
    }
}

/// Public block-explorer link for a submitted transaction signature.
pub fn explorer_tx_url(cluster: Cluster, signature: &str) -> String {
    format!(
        "https://explorer.solana.com/tx/{}?cluster={}",
        signature,
        cluster.as_str()
    )
}

/// Wallet record produced by the provider on a successful connect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletAccount {
    pub account_name: String,
    pub smart_wallet: Pubkey,
}

/// Result of one message-signing ceremony. Overwritten by each new attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedMessage {
    pub signature: String,
    pub signed_payload: String,
}

/// Read-only view of provider state. The provider owns the mutable state;
/// panels re-read a snapshot every frame.
#[derive(Debug, Clone, Default)]
pub struct ProviderSnapshot {
    pub wallet: Option<WalletAccount>,
    pub is_connected: bool,
    pub is_loading: bool,
    pub is_connecting: bool,
    pub is_signing: bool,
    pub error: Option<String>,
}

impl ProviderSnapshot {
    pub fn smart_wallet(&self) -> Option<Pubkey> {
        self.wallet.as_ref().map(|w| w.smart_wallet)
    }

    pub fn connection_status(&self) -> ConnectionStatus {
        if self.is_connected {
            if self.is_connecting || self.is_signing {
                ConnectionStatus::Working
            } else {
                ConnectionStatus::Connected
            }
        } else if self.is_connecting {
            ConnectionStatus::Connecting
        } else {
            ConnectionStatus::Disconnected
        }
    }

    pub fn can_connect(&self) -> bool {
        !self.is_loading && !self.is_connected
    }

    pub fn can_disconnect(&self) -> bool {
        !self.is_loading && self.is_connected
    }

    pub fn can_sign(&self, message: &str) -> bool {
        !self.is_loading && self.is_connected && !message.trim().is_empty()
    }

    pub fn can_send(&self) -> bool {
        !self.is_loading && self.is_connected
    }
}

/// Connection status as shown by the connection panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Disconnected,
    Connecting,
    Connected,
    Working,
}

impl ConnectionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionStatus::Disconnected => "Disconnected",
            ConnectionStatus::Connecting => "Connecting…",
            ConnectionStatus::Connected => "Connected",
            ConnectionStatus::Working => "Connected · Working…",
        }
    }
}

/// Shorten an address-like string for display: first 6 and last 6 characters
/// with an ellipsis. Strings that would not get shorter are left unchanged.
pub fn short_address(value: &str) -> String {
    const HEAD: usize = 6;
    const TAIL: usize = 6;
    if value.len() <= HEAD + TAIL + 3 {
        return value.to_owned();
    }
    format!("{}...{}", &value[..HEAD], &value[value.len() - TAIL..])
}
