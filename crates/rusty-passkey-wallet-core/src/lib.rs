pub mod domain;
pub mod orchestrator;
pub mod ports;
pub mod status;
pub mod transfer;

pub use domain::{
    explorer_tx_url, short_address, Cluster, ConnectionStatus, FeeMode, ProviderSnapshot,
    SignedMessage, WalletAccount,
};
pub use orchestrator::{status_lines, WalletError, WalletOrchestrator};
pub use ports::{
    ConnectOptions, ProviderError, TransactionOptions, TransactionRequest, WalletProvider,
};
pub use status::{StatusPhase, StatusSink, StatusSlot};
pub use transfer::{build_self_transfer_demo, build_transfer};
