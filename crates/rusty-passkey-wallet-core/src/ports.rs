use async_trait::async_trait;
use solana_sdk::instruction::Instruction;
use thiserror::Error;

use crate::domain::{Cluster, FeeMode, ProviderSnapshot, SignedMessage, WalletAccount};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("{0}")]
    Rejected(String),
}

/// Options passed to `connect`.
#[derive(Debug, Clone, Copy)]
pub struct ConnectOptions {
    pub fee_mode: FeeMode,
}

/// Options attached to a submission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionOptions {
    pub cluster_simulation: Cluster,
}

/// One batch of instructions plus submission options.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRequest {
    pub instructions: Vec<Instruction>,
    pub options: TransactionOptions,
}

/// Capability surface consumed from the external passkey wallet service.
/// The passkey/WebAuthn ceremony, key management, transaction construction
/// and fee sponsorship all live behind this boundary.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    async fn connect(&self, options: ConnectOptions) -> Result<WalletAccount, ProviderError>;
    async fn disconnect(&self) -> Result<(), ProviderError>;
    async fn sign_message(&self, message: &str) -> Result<SignedMessage, ProviderError>;
    async fn sign_and_send_transaction(
        &self,
        request: TransactionRequest,
    ) -> Result<String, ProviderError>;

    /// Synchronous read of the provider-owned state.
    fn snapshot(&self) -> ProviderSnapshot;
}
