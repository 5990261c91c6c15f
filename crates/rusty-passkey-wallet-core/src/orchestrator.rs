//! Drives the three user flows against the provider port and emits the
//! shared status line.

use solana_sdk::instruction::Instruction;
use thiserror::Error;

use crate::domain::{Cluster, FeeMode, ProviderSnapshot, SignedMessage, WalletAccount};
use crate::ports::{
    ConnectOptions, TransactionOptions, TransactionRequest, WalletProvider,
};
use crate::status::{StatusSink, StatusSlot};
use crate::transfer;

/// Error taxonomy at the UI boundary. Each variant carries a human-readable
/// display message.
#[derive(Debug, Error)]
pub enum WalletError {
    #[error("{0}")]
    Validation(String),
    #[error("connect failed: {0}")]
    Connect(String),
    #[error("signing failed: {0}")]
    Sign(String),
    #[error("submission failed: {0}")]
    Submit(String),
}

/// Status line text shared between the flows, the panels and the tests.
pub mod status_lines {
    pub const CONNECTING: &str = "Opening passkey dialog…";
    pub const CONNECTED: &str = "Connected.";
    pub const SIGNING: &str = "Opening passkey dialog to sign…";
    pub const SIGNED: &str = "Message signed.";
    pub const PREPARING: &str = "Preparing transfer transaction…";
    pub const AUTHORIZING: &str = "Opening passkey dialog to authorize…";
    pub const SENT: &str = "Transaction sent.";
}

pub struct WalletOrchestrator<P: WalletProvider, S: StatusSink = StatusSlot> {
    provider: P,
    status: S,
    cluster: Cluster,
}

impl<P: WalletProvider> WalletOrchestrator<P> {
    pub fn new(provider: P) -> Self {
        Self::with_status(provider, StatusSlot::new())
    }
}

impl<P: WalletProvider, S: StatusSink> WalletOrchestrator<P, S> {
    pub fn with_status(provider: P, status: S) -> Self {
        Self {
            provider,
            status,
            cluster: Cluster::Devnet,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn status(&self) -> &S {
        &self.status
    }

    pub fn cluster(&self) -> Cluster {
        self.cluster
    }

    pub fn snapshot(&self) -> ProviderSnapshot {
        self.provider.snapshot()
    }

    /// Connect with the paymaster fee mode. On failure the status line is
    /// cleared and the provider error is re-raised; the provider keeps the
    /// error on its snapshot until the next successful connect.
    pub async fn connect(&self) -> Result<WalletAccount, WalletError> {
        self.status.begin(status_lines::CONNECTING);
        match self
            .provider
            .connect(ConnectOptions {
                fee_mode: FeeMode::Paymaster,
            })
            .await
        {
            Ok(account) => {
                self.status.finish(status_lines::CONNECTED);
                Ok(account)
            }
            Err(e) => {
                self.status.fail();
                Err(WalletError::Connect(e.to_string()))
            }
        }
    }

    /// Clear the status line immediately, then request disconnection.
    pub async fn disconnect(&self) -> Result<(), WalletError> {
        self.status.clear();
        self.provider
            .disconnect()
            .await
            .map_err(|e| WalletError::Connect(e.to_string()))
    }

    pub async fn sign_message(&self, message: &str) -> Result<SignedMessage, WalletError> {
        self.status.begin(status_lines::SIGNING);
        match self.provider.sign_message(message).await {
            Ok(signed) => {
                self.status.finish(status_lines::SIGNED);
                Ok(signed)
            }
            Err(e) => {
                self.status.fail();
                Err(WalletError::Sign(e.to_string()))
            }
        }
    }

    /// Parameterized gasless transfer. Validation failures are raised before
    /// any status emission and before any provider call.
    pub async fn send_transfer(&self, recipient: &str, amount: &str) -> Result<String, WalletError> {
        let from = self.snapshot().smart_wallet();
        let instruction = transfer::build_transfer(from.as_ref(), recipient, amount)?;
        self.submit(instruction).await
    }

    /// Fixed-demo variant: zero-lamport self-transfer through the same path.
    pub async fn send_self_transfer_demo(&self) -> Result<String, WalletError> {
        let from = self.snapshot().smart_wallet();
        let instruction = transfer::build_self_transfer_demo(from.as_ref())?;
        self.submit(instruction).await
    }

    async fn submit(&self, instruction: Instruction) -> Result<String, WalletError> {
        self.status.begin(status_lines::PREPARING);
        let request = TransactionRequest {
            instructions: vec![instruction],
            options: TransactionOptions {
                cluster_simulation: self.cluster,
            },
        };
        self.status.progress(status_lines::AUTHORIZING);
        match self.provider.sign_and_send_transaction(request).await {
            Ok(signature) => {
                self.status.finish(status_lines::SENT);
                Ok(signature)
            }
            Err(e) => {
                self.status.fail();
                Err(WalletError::Submit(e.to_string()))
            }
        }
    }
}
