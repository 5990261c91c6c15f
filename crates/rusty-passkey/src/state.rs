//! Per-panel UI state. Everything here is ephemeral, lifetime bounded to
//! the running app.

use rusty_passkey_wallet_core::SignedMessage;

/// Message seeded into the signing panel.
pub const DEFAULT_SIGN_MESSAGE: &str = "Hello from rusty-passkey!";

/// Message-signing panel state
#[derive(Debug)]
pub struct SignMessageState {
    pub message: String,
    /// Last successful result; overwritten by each new attempt.
    pub signed: Option<SignedMessage>,
    pub error: Option<String>,
}

impl Default for SignMessageState {
    fn default() -> Self {
        Self {
            message: DEFAULT_SIGN_MESSAGE.to_owned(),
            signed: None,
            error: None,
        }
    }
}

impl SignMessageState {
    pub fn clear_results(&mut self) {
        self.signed = None;
        self.error = None;
    }
}

/// The two transaction-panel variants, exposed behind an explicit mode flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransferMode {
    /// Recipient and amount supplied by the user.
    #[default]
    Parameterized,
    /// Zero-lamport self-transfer, no inputs, no funds risk.
    FixedDemo,
}

/// Transaction panel state
#[derive(Debug, Default)]
pub struct TransferState {
    pub mode: TransferMode,
    pub recipient: String,
    pub amount: String,
    /// Signature of the last submitted transaction.
    pub tx_signature: Option<String>,
    pub error: Option<String>,
}

impl TransferState {
    pub fn clear_results(&mut self) {
        self.tx_signature = None;
        self.error = None;
    }
}
