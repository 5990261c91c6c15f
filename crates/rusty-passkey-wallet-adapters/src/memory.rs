//! Deterministic in-memory provider: the portal surface without the portal.
//! Used by the flow tests; failure injection is one-shot per operation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;

use rusty_passkey_wallet_core::{
    ConnectOptions, ProviderError, ProviderSnapshot, SignedMessage, TransactionRequest,
    WalletAccount, WalletProvider,
};

pub struct InMemoryProvider {
    account: WalletAccount,
    transaction_signature: Option<String>,
    sign_counter: AtomicU64,
    state: Mutex<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    wallet: Option<WalletAccount>,
    error: Option<String>,
    fail_next_connect: Option<String>,
    fail_next_sign: Option<String>,
    fail_next_submit: Option<String>,
    last_fee_mode: Option<String>,
    last_transaction_request: Option<TransactionRequest>,
}

impl Default for InMemoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self {
            account: WalletAccount {
                account_name: "demo-passkey".to_owned(),
                smart_wallet: Pubkey::new_unique(),
            },
            transaction_signature: None,
            sign_counter: AtomicU64::new(0),
            state: Mutex::new(MemoryState::default()),
        }
    }

    pub fn with_account(mut self, name: &str, smart_wallet: Pubkey) -> Self {
        self.account = WalletAccount {
            account_name: name.to_owned(),
            smart_wallet,
        };
        self
    }

    /// Fixed signature returned by `sign_and_send_transaction`.
    pub fn with_transaction_signature(mut self, signature: &str) -> Self {
        self.transaction_signature = Some(signature.to_owned());
        self
    }

    pub fn fail_next_connect(&self, message: &str) {
        self.state.lock().unwrap().fail_next_connect = Some(message.to_owned());
    }

    pub fn fail_next_sign(&self, message: &str) {
        self.state.lock().unwrap().fail_next_sign = Some(message.to_owned());
    }

    pub fn fail_next_submit(&self, message: &str) {
        self.state.lock().unwrap().fail_next_submit = Some(message.to_owned());
    }

    pub fn smart_wallet(&self) -> Pubkey {
        self.account.smart_wallet
    }

    /// Fee mode of the most recent connect call.
    pub fn last_fee_mode(&self) -> Option<String> {
        self.state.lock().unwrap().last_fee_mode.clone()
    }

    /// The most recent submission, if any reached the provider.
    pub fn last_transaction_request(&self) -> Option<TransactionRequest> {
        self.state.lock().unwrap().last_transaction_request.clone()
    }
}

#[async_trait]
impl WalletProvider for InMemoryProvider {
    async fn connect(&self, options: ConnectOptions) -> Result<WalletAccount, ProviderError> {
        let mut state = self.state.lock().unwrap();
        state.last_fee_mode = Some(options.fee_mode.as_str().to_owned());
        if let Some(message) = state.fail_next_connect.take() {
            state.error = Some(message.clone());
            return Err(ProviderError::Rejected(message));
        }
        state.wallet = Some(self.account.clone());
        state.error = None;
        Ok(self.account.clone())
    }

    async fn disconnect(&self) -> Result<(), ProviderError> {
        let mut state = self.state.lock().unwrap();
        state.wallet = None;
        state.error = None;
        Ok(())
    }

    async fn sign_message(&self, message: &str) -> Result<SignedMessage, ProviderError> {
        let mut state = self.state.lock().unwrap();
        if state.wallet.is_none() {
            return Err(ProviderError::Rejected("wallet not connected".to_owned()));
        }
        if let Some(rejection) = state.fail_next_sign.take() {
            return Err(ProviderError::Rejected(rejection));
        }
        let n = self.sign_counter.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(SignedMessage {
            signature: format!("passkey-sig-{n}"),
            signed_payload: message.to_owned(),
        })
    }

    async fn sign_and_send_transaction(
        &self,
        request: TransactionRequest,
    ) -> Result<String, ProviderError> {
        let mut state = self.state.lock().unwrap();
        if state.wallet.is_none() {
            return Err(ProviderError::Rejected("wallet not connected".to_owned()));
        }
        if let Some(rejection) = state.fail_next_submit.take() {
            return Err(ProviderError::Rejected(rejection));
        }
        state.last_transaction_request = Some(request);
        let n = self.sign_counter.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(self
            .transaction_signature
            .clone()
            .unwrap_or_else(|| format!("tx-sig-{n}")))
    }

    fn snapshot(&self) -> ProviderSnapshot {
        let state = self.state.lock().unwrap();
        ProviderSnapshot {
            wallet: state.wallet.clone(),
            is_connected: state.wallet.is_some(),
            is_loading: false,
            is_connecting: false,
            is_signing: false,
            error: state.error.clone(),
        }
    }
}
