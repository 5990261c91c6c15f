//! HTTP adapter for the external passkey wallet portal service.
//!
//! The portal fronts the WebAuthn ceremony and the paymaster; this adapter
//! only moves JSON across that boundary and owns the provider-visible state
//! (wallet record, busy flags, last error).

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use serde::{Deserialize, Serialize};
use solana_sdk::instruction::Instruction;

use rusty_passkey_wallet_core::{
    ConnectOptions, ProviderError, ProviderSnapshot, SignedMessage, TransactionRequest,
    WalletAccount, WalletProvider,
};

use crate::config::WalletAdapterConfig;

pub struct PasskeyPortalAdapter {
    config: WalletAdapterConfig,
    client: reqwest::Client,
    state: Mutex<PortalState>,
}

#[derive(Debug, Default)]
struct PortalState {
    wallet: Option<WalletAccount>,
    is_connecting: bool,
    is_signing: bool,
    error: Option<String>,
}

impl PasskeyPortalAdapter {
    pub fn new(config: WalletAdapterConfig) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| ProviderError::Transport(e.to_string()))?;
        Ok(Self {
            config,
            client,
            state: Mutex::new(PortalState::default()),
        })
    }

    pub fn config(&self) -> &WalletAdapterConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.paymaster_url.trim_end_matches('/'),
            path
        )
    }

    async fn post<Req, Resp>(&self, path: &str, body: &Req) -> Result<Resp, ProviderError>
    where
        Req: Serialize + Sync,
        Resp: for<'de> Deserialize<'de>,
    {
        let url = self.endpoint(path);
        tracing::debug!(%url, "portal request");
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::warn!(%url, %status, "portal rejected request");
            return Err(ProviderError::Rejected(format!(
                "portal returned {status}: {detail}"
            )));
        }
        response
            .json()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))
    }

    fn require_connected(&self) -> Result<(), ProviderError> {
        let state = self.state.lock().unwrap();
        if state.wallet.is_none() {
            return Err(ProviderError::Rejected("wallet not connected".to_owned()));
        }
        Ok(())
    }
}

#[async_trait]
impl WalletProvider for PasskeyPortalAdapter {
    async fn connect(&self, options: ConnectOptions) -> Result<WalletAccount, ProviderError> {
        {
            let mut state = self.state.lock().unwrap();
            state.is_connecting = true;
        }
        let result: Result<ConnectResponse, ProviderError> = self
            .post(
                "v1/connect",
                &ConnectRequest {
                    fee_mode: options.fee_mode.as_str(),
                },
            )
            .await;

        let mut state = self.state.lock().unwrap();
        state.is_connecting = false;
        match result.and_then(|resp| resp.into_account()) {
            Ok(account) => {
                tracing::info!(account = %account.account_name, "wallet connected");
                state.wallet = Some(account.clone());
                state.error = None;
                Ok(account)
            }
            Err(e) => {
                tracing::warn!(error = %e, "connect failed");
                state.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    async fn disconnect(&self) -> Result<(), ProviderError> {
        let result: Result<DisconnectResponse, ProviderError> =
            self.post("v1/disconnect", &serde_json::json!({})).await;

        // The local record is dropped even if the portal call fails.
        let mut state = self.state.lock().unwrap();
        state.wallet = None;
        state.error = None;
        result.map(|_| ())
    }

    async fn sign_message(&self, message: &str) -> Result<SignedMessage, ProviderError> {
        self.require_connected()?;
        {
            let mut state = self.state.lock().unwrap();
            state.is_signing = true;
        }
        let result: Result<SignMessageResponse, ProviderError> = self
            .post("v1/sign-message", &SignMessageRequest { message })
            .await;

        let mut state = self.state.lock().unwrap();
        state.is_signing = false;
        match result {
            Ok(resp) => Ok(SignedMessage {
                signature: resp.signature,
                signed_payload: resp.signed_payload,
            }),
            Err(e) => {
                tracing::warn!(error = %e, "sign message failed");
                Err(e)
            }
        }
    }

    async fn sign_and_send_transaction(
        &self,
        request: TransactionRequest,
    ) -> Result<String, ProviderError> {
        self.require_connected()?;
        {
            let mut state = self.state.lock().unwrap();
            state.is_signing = true;
        }
        let body = SendTransactionRequest {
            instructions: request.instructions.iter().map(InstructionDto::from).collect(),
            transaction_options: TransactionOptionsDto {
                cluster_simulation: request.options.cluster_simulation.as_str(),
            },
        };
        let result: Result<SendTransactionResponse, ProviderError> =
            self.post("v1/sign-and-send", &body).await;

        let mut state = self.state.lock().unwrap();
        state.is_signing = false;
        match result {
            Ok(resp) => {
                tracing::info!(signature = %resp.signature, "transaction submitted");
                Ok(resp.signature)
            }
            Err(e) => {
                tracing::warn!(error = %e, "sign and send failed");
                Err(e)
            }
        }
    }

    fn snapshot(&self) -> ProviderSnapshot {
        let state = self.state.lock().unwrap();
        ProviderSnapshot {
            wallet: state.wallet.clone(),
            is_connected: state.wallet.is_some(),
            is_loading: state.is_connecting || state.is_signing,
            is_connecting: state.is_connecting,
            is_signing: state.is_signing,
            error: state.error.clone(),
        }
    }
}

// Wire DTOs. The portal speaks camelCase JSON.

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ConnectRequest<'a> {
    fee_mode: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConnectResponse {
    account_name: String,
    smart_wallet: String,
}

impl ConnectResponse {
    fn into_account(self) -> Result<WalletAccount, ProviderError> {
        let smart_wallet = self.smart_wallet.parse().map_err(|_| {
            ProviderError::Transport(format!(
                "malformed smart wallet address in response: {}",
                self.smart_wallet
            ))
        })?;
        Ok(WalletAccount {
            account_name: self.account_name,
            smart_wallet,
        })
    }
}

#[derive(Debug, Deserialize)]
struct DisconnectResponse {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SignMessageRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignMessageResponse {
    signature: String,
    signed_payload: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendTransactionRequest {
    instructions: Vec<InstructionDto>,
    transaction_options: TransactionOptionsDto,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendTransactionResponse {
    signature: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TransactionOptionsDto {
    cluster_simulation: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InstructionDto {
    program_id: String,
    accounts: Vec<AccountMetaDto>,
    data_base64: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AccountMetaDto {
    pubkey: String,
    is_signer: bool,
    is_writable: bool,
}

impl From<&Instruction> for InstructionDto {
    fn from(instruction: &Instruction) -> Self {
        Self {
            program_id: instruction.program_id.to_string(),
            accounts: instruction
                .accounts
                .iter()
                .map(|meta| AccountMetaDto {
                    pubkey: meta.pubkey.to_string(),
                    is_signer: meta.is_signer,
                    is_writable: meta.is_writable,
                })
                .collect(),
            data_base64: base64::engine::general_purpose::STANDARD.encode(&instruction.data),
        }
    }
}
