//! Bridge between the egui shell and the wallet workspace crates.
//! Runs one orchestrator flow per background thread and posts the outcome
//! into a per-operation mailbox polled by the UI each frame.

use std::future::Future;
use std::sync::{Arc, Mutex};

use eframe::egui;

use rusty_passkey_wallet_core::{
    ProviderError, ProviderSnapshot, SignedMessage, WalletAccount, WalletOrchestrator,
};
use rusty_passkey_wallet_adapters::{PasskeyPortalAdapter, WalletAdapterConfig};

/// One-shot mailbox for an async flow result.
pub type Mailbox<T> = Arc<Mutex<Option<T>>>;

pub type ConnectResult = Result<WalletAccount, String>;
pub type DisconnectResult = Result<(), String>;
pub type SignResult = Result<SignedMessage, String>;
pub type SendResult = Result<String, String>;

pub struct WalletBridge {
    orchestrator: Arc<WalletOrchestrator<PasskeyPortalAdapter>>,
    pub connect_result: Mailbox<ConnectResult>,
    pub disconnect_result: Mailbox<DisconnectResult>,
    pub sign_result: Mailbox<SignResult>,
    pub send_result: Mailbox<SendResult>,
}

impl WalletBridge {
    pub fn new(config: WalletAdapterConfig) -> Result<Self, ProviderError> {
        let provider = PasskeyPortalAdapter::new(config)?;
        Ok(Self {
            orchestrator: Arc::new(WalletOrchestrator::new(provider)),
            connect_result: Arc::new(Mutex::new(None)),
            disconnect_result: Arc::new(Mutex::new(None)),
            sign_result: Arc::new(Mutex::new(None)),
            send_result: Arc::new(Mutex::new(None)),
        })
    }

    pub fn snapshot(&self) -> ProviderSnapshot {
        self.orchestrator.snapshot()
    }

    /// Shared status line, last-write-wins across panels.
    pub fn status_message(&self) -> Option<String> {
        self.orchestrator.status().message()
    }

    pub fn spawn_connect(&self, ctx: &egui::Context) {
        let orch = Arc::clone(&self.orchestrator);
        spawn_flow(ctx, Arc::clone(&self.connect_result), async move {
            orch.connect().await.map_err(|e| e.to_string())
        });
    }

    pub fn spawn_disconnect(&self, ctx: &egui::Context) {
        let orch = Arc::clone(&self.orchestrator);
        spawn_flow(ctx, Arc::clone(&self.disconnect_result), async move {
            orch.disconnect().await.map_err(|e| e.to_string())
        });
    }

    pub fn spawn_sign(&self, ctx: &egui::Context, message: String) {
        let orch = Arc::clone(&self.orchestrator);
        spawn_flow(ctx, Arc::clone(&self.sign_result), async move {
            orch.sign_message(&message).await.map_err(|e| e.to_string())
        });
    }

    pub fn spawn_send(&self, ctx: &egui::Context, recipient: String, amount: String) {
        let orch = Arc::clone(&self.orchestrator);
        spawn_flow(ctx, Arc::clone(&self.send_result), async move {
            orch.send_transfer(&recipient, &amount)
                .await
                .map_err(|e| e.to_string())
        });
    }

    pub fn spawn_send_demo(&self, ctx: &egui::Context) {
        let orch = Arc::clone(&self.orchestrator);
        spawn_flow(ctx, Arc::clone(&self.send_result), async move {
            orch.send_self_transfer_demo()
                .await
                .map_err(|e| e.to_string())
        });
    }
}

fn spawn_flow<T, F>(ctx: &egui::Context, mailbox: Mailbox<T>, flow: F)
where
    T: Send + 'static,
    F: Future<Output = T> + Send + 'static,
{
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let outcome = rt.block_on(flow);
        let mut guard = mailbox.lock().unwrap();
        *guard = Some(outcome);
        ctx.request_repaint();
    });
}

/// Drain a mailbox; returns the outcome at most once.
pub fn take_mailbox<T>(mailbox: &Mailbox<T>) -> Option<T> {
    mailbox.lock().unwrap().take()
}
