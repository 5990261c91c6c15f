#![allow(dead_code)]

use std::sync::Mutex;

use rusty_passkey_wallet_core::{StatusSink, WalletOrchestrator};
use rusty_passkey_wallet_adapters::InMemoryProvider;

/// Records every status update so tests can assert on the full sequence,
/// not just the last value.
#[derive(Debug, Default)]
pub struct RecordingStatus {
    history: Mutex<Vec<String>>,
    current: Mutex<Option<String>>,
}

impl RecordingStatus {
    pub fn history(&self) -> Vec<String> {
        self.history.lock().unwrap().clone()
    }

    pub fn current(&self) -> Option<String> {
        self.current.lock().unwrap().clone()
    }
}

impl StatusSink for RecordingStatus {
    fn begin(&self, message: &str) {
        self.history.lock().unwrap().push(message.to_owned());
        *self.current.lock().unwrap() = Some(message.to_owned());
    }

    fn progress(&self, message: &str) {
        self.history.lock().unwrap().push(message.to_owned());
        *self.current.lock().unwrap() = Some(message.to_owned());
    }

    fn finish(&self, message: &str) {
        self.history.lock().unwrap().push(message.to_owned());
        *self.current.lock().unwrap() = Some(message.to_owned());
    }

    fn fail(&self) {
        *self.current.lock().unwrap() = None;
    }

    fn clear(&self) {
        *self.current.lock().unwrap() = None;
    }
}

pub type TestOrchestrator = WalletOrchestrator<InMemoryProvider, RecordingStatus>;

pub fn new_orchestrator(provider: InMemoryProvider) -> TestOrchestrator {
    WalletOrchestrator::with_status(provider, RecordingStatus::default())
}

pub async fn connected_orchestrator(provider: InMemoryProvider) -> TestOrchestrator {
    let orch = new_orchestrator(provider);
    orch.connect().await.expect("connect");
    orch
}
