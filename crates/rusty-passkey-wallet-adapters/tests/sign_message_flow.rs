mod common;

use rusty_passkey_wallet_core::{status_lines, WalletError};
use rusty_passkey_wallet_adapters::InMemoryProvider;

use common::{connected_orchestrator, new_orchestrator};

#[tokio::test]
async fn sign_returns_signature_and_payload() {
    let orch = connected_orchestrator(InMemoryProvider::new()).await;

    let signed = orch
        .sign_message("Hello from rusty-passkey!")
        .await
        .expect("sign");
    assert!(!signed.signature.is_empty());
    assert_eq!(signed.signed_payload, "Hello from rusty-passkey!");
    assert_eq!(
        orch.status().current().as_deref(),
        Some(status_lines::SIGNED)
    );
    assert!(orch
        .status()
        .history()
        .contains(&status_lines::SIGNING.to_owned()));
}

#[tokio::test]
async fn each_attempt_produces_a_fresh_signature() {
    let orch = connected_orchestrator(InMemoryProvider::new()).await;

    let first = orch.sign_message("one").await.expect("sign");
    let second = orch.sign_message("two").await.expect("sign");
    assert_ne!(first.signature, second.signature);
}

#[tokio::test]
async fn rejection_clears_status_and_propagates() {
    let orch = connected_orchestrator(InMemoryProvider::new()).await;
    orch.provider().fail_next_sign("user dismissed the dialog");

    let err = orch.sign_message("hello").await.expect_err("must fail");
    assert!(matches!(err, WalletError::Sign(ref m) if m.contains("dismissed")));
    assert_eq!(orch.status().current(), None);
}

#[tokio::test]
async fn signing_requires_a_connected_wallet() {
    let orch = new_orchestrator(InMemoryProvider::new());
    let err = orch.sign_message("hello").await.expect_err("must fail");
    assert!(matches!(err, WalletError::Sign(ref m) if m.contains("not connected")));
}
