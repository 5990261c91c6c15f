mod common;

use rusty_passkey_wallet_core::{status_lines, WalletError};
use rusty_passkey_wallet_adapters::InMemoryProvider;

use common::new_orchestrator;

#[tokio::test]
async fn connect_produces_wallet_record_and_final_status() {
    let orch = new_orchestrator(InMemoryProvider::new());

    let account = orch.connect().await.expect("connect");
    assert_eq!(account.account_name, "demo-passkey");

    let snapshot = orch.snapshot();
    assert!(snapshot.is_connected);
    assert_eq!(snapshot.wallet, Some(account));
    assert_eq!(snapshot.error, None);

    assert_eq!(
        orch.status().history(),
        vec![
            status_lines::CONNECTING.to_owned(),
            status_lines::CONNECTED.to_owned()
        ]
    );
    assert_eq!(
        orch.status().current().as_deref(),
        Some(status_lines::CONNECTED)
    );
}

#[tokio::test]
async fn connect_requests_the_paymaster_fee_mode() {
    let orch = new_orchestrator(InMemoryProvider::new());
    orch.connect().await.expect("connect");
    assert_eq!(
        orch.provider().last_fee_mode().as_deref(),
        Some("paymaster")
    );
}

#[tokio::test]
async fn connect_failure_clears_status_and_records_error() {
    let provider = InMemoryProvider::new();
    provider.fail_next_connect("passkey ceremony cancelled");
    let orch = new_orchestrator(provider);

    let err = orch.connect().await.expect_err("must fail");
    assert!(matches!(err, WalletError::Connect(ref m) if m.contains("ceremony cancelled")));

    let snapshot = orch.snapshot();
    assert!(!snapshot.is_connected);
    assert!(snapshot
        .error
        .as_deref()
        .is_some_and(|e| e.contains("ceremony cancelled")));
    assert_eq!(orch.status().current(), None);
}

#[tokio::test]
async fn successful_reconnect_clears_a_previous_error() {
    let provider = InMemoryProvider::new();
    provider.fail_next_connect("passkey ceremony cancelled");
    let orch = new_orchestrator(provider);

    orch.connect().await.expect_err("first attempt fails");
    assert!(orch.snapshot().error.is_some());

    orch.connect().await.expect("second attempt succeeds");
    let snapshot = orch.snapshot();
    assert!(snapshot.is_connected);
    assert_eq!(snapshot.error, None);
}

#[tokio::test]
async fn disconnect_clears_wallet_and_status() {
    let orch = new_orchestrator(InMemoryProvider::new());
    orch.connect().await.expect("connect");
    assert_eq!(
        orch.status().current().as_deref(),
        Some(status_lines::CONNECTED)
    );

    orch.disconnect().await.expect("disconnect");

    let snapshot = orch.snapshot();
    assert!(!snapshot.is_connected);
    assert_eq!(snapshot.wallet, None);
    assert_eq!(orch.status().current(), None);
}
