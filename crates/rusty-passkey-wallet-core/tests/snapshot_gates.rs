use rusty_passkey_wallet_core::{
    explorer_tx_url, short_address, Cluster, ConnectionStatus, ProviderSnapshot, WalletAccount,
};
use solana_sdk::pubkey::Pubkey;

fn connected_snapshot() -> ProviderSnapshot {
    ProviderSnapshot {
        wallet: Some(WalletAccount {
            account_name: "demo".to_owned(),
            smart_wallet: Pubkey::new_unique(),
        }),
        is_connected: true,
        ..ProviderSnapshot::default()
    }
}

#[test]
fn connect_is_disabled_while_connected_or_loading() {
    assert!(ProviderSnapshot::default().can_connect());
    assert!(!connected_snapshot().can_connect());

    let loading = ProviderSnapshot {
        is_loading: true,
        ..ProviderSnapshot::default()
    };
    assert!(!loading.can_connect());
}

#[test]
fn disconnect_is_disabled_while_disconnected_or_loading() {
    assert!(connected_snapshot().can_disconnect());
    assert!(!ProviderSnapshot::default().can_disconnect());

    let busy = ProviderSnapshot {
        is_loading: true,
        ..connected_snapshot()
    };
    assert!(!busy.can_disconnect());
}

#[test]
fn sign_requires_connection_and_non_blank_message() {
    let snapshot = connected_snapshot();
    assert!(snapshot.can_sign("hello"));
    assert!(!snapshot.can_sign(""));
    assert!(!snapshot.can_sign("   "));
    assert!(!ProviderSnapshot::default().can_sign("hello"));
}

#[test]
fn send_requires_connection_and_idle_provider() {
    assert!(connected_snapshot().can_send());
    assert!(!ProviderSnapshot::default().can_send());

    let busy = ProviderSnapshot {
        is_loading: true,
        ..connected_snapshot()
    };
    assert!(!busy.can_send());
}

#[test]
fn connection_status_reflects_busy_flags() {
    assert_eq!(
        ProviderSnapshot::default().connection_status(),
        ConnectionStatus::Disconnected
    );

    let connecting = ProviderSnapshot {
        is_connecting: true,
        ..ProviderSnapshot::default()
    };
    assert_eq!(connecting.connection_status(), ConnectionStatus::Connecting);

    assert_eq!(
        connected_snapshot().connection_status(),
        ConnectionStatus::Connected
    );

    let signing = ProviderSnapshot {
        is_signing: true,
        ..connected_snapshot()
    };
    assert_eq!(signing.connection_status(), ConnectionStatus::Working);
}

#[test]
fn short_strings_are_displayed_unchanged() {
    assert_eq!(short_address(""), "");
    assert_eq!(short_address("abc"), "abc");
    // 15 characters: the truncated form would not be shorter.
    assert_eq!(short_address("abcdefghij12345"), "abcdefghij12345");
}

#[test]
fn long_addresses_truncate_to_head_and_tail() {
    assert_eq!(
        short_address("11111111111111111111111111111111"),
        "111111...111111"
    );
    let pubkey = Pubkey::new_unique().to_string();
    let shortened = short_address(&pubkey);
    assert_eq!(shortened.len(), 15);
    assert!(pubkey.starts_with(&shortened[..6]));
    assert!(pubkey.ends_with(&shortened[9..]));
}

#[test]
fn explorer_link_targets_the_devnet_cluster() {
    let url = explorer_tx_url(Cluster::Devnet, "abc123");
    assert_eq!(url, "https://explorer.solana.com/tx/abc123?cluster=devnet");
    assert!(url.contains("tx/abc123?cluster=devnet"));
}
