use rusty_passkey_wallet_core::{build_self_transfer_demo, build_transfer, WalletError};
use solana_sdk::pubkey::Pubkey;
#[allow(deprecated)]
use solana_sdk::system_instruction;

const SYSTEM_PROGRAM: &str = "11111111111111111111111111111111";

fn wallet() -> Pubkey {
    Pubkey::new_unique()
}

#[test]
fn valid_inputs_build_exactly_one_transfer() {
    let from = wallet();
    let ix = build_transfer(Some(&from), SYSTEM_PROGRAM, "1").expect("builds");

    let to: Pubkey = SYSTEM_PROGRAM.parse().expect("valid recipient");
    #[allow(deprecated)]
    let expected = system_instruction::transfer(&from, &to, 1);
    assert_eq!(ix, expected);
    assert_eq!(ix.accounts.len(), 2);
    assert_eq!(ix.accounts[0].pubkey, from);
    assert!(ix.accounts[0].is_signer);
    assert_eq!(ix.accounts[1].pubkey, to);
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    let from = wallet();
    let ix = build_transfer(Some(&from), &format!("  {SYSTEM_PROGRAM} "), " 5 ").expect("builds");
    let to: Pubkey = SYSTEM_PROGRAM.parse().expect("valid recipient");
    #[allow(deprecated)]
    let expected = system_instruction::transfer(&from, &to, 5);
    assert_eq!(ix, expected);
}

#[test]
fn zero_amount_is_rejected() {
    let from = wallet();
    let err = build_transfer(Some(&from), SYSTEM_PROGRAM, "0").expect_err("must fail");
    assert!(matches!(err, WalletError::Validation(ref m) if m.contains("positive")));
}

#[test]
fn negative_amount_is_rejected() {
    let from = wallet();
    let err = build_transfer(Some(&from), SYSTEM_PROGRAM, "-3").expect_err("must fail");
    assert!(matches!(err, WalletError::Validation(ref m) if m.contains("positive")));
}

#[test]
fn non_numeric_amount_is_rejected() {
    let from = wallet();
    for input in ["", "abc", "1e", "NaN", "inf"] {
        let err = build_transfer(Some(&from), SYSTEM_PROGRAM, input).expect_err("must fail");
        assert!(
            matches!(err, WalletError::Validation(ref m) if m.contains("positive")),
            "input {input:?} should be rejected as non-positive"
        );
    }
}

#[test]
fn malformed_recipient_is_rejected() {
    let from = wallet();
    for input in ["", "not-base58-0OIl", "abc", "1111"] {
        let err = build_transfer(Some(&from), input, "1").expect_err("must fail");
        assert!(
            matches!(err, WalletError::Validation(ref m) if m.contains("invalid recipient")),
            "input {input:?} should be rejected as an invalid recipient"
        );
    }
}

#[test]
fn missing_wallet_is_rejected() {
    let err = build_transfer(None, SYSTEM_PROGRAM, "1").expect_err("must fail");
    assert!(matches!(err, WalletError::Validation(ref m) if m.contains("smart wallet")));
}

#[test]
fn self_transfer_demo_is_zero_lamports_to_self() {
    let from = wallet();
    let ix = build_self_transfer_demo(Some(&from)).expect("builds");
    #[allow(deprecated)]
    let expected = system_instruction::transfer(&from, &from, 0);
    assert_eq!(ix, expected);
}

#[test]
fn self_transfer_demo_requires_wallet() {
    let err = build_self_transfer_demo(None).expect_err("must fail");
    assert!(matches!(err, WalletError::Validation(ref m) if m.contains("smart wallet")));
}
