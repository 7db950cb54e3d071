mod common;

use common::{
    config_with_bridge, config_with_fullnode, rpc_result, spawn_mock_server,
    strict_config_without_bridge,
};

use custodial_relay_adapters::{FullnodeViewAdapter, WalletBridgeAdapter};
use custodial_relay_core::{Command, Relay, RelayStatus};

fn relay_with(
    wallet: WalletBridgeAdapter,
    fullnode: FullnodeViewAdapter,
) -> Relay<WalletBridgeAdapter, FullnodeViewAdapter> {
    Relay::new(wallet, fullnode)
}

#[test]
fn balance_round_trip_renders_info_status() {
    let (base_url, captured) =
        spawn_mock_server(|_| (200, serde_json::json!(["42"]).to_string()));

    let relay = relay_with(
        WalletBridgeAdapter::with_config(config_with_fullnode(&base_url)),
        FullnodeViewAdapter::with_config(config_with_fullnode(&base_url)),
    );

    let status = relay.query_balance("0xabc");
    assert_eq!(status, RelayStatus::Balance("42".to_owned()));
    assert_eq!(status.to_string(), "ℹ️ Balance: 42");

    let calls = captured.lock().expect("captured lock");
    assert_eq!(calls.len(), 1);
    assert!(calls[0].body.contains(r#""arguments":["0xabc"]"#));
}

#[test]
fn deposit_through_bridge_renders_submitted_status() {
    let (base_url, captured) = spawn_mock_server(|request| {
        if request.body.contains(r#""method":"connect""#) {
            (200, rpc_result(serde_json::json!({"address": "0xfeed"})))
        } else {
            (200, rpc_result(serde_json::json!({"hash": "0xtxn"})))
        }
    });

    let relay = relay_with(
        WalletBridgeAdapter::with_config(config_with_bridge(&base_url)),
        FullnodeViewAdapter::with_config(config_with_fullnode(&base_url)),
    );

    assert_eq!(relay.connect().to_string(), "✅ Connected: 0xfeed");

    let status = relay.invoke(&Command::Deposit {
        target: "0xabc".to_owned(),
        amount: "100".to_owned(),
    });
    assert_eq!(status.to_string(), "✅ Submitted: 0xtxn");

    let calls = captured.lock().expect("captured lock");
    assert!(calls
        .last()
        .expect("submit call")
        .body
        .contains(r#""arguments":["0xabc","100"]"#));
}

#[test]
fn missing_capability_yields_fixed_wallet_message_for_every_operation() {
    let relay = relay_with(
        WalletBridgeAdapter::with_config(strict_config_without_bridge()),
        FullnodeViewAdapter::with_config(config_with_fullnode("http://127.0.0.1:9")),
    );

    assert_eq!(relay.connect().to_string(), "❌ Petra wallet not found!");
    let status = relay.invoke(&Command::Withdraw {
        amount: "1".to_owned(),
    });
    assert_eq!(status.to_string(), "❌ Petra wallet not found!");
}

#[test]
fn unreachable_fullnode_renders_failure_glyph_with_error_text() {
    // Port 9 (discard) is never serving HTTP locally.
    let relay = relay_with(
        WalletBridgeAdapter::with_config(config_with_fullnode("http://unused")),
        FullnodeViewAdapter::with_config(config_with_fullnode("http://127.0.0.1:9")),
    );

    let rendered = relay.query_balance("0xabc").to_string();
    assert!(rendered.starts_with('❌'));
    assert!(rendered.contains("view request failed"));
}
