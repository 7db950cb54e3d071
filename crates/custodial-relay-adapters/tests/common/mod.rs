#![allow(dead_code)]

use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread;

use tiny_http::{Header, Response, Server, StatusCode};

use custodial_relay_adapters::{RelayAdapterConfig, RuntimeProfile};

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub url: String,
    pub body: String,
}

/// Spawn a one-shot HTTP fixture. The responder maps each captured request
/// to `(status, json body)`; every request is recorded for assertions.
pub fn spawn_mock_server<F>(responder: F) -> (String, Arc<Mutex<Vec<CapturedRequest>>>)
where
    F: Fn(&CapturedRequest) -> (u16, String) + Send + 'static,
{
    let server = Server::http("127.0.0.1:0").expect("bind mock server");
    let addr = server.server_addr().to_ip().expect("ip listener");
    let base_url = format!("http://{addr}");
    let captured = Arc::new(Mutex::new(Vec::new()));
    let captured_for_thread = Arc::clone(&captured);

    thread::spawn(move || {
        for mut request in server.incoming_requests() {
            let mut body = String::new();
            let _ = request.as_reader().read_to_string(&mut body);
            let record = CapturedRequest {
                method: request.method().to_string(),
                url: request.url().to_owned(),
                body,
            };
            captured_for_thread
                .lock()
                .expect("captured lock")
                .push(record.clone());

            let (status, payload) = responder(&record);
            let header =
                Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                    .expect("content-type header");
            let response = Response::from_string(payload)
                .with_status_code(StatusCode(status))
                .with_header(header);
            let _ = request.respond(response);
        }
    });

    (base_url, captured)
}

pub fn config_with_fullnode(base_url: &str) -> RelayAdapterConfig {
    RelayAdapterConfig {
        fullnode_base_url: base_url.to_owned(),
        http_timeout_ms: 5_000,
        ..RelayAdapterConfig::default()
    }
}

pub fn config_with_bridge(base_url: &str) -> RelayAdapterConfig {
    RelayAdapterConfig {
        wallet_bridge_url: Some(base_url.to_owned()),
        http_timeout_ms: 5_000,
        ..RelayAdapterConfig::default()
    }
}

pub fn strict_config_without_bridge() -> RelayAdapterConfig {
    RelayAdapterConfig {
        runtime_profile: RuntimeProfile::Production,
        wallet_bridge_url: None,
        ..RelayAdapterConfig::default()
    }
}

pub fn rpc_result(result: serde_json::Value) -> String {
    serde_json::json!({
        "jsonrpc": "2.0",
        "id": 1,
        "result": result,
    })
    .to_string()
}

pub fn rpc_error(code: i64, message: &str) -> String {
    serde_json::json!({
        "jsonrpc": "2.0",
        "id": 1,
        "error": { "code": code, "message": message },
    })
    .to_string()
}
