//! Integration tests for the HTTP lookup client against a local socket.

use infocheck_core::BankId;
use infocheck_lookup::{BankLookup, HttpBankLookup, LookupError};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serve a single canned HTTP response and hand back the raw request head.
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept connection");

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.expect("read request");
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket
            .write_all(response.as_bytes())
            .await
            .expect("write response");
        socket.shutdown().await.ok();

        String::from_utf8_lossy(&request).into_owned()
    });

    (format!("http://{addr}"), handle)
}

#[tokio::test]
async fn test_autocomplete_returns_candidates_in_service_order() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"[{"id_banco": 2, "nome_banco": "Banco X"}, {"id_banco": 1, "nome_banco": "BANCO Y"}]"#,
    )
    .await;

    let client = HttpBankLookup::with_url(base_url).expect("create client");
    let banks = client.autocomplete("banco").await.expect("autocomplete");

    assert_eq!(banks.len(), 2);
    assert_eq!(banks[0].id, BankId::Number(2));
    assert_eq!(banks[1].name, "BANCO Y");

    let request = server.await.expect("server task");
    assert!(
        request.starts_with("GET /api/bancos/autocomplete?termo=banco HTTP/1.1"),
        "unexpected request line: {request}"
    );
}

#[tokio::test]
async fn test_autocomplete_sends_escaped_term() {
    let (base_url, server) = serve_once("200 OK", "[]").await;

    let client = HttpBankLookup::with_url(base_url).expect("create client");
    let banks = client
        .autocomplete("Banco do Brasil")
        .await
        .expect("autocomplete");
    assert!(banks.is_empty());

    let request = server.await.expect("server task");
    assert!(request.contains("termo=Banco%20do%20Brasil"));
}

#[tokio::test]
async fn test_autocomplete_null_body_is_empty() {
    let (base_url, _server) = serve_once("200 OK", "null").await;

    let client = HttpBankLookup::with_url(base_url).expect("create client");
    let banks = client.autocomplete("xyz").await.expect("autocomplete");
    assert!(banks.is_empty());
}

#[tokio::test]
async fn test_autocomplete_maps_error_status() {
    let (base_url, _server) = serve_once("500 Internal Server Error", "boom").await;

    let client = HttpBankLookup::with_url(base_url).expect("create client");
    let err = client
        .autocomplete("banco")
        .await
        .expect_err("server error should fail");

    match err {
        LookupError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_autocomplete_unreachable_service_is_network_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    drop(listener);

    let client = HttpBankLookup::with_url(format!("http://{addr}")).expect("create client");
    let err = client
        .autocomplete("banco")
        .await
        .expect_err("connection should be refused");
    assert!(matches!(err, LookupError::Network(_)));
}
