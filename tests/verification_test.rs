//! Transaction verification flow against a mock gateway.

use budpay::{BudpayClient, BudpayConfig, BudpayError};
use mockito::Server;
use serde_json::json;

fn client_for(server: &Server) -> BudpayClient {
    BudpayClient::new(BudpayConfig::new("sk_test_x").with_base_url(server.url())).unwrap()
}

#[tokio::test]
async fn get_payment_data_fails_for_an_invalid_reference() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v2/transaction/verify/:bad-ref")
        .with_body(r#"{"status":false,"message":"Invalid transaction reference"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let result = client.get_payment_data("bad-ref").await;

    match result {
        Err(BudpayError::PaymentVerificationFailed { reference }) => {
            assert_eq!(reference, "bad-ref");
        }
        other => panic!("expected PaymentVerificationFailed, got {other:?}"),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn verification_validity_follows_the_exact_message() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/v2/transaction/verify/:good-ref")
        .with_body(r#"{"status":true,"message":"Verification successful","data":{"amount":"500"}}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/v2/transaction/verify/:bad-ref")
        .with_body(r#"{"status":false,"message":"Invalid transaction reference"}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/v2/transaction/verify/:odd-ref")
        .with_body(r#"{"status":true,"message":"Transaction is pending"}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/v2/transaction/verify/:blank-ref")
        .with_body(r#"{"status":true,"message":""}"#)
        .create_async()
        .await;

    let client = client_for(&server);

    assert!(client
        .is_transaction_verification_valid("good-ref")
        .await
        .unwrap());
    assert!(!client
        .is_transaction_verification_valid("bad-ref")
        .await
        .unwrap());
    // Unrecognized and empty messages read as unverified, not as errors.
    assert!(!client
        .is_transaction_verification_valid("odd-ref")
        .await
        .unwrap());
    assert!(!client
        .is_transaction_verification_valid("blank-ref")
        .await
        .unwrap());
}

#[tokio::test]
async fn get_payment_data_returns_the_envelope_on_success() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/v2/transaction/verify/:order-77")
        .with_body(
            json!({
                "status": true,
                "message": "Verification successful",
                "data": {"amount": "1500", "currency": "NGN", "reference": "order-77"}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let payment = client.get_payment_data("order-77").await.unwrap();

    assert!(payment.status);
    assert_eq!(payment.field("currency"), Some(&json!("NGN")));
    assert_eq!(payment.field("amount"), Some(&json!("1500")));
}

#[tokio::test]
async fn fetch_transaction_uses_the_literal_path() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v2/transaction/:TRX123")
        .match_header("authorization", "Bearer sk_test_x")
        .with_body(r#"{"status":true,"message":"Transaction retrieved"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let response = client.fetch_transaction("TRX123").await.unwrap();

    assert!(response.status);
    mock.assert_async().await;
}

#[tokio::test]
async fn transport_failures_propagate() {
    // Point at a closed port; reqwest's connection error surfaces as
    // a Transport error, untouched and unretried.
    let client = BudpayClient::new(
        BudpayConfig::new("sk_test_x").with_base_url("http://127.0.0.1:1"),
    )
    .unwrap();

    let result = client.get_all_transactions().await;
    assert!(matches!(result, Err(BudpayError::Transport(_))));
}
