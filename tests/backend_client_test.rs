//! HTTP client against a local axum stand-in for the backend

use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::task::JoinHandle;

use cryptodash::infrastructure::api::{ApiError, BackendApi, BackendConfig, HttpBackend};

async fn spawn_backend(router: Router) -> (String, JoinHandle<()>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    (format!("http://{}", addr), handle)
}

fn client(base_url: &str) -> HttpBackend {
    HttpBackend::new(BackendConfig {
        base_url: base_url.to_string(),
        transactions_limit: 5,
        timeout: None,
    })
    .unwrap()
}

fn sample_transactions() -> Value {
    json!({
        "success": true,
        "count": 2,
        "transactions": [
            {
                "hash": "0x1111111111111111111111111111111111111111111111111111111111111111",
                "from_addr": "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
                "to_addr": "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb",
                "value": "1500000000000000000",
                "time": 1704067200,
                "raw_json": "{}",
                "parsed_json": "{\"action\":\"swap\",\"amount\":\"250\",\"token\":\"USDC\",\"confidence\":0.9}"
            },
            {
                "hash": "0x2222222222222222222222222222222222222222222222222222222222222222",
                "from_addr": "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
                "to_addr": "0xcccccccccccccccccccccccccccccccccccccccc",
                "value": "0",
                "time": "not a number",
                "raw_json": "",
                "parsed_json": "garbage"
            }
        ]
    })
}

#[tokio::test]
async fn transactions_success_keeps_backend_order() {
    let router = Router::new().route(
        "/transactions",
        get(|| async { Json(sample_transactions()) }),
    );
    let (base_url, handle) = spawn_backend(router).await;

    let txs = client(&base_url).transactions().await.unwrap();
    assert_eq!(txs.len(), 2);
    assert!(txs[0].hash.starts_with("0x1111"));
    assert_eq!(txs[0].time, Some(1_704_067_200));
    assert_eq!(
        txs[0].parsed().and_then(|p| p.amount_with_token()),
        Some("250 USDC".to_string())
    );
    // Field-level leniency: bad time and bad blob do not reject the row
    assert_eq!(txs[1].time, None);
    assert!(txs[1].parsed().is_none());
    handle.abort();
}

#[tokio::test]
async fn malformed_rows_are_skipped_not_fatal() {
    let router = Router::new().route(
        "/transactions",
        get(|| async {
            Json(json!({
                "success": true,
                "transactions": [
                    { "hash": "0xaaa", "value": "0" },
                    null,
                    7,
                    { "hash": null, "value": "1" },
                    { "hash": 99 }
                ]
            }))
        }),
    );
    let (base_url, handle) = spawn_backend(router).await;

    let txs = client(&base_url).transactions().await.unwrap();
    let hashes: Vec<&str> = txs.iter().map(|tx| tx.hash.as_str()).collect();
    assert_eq!(hashes, vec!["0xaaa", "", "99"]);
    handle.abort();
}

#[tokio::test]
async fn transactions_request_carries_limit() {
    let router = Router::new().route(
        "/transactions",
        get(
            |axum::extract::RawQuery(query): axum::extract::RawQuery| async move {
                if query.as_deref() == Some("limit=5") {
                    Json(json!({ "success": true, "transactions": [] }))
                } else {
                    Json(json!({ "success": false }))
                }
            },
        ),
    );
    let (base_url, handle) = spawn_backend(router).await;

    let txs = client(&base_url).transactions().await.unwrap();
    assert!(txs.is_empty());
    handle.abort();
}

#[tokio::test]
async fn transactions_success_false_is_unsuccessful() {
    let router = Router::new().route(
        "/transactions",
        get(|| async { Json(json!({ "success": false, "transactions": [] })) }),
    );
    let (base_url, handle) = spawn_backend(router).await;

    let err = client(&base_url).transactions().await.unwrap_err();
    assert!(err.is_unsuccessful());
    handle.abort();
}

#[tokio::test]
async fn error_status_with_detail_body_is_unsuccessful() {
    let router = Router::new().route(
        "/transactions",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "detail": "database unavailable" })),
            )
        }),
    );
    let (base_url, handle) = spawn_backend(router).await;

    match client(&base_url).transactions().await {
        Err(ApiError::Unsuccessful { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected Unsuccessful, got {:?}", other),
    }
    handle.abort();
}

#[tokio::test]
async fn non_json_body_is_decode_error() {
    let router = Router::new().route("/transactions", get(|| async { "<html>oops</html>" }));
    let (base_url, handle) = spawn_backend(router).await;

    match client(&base_url).transactions().await {
        Err(ApiError::Decode { status, .. }) => assert_eq!(status, 200),
        other => panic!("expected Decode, got {:?}", other),
    }
    handle.abort();
}

#[tokio::test]
async fn analysis_success_decodes_sections() {
    let router = Router::new().route(
        "/analysis",
        get(|| async {
            Json(json!({
                "success": true,
                "result": {
                    "advisor_analysis": {
                        "overall_rating": 7.5,
                        "recommendation": "buy",
                        "key_strengths": ["diversified"],
                        "key_risks": "not a list"
                    },
                    "industry_analysis": { "primary_sector": "DeFi", "ecosystem": "Ethereum" },
                    "position_analysis": "broken",
                    "metadata": { "transaction_count": 12, "status": "completed" }
                }
            }))
        }),
    );
    let (base_url, handle) = spawn_backend(router).await;

    let result = client(&base_url).analysis().await.unwrap();
    let advisor = result.advisor_analysis.unwrap();
    assert_eq!(advisor.overall_rating, Some(7.5));
    assert_eq!(advisor.recommendation.as_deref(), Some("buy"));
    assert_eq!(advisor.key_strengths, vec!["diversified".to_string()]);
    assert!(advisor.key_risks.is_empty());
    assert!(result.position_analysis.is_none());
    assert_eq!(result.metadata.unwrap().transaction_count, Some(12));
    handle.abort();
}

#[tokio::test]
async fn analysis_not_ready_carries_message() {
    let router = Router::new().route(
        "/analysis",
        get(|| async {
            Json(json!({ "success": false, "message": "No analysis results available" }))
        }),
    );
    let (base_url, handle) = spawn_backend(router).await;

    match client(&base_url).analysis().await {
        Err(ApiError::Unsuccessful { message, .. }) => {
            assert_eq!(message.as_deref(), Some("No analysis results available"))
        }
        other => panic!("expected Unsuccessful, got {:?}", other),
    }
    handle.abort();
}

#[tokio::test]
async fn analysis_success_without_result_is_unsuccessful() {
    let router = Router::new().route("/analysis", get(|| async { Json(json!({ "success": true })) }));
    let (base_url, handle) = spawn_backend(router).await;

    let err = client(&base_url).analysis().await.unwrap_err();
    assert!(err.is_unsuccessful());
    handle.abort();
}

#[tokio::test]
async fn connection_refused_is_transport_error() {
    // Bind then drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    match client(&format!("http://{}", addr)).transactions().await {
        Err(ApiError::Transport(_)) => {}
        other => panic!("expected Transport, got {:?}", other),
    }
}
