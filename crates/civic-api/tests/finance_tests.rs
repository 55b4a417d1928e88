use axum::http::StatusCode;
use serde_json::Value;

use crate::common::{TestClient, TestStateBuilder};

fn as_f64(value: &Value) -> f64 {
    value.as_f64().expect("number")
}

#[tokio::test]
async fn test_accounts_requires_user_id() {
    let client = TestClient::default_app();

    let response = client.get("/api/finance/accounts").await;

    response.assert_error(StatusCode::BAD_REQUEST, "userId is required");
}

#[tokio::test]
async fn test_malformed_query_uses_error_envelope() {
    let client = TestClient::default_app();

    for uri in [
        "/api/finance/accounts?userId=u1&userId=u2",
        "/api/finance/transactions?userId=u1&userId=u2&limit=2",
    ] {
        let response = client.get(uri).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        let message = body["message"].as_str().unwrap();
        assert!(message.starts_with("Invalid query string"), "{message}");
        assert!(message.contains("userId"), "{message}");
    }
}

#[tokio::test]
async fn test_accounts_summary_matches_balances() {
    let client = TestClient::default_app();

    let response = client.get("/api/finance/accounts?userId=u1").await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["success"], true);

    let accounts = body["accounts"].as_array().unwrap();
    assert_eq!(accounts.len(), 5);
    assert_eq!(body["summary"]["accountCount"], 5);

    let sum: f64 = accounts.iter().map(|a| as_f64(&a["balanceRaw"])).sum();
    assert!((as_f64(&body["summary"]["totalBalance"]) - sum).abs() < 0.01);

    let assets = as_f64(&body["summary"]["totalAssets"]);
    let debt = as_f64(&body["summary"]["totalDebt"]);
    assert!(debt > 0.0, "credit card and loan are always in debt");
    assert!((as_f64(&body["summary"]["netWorth"]) - (assets - debt)).abs() < 0.01);
    assert_eq!(body["summary"]["netWorth"], body["summary"]["totalBalance"]);

    for account in accounts {
        assert!(account["id"].as_str().unwrap().starts_with("u1-acc-"));
        assert!(account["balance"].as_str().unwrap().contains('₹'));
        assert!(account["accountNumber"].as_str().unwrap().contains("XXXX"));
    }
    assert_eq!(accounts[4]["type"], "loan");
}

#[tokio::test]
async fn test_transactions_first_page() {
    let client = TestClient::default_app();

    let response = client
        .get("/api/finance/transactions?userId=u1&limit=2&offset=0")
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["transactions"].as_array().unwrap().len(), 2);
    assert_eq!(body["pagination"]["total"], 10);
    assert_eq!(body["pagination"]["limit"], 2);
    assert_eq!(body["pagination"]["offset"], 0);
    assert_eq!(body["pagination"]["hasMore"], true);
    assert_eq!(body["transactions"][0]["id"], "txn-001");
}

#[tokio::test]
async fn test_transactions_summary_covers_full_ledger() {
    let client = TestClient::default_app();

    let page = client
        .get("/api/finance/transactions?userId=u1&limit=2")
        .await
        .json::<Value>();
    let full = client
        .get("/api/finance/transactions?userId=u1&limit=100")
        .await
        .json::<Value>();

    assert_eq!(page["summary"], full["summary"]);
    assert!((as_f64(&page["summary"]["totalIncome"]) - 104_736.75).abs() < 0.001);
    assert!((as_f64(&page["summary"]["totalExpense"]) - 30_707.5).abs() < 0.001);
    assert!((as_f64(&page["summary"]["netFlow"]) - 74_029.25).abs() < 0.001);
}

#[tokio::test]
async fn test_transactions_last_page_and_past_end() {
    let client = TestClient::default_app();

    let last = client
        .get("/api/finance/transactions?userId=u1&limit=5&offset=5")
        .await
        .json::<Value>();
    assert_eq!(last["transactions"].as_array().unwrap().len(), 5);
    assert_eq!(last["pagination"]["hasMore"], false);

    let past_end = client
        .get("/api/finance/transactions?userId=u1&offset=50")
        .await
        .json::<Value>();
    assert!(past_end["transactions"].as_array().unwrap().is_empty());
    assert_eq!(past_end["pagination"]["hasMore"], false);
}

#[tokio::test]
async fn test_transactions_limit_is_capped() {
    let client = TestClient::default_app();

    let body = client
        .get("/api/finance/transactions?userId=u1&limit=1000")
        .await
        .json::<Value>();

    assert_eq!(body["pagination"]["limit"], 100);
    assert_eq!(body["transactions"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_transactions_rejects_bad_counts() {
    let client = TestClient::default_app();

    let negative = client
        .get("/api/finance/transactions?userId=u1&limit=-1")
        .await;
    negative.assert_error(StatusCode::BAD_REQUEST, "limit must be a non-negative integer");

    let text = client
        .get("/api/finance/transactions?userId=u1&offset=abc")
        .await;
    text.assert_error(StatusCode::BAD_REQUEST, "offset must be a non-negative integer");
}

#[tokio::test]
async fn test_transactions_account_ids_belong_to_user() {
    let client = TestClient::default_app();

    let body = client
        .get("/api/finance/transactions?userId=u3&limit=10")
        .await
        .json::<Value>();

    for txn in body["transactions"].as_array().unwrap() {
        assert!(txn["accountId"].as_str().unwrap().starts_with("u3-acc-"));
    }
}

#[tokio::test]
async fn test_seeded_requests_are_reproducible() {
    let client = TestClient::default_app();

    let first = client.get("/api/finance/accounts?userId=u2").await;
    let second = client.get("/api/finance/accounts?userId=u2").await;

    assert_eq!(first.text(), second.text());
}

#[tokio::test]
async fn test_different_seeds_give_different_balances() {
    let a = TestClient::new(TestStateBuilder::new().seed(1).app())
        .get("/api/finance/accounts?userId=u2")
        .await;
    let b = TestClient::new(TestStateBuilder::new().seed(2).app())
        .get("/api/finance/accounts?userId=u2")
        .await;

    assert_ne!(a.text(), b.text());
}
