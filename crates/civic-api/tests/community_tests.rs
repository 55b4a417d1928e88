use axum::http::StatusCode;
use serde_json::Value;

use crate::common::TestClient;

fn as_u64(value: &Value) -> u64 {
    value.as_u64().expect("unsigned integer")
}

#[tokio::test]
async fn test_leaderboard_without_params() {
    let client = TestClient::default_app();

    let response = client.get("/api/community/leaderboard").await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert!(body.get("success").is_none());

    let board = body["leaderboard"].as_array().unwrap();
    assert_eq!(board.len(), 10);
    assert_eq!(body["currentUser"]["name"], "You");
    assert!(as_u64(&body["currentUser"]["rank"]) > 10);
    assert_eq!(body["stats"]["topScore"], board[0]["totalScore"]);
}

#[tokio::test]
async fn test_leaderboard_scores_are_consistent() {
    let client = TestClient::default_app();

    let body = client
        .get("/api/community/leaderboard?limit=25")
        .await
        .json::<Value>();
    let board = body["leaderboard"].as_array().unwrap();
    assert_eq!(board.len(), 25);

    let mut previous = u64::MAX;
    for (i, entry) in board.iter().enumerate() {
        assert_eq!(as_u64(&entry["rank"]), i as u64 + 1);

        let total = as_u64(&entry["totalScore"]);
        let parts = as_u64(&entry["civicScore"])
            + as_u64(&entry["financialScore"])
            + as_u64(&entry["environmentalScore"]);
        assert_eq!(parts, total);
        assert!(total <= previous);
        previous = total;
    }
}

#[tokio::test]
async fn test_leaderboard_names_known_user() {
    let client = TestClient::default_app();

    let body = client
        .get("/api/community/leaderboard?userId=u2")
        .await
        .json::<Value>();

    assert_eq!(body["currentUser"]["userId"], "u2");
    assert_eq!(body["currentUser"]["name"], "Priya Patel");
}

#[tokio::test]
async fn test_leaderboard_limit_is_capped() {
    let client = TestClient::default_app();

    let body = client
        .get("/api/community/leaderboard?limit=500")
        .await
        .json::<Value>();

    assert_eq!(body["leaderboard"].as_array().unwrap().len(), 50);
}

#[tokio::test]
async fn test_leaderboard_ignores_unusable_params() {
    let client = TestClient::default_app();

    for uri in [
        "/api/community/leaderboard?limit=-3",
        "/api/community/leaderboard?limit=lots&userId=bad%20id",
        "/api/community/leaderboard?userId=u1&userId=u2",
    ] {
        let response = client.get(uri).await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["leaderboard"].as_array().unwrap().len(), 10, "{uri}");
        assert_eq!(body["currentUser"]["userId"], "me", "{uri}");
        assert_eq!(body["currentUser"]["name"], "You", "{uri}");
    }
}

#[tokio::test]
async fn test_staking_requires_user_id() {
    let client = TestClient::default_app();

    let response = client.get("/api/community/staking").await;

    response.assert_error(StatusCode::BAD_REQUEST, "userId is required");
}

#[tokio::test]
async fn test_staking_for_user() {
    let client = TestClient::default_app();

    let response = client.get("/api/community/staking?userId=u1").await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["userId"], "u1");
    assert_eq!(body["pools"].as_array().unwrap().len(), 4);

    let stakes = body["userStakes"].as_array().unwrap();
    assert!(!stakes.is_empty());
    assert_eq!(stakes[0]["poolId"], "pool-green-energy");

    let staked: f64 = stakes.iter().map(|s| s["amount"].as_f64().unwrap()).sum();
    assert!((body["summary"]["totalStaked"].as_f64().unwrap() - staked).abs() < 0.01);
    assert!((body["summary"]["averageApy"].as_f64().unwrap() - 9.31).abs() < 0.001);
}

#[tokio::test]
async fn test_dashboard_overview() {
    let client = TestClient::default_app();

    let response = client.get("/api/dashboard/overview?userId=u1").await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["success"], true);

    let score = as_u64(&body["socialCredit"]["score"]);
    assert!((300..=900).contains(&score));
    assert_eq!(body["civicEvents"].as_array().unwrap().len(), 4);
    assert_eq!(body["recentActivity"].as_array().unwrap().len(), 5);

    let history = body["balanceHistory"].as_array().unwrap();
    assert_eq!(history.len(), 6);
    assert_eq!(history[5]["balance"], body["netWorth"]);
    assert_eq!(history[5]["month"], "Mar 2024");
}
