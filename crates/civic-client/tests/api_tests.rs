use std::{sync::Arc, time::Duration};

use chrono::{TimeZone, Utc};
use civic_api::{ApiConfig, ApiState, router};
use civic_client::{
    ClientError, DashboardClient, MemoryStore, NotificationKind, NotificationQueue,
    SessionContext, StoredUser,
};

/// Serve the API on an ephemeral port and return its base URL.
async fn spawn_server() -> String {
    let config = ApiConfig {
        mock_seed: Some(7),
        ..ApiConfig::default()
    };
    let now = Utc
        .with_ymd_and_hms(2024, 3, 15, 10, 30, 0)
        .single()
        .expect("valid timestamp");
    let state = ApiState::new(&config).with_frozen_time(now);
    let app = router::app(state, &config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to read address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn test_login_and_store_session() {
    let client = DashboardClient::new(spawn_server().await).unwrap();
    let session = SessionContext::new(MemoryStore::new());

    let response = client
        .login("aarav.sharma@example.com", "Aarav@2024")
        .await
        .expect("login should succeed");
    session.login(StoredUser::from(&response.user)).unwrap();

    let stored = session.current_user().unwrap();
    assert_eq!(stored.id, "u1");
    assert_eq!(stored.social_credit_score, Some(response.user.social_credit.score));
}

#[tokio::test]
async fn test_failed_login_is_notified() {
    let queue = Arc::new(NotificationQueue::new(Duration::from_secs(60)));
    let client = DashboardClient::new(spawn_server().await)
        .unwrap()
        .with_notifications(Arc::clone(&queue));

    let err = client
        .login("aarav.sharma@example.com", "wrong-password1")
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(401));
    let visible = queue.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].kind, NotificationKind::Error);
    assert_eq!(visible[0].message, "Invalid email or password");
}

#[tokio::test]
async fn test_typed_payloads() {
    let client = DashboardClient::new(spawn_server().await).unwrap();

    let accounts = client.accounts("u2").await.unwrap();
    assert_eq!(accounts.accounts.len(), 5);
    assert_eq!(accounts.summary.account_count, 5);

    let page = client.transactions("u2", 2, 0).await.unwrap();
    assert_eq!(page.transactions.len(), 2);
    assert_eq!(page.pagination.total, 10);
    assert!(page.pagination.has_more);

    let board = client.leaderboard(Some("u2"), Some(5)).await.unwrap();
    assert_eq!(board.leaderboard.len(), 5);
    assert_eq!(board.current_user.name, "Priya Patel");

    let staking = client.staking("u2").await.unwrap();
    assert_eq!(staking.user_id, "u2");

    let overview = client.overview("u2").await.unwrap();
    assert_eq!(overview.balance_history.len(), 6);
}

#[tokio::test]
async fn test_validation_error_carries_server_message() {
    let client = DashboardClient::new(spawn_server().await).unwrap();

    let err = client.staking("bad id!").await.unwrap_err();

    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 400);
            assert!(message.starts_with("userId can only contain"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Bind then drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let queue = Arc::new(NotificationQueue::default());
    let client = DashboardClient::new(format!("http://{addr}"))
        .unwrap()
        .with_notifications(Arc::clone(&queue));

    let err = client.accounts("u1").await.unwrap_err();

    assert!(matches!(err, ClientError::Network(_)));
    assert_eq!(
        queue.visible()[0].message,
        "Could not reach the server. Please try again."
    );
}
