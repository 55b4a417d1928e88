//! Typed HTTP client for the dashboard API.
//!
//! Failures come back as [`ClientError`] and, when a notification queue is
//! attached, are also shown to the user.

use std::{sync::Arc, time::Duration};

use civic_mock::{
    envelope::{
        AccountsResponse, AuthResponse, DashboardResponse, ErrorBody, LeaderboardResponse,
        ProfileResponse, StakingResponse, TransactionsResponse, UserDataResponse,
    },
    models::ProfileUpdate,
};
use reqwest::{Client, RequestBuilder};
use serde::{Serialize, de::DeserializeOwned};

use crate::{error::ClientError, notify::NotificationQueue};

/// Requests that take longer than this fail
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

/// Registration form as sent to the server
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub aadhaar_number: String,
}

#[derive(Debug, Clone)]
pub struct DashboardClient {
    client: Client,
    base_url: String,
    notifications: Option<Arc<NotificationQueue>>,
}

impl DashboardClient {
    /// Client for the API served at `base_url`, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            notifications: None,
        })
    }

    /// Show every failure in `queue`.
    pub fn with_notifications(mut self, queue: Arc<NotificationQueue>) -> Self {
        self.notifications = Some(queue);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ClientError> {
        let request = self
            .client
            .post(self.url("/api/auth/login"))
            .json(&Credentials { email, password });
        self.send(request).await
    }

    #[tracing::instrument(skip_all, fields(email = %form.email))]
    pub async fn register(&self, form: &RegistrationForm) -> Result<AuthResponse, ClientError> {
        let request = self.client.post(self.url("/api/auth/register")).json(form);
        self.send(request).await
    }

    /// Login through the older form endpoint.
    pub async fn legacy_login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<UserDataResponse, ClientError> {
        let request = self
            .client
            .post(self.url("/api/auth"))
            .json(&Credentials { email, password });
        self.send(request).await
    }

    pub async fn profile(&self, user_id: &str) -> Result<ProfileResponse, ClientError> {
        let request = self
            .client
            .get(self.url("/api/user/profile"))
            .query(&[("userId", user_id)]);
        self.send(request).await
    }

    pub async fn update_profile(
        &self,
        user_id: &str,
        update: &ProfileUpdate,
    ) -> Result<ProfileResponse, ClientError> {
        let request = self
            .client
            .put(self.url("/api/user/profile"))
            .query(&[("userId", user_id)])
            .json(update);
        self.send(request).await
    }

    pub async fn accounts(&self, user_id: &str) -> Result<AccountsResponse, ClientError> {
        let request = self
            .client
            .get(self.url("/api/finance/accounts"))
            .query(&[("userId", user_id)]);
        self.send(request).await
    }

    pub async fn transactions(
        &self,
        user_id: &str,
        limit: usize,
        offset: usize,
    ) -> Result<TransactionsResponse, ClientError> {
        let request = self
            .client
            .get(self.url("/api/finance/transactions"))
            .query(&[
                ("userId", user_id.to_string()),
                ("limit", limit.to_string()),
                ("offset", offset.to_string()),
            ]);
        self.send(request).await
    }

    pub async fn leaderboard(
        &self,
        user_id: Option<&str>,
        limit: Option<u32>,
    ) -> Result<LeaderboardResponse, ClientError> {
        let mut query = Vec::new();
        if let Some(user_id) = user_id {
            query.push(("userId", user_id.to_string()));
        }
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }

        let request = self
            .client
            .get(self.url("/api/community/leaderboard"))
            .query(&query);
        self.send(request).await
    }

    pub async fn staking(&self, user_id: &str) -> Result<StakingResponse, ClientError> {
        let request = self
            .client
            .get(self.url("/api/community/staking"))
            .query(&[("userId", user_id)]);
        self.send(request).await
    }

    pub async fn overview(&self, user_id: &str) -> Result<DashboardResponse, ClientError> {
        let request = self
            .client
            .get(self.url("/api/dashboard/overview"))
            .query(&[("userId", user_id)]);
        self.send(request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let result = execute(request).await;
        if let Err(err) = &result {
            tracing::warn!(error = %err, "Request failed");
            if let Some(queue) = &self.notifications {
                queue.error(err.user_message());
            }
        }
        result
    }
}

async fn execute<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ClientError> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    // Fall back to the status text when the body is not an error envelope
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string(),
    };

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let client = DashboardClient::new("http://localhost:3000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(
            client.url("/api/finance/accounts"),
            "http://localhost:3000/api/finance/accounts"
        );
    }

    #[test]
    fn test_registration_form_uses_camel_case() {
        let form = RegistrationForm {
            name: "Meera Nair".to_string(),
            email: "meera@example.com".to_string(),
            phone: "9123456780".to_string(),
            password: "Meera2024".to_string(),
            aadhaar_number: "678901234567".to_string(),
        };
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["aadhaarNumber"], "678901234567");
    }
}
