//! Mock Prisma Cloud API client for testing
//!
//! Provides a mock implementation of [`CloudAccountApi`] for unit testing
//! without making real API calls.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::CloudAccountApi;
use super::models::{CloudAccount, Session};
use crate::config::Credentials;
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockPrismaClient::new()
///     .with_accounts(vec![CloudAccountBuilder::account("A1").build()])
///     .await;
///
/// let accounts = mock.list_cloud_accounts(&session).await?;
/// assert_eq!(accounts.len(), 1);
/// ```
#[derive(Default)]
pub struct MockPrismaClient {
    /// Token to return from login; `None` makes login fail
    token: Arc<Mutex<Option<String>>>,
    /// Error to return from login
    login_error: Arc<Mutex<Option<ApiError>>>,
    /// Top-level accounts to return from list_cloud_accounts
    accounts: Arc<Mutex<Vec<CloudAccount>>>,
    /// Error to return from list_cloud_accounts
    accounts_error: Arc<Mutex<Option<ApiError>>>,
    /// Members keyed by organization account ID
    members: Arc<Mutex<HashMap<String, Vec<CloudAccount>>>>,
    /// Member listing errors keyed by organization account ID
    member_errors: Arc<Mutex<HashMap<String, ApiError>>>,
    /// Track calls for verification
    calls: Arc<Mutex<Vec<CapturedCall>>>,
}

/// A captured API call for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapturedCall {
    Login { access_key: String },
    ListCloudAccounts,
    ListMemberAccounts { cloud_type: String, account_id: String },
}

impl MockPrismaClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the token returned by login.
    pub async fn with_token(self, token: impl Into<String>) -> Self {
        *self.token.lock().await = Some(token.into());
        self
    }

    /// Configure an error returned by login.
    pub async fn with_login_error(self, error: ApiError) -> Self {
        *self.login_error.lock().await = Some(error);
        self
    }

    /// Configure the top-level accounts.
    pub async fn with_accounts(self, accounts: Vec<CloudAccount>) -> Self {
        *self.accounts.lock().await = accounts;
        self
    }

    /// Configure an error for the top-level listing.
    pub async fn with_accounts_error(self, error: ApiError) -> Self {
        *self.accounts_error.lock().await = Some(error);
        self
    }

    /// Configure the members of an organization.
    pub async fn with_members(
        self,
        org_account_id: impl Into<String>,
        members: Vec<CloudAccount>,
    ) -> Self {
        self.members
            .lock()
            .await
            .insert(org_account_id.into(), members);
        self
    }

    /// Configure a member listing error for an organization.
    pub async fn with_member_error(self, org_account_id: impl Into<String>, error: ApiError) -> Self {
        self.member_errors
            .lock()
            .await
            .insert(org_account_id.into(), error);
        self
    }

    /// All calls made so far, in order.
    pub async fn calls(&self) -> Vec<CapturedCall> {
        self.calls.lock().await.clone()
    }

    async fn record(&self, call: CapturedCall) {
        self.calls.lock().await.push(call);
    }
}

#[async_trait]
impl CloudAccountApi for MockPrismaClient {
    async fn login(&self, credentials: &Credentials) -> Result<Session> {
        self.record(CapturedCall::Login {
            access_key: credentials.access_key().to_string(),
        })
        .await;

        if let Some(error) = self.login_error.lock().await.take() {
            return Err(error.into());
        }
        match self.token.lock().await.clone() {
            Some(token) if !token.is_empty() => Ok(Session::new(token)),
            _ => Err(ApiError::MissingToken.into()),
        }
    }

    async fn list_cloud_accounts(&self, session: &Session) -> Result<Vec<CloudAccount>> {
        self.record(CapturedCall::ListCloudAccounts).await;

        if !session.is_authenticated() {
            return Err(ApiError::NotAuthenticated.into());
        }
        if let Some(error) = self.accounts_error.lock().await.take() {
            return Err(error.into());
        }
        Ok(self.accounts.lock().await.clone())
    }

    async fn list_member_accounts(
        &self,
        session: &Session,
        cloud_type: &str,
        account_id: &str,
    ) -> Result<Vec<CloudAccount>> {
        self.record(CapturedCall::ListMemberAccounts {
            cloud_type: cloud_type.to_string(),
            account_id: account_id.to_string(),
        })
        .await;

        if !session.is_authenticated() {
            return Err(ApiError::NotAuthenticated.into());
        }
        if let Some(error) = self.member_errors.lock().await.remove(account_id) {
            return Err(error.into());
        }
        Ok(self
            .members
            .lock()
            .await
            .get(account_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::CloudAccountBuilder;
    use crate::error::Error;

    fn credentials() -> Credentials {
        Credentials::new("https://api.prismacloud.io", "key-id", "secret")
    }

    #[tokio::test]
    async fn test_mock_login_returns_configured_token() {
        let mock = MockPrismaClient::new().with_token("tok").await;
        let session = mock.login(&credentials()).await.unwrap();
        assert_eq!(session.token(), "tok");
        assert_eq!(
            mock.calls().await,
            vec![CapturedCall::Login {
                access_key: "key-id".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn test_mock_login_without_token_fails() {
        let mock = MockPrismaClient::new();
        assert!(matches!(
            mock.login(&credentials()).await,
            Err(Error::Api(ApiError::MissingToken))
        ));
    }

    #[tokio::test]
    async fn test_mock_member_error_is_consumed() {
        let mock = MockPrismaClient::new()
            .with_members("O1", vec![CloudAccountBuilder::member("m1").build()])
            .await
            .with_member_error("O1", ApiError::Network("reset".to_string()))
            .await;
        let session = Session::new("tok");

        assert!(mock.list_member_accounts(&session, "aws", "O1").await.is_err());
        let members = mock.list_member_accounts(&session, "aws", "O1").await.unwrap();
        assert_eq!(members.len(), 1);
    }
}
