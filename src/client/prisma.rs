//! Prisma Cloud API client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::ACCEPT;
use reqwest::{Client as HttpClient, Response, Url};
use serde::de::DeserializeOwned;

use super::models::{CloudAccount, LoginRequest, LoginResponse, Session};
use super::CloudAccountApi;
use crate::config::Credentials;
use crate::error::{ApiError, ConfigError, Result};

/// Header carrying the session token on authenticated calls
const AUTH_HEADER: &str = "x-redlock-auth";

const JSON_ACCEPT: &str = "application/json; charset=UTF-8";

const LOGIN_TIMEOUT: Duration = Duration::from_secs(30);
const LIST_ACCOUNTS_TIMEOUT: Duration = Duration::from_secs(60);
const LIST_MEMBERS_TIMEOUT: Duration = Duration::from_secs(120);

/// Prisma Cloud API client
pub struct PrismaClient {
    http: HttpClient,
    base_url: Url,
}

impl PrismaClient {
    /// Create a client for the given API base URL (e.g. `https://api.prismacloud.io`).
    pub fn new(api_url: &str) -> Result<Self> {
        let base_url = Url::parse(api_url.trim_end_matches('/'))
            .map_err(|e| ConfigError::Invalid(format!("API URL '{}': {}", api_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(
                ConfigError::Invalid(format!("API URL '{}' cannot carry a path", api_url)).into(),
            );
        }

        let http = HttpClient::builder()
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    /// Build an endpoint URL below the base, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Authenticated GET returning a decoded JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        session: &Session,
        url: Url,
        timeout: Duration,
    ) -> Result<T> {
        if !session.is_authenticated() {
            return Err(ApiError::NotAuthenticated.into());
        }

        debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .header(AUTH_HEADER, session.token())
            .header(ACCEPT, JSON_ACCEPT)
            .timeout(timeout)
            .send()
            .await
            .map_err(ApiError::from)?;

        read_json(response).await
    }
}

/// Check the status and decode the body of a response.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let url = response.url().to_string();
    debug!("{} -> {}", url, status);

    if !status.is_success() {
        let body = response.text().await.ok();
        return Err(ApiError::http(status, url, body).into());
    }

    let text = response.text().await.map_err(ApiError::from)?;
    let data = serde_json::from_str(&text).map_err(|e| {
        ApiError::InvalidResponse(format!("Failed to parse response from {}: {}", url, e))
    })?;
    Ok(data)
}

#[async_trait]
impl CloudAccountApi for PrismaClient {
    async fn login(&self, credentials: &Credentials) -> Result<Session> {
        let url = self.endpoint(&["login"]);
        debug!("POST {}", url);

        let response = self
            .http
            .post(url)
            .header(ACCEPT, JSON_ACCEPT)
            .json(&LoginRequest {
                username: credentials.access_key(),
                password: credentials.secret_key(),
            })
            .timeout(LOGIN_TIMEOUT)
            .send()
            .await
            .map_err(ApiError::from)?;

        let login: LoginResponse = read_json(response).await?;
        match login.token.filter(|t| !t.is_empty()) {
            Some(token) => Ok(Session::new(token)),
            None => Err(ApiError::MissingToken.into()),
        }
    }

    async fn list_cloud_accounts(&self, session: &Session) -> Result<Vec<CloudAccount>> {
        let url = self.endpoint(&["cloud"]);
        self.get_json(session, url, LIST_ACCOUNTS_TIMEOUT).await
    }

    async fn list_member_accounts(
        &self,
        session: &Session,
        cloud_type: &str,
        account_id: &str,
    ) -> Result<Vec<CloudAccount>> {
        let url = self.endpoint(&["cloud", cloud_type, account_id, "project"]);
        self.get_json(session, url, LIST_MEMBERS_TIMEOUT).await
    }
}
