//! Prisma Cloud API client

use async_trait::async_trait;

use crate::config::Credentials;
use crate::error::Result;

#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pacing;
pub mod prisma;

#[cfg(test)]
pub use mock::MockPrismaClient;
pub use models::{CloudAccount, Session};
pub use pacing::Pacer;
pub use prisma::PrismaClient;

/// Cloud account operations used by the inventory run
#[async_trait]
pub trait CloudAccountApi: Send + Sync {
    /// Exchange access key credentials for a session token
    async fn login(&self, credentials: &Credentials) -> Result<Session>;

    /// List the top-level onboarded cloud accounts
    async fn list_cloud_accounts(&self, session: &Session) -> Result<Vec<CloudAccount>>;

    /// List the member accounts of an organization or tenant account
    async fn list_member_accounts(
        &self,
        session: &Session,
        cloud_type: &str,
        account_id: &str,
    ) -> Result<Vec<CloudAccount>>;
}
