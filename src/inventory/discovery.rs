//! Account discovery
//!
//! Lists the top-level accounts, then expands every organization/tenant
//! account into its members. Discovery never fails as a whole: a failed
//! top-level listing yields no records, and a failed member listing yields a
//! single error record for that organization.

use crate::client::{CloudAccount, CloudAccountApi, Pacer, Session};
use crate::error::{ApiError, Result};
use crate::events::{EventSink, Stage};

use super::record::AccountRecord;

/// Walks the account hierarchy for one session
pub struct Discoverer<'a, A: ?Sized, S> {
    api: &'a A,
    events: &'a S,
    pacer: Pacer,
}

impl<'a, A, S> Discoverer<'a, A, S>
where
    A: CloudAccountApi + ?Sized,
    S: EventSink,
{
    pub fn new(api: &'a A, events: &'a S, pacer: Pacer) -> Self {
        Self { api, events, pacer }
    }

    /// Discover every account visible to the session, in API order.
    ///
    /// Each organization's own record is immediately followed by its member
    /// records, or by one error record if its members could not be listed.
    pub async fn discover(&self, session: &Session) -> Vec<AccountRecord> {
        if !session.is_authenticated() {
            self.events
                .error(Stage::Discovery, ApiError::NotAuthenticated.to_string());
            return Vec::new();
        }

        self.events
            .info(Stage::Discovery, "Fetching top-level cloud accounts...");
        let top_level = match self.api.list_cloud_accounts(session).await {
            Ok(accounts) => accounts,
            Err(err) => {
                self.events.error(
                    Stage::Discovery,
                    format!("Error listing top-level accounts: {}", err),
                );
                return Vec::new();
            }
        };
        self.events.info(
            Stage::Discovery,
            format!("Found {} top-level account entries.", top_level.len()),
        );

        let mut records = Vec::with_capacity(top_level.len());
        for account in &top_level {
            if account.is_organization() {
                self.expand_organization(session, account, &mut records)
                    .await;
            } else {
                self.events.info(
                    Stage::Discovery,
                    format!(
                        "Found Standard Account: '{}'.",
                        account.name.as_deref().unwrap_or_default()
                    ),
                );
                records.push(AccountRecord::standalone(account));
            }
        }

        records
    }

    async fn expand_organization(
        &self,
        session: &Session,
        org: &CloudAccount,
        records: &mut Vec<AccountRecord>,
    ) {
        let org_name = org.name.as_deref().unwrap_or_default();
        self.events.info(
            Stage::Discovery,
            format!(
                "Found Organization Account: '{}'. Discovering member accounts...",
                org_name
            ),
        );
        records.push(AccountRecord::organization(org));

        self.pacer.pause().await;
        match self.list_members(session, org).await {
            Ok(members) => {
                self.events.info(
                    Stage::Discovery,
                    format!(
                        "Discovered {} member accounts in '{}'.",
                        members.len(),
                        org_name
                    ),
                );
                records.extend(
                    members
                        .into_iter()
                        .map(|member| AccountRecord::member(member, org_name)),
                );
            }
            Err(err) => {
                self.events.warn(
                    Stage::Discovery,
                    format!("Error discovering members for '{}': {}", org_name, err),
                );
                records.push(AccountRecord::listing_failed(org));
            }
        }
    }

    async fn list_members(&self, session: &Session, org: &CloudAccount) -> Result<Vec<CloudAccount>> {
        let (Some(cloud_type), Some(account_id)) =
            (org.cloud_type.as_deref(), org.account_id.as_deref())
        else {
            return Err(ApiError::InvalidResponse(
                "organization account has no cloudType or accountId".to_string(),
            )
            .into());
        };

        self.api
            .list_member_accounts(session, cloud_type, account_id)
            .await
    }
}
