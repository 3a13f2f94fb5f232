//! Flattened account records

use crate::client::CloudAccount;

/// Parent value for organization accounts themselves
pub const IS_PARENT: &str = "N/A (Is Parent)";

/// Parent value for accounts onboarded without an organization
pub const DIRECTLY_ONBOARDED: &str = "N/A (Directly Onboarded)";

/// Account ID used on rows standing in for a failed member listing
pub const ERROR_ACCOUNT_ID: &str = "ERROR";

/// One row of the inventory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRecord {
    pub account_id: Option<String>,
    pub account_name: Option<String>,
    pub cloud_type: Option<String>,
    pub parent_account_name: String,
}

impl AccountRecord {
    /// Record for an organization account.
    pub fn organization(account: &CloudAccount) -> Self {
        Self::with_parent(account, IS_PARENT)
    }

    /// Record for a top-level account with no organization.
    pub fn standalone(account: &CloudAccount) -> Self {
        Self::with_parent(account, DIRECTLY_ONBOARDED)
    }

    /// Record for a member account of the named organization.
    pub fn member(account: CloudAccount, parent_name: &str) -> Self {
        Self {
            account_id: account.account_id,
            account_name: account.name,
            cloud_type: account.cloud_type,
            parent_account_name: parent_name.to_string(),
        }
    }

    /// Placeholder row for an organization whose members could not be listed.
    pub fn listing_failed(organization: &CloudAccount) -> Self {
        let org_name = organization.name.as_deref().unwrap_or_default();
        Self {
            account_id: Some(ERROR_ACCOUNT_ID.to_string()),
            account_name: Some(format!("Failed to list members for '{}'", org_name)),
            cloud_type: organization.cloud_type.clone(),
            parent_account_name: org_name.to_string(),
        }
    }

    fn with_parent(account: &CloudAccount, parent: &str) -> Self {
        Self {
            account_id: account.account_id.clone(),
            account_name: account.name.clone(),
            cloud_type: account.cloud_type.clone(),
            parent_account_name: parent.to_string(),
        }
    }

    /// Whether this row stands in for a failed member listing.
    pub fn is_error(&self) -> bool {
        self.account_id.as_deref() == Some(ERROR_ACCOUNT_ID)
    }
}
