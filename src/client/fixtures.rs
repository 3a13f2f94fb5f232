//! Test fixtures and builders for API model types
//!
//! Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)]

use super::models::CloudAccount;

// ============================================================================
// CloudAccountBuilder
// ============================================================================

/// Builder for creating test CloudAccount instances.
///
/// # Example
/// ```ignore
/// let org = CloudAccountBuilder::organization("O1")
///     .name("Org1")
///     .cloud_type("aws")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct CloudAccountBuilder {
    account_id: Option<String>,
    name: Option<String>,
    cloud_type: Option<String>,
    account_type: Option<String>,
}

impl CloudAccountBuilder {
    /// Standalone account with the given ID, named after it, on AWS.
    pub fn account(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: Some(format!("Account {}", &id)),
            account_id: Some(id),
            cloud_type: Some("aws".to_string()),
            account_type: Some("account".to_string()),
        }
    }

    /// Organization account with the given ID.
    pub fn organization(id: impl Into<String>) -> Self {
        Self::account(id).account_type("ORGANIZATION")
    }

    /// Member account as returned by the project listing (no account type).
    pub fn member(id: impl Into<String>) -> Self {
        let mut builder = Self::account(id);
        builder.account_type = None;
        builder
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn cloud_type(mut self, cloud_type: impl Into<String>) -> Self {
        self.cloud_type = Some(cloud_type.into());
        self
    }

    pub fn account_type(mut self, account_type: impl Into<String>) -> Self {
        self.account_type = Some(account_type.into());
        self
    }

    pub fn without_id(mut self) -> Self {
        self.account_id = None;
        self
    }

    pub fn without_name(mut self) -> Self {
        self.name = None;
        self
    }

    pub fn without_cloud_type(mut self) -> Self {
        self.cloud_type = None;
        self
    }

    pub fn build(self) -> CloudAccount {
        CloudAccount {
            account_id: self.account_id,
            name: self.name,
            cloud_type: self.cloud_type,
            account_type: self.account_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_defaults() {
        let account = CloudAccountBuilder::account("A1").build();
        assert_eq!(account.account_id.as_deref(), Some("A1"));
        assert_eq!(account.name.as_deref(), Some("Account A1"));
        assert_eq!(account.cloud_type.as_deref(), Some("aws"));
        assert!(!account.is_organization());
    }

    #[test]
    fn test_organization_builder() {
        let org = CloudAccountBuilder::organization("O1").name("Org1").build();
        assert!(org.is_organization());
        assert_eq!(org.name.as_deref(), Some("Org1"));
    }

    #[test]
    fn test_member_has_no_account_type() {
        assert!(CloudAccountBuilder::member("m1").build().account_type.is_none());
    }
}
