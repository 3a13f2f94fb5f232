//! Cloud account models

use serde::{Deserialize, Serialize};

/// Account types that act as containers for member accounts.
const ORGANIZATION_ACCOUNT_TYPES: [&str; 3] = ["ORGANIZATION", "MASTER_SERVICE_ACCOUNT", "TENANT"];

/// Cloud account as returned by `GET /cloud` and the member listing endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudAccount {
    /// Provider-assigned account ID
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_opaque_string"
    )]
    pub account_id: Option<String>,

    /// Display name
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_opaque_string"
    )]
    pub name: Option<String>,

    /// Cloud platform tag (aws, azure, gcp, oci, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_type: Option<String>,

    /// Account type (account, organization, tenant, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
}

impl CloudAccount {
    /// Whether this account owns member accounts that need a separate listing.
    ///
    /// Unrecognized and missing account types are treated as standalone.
    pub fn is_organization(&self) -> bool {
        self.account_type
            .as_deref()
            .is_some_and(|t| ORGANIZATION_ACCOUNT_TYPES.contains(&t))
    }
}

/// Identifiers are opaque; some endpoints send them as JSON numbers.
fn deserialize_optional_opaque_string<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::de::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        String(String),
        Number(serde_json::Number),
        Bool(bool),
    }

    Ok(
        Option::<NumberOrString>::deserialize(deserializer)?.map(|value| match value {
            NumberOrString::String(s) => s,
            NumberOrString::Number(n) => n.to_string(),
            NumberOrString::Bool(b) => b.to_string(),
        }),
    )
}
