//! Inventory pipeline stages
//!
//! - [`authenticate`] exchanges credentials for a [`Session`](crate::client::Session)
//! - [`Discoverer`] flattens top-level and member accounts into [`AccountRecord`]s

mod auth;
mod discovery;
mod record;

pub use auth::authenticate;
pub use discovery::Discoverer;
pub use record::{AccountRecord, DIRECTLY_ONBOARDED, IS_PARENT};
