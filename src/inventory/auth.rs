//! Login stage

use crate::client::{CloudAccountApi, Session};
use crate::config::Credentials;
use crate::error::Result;
use crate::events::{EventSink, Stage};

/// Log in and return the session, reporting progress to `events`.
///
/// Any failure is terminal for the run; the error is reported and returned.
pub async fn authenticate<A, S>(api: &A, credentials: &Credentials, events: &S) -> Result<Session>
where
    A: CloudAccountApi + ?Sized,
    S: EventSink,
{
    events.info(
        Stage::Login,
        format!(
            "Attempting login to: {}/login...",
            credentials.api_url().trim_end_matches('/')
        ),
    );

    match api.login(credentials).await {
        Ok(session) => {
            events.success(Stage::Login, "Login successful.");
            Ok(session)
        }
        Err(err) => {
            events.error(Stage::Login, format!("Login failed: {}", err));
            Err(err)
        }
    }
}
