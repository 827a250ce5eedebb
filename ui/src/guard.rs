//! Identity resolution that runs before a routed page is shown.

use payloads::{APIClient, ClientError, responses::UserProfile};

use crate::state::Session;

/// Something that can tell us who the current user is.
#[allow(async_fn_in_trait)]
pub trait IdentitySource {
    async fn current_user(&self) -> Result<UserProfile, ClientError>;
}

impl IdentitySource for APIClient {
    async fn current_user(&self) -> Result<UserProfile, ClientError> {
        APIClient::current_user(self).await
    }
}

/// What the guard learned, to be applied to the [`Session`].
#[derive(Debug, Clone, PartialEq)]
pub enum GuardOutcome {
    /// The session already had an identity; nothing was requested.
    AlreadyResolved,
    LoggedIn(UserProfile),
    /// Not signed in. Holds the external sign-in URL.
    SignInRequired(String),
}

impl GuardOutcome {
    pub fn apply(self, session: &mut Session) {
        match self {
            GuardOutcome::AlreadyResolved => {}
            GuardOutcome::LoggedIn(profile) => session.login(profile),
            GuardOutcome::SignInRequired(url) => session.set_auth_url(url),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GuardError {
    #[error("Cannot connect to the API")]
    CannotConnect(#[source] ClientError),
}

/// Ask `source` for the current user unless `session` already knows it.
///
/// Makes at most one request. A sign-in URL from the backend is a normal
/// outcome; every other failure is [`GuardError::CannotConnect`].
pub async fn check_identity<S: IdentitySource>(
    session: &Session,
    source: &S,
) -> Result<GuardOutcome, GuardError> {
    if session.is_authenticated() {
        return Ok(GuardOutcome::AlreadyResolved);
    }

    match source.current_user().await {
        Ok(profile) => {
            tracing::debug!(user = %profile.id, "Signed in");
            Ok(GuardOutcome::LoggedIn(profile))
        }
        Err(ClientError::Unauthenticated(url)) => {
            tracing::debug!("Not signed in, sign-in url received");
            Ok(GuardOutcome::SignInRequired(url))
        }
        Err(e) => {
            tracing::error!("Failed to resolve current user: {e}");
            Err(GuardError::CannotConnect(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use payloads::UserId;
    use reqwest::StatusCode;
    use std::cell::Cell;

    /// Answers with whatever `respond` builds and counts the calls.
    struct FakeSource<F> {
        respond: F,
        calls: Cell<usize>,
    }

    impl<F> FakeSource<F>
    where
        F: Fn() -> Result<UserProfile, ClientError>,
    {
        fn new(respond: F) -> Self {
            Self {
                respond,
                calls: Cell::new(0),
            }
        }
    }

    impl<F> IdentitySource for FakeSource<F>
    where
        F: Fn() -> Result<UserProfile, ClientError>,
    {
        async fn current_user(&self) -> Result<UserProfile, ClientError> {
            self.calls.set(self.calls.get() + 1);
            (self.respond)()
        }
    }

    fn profile() -> UserProfile {
        UserProfile {
            id: UserId::Number(1),
            name: Some("A".into()),
            picture: Some("p".into()),
            email: None,
        }
    }

    fn network_error() -> ClientError {
        let err = reqwest::Client::new()
            .get("not a url")
            .build()
            .expect_err("an invalid url fails to build");
        ClientError::Network(err)
    }

    /// Runs the guard and applies its outcome, the way the component does.
    fn run<F>(
        session: &mut Session,
        source: &FakeSource<F>,
    ) -> Result<GuardOutcome, GuardError>
    where
        F: Fn() -> Result<UserProfile, ClientError>,
    {
        let outcome = block_on(check_identity(session, source))?;
        outcome.clone().apply(session);
        Ok(outcome)
    }

    #[test]
    fn successful_fetch_logs_in() -> anyhow::Result<()> {
        let mut session = Session::default();
        session.set_auth_url("https://stale".into());
        let source = FakeSource::new(|| Ok(profile()));

        let outcome = run(&mut session, &source)?;

        assert_eq!(outcome, GuardOutcome::LoggedIn(profile()));
        assert_eq!(session.id(), Some(&UserId::Number(1)));
        assert_eq!(session.name(), Some("A"));
        assert_eq!(session.picture(), Some("p"));
        assert!(session.auth_url().is_none());
        assert_eq!(source.calls.get(), 1);
        Ok(())
    }

    #[test]
    fn resolved_session_skips_the_request() -> anyhow::Result<()> {
        let mut session = Session::default();
        let source = FakeSource::new(|| Ok(profile()));

        run(&mut session, &source)?;
        for _ in 0..3 {
            let outcome = run(&mut session, &source)?;
            assert_eq!(outcome, GuardOutcome::AlreadyResolved);
        }

        assert_eq!(source.calls.get(), 1);
        Ok(())
    }

    #[test]
    fn unauthenticated_records_sign_in_url() -> anyhow::Result<()> {
        let mut session = Session::default();
        let source = FakeSource::new(|| {
            Err(ClientError::Unauthenticated("https://x".into()))
        });

        let outcome = run(&mut session, &source)?;

        assert_eq!(outcome, GuardOutcome::SignInRequired("https://x".into()));
        assert!(session.id().is_none());
        assert_eq!(session.auth_url(), Some("https://x"));
        Ok(())
    }

    #[test]
    fn unauthenticated_session_asks_again() -> anyhow::Result<()> {
        let mut session = Session::default();
        let source = FakeSource::new(|| {
            Err(ClientError::Unauthenticated("https://x".into()))
        });

        run(&mut session, &source)?;
        run(&mut session, &source)?;

        assert_eq!(source.calls.get(), 2);
        Ok(())
    }

    #[test]
    fn server_error_is_fatal_and_leaves_session_alone() {
        let mut session = Session::default();
        session.set_auth_url("https://x".into());
        let before = session.clone();
        let source = FakeSource::new(|| {
            Err(ClientError::APIError(
                StatusCode::INTERNAL_SERVER_ERROR,
                "boom".into(),
            ))
        });

        let result = run(&mut session, &source);

        let err = result.expect_err("a 500 must not resolve");
        assert_eq!(err.to_string(), "Cannot connect to the API");
        assert_eq!(session, before);
        assert_eq!(source.calls.get(), 1);
    }

    #[test]
    fn network_failure_is_fatal_and_leaves_session_alone() {
        let mut session = Session::default();
        let source = FakeSource::new(|| Err(network_error()));

        let result = run(&mut session, &source);

        assert!(matches!(
            result,
            Err(GuardError::CannotConnect(ClientError::Network(_)))
        ));
        assert_eq!(session, Session::default());
    }

    #[test]
    fn unauthorized_without_url_is_fatal() {
        let mut session = Session::default();
        let source = FakeSource::new(|| {
            Err(ClientError::APIError(
                StatusCode::UNAUTHORIZED,
                r#"{"error":"Not logged in"}"#.into(),
            ))
        });

        assert!(run(&mut session, &source).is_err());
        assert!(session.auth_url().is_none());
    }
}
