use crate::{requests, responses};
use reqwest::StatusCode;
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the backend.
#[derive(Clone)]
pub struct APIClient {
    /// Base URL of the backend API, e.g. `http://localhost:4000/`
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            inner_client: reqwest::Client::new(),
        }
    }

    fn format_url(&self, path: &str) -> String {
        format!("{}/{path}", self.address.trim_end_matches('/'))
    }

    async fn empty_post(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn get_with_query(
        &self,
        path: &str,
        query: &impl Serialize,
    ) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path)).query(query);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// Methods on the backend API
impl APIClient {
    /// Get the currently signed-in user.
    ///
    /// A 401 carrying a sign-in URL comes back as
    /// [`ClientError::Unauthenticated`]. A 401 without one is an ordinary
    /// [`ClientError::APIError`].
    pub async fn current_user(
        &self,
    ) -> Result<responses::UserProfile, ClientError> {
        let response = self.empty_get("user").await?;
        if response.status() == StatusCode::UNAUTHORIZED {
            let status = response.status();
            let text = response.text().await?;
            return match serde_json::from_str::<responses::SignInRequired>(
                &text,
            ) {
                Ok(body) => {
                    Err(ClientError::Unauthenticated(body.spotify_connect_url))
                }
                Err(e) => {
                    tracing::warn!("401 from /user without a sign-in url: {e}");
                    Err(ClientError::APIError(status, text))
                }
            };
        }
        ok_body(response).await
    }

    /// End the backend session.
    pub async fn logout(&self) -> Result<(), ClientError> {
        let response = self.empty_post("logout").await?;
        ok_empty(response).await
    }

    /// Get one page of the signed-in user's activity feed, newest first.
    pub async fn events(
        &self,
        page: &requests::EventsPage,
    ) -> Result<Vec<responses::Event>, ClientError> {
        let response = self.get_with_query("events", page).await?;
        let list: responses::EventList = ok_body(response).await?;
        Ok(list.items)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The backend has no session for us and offers an external sign-in
    /// URL instead.
    #[error("Sign-in required")]
    Unauthenticated(String),
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}
