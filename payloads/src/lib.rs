pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Identifier of a backend user.
///
/// The backend sends either a number or a string, and the UI only ever
/// compares and displays it.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
#[serde(untagged)]
pub enum UserId {
    #[display("{_0}")]
    Number(i64),
    #[display("{_0}")]
    Text(String),
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}
