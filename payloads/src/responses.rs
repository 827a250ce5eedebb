use crate::UserId;
use serde::{Deserialize, Serialize};

/// The signed-in user, as returned by `GET /user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    #[serde(default)]
    pub name: Option<String>,
    /// Avatar image URL
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Body of the 401 returned by `GET /user` when there is no session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInRequired {
    /// Where to send the user to connect their Spotify account
    pub spotify_connect_url: String,
}

/// One entry of the user's activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub message: String,
    /// Formatted by the backend; displayed as-is.
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventList {
    pub items: Vec<Event>,
}
