pub mod use_api_client;
pub mod use_events;
pub mod use_fetch;

pub use use_api_client::use_api_client;
pub use use_events::use_events;
pub use use_fetch::{FetchHookReturn, use_fetch};

/// Data that distinguishes "not fetched yet" from "fetched, possibly empty".
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::NotFetched => None,
            Self::Fetched(data) => Some(data),
        }
    }
}
