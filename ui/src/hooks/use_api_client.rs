use payloads::APIClient;
use std::rc::Rc;
use yew::prelude::*;

use crate::config::AppConfig;

/// API client for the [`AppConfig`] provided by `App`.
///
/// Without a provided config the client has no usable base URL, so every
/// request fails and surfaces as a connection error.
#[hook]
pub fn use_api_client() -> Rc<APIClient> {
    let config = use_context::<AppConfig>();
    use_memo(config, |config| match config {
        Some(config) => config.api_client(),
        None => {
            tracing::error!("use_api_client called outside of App");
            APIClient::new("")
        }
    })
}
