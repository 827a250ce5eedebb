use payloads::{UserId, requests::EventsPage, responses::Event};
use yew::prelude::*;

use super::{FetchHookReturn, use_api_client, use_fetch};

/// First page of the signed-in user's activity feed. Refetches when the
/// user changes.
#[hook]
pub fn use_events(user_id: UserId) -> FetchHookReturn<Vec<Event>> {
    let api_client = use_api_client();

    use_fetch(user_id, move || {
        let api_client = api_client.clone();
        async move {
            api_client
                .events(&EventsPage::default())
                .await
                .map_err(|e| e.to_string())
        }
    })
}
