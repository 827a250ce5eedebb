use yew::prelude::*;
use yew::suspense::use_future;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::Route;
use crate::hooks::use_api_client;
use crate::state::Session;

/// Ends the backend session on first visit, then goes home where the guard
/// picks up a fresh sign-in URL.
#[function_component]
pub fn LogoutPage() -> HtmlResult {
    let api_client = use_api_client();
    let (_, dispatch) = use_store::<Session>();
    let navigator = use_navigator();

    let result = use_future(move || async move {
        api_client.logout().await.map_err(|e| {
            tracing::error!("Logout failed: {e}");
            e.to_string()
        })?;

        dispatch.reduce_mut(|session| session.logout());
        if let Some(navigator) = navigator {
            navigator.push(&Route::Home);
        }
        Ok::<_, String>(())
    })?;

    Ok(match &*result {
        Ok(()) => html! {
            <p class="text-center text-neutral-600 dark:text-neutral-400">
                {"Logged out."}
            </p>
        },
        Err(e) => html! {
            <div class="max-w-md mx-auto p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                <p class="text-sm text-red-700 dark:text-red-400">
                    {format!("Could not log out: {e}")}
                </p>
            </div>
        },
    })
}
