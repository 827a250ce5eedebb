use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::Route;
use crate::guard::check_identity;
use crate::hooks::use_api_client;
use crate::state::Session;

#[derive(Debug, Clone, PartialEq)]
enum GuardStatus {
    Checking,
    Ready,
    Failed(String),
}

#[derive(Properties, PartialEq)]
pub struct AuthGuardProps {
    #[prop_or_default]
    pub children: Children,
}

/// Resolves the current user before rendering its children.
///
/// Runs on every navigation. While the identity request is in flight a
/// spinner is shown; if it fails the children are not rendered at all and
/// a blocking error takes their place.
#[function_component]
pub fn AuthGuard(props: &AuthGuardProps) -> Html {
    let (session, dispatch) = use_store::<Session>();
    let api_client = use_api_client();
    let route = use_route::<Route>();
    let status = use_state(|| GuardStatus::Checking);

    {
        let status = status.clone();
        use_effect_with(route, move |route| {
            tracing::debug!(?route, "Checking identity before navigation");
            if !session.is_authenticated() {
                status.set(GuardStatus::Checking);
            }

            yew::platform::spawn_local(async move {
                match check_identity(&session, &*api_client).await {
                    Ok(outcome) => {
                        dispatch.reduce_mut(|session| outcome.apply(session));
                        status.set(GuardStatus::Ready);
                    }
                    Err(e) => status.set(GuardStatus::Failed(e.to_string())),
                }
            });
        });
    }

    match &*status {
        GuardStatus::Checking => html! {
            <div class="text-center space-y-4 py-8">
                <div class="inline-block animate-spin rounded-full h-8 w-8 border-b-2 border-neutral-900 dark:border-neutral-100"></div>
                <p class="text-neutral-600 dark:text-neutral-400">{"Checking authentication..."}</p>
            </div>
        },
        GuardStatus::Failed(message) => html! {
            <div class="max-w-md mx-auto mt-16 p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                <p class="text-sm text-red-700 dark:text-red-400">{message}</p>
            </div>
        },
        GuardStatus::Ready => html! {
            <>
                {for props.children.iter()}
            </>
        },
    }
}
