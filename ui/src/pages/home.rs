use payloads::responses::{Event, UserProfile};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::Route;
use crate::hooks::use_events;
use crate::state::Session;

#[function_component]
pub fn HomePage() -> Html {
    let (session, _) = use_store::<Session>();

    match (session.profile(), session.auth_url()) {
        (Some(profile), _) => html! {
            <SignedInHome profile={profile.clone()} />
        },
        (None, Some(auth_url)) => html! {
            <div class="text-center space-y-6 py-16">
                <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Spotlike"}
                </h1>
                <p class="text-lg text-neutral-600 dark:text-neutral-400">
                    {"Connect your Spotify account to get started."}
                </p>
                <a
                    href={auth_url.to_string()}
                    class="inline-block bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 text-white px-4 py-2 rounded-md text-sm font-medium transition-colors"
                >
                    {"Connect with Spotify"}
                </a>
            </div>
        },
        // The guard always leaves one of the two above, this only shows if
        // the page is rendered outside of it.
        (None, None) => html! {
            <p class="text-center text-neutral-600 dark:text-neutral-400">
                {"Not signed in."}
            </p>
        },
    }
}

#[derive(Properties, PartialEq)]
struct SignedInHomeProps {
    profile: UserProfile,
}

#[function_component]
fn SignedInHome(props: &SignedInHomeProps) -> Html {
    let profile = &props.profile;
    let events = use_events(profile.id.clone());
    let name = profile.name.as_deref().unwrap_or("there");

    html! {
        <div class="space-y-8">
            <div class="flex items-center gap-4">
                {render_avatar(profile)}
                <div>
                    <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                        {format!("Welcome back, {name}!")}
                    </h1>
                    if let Some(email) = &profile.email {
                        <p class="text-sm text-neutral-600 dark:text-neutral-400">{email}</p>
                    }
                </div>
                <Link<Route>
                    to={Route::Logout}
                    classes="ml-auto text-sm text-neutral-900 dark:text-neutral-100 underline"
                >
                    {"Log out"}
                </Link<Route>>
            </div>

            <section class="space-y-2">
                <h2 class="text-xl font-semibold text-neutral-900 dark:text-neutral-100">
                    {"Recent activity"}
                </h2>
                {events.render("activity", |events, _, _| render_events(events))}
            </section>
        </div>
    }
}

/// Profile picture, or the first letter of the name when there is none.
fn render_avatar(profile: &UserProfile) -> Html {
    if let Some(picture) = &profile.picture {
        return html! {
            <img src={picture.clone()} alt="" class="h-12 w-12 rounded-full object-cover" />
        };
    }

    let initial = profile
        .name
        .as_deref()
        .and_then(|name| name.chars().next())
        .unwrap_or('?')
        .to_uppercase()
        .to_string();

    html! {
        <div class="h-12 w-12 rounded-full bg-neutral-200 dark:bg-neutral-700 flex items-center justify-center">
            <span class="text-lg font-medium text-neutral-700 dark:text-neutral-200">{initial}</span>
        </div>
    }
}

fn render_events(events: &[Event]) -> Html {
    if events.is_empty() {
        return html! {
            <p class="text-sm text-neutral-600 dark:text-neutral-400">{"Nothing yet."}</p>
        };
    }

    html! {
        <ul class="divide-y divide-neutral-200 dark:divide-neutral-700">
            {for events.iter().map(|event| html! {
                <li key={event.id.to_string()} class="py-2">
                    <p class="text-neutral-900 dark:text-neutral-100">{&event.message}</p>
                    <p class="text-xs text-neutral-500">{&event.date}</p>
                </li>
            })}
        </ul>
    }
}
