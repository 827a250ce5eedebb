use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{HomePage, LogoutPage, NotFoundPage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/logout")]
    Logout,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// How a page is brought in when its route is visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Loading {
    Eager,
    /// Rendered under `<Suspense>`; does its work only once visited.
    Lazy,
}

impl Route {
    pub fn loading(&self) -> Loading {
        match self {
            Route::Home | Route::NotFound => Loading::Eager,
            Route::Logout => Loading::Lazy,
        }
    }
}

pub fn switch(route: Route) -> Html {
    let page = match route {
        Route::Home => html! { <HomePage /> },
        Route::Logout => html! { <LogoutPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    };

    match route.loading() {
        Loading::Eager => page,
        Loading::Lazy => html! {
            <Suspense fallback={loading_spinner()}>{page}</Suspense>
        },
    }
}

fn loading_spinner() -> Html {
    html! {
        <div class="text-center py-8">
            <div class="inline-block animate-spin rounded-full h-8 w-8 border-2 border-neutral-900 dark:border-neutral-100 border-t-transparent dark:border-t-transparent"></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_resolve() {
        assert_eq!(Route::recognize("/logout"), Some(Route::Logout));
        assert_eq!(Route::recognize("/404"), Some(Route::NotFound));
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        for path in ["/foo/bar", "/logout/now", "/users/1"] {
            assert_eq!(Route::recognize(path), Some(Route::NotFound), "{path}");
        }
    }

    #[test]
    fn paths_round_trip() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Logout.to_path(), "/logout");
        assert_eq!(Route::NotFound.to_path(), "/404");
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }

    #[test]
    fn only_logout_is_lazy() {
        assert_eq!(Route::Home.loading(), Loading::Eager);
        assert_eq!(Route::Logout.loading(), Loading::Lazy);
        assert_eq!(Route::NotFound.loading(), Loading::Eager);
    }
}
