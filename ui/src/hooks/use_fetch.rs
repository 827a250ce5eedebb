use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use super::FetchState;

/// Generic fetch hook return type
pub struct FetchHookReturn<T> {
    pub data: FetchState<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
}

impl<T: Clone> FetchHookReturn<T> {
    /// Render based on fetch state with contextual loading/error messages.
    ///
    /// Until data arrives this shows "Loading {context}..." or the error.
    /// Once data is present `render_fn` gets it along with whether a refetch
    /// is running and the error of a failed refetch, if any.
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: Fn(&T, bool, Option<&String>) -> Html,
    {
        match self.data.as_ref() {
            None => {
                if let Some(error) = &self.error {
                    html! {
                        <div class="p-4 rounded-md bg-red-50 \
                                   dark:bg-red-900/20 border \
                                   border-red-200 dark:border-red-800">
                            <p class="text-sm text-red-700 \
                                      dark:text-red-400">
                                {format!("Error loading {}: {}", context, error)}
                            </p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {format!("Loading {}...", context)}
                            </p>
                        </div>
                    }
                }
            }
            Some(data) => render_fn(data, self.is_loading, self.error.as_ref()),
        }
    }
}

/// Generic fetch hook composer.
///
/// Fetches on mount and whenever `deps` changes, and provides a refetch
/// callback. `fetch_fn` captures what it needs; `deps` only drives the
/// effect.
///
/// # Example
///
/// ```rust,ignore
/// #[hook]
/// pub fn use_events(user_id: UserId) -> FetchHookReturn<Vec<Event>> {
///     let api_client = use_api_client();
///     use_fetch(user_id, move || {
///         let api_client = api_client.clone();
///         async move {
///             api_client
///                 .events(&EventsPage::default())
///                 .await
///                 .map_err(|e| e.to_string())
///         }
///     })
/// }
/// ```
#[hook]
pub fn use_fetch<T, D, F, Fut>(deps: D, fetch_fn: F) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let data = use_state(|| FetchState::NotFetched);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let refetch = {
        let data = data.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();
        let fetch_fn = Rc::new(fetch_fn);

        use_callback(deps.clone(), move |_, _| {
            let data = data.clone();
            let error = error.clone();
            let is_loading = is_loading.clone();
            let fetch_fn = fetch_fn.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error.set(None);

                match fetch_fn().await {
                    Ok(result) => data.set(FetchState::Fetched(result)),
                    Err(e) => {
                        tracing::warn!("Fetch failed: {e}");
                        error.set(Some(e));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    {
        let refetch = refetch.clone();
        let is_loading = is_loading.clone();

        use_effect_with(deps, move |_| {
            if !*is_loading {
                refetch.emit(());
            }
        });
    }

    FetchHookReturn {
        data: (*data).clone(),
        is_loading: *is_loading,
        error: (*error).clone(),
        refetch: Callback::from(move |_| refetch.emit(())),
    }
}
