use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod config;
pub mod guard;
pub mod hooks;
mod logs;
pub mod pages;
pub mod routes;
pub mod state;

use components::AuthGuard;
use config::AppConfig;
pub use routes::Route;
use routes::switch;

#[function_component]
pub fn App() -> Html {
    use_memo((), |_| logs::init_logging());

    // Resolved once for the lifetime of the app
    let config = use_memo((), |_| {
        let config = AppConfig::from_browser();
        match &config {
            Ok(config) => tracing::info!(
                environment = ?config.environment,
                current_user = %config.current_user_url(),
                "Resolved API location"
            ),
            Err(e) => tracing::error!("Failed to resolve API location: {e}"),
        }
        config
    });

    let config = match &*config {
        Ok(config) => config.clone(),
        Err(_) => {
            return html! {
                <main class="max-w-md mx-auto mt-16 p-4">
                    <p class="text-sm text-red-700 dark:text-red-400">
                        {"Cannot connect to the API"}
                    </p>
                </main>
            };
        }
    };

    html! {
        <ContextProvider<AppConfig> context={config}>
            <BrowserRouter>
                <div class="min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100 transition-colors">
                    <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                        <AuthGuard>
                            <Switch<Route> render={switch} />
                        </AuthGuard>
                    </main>
                </div>
            </BrowserRouter>
        </ContextProvider<AppConfig>>
    }
}
