//! Backend address selection, resolved once when the app starts.

use payloads::APIClient;

/// Where the API lives while developing: the Python server on another port.
pub const DEVELOPMENT_API_URL: &str = "http://localhost:4000/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Default,
}

impl Environment {
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("development") => Self::Development,
            _ => Self::Default,
        }
    }

    /// Reads the `APP_ENV` variable set at build time.
    pub fn from_build() -> Self {
        Self::from_flag(option_env!("APP_ENV"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub environment: Environment,
    /// Base URL of the API, always ending in `/`
    pub api_base: String,
}

impl AppConfig {
    /// Pick the API base for `environment`. `origin` is the page origin and
    /// is only used outside development.
    pub fn resolve(environment: Environment, origin: &str) -> Self {
        let api_base = match environment {
            Environment::Development => DEVELOPMENT_API_URL.to_string(),
            Environment::Default => {
                format!("{}/", origin.trim_end_matches('/'))
            }
        };
        Self {
            environment,
            api_base,
        }
    }

    /// Resolve from the build environment and the browser's location.
    pub fn from_browser() -> Result<Self, ConfigError> {
        let environment = Environment::from_build();
        if environment == Environment::Development {
            return Ok(Self::resolve(environment, ""));
        }

        let window = web_sys::window().ok_or(ConfigError::NoWindow)?;
        let origin = window
            .location()
            .origin()
            .map_err(|_| ConfigError::Origin)?;
        Ok(Self::resolve(environment, &origin))
    }

    pub fn current_user_url(&self) -> String {
        format!("{}user", self.api_base)
    }

    pub fn api_client(&self) -> APIClient {
        APIClient::new(self.api_base.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("No browser window available")]
    NoWindow,
    #[error("Could not read the page origin")]
    Origin,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_flag_uses_local_api() {
        let env = Environment::from_flag(Some("development"));
        assert_eq!(env, Environment::Development);

        let config = AppConfig::resolve(env, "https://spotlike.example");
        assert_eq!(config.api_base, "http://localhost:4000/");
        assert_eq!(config.current_user_url(), "http://localhost:4000/user");
    }

    #[test]
    fn other_flags_use_page_origin() {
        for flag in [None, Some("production"), Some("")] {
            assert_eq!(Environment::from_flag(flag), Environment::Default);
        }

        let config =
            AppConfig::resolve(Environment::Default, "https://spotlike.example");
        assert_eq!(config.api_base, "https://spotlike.example/");
        assert_eq!(
            config.current_user_url(),
            "https://spotlike.example/user"
        );
    }

    #[test]
    fn origin_with_trailing_slash_is_not_doubled() {
        let config = AppConfig::resolve(
            Environment::Default,
            "http://127.0.0.1:8080/",
        );
        assert_eq!(config.api_base, "http://127.0.0.1:8080/");
        assert_eq!(config.api_client().address, "http://127.0.0.1:8080/");
    }
}
