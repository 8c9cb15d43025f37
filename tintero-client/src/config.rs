/// Environment variable that overrides the backend base URL.
pub const ENV_BASE_URL: &str = "TINTERO_API_URL";

/// Base URL used when [`ENV_BASE_URL`] is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8001";

/// Server-side access-token lifetime, in seconds. Informational; the
/// backend is authoritative.
pub const ACCESS_TOKEN_TTL_SECS: u64 = 900;

/// Server-side refresh-token lifetime, in seconds. Informational; the
/// backend is authoritative.
pub const REFRESH_TOKEN_TTL_SECS: u64 = 604_800;

/// Fixed table of backend endpoint paths.
#[derive(Clone, Debug)]
pub struct Endpoints {
    /// `POST` — create an account.
    pub register: &'static str,
    /// `POST` — exchange credentials for tokens.
    pub login: &'static str,
    /// `POST` — invalidate a refresh token.
    pub logout: &'static str,
    /// `POST` — mint a new access token.
    pub refresh: &'static str,
    /// Collection path for blog posts; item paths append `/{id}`.
    pub blog_posts: &'static str,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            register: "/api/auth/register",
            login: "/api/auth/login",
            logout: "/api/auth/logout",
            refresh: "/api/auth/refresh",
            blog_posts: "/api/blog/posts",
        }
    }
}

/// Connection settings for [`crate::ApiClient`].
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Backend origin, without a trailing slash.
    pub base_url: String,
    /// Endpoint path table.
    pub endpoints: Endpoints,
}

impl ClientConfig {
    /// Build a config for the given backend origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            endpoints: Endpoints::default(),
        }
    }

    /// Read the base URL from [`ENV_BASE_URL`], falling back to
    /// [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(ENV_BASE_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
        Self::new(base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped() {
        let config = ClientConfig::new("http://localhost:8001/");
        assert_eq!(config.base_url, "http://localhost:8001");
    }

    #[test]
    fn from_env_reads_override_then_falls_back() {
        std::env::set_var(ENV_BASE_URL, "https://api.tintero.example");
        assert_eq!(ClientConfig::from_env().base_url, "https://api.tintero.example");
        std::env::remove_var(ENV_BASE_URL);
        assert_eq!(ClientConfig::from_env().base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn endpoint_table_matches_the_wire_contract() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.register, "/api/auth/register");
        assert_eq!(endpoints.login, "/api/auth/login");
        assert_eq!(endpoints.logout, "/api/auth/logout");
        assert_eq!(endpoints.refresh, "/api/auth/refresh");
        assert_eq!(endpoints.blog_posts, "/api/blog/posts");
    }
}
