/// Number of user records requested per fetch.
pub const BATCH_SIZE: usize = 4;

/// Maximum number of avatar cards shown in the grid.
pub const CARD_COUNT: usize = 3;

/// Number of placeholder cards shown while the batch is loading.
pub const SKELETON_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub users_endpoint: String,
    pub viewer_name: String,
}

impl Config {
    const DEFAULT_USERS_ENDPOINT: &str = "https://dummyjson.com/users";
    const DEFAULT_VIEWER_NAME: &str = "Sayan";

    /// Reads overrides from the process environment. On wasm32 there is none,
    /// so the browser build always runs with the defaults.
    pub fn from_env() -> Self {
        Self {
            users_endpoint: std::env::var("AVATAR_USERS_ENDPOINT")
                .unwrap_or_else(|_| Self::DEFAULT_USERS_ENDPOINT.to_string()),
            viewer_name: std::env::var("AVATAR_VIEWER_NAME")
                .unwrap_or_else(|_| Self::DEFAULT_VIEWER_NAME.to_string()),
        }
    }

    pub fn with_users_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.users_endpoint = endpoint.into();
        self
    }

    /// Full URL of the batch request, including the size limit.
    pub fn batch_url(&self) -> String {
        format!(
            "{}?limit={}",
            self.users_endpoint.trim_end_matches('/'),
            BATCH_SIZE
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            users_endpoint: Self::DEFAULT_USERS_ENDPOINT.to_string(),
            viewer_name: Self::DEFAULT_VIEWER_NAME.to_string(),
        }
    }
}
