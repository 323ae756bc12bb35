use reqwest::Client;
use tracing::{info, warn};

use crate::api::UsersResponse;
use crate::config::Config;
use crate::error::FetchFailure;
use crate::model::{AvatarDisplayModel, to_display_models};

#[derive(Clone)]
pub struct AvatarClient {
    client: Client,
    config: Config,
}

impl AvatarClient {
    pub fn new() -> Self {
        Self::with_config(Config::from_env())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for AvatarClient {
    fn default() -> Self {
        Self::new()
    }
}

impl AvatarClient {
    /// Fetches one batch of users from the remote service.
    pub async fn fetch_users(&self) -> Result<UsersResponse, FetchFailure> {
        let url = self.config.batch_url();
        info!("Fetching users from URL: {}", url);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Users request returned status {}", status);
            return Err(FetchFailure::new(format!("unexpected status {status}")));
        }

        let body = response.text().await?;
        let users: UsersResponse = serde_json::from_str(&body)?;
        info!(
            "Fetched {} users (limit {}, {} available)",
            users.users.len(),
            users.limit,
            users.total
        );
        Ok(users)
    }

    /// Fetches one batch and maps it to display models.
    pub async fn load_avatars(&self) -> Result<Vec<AvatarDisplayModel>, FetchFailure> {
        let response = self.fetch_users().await?;
        let avatars = to_display_models(response.users);
        info!("Loaded {} avatars", avatars.len());
        Ok(avatars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LOAD_FAILED_MESSAGE;
    use crate::model::AvatarType;
    use axum::Router;
    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::routing::get;
    use serde_json::{Value, json};
    use std::collections::HashMap;

    async fn spawn_server(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/users", addr)
    }

    fn client_for(endpoint: String) -> AvatarClient {
        AvatarClient::with_config(Config::default().with_users_endpoint(endpoint))
    }

    fn users_body(count: usize) -> Value {
        let names = ["A", "B", "C", "D"];
        let users: Vec<Value> = names
            .iter()
            .take(count)
            .enumerate()
            .map(|(i, name)| {
                json!({
                    "id": i + 1,
                    "firstName": name,
                    "lastName": name,
                    "image": format!("https://example.com/{}.png", i + 1),
                })
            })
            .collect();
        json!({ "users": users, "total": 208, "skip": 0, "limit": count })
    }

    #[tokio::test]
    async fn test_load_avatars_success() {
        let router = Router::new().route(
            "/users",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                let limit: usize = params.get("limit").unwrap().parse().unwrap();
                axum::Json(users_body(limit))
            }),
        );
        let client = client_for(spawn_server(router).await);

        let avatars = client.load_avatars().await.unwrap();
        assert_eq!(avatars.len(), 4);

        let ids: Vec<u64> = avatars.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(avatars[0].name, "A A");
        assert_eq!(avatars[3].name, "D D");
        assert_eq!(avatars[0].avatar_type, AvatarType::Professional);
        assert_eq!(avatars[1].avatar_type, AvatarType::Casual);
        assert_eq!(avatars[2].avatar_type, AvatarType::Creative);
        assert_eq!(avatars[3].avatar_type, AvatarType::Creative);
    }

    #[tokio::test]
    async fn test_request_carries_batch_limit() {
        let router = Router::new().route(
            "/users",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                match params.get("limit").map(String::as_str) {
                    Some("4") => (StatusCode::OK, axum::Json(users_body(4))),
                    _ => (StatusCode::BAD_REQUEST, axum::Json(json!({}))),
                }
            }),
        );
        let client = client_for(spawn_server(router).await);

        let response = client.fetch_users().await.unwrap();
        assert_eq!(response.users.len(), 4);
        assert_eq!(response.limit, 4);
    }

    #[tokio::test]
    async fn test_non_success_status_is_failure() {
        let router = Router::new().route(
            "/users",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let client = client_for(spawn_server(router).await);

        let err = client.load_avatars().await.unwrap_err();
        assert!(err.cause().contains("500"));
        assert_eq!(err.user_message(), LOAD_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn test_not_found_is_failure() {
        let client = client_for(spawn_server(Router::new()).await);

        let err = client.load_avatars().await.unwrap_err();
        assert!(err.cause().contains("404"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_failure() {
        let router = Router::new().route("/users", get(|| async { "not json" }));
        let client = client_for(spawn_server(router).await);

        let err = client.load_avatars().await.unwrap_err();
        assert_eq!(err.user_message(), LOAD_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn test_transport_error_is_failure() {
        // Bind then drop to get a port nothing listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(format!("http://{}/users", addr));
        let result = client.load_avatars().await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_empty_batch_is_success() {
        let router = Router::new().route("/users", get(|| async { axum::Json(users_body(0)) }));
        let client = client_for(spawn_server(router).await);

        let avatars = client.load_avatars().await.unwrap();
        assert!(avatars.is_empty());
    }
}
