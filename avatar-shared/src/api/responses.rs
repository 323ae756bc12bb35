use serde::Deserialize;

/// Response body of the users listing endpoint
#[derive(Debug, Deserialize)]
pub struct UsersResponse {
    /// The requested batch of users
    pub users: Vec<RemoteUser>,
    /// Total number of users known to the remote service
    #[serde(default)]
    pub total: u64,
    /// Batch size the remote service applied
    #[serde(default)]
    pub limit: u64,
}

/// A single user record as returned by the remote service.
///
/// Only the fields the dashboard reads are declared; everything else in the
/// payload is ignored.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RemoteUser {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl RemoteUser {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
