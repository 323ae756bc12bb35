pub mod client;
pub mod responses;

pub use client::AvatarClient;
pub use responses::{RemoteUser, UsersResponse};
