pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod state;

pub use api::AvatarClient;
pub use config::Config;
pub use error::FetchFailure;
pub use model::{AvatarDisplayModel, AvatarType};
pub use state::{CreateDialog, DashboardView, DismissReason, FetchState, GridContent, MountGuard};
