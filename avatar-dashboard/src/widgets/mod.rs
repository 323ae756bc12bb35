pub mod avatar_card;
pub mod create_avatar_modal;
pub mod error_banner;
pub mod header;
pub mod skeleton_card;
