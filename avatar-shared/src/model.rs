use rand::Rng;
use strum_macros::{Display, EnumIter};

use crate::api::RemoteUser;

/// Range of the decorative badge number shown on each card.
pub const BADGE_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum AvatarType {
    #[strum(to_string = "Professional Avatar")]
    Professional,
    #[strum(to_string = "Casual Avatar")]
    Casual,
    #[strum(to_string = "Creative Avatar")]
    Creative,
}

impl AvatarType {
    /// Type assigned to the record at `index` of a fetched batch.
    pub fn for_position(index: usize) -> Self {
        match index {
            0 => AvatarType::Professional,
            1 => AvatarType::Casual,
            _ => AvatarType::Creative,
        }
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            AvatarType::Professional => "Professional",
            AvatarType::Casual => "Casual",
            AvatarType::Creative => "Creative",
        }
    }

    pub fn form_value(&self) -> &'static str {
        match self {
            AvatarType::Professional => "professional",
            AvatarType::Casual => "casual",
            AvatarType::Creative => "creative",
        }
    }
}

/// Card model derived from one remote user record. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct AvatarDisplayModel {
    pub id: u64,
    pub name: String,
    pub avatar_type: AvatarType,
    pub image: Option<String>,
    pub number: u8,
}

impl AvatarDisplayModel {
    pub fn from_user<R: Rng>(index: usize, user: RemoteUser, rng: &mut R) -> Self {
        let name = user.full_name();
        Self {
            id: user.id,
            name,
            avatar_type: AvatarType::for_position(index),
            image: user.image.filter(|url| !url.trim().is_empty()),
            number: rng.random_range(BADGE_RANGE),
        }
    }
}

/// Maps a fetched batch to display models, preserving order.
pub fn to_display_models(users: Vec<RemoteUser>) -> Vec<AvatarDisplayModel> {
    let mut rng = rand::rng();
    users
        .into_iter()
        .enumerate()
        .map(|(index, user)| AvatarDisplayModel::from_user(index, user, &mut rng))
        .collect()
}
