//! Renderer-independent dashboard state: the fetch lifecycle, the view plan
//! derived from it, the mount guard for the one in-flight fetch, and the
//! creation dialog flag.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, error};

use crate::config::{CARD_COUNT, SKELETON_COUNT};
use crate::error::FetchFailure;
use crate::model::AvatarDisplayModel;

/// Lifecycle of the avatar fetch. Exactly one variant holds at render time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    #[default]
    Loading,
    Error(String),
    Loaded(Vec<AvatarDisplayModel>),
}

impl FetchState {
    /// Terminal state for a completed fetch. Failures are logged here with
    /// their cause and replaced by the fixed banner message.
    pub fn from_result(result: Result<Vec<AvatarDisplayModel>, FetchFailure>) -> Self {
        match result {
            Ok(avatars) => FetchState::Loaded(avatars),
            Err(err) => {
                error!("Error fetching users: {}", err);
                FetchState::Error(err.user_message().to_string())
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn view(&self) -> DashboardView<'_> {
        DashboardView::from(self)
    }
}

/// What the grid area shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridContent<'a> {
    Skeletons(usize),
    Cards(&'a [AvatarDisplayModel]),
}

/// Everything the dashboard renders for a given [`FetchState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardView<'a> {
    pub banner: Option<&'a str>,
    pub profile_image: Option<&'a str>,
    pub grid: GridContent<'a>,
}

impl<'a> From<&'a FetchState> for DashboardView<'a> {
    fn from(state: &'a FetchState) -> Self {
        match state {
            FetchState::Loading => DashboardView {
                banner: None,
                profile_image: None,
                grid: GridContent::Skeletons(SKELETON_COUNT),
            },
            FetchState::Error(message) => DashboardView {
                banner: Some(message.as_str()),
                profile_image: None,
                grid: GridContent::Cards(&[]),
            },
            FetchState::Loaded(avatars) => DashboardView {
                banner: None,
                // The first avatar is the viewer's own picture, not a card.
                profile_image: avatars.first().and_then(|a| a.image.as_deref()),
                grid: GridContent::Cards(grid_cards(avatars)),
            },
        }
    }
}

#[cfg(test)]
impl DashboardView<'_> {
    pub fn card_count(&self) -> usize {
        match self.grid {
            GridContent::Skeletons(_) => 0,
            GridContent::Cards(cards) => cards.len(),
        }
    }

    pub fn skeleton_count(&self) -> usize {
        match self.grid {
            GridContent::Skeletons(count) => count,
            GridContent::Cards(_) => 0,
        }
    }
}

fn grid_cards(avatars: &[AvatarDisplayModel]) -> &[AvatarDisplayModel] {
    let end = avatars.len().min(CARD_COUNT + 1);
    avatars.get(1..end).unwrap_or_default()
}

/// Guards a view's in-flight fetch against being applied after teardown.
///
/// Each fetch takes a [`FetchTicket`] when it is spawned. Tearing the view
/// down advances the generation, so any ticket taken before is stale.
#[derive(Debug, Clone, Default)]
pub struct MountGuard {
    generation: Arc<AtomicU64>,
}

#[derive(Debug, Clone)]
pub struct FetchTicket {
    generation: Arc<AtomicU64>,
    issued: u64,
}

impl MountGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ticket(&self) -> FetchTicket {
        FetchTicket {
            generation: Arc::clone(&self.generation),
            issued: self.generation.load(Ordering::Acquire),
        }
    }

    pub fn teardown(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
    }
}

impl FetchTicket {
    pub fn is_current(&self) -> bool {
        self.generation.load(Ordering::Acquire) == self.issued
    }

    /// Runs `apply` only if the view that issued this ticket is still mounted.
    pub fn apply<T>(&self, value: T, apply: impl FnOnce(T)) -> bool {
        if self.is_current() {
            apply(value);
            true
        } else {
            debug!("Discarding fetch result for a torn down view");
            false
        }
    }

    /// Turns a finished fetch into its terminal state and hands it to `sink`.
    /// Results for a torn down view are dropped before conversion, so their
    /// failures are not reported.
    pub fn settle(
        &self,
        result: Result<Vec<AvatarDisplayModel>, FetchFailure>,
        sink: impl FnOnce(FetchState),
    ) -> bool {
        self.apply(result, |result| sink(FetchState::from_result(result)))
    }
}

/// Ways the creation dialog can be dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum DismissReason {
    CloseButton,
    Backdrop,
    Cancel,
}

/// Visibility flag of the creation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CreateDialog {
    open: bool,
}

impl CreateDialog {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        debug!("Opening create avatar dialog");
        self.open = true;
    }

    pub fn close(&mut self, reason: DismissReason) {
        debug!("Closing create avatar dialog: {}", reason);
        self.open = false;
    }
}
