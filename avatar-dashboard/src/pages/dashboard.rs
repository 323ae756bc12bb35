use avatar_shared::{
    AvatarClient, CreateDialog, DismissReason, FetchState, GridContent, MountGuard,
};
use dioxus::prelude::*;

use crate::widgets::avatar_card::AvatarCard;
use crate::widgets::create_avatar_modal::{CreateAvatarModal, CreateButton};
use crate::widgets::error_banner::ErrorBanner;
use crate::widgets::header::Header;
use crate::widgets::skeleton_card::SkeletonCard;

#[component]
pub fn Dashboard() -> Element {
    let client = use_context::<AvatarClient>();
    let viewer_name = client.config().viewer_name.clone();
    let mut fetch_state = use_signal(FetchState::default);
    let mut dialog = use_signal(CreateDialog::default);
    let guard = use_hook(MountGuard::new);

    use_drop({
        let guard = guard.clone();
        move || guard.teardown()
    });

    // Fetch once on mount. Re-renders reuse the stored task.
    use_hook(move || {
        let ticket = guard.ticket();
        spawn(async move {
            let result = client.load_avatars().await;
            ticket.settle(result, |state| fetch_state.set(state));
        })
    });

    rsx! {
        div { class: "page",
            DashboardLayout { viewer_name, fetch_state: fetch_state() }

            CreateButton { on_create: move |_| dialog.write().open() }

            if dialog.read().is_open() {
                CreateAvatarModal {
                    on_dismiss: move |reason: DismissReason| dialog.write().close(reason),
                }
            }
        }
    }
}

/// Header and avatar grid for one fetch state.
#[component]
pub fn DashboardLayout(viewer_name: String, fetch_state: FetchState) -> Element {
    let view = fetch_state.view();
    let profile_image = view.profile_image.map(str::to_string);
    let banner = view.banner.map(str::to_string);
    let busy = fetch_state.is_loading();

    rsx! {
        div { class: "dashboard",
            Header { viewer_name, profile_image }

            main { class: "dashboard-main",
                div { class: "section-heading",
                    h2 { "Your AI Avatars" }
                    p { "Manage and customize your digital personas" }
                }

                if let Some(message) = banner {
                    ErrorBanner { message }
                }

                div { class: "avatar-grid", aria_busy: "{busy}",
                    match view.grid {
                        GridContent::Skeletons(count) => rsx! {
                            for i in 0..count {
                                SkeletonCard { key: "{i}" }
                            }
                        },
                        GridContent::Cards(cards) => rsx! {
                            for avatar in cards.iter().cloned() {
                                AvatarCard { key: "{avatar.id}", avatar }
                            }
                        },
                    }
                }
            }
        }
    }
}
