use dioxus::prelude::*;

/// Placeholder card shown while the avatar batch is loading.
#[component]
pub fn SkeletonCard() -> Element {
    rsx! {
        div { class: "avatar-card skeleton",
            div { class: "skeleton-block skeleton-picture" }
            div { class: "skeleton-block skeleton-name" }
            div { class: "skeleton-block skeleton-type" }
            div { class: "skeleton-block skeleton-button" }
        }
    }
}
