use avatar_shared::AvatarDisplayModel;
use dioxus::prelude::*;

const PLACEHOLDER_SVG: Asset = asset!("/assets/placeholder.svg");

#[component]
pub fn AvatarCard(avatar: AvatarDisplayModel) -> Element {
    let src = avatar
        .image
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_SVG.to_string());

    rsx! {
        div { class: "avatar-card",
            div { class: "avatar-picture",
                div { class: "avatar-frame",
                    img {
                        src: "{src}",
                        alt: "{avatar.name}",
                        width: "96",
                        height: "96",
                    }
                }
                span { class: "avatar-badge", "{avatar.number}" }
            }
            h3 { class: "avatar-name", "{avatar.name}" }
            p { class: "avatar-type", "{avatar.avatar_type}" }
            // Decorative only, editing is not wired up.
            button { class: "btn-outline", r#type: "button",
                span { class: "btn-icon", "✎" }
                span { "Edit Avatar" }
            }
        }
    }
}
