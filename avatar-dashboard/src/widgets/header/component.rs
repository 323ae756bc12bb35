use dioxus::prelude::*;

#[component]
pub fn Header(viewer_name: String, profile_image: Option<String>) -> Element {
    rsx! {
        header { class: "app-header",
            div { class: "header-brand",
                span { class: "header-icon", "🤖" }
                h1 { class: "header-title", "AI Avatar Dashboard" }
            }
            div { class: "header-actions",
                span { class: "header-greeting", "Welcome back, {viewer_name}!" }
                div { class: "profile-picture",
                    match profile_image {
                        Some(src) => rsx! {
                            img {
                                src: "{src}",
                                alt: "Profile",
                                width: "32",
                                height: "32",
                            }
                        },
                        None => rsx! {
                            div { class: "profile-placeholder" }
                        },
                    }
                }
            }
        }
    }
}
