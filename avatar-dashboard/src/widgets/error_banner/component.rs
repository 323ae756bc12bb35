use dioxus::prelude::*;

#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div { class: "error-banner", role: "alert", "{message}" }
    }
}
