use avatar_shared::AvatarClient;
use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

mod pages;
mod widgets;

use pages::Dashboard;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // Installed before launch so startup messages are not lost.
    dioxus::logger::init(Level::INFO).expect("failed to initialize logger");

    // Browser builds have no process environment; only native builds read it.
    #[cfg(not(target_arch = "wasm32"))]
    match dotenvy::dotenv() {
        Ok(_) => info!("Loaded environment variables from .env file"),
        Err(_) => info!("No .env file found, using system environment variables"),
    }

    dioxus::launch(App);
}

/// Root shell: document metadata and the dashboard as its only child.
#[component]
fn App() -> Element {
    use_context_provider(AvatarClient::new);

    rsx! {
        document::Title { "AI Avatar Dashboard" }
        document::Meta { name: "description", content: "Manage your AI-generated avatars" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Dashboard {}
    }
}
