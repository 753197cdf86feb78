use dioxus::prelude::*;
use picsum_api::PicsumClient;

mod components;

use components::{Header, PhotoDetailScreen, PhotoListScreen};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    dioxus::launch(App);
}

/// Screen navigation for the app. The list is the entry screen.
#[derive(Clone, PartialEq, Debug)]
pub enum Screen {
    PhotoList,
    PhotoDetail(String),
}

#[component]
fn App() -> Element {
    use_context_provider(PicsumClient::new);
    let mut current_screen = use_signal(|| Screen::PhotoList);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div { style: "display: flex; flex-direction: column; min-height: 100vh; font-family: sans-serif; background: #f5f5f5;",

            Header {}

            // Each screen owns its state and drops it on navigation
            div { style: "flex: 1;",
                match current_screen() {
                    Screen::PhotoList => rsx! {
                        PhotoListScreen { on_navigate: move |s| current_screen.set(s) }
                    },
                    Screen::PhotoDetail(id) => rsx! {
                        PhotoDetailScreen { id, on_navigate: move |s| current_screen.set(s) }
                    },
                }
            }
        }
    }
}
