use crate::components::{PhotoCard, ScrollTrigger};
use crate::Screen;
use dioxus::prelude::*;
use picsum_api::{GenerationCounter, ListState, PicsumClient};

const SKELETON_CARDS: usize = 8;

#[component]
pub fn PhotoListScreen(on_navigate: EventHandler<Screen>) -> Element {
    let client = use_context::<PicsumClient>();
    let mut state = use_signal(ListState::new);
    let mut page = use_signal(|| 1u32);
    let mut generation = use_signal(GenerationCounter::default);

    // One fetch per cursor value; advancing the cursor is the only trigger.
    use_effect(move || {
        let current_page = page();
        let token = generation.write().next();
        let client = client.clone();
        state.write().begin_load();
        spawn(async move {
            let result = client.list_page(current_page).await;
            // A newer request has superseded this one
            if !generation.peek().is_current(token) {
                return;
            }
            if let Err(e) = &result {
                log::warn!("failed to load page {}: {}", current_page, e);
            }
            state.write().apply_page(result);
        });
    });

    let view = state();

    rsx! {
        div { style: "padding: 24px 16px; max-width: 1100px; margin: 0 auto;",

            div { class: "photo-grid",
                for photo in view.photos().to_vec() {
                    PhotoCard {
                        photo: photo.clone(),
                        on_click: move |_| {
                            on_navigate.call(Screen::PhotoDetail(photo.id.clone()));
                        },
                    }
                }

                if view.is_loading() {
                    for _ in 0..SKELETON_CARDS {
                        div { class: "photo-card skeleton" }
                    }
                }
            }

            ScrollTrigger {
                enabled: view.can_load_more(),
                on_reach: move |_| {
                    page += 1;
                },
            }

            div { style: "text-align: center; padding: 24px; color: #999;",
                if view.is_loading() {
                    "Loading..."
                } else if view.has_more() {
                    "Scroll to load more"
                } else {
                    "End of list"
                }
            }
        }
    }
}
