use crate::Screen;
use dioxus::prelude::*;
use picsum_api::{DetailState, GenerationCounter, PicsumClient};

#[component]
pub fn PhotoDetailScreen(id: ReadOnlySignal<String>, on_navigate: EventHandler<Screen>) -> Element {
    let client = use_context::<PicsumClient>();
    let mut state = use_signal(DetailState::new);
    let mut generation = use_signal(GenerationCounter::default);

    // Fetch on mount and on every identifier change. Without an identifier
    // the loader stays in its initial state.
    use_effect(move || {
        let photo_id = id();
        if photo_id.is_empty() {
            return;
        }
        let token = generation.write().next();
        let client = client.clone();
        state.write().begin_load();
        spawn(async move {
            let result = client.photo_info(&photo_id).await;
            if !generation.peek().is_current(token) {
                return;
            }
            if let Err(e) = &result {
                log::warn!("failed to load photo {}: {}", photo_id, e);
            }
            state.write().apply(result);
        });
    });

    let view = state();

    rsx! {
        div { style: "padding: 24px 16px; max-width: 900px; margin: 0 auto;",

            // Header
            div { style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 24px;",
                h1 { style: "margin: 0; font-size: 22px; font-weight: 600;", "Photo Details" }
                button {
                    style: "padding: 8px 16px; background: #e0e0e0; color: #333; border: none; border-radius: 8px; font-size: 15px; cursor: pointer;",
                    onclick: move |_| on_navigate.call(Screen::PhotoList),
                    "← Back to list"
                }
            }

            if view.is_loading() {
                div { style: "text-align: center; padding: 48px; color: #999;", "Loading..." }
            }

            if let Some(message) = view.error().map(String::from) {
                div { style: "text-align: center; padding: 48px; color: #c33;", "{message}" }
            }

            if let Some(photo) = view.photo().cloned() {
                div { style: "display: flex; flex-wrap: wrap; gap: 24px;",

                    div { style: "flex: 2; min-width: 300px;",
                        img {
                            src: photo.download_url.clone(),
                            alt: photo.display_title(),
                            style: "width: 100%; border-radius: 12px; display: block;",
                        }
                        div { style: "margin-top: 12px;",
                            a {
                                class: "btn-primary",
                                href: photo.download_url.clone(),
                                target: "_blank",
                                rel: "noreferrer",
                                "Open full"
                            }
                        }
                    }

                    div { style: "flex: 1; min-width: 240px;",
                        div { class: "detail-card",
                            h2 { style: "margin: 0 0 8px; font-size: 20px;", {photo.display_title()} }
                            p { style: "margin: 0 0 8px; color: #666;",
                                "By "
                                strong { {photo.display_author()} }
                            }
                            p { style: "margin: 0 0 8px; color: #666; font-size: 14px;",
                                "Size: "
                                {photo.dimensions()}
                            }
                            p { style: "margin: 0; color: #666;", {photo.display_description()} }
                        }
                    }
                }
            }
        }
    }
}
