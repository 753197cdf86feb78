use dioxus::prelude::*;
use picsum_api::{Photo, PicsumClient};

/// Single photo thumbnail with the author line; clickable for the detail
/// view. Requests the sized thumbnail endpoint so every card loads the
/// same small asset instead of the full-resolution image.
#[component]
pub fn PhotoCard(photo: Photo, on_click: EventHandler<()>) -> Element {
    let client = use_context::<PicsumClient>();
    let thumb = client.thumbnail_url(&photo.id);

    rsx! {
        div { class: "photo-card", onclick: move |_| on_click.call(()),
            img {
                src: thumb,
                alt: format!("By {}", photo.display_author()),
                loading: "lazy",
                style: "width: 100%; height: 180px; object-fit: cover; display: block;",
            }
            div { class: "photo-card-author", title: "{photo.author}",
                {photo.display_author()}
            }
        }
    }
}
