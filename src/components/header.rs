use dioxus::prelude::*;

/// Sticky brand bar shown above every screen.
#[component]
pub fn Header() -> Element {
    rsx! {
        div { style: "background: white; border-bottom: 1px solid #ddd; padding: 16px 24px; position: sticky; top: 0; z-index: 10;",
            span { style: "color: #0066cc; font-size: 20px; font-weight: 700;", "Picsum Gallery" }
        }
    }
}
