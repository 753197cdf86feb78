use dioxus::prelude::*;

/// Invisible sentinel that fires `on_reach` when it scrolls into view.
///
/// The sentinel extends `margin` logical pixels above its anchor position
/// (with zero net layout height), so the callback fires that far before
/// the surrounding content actually reaches the viewport. While `enabled`
/// is false nothing is rendered and the underlying observation is torn
/// down; flipping it back on remounts the sentinel, which re-observes and
/// fires immediately if it is already visible.
///
/// If the sentinel never becomes visible the trigger simply never fires.
#[component]
pub fn ScrollTrigger(
    on_reach: EventHandler<()>,
    #[props(default = true)] enabled: bool,
    #[props(default = 200)] margin: u32,
) -> Element {
    rsx! {
        if enabled {
            div {
                style: "height: {margin}px; margin-top: -{margin}px; pointer-events: none;",
                onvisible: move |event| {
                    if let Ok(true) = event.data().is_intersecting() {
                        on_reach.call(());
                    }
                },
            }
        }
    }
}
