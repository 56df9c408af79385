//! Reveal: fades a section in the first time it scrolls into view.
//!
//! The `visible` class is added once at least 20% of the section is on
//! screen (or the given `threshold`), after an optional stagger delay. The animation itself lives in
//! the stylesheet (`.animate-on-scroll.visible`).

use crate::shared::viewport::{watch_div, ProximityOptions};
use gloo_timers::future::TimeoutFuture;
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;

const REVEAL_THRESHOLD: f64 = 0.2;

#[component]
pub fn Reveal(
    /// Stagger delay before the section becomes visible
    #[prop(optional)]
    delay_ms: u32,
    /// Visible fraction that triggers the reveal
    #[prop(optional)]
    threshold: Option<f64>,
    /// Shrinks the viewport from the bottom so sections reveal a little later
    #[prop(optional)]
    bottom_inset_px: u32,
    /// Extra classes for the wrapper
    #[prop(optional, into)]
    class: String,
    /// Called once the section is revealed
    #[prop(optional)]
    on_reveal: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<Div>::new();
    let (visible, set_visible) = signal(false);

    watch_div(target, reveal_options(threshold, bottom_inset_px), move || {
        spawn_local(async move {
            if delay_ms > 0 {
                TimeoutFuture::new(delay_ms).await;
            }
            set_visible.set(true);
            if let Some(on_reveal) = on_reveal {
                on_reveal.run(());
            }
        });
    });

    view! {
        <div
            node_ref=target
            class=format!("animate-on-scroll {}", class)
            class:visible=move || visible.get()
        >
            {children()}
        </div>
    }
}

fn reveal_options(threshold: Option<f64>, bottom_inset_px: u32) -> ProximityOptions {
    ProximityOptions::visible(threshold.unwrap_or(REVEAL_THRESHOLD)).with_bottom_inset(bottom_inset_px)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reveal_options() {
        let options = reveal_options(None, 0);
        assert_eq!(options, ProximityOptions::visible(0.2));
    }

    #[test]
    fn test_custom_threshold_and_inset() {
        let options = reveal_options(Some(0.1), 50);
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.bottom_inset_px, 50);
    }
}
