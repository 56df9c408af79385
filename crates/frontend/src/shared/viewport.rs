//! Viewport proximity notifications on top of the browser `IntersectionObserver`.
//!
//! Components never talk to the observer directly: they ask to be notified
//! when an element gets near (or into) the viewport and react to the callback
//! exactly as they would to a click.

use leptos::html::Div;
use leptos::prelude::*;
use std::cell::RefCell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

#[derive(Debug, Clone, PartialEq)]
pub struct ProximityOptions {
    /// Margin added below/around the viewport, in px
    pub root_margin_px: u32,
    /// Pulls the bottom edge of the observed area up, in px
    pub bottom_inset_px: u32,
    /// Visible fraction required, 0.0 = any pixel
    pub threshold: f64,
    /// Stop observing after the first notification
    pub once: bool,
    /// Notify immediately when the browser has no `IntersectionObserver`
    pub fallback_visible: bool,
}

impl ProximityOptions {
    /// Repeated notifications whenever the element comes within `margin_px` of the viewport
    pub fn near(margin_px: u32) -> Self {
        Self {
            root_margin_px: margin_px,
            bottom_inset_px: 0,
            threshold: 0.0,
            once: false,
            fallback_visible: false,
        }
    }

    /// Single notification once `threshold` of the element is visible
    pub fn visible(threshold: f64) -> Self {
        Self {
            root_margin_px: 0,
            bottom_inset_px: 0,
            threshold,
            once: true,
            fallback_visible: true,
        }
    }

    pub fn with_bottom_inset(mut self, inset_px: u32) -> Self {
        self.bottom_inset_px = inset_px;
        self
    }

    fn root_margin(&self) -> String {
        if self.bottom_inset_px == 0 {
            return format!("{}px", self.root_margin_px);
        }
        let margin = self.root_margin_px as i64;
        let bottom = margin - self.bottom_inset_px as i64;
        format!("{margin}px {margin}px {bottom}px {margin}px")
    }
}

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Live observation; disconnects when dropped
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn observer_supported() -> bool {
    web_sys::window()
        .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

/// Call `on_near` whenever `element` intersects the viewport extended by the options
pub fn observe_proximity<F>(
    element: &Element,
    options: &ProximityOptions,
    mut on_near: F,
) -> Result<ViewportObserver, JsValue>
where
    F: FnMut() + 'static,
{
    let once = options.once;
    let callback: EntriesCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let intersecting: Vec<IntersectionObserverEntry> = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .filter(|entry| entry.is_intersecting())
                .collect();
            if intersecting.is_empty() {
                return;
            }
            if once {
                for entry in &intersecting {
                    observer.unobserve(&entry.target());
                }
            }
            on_near();
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_root_margin(&options.root_margin());
    init.set_threshold(&JsValue::from_f64(options.threshold));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(element);

    Ok(ViewportObserver {
        observer,
        _callback: callback,
    })
}

/// Observe a `<div>` as soon as it is mounted.
///
/// The observer lives as long as the calling component.
pub fn watch_div<F>(target: NodeRef<Div>, options: ProximityOptions, on_near: F)
where
    F: FnMut() + 'static,
{
    let handle = StoredValue::new_local(None::<ViewportObserver>);
    let pending = RefCell::new(Some(on_near));

    Effect::new(move |_| {
        let Some(element) = target.get() else {
            return;
        };
        let Some(mut on_near) = pending.borrow_mut().take() else {
            return;
        };

        if !observer_supported() {
            log::warn!("IntersectionObserver unavailable");
            if options.fallback_visible {
                on_near();
            }
            return;
        }

        match observe_proximity(&element, &options, on_near) {
            Ok(observer) => handle.set_value(Some(observer)),
            Err(err) => log::warn!("Failed to observe element: {:?}", err),
        }
    });
}
