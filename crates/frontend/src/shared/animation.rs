//! Count-up animation for headline numbers

use crate::shared::components::table::format_number_int;
use crate::shared::config::PortalConfig;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const FRAME_MS: u32 = 16;

/// Cubic ease-out over `progress` in 0..=1
pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress.clamp(0.0, 1.0)).powi(3)
}

/// Value shown `elapsed_ms` into a count from 0 to `target`
pub fn count_value_at(target: u64, elapsed_ms: f64, duration_ms: f64) -> u64 {
    if duration_ms <= 0.0 || elapsed_ms >= duration_ms {
        return target;
    }
    let progress = (elapsed_ms / duration_ms).max(0.0);
    (target as f64 * ease_out_cubic(progress)).floor() as u64
}

/// Counts from 0 up to `target` once `start` turns true
#[component]
pub fn CountUp(
    target: u64,
    /// Defaults to the configured count duration
    #[prop(optional)]
    duration_ms: Option<u32>,
    #[prop(into)] start: Signal<bool>,
) -> impl IntoView {
    let duration = duration_ms.unwrap_or_else(|| {
        use_context::<PortalConfig>()
            .map(|c| c.animation.count_duration_ms)
            .unwrap_or(2000)
    }) as f64;

    let (shown, set_shown) = signal(0u64);
    let started = StoredValue::new(false);

    Effect::new(move |_| {
        if !start.get() || started.get_value() {
            return;
        }
        started.set_value(true);

        spawn_local(async move {
            let begin = js_sys::Date::now();
            loop {
                let elapsed = js_sys::Date::now() - begin;
                // Stop when the component is gone
                if set_shown.try_set(count_value_at(target, elapsed, duration)).is_some() {
                    break;
                }
                if elapsed >= duration {
                    break;
                }
                TimeoutFuture::new(FRAME_MS).await;
            }
        });
    });

    view! {
        <span data-count=target.to_string()>{move || format_number_int(shown.get() as f64)}</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_cubic_bounds() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
    }

    #[test]
    fn test_count_value_at() {
        assert_eq!(count_value_at(69296, 0.0, 2000.0), 0);
        assert_eq!(count_value_at(1000, 1000.0, 2000.0), 875);
        assert_eq!(count_value_at(69296, 2000.0, 2000.0), 69296);
        assert_eq!(count_value_at(69296, 5000.0, 2000.0), 69296);
        assert_eq!(count_value_at(42, 10.0, 0.0), 42);
    }

    #[test]
    fn test_count_is_monotonic() {
        let mut last = 0;
        for step in 0..=125 {
            let value = count_value_at(69296, step as f64 * 16.0, 2000.0);
            assert!(value >= last);
            last = value;
        }
        assert_eq!(last, 69296);
    }
}
