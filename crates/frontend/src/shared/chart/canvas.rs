use super::bridge::{chart_library_loaded, create_chart, ChartHandle};
use super::config::ChartConfig;
use crate::shared::viewport::{watch_div, ProximityOptions};
use leptos::html::{Canvas, Div};
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

const CHART_VISIBILITY: f64 = 0.1;

/// Chart instance owned by the component tree; `None` until created
pub type ChartSlot = StoredValue<Option<ChartHandle>, LocalStorage>;

pub fn chart_slot() -> ChartSlot {
    StoredValue::new_local(None)
}

/// Canvas that creates its chart at most once.
///
/// Without `ready` the chart is created the first time 10% of the canvas is
/// visible. Pass `handle` to reach the instance from the parent.
#[component]
pub fn ChartCanvas(
    #[prop(into)] id: String,
    config: ChartConfig,
    #[prop(optional, into)] ready: Option<Signal<bool>>,
    #[prop(optional)] handle: Option<ChartSlot>,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let slot = handle.unwrap_or_else(chart_slot);
    let wrapper = NodeRef::<Div>::new();
    let canvas = NodeRef::<Canvas>::new();

    let ready = ready.unwrap_or_else(|| {
        let (in_view, set_in_view) = signal(false);
        watch_div(wrapper, ProximityOptions::visible(CHART_VISIBILITY), move || {
            set_in_view.set(true)
        });
        in_view.into()
    });

    let config = StoredValue::new(config);
    let chart_id = id.clone();

    Effect::new(move |_| {
        if !ready.get() {
            return;
        }
        let Some(canvas) = canvas.get() else {
            return;
        };
        if slot.with_value(|chart| chart.is_some()) {
            return;
        }
        if !chart_library_loaded() {
            log::warn!("Chart.js not loaded, skipping chart {}", chart_id);
            return;
        }
        match config.with_value(|config| create_chart(&canvas, config)) {
            Ok(handle) => slot.set_value(Some(handle)),
            Err(err) => log::error!("Failed to create chart {}: {:?}", chart_id, err),
        }
    });

    view! {
        <div class=class.unwrap_or_else(|| "chart-container".to_string()) node_ref=wrapper>
            <canvas id=id node_ref=canvas></canvas>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::chart::config::{ChartData, ChartKind};

    #[test]
    fn test_handle_is_a_regular_prop() {
        let slot = chart_slot();
        let config = ChartConfig::new(ChartKind::Doughnut, ChartData::default(), serde_json::json!({}));
        let props = ChartCanvasProps::builder()
            .id("incomeChart")
            .config(config)
            .handle(slot)
            .build();
        assert!(props.handle.is_some());
        assert!(props.ready.is_none());
    }
}
