use crate::dashboards::d401_competitiveness::view_model::{indicator_rows, CmciTab, IndicatorRow};
use crate::shared::chart::ChartCanvas;
use crate::shared::viewport::{watch_div, ProximityOptions};
use gloo_timers::future::TimeoutFuture;
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;

const SECTION_VISIBILITY: f64 = 0.1;
const FILL_DELAY_MS: u32 = 100;

/// Cities and Municipalities Competitiveness Index, 2016-2024
#[component]
pub fn CompetitivenessDashboard() -> impl IntoView {
    let section = NodeRef::<Div>::new();
    let (initialized, set_initialized) = signal(false);
    let (active, set_active) = signal(CmciTab::Overview);

    watch_div(section, ProximityOptions::visible(SECTION_VISIBILITY), move || {
        log::debug!("Competitiveness section in view");
        set_initialized.set(true);
    });

    let select_tab = move |slug: &'static str| {
        let tab = CmciTab::from_slug(slug);
        if active.get_untracked() != tab {
            set_active.set(tab);
        }
    };

    view! {
        <div id="competitive-index" class="cmci-section" node_ref=section>
            <h2 class="section-title">"Competitiveness Index"</h2>

            <div class="cmci-tabs" role="tablist">
                {CmciTab::all()
                    .into_iter()
                    .map(|tab| {
                        let slug = tab.slug();
                        let is_active = move || active.get() == tab;
                        view! {
                            <button
                                class="cmci-tab"
                                class:active=is_active
                                role="tab"
                                data-pillar=slug
                                aria-selected=move || is_active().to_string()
                                on:click=move |_| select_tab(slug)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {CmciTab::all()
                .into_iter()
                .map(|tab| {
                    let is_active = Signal::derive(move || active.get() == tab);
                    // Overview chart is created with the section, pillar charts on first activation
                    let chart_ready = Signal::derive(move || {
                        initialized.get() && (tab == CmciTab::Overview || is_active.get())
                    });
                    let animate = Signal::derive(move || initialized.get() && is_active.get());
                    view! {
                        <div
                            id=format!("panel-{}", tab.slug())
                            class="cmci-panel"
                            class:active=move || is_active.get()
                            role="tabpanel"
                        >
                            <ChartCanvas id=tab.canvas_id() config=tab.chart() ready=chart_ready />
                            <IndicatorBars rows=indicator_rows(tab.series()) animate=animate />
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Latest score per indicator; fills grow shortly after the panel is shown
#[component]
fn IndicatorBars(rows: Vec<IndicatorRow>, #[prop(into)] animate: Signal<bool>) -> impl IntoView {
    let (filled, set_filled) = signal(false);
    let scheduled = StoredValue::new(false);

    Effect::new(move |_| {
        if !animate.get() || scheduled.get_value() {
            return;
        }
        scheduled.set_value(true);
        spawn_local(async move {
            TimeoutFuture::new(FILL_DELAY_MS).await;
            set_filled.set(true);
        });
    });

    view! {
        <div class="cmci-indicators">
            {rows
                .into_iter()
                .map(|row| {
                    let fill = row.fill_percent;
                    view! {
                        <div class="indicator-row">
                            <span class="indicator-label">{row.label}</span>
                            <div class="indicator-track">
                                <div
                                    class="indicator-fill"
                                    class:animated=move || filled.get()
                                    data-value=format!("{:.1}", fill)
                                    style=move || {
                                        if filled.get() {
                                            format!("--fill-width: {:.1}%", fill)
                                        } else {
                                            String::new()
                                        }
                                    }
                                ></div>
                            </div>
                            <span class="indicator-value">{row.display_value()}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
