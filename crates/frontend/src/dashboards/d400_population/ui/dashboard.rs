use crate::dashboards::d400_population::view_model::{
    barangay_bars, census, distribution_chart, historical_chart, overview, population_bar_chart,
    BarangayBar,
};
use crate::shared::animation::CountUp;
use crate::shared::chart::ChartCanvas;
use crate::shared::components::table::format_number_int;
use crate::shared::components::{Reveal, StatCard};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Card;

const BAR_GROW_DELAY_MS: u32 = 100;

/// Population statistics: census overview, trend and barangay distribution
#[component]
pub fn PopulationDashboard() -> impl IntoView {
    let (barangays, history) = census();

    let (counting, set_counting) = signal(false);
    let (bars_grown, set_bars_grown) = signal(false);

    let grow_bars = Callback::new(move |_: ()| {
        spawn_local(async move {
            TimeoutFuture::new(BAR_GROW_DELAY_MS).await;
            set_bars_grown.set(true);
        });
    });

    let overview_view = match overview(barangays, history) {
        Some(summary) => view! {
            <Reveal class="metric-grid" on_reveal=Callback::new(move |_| set_counting.set(true))>
                <StatCard class="metric-card" label="Total Population" subtitle=format!("{} Census", summary.census_year)>
                    <CountUp target={summary.total_population as u64} start=counting />
                </StatCard>
                <StatCard class="metric-card" label="Barangays">
                    {summary.barangay_count.to_string()}
                </StatCard>
                <StatCard class="metric-card" label="Growth Since Last Census">
                    {summary.growth}
                </StatCard>
                <StatCard class="metric-card" label="Largest Barangay" subtitle={format_number_int(summary.largest.population as f64)}>
                    {summary.largest.name}
                </StatCard>
            </Reveal>
        }
        .into_any(),
        None => view! { <></> }.into_any(),
    };

    view! {
        <div id="d400_population--dashboard" class="statistics-dashboard">
            <h2 class="section-title">"Population"</h2>
            {overview_view}

            <Reveal class="chart-section" delay_ms=100>
                <Card attr:class="chart-card">
                    <h3 class="chart-card__title">"Historical Population"</h3>
                    <ChartCanvas id="historicalLineChart" config=historical_chart(history) />
                </Card>
            </Reveal>

            <Reveal class="barangay-section" delay_ms=200 on_reveal=grow_bars>
                <h3 class="section-subtitle">"Population by Barangay"</h3>
                <div class="barangay-bars">
                    {barangay_bars(barangays)
                        .into_iter()
                        .map(|bar| view! { <BarangayBarRow bar=bar grown=bars_grown /> })
                        .collect_view()}
                </div>
            </Reveal>

            <div class="chart-grid">
                <Reveal class="chart-section">
                    <Card attr:class="chart-card">
                        <h3 class="chart-card__title">"Top 10 Barangays"</h3>
                        <ChartCanvas id="distributionPieChart" config=distribution_chart(barangays) />
                    </Card>
                </Reveal>
                <Reveal class="chart-section" delay_ms=100>
                    <Card attr:class="chart-card">
                        <h3 class="chart-card__title">"Barangay Ranking"</h3>
                        <ChartCanvas
                            id="populationBarChart"
                            class="chart-container chart-container--tall"
                            config=population_bar_chart(barangays)
                        />
                    </Card>
                </Reveal>
            </div>
        </div>
    }
}

#[component]
fn BarangayBarRow(bar: BarangayBar, #[prop(into)] grown: Signal<bool>) -> impl IntoView {
    let width = bar.width_percent;
    view! {
        <div class="bar-row">
            <span class="bar-label">{bar.name}</span>
            <div class="bar-wrap">
                <div
                    class="bar"
                    data-width=format!("{:.1}", width)
                    style=move || if grown.get() { format!("width: {:.1}%", width) } else { "width: 0%".to_string() }
                ></div>
            </div>
            <span class="bar-value">{format_number_int(bar.population as f64)}</span>
        </div>
    }
}
