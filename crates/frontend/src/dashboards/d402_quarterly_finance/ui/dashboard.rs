use crate::dashboards::d402_quarterly_finance::view_model::{
    expenditure_breakdown, expenditure_chart, expenditure_values, income_breakdown, income_chart,
    income_values, segment_for, select_quarter, BreakdownItem, FinanceChart, Headline,
    HIGHLIGHT_OFFSET,
};
use crate::shared::chart::{chart_slot, ChartCanvas, ChartSlot};
use crate::shared::components::{Reveal, StatCard};
use crate::shared::config::PortalConfig;
use contracts::dashboards::d402_quarterly_finance::Quarter;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Card;

const REVEAL_THRESHOLD: f64 = 0.1;
const REVEAL_INSET_PX: u32 = 50;

/// Statement of receipts and expenditures, switchable by quarter
#[component]
pub fn QuarterlyFinance() -> impl IntoView {
    let swap_ms = use_context::<PortalConfig>()
        .unwrap_or_default()
        .animation
        .value_swap_ms;

    let initial = Quarter::default();
    let (quarter, set_quarter) = signal(initial);
    let (headline, set_headline) = signal(Headline::from_financials(initial.financials()));
    let (updating, set_updating) = signal(false);

    let income_slot = chart_slot();
    let expenditure_slot = chart_slot();

    let on_select = move |key: &'static str| {
        let Some(next) = select_quarter(quarter.get_untracked(), key) else {
            return;
        };
        log::debug!("Showing {}", next.financials().period);
        set_quarter.set(next);

        let data = next.financials();
        push_values(income_slot, &income_values(data));
        push_values(expenditure_slot, &expenditure_values(data));

        set_updating.set(true);
        spawn_local(async move {
            TimeoutFuture::new(swap_ms).await;
            // A later click may have switched again meanwhile
            let shown = quarter.get_untracked();
            set_headline.set(Headline::from_financials(shown.financials()));
            set_updating.set(false);
        });
    };

    let highlight = move |key: &'static str, on: bool| {
        let Some((chart, index)) = segment_for(key) else {
            return;
        };
        let slot = match chart {
            FinanceChart::Income => income_slot,
            FinanceChart::Expenditure => expenditure_slot,
        };
        let offset = if on { HIGHLIGHT_OFFSET } else { 0.0 };
        slot.with_value(|chart| {
            if let Some(chart) = chart {
                if let Err(err) = chart.set_segment_offset(index, offset) {
                    log::warn!("Failed to highlight segment {}: {:?}", key, err);
                }
            }
        });
    };

    let metric = move |pick: fn(&Headline) -> String| {
        view! {
            <span class="sre-value" class:updating=move || updating.get()>
                {move || headline.with(pick)}
            </span>
        }
    };

    view! {
        <div id="d402_quarterly_finance--dashboard" class="sre-dashboard">
            <div class="sre-header">
                <h2 class="section-title">"Statement of Receipts and Expenditures"</h2>
                <span class="sre-period">
                    {move || {
                        let data = quarter.get().financials();
                        format!("{} ({})", data.period, data.period_label)
                    }}
                </span>
                <div class="sre-period-toggle" role="tablist">
                    {Quarter::ALL
                        .into_iter()
                        .map(|q| {
                            let is_active = move || quarter.get() == q;
                            view! {
                                <button
                                    class="sre-period-btn"
                                    class:active=is_active
                                    role="tab"
                                    data-quarter=q.key()
                                    aria-selected=move || is_active().to_string()
                                    on:click=move |_| on_select(q.key())
                                >
                                    {q.key().to_uppercase()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <Reveal class="sre-metrics" threshold=REVEAL_THRESHOLD bottom_inset_px=REVEAL_INSET_PX>
                <StatCard class="sre-metric" label="Total Income">
                    {metric(|h| h.total_income.clone())}
                </StatCard>
                <StatCard class="sre-metric" label="Total Expenditures">
                    {metric(|h| h.total_expense.clone())}
                </StatCard>
                <StatCard class="sre-metric" label="Net Income">
                    {metric(|h| h.net_income.clone())}
                </StatCard>
                <StatCard class="sre-metric" label="Fund Balance">
                    {metric(|h| h.fund_balance.clone())}
                </StatCard>
            </Reveal>

            <div class="sre-breakdowns">
                <Reveal class="sre-breakdown" delay_ms=100 threshold=REVEAL_THRESHOLD bottom_inset_px=REVEAL_INSET_PX>
                    <Card attr:class="sre-card">
                        <h3 class="sre-card__title">"Income Sources"</h3>
                        <ChartCanvas
                            id="incomeChartV2"
                            config=income_chart(initial.financials())
                            ready=Signal::stored(true)
                            handle=income_slot
                        />
                        <BreakdownList
                            items=Signal::derive(move || income_breakdown(quarter.get().financials()))
                            on_hover=highlight
                        />
                    </Card>
                </Reveal>
                <Reveal class="sre-breakdown" delay_ms=200 threshold=REVEAL_THRESHOLD bottom_inset_px=REVEAL_INSET_PX>
                    <Card attr:class="sre-card">
                        <h3 class="sre-card__title">"Expenditures by Service"</h3>
                        <ChartCanvas
                            id="expenditureChartV2"
                            config=expenditure_chart(initial.financials())
                            ready=Signal::stored(true)
                            handle=expenditure_slot
                        />
                        <BreakdownList
                            items=Signal::derive(move || expenditure_breakdown(quarter.get().financials()))
                            on_hover=highlight
                        />
                    </Card>
                </Reveal>
            </div>
        </div>
    }
}

fn push_values(slot: ChartSlot, values: &[f64]) {
    slot.with_value(|chart| {
        if let Some(chart) = chart {
            if let Err(err) = chart.replace_data(0, values) {
                log::warn!("Failed to update chart data: {:?}", err);
            }
        }
    });
}

#[component]
fn BreakdownList<H>(#[prop(into)] items: Signal<Vec<BreakdownItem>>, on_hover: H) -> impl IntoView
where
    H: Fn(&'static str, bool) + Copy + Send + Sync + 'static,
{
    view! {
        <ul class="sre-breakdown-list">
            {move || {
                items
                    .get()
                    .into_iter()
                    .map(|item| {
                        let key = item.key;
                        view! {
                            <li
                                class="sre-breakdown-item"
                                data-type=key
                                on:mouseenter=move |_| on_hover(key, true)
                                on:mouseleave=move |_| on_hover(key, false)
                            >
                                <span class="sre-breakdown-dot" style=format!("background: {}", item.color)></span>
                                <span class="sre-breakdown-label">{item.label}</span>
                                <span class="sre-breakdown-amount">{item.amount}</span>
                                <span class="sre-breakdown-pct">{item.percent}</span>
                            </li>
                        }
                    })
                    .collect_view()
            }}
        </ul>
    }
}
