pub mod row;
pub mod state;
pub mod summary;

use self::row::{render_rows, ProjectRow, ProjectRowView};
use self::state::{create_state, BatchOutcome, BatchSizes, BatchTicket, Trailer};
use self::summary::{SummaryBar, SummaryView};
use crate::domain::a001_public_project::api;
use crate::shared::config::PortalConfig;
use crate::shared::viewport::{watch_div, ProximityOptions};
use contracts::domain::a001_public_project::{CategoryCounts, ProjectFilter};
use gloo_timers::future::TimeoutFuture;
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

/// Public DPWH project list: summary, category tabs and an incrementally
/// loaded table.
#[component]
pub fn ProjectList() -> impl IntoView {
    let config = use_context::<PortalConfig>().unwrap_or_default().projects;
    let state = create_state(BatchSizes {
        initial: config.initial_rows,
        increment: config.load_more_rows,
    });
    let (summary, set_summary) = signal(None::<SummaryView>);
    let sentinel = NodeRef::<Div>::new();

    let load_delay_ms = config.load_delay_ms;
    let truncate_length = config.truncate_length;

    // Reveal the rows of a started batch; later batches wait for the skeleton delay
    let run_batch = move |ticket: Option<BatchTicket>| {
        let Some(ticket) = ticket else {
            return;
        };
        let complete = move || match state.try_update(|s| s.complete_batch(ticket)) {
            Some(BatchOutcome::Appended { start, len }) => {
                log::debug!("Displayed rows {}..{}", start, start + len);
            }
            Some(BatchOutcome::Stale) => log::debug!("Discarded stale batch at {}", ticket.start()),
            None => {}
        };
        if ticket.is_first() || load_delay_ms == 0 {
            complete();
        } else {
            spawn_local(async move {
                TimeoutFuture::new(load_delay_ms).await;
                complete();
            });
        }
    };

    let load_more = move || {
        let can_start = state.with_untracked(|s| !s.is_loading() && s.remaining() > 0);
        if !can_start {
            return;
        }
        run_batch(state.try_update(|s| s.begin_batch()).flatten());
    };

    let select_filter = move |key: &str| {
        let filter = ProjectFilter::from_key(key);
        log::debug!("Filter selected: {}", filter.key());
        run_batch(state.try_update(|s| s.set_filter(filter)).flatten());
    };

    let data_url = config.data_url.clone();
    Effect::new(move |_| {
        let data_url = data_url.clone();
        spawn_local(async move {
            match api::fetch_projects(&data_url).await {
                Ok(payload) => {
                    set_summary.set(Some(SummaryView::from_payload(&payload)));
                    run_batch(state.try_update(|s| s.load(payload.projects)).flatten());
                }
                Err(err) => log::error!("Failed to load projects from {}: {}", data_url, err),
            }
        });
    });

    watch_div(
        sentinel,
        ProximityOptions::near(config.sentinel_margin_px),
        move || load_more(),
    );

    let counts = Memo::new(move |_| state.with(|s| s.category_counts()));
    let rows = Memo::new(move |_| {
        state.with(|s| {
            render_rows(s.visible_projects(), truncate_length)
                .into_iter()
                .enumerate()
                .map(|(i, row)| (s.row_key(i), row))
                .collect::<Vec<(String, ProjectRowView)>>()
        })
    });

    view! {
        <Show when=move || state.with(|s| s.is_loaded())>
            <div class="dpwh-projects">
                {move || summary.get().map(|summary| view! { <SummaryBar summary=summary /> })}

                <div class="dpwh-tabs" role="tablist">
                    {move || {
                        let counts: CategoryCounts = counts.get();
                        visible_tabs(&counts)
                            .into_iter()
                            .map(|filter| {
                                let is_active = move || state.with(|s| s.current_filter() == filter);
                                view! {
                                    <button
                                        class="dpwh-tab"
                                        class:active=is_active
                                        role="tab"
                                        data-filter=filter.key()
                                        aria-selected=move || is_active().to_string()
                                        on:click=move |_| select_filter(filter.key())
                                    >
                                        {filter.label()}
                                        " "
                                        <span class="dpwh-tab-count">{counts.get(filter).to_string()}</span>
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>

                <div class="dpwh-table-wrap">
                    <table class="dpwh-table">
                        <thead>
                            <tr>
                                <th class="col-desc">"Project"</th>
                                <th class="col-contractor">"Contractor"</th>
                                <th class="col-cost">"Cost"</th>
                                <th class="col-status">"Status"</th>
                                <th class="col-date">"Completed"</th>
                            </tr>
                        </thead>
                        <tbody id="dpwh-table-body">
                            <For
                                each=move || rows.get()
                                key=|(key, _)| key.clone()
                                children=move |(_, row)| view! { <ProjectRow row=row /> }
                            />
                        </tbody>
                    </table>
                </div>

                <div class="dpwh-load-more" node_ref=sentinel>
                    {move || match state.with(|s| s.trailer()) {
                        Trailer::Hidden => view! { <></> }.into_any(),
                        Trailer::Skeleton { rows } => {
                            (0..rows)
                                .map(|_| view! { <div class="dpwh-skeleton-row"></div> })
                                .collect_view()
                                .into_any()
                        }
                        Trailer::LoadMore { remaining } => {
                            view! {
                                <Button
                                    class="dpwh-load-btn"
                                    appearance=ButtonAppearance::Primary
                                    on_click=move |_| load_more()
                                >
                                    "Load More "
                                    <span class="dpwh-remaining">{format!("({} remaining)", remaining)}</span>
                                </Button>
                            }
                                .into_any()
                        }
                        Trailer::EndOfList { total } => {
                            view! {
                                <span class="dpwh-end-msg">{format!("Showing all {} projects", total)}</span>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </Show>
    }
}

/// Tabs in display order; Water only appears when some project is a water project
pub fn visible_tabs(counts: &CategoryCounts) -> Vec<ProjectFilter> {
    ProjectFilter::ALL
        .iter()
        .copied()
        .filter(|filter| *filter != ProjectFilter::Water || counts.water > 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_tab_hidden_without_water_projects() {
        let counts = CategoryCounts {
            all: 3,
            buildings: 1,
            roads: 2,
            flood: 0,
            water: 0,
        };
        assert_eq!(
            visible_tabs(&counts),
            vec![
                ProjectFilter::All,
                ProjectFilter::Buildings,
                ProjectFilter::Roads,
                ProjectFilter::Flood
            ]
        );
    }

    #[test]
    fn test_water_tab_shown_last() {
        let counts = CategoryCounts {
            all: 1,
            water: 1,
            ..CategoryCounts::default()
        };
        assert_eq!(visible_tabs(&counts).last(), Some(&ProjectFilter::Water));
        assert_eq!(visible_tabs(&counts).len(), 5);
    }
}
