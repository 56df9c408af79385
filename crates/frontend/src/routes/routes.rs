use crate::dashboards::d400_population::ui::PopulationDashboard;
use crate::dashboards::d401_competitiveness::ui::CompetitivenessDashboard;
use crate::dashboards::d402_quarterly_finance::ui::QuarterlyFinance;
use crate::domain::a001_public_project::ui::ProjectList;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn ProjectsPage() -> impl IntoView {
    view! {
        <section class="page page-projects">
            <h1 class="page-title">"DPWH Infrastructure Projects"</h1>
            <ProjectList />
        </section>
    }
}

#[component]
fn StatisticsPage() -> impl IntoView {
    view! {
        <section class="page page-statistics">
            <PopulationDashboard />
            <CompetitivenessDashboard />
        </section>
    }
}

#[component]
fn TransparencyPage() -> impl IntoView {
    view! {
        <section class="page page-transparency">
            <QuarterlyFinance />
        </section>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! { <p class="page-not-found">"Page not found."</p> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=ProjectsPage />
                    <Route path=path!("/statistics") view=StatisticsPage />
                    <Route path=path!("/transparency") view=TransparencyPage />
                </Routes>
            </Shell>
        </Router>
    }
}
