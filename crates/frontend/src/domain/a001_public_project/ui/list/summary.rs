use crate::shared::components::table::number_format::format_peso_millions;
use crate::shared::components::StatCard;
use contracts::domain::a001_public_project::ProjectsPayload;
use leptos::prelude::*;

/// Figures shown above the projects table
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryView {
    pub total_projects: usize,
    pub total_investment: String,
    pub completed: usize,
    pub ongoing: usize,
}

impl SummaryView {
    pub fn from_payload(payload: &ProjectsPayload) -> Self {
        Self {
            total_projects: payload.summary.total_projects,
            total_investment: format_peso_millions(payload.summary.total_cost),
            completed: payload.completed_count(),
            ongoing: payload.ongoing_count(),
        }
    }
}

#[component]
pub fn SummaryBar(summary: SummaryView) -> impl IntoView {
    view! {
        <div class="dpwh-summary-bar">
            <StatCard class="dpwh-summary-item" label="Projects">
                {summary.total_projects.to_string()}
            </StatCard>
            <StatCard class="dpwh-summary-item" label="Total Investment">
                {summary.total_investment}
            </StatCard>
            <StatCard class="dpwh-summary-item" label="Completed">
                {summary.completed.to_string()}
            </StatCard>
            <StatCard class="dpwh-summary-item" label="Ongoing">
                {summary.ongoing.to_string()}
            </StatCard>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_public_project::{ProjectRecord, ProjectsSummary};

    fn project(status: f64) -> ProjectRecord {
        ProjectRecord {
            id: "1".into(),
            name: "Drainage".into(),
            category: "Flood Control".into(),
            location: String::new(),
            contractor: String::new(),
            contractor_id: String::new(),
            cost: 0.0,
            status,
            completion_date: None,
        }
    }

    #[test]
    fn test_summary_from_payload() {
        let payload = ProjectsPayload {
            projects: vec![project(100.0), project(40.0), project(100.0)],
            summary: ProjectsSummary {
                total_projects: 3,
                total_cost: 245_300_000.0,
            },
        };
        let summary = SummaryView::from_payload(&payload);
        assert_eq!(summary.total_projects, 3);
        assert_eq!(summary.total_investment, "₱245.3M");
        assert_eq!(summary.completed, 2);
        assert_eq!(summary.ongoing, 1);
    }
}
