use crate::shared::components::table::format_peso;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_optional_date;
use contracts::domain::a001_public_project::{ProjectCategory, ProjectRecord};
use leptos::ev::KeyboardEvent;
use leptos::prelude::*;

const TRANSPARENCY_PORTAL: &str = "https://transparency.dpwh.gov.ph/";
const ELLIPSIS: char = '…';

/// Accomplishment badge of a project row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusBadge {
    Completed,
    /// Whole percent done
    InProgress(u32),
}

impl StatusBadge {
    pub fn from_status(status: f64) -> Self {
        if status >= 100.0 {
            Self::Completed
        } else {
            Self::InProgress(status.max(0.0).round() as u32)
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Completed => "Completed".to_string(),
            Self::InProgress(pct) => format!("{}%", pct),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Completed => "complete",
            Self::InProgress(_) => "ongoing",
        }
    }
}

/// Display-ready project row
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectRowView {
    pub id: String,
    pub category: ProjectCategory,
    /// Possibly truncated title
    pub title: String,
    /// Untruncated title for the tooltip
    pub full_title: String,
    pub link: String,
    pub location: String,
    pub contractor: String,
    pub contractor_id: String,
    pub cost: String,
    pub status: StatusBadge,
    pub completed_on: String,
}

impl ProjectRowView {
    pub fn from_record(record: &ProjectRecord, max_title_len: usize) -> Self {
        Self {
            id: record.id.clone(),
            category: record.classification(),
            title: truncate_text(&record.name, max_title_len),
            full_title: record.name.clone(),
            link: project_link(&record.id),
            location: record.location.clone(),
            contractor: record.contractor.clone(),
            contractor_id: record.contractor_id.clone(),
            cost: format_peso(record.cost),
            status: StatusBadge::from_status(record.status),
            completed_on: format_optional_date(record.completion_date.as_deref()),
        }
    }
}

/// Map records to row views, in order
pub fn render_rows(records: &[ProjectRecord], max_title_len: usize) -> Vec<ProjectRowView> {
    records
        .iter()
        .map(|record| ProjectRowView::from_record(record, max_title_len))
        .collect()
}

/// Cut `text` to `max_len` characters, trim trailing whitespace and mark with an ellipsis
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_len).collect();
    format!("{}{}", cut.trim_end(), ELLIPSIS)
}

pub fn project_link(id: &str) -> String {
    format!("{}?project={}", TRANSPARENCY_PORTAL, urlencoding::encode(id))
}

/// One table row; Enter or Space toggles the expanded layout
#[component]
pub fn ProjectRow(row: ProjectRowView) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);

    let on_keydown = move |ev: KeyboardEvent| {
        let key = ev.key();
        if key == "Enter" || key == " " {
            ev.prevent_default();
            set_expanded.update(|e| *e = !*e);
        }
    };

    let category = row.category;

    view! {
        <tr class="dpwh-row" class:expanded=move || expanded.get() tabindex="0" on:keydown=on_keydown>
            <td class="col-desc">
                <div class="dpwh-desc-wrap">
                    <span class="dpwh-proj-id">{row.id.clone()}</span>
                    <Badge family="dpwh-cat-badge" variant=category.css_class()>
                        {category.label()}
                    </Badge>
                </div>
                <a
                    href=row.link
                    target="_blank"
                    rel="noopener noreferrer"
                    class="dpwh-proj-title"
                    title=row.full_title
                >
                    {row.title}
                </a>
                <span class="dpwh-proj-location">
                    <i class="bi bi-geo-alt"></i>
                    {row.location}
                </span>
            </td>
            <td class="col-contractor">
                <span class="dpwh-contractor">{row.contractor}</span>
                <span class="dpwh-contractor-id">{format!("#{}", row.contractor_id)}</span>
            </td>
            <td class="col-cost">{row.cost}</td>
            <td class="col-status">
                <Badge family="dpwh-badge" variant=row.status.css_class()>
                    {row.status.label()}
                </Badge>
            </td>
            <td class="col-date">{row.completed_on}</td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ProjectRecord {
        ProjectRecord {
            id: "24AB0012".to_string(),
            name: "Rehabilitation of Water System".to_string(),
            category: "Water Supply".to_string(),
            location: "Barangay Dadap".to_string(),
            contractor: "Northline Corp.".to_string(),
            contractor_id: "40112".to_string(),
            cost: 4_950_000.0,
            status: 63.0,
            completion_date: None,
        }
    }

    #[test]
    fn test_truncate_long_title() {
        let title = "a".repeat(81);
        let truncated = truncate_text(&title, 80);
        assert_eq!(truncated, format!("{}…", "a".repeat(80)));
    }

    #[test]
    fn test_truncate_trims_trailing_whitespace() {
        let title = format!("{} {}", "b".repeat(79), "tail of the title");
        assert_eq!(truncate_text(&title, 80), format!("{}…", "b".repeat(79)));
    }

    #[test]
    fn test_short_titles_unchanged() {
        let exact = "c".repeat(80);
        assert_eq!(truncate_text(&exact, 80), exact);
        assert_eq!(truncate_text("Short", 80), "Short");
    }

    #[test]
    fn test_truncate_counts_characters() {
        let title = "ñ".repeat(81);
        assert_eq!(truncate_text(&title, 80).chars().count(), 81);
    }

    #[test]
    fn test_status_badge() {
        assert_eq!(StatusBadge::from_status(100.0).label(), "Completed");
        assert_eq!(StatusBadge::from_status(100.0).css_class(), "complete");
        assert_eq!(StatusBadge::from_status(63.0).label(), "63%");
        assert_eq!(StatusBadge::from_status(63.4).label(), "63%");
        assert_eq!(StatusBadge::from_status(0.0).css_class(), "ongoing");
    }

    #[test]
    fn test_row_view_from_record() {
        let row = ProjectRowView::from_record(&record(), 80);
        assert_eq!(row.category, ProjectCategory::Water);
        assert_eq!(row.cost, "₱4,950,000.00");
        assert_eq!(row.status, StatusBadge::InProgress(63));
        assert_eq!(row.completed_on, "—");
        assert_eq!(row.link, "https://transparency.dpwh.gov.ph/?project=24AB0012");
    }

    #[test]
    fn test_completed_row_shows_date() {
        let mut completed = record();
        completed.status = 100.0;
        completed.completion_date = Some("2024-03-15".to_string());
        let row = ProjectRowView::from_record(&completed, 80);
        assert_eq!(row.status, StatusBadge::Completed);
        assert_eq!(row.completed_on, "Mar 15, 2024");
    }

    #[test]
    fn test_render_rows_keeps_order() {
        let mut second = record();
        second.id = "2".to_string();
        let rows = render_rows(&[record(), second], 80);
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["24AB0012", "2"]);
    }

    #[test]
    fn test_project_link_encodes_id() {
        assert_eq!(
            project_link("A B/1"),
            "https://transparency.dpwh.gov.ph/?project=A%20B%2F1"
        );
    }
}
