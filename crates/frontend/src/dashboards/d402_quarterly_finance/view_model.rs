use crate::shared::chart::{ChartConfig, ChartData, ChartKind, Dataset, Paint, TooltipFormat};
use contracts::dashboards::d402_quarterly_finance::{Quarter, QuarterFinancials};
use serde_json::json;

const INCOME_COLORS: [&str; 2] = ["#10b981", "#0ea5e9"];
const EXPENDITURE_COLORS: [&str; 4] = ["#3b82f6", "#8b5cf6", "#f59e0b", "#ef4444"];

/// Offset of a highlighted doughnut segment, px
pub const HIGHLIGHT_OFFSET: f64 = 8.0;

/// `₱158.47 M`; amounts are already in millions
pub fn format_millions(value: f64) -> String {
    format!("₱{:.2} M", value)
}

/// Share of `total` with one decimal; a zero total gives `0.0%`
pub fn calc_percent(value: f64, total: f64) -> String {
    if total == 0.0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", value / total * 100.0)
}

/// Next quarter to show, if `key` names a different one
pub fn select_quarter(current: Quarter, key: &str) -> Option<Quarter> {
    Quarter::from_key(key).filter(|quarter| *quarter != current)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinanceChart {
    Income,
    Expenditure,
}

/// Chart and segment index a breakdown row points at
pub fn segment_for(key: &str) -> Option<(FinanceChart, u32)> {
    match key {
        "local" => Some((FinanceChart::Income, 0)),
        "external" => Some((FinanceChart::Income, 1)),
        "gps" => Some((FinanceChart::Expenditure, 0)),
        "social" => Some((FinanceChart::Expenditure, 1)),
        "economic" => Some((FinanceChart::Expenditure, 2)),
        "debt" => Some((FinanceChart::Expenditure, 3)),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownItem {
    pub key: &'static str,
    pub label: &'static str,
    pub amount: String,
    pub percent: String,
    pub color: &'static str,
}

/// Headline figures, swapped with a short transition
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Headline {
    pub total_income: String,
    pub total_expense: String,
    pub net_income: String,
    pub fund_balance: String,
}

impl Headline {
    pub fn from_financials(data: &QuarterFinancials) -> Self {
        Self {
            total_income: format_millions(data.income.total),
            total_expense: format_millions(data.expenditures.total),
            net_income: format_millions(data.net_income),
            fund_balance: format_millions(data.fund_balance),
        }
    }
}

pub fn income_values(data: &QuarterFinancials) -> [f64; 2] {
    [data.income.local, data.income.external]
}

pub fn expenditure_values(data: &QuarterFinancials) -> [f64; 4] {
    let e = &data.expenditures;
    [e.gps, e.social, e.economic, e.debt]
}

const INCOME_LABELS: [(&str, &str); 2] = [("local", "Local Sources"), ("external", "External Sources")];
const EXPENDITURE_LABELS: [(&str, &str); 4] = [
    ("gps", "General Public Services"),
    ("social", "Social Services"),
    ("economic", "Economic Services"),
    ("debt", "Debt Service"),
];

fn breakdown(
    labels: &[(&'static str, &'static str)],
    colors: &[&'static str],
    values: &[f64],
    total: f64,
) -> Vec<BreakdownItem> {
    labels
        .iter()
        .zip(colors)
        .zip(values)
        .map(|(((key, label), color), value)| BreakdownItem {
            key: *key,
            label: *label,
            amount: format_millions(*value),
            percent: calc_percent(*value, total),
            color: *color,
        })
        .collect()
}

pub fn income_breakdown(data: &QuarterFinancials) -> Vec<BreakdownItem> {
    breakdown(&INCOME_LABELS, &INCOME_COLORS, &income_values(data), data.income.total)
}

pub fn expenditure_breakdown(data: &QuarterFinancials) -> Vec<BreakdownItem> {
    breakdown(
        &EXPENDITURE_LABELS,
        &EXPENDITURE_COLORS,
        &expenditure_values(data),
        data.expenditures.total,
    )
}

fn doughnut(labels: &[(&str, &str)], colors: &[&str], values: &[f64]) -> ChartConfig {
    let dataset = Dataset {
        background_color: Some(Paint::PerPoint(colors.iter().map(|c| c.to_string()).collect())),
        border_width: Some(0.0),
        hover_offset: Some(6.0),
        ..Dataset::from_values(values.iter().copied())
    };

    ChartConfig::new(
        ChartKind::Doughnut,
        ChartData {
            labels: labels.iter().map(|(_, label)| label.to_string()).collect(),
            datasets: vec![dataset],
        },
        json!({
            "responsive": true,
            "maintainAspectRatio": false,
            "cutout": "65%",
            "plugins": {
                "legend": { "display": false },
                "tooltip": {
                    "backgroundColor": "rgba(0,0,0,0.8)",
                    "padding": 12,
                    "titleFont": { "size": 13, "weight": "600" },
                    "bodyFont": { "size": 12 },
                    "cornerRadius": 8
                }
            },
            "animation": { "animateRotate": true, "animateScale": true, "duration": 600, "easing": "easeOutQuart" }
        }),
    )
    .with_tooltip(TooltipFormat::PesoMillions)
}

pub fn income_chart(data: &QuarterFinancials) -> ChartConfig {
    doughnut(&INCOME_LABELS, &INCOME_COLORS, &income_values(data))
}

pub fn expenditure_chart(data: &QuarterFinancials) -> ChartConfig {
    doughnut(&EXPENDITURE_LABELS, &EXPENDITURE_COLORS, &expenditure_values(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_millions() {
        assert_eq!(format_millions(158.47), "₱158.47 M");
        assert_eq!(format_millions(0.35), "₱0.35 M");
        assert_eq!(format_millions(253.4), "₱253.40 M");
    }

    #[test]
    fn test_calc_percent() {
        assert_eq!(calc_percent(88.85, 158.47), "56.1%");
        assert_eq!(calc_percent(0.35, 67.51), "0.5%");
        assert_eq!(calc_percent(5.0, 0.0), "0.0%");
    }

    #[test]
    fn test_select_quarter() {
        assert_eq!(select_quarter(Quarter::Q1, "q2"), Some(Quarter::Q2));
        assert_eq!(select_quarter(Quarter::Q1, "q1"), None);
        assert_eq!(select_quarter(Quarter::Q2, "q4"), None);
    }

    #[test]
    fn test_segments() {
        assert_eq!(segment_for("external"), Some((FinanceChart::Income, 1)));
        assert_eq!(segment_for("debt"), Some((FinanceChart::Expenditure, 3)));
        assert_eq!(segment_for("tax"), None);
    }

    #[test]
    fn test_q2_breakdown() {
        let q2 = Quarter::Q2.financials();
        let income = income_breakdown(q2);
        assert_eq!(income[0].amount, "₱114.15 M");
        assert_eq!(income[0].percent, "45.0%");
        assert_eq!(income[1].percent, "55.0%");

        let spending = expenditure_breakdown(q2);
        assert_eq!(spending.len(), 4);
        assert_eq!(spending[0].key, "gps");
        assert_eq!(spending[0].percent, "62.9%");
    }

    #[test]
    fn test_headline() {
        let headline = Headline::from_financials(Quarter::Q1.financials());
        assert_eq!(headline.total_income, "₱158.47 M");
        assert_eq!(headline.total_expense, "₱67.51 M");
        assert_eq!(headline.net_income, "₱90.96 M");
        assert_eq!(headline.fund_balance, "₱283.29 M");
    }

    #[test]
    fn test_chart_values_follow_quarter() {
        let q1 = Quarter::Q1.financials();
        assert_eq!(income_values(q1), [88.85, 69.62]);
        assert_eq!(expenditure_values(q1), [42.76, 13.33, 11.07, 0.35]);

        let chart = expenditure_chart(q1);
        assert_eq!(chart.kind, ChartKind::Doughnut);
        assert_eq!(chart.data.labels[3], "Debt Service");
        assert_eq!(chart.options["cutout"], "65%");
        assert_eq!(chart.tooltip, Some(TooltipFormat::PesoMillions));
    }
}
