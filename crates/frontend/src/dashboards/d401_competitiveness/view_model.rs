use crate::shared::chart::palette;
use crate::shared::chart::{
    with_alpha_hex, ChartConfig, ChartData, ChartKind, Dataset, Paint, TooltipFormat,
};
use contracts::dashboards::d401_competitiveness::data::{KEY_INDICATORS, YEARS};
use contracts::dashboards::d401_competitiveness::{CmciPillar, IndicatorSeries};
use serde_json::json;

/// Tabs of the competitiveness section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CmciTab {
    #[default]
    Overview,
    Pillar(CmciPillar),
}

impl CmciTab {
    pub fn all() -> Vec<CmciTab> {
        std::iter::once(CmciTab::Overview)
            .chain(CmciPillar::ALL.into_iter().map(CmciTab::Pillar))
            .collect()
    }

    /// Unknown slugs fall back to the overview
    pub fn from_slug(slug: &str) -> Self {
        Self::all()
            .into_iter()
            .find(|tab| tab.slug() == slug)
            .unwrap_or_default()
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Pillar(CmciPillar::EconomicDynamism) => "economic-dynamism",
            Self::Pillar(CmciPillar::GovernmentEfficiency) => "government-efficiency",
            Self::Pillar(CmciPillar::Infrastructure) => "infrastructure",
            Self::Pillar(CmciPillar::Resiliency) => "resiliency",
            Self::Pillar(CmciPillar::Innovation) => "innovation",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Pillar(pillar) => pillar.label(),
        }
    }

    pub fn series(&self) -> &'static [IndicatorSeries] {
        match self {
            Self::Overview => KEY_INDICATORS,
            Self::Pillar(pillar) => pillar.indicators(),
        }
    }

    pub fn canvas_id(&self) -> &'static str {
        match self {
            Self::Overview => "cmciOverviewChart",
            Self::Pillar(CmciPillar::EconomicDynamism) => "cmciEconomicChart",
            Self::Pillar(CmciPillar::GovernmentEfficiency) => "cmciGovernmentChart",
            Self::Pillar(CmciPillar::Infrastructure) => "cmciInfraChart",
            Self::Pillar(CmciPillar::Resiliency) => "cmciResiliencyChart",
            Self::Pillar(CmciPillar::Innovation) => "cmciInnovationChart",
        }
    }

    /// Line chart of every indicator in the tab
    pub fn chart(&self) -> ChartConfig {
        let style = match self {
            Self::Overview => LineStyle::OVERVIEW,
            Self::Pillar(_) => LineStyle::PILLAR,
        };
        indicator_chart(self.series(), style)
    }
}

/// Latest score of one indicator with its bar fill
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorRow {
    pub label: &'static str,
    pub latest: Option<f64>,
    /// Percent of the largest latest score in the panel
    pub fill_percent: f64,
}

impl IndicatorRow {
    pub fn display_value(&self) -> String {
        match self.latest {
            Some(value) => format!("{:.4}", value),
            None => "N/A".to_string(),
        }
    }
}

pub fn indicator_rows(series: &[IndicatorSeries]) -> Vec<IndicatorRow> {
    let max = series
        .iter()
        .filter_map(IndicatorSeries::latest)
        .fold(0.0_f64, f64::max);

    series
        .iter()
        .map(|s| {
            let latest = s.latest();
            let fill_percent = match latest {
                Some(value) if max > 0.0 => (value / max * 100.0).clamp(0.0, 100.0),
                _ => 0.0,
            };
            IndicatorRow {
                label: s.label,
                latest,
                fill_percent,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct LineStyle {
    point_radius: f64,
    point_hover_radius: f64,
    border_width: f64,
    font_size: u32,
    box_width: u32,
    padding: u32,
    duration: u32,
}

impl LineStyle {
    const OVERVIEW: LineStyle = LineStyle {
        point_radius: 3.0,
        point_hover_radius: 5.0,
        border_width: 2.0,
        font_size: 10,
        box_width: 10,
        padding: 14,
        duration: 1200,
    };

    const PILLAR: LineStyle = LineStyle {
        point_radius: 2.5,
        point_hover_radius: 4.0,
        border_width: 1.5,
        font_size: 9,
        box_width: 8,
        padding: 10,
        duration: 1000,
    };
}

fn indicator_chart(series: &[IndicatorSeries], style: LineStyle) -> ChartConfig {
    let datasets = series
        .iter()
        .zip(palette::SERIES.iter().cycle())
        .map(|(s, color)| Dataset {
            label: Some(s.label.to_string()),
            data: s.values.to_vec(),
            border_color: Some((*color).into()),
            background_color: Some(Paint::Solid(with_alpha_hex(color, "15"))),
            fill: Some(false),
            tension: Some(0.35),
            point_radius: Some(style.point_radius),
            point_hover_radius: Some(style.point_hover_radius),
            border_width: Some(style.border_width),
            ..Dataset::default()
        })
        .collect();

    ChartConfig::new(
        ChartKind::Line,
        ChartData {
            labels: YEARS.iter().map(|y| y.to_string()).collect(),
            datasets,
        },
        json!({
            "responsive": true,
            "maintainAspectRatio": false,
            "animation": { "duration": style.duration, "easing": "easeOutQuart" },
            "interaction": { "intersect": false, "mode": "index" },
            "plugins": {
                "legend": {
                    "position": "bottom",
                    "labels": { "boxWidth": style.box_width, "padding": style.padding, "font": { "size": style.font_size }, "usePointStyle": true }
                },
                "tooltip": { "backgroundColor": palette::TOOLTIP_BG, "padding": 10, "cornerRadius": 6 }
            },
            "scales": {
                "x": { "grid": { "display": false }, "ticks": { "font": { "size": style.font_size }, "color": "#666" } },
                "y": { "beginAtZero": true, "grid": { "color": "rgba(0,0,0,0.04)" }, "ticks": { "font": { "size": style.font_size }, "color": "#666" } }
            }
        }),
    )
    .with_tooltip(TooltipFormat::Score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugs_round_trip() {
        for tab in CmciTab::all() {
            assert_eq!(CmciTab::from_slug(tab.slug()), tab);
        }
        assert_eq!(CmciTab::all().len(), 6);
    }

    #[test]
    fn test_unknown_slug_is_overview() {
        assert_eq!(CmciTab::from_slug("tourism"), CmciTab::Overview);
        assert_eq!(CmciTab::from_slug(""), CmciTab::Overview);
    }

    #[test]
    fn test_indicator_rows_relative_to_largest() {
        let rows = indicator_rows(KEY_INDICATORS);
        assert_eq!(rows.len(), 5);
        // Social Protection has the largest 2024 score
        let largest = rows.iter().find(|r| r.label == "Social Protection").unwrap();
        assert_eq!(largest.fill_percent, 100.0);
        assert_eq!(largest.display_value(), "0.4923");
        assert!(rows.iter().all(|r| (0.0..=100.0).contains(&r.fill_percent)));
    }

    #[test]
    fn test_missing_scores_show_na() {
        let series = [IndicatorSeries {
            label: "ICT Plan",
            values: [None; 9],
        }];
        let rows = indicator_rows(&series);
        assert_eq!(rows[0].latest, None);
        assert_eq!(rows[0].display_value(), "N/A");
        assert_eq!(rows[0].fill_percent, 0.0);
    }

    #[test]
    fn test_overview_and_pillar_chart_styles() {
        let overview = CmciTab::Overview.chart();
        assert_eq!(overview.data.labels.len(), 9);
        assert_eq!(overview.data.datasets.len(), 5);
        assert_eq!(overview.data.datasets[0].point_radius, Some(3.0));
        assert_eq!(overview.tooltip, Some(TooltipFormat::Score));

        let pillar = CmciTab::Pillar(CmciPillar::Innovation).chart();
        assert_eq!(pillar.data.datasets[0].point_radius, Some(2.5));
        assert_eq!(pillar.data.datasets[0].border_width, Some(1.5));
        assert_eq!(pillar.data.datasets[0].data[0], None);
    }

    #[test]
    fn test_series_colours_follow_palette() {
        let chart = CmciTab::Overview.chart();
        assert_eq!(
            chart.data.datasets[1].border_color,
            Some(Paint::Solid(palette::ACCENT.to_string()))
        );
        assert_eq!(
            chart.data.datasets[1].background_color,
            Some(Paint::Solid(format!("{}15", palette::ACCENT)))
        );
    }
}
