use crate::shared::chart::palette;
use crate::shared::chart::{
    with_alpha_hex, ChartConfig, ChartData, ChartKind, Dataset, Paint, TickFormat, TooltipFormat,
};
use contracts::dashboards::d400_population::data::{BARANGAYS, HISTORICAL};
use contracts::dashboards::d400_population::{Barangay, CensusPoint};
use serde_json::json;

const DISTRIBUTION_SLICES: usize = 10;
const DISTRIBUTION_COLORS: [&str; DISTRIBUTION_SLICES] = [
    palette::PRIMARY,
    palette::ACCENT,
    palette::SUCCESS,
    palette::INFO,
    palette::VIOLET,
    "#EC4899",
    "#14B8A6",
    "#F59E0B",
    "#6366F1",
    palette::SECONDARY,
];

/// Headline cards of the statistics page
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationOverview {
    pub census_year: u16,
    pub total_population: u32,
    pub barangay_count: usize,
    /// Percent change since the previous census, one decimal
    pub growth: String,
    pub largest: Barangay,
}

pub fn overview(barangays: &[Barangay], history: &[CensusPoint]) -> Option<PopulationOverview> {
    let latest = history.last()?;
    let largest = barangays.iter().max_by_key(|b| b.population)?;
    let growth = growth_since_previous(history)
        .map(|pct| format!("{:+.1}%", pct))
        .unwrap_or_else(|| "—".to_string());

    Some(PopulationOverview {
        census_year: latest.year,
        total_population: latest.population,
        barangay_count: barangays.len(),
        growth,
        largest: *largest,
    })
}

/// Percent change between the last two census points
pub fn growth_since_previous(history: &[CensusPoint]) -> Option<f64> {
    match history {
        [.., previous, latest] if previous.population > 0 => Some(
            (latest.population as f64 - previous.population as f64) / previous.population as f64
                * 100.0,
        ),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarangayBar {
    pub name: &'static str,
    pub population: u32,
    /// Share of the largest barangay, 0..=100
    pub width_percent: f64,
}

/// Barangays by population, largest first; ties keep data order
pub fn barangay_bars(barangays: &[Barangay]) -> Vec<BarangayBar> {
    let max = barangays.iter().map(|b| b.population).max().unwrap_or(0);
    let mut sorted: Vec<&Barangay> = barangays.iter().collect();
    sorted.sort_by(|a, b| b.population.cmp(&a.population));

    sorted
        .into_iter()
        .map(|b| BarangayBar {
            name: b.name,
            population: b.population,
            width_percent: if max == 0 {
                0.0
            } else {
                b.population as f64 / max as f64 * 100.0
            },
        })
        .collect()
}

/// Bar opacity fades by 2.5% per rank
pub fn bar_opacity(rank: usize) -> f64 {
    (1.0 - rank as f64 * 0.025).max(0.0)
}

fn tooltip_options() -> serde_json::Value {
    json!({
        "backgroundColor": palette::TOOLTIP_BG,
        "titleFont": { "size": 13, "weight": "600" },
        "bodyFont": { "size": 12 },
        "padding": 10,
        "cornerRadius": 6,
        "displayColors": false
    })
}

pub fn historical_chart(history: &[CensusPoint]) -> ChartConfig {
    let dataset = Dataset {
        label: Some("Population".into()),
        border_color: Some(palette::PRIMARY.into()),
        background_color: Some(Paint::Solid(with_alpha_hex(palette::PRIMARY, "26"))),
        fill: Some(true),
        tension: Some(0.35),
        point_background_color: Some(palette::PRIMARY.into()),
        point_border_color: Some("#fff".into()),
        point_border_width: Some(2.0),
        point_radius: Some(5.0),
        point_hover_radius: Some(7.0),
        border_width: Some(2.5),
        ..Dataset::from_values(history.iter().map(|p| p.population as f64))
    };

    ChartConfig::new(
        ChartKind::Line,
        ChartData {
            labels: history.iter().map(|p| p.year.to_string()).collect(),
            datasets: vec![dataset],
        },
        json!({
            "responsive": true,
            "maintainAspectRatio": false,
            "animation": { "duration": 1500, "easing": "easeOutQuart" },
            "interaction": { "intersect": false, "mode": "index" },
            "plugins": { "legend": { "display": false }, "tooltip": tooltip_options() },
            "scales": {
                "x": { "grid": { "display": false }, "ticks": { "font": { "size": 11, "weight": "500" }, "color": "#666" } },
                "y": { "beginAtZero": false, "grid": { "color": "rgba(0,0,0,0.04)" }, "ticks": { "font": { "size": 11 }, "color": "#666" } }
            }
        }),
    )
    .with_tooltip(TooltipFormat::Population)
    .with_ticks("y", TickFormat::Thousands)
}

/// Doughnut of the first ten barangays in data order
pub fn distribution_chart(barangays: &[Barangay]) -> ChartConfig {
    let top: Vec<&Barangay> = barangays.iter().take(DISTRIBUTION_SLICES).collect();
    let colors = DISTRIBUTION_COLORS
        .iter()
        .take(top.len())
        .map(|c| c.to_string())
        .collect();

    let dataset = Dataset {
        background_color: Some(Paint::PerPoint(colors)),
        border_color: Some("#fff".into()),
        border_width: Some(2.0),
        hover_offset: Some(6.0),
        ..Dataset::from_values(top.iter().map(|b| b.population as f64))
    };

    let mut tooltip = tooltip_options();
    tooltip["displayColors"] = json!(true);

    ChartConfig::new(
        ChartKind::Doughnut,
        ChartData {
            labels: top.iter().map(|b| b.name.to_string()).collect(),
            datasets: vec![dataset],
        },
        json!({
            "responsive": true,
            "maintainAspectRatio": false,
            "animation": { "animateRotate": true, "animateScale": true, "duration": 1200, "easing": "easeOutQuart" },
            "cutout": "58%",
            "plugins": {
                "legend": {
                    "position": "right",
                    "labels": { "boxWidth": 12, "padding": 10, "font": { "size": 11 }, "usePointStyle": true, "pointStyle": "circle" }
                },
                "tooltip": tooltip
            }
        }),
    )
    .with_tooltip(TooltipFormat::ShareOfTotal)
}

/// Horizontal bars, largest barangay on top
pub fn population_bar_chart(barangays: &[Barangay]) -> ChartConfig {
    let bars = barangay_bars(barangays);
    let colors = (0..bars.len())
        .map(|rank| format!("rgba(0, 50, 160, {})", bar_opacity(rank)))
        .collect();

    let dataset = Dataset {
        label: Some("Population".into()),
        background_color: Some(Paint::PerPoint(colors)),
        border_radius: Some(3.0),
        border_skipped: Some(false),
        bar_thickness: Some(18.0),
        ..Dataset::from_values(bars.iter().map(|b| b.population as f64))
    };

    ChartConfig::new(
        ChartKind::Bar,
        ChartData {
            labels: bars.iter().map(|b| b.name.to_string()).collect(),
            datasets: vec![dataset],
        },
        json!({
            "indexAxis": "y",
            "responsive": true,
            "maintainAspectRatio": false,
            "animation": { "duration": 1200, "easing": "easeOutQuart" },
            "plugins": { "legend": { "display": false }, "tooltip": tooltip_options() },
            "scales": {
                "x": { "beginAtZero": true, "grid": { "color": "rgba(0,0,0,0.04)" }, "ticks": { "font": { "size": 10 }, "color": "#666" } },
                "y": { "grid": { "display": false }, "ticks": { "font": { "size": 10, "weight": "500" }, "color": "#444" } }
            }
        }),
    )
    .with_tooltip(TooltipFormat::Population)
    .with_ticks("x", TickFormat::Grouped)
}

/// Census data shipped with the portal
pub fn census() -> (&'static [Barangay], &'static [CensusPoint]) {
    (BARANGAYS, HISTORICAL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Barangay> {
        vec![
            Barangay { name: "Aggub", population: 300 },
            Barangay { name: "Roxas", population: 900 },
            Barangay { name: "Bangar", population: 450 },
            Barangay { name: "Tucal", population: 450 },
        ]
    }

    #[test]
    fn test_overview_from_census() {
        let (barangays, history) = census();
        let overview = overview(barangays, history).unwrap();
        assert_eq!(overview.census_year, 2024);
        assert_eq!(overview.total_population, 69296);
        assert_eq!(overview.barangay_count, 22);
        assert_eq!(overview.largest.name, "Roxas");
        // (69296 - 65896) / 65896 = 5.16%
        assert_eq!(overview.growth, "+5.2%");
    }

    #[test]
    fn test_overview_needs_history() {
        assert!(overview(&sample(), &[]).is_none());
        assert_eq!(
            growth_since_previous(&[CensusPoint { year: 2024, population: 10 }]),
            None
        );
    }

    #[test]
    fn test_bars_sorted_descending_with_relative_width() {
        let bars = barangay_bars(&sample());
        let names: Vec<&str> = bars.iter().map(|b| b.name).collect();
        assert_eq!(names, vec!["Roxas", "Bangar", "Tucal", "Aggub"]);
        assert_eq!(bars[0].width_percent, 100.0);
        assert_eq!(bars[1].width_percent, 50.0);
        assert!(bars.iter().all(|b| b.width_percent <= 100.0));
    }

    #[test]
    fn test_bar_opacity_fades() {
        assert_eq!(bar_opacity(0), 1.0);
        assert!((bar_opacity(4) - 0.9).abs() < 1e-12);
        assert!(bar_opacity(21) > 0.0);
    }

    #[test]
    fn test_distribution_takes_first_ten_in_data_order() {
        let (barangays, _) = census();
        let config = distribution_chart(barangays);
        assert_eq!(config.data.labels.len(), 10);
        assert_eq!(config.data.labels[0], "Roxas");
        assert_eq!(config.data.labels[9], "San Luis");
        assert_eq!(config.tooltip, Some(TooltipFormat::ShareOfTotal));
    }

    #[test]
    fn test_bar_chart_is_horizontal_and_sorted() {
        let config = population_bar_chart(&sample());
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["options"]["indexAxis"], "y");
        assert_eq!(value["data"]["labels"][0], "Roxas");
        assert_eq!(value["data"]["datasets"][0]["backgroundColor"][0], "rgba(0, 50, 160, 1)");
        assert_eq!(config.ticks, Some(("x", TickFormat::Grouped)));
    }

    #[test]
    fn test_historical_chart_uses_census_years() {
        let (_, history) = census();
        let config = historical_chart(history);
        assert_eq!(config.data.labels.first().map(String::as_str), Some("1990"));
        assert_eq!(config.data.datasets[0].data.last(), Some(&Some(69296.0)));
        assert_eq!(config.ticks, Some(("y", TickFormat::Thousands)));
    }
}
