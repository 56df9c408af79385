//! Chart.js configuration built on the Rust side.
//!
//! Everything here is plain data; [`super::bridge`] serializes it and hands
//! it to the page-global `Chart` constructor.

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Doughnut,
}

/// Single colour or one colour per data point
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Paint {
    Solid(String),
    PerPoint(Vec<String>),
}

impl From<&str> for Paint {
    fn from(color: &str) -> Self {
        Paint::Solid(color.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Paint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Paint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hover_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_offset: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_thickness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_skipped: Option<bool>,
}

impl Dataset {
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        Self {
            data: values.into_iter().map(Some).collect(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// Tooltip label text; installed as a JS callback by the bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipFormat {
    /// `Population: 9,088`
    Population,
    /// `9,088 (16.6%)` of the dataset total
    ShareOfTotal,
    /// `Health: 0.2995`, `N/A` when missing
    Score,
    /// `₱158.47 M`
    PesoMillions,
}

impl TooltipFormat {
    pub fn js_body(&self) -> &'static str {
        match self {
            Self::Population => "return 'Population: ' + ctx.raw.toLocaleString();",
            Self::ShareOfTotal => {
                "const total = ctx.dataset.data.reduce((a, b) => a + b, 0); \
                 const pct = ((ctx.raw / total) * 100).toFixed(1); \
                 return ctx.raw.toLocaleString() + ' (' + pct + '%)';"
            }
            Self::Score => {
                "return ctx.raw !== null \
                 ? ctx.dataset.label + ': ' + ctx.raw.toFixed(4) \
                 : ctx.dataset.label + ': N/A';"
            }
            Self::PesoMillions => "return '\u{20B1}' + ctx.raw.toFixed(2) + ' M';",
        }
    }
}

/// Axis tick text; installed as a JS callback by the bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickFormat {
    /// `65K`
    Thousands,
    /// `9,088`
    Grouped,
}

impl TickFormat {
    pub fn js_body(&self) -> &'static str {
        match self {
            Self::Thousands => "return (v / 1000) + 'K';",
            Self::Grouped => "return v.toLocaleString();",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: Value,
    #[serde(skip)]
    pub tooltip: Option<TooltipFormat>,
    /// Axis id (`x`/`y`) and its tick format
    #[serde(skip)]
    pub ticks: Option<(&'static str, TickFormat)>,
}

impl ChartConfig {
    pub fn new(kind: ChartKind, data: ChartData, options: Value) -> Self {
        Self {
            kind,
            data,
            options,
            tooltip: None,
            ticks: None,
        }
    }

    pub fn with_tooltip(mut self, format: TooltipFormat) -> Self {
        self.tooltip = Some(format);
        self
    }

    pub fn with_ticks(mut self, axis: &'static str, format: TickFormat) -> Self {
        self.ticks = Some((axis, format));
        self
    }
}

/// `#RRGGBB` plus a two-digit hex alpha, as Chart.js accepts it
pub fn with_alpha_hex(color: &str, alpha: &str) -> String {
    format!("{}{}", color, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_chart_js_shape() {
        let mut dataset = Dataset::from_values([1.0, 2.0]);
        dataset.label = Some("Population".into());
        dataset.border_color = Some("#0032a0".into());
        dataset.data.push(None);

        let config = ChartConfig::new(
            ChartKind::Line,
            ChartData {
                labels: vec!["a".into(), "b".into(), "c".into()],
                datasets: vec![dataset],
            },
            json!({ "responsive": true }),
        )
        .with_tooltip(TooltipFormat::Population);

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "line",
                "data": {
                    "labels": ["a", "b", "c"],
                    "datasets": [{
                        "label": "Population",
                        "data": [1.0, 2.0, null],
                        "borderColor": "#0032a0"
                    }]
                },
                "options": { "responsive": true }
            })
        );
    }

    #[test]
    fn test_per_point_paint() {
        let paint = Paint::PerPoint(vec!["#fff".into(), "#000".into()]);
        assert_eq!(serde_json::to_value(&paint).unwrap(), json!(["#fff", "#000"]));
    }

    #[test]
    fn test_alpha_suffix() {
        assert_eq!(with_alpha_hex("#0032a0", "15"), "#0032a015");
    }
}
