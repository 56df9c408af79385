pub mod bridge;
pub mod canvas;
pub mod config;

pub use bridge::{chart_library_loaded, create_chart, ChartHandle};
pub use canvas::{chart_slot, ChartCanvas, ChartSlot};
pub use config::{
    with_alpha_hex, ChartConfig, ChartData, ChartKind, Dataset, Paint, TickFormat, TooltipFormat,
};

/// Portal brand palette
pub mod palette {
    pub const PRIMARY: &str = "#0032a0";
    pub const SECONDARY: &str = "#003D82";
    pub const ACCENT: &str = "#F77F00";
    pub const SUCCESS: &str = "#06A77D";
    pub const INFO: &str = "#0077BE";
    pub const VIOLET: &str = "#8B5CF6";

    /// Tooltip background shared by the statistics charts
    pub const TOOLTIP_BG: &str = "rgba(0, 50, 160, 0.92)";

    /// Series colours for five-line charts
    pub const SERIES: [&str; 5] = [PRIMARY, ACCENT, SUCCESS, INFO, VIOLET];
}
