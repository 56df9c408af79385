pub mod d400_population;
pub mod d401_competitiveness;
pub mod d402_quarterly_finance;

pub use d400_population::ui::PopulationDashboard;
pub use d401_competitiveness::ui::CompetitivenessDashboard;
pub use d402_quarterly_finance::ui::QuarterlyFinance;
