pub mod dashboard;

pub use dashboard::PopulationDashboard;
