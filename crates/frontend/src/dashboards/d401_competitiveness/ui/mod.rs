pub mod dashboard;

pub use dashboard::CompetitivenessDashboard;
