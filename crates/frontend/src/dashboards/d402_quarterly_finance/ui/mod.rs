pub mod dashboard;

pub use dashboard::QuarterlyFinance;
