pub mod data;
pub mod dto;

pub use dto::{Expenditures, Income, Quarter, QuarterFinancials};
