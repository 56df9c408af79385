pub mod data;
pub mod dto;

pub use dto::{Barangay, CensusPoint};
