use serde::Serialize;

/// Barangay population from the latest census
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Barangay {
    pub name: &'static str,
    pub population: u32,
}

/// Municipal population at a census year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CensusPoint {
    pub year: u16,
    pub population: u32,
}
