//! 2024 census figures

use super::dto::{Barangay, CensusPoint};

const fn b(name: &'static str, population: u32) -> Barangay {
    Barangay { name, population }
}

const fn c(year: u16, population: u32) -> CensusPoint {
    CensusPoint { year, population }
}

/// Barangays in published order (descending population)
pub const BARANGAYS: &[Barangay] = &[
    b("Roxas", 9088),
    b("Quirino", 6572),
    b("Osmeña", 6403),
    b("Quezon", 5758),
    b("Curifang", 4885),
    b("Bagahabag", 4731),
    b("Uddiawan", 4217),
    b("Bascaran", 3845),
    b("Aggub", 3101),
    b("San Luis", 2668),
    b("Communal", 2586),
    b("Lactawan", 2109),
    b("San Juan", 1965),
    b("Concepcion", 1954),
    b("Dadap", 1409),
    b("Wacal", 1398),
    b("Bangaan", 1284),
    b("Tucal", 1244),
    b("Bangar", 1146),
    b("Pilar D. Galima", 1146),
    b("Poblacion North", 970),
    b("Poblacion South", 817),
];

pub const HISTORICAL: &[CensusPoint] = &[
    c(1990, 38006),
    c(1995, 42857),
    c(2000, 47288),
    c(2007, 53004),
    c(2010, 56831),
    c(2015, 62649),
    c(2020, 65896),
    c(2024, 69296),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_historical_is_chronological() {
        assert!(HISTORICAL.windows(2).all(|w| w[0].year < w[1].year));
    }

    #[test]
    fn test_barangays_sum_matches_latest_census() {
        let total: u32 = BARANGAYS.iter().map(|b| b.population).sum();
        assert_eq!(BARANGAYS.len(), 22);
        assert_eq!(total, HISTORICAL[HISTORICAL.len() - 1].population);
    }
}
