use super::data;
use serde::Serialize;

/// One indicator's yearly scores, aligned with [`data::YEARS`]; `None` where not rated
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IndicatorSeries {
    pub label: &'static str,
    pub values: [Option<f64>; 9],
}

impl IndicatorSeries {
    /// Most recent rated score
    pub fn latest(&self) -> Option<f64> {
        self.values.iter().rev().find_map(|v| *v)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CmciPillar {
    EconomicDynamism,
    GovernmentEfficiency,
    Infrastructure,
    Resiliency,
    Innovation,
}

impl CmciPillar {
    pub const ALL: [CmciPillar; 5] = [
        CmciPillar::EconomicDynamism,
        CmciPillar::GovernmentEfficiency,
        CmciPillar::Infrastructure,
        CmciPillar::Resiliency,
        CmciPillar::Innovation,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::EconomicDynamism => "Economic Dynamism",
            Self::GovernmentEfficiency => "Government Efficiency",
            Self::Infrastructure => "Infrastructure",
            Self::Resiliency => "Resiliency",
            Self::Innovation => "Innovation",
        }
    }

    pub fn indicators(&self) -> &'static [IndicatorSeries] {
        match self {
            Self::EconomicDynamism => data::ECONOMIC_DYNAMISM,
            Self::GovernmentEfficiency => data::GOVERNMENT_EFFICIENCY,
            Self::Infrastructure => data::INFRASTRUCTURE,
            Self::Resiliency => data::RESILIENCY,
            Self::Innovation => data::INNOVATION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pillar_has_five_indicators() {
        for pillar in CmciPillar::ALL {
            assert_eq!(pillar.indicators().len(), 5, "{}", pillar.label());
        }
        assert_eq!(data::KEY_INDICATORS.len(), 5);
    }

    #[test]
    fn test_latest_skips_missing_scores() {
        let series = IndicatorSeries {
            label: "Test",
            values: [Some(1.0), Some(2.0), None, None, None, None, None, None, None],
        };
        assert_eq!(series.latest(), Some(2.0));

        let empty = IndicatorSeries {
            label: "Empty",
            values: [None; 9],
        };
        assert_eq!(empty.latest(), None);
    }

    #[test]
    fn test_innovation_rated_from_2022() {
        let ict = &CmciPillar::Innovation.indicators()[0];
        assert_eq!(ict.values[5], None);
        assert_eq!(ict.values[6], Some(1.3334));
        assert_eq!(ict.latest(), Some(2.0001));
    }
}
