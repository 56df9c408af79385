use super::data;
use serde::Serialize;

/// Amounts are in millions of pesos.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Income {
    pub local: f64,
    pub external: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Expenditures {
    /// General public services
    pub gps: f64,
    pub social: f64,
    pub economic: f64,
    pub debt: f64,
    pub total: f64,
}

/// Statement of receipts and expenditures for one quarter
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuarterFinancials {
    pub period: &'static str,
    pub period_label: &'static str,
    pub income: Income,
    pub expenditures: Expenditures,
    pub net_income: f64,
    pub fund_balance: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Quarter {
    #[default]
    Q1,
    Q2,
}

impl Quarter {
    pub const ALL: [Quarter; 2] = [Quarter::Q1, Quarter::Q2];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "q1" => Some(Self::Q1),
            "q2" => Some(Self::Q2),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Q1 => "q1",
            Self::Q2 => "q2",
        }
    }

    pub fn financials(&self) -> &'static QuarterFinancials {
        match self {
            Self::Q1 => &data::Q1_2025,
            Self::Q2 => &data::Q2_2025,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_keys() {
        for quarter in Quarter::ALL {
            assert_eq!(Quarter::from_key(quarter.key()), Some(quarter));
        }
        assert_eq!(Quarter::from_key("q3"), None);
    }

    #[test]
    fn test_income_components_add_up() {
        for quarter in Quarter::ALL {
            let f = quarter.financials();
            assert!((f.income.local + f.income.external - f.income.total).abs() < 0.011);
            let exp = &f.expenditures;
            assert!((exp.gps + exp.social + exp.economic + exp.debt - exp.total).abs() < 0.011);
        }
    }
}
