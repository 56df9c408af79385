//! FY 2025 statement of receipts and expenditures

use super::dto::{Expenditures, Income, QuarterFinancials};

pub const Q1_2025: QuarterFinancials = QuarterFinancials {
    period: "Q1 2025",
    period_label: "Jan - Mar",
    income: Income {
        local: 88.85,
        external: 69.62,
        total: 158.47,
    },
    expenditures: Expenditures {
        gps: 42.76,
        social: 13.33,
        economic: 11.07,
        debt: 0.35,
        total: 67.51,
    },
    net_income: 90.96,
    fund_balance: 283.29,
};

pub const Q2_2025: QuarterFinancials = QuarterFinancials {
    period: "Q2 2025",
    period_label: "Apr - Jun",
    income: Income {
        local: 114.15,
        external: 139.25,
        total: 253.40,
    },
    expenditures: Expenditures {
        gps: 88.31,
        social: 30.56,
        economic: 20.32,
        debt: 1.29,
        total: 140.48,
    },
    net_income: 112.92,
    fund_balance: 275.20,
};
