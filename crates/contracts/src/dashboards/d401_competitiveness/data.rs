//! Cities and Municipalities Competitiveness Index scores, 2016-2024

use super::dto::IndicatorSeries;

const fn s(label: &'static str, values: [Option<f64>; 9]) -> IndicatorSeries {
    IndicatorSeries { label, values }
}

pub const YEARS: [&str; 9] = [
    "2016", "2017", "2018", "2019", "2020", "2021", "2022", "2023", "2024",
];

pub const ECONOMIC_DYNAMISM: &[IndicatorSeries] = &[
    s(
        "Local Economy Size",
        [Some(0.4353), Some(0.1829), Some(0.1004), Some(0.0420), Some(0.0328), Some(0.0935), Some(0.0344), Some(0.0571), Some(0.0259)],
    ),
    s(
        "Economy Growth",
        [Some(0.0847), Some(0.0030), Some(0.0081), Some(0.0028), Some(0.3297), Some(0.0026), Some(0.0000), Some(0.0005), Some(0.0318)],
    ),
    s(
        "Active Establishments",
        [None, Some(0.1411), Some(0.8263), Some(0.3719), Some(0.5391), Some(0.5346), Some(0.5349), Some(0.5154), Some(0.4994)],
    ),
    s(
        "Safety Compliant",
        [None, Some(0.2991), Some(0.3683), Some(0.2471), Some(0.2470), Some(0.2629), Some(0.0000), Some(0.2480), Some(0.2235)],
    ),
    s(
        "Employment",
        [Some(0.3157), Some(0.1756), Some(0.1604), Some(0.1599), Some(0.1807), Some(0.1636), Some(0.1433), Some(0.1485), Some(0.3835)],
    ),
];

pub const GOVERNMENT_EFFICIENCY: &[IndicatorSeries] = &[
    s(
        "Cost of Living",
        [Some(2.6667), Some(1.6216), Some(1.3889), Some(1.1508), Some(0.8621), Some(0.4063), Some(1.6635), Some(1.1905), Some(1.1919)],
    ),
    s(
        "Cost of Business",
        [Some(2.2968), Some(2.2431), Some(2.1045), Some(1.9988), Some(2.1827), Some(2.1901), Some(1.8629), Some(1.5460), Some(1.5599)],
    ),
    s(
        "Financial Deepening",
        [Some(2.2418), Some(1.5657), Some(0.2448), Some(0.7057), Some(0.8357), Some(0.7899), Some(1.1689), Some(1.1263), Some(0.8288)],
    ),
    s(
        "Productivity",
        [Some(0.0062), Some(0.0339), Some(0.0083), Some(0.0040), Some(0.1654), Some(0.2272), Some(0.1243), Some(0.1451), Some(0.3297)],
    ),
    s(
        "Compliance",
        [Some(3.0994), Some(2.1474), Some(0.0000), Some(2.4500), Some(2.5000), Some(2.3810), Some(1.8929), Some(1.9565), Some(1.9600)],
    ),
];

pub const INFRASTRUCTURE: &[IndicatorSeries] = &[
    s(
        "Road Network",
        [Some(0.0019), Some(0.0003), Some(0.0000), Some(0.0090), Some(0.0021), Some(0.0235), Some(0.0015), Some(0.0016), Some(0.0016)],
    ),
    s(
        "Distance to Ports",
        [Some(2.3543), Some(1.8319), Some(0.0000), Some(1.6595), Some(2.4576), Some(2.4658), Some(1.3088), Some(1.5620), Some(1.5281)],
    ),
    s(
        "Basic Utilities",
        [Some(3.3333), Some(2.5000), Some(0.0000), Some(1.8498), Some(2.4750), Some(2.4714), Some(0.0037), Some(0.6363), Some(0.3560)],
    ),
    s(
        "Transportation",
        [Some(0.4063), Some(0.2816), Some(0.0000), Some(0.0343), Some(0.0221), Some(0.0153), Some(0.0230), Some(0.0636), Some(0.0959)],
    ),
    s(
        "IT Capacity",
        [Some(1.4638), Some(0.4000), Some(0.0000), Some(0.1278), Some(0.3108), Some(0.2727), Some(0.0617), Some(0.1674), Some(0.0155)],
    ),
];

pub const RESILIENCY: &[IndicatorSeries] = &[
    s(
        "DRR Plan",
        [None, Some(2.5000), Some(0.0000), Some(2.4537), Some(2.5000), Some(2.4474), Some(1.9995), Some(1.9583), Some(1.9783)],
    ),
    s(
        "Disaster Drill",
        [None, Some(2.5000), Some(0.0000), Some(2.2500), Some(2.5000), Some(1.2583), Some(1.0020), Some(1.0016), Some(1.0023)],
    ),
    s(
        "Early Warning",
        [None, Some(2.5000), Some(0.0000), Some(2.5000), Some(2.5000), Some(1.2573), Some(1.0062), Some(1.0033), Some(1.0397)],
    ),
    s(
        "DRRMP Budget",
        [None, Some(0.0022), Some(0.0000), Some(0.2655), Some(0.1649), Some(0.0183), Some(0.0000), Some(0.0699), Some(0.0020)],
    ),
    s(
        "Risk Assessments",
        [None, Some(2.5000), Some(0.0000), Some(2.5000), Some(2.5000), Some(2.5000), Some(2.0000), Some(2.0000), Some(2.0000)],
    ),
];

pub const INNOVATION: &[IndicatorSeries] = &[
    s(
        "ICT Plan",
        [None, None, None, None, None, None, Some(1.3334), Some(2.0001), Some(2.0001)],
    ),
    s(
        "R&D Expenditures",
        [None, None, None, None, None, None, Some(0.0000), Some(0.0000), Some(0.0006)],
    ),
    s(
        "E-BPLS Software",
        [None, None, None, None, None, None, Some(2.0000), Some(0.0000), Some(2.0000)],
    ),
    s(
        "STEM Graduates",
        [None, None, None, None, None, None, Some(0.0039), Some(0.0052), Some(0.0181)],
    ),
    s(
        "Innovation Facilities",
        [None, None, None, None, None, None, Some(0.0392), Some(0.1669), Some(0.0227)],
    ),
];

pub const KEY_INDICATORS: &[IndicatorSeries] = &[
    s(
        "Health",
        [Some(0.7476), Some(0.5608), Some(0.0000), Some(0.3946), Some(0.3941), Some(0.4690), Some(0.3219), Some(0.2037), Some(0.2995)],
    ),
    s(
        "Education",
        [Some(0.0605), Some(0.0992), Some(0.0000), Some(0.0348), Some(0.1006), Some(0.0231), Some(0.1263), Some(0.0764), Some(0.1341)],
    ),
    s(
        "Social Protection",
        [Some(0.2988), Some(0.2421), Some(0.0000), Some(0.2778), Some(0.2845), Some(0.4097), Some(0.0011), Some(0.2567), Some(0.4923)],
    ),
    s(
        "Peace & Order",
        [Some(0.0638), Some(0.4080), Some(0.0000), Some(0.0395), Some(0.0347), Some(0.0649), Some(0.0000), Some(0.2571), Some(0.1031)],
    ),
    s(
        "LGU Investment",
        [Some(2.4381), Some(0.2859), Some(0.0000), Some(0.2648), Some(0.1597), Some(0.0191), Some(0.0000), Some(0.0016), Some(0.0108)],
    ),
];
