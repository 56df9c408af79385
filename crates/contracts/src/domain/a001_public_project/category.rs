use super::aggregate::ProjectRecord;
use serde::{Deserialize, Serialize};

/// Fixed project classification derived from the free-text category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectCategory {
    Buildings,
    Roads,
    FloodControl,
    Water,
}

impl ProjectCategory {
    /// First marker wins: "Flood", then "Road", then "Water", otherwise buildings.
    pub fn classify(category: &str) -> Self {
        if category.contains("Flood") {
            Self::FloodControl
        } else if category.contains("Road") {
            Self::Roads
        } else if category.contains("Water") {
            Self::Water
        } else {
            Self::Buildings
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Buildings => "Buildings",
            Self::Roads => "Roads",
            Self::FloodControl => "Flood Control",
            Self::Water => "Water",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Buildings => "buildings",
            Self::Roads => "roads",
            Self::FloodControl => "flood",
            Self::Water => "water",
        }
    }
}

/// Category filter offered by the projects table tabs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectFilter {
    #[default]
    All,
    Buildings,
    Roads,
    Flood,
    Water,
}

impl ProjectFilter {
    pub const ALL: [ProjectFilter; 5] = [
        ProjectFilter::All,
        ProjectFilter::Buildings,
        ProjectFilter::Roads,
        ProjectFilter::Flood,
        ProjectFilter::Water,
    ];

    /// Unrecognized keys fall back to `All`.
    pub fn from_key(key: &str) -> Self {
        match key {
            "buildings" => Self::Buildings,
            "roads" => Self::Roads,
            "flood" => Self::Flood,
            "water" => Self::Water,
            _ => Self::All,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Buildings => "buildings",
            Self::Roads => "roads",
            Self::Flood => "flood",
            Self::Water => "water",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Buildings => "Buildings",
            Self::Roads => "Roads",
            Self::Flood => "Flood Control",
            Self::Water => "Water",
        }
    }

    /// Category selected by this filter, `None` for `All`
    pub fn category(&self) -> Option<ProjectCategory> {
        match self {
            Self::All => None,
            Self::Buildings => Some(ProjectCategory::Buildings),
            Self::Roads => Some(ProjectCategory::Roads),
            Self::Flood => Some(ProjectCategory::FloodControl),
            Self::Water => Some(ProjectCategory::Water),
        }
    }

    pub fn matches(&self, record: &ProjectRecord) -> bool {
        match self.category() {
            None => true,
            Some(category) => record.classification() == category,
        }
    }

    /// Records passing the filter, in their original order
    pub fn apply(&self, records: &[ProjectRecord]) -> Vec<ProjectRecord> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}

/// Number of projects per filter tab
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub all: usize,
    pub buildings: usize,
    pub roads: usize,
    pub flood: usize,
    pub water: usize,
}

impl CategoryCounts {
    pub fn from_records(records: &[ProjectRecord]) -> Self {
        let mut counts = Self {
            all: records.len(),
            ..Self::default()
        };
        for record in records {
            match record.classification() {
                ProjectCategory::Buildings => counts.buildings += 1,
                ProjectCategory::Roads => counts.roads += 1,
                ProjectCategory::FloodControl => counts.flood += 1,
                ProjectCategory::Water => counts.water += 1,
            }
        }
        counts
    }

    pub fn get(&self, filter: ProjectFilter) -> usize {
        match filter {
            ProjectFilter::All => self.all,
            ProjectFilter::Buildings => self.buildings,
            ProjectFilter::Roads => self.roads,
            ProjectFilter::Flood => self.flood,
            ProjectFilter::Water => self.water,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, category: &str) -> ProjectRecord {
        ProjectRecord {
            id: id.to_string(),
            name: format!("Project {}", id),
            category: category.to_string(),
            location: String::new(),
            contractor: String::new(),
            contractor_id: String::new(),
            cost: 0.0,
            status: 0.0,
            completion_date: None,
        }
    }

    #[test]
    fn test_classify_markers() {
        assert_eq!(
            ProjectCategory::classify("Flood Control Structures"),
            ProjectCategory::FloodControl
        );
        assert_eq!(ProjectCategory::classify("Roads and Bridges"), ProjectCategory::Roads);
        assert_eq!(ProjectCategory::classify("Water Supply"), ProjectCategory::Water);
        assert_eq!(ProjectCategory::classify("Multi-Purpose Building"), ProjectCategory::Buildings);
        assert_eq!(ProjectCategory::classify(""), ProjectCategory::Buildings);
    }

    #[test]
    fn test_classify_precedence() {
        // Flood beats Road, Road beats Water
        assert_eq!(
            ProjectCategory::classify("Road with Flood Drainage"),
            ProjectCategory::FloodControl
        );
        assert_eq!(
            ProjectCategory::classify("Water Crossing Road"),
            ProjectCategory::Roads
        );
    }

    #[test]
    fn test_classify_is_case_sensitive_and_deterministic() {
        assert_eq!(ProjectCategory::classify("flood"), ProjectCategory::Buildings);
        for text in ["Flood", "Road", "Water", "School", "Roadside Water Flood"] {
            assert_eq!(ProjectCategory::classify(text), ProjectCategory::classify(text));
        }
    }

    #[test]
    fn test_filter_from_key() {
        for filter in ProjectFilter::ALL {
            assert_eq!(ProjectFilter::from_key(filter.key()), filter);
        }
        assert_eq!(ProjectFilter::from_key("bridges"), ProjectFilter::All);
        assert_eq!(ProjectFilter::from_key(""), ProjectFilter::All);
    }

    #[test]
    fn test_filter_apply_preserves_order_and_uses_single_classification() {
        let records = vec![
            record("1", "Road Concreting"),
            record("2", "School Building"),
            record("3", "Road with Flood Drainage"),
            record("4", "Farm-to-Market Road"),
            record("5", "Water System"),
        ];

        let roads: Vec<String> = ProjectFilter::Roads
            .apply(&records)
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(roads, vec!["1", "4"]);

        let flood: Vec<String> = ProjectFilter::Flood
            .apply(&records)
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(flood, vec!["3"]);

        assert_eq!(ProjectFilter::All.apply(&records), records);
    }

    #[test]
    fn test_filters_partition_all_records() {
        let records = vec![
            record("1", "Road"),
            record("2", "Building"),
            record("3", "Flood"),
            record("4", "Water"),
            record("5", "Other"),
        ];
        let total: usize = ProjectFilter::ALL[1..]
            .iter()
            .map(|f| f.apply(&records).len())
            .sum();
        assert_eq!(total, records.len());
    }

    #[test]
    fn test_category_counts() {
        let records = vec![
            record("1", "Road"),
            record("2", "Road"),
            record("3", "Flood Control"),
            record("4", "Building"),
        ];
        let counts = CategoryCounts::from_records(&records);
        assert_eq!(counts.all, 4);
        assert_eq!(counts.get(ProjectFilter::Roads), 2);
        assert_eq!(counts.get(ProjectFilter::Flood), 1);
        assert_eq!(counts.get(ProjectFilter::Buildings), 1);
        assert_eq!(counts.get(ProjectFilter::Water), 0);
    }
}
