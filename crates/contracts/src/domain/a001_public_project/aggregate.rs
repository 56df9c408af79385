use super::category::ProjectCategory;
use serde::{Deserialize, Deserializer, Serialize};

/// Public infrastructure project as published in the projects data file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    /// Contract identifier (the data file uses both strings and numbers)
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    /// Free-text category, classified by substring (see [`ProjectCategory::classify`])
    pub category: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub contractor: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub contractor_id: String,
    /// Contract amount in pesos
    pub cost: f64,
    /// Physical accomplishment, 0..=100
    pub status: f64,
    #[serde(default)]
    pub completion_date: Option<String>,
}

impl ProjectRecord {
    pub fn classification(&self) -> ProjectCategory {
        ProjectCategory::classify(&self.category)
    }

    pub fn is_completed(&self) -> bool {
        self.status >= 100.0
    }
}

/// Aggregates published alongside the project list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsSummary {
    pub total_projects: usize,
    pub total_cost: f64,
}

/// Whole projects data file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectsPayload {
    pub projects: Vec<ProjectRecord>,
    #[serde(default)]
    pub summary: ProjectsSummary,
}

impl ProjectsPayload {
    pub fn completed_count(&self) -> usize {
        self.projects.iter().filter(|p| p.is_completed()).count()
    }

    /// Projects still in progress, based on the published total
    pub fn ongoing_count(&self) -> usize {
        self.summary
            .total_projects
            .saturating_sub(self.completed_count())
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "projects": [
            {
                "id": "24AB0012",
                "name": "Construction of Flood Mitigation Structure along Cagayan River",
                "category": "Flood Control and Drainage",
                "location": "Barangay Roxas",
                "contractor": "ACME Builders",
                "contractorId": 40112,
                "cost": 96500000.5,
                "status": 100,
                "completionDate": "2024-03-15"
            },
            {
                "id": 77,
                "name": "Road Widening",
                "category": "Roads",
                "location": "Poblacion South",
                "contractor": "Northline Corp.",
                "contractorId": "NL-9",
                "cost": 1200000,
                "status": 63.4
            }
        ],
        "summary": { "totalProjects": 2, "totalCost": 97700000.5 }
    }"#;

    #[test]
    fn test_parse_payload() {
        let payload: ProjectsPayload = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(payload.projects.len(), 2);
        assert_eq!(payload.projects[0].contractor_id, "40112");
        assert_eq!(payload.projects[1].id, "77");
        assert_eq!(payload.projects[1].completion_date, None);
        assert_eq!(payload.summary.total_projects, 2);
    }

    #[test]
    fn test_completed_and_ongoing_counts() {
        let payload: ProjectsPayload = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(payload.completed_count(), 1);
        assert_eq!(payload.ongoing_count(), 1);
    }

    #[test]
    fn test_ongoing_count_saturates() {
        let mut payload: ProjectsPayload = serde_json::from_str(SAMPLE).unwrap();
        payload.summary.total_projects = 0;
        assert_eq!(payload.ongoing_count(), 0);
    }

    #[test]
    fn test_classification_of_record() {
        let payload: ProjectsPayload = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(
            payload.projects[0].classification(),
            ProjectCategory::FloodControl
        );
        assert_eq!(payload.projects[1].classification(), ProjectCategory::Roads);
    }
}
