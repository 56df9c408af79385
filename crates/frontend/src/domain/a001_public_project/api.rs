use crate::shared::api_utils::{fetch_json, LoadError};
use contracts::domain::a001_public_project::ProjectsPayload;

/// Fetch the published project list with its summary
pub async fn fetch_projects(data_url: &str) -> Result<ProjectsPayload, LoadError> {
    let payload: ProjectsPayload = fetch_json(data_url).await?;
    log::info!(
        "Loaded {} projects ({} in summary)",
        payload.projects.len(),
        payload.summary.total_projects
    );
    Ok(payload)
}
