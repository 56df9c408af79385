pub mod aggregate;
pub mod category;

pub use aggregate::{ProjectRecord, ProjectsPayload, ProjectsSummary};
pub use category::{CategoryCounts, ProjectCategory, ProjectFilter};
