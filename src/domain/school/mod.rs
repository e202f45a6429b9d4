pub mod error;
pub mod model;
pub mod service;

pub use error::SchoolServiceError;
pub use model::School;
pub use service::{SchoolService, SchoolServiceApi};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response for school endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct SchoolResponse {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Request to create a new school
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateSchoolRequest {
    pub name: String,
}

/// Request to rename an existing school
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateSchoolRequest {
    pub name: String,
}

impl From<School> for SchoolResponse {
    fn from(school: School) -> Self {
        Self {
            id: school.id,
            name: school.name,
            created_at: school.created_at,
        }
    }
}
