use super::error::SchoolServiceError;
use crate::domain::school::{CreateSchoolRequest, SchoolResponse, UpdateSchoolRequest};
use crate::infrastructure::repositories::SchoolRepository;
use crate::validation::FieldViolation;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

const MAX_NAME_LENGTH: usize = 100;

pub struct SchoolService {
    school_repo: Arc<SchoolRepository>,
}

impl SchoolService {
    pub fn new(school_repo: Arc<SchoolRepository>) -> Self {
        Self { school_repo }
    }
}

#[async_trait]
pub trait SchoolServiceApi: Send + Sync {
    async fn list_schools(&self) -> Result<Vec<SchoolResponse>, SchoolServiceError>;

    async fn get_school(&self, school_id: Uuid) -> Result<SchoolResponse, SchoolServiceError>;

    async fn create_school(
        &self,
        request: CreateSchoolRequest,
    ) -> Result<SchoolResponse, SchoolServiceError>;

    async fn update_school(
        &self,
        school_id: Uuid,
        request: UpdateSchoolRequest,
    ) -> Result<SchoolResponse, SchoolServiceError>;

    async fn delete_school(&self, school_id: Uuid) -> Result<(), SchoolServiceError>;
}

#[async_trait]
impl SchoolServiceApi for SchoolService {
    async fn list_schools(&self) -> Result<Vec<SchoolResponse>, SchoolServiceError> {
        let schools = self
            .school_repo
            .find_all()
            .await
            .map_err(|e| SchoolServiceError::Dependency(e.to_string()))?;
        Ok(schools.into_iter().map(SchoolResponse::from).collect())
    }

    async fn get_school(&self, school_id: Uuid) -> Result<SchoolResponse, SchoolServiceError> {
        let school = self
            .school_repo
            .find_by_id(school_id)
            .await
            .map_err(|e| SchoolServiceError::Dependency(e.to_string()))?
            .ok_or(SchoolServiceError::NotFound(school_id))?;
        Ok(school.into())
    }

    async fn create_school(
        &self,
        request: CreateSchoolRequest,
    ) -> Result<SchoolResponse, SchoolServiceError> {
        validate_name(&request.name)?;
        let name = request.name.trim();

        if self
            .school_repo
            .exists_by_name(name)
            .await
            .map_err(|e| SchoolServiceError::Dependency(e.to_string()))?
        {
            return Err(SchoolServiceError::Conflict(name.to_string()));
        }

        let school = self
            .school_repo
            .create(Uuid::new_v4(), name)
            .await
            .map_err(|e| SchoolServiceError::Dependency(e.to_string()))?;

        Ok(school.into())
    }

    async fn update_school(
        &self,
        school_id: Uuid,
        request: UpdateSchoolRequest,
    ) -> Result<SchoolResponse, SchoolServiceError> {
        validate_name(&request.name)?;
        let name = request.name.trim();

        let mut school = self
            .school_repo
            .find_by_id(school_id)
            .await
            .map_err(|e| SchoolServiceError::Dependency(e.to_string()))?
            .ok_or(SchoolServiceError::NotFound(school_id))?;

        if school.name != name
            && self
                .school_repo
                .exists_by_name(name)
                .await
                .map_err(|e| SchoolServiceError::Dependency(e.to_string()))?
        {
            return Err(SchoolServiceError::Conflict(name.to_string()));
        }

        self.school_repo
            .update_name(school_id, name)
            .await
            .map_err(|e| SchoolServiceError::Dependency(e.to_string()))?;

        school.name = name.to_string();
        Ok(school.into())
    }

    async fn delete_school(&self, school_id: Uuid) -> Result<(), SchoolServiceError> {
        self.school_repo
            .find_by_id(school_id)
            .await
            .map_err(|e| SchoolServiceError::Dependency(e.to_string()))?
            .ok_or(SchoolServiceError::NotFound(school_id))?;

        self.school_repo
            .delete(school_id)
            .await
            .map_err(|e| SchoolServiceError::Dependency(e.to_string()))?;

        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), SchoolServiceError> {
    let mut violations = Vec::new();

    if name.trim().is_empty() {
        violations.push(FieldViolation::new("name", "must not be blank"));
    }
    if name.len() > MAX_NAME_LENGTH {
        violations.push(FieldViolation::new(
            "name",
            format!("must be at most {} characters", MAX_NAME_LENGTH),
        ));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(SchoolServiceError::Invalid {
            message: "Invalid school payload".to_string(),
            violations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_accepts_regular_names() {
        assert!(validate_name("Lambda School").is_ok());
    }

    #[test]
    fn test_validate_name_rejects_blank_names() {
        let err = validate_name("   ").unwrap_err();
        match err {
            SchoolServiceError::Invalid { violations, .. } => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].field, "name");
                assert_eq!(violations[0].message, "must not be blank");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_name_rejects_overlong_names() {
        let name = "x".repeat(MAX_NAME_LENGTH + 1);
        let err = validate_name(&name).unwrap_err();
        match err {
            SchoolServiceError::Invalid { violations, .. } => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].message, "must be at most 100 characters");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_name_reports_each_broken_rule() {
        let name = " ".repeat(MAX_NAME_LENGTH + 1);
        let err = validate_name(&name).unwrap_err();
        match err {
            SchoolServiceError::Invalid { violations, .. } => {
                assert_eq!(violations.len(), 2);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
