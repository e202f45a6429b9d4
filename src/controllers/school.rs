use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::school::{CreateSchoolRequest, SchoolResponse, UpdateSchoolRequest};
use crate::{
    domain::school::{SchoolService, SchoolServiceApi},
    error::AppResult,
};

pub struct SchoolController {
    school_service: Arc<SchoolService>,
}

impl SchoolController {
    pub fn new(school_service: Arc<SchoolService>) -> Self {
        Self { school_service }
    }

    /// GET /schools - List all schools
    pub async fn list_schools(
        State(controller): State<Arc<SchoolController>>,
    ) -> AppResult<Json<Vec<SchoolResponse>>> {
        let schools = controller.school_service.list_schools().await?;
        Ok(Json(schools))
    }

    /// GET /schools/{schoolId} - Fetch a single school
    pub async fn get_school(
        State(controller): State<Arc<SchoolController>>,
        Path(school_id): Path<Uuid>,
    ) -> AppResult<Json<SchoolResponse>> {
        let school = controller.school_service.get_school(school_id).await?;
        Ok(Json(school))
    }

    /// POST /schools - Create new school
    pub async fn create_school(
        State(controller): State<Arc<SchoolController>>,
        Json(request): Json<CreateSchoolRequest>,
    ) -> AppResult<(StatusCode, Json<SchoolResponse>)> {
        let school = controller.school_service.create_school(request).await?;
        Ok((StatusCode::CREATED, Json(school)))
    }

    /// PUT /schools/{schoolId} - Rename a school
    pub async fn update_school(
        State(controller): State<Arc<SchoolController>>,
        Path(school_id): Path<Uuid>,
        Json(request): Json<UpdateSchoolRequest>,
    ) -> AppResult<Json<SchoolResponse>> {
        let school = controller
            .school_service
            .update_school(school_id, request)
            .await?;
        Ok(Json(school))
    }

    /// DELETE /schools/{schoolId} - Delete a school
    pub async fn delete_school(
        State(controller): State<Arc<SchoolController>>,
        Path(school_id): Path<Uuid>,
    ) -> AppResult<StatusCode> {
        controller.school_service.delete_school(school_id).await?;
        Ok(StatusCode::NO_CONTENT)
    }
}
