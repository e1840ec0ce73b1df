//! `/examtypes` handlers.
//!
//! Exams reference their type by code, so a type in use cannot be deleted.

use crate::error::ApiError;
use crate::extract::ValidJson;
use crate::AppState;
use api_shared::{ExamTypeDto, ExamTypeMapper, Mapper};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hms_core::{CatalogueKind, HmsError};

#[utoipa::path(
    post,
    path = "/examtypes",
    tag = "exam-types",
    request_body = ExamTypeDto,
    responses(
        (status = 201, description = "Exam type created", body = ExamTypeDto),
        (status = 400, description = "Invalid exam type"),
        (status = 409, description = "Code already in use")
    )
)]
#[axum::debug_handler]
pub async fn new_exam_type(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<ExamTypeDto>,
) -> Result<(StatusCode, Json<ExamTypeDto>), ApiError> {
    tracing::info!("Create exam type {}", body.code);
    let exam_type = ExamTypeMapper.map_to_model(&body);
    let created = state.exam_types.new_exam_type(exam_type)?;
    Ok((StatusCode::CREATED, Json(ExamTypeMapper.map_to_dto(&created))))
}

#[utoipa::path(
    put,
    path = "/examtypes",
    tag = "exam-types",
    request_body = ExamTypeDto,
    responses(
        (status = 200, description = "Exam type updated", body = ExamTypeDto),
        (status = 400, description = "Invalid exam type"),
        (status = 404, description = "Exam type not found")
    )
)]
#[axum::debug_handler]
pub async fn update_exam_type(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<ExamTypeDto>,
) -> Result<Json<ExamTypeDto>, ApiError> {
    tracing::info!("Update exam type {}", body.code);
    if !state.exam_types.is_code_present(&body.code)? {
        return Err(HmsError::NotFound {
            kind: CatalogueKind::ExamType,
            code: body.code,
        }
        .into());
    }
    let exam_type = ExamTypeMapper.map_to_model(&body);
    let updated = state.exam_types.update_exam_type(exam_type)?;
    Ok(Json(ExamTypeMapper.map_to_dto(&updated)))
}

#[utoipa::path(
    get,
    path = "/examtypes",
    tag = "exam-types",
    responses(
        (status = 200, description = "All exam types", body = [ExamTypeDto])
    )
)]
#[axum::debug_handler]
pub async fn get_exam_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<ExamTypeDto>>, ApiError> {
    tracing::info!("Get all exam types");
    let exam_types = state.exam_types.exam_types()?;
    Ok(Json(ExamTypeMapper.map_to_dto_list(&exam_types)))
}

#[utoipa::path(
    delete,
    path = "/examtypes/{code}",
    tag = "exam-types",
    params(("code" = String, Path, description = "Exam type code")),
    responses(
        (status = 200, description = "Exam type deleted", body = bool),
        (status = 404, description = "Exam type not found"),
        (status = 409, description = "Exam type still used by an exam")
    )
)]
#[axum::debug_handler]
pub async fn delete_exam_type(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<bool>, ApiError> {
    tracing::info!("Delete exam type {}", code);
    let not_found = |code: String| HmsError::NotFound {
        kind: CatalogueKind::ExamType,
        code,
    };
    if !state.exam_types.is_code_present(&code)? {
        return Err(not_found(code).into());
    }
    let Some(exam_type) = state
        .exam_types
        .exam_types()?
        .into_iter()
        .find(|e| e.code == code)
    else {
        return Err(not_found(code).into());
    };
    state.exam_types.delete_exam_type(&exam_type)?;
    Ok(Json(true))
}
