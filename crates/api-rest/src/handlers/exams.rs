//! `/exams` handlers.
//!
//! An exam is written together with its allowed results, so create and update
//! take an [`ExamWithRowsDto`]. The exam type in the body is resolved against
//! the exam type catalogue; its description is taken from the catalogue, not
//! from the request.

use crate::error::ApiError;
use crate::extract::ValidJson;
use crate::AppState;
use api_shared::{ExamDto, ExamMapper, ExamRowDto, ExamRowMapper, ExamWithRowsDto, Mapper};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hms_core::{CatalogueKind, Exam, ExamType, HmsError};

fn resolve_exam_type(state: &AppState, code: &str) -> Result<ExamType, ApiError> {
    state
        .exam_types
        .exam_types()?
        .into_iter()
        .find(|t| t.code == code)
        .ok_or_else(|| ApiError::BadRequest(format!("unknown exam type: {code}")))
}

fn exam_from_body(state: &AppState, body: &ExamWithRowsDto) -> Result<Exam, ApiError> {
    let exam_type = resolve_exam_type(state, &body.exam.examtype.code)?;
    let mut exam = ExamMapper.map_to_model(&body.exam);
    exam.exam_type = exam_type;
    Ok(exam)
}

fn exam_not_found(code: String) -> ApiError {
    HmsError::NotFound {
        kind: CatalogueKind::Exam,
        code,
    }
    .into()
}

#[utoipa::path(
    post,
    path = "/exams",
    tag = "exams",
    request_body = ExamWithRowsDto,
    responses(
        (status = 201, description = "Exam created", body = ExamDto),
        (status = 400, description = "Invalid exam, rows or unknown exam type"),
        (status = 409, description = "Code already in use")
    )
)]
#[axum::debug_handler]
pub async fn new_exam(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<ExamWithRowsDto>,
) -> Result<(StatusCode, Json<ExamDto>), ApiError> {
    tracing::info!("Create exam {}", body.exam.code);
    let exam = exam_from_body(&state, &body)?;
    let created = state.exams.new_exam(exam, body.rows.unwrap_or_default())?;
    Ok((StatusCode::CREATED, Json(ExamMapper.map_to_dto(&created))))
}

#[utoipa::path(
    put,
    path = "/exams/{code}",
    tag = "exams",
    request_body = ExamWithRowsDto,
    params(("code" = String, Path, description = "Exam code")),
    responses(
        (status = 200, description = "Exam updated", body = ExamDto),
        (status = 400, description = "Invalid exam, mismatched code or unknown exam type"),
        (status = 404, description = "Exam not found")
    )
)]
#[axum::debug_handler]
pub async fn update_exam(
    State(state): State<AppState>,
    Path(code): Path<String>,
    ValidJson(body): ValidJson<ExamWithRowsDto>,
) -> Result<Json<ExamDto>, ApiError> {
    tracing::info!("Update exam {}", code);
    if body.exam.code != code {
        return Err(ApiError::BadRequest(format!(
            "exam code in body ({}) does not match path ({code})",
            body.exam.code
        )));
    }
    if !state.exams.is_code_present(&code)? {
        return Err(exam_not_found(code));
    }
    let exam = exam_from_body(&state, &body)?;
    let updated = state.exams.update_exam(exam, body.rows.unwrap_or_default())?;
    Ok(Json(ExamMapper.map_to_dto(&updated)))
}

#[utoipa::path(
    get,
    path = "/exams",
    tag = "exams",
    responses(
        (status = 200, description = "All exams", body = [ExamDto])
    )
)]
#[axum::debug_handler]
pub async fn get_exams(State(state): State<AppState>) -> Result<Json<Vec<ExamDto>>, ApiError> {
    tracing::info!("Get all exams");
    let exams = state.exams.exams()?;
    Ok(Json(ExamMapper.map_to_dto_list(&exams)))
}

#[utoipa::path(
    get,
    path = "/exams/{code}/rows",
    tag = "exams",
    params(("code" = String, Path, description = "Exam code")),
    responses(
        (status = 200, description = "Allowed results of the exam", body = [ExamRowDto]),
        (status = 404, description = "Exam not found")
    )
)]
#[axum::debug_handler]
pub async fn get_exam_rows(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Vec<ExamRowDto>>, ApiError> {
    tracing::info!("Get rows of exam {}", code);
    let rows = state.exams.exam_rows(&code)?;
    Ok(Json(ExamRowMapper.map_to_dto_list(&rows)))
}

#[utoipa::path(
    delete,
    path = "/exams/{code}",
    tag = "exams",
    params(("code" = String, Path, description = "Exam code")),
    responses(
        (status = 200, description = "Exam and its rows deleted", body = bool),
        (status = 404, description = "Exam not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_exam(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<bool>, ApiError> {
    tracing::info!("Delete exam {}", code);
    if !state.exams.is_code_present(&code)? {
        return Err(exam_not_found(code));
    }
    match state.exams.exams()?.into_iter().find(|e| e.code == code) {
        Some(exam) => {
            state.exams.delete_exam(&exam)?;
            Ok(Json(true))
        }
        None => Err(exam_not_found(code)),
    }
}
