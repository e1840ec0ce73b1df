//! `/admissiontypes` handlers.

use crate::error::ApiError;
use crate::extract::ValidJson;
use crate::AppState;
use api_shared::{AdmissionTypeDto, AdmissionTypeMapper, Mapper};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hms_core::{CatalogueKind, HmsError};

#[utoipa::path(
    post,
    path = "/admissiontypes",
    tag = "admission-types",
    request_body = AdmissionTypeDto,
    responses(
        (status = 201, description = "Admission type created", body = AdmissionTypeDto),
        (status = 400, description = "Invalid admission type"),
        (status = 409, description = "Code already in use")
    )
)]
#[axum::debug_handler]
pub async fn new_admission_type(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<AdmissionTypeDto>,
) -> Result<(StatusCode, Json<AdmissionTypeDto>), ApiError> {
    tracing::info!("Create admission type {}", body.code);
    let admission_type = AdmissionTypeMapper.map_to_model(&body);
    let created = state.admission_types.new_admission_type(admission_type)?;
    Ok((StatusCode::CREATED, Json(AdmissionTypeMapper.map_to_dto(&created))))
}

#[utoipa::path(
    put,
    path = "/admissiontypes",
    tag = "admission-types",
    request_body = AdmissionTypeDto,
    responses(
        (status = 200, description = "Admission type updated", body = AdmissionTypeDto),
        (status = 400, description = "Invalid admission type"),
        (status = 404, description = "Admission type not found")
    )
)]
#[axum::debug_handler]
pub async fn update_admission_type(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<AdmissionTypeDto>,
) -> Result<Json<AdmissionTypeDto>, ApiError> {
    tracing::info!("Update admission type {}", body.code);
    if !state.admission_types.is_code_present(&body.code)? {
        return Err(HmsError::NotFound {
            kind: CatalogueKind::AdmissionType,
            code: body.code,
        }
        .into());
    }
    let admission_type = AdmissionTypeMapper.map_to_model(&body);
    let updated = state.admission_types.update_admission_type(admission_type)?;
    Ok(Json(AdmissionTypeMapper.map_to_dto(&updated)))
}

#[utoipa::path(
    get,
    path = "/admissiontypes",
    tag = "admission-types",
    responses(
        (status = 200, description = "All admission types", body = [AdmissionTypeDto])
    )
)]
#[axum::debug_handler]
pub async fn get_admission_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<AdmissionTypeDto>>, ApiError> {
    tracing::info!("Get all admission types");
    let admission_types = state.admission_types.admission_types()?;
    Ok(Json(AdmissionTypeMapper.map_to_dto_list(&admission_types)))
}

#[utoipa::path(
    delete,
    path = "/admissiontypes/{code}",
    tag = "admission-types",
    params(("code" = String, Path, description = "Admission type code")),
    responses(
        (status = 200, description = "Admission type deleted", body = bool),
        (status = 404, description = "Admission type not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_admission_type(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<bool>, ApiError> {
    tracing::info!("Delete admission type {}", code);
    let not_found = |code: String| HmsError::NotFound {
        kind: CatalogueKind::AdmissionType,
        code,
    };
    if !state.admission_types.is_code_present(&code)? {
        return Err(not_found(code).into());
    }
    let Some(admission_type) = state
        .admission_types
        .admission_types()?
        .into_iter()
        .find(|a| a.code == code)
    else {
        return Err(not_found(code).into());
    };
    state.admission_types.delete_admission_type(&admission_type)?;
    Ok(Json(true))
}
