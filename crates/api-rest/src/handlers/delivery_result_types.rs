//! `/deliveryresulttypes` handlers.

use crate::error::ApiError;
use crate::extract::ValidJson;
use crate::AppState;
use api_shared::{DeliveryResultTypeDto, DeliveryResultTypeMapper, Mapper};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hms_core::{CatalogueKind, HmsError};

#[utoipa::path(
    post,
    path = "/deliveryresulttypes",
    tag = "delivery-result-types",
    request_body = DeliveryResultTypeDto,
    responses(
        (status = 201, description = "Delivery result type created", body = DeliveryResultTypeDto),
        (status = 400, description = "Invalid delivery result type"),
        (status = 409, description = "Code already in use")
    )
)]
#[axum::debug_handler]
pub async fn new_delivery_result_type(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<DeliveryResultTypeDto>,
) -> Result<(StatusCode, Json<DeliveryResultTypeDto>), ApiError> {
    tracing::info!("Create delivery result type {}", body.code);
    let delivery_result_type = DeliveryResultTypeMapper.map_to_model(&body);
    let created = state.delivery_result_types.new_delivery_result_type(delivery_result_type)?;
    Ok((StatusCode::CREATED, Json(DeliveryResultTypeMapper.map_to_dto(&created))))
}

#[utoipa::path(
    put,
    path = "/deliveryresulttypes",
    tag = "delivery-result-types",
    request_body = DeliveryResultTypeDto,
    responses(
        (status = 200, description = "Delivery result type updated", body = DeliveryResultTypeDto),
        (status = 400, description = "Invalid delivery result type"),
        (status = 404, description = "Delivery result type not found")
    )
)]
#[axum::debug_handler]
pub async fn update_delivery_result_type(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<DeliveryResultTypeDto>,
) -> Result<Json<DeliveryResultTypeDto>, ApiError> {
    tracing::info!("Update delivery result type {}", body.code);
    if !state.delivery_result_types.is_code_present(&body.code)? {
        return Err(HmsError::NotFound {
            kind: CatalogueKind::DeliveryResultType,
            code: body.code,
        }
        .into());
    }
    let delivery_result_type = DeliveryResultTypeMapper.map_to_model(&body);
    let updated = state.delivery_result_types.update_delivery_result_type(delivery_result_type)?;
    Ok(Json(DeliveryResultTypeMapper.map_to_dto(&updated)))
}

#[utoipa::path(
    get,
    path = "/deliveryresulttypes",
    tag = "delivery-result-types",
    responses(
        (status = 200, description = "All delivery result types", body = [DeliveryResultTypeDto])
    )
)]
#[axum::debug_handler]
pub async fn get_delivery_result_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<DeliveryResultTypeDto>>, ApiError> {
    tracing::info!("Get all delivery result types");
    let delivery_result_types = state.delivery_result_types.delivery_result_types()?;
    Ok(Json(DeliveryResultTypeMapper.map_to_dto_list(&delivery_result_types)))
}

#[utoipa::path(
    delete,
    path = "/deliveryresulttypes/{code}",
    tag = "delivery-result-types",
    params(("code" = String, Path, description = "Delivery result type code")),
    responses(
        (status = 200, description = "Delivery result type deleted", body = bool),
        (status = 404, description = "Delivery result type not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_delivery_result_type(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<bool>, ApiError> {
    tracing::info!("Delete delivery result type {}", code);
    let not_found = |code: String| HmsError::NotFound {
        kind: CatalogueKind::DeliveryResultType,
        code,
    };
    if !state.delivery_result_types.is_code_present(&code)? {
        return Err(not_found(code).into());
    }
    let Some(delivery_result_type) = state
        .delivery_result_types
        .delivery_result_types()?
        .into_iter()
        .find(|d| d.code == code)
    else {
        return Err(not_found(code).into());
    };
    state.delivery_result_types.delete_delivery_result_type(&delivery_result_type)?;
    Ok(Json(true))
}
