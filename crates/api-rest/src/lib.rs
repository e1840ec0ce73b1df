//! # API REST
//!
//! REST API implementation for HMS.
//!
//! Handles:
//! - HTTP endpoints with axum, one handler module per catalogue
//! - Translation of core errors into HTTP statuses (`error` module)
//! - OpenAPI/Swagger documentation
//!
//! Uses `api-shared` for DTOs and mappers and talks to `hms-core` only through
//! the manager traits held in [`AppState`].

#![warn(rust_2018_idioms)]

pub mod error;
pub mod extract;
pub mod handlers;

use axum::routing::{delete, get, post, put};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{
    AdmissionTypeDto, DeliveryResultTypeDto, ExamDto, ExamRowDto, ExamTypeDto, ExamWithRowsDto,
    HealthRes,
};
use handlers::{admission_types, delivery_result_types, exam_types, exams, health};
use hms_core::{
    AdmissionTypeManager, AdmissionTypeService, CatalogueStore, CoreConfig,
    DeliveryResultTypeManager, DeliveryResultTypeService, ExamManager, ExamService,
    ExamTypeManager, ExamTypeService,
};

pub use error::ApiError;

/// Application state shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub admission_types: Arc<dyn AdmissionTypeManager>,
    pub delivery_result_types: Arc<dyn DeliveryResultTypeManager>,
    pub exam_types: Arc<dyn ExamTypeManager>,
    pub exams: Arc<dyn ExamManager>,
}

impl AppState {
    /// Builds the YAML-backed managers over one catalogue store.
    ///
    /// All managers share the store so that writes across catalogues are
    /// serialised by the same lock.
    pub fn from_config(cfg: &CoreConfig) -> Self {
        let store = Arc::new(CatalogueStore::new(cfg));
        Self {
            admission_types: Arc::new(AdmissionTypeService::new(store.clone())),
            delivery_result_types: Arc::new(DeliveryResultTypeService::new(store.clone())),
            exam_types: Arc::new(ExamTypeService::new(store.clone())),
            exams: Arc::new(ExamService::new(store)),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        admission_types::new_admission_type,
        admission_types::update_admission_type,
        admission_types::get_admission_types,
        admission_types::delete_admission_type,
        delivery_result_types::new_delivery_result_type,
        delivery_result_types::update_delivery_result_type,
        delivery_result_types::get_delivery_result_types,
        delivery_result_types::delete_delivery_result_type,
        exam_types::new_exam_type,
        exam_types::update_exam_type,
        exam_types::get_exam_types,
        exam_types::delete_exam_type,
        exams::new_exam,
        exams::update_exam,
        exams::get_exams,
        exams::get_exam_rows,
        exams::delete_exam,
    ),
    components(schemas(
        HealthRes,
        AdmissionTypeDto,
        DeliveryResultTypeDto,
        ExamTypeDto,
        ExamDto,
        ExamWithRowsDto,
        ExamRowDto,
    )),
    tags(
        (name = "admission-types", description = "Admission type catalogue"),
        (name = "delivery-result-types", description = "Delivery result type catalogue"),
        (name = "exam-types", description = "Exam type catalogue"),
        (name = "exams", description = "Exams and their allowed results")
    )
)]
pub struct ApiDoc;

/// The full HMS REST router, including Swagger UI.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route(
            "/admissiontypes",
            post(admission_types::new_admission_type)
                .put(admission_types::update_admission_type)
                .get(admission_types::get_admission_types),
        )
        .route(
            "/admissiontypes/:code",
            delete(admission_types::delete_admission_type),
        )
        .route(
            "/deliveryresulttypes",
            post(delivery_result_types::new_delivery_result_type)
                .put(delivery_result_types::update_delivery_result_type)
                .get(delivery_result_types::get_delivery_result_types),
        )
        .route(
            "/deliveryresulttypes/:code",
            delete(delivery_result_types::delete_delivery_result_type),
        )
        .route(
            "/examtypes",
            post(exam_types::new_exam_type)
                .put(exam_types::update_exam_type)
                .get(exam_types::get_exam_types),
        )
        .route("/examtypes/:code", delete(exam_types::delete_exam_type))
        .route("/exams", post(exams::new_exam).get(exams::get_exams))
        .route(
            "/exams/:code",
            put(exams::update_exam).delete(exams::delete_exam),
        )
        .route("/exams/:code/rows", get(exams::get_exam_rows))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for path in [
            "/health",
            "/admissiontypes",
            "/admissiontypes/{code}",
            "/deliveryresulttypes",
            "/deliveryresulttypes/{code}",
            "/examtypes",
            "/examtypes/{code}",
            "/exams",
            "/exams/{code}",
            "/exams/{code}/rows",
        ] {
            assert!(paths.contains(&path), "missing {path}");
        }
    }
}
