//! Shared helpers for route tests: mocked managers and a one-shot request
//! driver.

#![allow(dead_code)]

use std::sync::Arc;

use api_rest::{router, AppState};
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use hms_core::{
    AdmissionType, AdmissionTypeManager, DeliveryResultType, DeliveryResultTypeManager, Exam,
    ExamManager, ExamRow, ExamType, ExamTypeManager, HmsResult,
};
use http_body_util::BodyExt;
use mockall::mock;
use tower::ServiceExt;

mock! {
    pub AdmissionTypes {}

    impl AdmissionTypeManager for AdmissionTypes {
        fn admission_types(&self) -> HmsResult<Vec<AdmissionType>>;
        fn new_admission_type(&self, admission_type: AdmissionType) -> HmsResult<AdmissionType>;
        fn update_admission_type(&self, admission_type: AdmissionType) -> HmsResult<AdmissionType>;
        fn delete_admission_type(&self, admission_type: &AdmissionType) -> HmsResult<()>;
        fn is_code_present(&self, code: &str) -> HmsResult<bool>;
    }
}

mock! {
    pub DeliveryResultTypes {}

    impl DeliveryResultTypeManager for DeliveryResultTypes {
        fn delivery_result_types(&self) -> HmsResult<Vec<DeliveryResultType>>;
        fn new_delivery_result_type(
            &self,
            delivery_result_type: DeliveryResultType,
        ) -> HmsResult<DeliveryResultType>;
        fn update_delivery_result_type(
            &self,
            delivery_result_type: DeliveryResultType,
        ) -> HmsResult<DeliveryResultType>;
        fn delete_delivery_result_type(
            &self,
            delivery_result_type: &DeliveryResultType,
        ) -> HmsResult<()>;
        fn is_code_present(&self, code: &str) -> HmsResult<bool>;
    }
}

mock! {
    pub ExamTypes {}

    impl ExamTypeManager for ExamTypes {
        fn exam_types(&self) -> HmsResult<Vec<ExamType>>;
        fn new_exam_type(&self, exam_type: ExamType) -> HmsResult<ExamType>;
        fn update_exam_type(&self, exam_type: ExamType) -> HmsResult<ExamType>;
        fn delete_exam_type(&self, exam_type: &ExamType) -> HmsResult<()>;
        fn is_code_present(&self, code: &str) -> HmsResult<bool>;
    }
}

mock! {
    pub Exams {}

    impl ExamManager for Exams {
        fn exams(&self) -> HmsResult<Vec<Exam>>;
        fn exam_rows(&self, exam_code: &str) -> HmsResult<Vec<ExamRow>>;
        fn new_exam(&self, exam: Exam, rows: Vec<String>) -> HmsResult<Exam>;
        fn update_exam(&self, exam: Exam, rows: Vec<String>) -> HmsResult<Exam>;
        fn delete_exam(&self, exam: &Exam) -> HmsResult<()>;
        fn is_code_present(&self, code: &str) -> HmsResult<bool>;
    }
}

/// One mock per catalogue. Unconfigured mocks panic if a handler calls them.
pub struct Managers {
    pub admission_types: MockAdmissionTypes,
    pub delivery_result_types: MockDeliveryResultTypes,
    pub exam_types: MockExamTypes,
    pub exams: MockExams,
}

impl Default for Managers {
    fn default() -> Self {
        Self {
            admission_types: MockAdmissionTypes::new(),
            delivery_result_types: MockDeliveryResultTypes::new(),
            exam_types: MockExamTypes::new(),
            exams: MockExams::new(),
        }
    }
}

impl Managers {
    pub fn into_app(self) -> Router {
        router(AppState {
            admission_types: Arc::new(self.admission_types),
            delivery_result_types: Arc::new(self.delivery_result_types),
            exam_types: Arc::new(self.exam_types),
            exams: Arc::new(self.exams),
        })
    }
}

/// Sends one request and returns the status and the raw body.
pub async fn send(app: Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, String) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// The `error` field of a JSON error body.
pub fn error_message(body: &str) -> String {
    let value: serde_json::Value = serde_json::from_str(body).unwrap();
    value["error"].as_str().unwrap().to_string()
}
