//! Route tests for `/exams`.

mod common;

use api_shared::{ExamMapper, ExamRowMapper, Mapper};
use axum::http::{Method, StatusCode};
use hms_core::{CatalogueKind, Exam, ExamProcedure, ExamRow, ExamType, HmsError};

use common::{error_message, send, Managers};

const BODY: &str = r#"{
    "exam": {
        "code": "E1",
        "description": "HAEMOGLOBIN",
        "examtype": { "code": "HB", "description": "ignored" },
        "procedure": 1,
        "defaultResult": "IRREGULAR"
    },
    "rows": [">=12 (NORMAL)", "IRREGULAR"]
}"#;

fn haematology() -> ExamType {
    ExamType::new("HB", "Haematology")
}

fn exam() -> Exam {
    Exam {
        code: "E1".into(),
        description: "HAEMOGLOBIN".into(),
        exam_type: haematology(),
        procedure: ExamProcedure::SingleResult,
        default_result: Some("IRREGULAR".into()),
    }
}

fn with_exam_types(managers: &mut Managers) {
    managers
        .exam_types
        .expect_exam_types()
        .returning(|| Ok(vec![haematology()]));
}

#[tokio::test]
async fn create_resolves_exam_type_and_returns_201() {
    let mut managers = Managers::default();
    with_exam_types(&mut managers);
    managers
        .exams
        .expect_new_exam()
        .withf(|e, rows| *e == exam() && *rows == [">=12 (NORMAL)", "IRREGULAR"])
        .times(1)
        .returning(|e, _| Ok(e));

    let (status, body) = send(managers.into_app(), Method::POST, "/exams", Some(BODY)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        serde_json::to_string(&ExamMapper.map_to_dto(&exam())).unwrap()
    );
    assert!(body.contains(r#""description":"Haematology""#));
}

#[tokio::test]
async fn create_with_unknown_exam_type_returns_400() {
    let mut managers = Managers::default();
    managers
        .exam_types
        .expect_exam_types()
        .returning(|| Ok(vec![ExamType::new("UR", "Urine")]));
    managers.exams.expect_new_exam().never();

    let (status, body) = send(managers.into_app(), Method::POST, "/exams", Some(BODY)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "unknown exam type: HB");
}

#[tokio::test]
async fn create_with_missing_rows_passes_empty_list() {
    let body = r#"{"exam":{"code":"E2","description":"NOTES","examtype":{"code":"HB","description":"x"},"procedure":3}}"#;
    let mut managers = Managers::default();
    with_exam_types(&mut managers);
    managers
        .exams
        .expect_new_exam()
        .withf(|e, rows| e.procedure == ExamProcedure::FreeText && rows.is_empty())
        .returning(|e, _| Ok(e));

    let (status, _) = send(managers.into_app(), Method::POST, "/exams", Some(body)).await;

    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn create_with_invalid_procedure_returns_400() {
    let body = BODY.replace(r#""procedure": 1"#, r#""procedure": 7"#);
    let managers = Managers::default();

    let (status, _) = send(managers.into_app(), Method::POST, "/exams", Some(&body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_rule_violation_from_manager_returns_400() {
    let mut managers = Managers::default();
    with_exam_types(&mut managers);
    managers.exams.expect_new_exam().return_once(|_, _| {
        Err(HmsError::InvalidInput(
            "default result must be one of the exam rows".into(),
        ))
    });

    let (status, body) = send(managers.into_app(), Method::POST, "/exams", Some(BODY)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error_message(&body),
        "default result must be one of the exam rows"
    );
}

#[tokio::test]
async fn update_existing_returns_200() {
    let mut managers = Managers::default();
    with_exam_types(&mut managers);
    managers
        .exams
        .expect_is_code_present()
        .withf(|code| code == "E1")
        .returning(|_| Ok(true));
    managers
        .exams
        .expect_update_exam()
        .withf(|e, rows| *e == exam() && rows.len() == 2)
        .times(1)
        .returning(|e, _| Ok(e));

    let (status, _) = send(managers.into_app(), Method::PUT, "/exams/E1", Some(BODY)).await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn update_with_mismatched_code_returns_400() {
    let managers = Managers::default();

    let (status, _) = send(managers.into_app(), Method::PUT, "/exams/E9", Some(BODY)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_with_unknown_exam_type_returns_400() {
    let mut managers = Managers::default();
    managers
        .exams
        .expect_is_code_present()
        .returning(|_| Ok(true));
    managers
        .exam_types
        .expect_exam_types()
        .returning(|| Ok(vec![ExamType::new("UR", "Urine")]));
    managers.exams.expect_update_exam().never();

    let (status, body) = send(managers.into_app(), Method::PUT, "/exams/E1", Some(BODY)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "unknown exam type: HB");
}

#[tokio::test]
async fn update_absent_returns_404() {
    let mut managers = Managers::default();
    managers
        .exams
        .expect_is_code_present()
        .returning(|_| Ok(false));
    managers.exams.expect_update_exam().never();

    let (status, body) = send(managers.into_app(), Method::PUT, "/exams/E1", Some(BODY)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_message(&body), "exam not found: E1");
}

#[tokio::test]
async fn list_returns_serialized_mapped_dtos() {
    let exams = vec![exam()];
    let expected = serde_json::to_string(&ExamMapper.map_to_dto_list(&exams)).unwrap();

    let mut managers = Managers::default();
    managers.exams.expect_exams().return_once(move || Ok(exams));

    let (status, body) = send(managers.into_app(), Method::GET, "/exams", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, expected);
    assert!(body.contains(r#""defaultResult":"IRREGULAR""#));
}

#[tokio::test]
async fn rows_are_listed_for_an_exam() {
    let rows = vec![
        ExamRow {
            code: 1,
            exam_code: "E1".into(),
            description: ">=12 (NORMAL)".into(),
        },
        ExamRow {
            code: 2,
            exam_code: "E1".into(),
            description: "IRREGULAR".into(),
        },
    ];
    let expected = serde_json::to_string(&ExamRowMapper.map_to_dto_list(&rows)).unwrap();

    let mut managers = Managers::default();
    managers
        .exams
        .expect_exam_rows()
        .withf(|code| code == "E1")
        .return_once(move |_| Ok(rows));

    let (status, body) = send(managers.into_app(), Method::GET, "/exams/E1/rows", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, expected);
}

#[tokio::test]
async fn rows_of_unknown_exam_return_404() {
    let mut managers = Managers::default();
    managers.exams.expect_exam_rows().return_once(|code| {
        Err(HmsError::NotFound {
            kind: CatalogueKind::Exam,
            code: code.to_string(),
        })
    });

    let (status, _) = send(managers.into_app(), Method::GET, "/exams/E9/rows", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_existing_returns_true() {
    let mut managers = Managers::default();
    managers
        .exams
        .expect_is_code_present()
        .returning(|_| Ok(true));
    managers.exams.expect_exams().returning(|| Ok(vec![exam()]));
    managers
        .exams
        .expect_delete_exam()
        .withf(|e| e.code == "E1")
        .times(1)
        .returning(|_| Ok(()));

    let (status, body) = send(managers.into_app(), Method::DELETE, "/exams/E1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "true");
}

#[tokio::test]
async fn delete_absent_returns_404() {
    let mut managers = Managers::default();
    managers
        .exams
        .expect_is_code_present()
        .returning(|_| Ok(false));
    managers.exams.expect_delete_exam().never();

    let (status, _) = send(managers.into_app(), Method::DELETE, "/exams/E1", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_is_alive() {
    let (status, body) = send(Managers::default().into_app(), Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"ok":true,"message":"HMS is alive"}"#);
}
