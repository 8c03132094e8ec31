use student_service::domain::{MessageResponse, StudentRecord, UpdateStudentResponse};

use crate::helpers::{failing_store, StudentBody, TestApp};

#[tokio::test]
async fn should_overwrite_fields_and_report_one_row() {
    let app = TestApp::new().await;
    let token = app.login_token().await;
    let created: StudentRecord = app
        .create_student(Some(&token), &StudentBody::new("A", "a@x.com"))
        .await
        .json()
        .await
        .unwrap();

    let response = app
        .update_student(
            Some(&token),
            &created.id.to_string(),
            &StudentBody::new("B", "b@x.com"),
        )
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: UpdateStudentResponse = response.json().await.unwrap();
    assert_eq!(body.affected_count, 1);

    let students = app.list_students(&token).await;
    assert_eq!(
        students,
        vec![StudentRecord {
            id: created.id,
            name: "B".to_owned(),
            email: "b@x.com".to_owned(),
        }]
    );
}

#[tokio::test]
async fn should_serialize_affected_count_in_camel_case() {
    let app = TestApp::new().await;
    let token = app.login_token().await;

    let response = app
        .update_student(Some(&token), "7", &StudentBody::new("B", "b@x.com"))
        .await;

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "affectedCount": 0 }));
}

#[tokio::test]
async fn should_return_200_with_zero_for_missing_student() {
    let app = TestApp::new().await;
    let token = app.login_token().await;

    let response = app
        .update_student(Some(&token), "999", &StudentBody::new("B", "b@x.com"))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: UpdateStudentResponse = response.json().await.unwrap();
    assert_eq!(body.affected_count, 0);
}

#[tokio::test]
async fn should_return_200_with_zero_for_non_numeric_id() {
    let app = TestApp::new().await;
    let token = app.login_token().await;

    let response = app
        .update_student(Some(&token), "abc", &StudentBody::new("B", "b@x.com"))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: UpdateStudentResponse = response.json().await.unwrap();
    assert_eq!(body.affected_count, 0);
}

#[tokio::test]
async fn should_return_500_when_field_missing() {
    let app = TestApp::new().await;
    let token = app.login_token().await;
    let created: StudentRecord = app
        .create_student(Some(&token), &StudentBody::new("A", "a@x.com"))
        .await
        .json()
        .await
        .unwrap();

    let response = app
        .update_student(Some(&token), &created.id.to_string(), &StudentBody::default())
        .await;

    assert_eq!(response.status().as_u16(), 500);
    let body: MessageResponse = response.json().await.unwrap();
    assert_eq!(body.message, "Error updating student");
    assert_eq!(app.list_students(&token).await, vec![created]);
}

#[tokio::test]
async fn should_return_500_on_store_failure() {
    let app = TestApp::with_store(failing_store()).await;
    let token = app.login_token().await;

    let response = app
        .update_student(Some(&token), "1", &StudentBody::new("B", "b@x.com"))
        .await;

    assert_eq!(response.status().as_u16(), 500);
    let body: MessageResponse = response.json().await.unwrap();
    assert_eq!(body.message, "Error updating student");
}

#[tokio::test]
async fn should_return_500_when_body_missing() {
    let app = TestApp::new().await;
    let token = app.login_token().await;
    let created: StudentRecord = app
        .create_student(Some(&token), &StudentBody::new("A", "a@x.com"))
        .await
        .json()
        .await
        .unwrap();

    let response = app
        .http_client
        .put(&format!("{}/update/{}", &app.address, created.id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute update request.");

    assert_eq!(response.status().as_u16(), 500);
    let body: MessageResponse = response.json().await.unwrap();
    assert_eq!(body.message, "Error updating student");
    assert_eq!(app.list_students(&token).await, vec![created]);
}
