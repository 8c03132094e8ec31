use student_service::domain::{MessageResponse, StudentRecord};

use crate::helpers::{failing_store, StudentBody, TestApp};

#[tokio::test]
async fn should_return_created_record_with_assigned_id() {
    let app = TestApp::new().await;
    let token = app.login_token().await;

    let response = app
        .create_student(Some(&token), &StudentBody::new("A", "a@x.com"))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let created: StudentRecord = response.json().await.unwrap();
    assert_eq!(created.name, "A");
    assert_eq!(created.email, "a@x.com");

    let students = app.list_students(&token).await;
    assert_eq!(students, vec![created]);
}

#[tokio::test]
async fn should_assign_distinct_ids() {
    let app = TestApp::new().await;
    let token = app.login_token().await;

    let first: StudentRecord = app
        .create_student(Some(&token), &StudentBody::new("A", "a@x.com"))
        .await
        .json()
        .await
        .unwrap();
    let second: StudentRecord = app
        .create_student(Some(&token), &StudentBody::new("A", "a@x.com"))
        .await
        .json()
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
}

// Missing columns are rejected by the store, so they surface as a 500.
#[tokio::test]
async fn should_return_500_when_field_missing() {
    let app = TestApp::new().await;
    let token = app.login_token().await;

    let body = StudentBody {
        name: Some("A".to_owned()),
        email: None,
    };
    let response = app.create_student(Some(&token), &body).await;

    assert_eq!(response.status().as_u16(), 500);
    let body: MessageResponse = response.json().await.unwrap();
    assert_eq!(body.message, "Error creating student");
    assert!(app.list_students(&token).await.is_empty());
}

#[tokio::test]
async fn should_return_500_on_store_failure() {
    let app = TestApp::with_store(failing_store()).await;
    let token = app.login_token().await;

    let response = app
        .create_student(Some(&token), &StudentBody::new("A", "a@x.com"))
        .await;

    assert_eq!(response.status().as_u16(), 500);
    let body: MessageResponse = response.json().await.unwrap();
    assert_eq!(body.message, "Error creating student");
}

#[tokio::test]
async fn should_return_500_when_body_missing() {
    let app = TestApp::new().await;
    let token = app.login_token().await;

    let response = app
        .http_client
        .post(&format!("{}/create", &app.address))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute create request.");

    assert_eq!(response.status().as_u16(), 500);
    let body: MessageResponse = response.json().await.unwrap();
    assert_eq!(body.message, "Error creating student");
    assert!(app.list_students(&token).await.is_empty());
}
