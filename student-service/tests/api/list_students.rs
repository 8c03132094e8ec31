use student_service::domain::MessageResponse;

use crate::helpers::{failing_store, internal_store_message, StudentBody, TestApp};

#[tokio::test]
async fn should_return_empty_list_initially() {
    let app = TestApp::new().await;
    let token = app.login_token().await;

    let students = app.list_students(&token).await;

    assert!(students.is_empty());
}

#[tokio::test]
async fn should_list_created_students() {
    let app = TestApp::new().await;
    let token = app.login_token().await;

    for (name, email) in [("A", "a@x.com"), ("B", "b@x.com")] {
        let response = app
            .create_student(Some(&token), &StudentBody::new(name, email))
            .await;
        assert_eq!(response.status().as_u16(), 200);
    }

    let students = app.list_students(&token).await;

    assert_eq!(students.len(), 2);
    assert!(students.iter().any(|s| s.name == "A" && s.email == "a@x.com"));
    assert!(students.iter().any(|s| s.name == "B" && s.email == "b@x.com"));
}

#[tokio::test]
async fn should_return_500_with_generic_message_on_store_failure() {
    let app = TestApp::with_store(failing_store()).await;
    let token = app.login_token().await;

    let response = app.get_students(Some(&token)).await;

    assert_eq!(response.status().as_u16(), 500);
    let text = response.text().await.unwrap();
    assert!(!text.contains(internal_store_message()));
    let body: MessageResponse = serde_json::from_str(&text).unwrap();
    assert_eq!(body.message, "Internal Server Error");
}
