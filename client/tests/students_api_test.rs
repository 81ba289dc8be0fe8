//! Client behaviour against a stand-in API server

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use mockito::{Matcher, Server};
use serde_json::json;
use sr_client::{
    ClientConfig, CredentialManager, CredentialState, CredentialStore, MemoryCredentialStore,
    StudentsApiClient, AUTHENTICATION_FAILED_MESSAGE,
};
use sr_core::{TokenService, TokenServiceConfig};
use sr_shared::dto::CreateStudentDto;
use sr_shared::{ApiErrorType, FRONT_END_APPLICATION_ID, TOKEN_STORAGE_KEY};

fn token_service() -> TokenService {
    TokenService::new(
        TokenServiceConfig::new("https://students-api.test", "https://students-web.test", "k")
            .unwrap(),
    )
}

fn login_body(token: &str) -> String {
    json!({
        "success": true,
        "value": { "applicationId": FRONT_END_APPLICATION_ID, "token": token },
        "errors": []
    })
    .to_string()
}

fn client_for(base_url: &str) -> (StudentsApiClient, MemoryCredentialStore) {
    let store = MemoryCredentialStore::new();
    let credentials = Arc::new(CredentialManager::new(Arc::new(store.clone())));
    (
        StudentsApiClient::new(ClientConfig::new(base_url), credentials),
        store,
    )
}

#[tokio::test]
async fn test_first_call_logs_in_and_attaches_token() {
    let mut server = Server::new_async().await;
    let token = token_service().issue().unwrap();

    let login = server
        .mock("POST", "/auth/login")
        .match_body(Matcher::Json(json!({ "applicationId": FRONT_END_APPLICATION_ID })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(login_body(&token))
        .expect(1)
        .create_async()
        .await;
    let list = server
        .mock("GET", "/students")
        .match_header("authorization", format!("Bearer {}", token).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":true,"value":[{"id":1,"firstName":"Ada","lastName":"Lovelace"}],"errors":[]}"#)
        .expect(2)
        .create_async()
        .await;

    let (client, store) = client_for(&server.url());

    let first = client.list_students().await.unwrap();
    assert!(first.is_success());
    assert_eq!(first.value.unwrap()[0].first_name, "Ada");

    // The held token is reused
    client.list_students().await.unwrap();

    login.assert_async().await;
    list.assert_async().await;
    assert_eq!(store.get(TOKEN_STORAGE_KEY).await.unwrap(), Some(token));
}

#[tokio::test]
async fn test_concurrent_calls_share_one_login() {
    let mut server = Server::new_async().await;
    let token = token_service().issue().unwrap();

    let login = server
        .mock("POST", "/auth/login")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(login_body(&token))
        .expect(1)
        .create_async()
        .await;
    let get = server
        .mock("GET", Matcher::Regex(r"^/students/\d+$".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":true,"value":{"id":1,"firstName":"Ada","lastName":"Lovelace"},"errors":[]}"#)
        .expect(3)
        .create_async()
        .await;

    let (client, _) = client_for(&server.url());

    let (a, b, c) = tokio::join!(
        client.get_student(1),
        client.get_student(2),
        client.get_student(3)
    );
    assert!(a.unwrap().is_success());
    assert!(b.unwrap().is_success());
    assert!(c.unwrap().is_success());

    login.assert_async().await;
    get.assert_async().await;
}

#[tokio::test]
async fn test_expired_token_triggers_new_login() {
    let mut server = Server::new_async().await;
    let tokens = token_service();
    let expired = tokens
        .issue_at(Utc::now() - chrono::Duration::days(3) - chrono::Duration::seconds(1))
        .unwrap();
    let fresh = tokens.issue().unwrap();

    let login = server
        .mock("POST", "/auth/login")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(login_body(&fresh))
        .expect(1)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/students/7")
        .match_header("authorization", format!("Bearer {}", fresh).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":true,"value":null,"errors":[]}"#)
        .create_async()
        .await;

    let (client, store) = client_for(&server.url());
    store.set(TOKEN_STORAGE_KEY, &expired).await.unwrap();
    assert_eq!(
        client.credentials().state().await.unwrap(),
        CredentialState::HasExpiredCredential
    );

    let response = client.delete_student(7).await.unwrap();
    assert!(response.is_success());
    assert!(response.value.is_none());

    login.assert_async().await;
    delete.assert_async().await;
    assert_eq!(store.get(TOKEN_STORAGE_KEY).await.unwrap(), Some(fresh));
}

#[tokio::test]
async fn test_rejected_login_aborts_the_call() {
    let mut server = Server::new_async().await;

    let login = server
        .mock("POST", "/auth/login")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":false,"value":null,"errors":[{"errorType":"InvalidInputData","errorMessage":"Application ID is invalid."}]}"#)
        .expect(2)
        .create_async()
        .await;
    let create = server
        .mock("POST", "/students")
        .expect(0)
        .create_async()
        .await;

    let (client, store) = client_for(&server.url());

    let response = client
        .create_student(&CreateStudentDto {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        })
        .await
        .unwrap();

    assert!(!response.is_success());
    assert_eq!(response.first_error_type(), Some(ApiErrorType::AuthorizationError));
    assert_eq!(response.errors[0].error_message, AUTHENTICATION_FAILED_MESSAGE);
    assert!(!client.ensure_authenticated().await);
    assert!(store.is_empty().await);

    login.assert_async().await;
    create.assert_async().await;
}

#[tokio::test]
async fn test_login_timeout_is_an_authentication_failure() {
    // Accepts connections but never answers
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let store = MemoryCredentialStore::new();
    let credentials = Arc::new(CredentialManager::new(Arc::new(store.clone())));
    let client = StudentsApiClient::new(
        ClientConfig::new(base_url).with_login_timeout(Duration::from_millis(200)),
        credentials,
    );

    let response = client.list_students().await.unwrap();

    assert_eq!(response.first_error_type(), Some(ApiErrorType::AuthorizationError));
    assert!(store.is_empty().await);
    drop(listener);
}
