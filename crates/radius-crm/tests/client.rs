//! Integration tests for `CrmClient` using wiremock HTTP mocks.

use radius_crm::{CrmClient, CrmError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> CrmClient {
    CrmClient::with_base_url(base_url, 30).expect("client construction should not fail")
}

fn raw_item(id: &str, street: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "Name": format!("Provider {id}"),
        "Phone": "555-0100",
        "Availability": "Weekdays",
        "Base_Rate": 150.0,
        "Current_Status": status,
        "Street": street,
        "City": "Winter Haven",
        "State": "FL",
        "Zip": "33884",
        "Latitude": "28.0",
        "Longitude": "-81.0"
    })
}

fn page_body(items: &[serde_json::Value], more_records: bool) -> serde_json::Value {
    serde_json::json!({
        "data": items,
        "info": { "more_records": more_records }
    })
}

async fn mount_session(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/session"))
        .respond_with(ResponseTemplate::new(200))
        .mount(server)
        .await;
}

#[tokio::test]
async fn fetch_all_records_follows_continuation_flag() {
    let server = MockServer::start().await;
    mount_session(&server).await;

    // Pages 1-3 report more_records, page 4 ends the loop: exactly 4 requests.
    for page in 1..=4u32 {
        let items = vec![raw_item(&format!("rec-{page}"), "1 Main St", "Active")];
        Mock::given(method("GET"))
            .and(path("/records"))
            .and(query_param("entity", "Service_Provider"))
            .and(query_param("page", page.to_string()))
            .and(query_param("per_page", "200"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&items, page < 4)))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = test_client(&server.uri());
    let records = client
        .fetch_all_records("Service_Provider", 1)
        .await
        .expect("should concatenate all pages");

    assert_eq!(records.len(), 4);
    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["rec-1", "rec-2", "rec-3", "rec-4"]);
}

#[tokio::test]
async fn fetch_all_records_compacts_filtered_items() {
    let server = MockServer::start().await;
    mount_session(&server).await;

    let items = vec![
        raw_item("keep-1", "1 Main St", "Active"),
        raw_item("drop-status", "2 Main St", "Inactive"),
        raw_item("drop-street", "", "Active"),
        raw_item("keep-2", "3 Main St", "Active"),
    ];
    Mock::given(method("GET"))
        .and(path("/records"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&items, false)))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let records = client
        .fetch_all_records("Service_Provider", 1)
        .await
        .expect("should fetch single page");

    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["keep-1", "keep-2"]);
}

#[tokio::test]
async fn session_handshake_runs_exactly_once() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/session"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let items = vec![raw_item("rec-1", "1 Main St", "Active")];
    Mock::given(method("GET"))
        .and(path("/records"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&items, false)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/variables/googleMapsApiKey1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Success": { "Content": "key-value" }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    client.fetch_all_records("Service_Provider", 1).await.unwrap();
    client.get_org_variable("googleMapsApiKey1").await.unwrap();
    // MockServer verifies expect(1) on drop.
}

#[tokio::test]
async fn get_org_variable_returns_success_content() {
    let server = MockServer::start().await;
    mount_session(&server).await;

    Mock::given(method("GET"))
        .and(path("/variables/googleMapsApiKey1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Success": { "Content": "AIza-test-key" }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let key = client
        .get_org_variable("googleMapsApiKey1")
        .await
        .expect("should return variable content");
    assert_eq!(key, "AIza-test-key");
}

#[tokio::test]
async fn get_org_variable_error_envelope_is_typed_error() {
    let server = MockServer::start().await;
    mount_session(&server).await;

    Mock::given(method("GET"))
        .and(path("/variables/googleMapsApiKey9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Error": { "Content": "variable not defined" }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.get_org_variable("googleMapsApiKey9").await;

    match result {
        Err(CrmError::Variable { name, message }) => {
            assert_eq!(name, "googleMapsApiKey9");
            assert_eq!(message, "variable not defined");
        }
        other => panic!("expected CrmError::Variable, got: {other:?}"),
    }
}
