//! End-to-end tests against a mock REDCap server
//!
//! These tests exercise the full path: operation call, payload assembly,
//! form encoding, HTTP POST and verbatim body return.

use mockito::Matcher;
use redcap_client::client::RedcapClient;
use redcap_client::config::RedcapConfig;
use redcap_client::domain::{DataShape, ExportFormat, RedcapError};

fn client_for(server: &mockito::ServerGuard) -> RedcapClient {
    let config = RedcapConfig::new(format!("{}/api/", server.url()), "ABC123");
    RedcapClient::new(config).expect("client construction")
}

#[tokio::test]
async fn export_version_round_trip() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("token".into(), "ABC123".into()),
            Matcher::UrlEncoded("content".into(), "version".into()),
            Matcher::UrlEncoded("format".into(), "json".into()),
            Matcher::UrlEncoded("type".into(), "flat".into()),
        ]))
        .with_status(200)
        .with_body("11.1.5")
        .create_async()
        .await;

    let client = client_for(&server);
    let version = client.export_version(None, None).await.unwrap();

    assert_eq!(version, "11.1.5");
    mock.assert_async().await;
}

#[tokio::test]
async fn export_metadata_sends_csv_format_with_default_return_format() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("content".into(), "metadata".into()),
            Matcher::UrlEncoded("format".into(), "csv".into()),
            Matcher::UrlEncoded("returnFormat".into(), "json".into()),
        ]))
        .with_status(200)
        .with_body("field_name,form_name\nrecord_id,demographics\n")
        .create_async()
        .await;

    let client = client_for(&server);
    let body = client
        .export_metadata(None, None, Some(ExportFormat::Csv), None)
        .await
        .unwrap();

    // The CSV body comes back verbatim; this layer never parses it
    assert!(body.starts_with("field_name,form_name"));
    mock.assert_async().await;
}

#[tokio::test]
async fn export_records_joins_filters_into_form_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("content".into(), "record".into()),
            Matcher::UrlEncoded("records".into(), "1,2,3".into()),
            Matcher::UrlEncoded("fields".into(), "firstName,lastName,age".into()),
            Matcher::UrlEncoded("type".into(), "eav".into()),
        ]))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = client_for(&server);
    client
        .export_records(
            "1, 2,3",
            Some("firstName, lastName, age"),
            None,
            None,
            None,
            Some(DataShape::Eav),
            None,
            None,
        )
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn missing_record_identifiers_never_reach_the_server() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/")
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .export_records("  ", None, None, None, None, None, None, None)
        .await
        .unwrap_err();

    assert!(matches!(err, RedcapError::MissingRequired(_)));
    mock.assert_async().await;
}

#[tokio::test]
async fn import_records_posts_serialized_data() {
    #[derive(serde::Serialize)]
    struct Row {
        record_id: String,
        age: u32,
    }

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("content".into(), "record".into()),
            Matcher::UrlEncoded("returnContent".into(), "count".into()),
            Matcher::UrlEncoded("data".into(), r#"[{"record_id":"9","age":54}]"#.into()),
        ]))
        .with_status(200)
        .with_body("1")
        .create_async()
        .await;

    let client = client_for(&server);
    let count = client
        .import_records(
            &[Row {
                record_id: "9".to_string(),
                age: 54,
            }],
            None,
            None,
            None,
            None,
            None,
            None,
        )
        .await
        .unwrap();

    assert_eq!(count, "1");
    mock.assert_async().await;
}

#[tokio::test]
async fn delete_arms_sends_action_delete() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("content".into(), "arm".into()),
            Matcher::UrlEncoded("action".into(), "delete".into()),
            Matcher::UrlEncoded("arms".into(), "2,3".into()),
        ]))
        .with_status(200)
        .with_body("2")
        .create_async()
        .await;

    let client = client_for(&server);
    let deleted = client.delete_arms("2 3").await.unwrap();

    assert_eq!(deleted, "2");
    mock.assert_async().await;
}

#[tokio::test]
async fn api_error_status_surfaces_as_transport_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/")
        .with_status(403)
        .with_body("{\"error\":\"You do not have permissions to use the API\"}")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.export_users(None, None).await.unwrap_err();

    assert!(matches!(err, RedcapError::Transport(_)));
    assert!(err.to_string().contains("403"));
}

#[tokio::test]
async fn stub_operation_fails_without_touching_the_server() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/")
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.export_file().await.unwrap_err();

    assert!(matches!(err, RedcapError::Unsupported("export_file")));
    mock.assert_async().await;
}
