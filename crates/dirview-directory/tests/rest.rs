//! HTTP client tests against a mockito server.

use std::sync::Arc;

use mockito::Matcher;
use serde_json::json;

use dirview_core::config::DirectoryConfig;
use dirview_directory::{Directory, DirectoryError, RestDirectoryClient};

const DIR_ARN: &str = "arn:aws:clouddirectory:dir1";
const SCHEMA_ARN: &str = "arn:aws:clouddirectory:schema1";

fn config_for(server: &mockito::Server) -> DirectoryConfig {
    DirectoryConfig {
        endpoint: server.url(),
        directory_arn: DIR_ARN.to_string(),
        schema_arn: SCHEMA_ARN.to_string(),
        ..Default::default()
    }
}

fn accessor(server: &mockito::Server) -> Directory {
    let client = RestDirectoryClient::new(&config_for(server)).unwrap();
    Directory::new(Arc::new(client), DIR_ARN, SCHEMA_ARN)
}

#[tokio::test]
async fn test_children_request_headers_body_and_decode() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/amazonclouddirectory/2017-01-11/object/children")
        .match_header("x-amz-data-partition", DIR_ARN)
        .match_header("x-amz-consistency-level", "EVENTUAL")
        .match_body(Matcher::PartialJson(json!({
            "ObjectReference": { "Selector": "$42" }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"Children":{"a":"id-a","b":"id-b"}}"#)
        .create_async()
        .await;

    let resp = accessor(&server).list_object_children("42").await.unwrap();

    mock.assert_async().await;
    assert_eq!(resp.children.len(), 2);
    assert_eq!(resp.children["a"], "id-a");
    assert_eq!(resp.children["b"], "id-b");
    assert!(resp.next_token.is_none());
}

#[tokio::test]
async fn test_typed_link_request_carries_consistency_in_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/amazonclouddirectory/2017-01-11/typedlink/incoming")
        .match_header("x-amz-data-partition", DIR_ARN)
        .match_body(Matcher::PartialJson(json!({
            "ConsistencyLevel": "EVENTUAL",
            "ObjectReference": { "Selector": "$42" }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"LinkSpecifiers":[]}"#)
        .create_async()
        .await;

    let resp = accessor(&server)
        .list_incoming_typed_links("42")
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(resp.link_specifiers.is_empty());
}

#[tokio::test]
async fn test_next_token_is_relayed_unconsumed() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/amazonclouddirectory/2017-01-11/object/attributes")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"Attributes":[],"NextToken":"page-2"}"#)
        .create_async()
        .await;

    let resp = accessor(&server)
        .list_object_attributes("42")
        .await
        .unwrap();

    // One page only; the token is the caller's to spend.
    assert_eq!(resp.next_token.as_deref(), Some("page-2"));
}

#[tokio::test]
async fn test_service_error_maps_to_service_variant() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/amazonclouddirectory/2017-01-11/object/parent")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"__type":"com.amazonaws.clouddirectory#ResourceNotFoundException","Message":"no such object"}"#,
        )
        .create_async()
        .await;

    let err = accessor(&server)
        .list_object_parents("missing")
        .await
        .unwrap_err();

    match err {
        DirectoryError::Service {
            code,
            message,
            status,
        } => {
            assert_eq!(code, "ResourceNotFoundException");
            assert_eq!(message, "no such object");
            assert_eq!(status, 404);
        }
        other => panic!("expected Service error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_configured_authorization_header_is_sent() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/amazonclouddirectory/2017-01-11/object/children")
        .match_header("authorization", "Bearer token-1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"Children":{}}"#)
        .create_async()
        .await;

    let config = DirectoryConfig {
        authorization: Some("Bearer token-1".to_string()),
        ..config_for(&server)
    };
    let client = RestDirectoryClient::new(&config).unwrap();
    let dir = Directory::new(Arc::new(client), DIR_ARN, SCHEMA_ARN);

    dir.list_object_children("42").await.unwrap();
    mock.assert_async().await;
}
