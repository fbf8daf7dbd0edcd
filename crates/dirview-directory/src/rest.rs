//! HTTP implementation of the [`DirectoryClient`] capability.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use dirview_core::config::DirectoryConfig;
use dirview_core::types::{
    ConsistencyLevel, ListIncomingTypedLinksRequest, ListIncomingTypedLinksResponse,
    ListObjectAttributesRequest, ListObjectAttributesResponse, ListObjectChildrenRequest,
    ListObjectChildrenResponse, ListObjectParentsRequest, ListObjectParentsResponse,
    ListOutgoingTypedLinksRequest, ListOutgoingTypedLinksResponse,
};

use crate::client::{DirectoryClient, DirectoryError};

const API_PREFIX: &str = "/amazonclouddirectory/2017-01-11";

const DATA_PARTITION_HEADER: &str = "x-amz-data-partition";
const CONSISTENCY_HEADER: &str = "x-amz-consistency-level";

/// Directory client over the service's JSON/HTTP protocol.
///
/// Holds a pooled HTTP connection; `Clone` is cheap. Request signing is not
/// performed here — deployments front the service with their own credential
/// layer, optionally injecting a static `Authorization` value via config.
#[derive(Clone)]
pub struct RestDirectoryClient {
    http: reqwest::Client,
    endpoint: String,
    authorization: Option<String>,
}

impl RestDirectoryClient {
    /// Build a client from connection settings.
    pub fn new(config: &DirectoryConfig) -> Result<Self, DirectoryError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DirectoryError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            authorization: config.authorization.clone(),
        })
    }

    /// POST one operation: body JSON, directory ARN header, optional
    /// consistency header (object listings carry it there; typed-link
    /// listings carry it in the body).
    async fn post<B, R>(
        &self,
        path: &str,
        directory_arn: &str,
        consistency: Option<ConsistencyLevel>,
        body: &B,
    ) -> Result<R, DirectoryError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = format!("{}{API_PREFIX}{path}", self.endpoint);
        let mut request = self
            .http
            .post(&url)
            .header(DATA_PARTITION_HEADER, directory_arn)
            .json(body);

        if let Some(level) = consistency {
            request = request.header(CONSISTENCY_HEADER, level.as_str());
        }
        if let Some(auth) = &self.authorization {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DirectoryError::Transport(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| DirectoryError::Transport(e.to_string()))?;

        if !status.is_success() {
            tracing::debug!(%url, status = status.as_u16(), "directory service error");
            return Err(service_error(status.as_u16(), &bytes));
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Error body shape the service returns on non-2xx responses.
#[derive(Deserialize)]
struct ServiceErrorBody {
    #[serde(rename = "__type", default)]
    error_type: Option<String>,
    #[serde(rename = "Message", alias = "message", default)]
    message: Option<String>,
}

fn service_error(status: u16, body: &[u8]) -> DirectoryError {
    let parsed: ServiceErrorBody = serde_json::from_slice(body).unwrap_or(ServiceErrorBody {
        error_type: None,
        message: None,
    });

    // `__type` arrives fully qualified, e.g.
    // `com.amazonaws.clouddirectory#ResourceNotFoundException`.
    let code = parsed
        .error_type
        .as_deref()
        .map(|t| t.rsplit('#').next().unwrap_or(t).to_string())
        .unwrap_or_else(|| "UnknownError".to_string());

    DirectoryError::Service {
        code,
        message: parsed.message.unwrap_or_default(),
        status,
    }
}

#[async_trait]
impl DirectoryClient for RestDirectoryClient {
    async fn list_object_attributes(
        &self,
        request: ListObjectAttributesRequest,
    ) -> Result<ListObjectAttributesResponse, DirectoryError> {
        self.post(
            "/object/attributes",
            &request.directory_arn,
            Some(request.consistency_level),
            &request,
        )
        .await
    }

    async fn list_object_children(
        &self,
        request: ListObjectChildrenRequest,
    ) -> Result<ListObjectChildrenResponse, DirectoryError> {
        self.post(
            "/object/children",
            &request.directory_arn,
            Some(request.consistency_level),
            &request,
        )
        .await
    }

    async fn list_object_parents(
        &self,
        request: ListObjectParentsRequest,
    ) -> Result<ListObjectParentsResponse, DirectoryError> {
        self.post(
            "/object/parent",
            &request.directory_arn,
            Some(request.consistency_level),
            &request,
        )
        .await
    }

    async fn list_incoming_typed_links(
        &self,
        request: ListIncomingTypedLinksRequest,
    ) -> Result<ListIncomingTypedLinksResponse, DirectoryError> {
        self.post("/typedlink/incoming", &request.directory_arn, None, &request)
            .await
    }

    async fn list_outgoing_typed_links(
        &self,
        request: ListOutgoingTypedLinksRequest,
    ) -> Result<ListOutgoingTypedLinksResponse, DirectoryError> {
        self.post("/typedlink/outgoing", &request.directory_arn, None, &request)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_code_extraction() {
        let err = service_error(
            400,
            br#"{"__type":"com.amazonaws.clouddirectory#ResourceNotFoundException","Message":"no such object"}"#,
        );
        match err {
            DirectoryError::Service {
                code,
                message,
                status,
            } => {
                assert_eq!(code, "ResourceNotFoundException");
                assert_eq!(message, "no such object");
                assert_eq!(status, 400);
            }
            other => panic!("expected Service error, got {other:?}"),
        }
    }

    #[test]
    fn test_service_error_unparseable_body() {
        let err = service_error(500, b"<html>gateway</html>");
        assert_eq!(err.code(), Some("UnknownError"));
    }
}
