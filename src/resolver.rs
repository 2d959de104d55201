/// Backend resolver - forwards lookups to the remote resolution service
use crate::{
    api::envelope::Envelope,
    config::ResolverConfig,
    document::DidResolution,
    error::{DriverError, DriverResult},
};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, error, warn};

/// HTTP client for the resolution backend
#[derive(Clone)]
pub struct BackendResolver {
    http_client: reqwest::Client,
    config: ResolverConfig,
}

impl BackendResolver {
    /// Create a new backend resolver
    pub fn new(config: ResolverConfig) -> DriverResult<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout())
            .build()
            .map_err(|e| DriverError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Backend URL for resolving `id`
    pub fn resolve_url(&self, id: &str) -> String {
        format!("{}?id={}", self.config.resolve_url(), urlencoding::encode(id))
    }

    /// Resolve an identifier through the backend
    ///
    /// Stages, each terminal on failure:
    /// 1. GET the resolve endpoint
    /// 2. Check the HTTP status
    /// 3. Read and parse the envelope
    /// 4. Check the envelope status/message
    /// 5. Decode `data` into a record
    pub async fn resolve(&self, id: &str) -> DriverResult<DidResolution> {
        let url = self.resolve_url(id);
        debug!(id, %url, "Resolving DID via backend");

        let response = self.http_client.get(&url).send().await.map_err(|e| {
            error!(id, stage = "request", error = %e, "Failed to resolve DID");
            DriverError::BackendUnavailable(e.to_string())
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            if status == StatusCode::NOT_FOUND {
                warn!(id, stage = "status", "Failed to resolve DID, document does not exist");
                return Err(DriverError::NotFound);
            }
            error!(id, stage = "status", %status, "Failed to resolve DID, backend error");
            return Err(DriverError::BackendStatus(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| {
            error!(id, stage = "read", error = %e, "Failed to read response body");
            DriverError::ReadBody(e.to_string())
        })?;

        let envelope = Envelope::from_body(&body).map_err(|e| {
            error!(id, stage = "parse", error = %e, "Failed to parse response body");
            DriverError::ParseBody(e.to_string())
        })?;

        if !envelope.is_success() {
            error!(
                id,
                stage = "envelope",
                status = envelope.status,
                message = %envelope.message,
                "Backend rejected resolution"
            );
            return Err(DriverError::Rejected {
                status: envelope.status,
                message: envelope.message,
            });
        }

        decode_data(envelope.data).map_err(|e| {
            error!(id, stage = "decode", error = %e, "Failed to parse data field");
            e
        })
    }
}

/// Decode envelope data into a record; absent data yields an empty record
pub fn decode_data(data: Option<Value>) -> DriverResult<DidResolution> {
    match data {
        None => Ok(DidResolution::default()),
        Some(value) => serde_json::from_value(value)
            .map_err(|e| DriverError::DecodeData(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{truncated_backend, unreachable_backend, StubBackend, VALID_ID};
    use axum::http::StatusCode;
    use serde_json::json;

    fn resolver_for(stub: &StubBackend) -> BackendResolver {
        BackendResolver::new(stub.config().resolver).unwrap()
    }

    #[test]
    fn test_resolve_url_encodes_id() {
        let config = crate::config::ServerConfig::from_lookup(|_| None).unwrap();
        let resolver = BackendResolver::new(config.resolver).unwrap();

        assert_eq!(
            resolver.resolve_url(VALID_ID),
            format!("http://139.198.21.202:31005/resolve?id={}", VALID_ID)
        );
        assert_eq!(
            resolver.resolve_url("a b&c"),
            "http://139.198.21.202:31005/resolve?id=a%20b%26c"
        );
    }

    #[test]
    fn test_decode_data() {
        assert_eq!(decode_data(None).unwrap(), DidResolution::default());

        let doc = decode_data(Some(json!({ "id": "did:cndid:0x1" }))).unwrap();
        assert_eq!(doc.id, "did:cndid:0x1");

        let err = decode_data(Some(json!([1, 2]))).unwrap_err();
        assert!(matches!(err, DriverError::DecodeData(_)));
    }

    #[tokio::test]
    async fn test_resolve_success() {
        let stub = StubBackend::start(
            StatusCode::OK,
            json!({
                "status": 200,
                "message": "Success",
                "data": { "id": "did:cndid:0xabc", "extension": { "ttl": 5 } }
            })
            .to_string(),
        )
        .await;

        let doc = resolver_for(&stub).resolve(VALID_ID).await.unwrap();
        assert_eq!(doc.id, "did:cndid:0xabc");
        assert_eq!(doc.extension.ttl, 5);
        assert_eq!(stub.hits(), 1);
        assert_eq!(stub.last_query(), Some(format!("id={}", VALID_ID)));
    }

    #[tokio::test]
    async fn test_resolve_missing_data_yields_empty_record() {
        let stub = StubBackend::start(
            StatusCode::OK,
            json!({ "status": 200, "message": "Success" }).to_string(),
        )
        .await;

        let doc = resolver_for(&stub).resolve(VALID_ID).await.unwrap();
        assert_eq!(doc, DidResolution::default());
    }

    #[tokio::test]
    async fn test_resolve_classifies_failures() {
        let stub = StubBackend::start(StatusCode::NOT_FOUND, "").await;
        let err = resolver_for(&stub).resolve(VALID_ID).await.unwrap_err();
        assert!(matches!(err, DriverError::NotFound));

        let stub = StubBackend::start(StatusCode::SERVICE_UNAVAILABLE, "").await;
        let err = resolver_for(&stub).resolve(VALID_ID).await.unwrap_err();
        assert!(matches!(err, DriverError::BackendStatus(503)));

        let stub = StubBackend::start(StatusCode::OK, "<html>").await;
        let err = resolver_for(&stub).resolve(VALID_ID).await.unwrap_err();
        assert!(matches!(err, DriverError::ParseBody(_)));

        let stub = StubBackend::start(
            StatusCode::OK,
            json!({ "status": 500, "message": "chain unavailable" }).to_string(),
        )
        .await;
        let err = resolver_for(&stub).resolve(VALID_ID).await.unwrap_err();
        assert!(matches!(err, DriverError::Rejected { status: 500, .. }));

        let stub = StubBackend::start(
            StatusCode::OK,
            json!({ "status": 200, "message": "Success", "data": { "version": 1 } }).to_string(),
        )
        .await;
        let err = resolver_for(&stub).resolve(VALID_ID).await.unwrap_err();
        assert!(matches!(err, DriverError::DecodeData(_)));
    }

    #[tokio::test]
    async fn test_resolve_unreachable_backend() {
        let config = unreachable_backend().await;
        let resolver = BackendResolver::new(config.resolver).unwrap();
        let err = resolver.resolve(VALID_ID).await.unwrap_err();
        assert!(matches!(err, DriverError::BackendUnavailable(_)));
    }

    #[tokio::test]
    async fn test_resolve_truncated_body() {
        let config = truncated_backend().await;
        let resolver = BackendResolver::new(config.resolver).unwrap();
        let err = resolver.resolve(VALID_ID).await.unwrap_err();
        assert!(matches!(err, DriverError::ReadBody(_)));
    }

    #[tokio::test]
    async fn test_resolve_null_envelope_fields() {
        let stub = StubBackend::start(StatusCode::OK, r#"{"status":403,"message":null}"#).await;
        let err = resolver_for(&stub).resolve(VALID_ID).await.unwrap_err();
        assert!(matches!(
            err,
            DriverError::Rejected { status: 403, ref message } if message.is_empty()
        ));

        let stub = StubBackend::start(StatusCode::OK, r#"{"status":null,"message":"x"}"#).await;
        let err = resolver_for(&stub).resolve(VALID_ID).await.unwrap_err();
        assert!(matches!(err, DriverError::Rejected { status: 0, .. }));
    }
}
