//! Mock registry tests for the docontology client.
//!
//! These tests use wiremock to simulate the registry API and check request
//! construction, authentication and error mapping without network access.

use std::time::{Duration, Instant};

use docontology::{
    Config, CreateDocTypeRequest, CreateSchemaRequest, Error, FindBestRequest, ListSchemasOptions,
    Patch, Registry, Status, TransportError, UpdateDocTypeRequest, UpdateSchemaRequest,
    Visibility,
};
use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Helper to build a registry client for a mock server.
fn registry(server: &MockServer, api_key: Option<&str>) -> Registry {
    let mut config = Config::new(server.uri());
    config.api_key = api_key.map(str::to_string);
    Registry::new(&config).unwrap()
}

fn doc_type_json(code: &str) -> Value {
    json!({
        "code": code,
        "name": code,
        "isActive": true,
        "createdAt": "2025-01-01T00:00:00Z",
        "updatedAt": "2025-01-01T00:00:00Z"
    })
}

fn schema_json(public_id: &str, status: &str) -> Value {
    json!({
        "publicId": public_id,
        "publicVersionId": format!("{public_id}_v1").replace("sch_", "schv_"),
        "name": "Portuguese invoice",
        "version": 1,
        "content": {"type": "object", "properties": {"total": {"type": "number"}}},
        "schemaType": "standard",
        "status": status,
        "visibility": "public",
        "docTypeCode": "Invoice",
        "countryCode": "PT",
        "createdAt": "2025-01-10T12:00:00Z",
        "updatedAt": "2025-01-10T12:00:00Z",
        "docType": doc_type_json("Invoice"),
        "country": {
            "code": "PT",
            "name": "Portugal",
            "isActive": true,
            "createdAt": "2025-01-01T00:00:00Z",
            "updatedAt": "2025-01-01T00:00:00Z"
        }
    })
}

fn page_json(data: Vec<Value>, total: u64) -> Value {
    let len = data.len();
    json!({
        "data": data,
        "pagination": {"total": total, "limit": 50, "offset": 0, "hasMore": (len as u64) < total}
    })
}

/// Responds with the request body merged with server-assigned fields.
struct EchoSchema;

impl Respond for EchoSchema {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let mut body: Value = serde_json::from_slice(&request.body).unwrap();
        let fields = body.as_object_mut().unwrap();
        fields.insert("publicId".into(), json!("sch_echo"));
        fields.insert("publicVersionId".into(), json!("schv_echo"));
        fields.insert("version".into(), json!(1));
        fields.insert("status".into(), json!("draft"));
        fields.entry("schemaType").or_insert(json!("standard"));
        fields.entry("visibility").or_insert(json!("private"));
        fields.insert("createdAt".into(), json!("2025-02-01T00:00:00Z"));
        fields.insert("updatedAt".into(), json!("2025-02-01T00:00:00Z"));
        ResponseTemplate::new(201).set_body_json(body)
    }
}

// ============================================================================
// Authentication
// ============================================================================

#[tokio::test]
async fn test_api_key_sent_as_bearer() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/doc-types"))
        .and(header("authorization", "Bearer key-123"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([doc_type_json("Invoice")])))
        .expect(1)
        .mount(&server)
        .await;

    let doc_types = registry(&server, Some("key-123"))
        .list_doc_types(false)
        .await
        .unwrap();

    assert_eq!(doc_types.len(), 1);
    assert_eq!(doc_types[0].code, "Invoice");
}

#[tokio::test]
async fn test_no_api_key_no_authorization_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/countries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let countries = registry(&server, None).list_countries(false).await.unwrap();
    assert!(countries.is_empty());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

// ============================================================================
// Error mapping
// ============================================================================

#[tokio::test]
async fn test_error_payload_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/schemas/sch_missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "Schema not found",
            "details": {"id": "sch_missing"}
        })))
        .mount(&server)
        .await;

    let err = registry(&server, None)
        .get_schema("sch_missing")
        .await
        .unwrap_err();

    match err {
        Error::Api(api) => {
            assert_eq!(api.status, 404);
            assert_eq!(api.message, "Schema not found");
            assert_eq!(api.details.unwrap()["id"], "sch_missing");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_error_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_string("Internal Server Error")
                .insert_header("content-type", "text/plain"),
        )
        .mount(&server)
        .await;

    let err = registry(&server, None).health().await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    let message = err.to_string();
    assert!(message.contains("500"));
    assert!(message.contains("Internal Server Error"));
}

#[tokio::test]
async fn test_empty_error_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reference-data"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = registry(&server, None).reference_data().await.unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn test_malformed_success_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/doc-types/Invoice"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"code\": "))
        .mount(&server)
        .await;

    let err = registry(&server, None)
        .get_doc_type("Invoice")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(5))
                .set_body_json(json!({
                    "status": "ok",
                    "database": "connected",
                    "timestamp": "2025-01-01T00:00:00Z"
                })),
        )
        .mount(&server)
        .await;

    let config = Config::new(server.uri()).with_timeout(Duration::from_secs(1));
    let registry = Registry::new(&config).unwrap();

    let started = Instant::now();
    let err = registry.health().await.unwrap_err();
    let elapsed = started.elapsed();

    assert!(err.is_timeout(), "expected timeout, got {err:?}");
    assert!(matches!(
        err,
        Error::Transport(TransportError::Timeout { duration_ms: 1000 })
    ));
    assert!(elapsed < Duration::from_secs(4), "took {elapsed:?}");
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let registry = Registry::new(&Config::new(format!("http://127.0.0.1:{port}"))).unwrap();
    let err = registry.health().await.unwrap_err();

    assert!(err.is_transport(), "expected transport error, got {err:?}");
    assert_eq!(err.status(), None);
}

#[test]
fn test_missing_base_url_is_config_error() {
    let err = Registry::new(&Config::new("")).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

// ============================================================================
// Doc types and countries
// ============================================================================

#[tokio::test]
async fn test_list_doc_types_include_inactive_uses_admin_route() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/doc-types"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            doc_type_json("Invoice"),
            doc_type_json("Receipt")
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let doc_types = registry(&server, None).list_doc_types(true).await.unwrap();
    assert_eq!(doc_types.len(), 2);
}

#[tokio::test]
async fn test_get_doc_type_escapes_code() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/doc-types/Credit%20Note"))
        .respond_with(ResponseTemplate::new(200).set_body_json(doc_type_json("Credit Note")))
        .mount(&server)
        .await;

    let doc_type = registry(&server, None)
        .get_doc_type("Credit Note")
        .await
        .unwrap();
    assert_eq!(doc_type.code, "Credit Note");
}

#[tokio::test]
async fn test_create_doc_type_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/doc-types"))
        .and(body_json(json!({"code": "Receipt", "name": "Receipt"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(doc_type_json("Receipt")))
        .expect(1)
        .mount(&server)
        .await;

    let request = CreateDocTypeRequest {
        code: "Receipt".into(),
        name: "Receipt".into(),
        description: None,
    };
    let doc_type = registry(&server, None)
        .create_doc_type(&request)
        .await
        .unwrap();
    assert_eq!(doc_type.code, "Receipt");
}

#[tokio::test]
async fn test_update_doc_type_sends_only_set_fields() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/admin/doc-types/Invoice"))
        .and(body_json(json!({"description": "", "isActive": false})))
        .respond_with(ResponseTemplate::new(200).set_body_json(doc_type_json("Invoice")))
        .expect(1)
        .mount(&server)
        .await;

    let request = UpdateDocTypeRequest {
        description: Patch::Set(String::new()),
        is_active: Patch::Set(false),
        ..Default::default()
    };
    registry(&server, None)
        .update_doc_type("Invoice", &request)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_with_empty_body_succeeds() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/admin/countries/PT"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    registry(&server, Some("admin-key"))
        .delete_country("PT")
        .await
        .unwrap();
}

// ============================================================================
// Schemas
// ============================================================================

#[tokio::test]
async fn test_list_schemas_without_filters_sends_no_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/schemas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(vec![], 0)))
        .mount(&server)
        .await;

    let page = registry(&server, None)
        .list_schemas(&ListSchemasOptions::default())
        .await
        .unwrap();
    assert!(page.is_empty());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_list_schemas_status_filter_only() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/schemas"))
        .and(query_param("status", "active"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            vec![schema_json("sch_1", "active"), schema_json("sch_2", "active")],
            7,
        )))
        .mount(&server)
        .await;

    let options = ListSchemasOptions {
        status: Some(Status::Active),
        ..Default::default()
    };
    let page = registry(&server, None).list_schemas(&options).await.unwrap();

    assert_eq!(page.data.len(), 2);
    assert_eq!(page.total(), 7);
    assert!(page.has_more());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("status=active"));
}

#[tokio::test]
async fn test_list_schemas_all_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/schemas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(vec![], 0)))
        .mount(&server)
        .await;

    let options = ListSchemasOptions {
        status: Some(Status::Draft),
        doc_type_code: Some("Invoice".into()),
        country_code: Some("PT".into()),
        visibility: Some(Visibility::Private),
        customer_id: Some("cust 1".into()),
        limit: Some(10),
        offset: Some(20),
    };
    registry(&server, None).list_schemas(&options).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].url.query(),
        Some(
            "status=draft&docTypeCode=Invoice&countryCode=PT&visibility=private\
             &customerId=cust+1&limit=10&offset=20"
        )
    );
}

#[tokio::test]
async fn test_create_schema_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/schemas"))
        .respond_with(EchoSchema)
        .mount(&server)
        .await;

    let content = json!({"type": "object", "required": ["total"]})
        .as_object()
        .cloned()
        .unwrap();
    let mut request = CreateSchemaRequest::new("Invoice PT", "Invoice", content.clone());
    request.description = Some("Portuguese invoices".into());
    request.country_code = Some("PT".into());
    request.visibility = Some(Visibility::Private);
    request.customer_id = Some("cust_42".into());

    let created = registry(&server, None)
        .create_schema(&request)
        .await
        .unwrap();
    let schema = created.schema;

    assert_eq!(schema.public_id, "sch_echo");
    assert_eq!(schema.name, request.name);
    assert_eq!(schema.description, request.description);
    assert_eq!(schema.content, content);
    assert_eq!(schema.doc_type_code, request.doc_type_code);
    assert_eq!(schema.country_code, request.country_code);
    assert_eq!(Some(schema.visibility), request.visibility);
    assert_eq!(schema.customer_id, request.customer_id);
    assert_eq!(schema.status, Status::Draft);
}

#[tokio::test]
async fn test_update_schema_cleared_vs_untouched() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/admin/schemas/sch_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(schema_json("sch_1", "draft")))
        .mount(&server)
        .await;

    let registry = registry(&server, None);
    let cleared = UpdateSchemaRequest {
        name: Patch::Clear,
        ..Default::default()
    };
    registry.update_schema("sch_1", &cleared).await.unwrap();
    registry
        .update_schema("sch_1", &UpdateSchemaRequest::default())
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let first: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let second: Value = serde_json::from_slice(&requests[1].body).unwrap();

    assert_eq!(first, json!({"name": null}));
    assert_eq!(second, json!({}));
}

#[tokio::test]
async fn test_lifecycle_transitions_are_bodyless_posts() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/schemas/sch_1/activate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(schema_json("sch_1", "active")))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/admin/schemas/sch_1/deprecate"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(schema_json("sch_1", "deprecated")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let registry = registry(&server, None);
    let active = registry.activate_schema("sch_1").await.unwrap();
    let deprecated = registry.deprecate_schema("sch_1").await.unwrap();

    assert_eq!(active.schema.status, Status::Active);
    assert_eq!(deprecated.schema.status, Status::Deprecated);

    for request in server.received_requests().await.unwrap() {
        assert!(request.body.is_empty());
    }
}

#[tokio::test]
async fn test_invalid_transition_surfaces_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/schemas/sch_1/activate"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "error": "Only draft schemas can be activated"
        })))
        .mount(&server)
        .await;

    let err = registry(&server, None)
        .activate_schema("sch_1")
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(409));
    assert!(err.to_string().contains("Only draft schemas can be activated"));
}

#[tokio::test]
async fn test_schema_versions_and_version_lookup() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/schemas/sch_1/versions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            schema_json("sch_1", "deprecated"),
            schema_json("sch_1", "active")
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/admin/schemas/versions/schv_1_v1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(schema_json("sch_1", "active")))
        .mount(&server)
        .await;

    let registry = registry(&server, None);
    let versions = registry.list_schema_versions("sch_1").await.unwrap();
    assert_eq!(versions.len(), 2);

    let version = registry.get_schema_version("schv_1_v1").await.unwrap();
    assert_eq!(version.schema.public_id, "sch_1");
}

#[tokio::test]
async fn test_delete_schema() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/admin/schemas/sch_draft"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    registry(&server, None)
        .delete_schema("sch_draft")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_ignores_plain_text_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/admin/schemas/sch_1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Deleted"))
        .expect(1)
        .mount(&server)
        .await;

    registry(&server, None).delete_schema("sch_1").await.unwrap();
}

#[tokio::test]
async fn test_delete_rejected_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/admin/schemas/sch_live"))
        .respond_with(
            ResponseTemplate::new(409)
                .set_body_json(json!({"error": "Only draft schemas can be deleted"})),
        )
        .mount(&server)
        .await;

    let err = registry(&server, None)
        .delete_schema("sch_live")
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(409));
    assert!(err.to_string().contains("Only draft schemas can be deleted"));
}

// ============================================================================
// find-best
// ============================================================================

#[tokio::test]
async fn test_find_best_exact_match() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/schemas/find-best"))
        .and(body_json(json!({"docTypeCode": "Invoice", "countryCode": "PT"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "schema": schema_json("sch_pt", "active"),
            "matchType": "exact"
        })))
        .mount(&server)
        .await;

    let result = registry(&server, None)
        .find_best_schema(&FindBestRequest::new("Invoice").country("PT"))
        .await
        .unwrap();

    assert!(result.schema.is_some());
    assert_eq!(result.match_type.as_deref(), Some("exact"));
}

#[tokio::test]
async fn test_find_best_no_match() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/schemas/find-best"))
        .and(body_json(json!({"docTypeCode": "Unknown"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"schema": null, "matchType": null})),
        )
        .mount(&server)
        .await;

    let result = registry(&server, None)
        .find_best_schema(&FindBestRequest::new("Unknown"))
        .await
        .unwrap();

    assert!(result.schema.is_none());
    assert!(result.match_type.is_none());
}
