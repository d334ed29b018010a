//! API surface tests against a mocked Compare and Comply backend.
//!
//! These tests verify that each operation targets the right path and verb,
//! carries the version date and analytics metadata, omits unset optional
//! parameters, and maps response payloads and failures faithfully.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use compare_comply::auth::Authenticator;
use compare_comply::compare_comply::{
    AddFeedbackOptions, BatchAction, BatchFunction, ClassifyElementsOptions, CompareComply,
    CompareDocumentsOptions, ConvertToHtmlOptions, CreateBatchOptions, DeleteFeedbackOptions,
    FeedbackData, FeedbackType, GetBatchOptions, GetFeedbackOptions, ListFeedbackOptions, ModelId,
    UpdateBatchOptions,
};
use compare_comply::error::Error;

const VERSION: &str = "2018-10-15";

/// Build a client pointed at the mock server, with a caller-managed token so
/// no IAM exchange happens.
fn test_service(server: &MockServer) -> CompareComply {
    CompareComply::with_endpoint(VERSION, Authenticator::bearer_token("test-token"), server.uri())
        .expect("client construction")
}

#[tokio::test]
async fn convert_to_html_posts_multipart_and_parses_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/html_conversion"))
        .and(query_param("version", VERSION))
        .and(query_param_is_missing("model_id"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "num_pages": "3",
            "title": "Master Services Agreement",
            "html": "<html><body>...</body></html>"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = ConvertToHtmlOptions::builder(b"%PDF-1.4".as_slice(), "contract.pdf")
        .file_content_type("application/pdf")
        .build()
        .unwrap();
    let html = test_service(&server).convert_to_html(&options).await.unwrap();

    assert_eq!(html.num_pages.as_deref(), Some("3"));
    assert_eq!(html.title.as_deref(), Some("Master Services Agreement"));
    assert!(html.html.unwrap().starts_with("<html>"));
}

#[tokio::test]
async fn classify_elements_sends_model_override() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/element_classification"))
        .and(query_param("version", VERSION))
        .and(query_param("model_id", "tables"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model_id": "tables",
            "elements": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = ClassifyElementsOptions::builder(b"%PDF-1.4".as_slice(), "contract.pdf")
        .model_id(ModelId::Tables)
        .build()
        .unwrap();
    let parsed = test_service(&server)
        .classify_elements(&options)
        .await
        .unwrap();
    assert_eq!(parsed.model_id.as_deref(), Some("tables"));
}

#[tokio::test]
async fn compare_documents_sends_labels_as_query_params() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/comparison"))
        .and(query_param("version", VERSION))
        .and(query_param("file_1_label", "current"))
        .and(query_param("file_2_label", "proposed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "documents": [
                { "title": "current.pdf", "label": "current" },
                { "title": "proposed.pdf", "label": "proposed" }
            ],
            "aligned_elements": [],
            "unaligned_elements": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = CompareDocumentsOptions::builder(
        b"%PDF-1.4 one".as_slice(),
        "current.pdf",
        b"%PDF-1.4 two".as_slice(),
        "proposed.pdf",
    )
    .file_1_label("current")
    .file_2_label("proposed")
    .build()
    .unwrap();

    let comparison = test_service(&server)
        .compare_documents(&options)
        .await
        .unwrap();
    assert_eq!(comparison.documents.len(), 2);
    assert_eq!(comparison.documents[0].label.as_deref(), Some("current"));
}

#[tokio::test]
async fn add_feedback_omits_unset_optional_fields_from_body() {
    let server = MockServer::start().await;
    // user_id is unset and must be absent, not null
    Mock::given(method("POST"))
        .and(path("/v1/feedback"))
        .and(query_param("version", VERSION))
        .and(body_json(json!({
            "comment": "mislabeled clause",
            "feedback_data": { "feedback_type": "element_classification" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "feedback_id": "fb-new",
            "comment": "mislabeled clause",
            "created": "2018-11-01T14:53:26Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = AddFeedbackOptions::builder(FeedbackData::element_classification())
        .comment("mislabeled clause")
        .build()
        .unwrap();
    let stored = test_service(&server).add_feedback(&options).await.unwrap();

    assert_eq!(stored.feedback_id.as_deref(), Some("fb-new"));
    assert_eq!(stored.created.as_deref(), Some("2018-11-01T14:53:26Z"));
}

#[tokio::test]
async fn delete_feedback_targets_identifier_path() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/feedback/fb-123"))
        .and(query_param("version", VERSION))
        .and(query_param("model_id", "contracts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 200, "message": "Successfully deleted the feedback with id - fb-123"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = DeleteFeedbackOptions::builder("fb-123")
        .model_id(ModelId::Contracts)
        .build()
        .unwrap();
    test_service(&server).delete_feedback(&options).await.unwrap();
}

#[tokio::test]
async fn get_feedback_parses_stored_entry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/feedback/fb-1"))
        .and(query_param("version", VERSION))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "feedback_id": "fb-1",
            "created": "2018-11-01T14:53:26Z",
            "comment": "wrong party",
            "feedback_data": {
                "feedback_type": "element_classification",
                "text": "1. IBM will provide",
                "location": { "begin": 214, "end": 237 }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = GetFeedbackOptions::builder("fb-1").build().unwrap();
    let entry = test_service(&server).get_feedback(&options).await.unwrap();

    assert_eq!(entry.feedback_id.as_deref(), Some("fb-1"));
    let data = entry.feedback_data.unwrap();
    assert_eq!(data.text.as_deref(), Some("1. IBM will provide"));
    assert_eq!(data.location.unwrap().begin, 214);
}

#[tokio::test]
async fn list_feedback_without_options_sends_no_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/feedback"))
        .and(query_param("version", VERSION))
        .and(query_param_is_missing("feedback_type"))
        .and(query_param_is_missing("model_id"))
        .and(query_param_is_missing("page_limit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "feedback": [ { "feedback_id": "fb-1" }, { "feedback_id": "fb-2" } ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let listing = test_service(&server).list_feedback(None).await.unwrap();
    assert_eq!(listing.feedback.len(), 2);
}

#[tokio::test]
async fn list_feedback_forwards_set_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/feedback"))
        .and(query_param("version", VERSION))
        .and(query_param("feedback_type", "element_classification"))
        .and(query_param("before", "2018-12-01"))
        .and(query_param("page_limit", "10"))
        .and(query_param("include_total", "true"))
        .and(query_param_is_missing("after"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "feedback": [],
            "pagination": { "total": 0 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = ListFeedbackOptions::builder()
        .feedback_type(FeedbackType::ElementClassification)
        .before("2018-12-01")
        .page_limit(10)
        .include_total(true)
        .build();
    let listing = test_service(&server)
        .list_feedback(Some(&options))
        .await
        .unwrap();
    assert!(listing.feedback.is_empty());
}

#[tokio::test]
async fn create_batch_sends_function_as_query_param() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/batches"))
        .and(query_param("version", VERSION))
        .and(query_param("function", "element_classification"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "batch_id": "batch-1",
            "function": "element_classification",
            "status": "pending",
            "document_counts": { "total": 10, "pending": 10, "successful": 0, "failed": 0 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = CreateBatchOptions::builder(BatchFunction::ElementClassification)
        .input_credentials_file(b"{}".as_slice(), "input-creds.json")
        .input_bucket_location("us-south")
        .input_bucket_name("contracts-in")
        .output_credentials_file(b"{}".as_slice(), "output-creds.json")
        .output_bucket_location("us-south")
        .output_bucket_name("contracts-out")
        .build()
        .unwrap();
    let batch = test_service(&server).create_batch(&options).await.unwrap();

    assert_eq!(batch.batch_id.as_deref(), Some("batch-1"));
    assert_eq!(batch.document_counts.unwrap().pending, Some(10));
}

#[tokio::test]
async fn get_and_list_batches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/batches/batch-1"))
        .and(query_param("version", VERSION))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "batch_id": "batch-1", "status": "completed"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/batches"))
        .and(query_param("version", VERSION))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "batches": [ { "batch_id": "batch-1" }, { "batch_id": "batch-2" } ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = test_service(&server);
    let options = GetBatchOptions::builder("batch-1").build().unwrap();
    let batch = service.get_batch(&options).await.unwrap();
    assert_eq!(batch.status.as_deref(), Some("completed"));

    let listing = service.list_batches(None).await.unwrap();
    assert_eq!(listing.batches.len(), 2);
}

#[tokio::test]
async fn update_batch_puts_action() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/v1/batches/batch-1"))
        .and(query_param("version", VERSION))
        .and(query_param("action", "cancel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "batch_id": "batch-1", "status": "cancelled"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = UpdateBatchOptions::builder("batch-1", BatchAction::Cancel)
        .build()
        .unwrap();
    let batch = test_service(&server).update_batch(&options).await.unwrap();
    assert_eq!(batch.status.as_deref(), Some("cancelled"));
}

#[tokio::test]
async fn every_request_carries_analytics_metadata() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/batches"))
        .and(header(
            "X-IBMCloud-SDK-Analytics",
            "service_name=compare-comply;service_version=v1;operation_id=listBatches",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "batches": [] })))
        .expect(1)
        .mount(&server)
        .await;

    test_service(&server).list_batches(None).await.unwrap();
}

#[tokio::test]
async fn non_success_status_surfaces_as_service_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/batches/missing"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({ "error": "batch 'missing' not found" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let options = GetBatchOptions::builder("missing").build().unwrap();
    let err = test_service(&server).get_batch(&options).await.unwrap_err();

    match err {
        Error::Service { status, message } => {
            assert_eq!(status.as_u16(), 404);
            assert!(message.contains("batch 'missing' not found"));
        }
        other => panic!("expected service error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_endpoint_surfaces_as_transport_error() {
    // Bind then drop a listener to find a port nothing is listening on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind to random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let service = CompareComply::with_endpoint(
        VERSION,
        Authenticator::bearer_token("test-token"),
        format!("http://127.0.0.1:{port}"),
    )
    .unwrap();

    let err = service.list_batches(None).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn iam_api_key_is_exchanged_once_and_cached() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/identity/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "exchanged-token",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/batches"))
        .and(header("authorization", "Bearer exchanged-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "batches": [] })))
        .expect(2)
        .mount(&server)
        .await;

    let authenticator =
        Authenticator::iam_with_url("my-api-key", format!("{}/identity/token", server.uri()));
    let service = CompareComply::with_endpoint(VERSION, authenticator, server.uri()).unwrap();

    // Second call must reuse the cached token rather than re-exchanging
    service.list_batches(None).await.unwrap();
    service.list_batches(None).await.unwrap();
}
