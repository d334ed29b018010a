use serde_json::json;

use crate::auth::Authenticator;
use crate::compare_comply::models::{ClassifyReturn, FeedbackData, Importance, Location, ShortDoc};
use crate::compare_comply::options::{
    BatchAction, BatchFunction, CompareDocumentsOptions, ConvertToHtmlOptions, CreateBatchOptions,
    DeleteFeedbackOptions, FeedbackType, ListFeedbackOptions, ModelId, UpdateBatchOptions,
};
use crate::compare_comply::{CompareComply, DEFAULT_URL};
use crate::error::Error;

#[test]
fn test_model_id_wire_values() {
    assert_eq!(ModelId::Contracts.as_str(), "contracts");
    assert_eq!(ModelId::Tables.as_str(), "tables");
    assert_eq!("contracts".parse::<ModelId>().unwrap(), ModelId::Contracts);
    assert!("sonnets".parse::<ModelId>().is_err());
}

#[test]
fn test_batch_function_wire_values() {
    assert_eq!(BatchFunction::HtmlConversion.as_str(), "html_conversion");
    assert_eq!(
        BatchFunction::ElementClassification.as_str(),
        "element_classification"
    );
    assert_eq!(BatchFunction::Tables.as_str(), "tables");
    assert_eq!(
        "tables".parse::<BatchFunction>().unwrap(),
        BatchFunction::Tables
    );
}

#[test]
fn test_batch_action_and_feedback_type_wire_values() {
    assert_eq!(BatchAction::Rescan.as_str(), "rescan");
    assert_eq!(BatchAction::Cancel.as_str(), "cancel");
    assert_eq!(
        FeedbackType::ElementClassification.as_str(),
        "element_classification"
    );
}

#[test]
fn test_convert_to_html_builder_requires_filename() {
    let err = ConvertToHtmlOptions::builder(b"%PDF-1.4".as_slice(), "")
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[test]
fn test_convert_to_html_builder_round_trip() {
    let options = ConvertToHtmlOptions::builder(b"%PDF-1.4".as_slice(), "contract.pdf")
        .file_content_type("application/pdf")
        .model_id(ModelId::Contracts)
        .build()
        .unwrap();

    let rebuilt = options.to_builder().build().unwrap();
    assert_eq!(options, rebuilt);

    let changed = options
        .to_builder()
        .model_id(ModelId::Tables)
        .build()
        .unwrap();
    assert_eq!(changed.model_id(), Some(ModelId::Tables));
    // The source instance is untouched
    assert_eq!(options.model_id(), Some(ModelId::Contracts));
}

#[test]
fn test_compare_documents_builder_requires_both_filenames() {
    let err = CompareDocumentsOptions::builder(b"a".as_slice(), "a.pdf", b"b".as_slice(), "")
        .build()
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid argument: file_2_filename cannot be empty"
    );
}

#[test]
fn test_delete_feedback_builder_requires_id() {
    let err = DeleteFeedbackOptions::builder("").build().unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid argument: feedback_id cannot be empty"
    );
}

#[test]
fn test_delete_feedback_builder_round_trip() {
    let options = DeleteFeedbackOptions::builder("fb-1")
        .model_id(ModelId::Contracts)
        .build()
        .unwrap();
    assert_eq!(options, options.to_builder().build().unwrap());
}

#[test]
fn test_create_batch_builder_reports_first_missing_field() {
    let err = CreateBatchOptions::builder(BatchFunction::Tables)
        .input_credentials_file(b"{}".as_slice(), "creds.json")
        .input_bucket_location("us-south")
        // input_bucket_name left unset
        .output_credentials_file(b"{}".as_slice(), "creds.json")
        .output_bucket_location("us-south")
        .output_bucket_name("out")
        .build()
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid argument: input_bucket_name cannot be empty"
    );
}

#[test]
fn test_create_batch_builder_round_trip() {
    let options = CreateBatchOptions::builder(BatchFunction::ElementClassification)
        .input_credentials_file(b"{}".as_slice(), "in.json")
        .input_bucket_location("us-south")
        .input_bucket_name("in")
        .output_credentials_file(b"{}".as_slice(), "out.json")
        .output_bucket_location("eu-de")
        .output_bucket_name("out")
        .model_id(ModelId::Contracts)
        .build()
        .unwrap();
    assert_eq!(options, options.to_builder().build().unwrap());
}

#[test]
fn test_update_batch_builder_round_trip() {
    let options = UpdateBatchOptions::builder("batch-1", BatchAction::Rescan)
        .build()
        .unwrap();
    let cancelled = options
        .to_builder()
        .action(BatchAction::Cancel)
        .build()
        .unwrap();
    assert_eq!(cancelled.action(), BatchAction::Cancel);
    assert_eq!(options.action(), BatchAction::Rescan);
}

#[test]
fn test_list_feedback_builder_defaults_unset() {
    let options = ListFeedbackOptions::builder().build();
    assert_eq!(options, ListFeedbackOptions::default());
}

#[test]
fn test_client_rejects_empty_version() {
    let err = CompareComply::new("", Authenticator::bearer_token("tok")).unwrap_err();
    assert_eq!(err.to_string(), "invalid argument: version cannot be empty");
}

#[test]
fn test_client_defaults_to_public_endpoint() {
    let service = CompareComply::new("2018-10-15", Authenticator::bearer_token("tok")).unwrap();
    assert_eq!(service.endpoint(), DEFAULT_URL);
}

#[test]
fn test_importance_tolerates_unknown_values() {
    let party: crate::compare_comply::models::Party =
        serde_json::from_value(json!({ "party": "ACME", "importance": "Secondary" })).unwrap();
    assert_eq!(party.importance, Some(Importance::Other));

    let party: crate::compare_comply::models::Party =
        serde_json::from_value(json!({ "party": "ACME", "importance": "Primary" })).unwrap();
    assert_eq!(party.importance, Some(Importance::Primary));
}

#[test]
fn test_classify_return_tolerates_sparse_payload() {
    let parsed: ClassifyReturn = serde_json::from_value(json!({
        "model_id": "contracts",
        "elements": [
            {
                "location": { "begin": 0, "end": 42 },
                "text": "This agreement shall terminate",
                "types": [ { "label": { "nature": "Obligation", "party": "Supplier" } } ],
                "categories": [ { "label": "Termination" } ]
            }
        ]
    }))
    .unwrap();

    assert_eq!(parsed.model_id.as_deref(), Some("contracts"));
    assert_eq!(parsed.elements.len(), 1);
    let element = &parsed.elements[0];
    assert_eq!(element.location, Some(Location { begin: 0, end: 42 }));
    assert_eq!(
        element.types[0].label.as_ref().unwrap().nature.as_deref(),
        Some("Obligation")
    );
    assert!(parsed.parties.is_empty());
    assert!(parsed.document.is_none());
}

#[test]
fn test_feedback_data_serializes_without_unset_fields() {
    let mut data = FeedbackData::element_classification();
    data.document = Some(ShortDoc {
        title: Some("MSA".to_string()),
        hash: None,
    });
    data.text = Some("1. IBM will provide".to_string());

    let value = serde_json::to_value(&data).unwrap();
    assert_eq!(
        value,
        json!({
            "feedback_type": "element_classification",
            "document": { "title": "MSA" },
            "text": "1. IBM will provide"
        })
    );
}
