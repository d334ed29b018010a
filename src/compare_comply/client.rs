//! The Compare and Comply service client.

use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::auth::Authenticator;
use crate::compare_comply::models::{
    Batches, BatchStatus, ClassifyReturn, CompareReturn, FeedbackData, FeedbackList,
    FeedbackReturn, GetFeedback, HtmlReturn, TableReturn,
};
use crate::compare_comply::options::{
    AddFeedbackOptions, ClassifyElementsOptions, CompareDocumentsOptions, ConvertToHtmlOptions,
    CreateBatchOptions, DeleteFeedbackOptions, ExtractTablesOptions, GetBatchOptions,
    GetFeedbackOptions, ListBatchesOptions, ListFeedbackOptions, UpdateBatchOptions,
};
use crate::compare_comply::{DEFAULT_URL, SERVICE_NAME, SERVICE_VERSION};
use crate::error::{Error, Result};
use crate::request;

/// Async client for the IBM Watson Compare and Comply v1 service.
///
/// The client is cheap to clone; clones share the connection pool and, when
/// IAM authentication is used, the cached bearer token. All methods borrow
/// their options immutably, so a single instance can serve any number of
/// concurrent requests.
#[derive(Debug, Clone)]
pub struct CompareComply {
    client: Client,
    endpoint: String,
    version: String,
    authenticator: Authenticator,
}

impl CompareComply {
    /// Create a client for the default service endpoint.
    ///
    /// `version` is the API version date (`yyyy-MM-dd`) the service should
    /// honor for this client's requests.
    pub fn new(version: impl Into<String>, authenticator: Authenticator) -> Result<Self> {
        Self::with_endpoint(version, authenticator, DEFAULT_URL)
    }

    /// Create a client against a non-default endpoint, such as a dedicated
    /// instance or a test server.
    pub fn with_endpoint(
        version: impl Into<String>,
        authenticator: Authenticator,
        endpoint: impl Into<String>,
    ) -> Result<Self> {
        let version = version.into();
        if version.is_empty() {
            return Err(Error::required("version"));
        }
        let endpoint = endpoint.into();
        if endpoint.is_empty() {
            return Err(Error::required("endpoint"));
        }
        Ok(Self {
            client: Client::new(),
            endpoint,
            version,
            authenticator,
        })
    }

    /// Replace the underlying HTTP client, keeping endpoint and credentials.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// The endpoint this client sends requests to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    // =========================================================================
    // Document analysis
    // =========================================================================

    /// Convert a document to HTML.
    pub async fn convert_to_html(&self, options: &ConvertToHtmlOptions) -> Result<HtmlReturn> {
        let url = request::build_url(&self.endpoint, "v1/html_conversion", &[])?;
        let mut req = self.versioned(self.client.post(url));
        if let Some(model_id) = options.model_id {
            req = req.query(&[("model_id", model_id.as_str())]);
        }
        let form = Form::new().part(
            "file",
            file_part(&options.file, &options.filename, options.file_content_type.as_deref())?,
        );
        self.send_json(req.multipart(form), "convertToHtml").await
    }

    /// Classify the structural and semantic elements of a governing document.
    pub async fn classify_elements(
        &self,
        options: &ClassifyElementsOptions,
    ) -> Result<ClassifyReturn> {
        let url = request::build_url(&self.endpoint, "v1/element_classification", &[])?;
        let mut req = self.versioned(self.client.post(url));
        if let Some(model_id) = options.model_id {
            req = req.query(&[("model_id", model_id.as_str())]);
        }
        let form = Form::new().part(
            "file",
            file_part(&options.file, &options.filename, options.file_content_type.as_deref())?,
        );
        self.send_json(req.multipart(form), "classifyElements").await
    }

    /// Extract and analyze the tables of a document.
    pub async fn extract_tables(&self, options: &ExtractTablesOptions) -> Result<TableReturn> {
        let url = request::build_url(&self.endpoint, "v1/tables", &[])?;
        let mut req = self.versioned(self.client.post(url));
        if let Some(model_id) = options.model_id {
            req = req.query(&[("model_id", model_id.as_str())]);
        }
        let form = Form::new().part(
            "file",
            file_part(&options.file, &options.filename, options.file_content_type.as_deref())?,
        );
        self.send_json(req.multipart(form), "extractTables").await
    }

    /// Compare two governing documents and report their aligned and unaligned
    /// elements.
    pub async fn compare_documents(
        &self,
        options: &CompareDocumentsOptions,
    ) -> Result<CompareReturn> {
        let url = request::build_url(&self.endpoint, "v1/comparison", &[])?;
        let mut req = self.versioned(self.client.post(url));
        if let Some(ref label) = options.file_1_label {
            req = req.query(&[("file_1_label", label.as_str())]);
        }
        if let Some(ref label) = options.file_2_label {
            req = req.query(&[("file_2_label", label.as_str())]);
        }
        if let Some(model_id) = options.model_id {
            req = req.query(&[("model_id", model_id.as_str())]);
        }
        let form = Form::new()
            .part(
                "file_1",
                file_part(
                    &options.file_1,
                    &options.file_1_filename,
                    options.file_1_content_type.as_deref(),
                )?,
            )
            .part(
                "file_2",
                file_part(
                    &options.file_2,
                    &options.file_2_filename,
                    options.file_2_content_type.as_deref(),
                )?,
            );
        self.send_json(req.multipart(form), "compareDocuments").await
    }

    // =========================================================================
    // Feedback
    // =========================================================================

    /// Add feedback correcting the labels the service assigned to an element.
    pub async fn add_feedback(&self, options: &AddFeedbackOptions) -> Result<FeedbackReturn> {
        let url = request::build_url(&self.endpoint, "v1/feedback", &[])?;
        let body = AddFeedbackBody {
            user_id: options.user_id.as_deref(),
            comment: options.comment.as_deref(),
            feedback_data: &options.feedback_data,
        };
        let req = self.versioned(self.client.post(url)).json(&body);
        self.send_json(req, "addFeedback").await
    }

    /// Delete a feedback entry.
    pub async fn delete_feedback(&self, options: &DeleteFeedbackOptions) -> Result<()> {
        let url = request::build_url(&self.endpoint, "v1/feedback", &[&options.feedback_id])?;
        let mut req = self.versioned(self.client.delete(url));
        if let Some(model_id) = options.model_id {
            req = req.query(&[("model_id", model_id.as_str())]);
        }
        self.send_empty(req, "deleteFeedback").await
    }

    /// Retrieve a single feedback entry.
    pub async fn get_feedback(&self, options: &GetFeedbackOptions) -> Result<GetFeedback> {
        let url = request::build_url(&self.endpoint, "v1/feedback", &[&options.feedback_id])?;
        let mut req = self.versioned(self.client.get(url));
        if let Some(model_id) = options.model_id {
            req = req.query(&[("model_id", model_id.as_str())]);
        }
        self.send_json(req, "getFeedback").await
    }

    /// List feedback entries, optionally filtered. Passing `None` lists all
    /// feedback submitted by the caller.
    pub async fn list_feedback(
        &self,
        options: Option<&ListFeedbackOptions>,
    ) -> Result<FeedbackList> {
        let url = request::build_url(&self.endpoint, "v1/feedback", &[])?;
        let mut req = self.versioned(self.client.get(url));
        if let Some(options) = options {
            req = apply_feedback_filters(req, options);
        }
        self.send_json(req, "listFeedback").await
    }

    // =========================================================================
    // Batches
    // =========================================================================

    /// Submit a batch-processing request over documents held in Cloud Object
    /// Storage.
    pub async fn create_batch(&self, options: &CreateBatchOptions) -> Result<BatchStatus> {
        let url = request::build_url(&self.endpoint, "v1/batches", &[])?;
        let mut req = self
            .versioned(self.client.post(url))
            .query(&[("function", options.function.as_str())]);
        if let Some(model_id) = options.model_id {
            req = req.query(&[("model_id", model_id.as_str())]);
        }
        let form = Form::new()
            .part(
                "input_credentials_file",
                file_part(
                    &options.input_credentials_file,
                    &options.input_credentials_filename,
                    Some("application/json"),
                )?,
            )
            .text(
                "input_bucket_location",
                options.input_bucket_location.clone(),
            )
            .text("input_bucket_name", options.input_bucket_name.clone())
            .part(
                "output_credentials_file",
                file_part(
                    &options.output_credentials_file,
                    &options.output_credentials_filename,
                    Some("application/json"),
                )?,
            )
            .text(
                "output_bucket_location",
                options.output_bucket_location.clone(),
            )
            .text("output_bucket_name", options.output_bucket_name.clone());
        self.send_json(req.multipart(form), "createBatch").await
    }

    /// Retrieve the status of a batch-processing request.
    pub async fn get_batch(&self, options: &GetBatchOptions) -> Result<BatchStatus> {
        let url = request::build_url(&self.endpoint, "v1/batches", &[&options.batch_id])?;
        let req = self.versioned(self.client.get(url));
        self.send_json(req, "getBatch").await
    }

    /// List the caller's batch-processing requests. The options carry no
    /// filters today; passing `None` is equivalent to passing defaults.
    pub async fn list_batches(&self, options: Option<&ListBatchesOptions>) -> Result<Batches> {
        let _ = options;
        let url = request::build_url(&self.endpoint, "v1/batches", &[])?;
        let req = self.versioned(self.client.get(url));
        self.send_json(req, "listBatches").await
    }

    /// Rescan or cancel a pending or active batch-processing request.
    pub async fn update_batch(&self, options: &UpdateBatchOptions) -> Result<BatchStatus> {
        let url = request::build_url(&self.endpoint, "v1/batches", &[&options.batch_id])?;
        let mut req = self
            .versioned(self.client.put(url))
            .query(&[("action", options.action.as_str())]);
        if let Some(model_id) = options.model_id {
            req = req.query(&[("model_id", model_id.as_str())]);
        }
        self.send_json(req, "updateBatch").await
    }

    // =========================================================================
    // Plumbing
    // =========================================================================

    fn versioned(&self, req: RequestBuilder) -> RequestBuilder {
        req.query(&[("version", self.version.as_str())])
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        operation_id: &str,
    ) -> Result<T> {
        let response = self.dispatch(req, operation_id).await?;
        Ok(response.json::<T>().await?)
    }

    async fn send_empty(&self, req: RequestBuilder, operation_id: &str) -> Result<()> {
        self.dispatch(req, operation_id).await?;
        Ok(())
    }

    async fn dispatch(&self, req: RequestBuilder, operation_id: &str) -> Result<Response> {
        let token = self.authenticator.access_token(&self.client).await?;

        debug!(operation_id, "dispatching request");
        let response = req
            .header(
                request::ANALYTICS_HEADER,
                request::analytics_value(SERVICE_NAME, SERVICE_VERSION, operation_id),
            )
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(%status, operation_id, "service returned an error");
            return Err(Error::Service { status, message });
        }

        Ok(response)
    }
}

/// JSON body of an add-feedback request. Unset optional fields are omitted
/// rather than sent as null.
#[derive(Serialize)]
struct AddFeedbackBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<&'a str>,
    feedback_data: &'a FeedbackData,
}

/// Build a multipart file part from in-memory content. `Bytes` clones are
/// reference-counted, so no file content is copied.
fn file_part(content: &bytes::Bytes, filename: &str, content_type: Option<&str>) -> Result<Part> {
    let mut part = Part::stream(Body::from(content.clone())).file_name(filename.to_string());
    if let Some(content_type) = content_type {
        part = part
            .mime_str(content_type)
            .map_err(|e| Error::InvalidArgument(format!("invalid content type: {}", e)))?;
    }
    Ok(part)
}

fn apply_feedback_filters(
    mut req: RequestBuilder,
    options: &ListFeedbackOptions,
) -> RequestBuilder {
    if let Some(feedback_type) = options.feedback_type {
        req = req.query(&[("feedback_type", feedback_type.as_str())]);
    }
    if let Some(ref before) = options.before {
        req = req.query(&[("before", before.as_str())]);
    }
    if let Some(ref after) = options.after {
        req = req.query(&[("after", after.as_str())]);
    }
    if let Some(ref title) = options.document_title {
        req = req.query(&[("document_title", title.as_str())]);
    }
    if let Some(model_id) = options.model_id {
        req = req.query(&[("model_id", model_id.as_str())]);
    }
    if let Some(ref version) = options.model_version {
        req = req.query(&[("model_version", version.as_str())]);
    }
    if let Some(ref category) = options.category_removed {
        req = req.query(&[("category_removed", category.as_str())]);
    }
    if let Some(ref category) = options.category_added {
        req = req.query(&[("category_added", category.as_str())]);
    }
    if let Some(ref category) = options.category_not_changed {
        req = req.query(&[("category_not_changed", category.as_str())]);
    }
    if let Some(ref type_label) = options.type_removed {
        req = req.query(&[("type_removed", type_label.as_str())]);
    }
    if let Some(ref type_label) = options.type_added {
        req = req.query(&[("type_added", type_label.as_str())]);
    }
    if let Some(ref type_label) = options.type_not_changed {
        req = req.query(&[("type_not_changed", type_label.as_str())]);
    }
    if let Some(page_limit) = options.page_limit {
        req = req.query(&[("page_limit", page_limit.to_string().as_str())]);
    }
    if let Some(ref cursor) = options.cursor {
        req = req.query(&[("cursor", cursor.as_str())]);
    }
    if let Some(ref sort) = options.sort {
        req = req.query(&[("sort", sort.as_str())]);
    }
    if let Some(include_total) = options.include_total {
        req = req.query(&[("include_total", include_total.to_string().as_str())]);
    }
    req
}
