//! Option objects for Compare and Comply operations.
//!
//! One immutable options type per API operation, built through a validating
//! builder. Required fields are taken by the builder constructor and checked
//! non-empty at `build()`; optional fields default to absent and are omitted
//! from the outgoing request entirely. A builder can be re-seeded from an
//! existing instance via `to_builder()` for copy-and-modify construction.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::compare_comply::models::FeedbackData;
use crate::error::{Error, Result};

// =============================================================================
// Request enumerations
// =============================================================================

/// The analysis model used by the service.
///
/// For the `/v1/element_classification` and `/v1/comparison` methods the
/// server default is `contracts`; for the `/v1/tables` method it is `tables`.
/// These defaults apply to the standalone methods as well as to their use in
/// batch-processing requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelId {
    /// Contract analysis model.
    Contracts,
    /// Table extraction model.
    Tables,
}

impl ModelId {
    /// Get the wire identifier for this model.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contracts => "contracts",
            Self::Tables => "tables",
        }
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ModelId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "contracts" => Ok(Self::Contracts),
            "tables" => Ok(Self::Tables),
            _ => Err(Error::InvalidArgument(format!("unknown model id '{}'", s))),
        }
    }
}

/// The Compare and Comply method to run over the documents in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchFunction {
    /// Convert each input document to HTML.
    HtmlConversion,
    /// Classify the structural and semantic elements of each input document.
    ElementClassification,
    /// Extract and analyze the tables of each input document.
    Tables,
}

impl BatchFunction {
    /// Get the wire identifier for this function.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HtmlConversion => "html_conversion",
            Self::ElementClassification => "element_classification",
            Self::Tables => "tables",
        }
    }
}

impl std::fmt::Display for BatchFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BatchFunction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "html_conversion" => Ok(Self::HtmlConversion),
            "element_classification" => Ok(Self::ElementClassification),
            "tables" => Ok(Self::Tables),
            _ => Err(Error::InvalidArgument(format!(
                "unknown batch function '{}'",
                s
            ))),
        }
    }
}

/// The action applied to a pending or active batch-processing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchAction {
    /// Rescan the input bucket for new documents.
    Rescan,
    /// Cancel the batch-processing request.
    Cancel,
}

impl BatchAction {
    /// Get the wire identifier for this action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rescan => "rescan",
            Self::Cancel => "cancel",
        }
    }
}

impl std::fmt::Display for BatchAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The type of feedback to filter a feedback listing by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackType {
    /// Feedback on element classification.
    ElementClassification,
}

impl FeedbackType {
    /// Get the wire identifier for this feedback type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ElementClassification => "element_classification",
        }
    }
}

impl std::fmt::Display for FeedbackType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Single-file operations
// =============================================================================

macro_rules! single_file_options {
    ($(#[$doc:meta])* $name:ident, $builder:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            pub(crate) file: Bytes,
            pub(crate) filename: String,
            pub(crate) file_content_type: Option<String>,
            pub(crate) model_id: Option<ModelId>,
        }

        impl $name {
            /// Start building options from the required file content and name.
            pub fn builder(file: impl Into<Bytes>, filename: impl Into<String>) -> $builder {
                $builder {
                    file: file.into(),
                    filename: filename.into(),
                    file_content_type: None,
                    model_id: None,
                }
            }

            /// Derive a builder seeded from this instance.
            pub fn to_builder(&self) -> $builder {
                $builder {
                    file: self.file.clone(),
                    filename: self.filename.clone(),
                    file_content_type: self.file_content_type.clone(),
                    model_id: self.model_id,
                }
            }

            /// The file to process.
            pub fn file(&self) -> &Bytes {
                &self.file
            }

            /// The filename sent with the multipart file part.
            pub fn filename(&self) -> &str {
                &self.filename
            }

            /// The declared content type of the file, if any.
            pub fn file_content_type(&self) -> Option<&str> {
                self.file_content_type.as_deref()
            }

            /// The analysis model override, if any.
            pub fn model_id(&self) -> Option<ModelId> {
                self.model_id
            }
        }

        #[doc = concat!("Builder for [`", stringify!($name), "`].")]
        #[derive(Debug, Clone)]
        pub struct $builder {
            file: Bytes,
            filename: String,
            file_content_type: Option<String>,
            model_id: Option<ModelId>,
        }

        impl $builder {
            /// Replace the file content.
            pub fn file(mut self, file: impl Into<Bytes>) -> Self {
                self.file = file.into();
                self
            }

            /// Replace the filename.
            pub fn filename(mut self, filename: impl Into<String>) -> Self {
                self.filename = filename.into();
                self
            }

            /// Declare the content type of the file.
            pub fn file_content_type(mut self, content_type: impl Into<String>) -> Self {
                self.file_content_type = Some(content_type.into());
                self
            }

            /// Override the analysis model.
            pub fn model_id(mut self, model_id: ModelId) -> Self {
                self.model_id = Some(model_id);
                self
            }

            /// Validate and freeze the options.
            pub fn build(self) -> Result<$name> {
                if self.filename.is_empty() {
                    return Err(Error::required("filename"));
                }
                Ok($name {
                    file: self.file,
                    filename: self.filename,
                    file_content_type: self.file_content_type,
                    model_id: self.model_id,
                })
            }
        }
    };
}

single_file_options!(
    /// Options for converting a file to HTML.
    ConvertToHtmlOptions,
    ConvertToHtmlOptionsBuilder
);

single_file_options!(
    /// Options for classifying the elements of a document.
    ClassifyElementsOptions,
    ClassifyElementsOptionsBuilder
);

single_file_options!(
    /// Options for extracting a document's tables.
    ExtractTablesOptions,
    ExtractTablesOptionsBuilder
);

// =============================================================================
// Document comparison
// =============================================================================

/// Options for comparing two documents.
///
/// Both files must be in the same format.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareDocumentsOptions {
    pub(crate) file_1: Bytes,
    pub(crate) file_1_filename: String,
    pub(crate) file_1_content_type: Option<String>,
    pub(crate) file_2: Bytes,
    pub(crate) file_2_filename: String,
    pub(crate) file_2_content_type: Option<String>,
    pub(crate) file_1_label: Option<String>,
    pub(crate) file_2_label: Option<String>,
    pub(crate) model_id: Option<ModelId>,
}

impl CompareDocumentsOptions {
    /// Start building options from the two required files.
    pub fn builder(
        file_1: impl Into<Bytes>,
        file_1_filename: impl Into<String>,
        file_2: impl Into<Bytes>,
        file_2_filename: impl Into<String>,
    ) -> CompareDocumentsOptionsBuilder {
        CompareDocumentsOptionsBuilder {
            file_1: file_1.into(),
            file_1_filename: file_1_filename.into(),
            file_1_content_type: None,
            file_2: file_2.into(),
            file_2_filename: file_2_filename.into(),
            file_2_content_type: None,
            file_1_label: None,
            file_2_label: None,
            model_id: None,
        }
    }

    /// Derive a builder seeded from this instance.
    pub fn to_builder(&self) -> CompareDocumentsOptionsBuilder {
        CompareDocumentsOptionsBuilder {
            file_1: self.file_1.clone(),
            file_1_filename: self.file_1_filename.clone(),
            file_1_content_type: self.file_1_content_type.clone(),
            file_2: self.file_2.clone(),
            file_2_filename: self.file_2_filename.clone(),
            file_2_content_type: self.file_2_content_type.clone(),
            file_1_label: self.file_1_label.clone(),
            file_2_label: self.file_2_label.clone(),
            model_id: self.model_id,
        }
    }

    /// The first file to compare.
    pub fn file_1(&self) -> &Bytes {
        &self.file_1
    }

    /// The second file to compare.
    pub fn file_2(&self) -> &Bytes {
        &self.file_2
    }

    /// The label applied to the first file in the comparison output.
    pub fn file_1_label(&self) -> Option<&str> {
        self.file_1_label.as_deref()
    }

    /// The label applied to the second file in the comparison output.
    pub fn file_2_label(&self) -> Option<&str> {
        self.file_2_label.as_deref()
    }

    /// The analysis model override, if any.
    pub fn model_id(&self) -> Option<ModelId> {
        self.model_id
    }
}

/// Builder for [`CompareDocumentsOptions`].
#[derive(Debug, Clone)]
pub struct CompareDocumentsOptionsBuilder {
    file_1: Bytes,
    file_1_filename: String,
    file_1_content_type: Option<String>,
    file_2: Bytes,
    file_2_filename: String,
    file_2_content_type: Option<String>,
    file_1_label: Option<String>,
    file_2_label: Option<String>,
    model_id: Option<ModelId>,
}

impl CompareDocumentsOptionsBuilder {
    /// Declare the content type of the first file.
    pub fn file_1_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.file_1_content_type = Some(content_type.into());
        self
    }

    /// Declare the content type of the second file.
    pub fn file_2_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.file_2_content_type = Some(content_type.into());
        self
    }

    /// Label the first file in the comparison output (server default `file_1`).
    pub fn file_1_label(mut self, label: impl Into<String>) -> Self {
        self.file_1_label = Some(label.into());
        self
    }

    /// Label the second file in the comparison output (server default `file_2`).
    pub fn file_2_label(mut self, label: impl Into<String>) -> Self {
        self.file_2_label = Some(label.into());
        self
    }

    /// Override the analysis model.
    pub fn model_id(mut self, model_id: ModelId) -> Self {
        self.model_id = Some(model_id);
        self
    }

    /// Validate and freeze the options.
    pub fn build(self) -> Result<CompareDocumentsOptions> {
        if self.file_1_filename.is_empty() {
            return Err(Error::required("file_1_filename"));
        }
        if self.file_2_filename.is_empty() {
            return Err(Error::required("file_2_filename"));
        }
        Ok(CompareDocumentsOptions {
            file_1: self.file_1,
            file_1_filename: self.file_1_filename,
            file_1_content_type: self.file_1_content_type,
            file_2: self.file_2,
            file_2_filename: self.file_2_filename,
            file_2_content_type: self.file_2_content_type,
            file_1_label: self.file_1_label,
            file_2_label: self.file_2_label,
            model_id: self.model_id,
        })
    }
}

// =============================================================================
// Feedback operations
// =============================================================================

/// Options for adding a feedback entry to a governing document.
#[derive(Debug, Clone, PartialEq)]
pub struct AddFeedbackOptions {
    pub(crate) feedback_data: FeedbackData,
    pub(crate) user_id: Option<String>,
    pub(crate) comment: Option<String>,
}

impl AddFeedbackOptions {
    /// Start building options from the required feedback payload.
    pub fn builder(feedback_data: FeedbackData) -> AddFeedbackOptionsBuilder {
        AddFeedbackOptionsBuilder {
            feedback_data,
            user_id: None,
            comment: None,
        }
    }

    /// Derive a builder seeded from this instance.
    pub fn to_builder(&self) -> AddFeedbackOptionsBuilder {
        AddFeedbackOptionsBuilder {
            feedback_data: self.feedback_data.clone(),
            user_id: self.user_id.clone(),
            comment: self.comment.clone(),
        }
    }

    /// The feedback payload.
    pub fn feedback_data(&self) -> &FeedbackData {
        &self.feedback_data
    }

    /// The identifier of the submitting user, if any.
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// The free-form comment attached to the feedback, if any.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

/// Builder for [`AddFeedbackOptions`].
#[derive(Debug, Clone)]
pub struct AddFeedbackOptionsBuilder {
    feedback_data: FeedbackData,
    user_id: Option<String>,
    comment: Option<String>,
}

impl AddFeedbackOptionsBuilder {
    /// Replace the feedback payload.
    pub fn feedback_data(mut self, feedback_data: FeedbackData) -> Self {
        self.feedback_data = feedback_data;
        self
    }

    /// Identify the submitting user.
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Attach a free-form comment.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Validate and freeze the options.
    pub fn build(self) -> Result<AddFeedbackOptions> {
        Ok(AddFeedbackOptions {
            feedback_data: self.feedback_data,
            user_id: self.user_id,
            comment: self.comment,
        })
    }
}

/// Options for deleting a feedback entry.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteFeedbackOptions {
    pub(crate) feedback_id: String,
    pub(crate) model_id: Option<ModelId>,
}

impl DeleteFeedbackOptions {
    /// Start building options from the required feedback identifier.
    pub fn builder(feedback_id: impl Into<String>) -> DeleteFeedbackOptionsBuilder {
        DeleteFeedbackOptionsBuilder {
            feedback_id: feedback_id.into(),
            model_id: None,
        }
    }

    /// Derive a builder seeded from this instance.
    pub fn to_builder(&self) -> DeleteFeedbackOptionsBuilder {
        DeleteFeedbackOptionsBuilder {
            feedback_id: self.feedback_id.clone(),
            model_id: self.model_id,
        }
    }

    /// The feedback entry to delete.
    pub fn feedback_id(&self) -> &str {
        &self.feedback_id
    }

    /// The analysis model override, if any.
    pub fn model_id(&self) -> Option<ModelId> {
        self.model_id
    }
}

/// Builder for [`DeleteFeedbackOptions`].
#[derive(Debug, Clone)]
pub struct DeleteFeedbackOptionsBuilder {
    feedback_id: String,
    model_id: Option<ModelId>,
}

impl DeleteFeedbackOptionsBuilder {
    /// Replace the feedback identifier.
    pub fn feedback_id(mut self, feedback_id: impl Into<String>) -> Self {
        self.feedback_id = feedback_id.into();
        self
    }

    /// Override the analysis model.
    pub fn model_id(mut self, model_id: ModelId) -> Self {
        self.model_id = Some(model_id);
        self
    }

    /// Validate and freeze the options.
    pub fn build(self) -> Result<DeleteFeedbackOptions> {
        if self.feedback_id.is_empty() {
            return Err(Error::required("feedback_id"));
        }
        Ok(DeleteFeedbackOptions {
            feedback_id: self.feedback_id,
            model_id: self.model_id,
        })
    }
}

/// Options for retrieving a single feedback entry.
#[derive(Debug, Clone, PartialEq)]
pub struct GetFeedbackOptions {
    pub(crate) feedback_id: String,
    pub(crate) model_id: Option<ModelId>,
}

impl GetFeedbackOptions {
    /// Start building options from the required feedback identifier.
    pub fn builder(feedback_id: impl Into<String>) -> GetFeedbackOptionsBuilder {
        GetFeedbackOptionsBuilder {
            feedback_id: feedback_id.into(),
            model_id: None,
        }
    }

    /// Derive a builder seeded from this instance.
    pub fn to_builder(&self) -> GetFeedbackOptionsBuilder {
        GetFeedbackOptionsBuilder {
            feedback_id: self.feedback_id.clone(),
            model_id: self.model_id,
        }
    }

    /// The feedback entry to retrieve.
    pub fn feedback_id(&self) -> &str {
        &self.feedback_id
    }

    /// The analysis model override, if any.
    pub fn model_id(&self) -> Option<ModelId> {
        self.model_id
    }
}

/// Builder for [`GetFeedbackOptions`].
#[derive(Debug, Clone)]
pub struct GetFeedbackOptionsBuilder {
    feedback_id: String,
    model_id: Option<ModelId>,
}

impl GetFeedbackOptionsBuilder {
    /// Replace the feedback identifier.
    pub fn feedback_id(mut self, feedback_id: impl Into<String>) -> Self {
        self.feedback_id = feedback_id.into();
        self
    }

    /// Override the analysis model.
    pub fn model_id(mut self, model_id: ModelId) -> Self {
        self.model_id = Some(model_id);
        self
    }

    /// Validate and freeze the options.
    pub fn build(self) -> Result<GetFeedbackOptions> {
        if self.feedback_id.is_empty() {
            return Err(Error::required("feedback_id"));
        }
        Ok(GetFeedbackOptions {
            feedback_id: self.feedback_id,
            model_id: self.model_id,
        })
    }
}

/// Filters for listing feedback entries.
///
/// Every field is optional; an unset field is omitted from the request. The
/// `before`/`after` filters are `yyyy-MM-dd` date strings passed through to
/// the service verbatim.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListFeedbackOptions {
    pub(crate) feedback_type: Option<FeedbackType>,
    pub(crate) before: Option<String>,
    pub(crate) after: Option<String>,
    pub(crate) document_title: Option<String>,
    pub(crate) model_id: Option<ModelId>,
    pub(crate) model_version: Option<String>,
    pub(crate) category_removed: Option<String>,
    pub(crate) category_added: Option<String>,
    pub(crate) category_not_changed: Option<String>,
    pub(crate) type_removed: Option<String>,
    pub(crate) type_added: Option<String>,
    pub(crate) type_not_changed: Option<String>,
    pub(crate) page_limit: Option<u32>,
    pub(crate) cursor: Option<String>,
    pub(crate) sort: Option<String>,
    pub(crate) include_total: Option<bool>,
}

impl ListFeedbackOptions {
    /// Start building a filter set (all filters default to unset).
    pub fn builder() -> ListFeedbackOptionsBuilder {
        ListFeedbackOptionsBuilder {
            options: ListFeedbackOptions::default(),
        }
    }

    /// Derive a builder seeded from this instance.
    pub fn to_builder(&self) -> ListFeedbackOptionsBuilder {
        ListFeedbackOptionsBuilder {
            options: self.clone(),
        }
    }
}

/// Builder for [`ListFeedbackOptions`].
#[derive(Debug, Clone, Default)]
pub struct ListFeedbackOptionsBuilder {
    options: ListFeedbackOptions,
}

impl ListFeedbackOptionsBuilder {
    /// Filter by feedback type.
    pub fn feedback_type(mut self, feedback_type: FeedbackType) -> Self {
        self.options.feedback_type = Some(feedback_type);
        self
    }

    /// Only return feedback created before this `yyyy-MM-dd` date.
    pub fn before(mut self, before: impl Into<String>) -> Self {
        self.options.before = Some(before.into());
        self
    }

    /// Only return feedback created after this `yyyy-MM-dd` date.
    pub fn after(mut self, after: impl Into<String>) -> Self {
        self.options.after = Some(after.into());
        self
    }

    /// Filter by document title.
    pub fn document_title(mut self, title: impl Into<String>) -> Self {
        self.options.document_title = Some(title.into());
        self
    }

    /// Filter by the analysis model the feedback was given against.
    pub fn model_id(mut self, model_id: ModelId) -> Self {
        self.options.model_id = Some(model_id);
        self
    }

    /// Filter by model version.
    pub fn model_version(mut self, version: impl Into<String>) -> Self {
        self.options.model_version = Some(version.into());
        self
    }

    /// Filter by a category removed from the feedback.
    pub fn category_removed(mut self, category: impl Into<String>) -> Self {
        self.options.category_removed = Some(category.into());
        self
    }

    /// Filter by a category added to the feedback.
    pub fn category_added(mut self, category: impl Into<String>) -> Self {
        self.options.category_added = Some(category.into());
        self
    }

    /// Filter by a category unchanged by the feedback.
    pub fn category_not_changed(mut self, category: impl Into<String>) -> Self {
        self.options.category_not_changed = Some(category.into());
        self
    }

    /// Filter by a type label removed from the feedback.
    pub fn type_removed(mut self, type_label: impl Into<String>) -> Self {
        self.options.type_removed = Some(type_label.into());
        self
    }

    /// Filter by a type label added to the feedback.
    pub fn type_added(mut self, type_label: impl Into<String>) -> Self {
        self.options.type_added = Some(type_label.into());
        self
    }

    /// Filter by a type label unchanged by the feedback.
    pub fn type_not_changed(mut self, type_label: impl Into<String>) -> Self {
        self.options.type_not_changed = Some(type_label.into());
        self
    }

    /// Limit the number of entries per page.
    pub fn page_limit(mut self, limit: u32) -> Self {
        self.options.page_limit = Some(limit);
        self
    }

    /// Resume listing from a pagination cursor.
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.options.cursor = Some(cursor.into());
        self
    }

    /// Sort the listing by the given field.
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.options.sort = Some(sort.into());
        self
    }

    /// Include the total number of matching entries in the response.
    pub fn include_total(mut self, include_total: bool) -> Self {
        self.options.include_total = Some(include_total);
        self
    }

    /// Freeze the filter set. Listing has no required fields, so building
    /// never fails.
    pub fn build(self) -> ListFeedbackOptions {
        self.options
    }
}

// =============================================================================
// Batch operations
// =============================================================================

/// Options for submitting a batch-processing request.
///
/// Batch processing reads input documents from and writes results to IBM
/// Cloud Object Storage buckets; both sets of bucket credentials are uploaded
/// as JSON files alongside the bucket descriptors.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBatchOptions {
    pub(crate) function: BatchFunction,
    pub(crate) input_credentials_file: Bytes,
    pub(crate) input_credentials_filename: String,
    pub(crate) input_bucket_location: String,
    pub(crate) input_bucket_name: String,
    pub(crate) output_credentials_file: Bytes,
    pub(crate) output_credentials_filename: String,
    pub(crate) output_bucket_location: String,
    pub(crate) output_bucket_name: String,
    pub(crate) model_id: Option<ModelId>,
}

impl CreateBatchOptions {
    /// Start building options from the required function.
    pub fn builder(function: BatchFunction) -> CreateBatchOptionsBuilder {
        CreateBatchOptionsBuilder {
            function,
            input_credentials_file: Bytes::new(),
            input_credentials_filename: String::new(),
            input_bucket_location: String::new(),
            input_bucket_name: String::new(),
            output_credentials_file: Bytes::new(),
            output_credentials_filename: String::new(),
            output_bucket_location: String::new(),
            output_bucket_name: String::new(),
            model_id: None,
        }
    }

    /// Derive a builder seeded from this instance.
    pub fn to_builder(&self) -> CreateBatchOptionsBuilder {
        CreateBatchOptionsBuilder {
            function: self.function,
            input_credentials_file: self.input_credentials_file.clone(),
            input_credentials_filename: self.input_credentials_filename.clone(),
            input_bucket_location: self.input_bucket_location.clone(),
            input_bucket_name: self.input_bucket_name.clone(),
            output_credentials_file: self.output_credentials_file.clone(),
            output_credentials_filename: self.output_credentials_filename.clone(),
            output_bucket_location: self.output_bucket_location.clone(),
            output_bucket_name: self.output_bucket_name.clone(),
            model_id: self.model_id,
        }
    }

    /// The method to run over the batch.
    pub fn function(&self) -> BatchFunction {
        self.function
    }

    /// The analysis model override, if any.
    pub fn model_id(&self) -> Option<ModelId> {
        self.model_id
    }
}

/// Builder for [`CreateBatchOptions`].
#[derive(Debug, Clone)]
pub struct CreateBatchOptionsBuilder {
    function: BatchFunction,
    input_credentials_file: Bytes,
    input_credentials_filename: String,
    input_bucket_location: String,
    input_bucket_name: String,
    output_credentials_file: Bytes,
    output_credentials_filename: String,
    output_bucket_location: String,
    output_bucket_name: String,
    model_id: Option<ModelId>,
}

impl CreateBatchOptionsBuilder {
    /// Set the JSON credentials file for the input bucket.
    pub fn input_credentials_file(
        mut self,
        file: impl Into<Bytes>,
        filename: impl Into<String>,
    ) -> Self {
        self.input_credentials_file = file.into();
        self.input_credentials_filename = filename.into();
        self
    }

    /// Set the region of the input bucket.
    pub fn input_bucket_location(mut self, location: impl Into<String>) -> Self {
        self.input_bucket_location = location.into();
        self
    }

    /// Set the name of the input bucket.
    pub fn input_bucket_name(mut self, name: impl Into<String>) -> Self {
        self.input_bucket_name = name.into();
        self
    }

    /// Set the JSON credentials file for the output bucket.
    pub fn output_credentials_file(
        mut self,
        file: impl Into<Bytes>,
        filename: impl Into<String>,
    ) -> Self {
        self.output_credentials_file = file.into();
        self.output_credentials_filename = filename.into();
        self
    }

    /// Set the region of the output bucket.
    pub fn output_bucket_location(mut self, location: impl Into<String>) -> Self {
        self.output_bucket_location = location.into();
        self
    }

    /// Set the name of the output bucket.
    pub fn output_bucket_name(mut self, name: impl Into<String>) -> Self {
        self.output_bucket_name = name.into();
        self
    }

    /// Override the analysis model.
    pub fn model_id(mut self, model_id: ModelId) -> Self {
        self.model_id = Some(model_id);
        self
    }

    /// Validate and freeze the options. All credential and bucket fields are
    /// required.
    pub fn build(self) -> Result<CreateBatchOptions> {
        if self.input_credentials_filename.is_empty() {
            return Err(Error::required("input_credentials_filename"));
        }
        if self.input_bucket_location.is_empty() {
            return Err(Error::required("input_bucket_location"));
        }
        if self.input_bucket_name.is_empty() {
            return Err(Error::required("input_bucket_name"));
        }
        if self.output_credentials_filename.is_empty() {
            return Err(Error::required("output_credentials_filename"));
        }
        if self.output_bucket_location.is_empty() {
            return Err(Error::required("output_bucket_location"));
        }
        if self.output_bucket_name.is_empty() {
            return Err(Error::required("output_bucket_name"));
        }
        Ok(CreateBatchOptions {
            function: self.function,
            input_credentials_file: self.input_credentials_file,
            input_credentials_filename: self.input_credentials_filename,
            input_bucket_location: self.input_bucket_location,
            input_bucket_name: self.input_bucket_name,
            output_credentials_file: self.output_credentials_file,
            output_credentials_filename: self.output_credentials_filename,
            output_bucket_location: self.output_bucket_location,
            output_bucket_name: self.output_bucket_name,
            model_id: self.model_id,
        })
    }
}

/// Options for retrieving a batch-processing request.
#[derive(Debug, Clone, PartialEq)]
pub struct GetBatchOptions {
    pub(crate) batch_id: String,
}

impl GetBatchOptions {
    /// Start building options from the required batch identifier.
    pub fn builder(batch_id: impl Into<String>) -> GetBatchOptionsBuilder {
        GetBatchOptionsBuilder {
            batch_id: batch_id.into(),
        }
    }

    /// Derive a builder seeded from this instance.
    pub fn to_builder(&self) -> GetBatchOptionsBuilder {
        GetBatchOptionsBuilder {
            batch_id: self.batch_id.clone(),
        }
    }

    /// The batch-processing request to retrieve.
    pub fn batch_id(&self) -> &str {
        &self.batch_id
    }
}

/// Builder for [`GetBatchOptions`].
#[derive(Debug, Clone)]
pub struct GetBatchOptionsBuilder {
    batch_id: String,
}

impl GetBatchOptionsBuilder {
    /// Replace the batch identifier.
    pub fn batch_id(mut self, batch_id: impl Into<String>) -> Self {
        self.batch_id = batch_id.into();
        self
    }

    /// Validate and freeze the options.
    pub fn build(self) -> Result<GetBatchOptions> {
        if self.batch_id.is_empty() {
            return Err(Error::required("batch_id"));
        }
        Ok(GetBatchOptions {
            batch_id: self.batch_id,
        })
    }
}

/// Options for listing batch-processing requests.
///
/// The service currently recognizes no filters for batch listing; this type
/// exists as a forward-compatibility stub and produces no query parameters.
/// Passing `None` to the list call is equivalent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListBatchesOptions {}

impl ListBatchesOptions {
    /// Create an empty filter set.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Options for updating a pending or active batch-processing request.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateBatchOptions {
    pub(crate) batch_id: String,
    pub(crate) action: BatchAction,
    pub(crate) model_id: Option<ModelId>,
}

impl UpdateBatchOptions {
    /// Start building options from the required batch identifier and action.
    pub fn builder(batch_id: impl Into<String>, action: BatchAction) -> UpdateBatchOptionsBuilder {
        UpdateBatchOptionsBuilder {
            batch_id: batch_id.into(),
            action,
            model_id: None,
        }
    }

    /// Derive a builder seeded from this instance.
    pub fn to_builder(&self) -> UpdateBatchOptionsBuilder {
        UpdateBatchOptionsBuilder {
            batch_id: self.batch_id.clone(),
            action: self.action,
            model_id: self.model_id,
        }
    }

    /// The batch-processing request to update.
    pub fn batch_id(&self) -> &str {
        &self.batch_id
    }

    /// The action to apply.
    pub fn action(&self) -> BatchAction {
        self.action
    }

    /// The analysis model override, if any.
    pub fn model_id(&self) -> Option<ModelId> {
        self.model_id
    }
}

/// Builder for [`UpdateBatchOptions`].
#[derive(Debug, Clone)]
pub struct UpdateBatchOptionsBuilder {
    batch_id: String,
    action: BatchAction,
    model_id: Option<ModelId>,
}

impl UpdateBatchOptionsBuilder {
    /// Replace the batch identifier.
    pub fn batch_id(mut self, batch_id: impl Into<String>) -> Self {
        self.batch_id = batch_id.into();
        self
    }

    /// Replace the action.
    pub fn action(mut self, action: BatchAction) -> Self {
        self.action = action;
        self
    }

    /// Override the analysis model.
    pub fn model_id(mut self, model_id: ModelId) -> Self {
        self.model_id = Some(model_id);
        self
    }

    /// Validate and freeze the options.
    pub fn build(self) -> Result<UpdateBatchOptions> {
        if self.batch_id.is_empty() {
            return Err(Error::required("batch_id"));
        }
        Ok(UpdateBatchOptions {
            batch_id: self.batch_id,
            action: self.action,
            model_id: self.model_id,
        })
    }
}
