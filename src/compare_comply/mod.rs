//! IBM Watson Compare and Comply v1.
//!
//! Compare and Comply analyzes governing documents: it converts documents to
//! HTML, classifies their structural and semantic elements, extracts their
//! tables, compares pairs of documents, accepts human feedback on element
//! classification, and runs those methods over whole Cloud Object Storage
//! buckets as batches.
//!
//! API reference: <https://cloud.ibm.com/apidocs/compare-comply>
//!
//! ```no_run
//! use compare_comply::auth::Authenticator;
//! use compare_comply::compare_comply::{CompareComply, ConvertToHtmlOptions};
//!
//! # async fn run() -> compare_comply::error::Result<()> {
//! let service = CompareComply::new("2018-10-15", Authenticator::iam("my-api-key"))?;
//!
//! let contract = std::fs::read("contract.pdf").expect("readable file");
//! let options = ConvertToHtmlOptions::builder(contract, "contract.pdf")
//!     .file_content_type("application/pdf")
//!     .build()?;
//! let html = service.convert_to_html(&options).await?;
//! println!("{}", html.html.unwrap_or_default());
//! # Ok(())
//! # }
//! ```

mod client;
pub mod models;
pub mod options;

#[cfg(test)]
mod tests;

pub use client::CompareComply;
pub use models::{
    AlignedElement, Attribute, Batches, BatchStatus, BodyCell, Category, ClassifyReturn,
    CompareReturn, Contact, ContractAmts, DocCounts, DocInfo, DocStructure, Document,
    EffectiveDates, Element, ElementPair, FeedbackData, FeedbackLabels, FeedbackList,
    FeedbackReturn, GetFeedback, HtmlReturn, Importance, Label, LeadingSentence, Location,
    Pagination, Party, SectionTitle, ShortDoc, Table, TableCell, TableReturn, TerminationDates,
    TypeLabel, UnalignedElement,
};
pub use options::{
    AddFeedbackOptions, BatchAction, BatchFunction, ClassifyElementsOptions,
    CompareDocumentsOptions, ConvertToHtmlOptions, CreateBatchOptions, DeleteFeedbackOptions,
    ExtractTablesOptions, FeedbackType, GetBatchOptions, GetFeedbackOptions, ListBatchesOptions,
    ListFeedbackOptions, ModelId, UpdateBatchOptions,
};

/// Service name reported in request analytics.
pub const SERVICE_NAME: &str = "compare-comply";

/// Service API generation reported in request analytics.
pub const SERVICE_VERSION: &str = "v1";

/// Default public endpoint of the service.
pub const DEFAULT_URL: &str = "https://gateway.watsonplatform.net/compare-comply/api";
