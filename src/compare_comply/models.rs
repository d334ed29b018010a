//! Response models for Compare and Comply operations.
//!
//! Deserialization is tolerant: every field the service may omit is an
//! `Option` or an empty-defaulting `Vec`, and string-valued classifications
//! that the service could extend fall back to a catch-all variant rather than
//! failing the whole response.

use serde::{Deserialize, Serialize};

/// The span of text an element or attribute covers, as zero-based character
/// offsets into the document's HTML rendition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Offset of the first character of the span.
    pub begin: u64,
    /// Offset just past the last character of the span.
    pub end: u64,
}

/// How a party relates to the governing document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Importance {
    /// A primary party to the document.
    Primary,
    /// The service could not determine the party's importance.
    Unknown,
    /// An importance level this client does not recognize.
    #[serde(other)]
    Other,
}

/// The semantic nature and assigned party of an element type label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Label {
    /// The nature of the element, such as `Obligation` or `Exclusion`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nature: Option<String>,
    /// The party the nature applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party: Option<String>,
}

/// A type label identified in an element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeLabel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    /// Hashed values linking the label back to its supporting evidence.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub provenance_ids: Vec<String>,
}

/// A functional category identified in an element, such as `Amendments` or
/// `Termination`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub provenance_ids: Vec<String>,
}

/// A document attribute such as a currency amount, date, or location name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    /// The attribute type, such as `Currency`, `DateTime`, or `Location`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub attribute_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

/// A structural or semantic element identified in the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Element {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<TypeLabel>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<Category>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
}

/// A mailing address attributed to a party.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

/// A named contact attributed to a party.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// A party identified in the governing document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Party {
    /// The party's name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub importance: Option<Importance>,
    /// The party's role, such as `Buyer` or `Supplier`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<Address>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contacts: Vec<Contact>,
}

/// An effective date identified in the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectiveDates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// The confidence with which the date was identified: `High`, `Medium`,
    /// or `Low`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

/// A monetary amount identified in the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractAmts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

/// A termination date identified in the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TerminationDates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

/// A section title within the document structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionTitle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

/// A sentence that begins a list within the document structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadingSentence {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub element_locations: Vec<Location>,
}

/// The structural outline of the parsed document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocStructure {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub section_titles: Vec<SectionTitle>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub leading_sentences: Vec<LeadingSentence>,
}

/// Basic information about an analyzed document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// The MD5 hash of the input document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

/// An input document as echoed back by the comparison operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    /// The label given to the document in the comparison request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Brief information identifying the document a feedback entry applies to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShortDoc {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

// =============================================================================
// Tables
// =============================================================================

/// A cell spanning one or more rows and columns of a table. Used for the
/// row-header, column-header, and table-header cell collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    /// The unique identifier of the cell within its table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// The cell text normalized for comparison with other cells.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_normalized: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_index_begin: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_index_end: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_index_begin: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_index_end: Option<u64>,
}

/// A body cell of a table, with references back to the header cells that
/// describe it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyCell {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_index_begin: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_index_end: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_index_begin: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_index_end: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub row_header_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub row_header_texts: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub row_header_texts_normalized: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub column_header_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub column_header_texts: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub column_header_texts_normalized: Vec<String>,
}

/// A table identified in the document, with its cells classified by role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// The textual contents of the table, without markup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// The nearest preceding section title, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_title: Option<SectionTitle>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub table_headers: Vec<TableCell>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub row_headers: Vec<TableCell>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub column_headers: Vec<TableCell>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub body_cells: Vec<BodyCell>,
}

// =============================================================================
// Operation responses
// =============================================================================

/// The HTML rendition of an input document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HtmlReturn {
    /// The number of pages in the input document, as reported by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_pages: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

/// The element classification of a governing document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassifyReturn {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<Document>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub elements: Vec<Element>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub effective_dates: Vec<EffectiveDates>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub termination_dates: Vec<TerminationDates>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contract_amounts: Vec<ContractAmts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_structure: Option<DocStructure>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parties: Vec<Party>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tables: Vec<Table>,
}

/// The tables extracted from a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableReturn {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<DocInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tables: Vec<Table>,
}

/// One element of an aligned pair, labeled with its source document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementPair {
    /// The label of the document the element came from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<TypeLabel>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<Category>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
}

/// A pair of semantically corresponding elements, one from each compared
/// document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlignedElement {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub element_pair: Vec<ElementPair>,
    /// Whether the text of the two elements is identical.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identical_text: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub provenance_ids: Vec<String>,
    /// Whether the elements carry contractual significance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub significant_elements: Option<bool>,
}

/// An element of one document with no counterpart in the other.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnalignedElement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<TypeLabel>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<Category>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
}

/// The comparison of two governing documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompareReturn {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub documents: Vec<Document>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aligned_elements: Vec<AlignedElement>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unaligned_elements: Vec<UnalignedElement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
}

// =============================================================================
// Feedback
// =============================================================================

/// The type and category labels assigned to a span of text, either by the
/// service (original) or by the reviewing human (updated).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackLabels {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<TypeLabel>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<Category>,
}

/// Pagination details of a feedback listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

/// The substance of a feedback entry: the text span it concerns and the
/// original versus corrected labels. Used both when submitting feedback and
/// when reading it back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackData {
    /// The type of feedback; the service currently accepts only
    /// `element_classification`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<ShortDoc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// The labels as assigned by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_labels: Option<FeedbackLabels>,
    /// The labels as corrected by the reviewer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_labels: Option<FeedbackLabels>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl FeedbackData {
    /// Feedback payload for an element-classification correction.
    pub fn element_classification() -> Self {
        Self {
            feedback_type: Some("element_classification".to_string()),
            ..Self::default()
        }
    }
}

/// The service's record of a newly added feedback entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackReturn {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Creation timestamp, as reported by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback_data: Option<FeedbackData>,
}

/// A stored feedback entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetFeedback {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback_data: Option<FeedbackData>,
}

/// The feedback entries that matched a listing request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackList {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub feedback: Vec<GetFeedback>,
}

// =============================================================================
// Batches
// =============================================================================

/// Counts of the documents in a batch by processing outcome.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocCounts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub successful: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed: Option<u64>,
}

/// The status of a batch-processing request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchStatus {
    /// The method the batch runs, such as `element_classification`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_bucket_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_bucket_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_counts: Option<DocCounts>,
    /// The batch's processing status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

/// The batch-processing requests submitted by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Batches {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub batches: Vec<BatchStatus>,
}
