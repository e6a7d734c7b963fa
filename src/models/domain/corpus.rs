use crate::models::domain::pdf_document::{ExtractionFailure, PdfDocument};

/// The documents currently available for grounding, in load order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Corpus {
    documents: Vec<PdfDocument>,
    failures: Vec<ExtractionFailure>,
}

impl Corpus {
    pub fn new(documents: Vec<PdfDocument>, failures: Vec<ExtractionFailure>) -> Self {
        Self {
            documents,
            failures,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn documents(&self) -> &[PdfDocument] {
        &self.documents
    }

    pub fn failures(&self) -> &[ExtractionFailure] {
        &self.failures
    }

    pub fn count(&self) -> usize {
        self.documents.len()
    }

    pub fn names(&self) -> Vec<String> {
        self.documents.iter().map(|doc| doc.name.clone()).collect()
    }

    /// Extracted text of every document joined with newlines. Documents
    /// without a text layer contribute nothing.
    pub fn text(&self) -> String {
        self.documents
            .iter()
            .map(|doc| doc.extracted_text.as_str())
            .filter(|text| !text.trim().is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn has_text(&self) -> bool {
        self.documents
            .iter()
            .any(|doc| !doc.extracted_text.trim().is_empty())
    }
}
