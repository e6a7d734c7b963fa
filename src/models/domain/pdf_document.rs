use bytes::Bytes;

pub const PDF_MIME_TYPE: &str = "application/pdf";

/// A PDF source whose text layer has been extracted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PdfDocument {
    pub name: String,
    pub raw_bytes: Bytes,
    pub extracted_text: String,
}

impl PdfDocument {
    pub fn new(name: impl Into<String>, raw_bytes: Bytes, extracted_text: String) -> Self {
        Self {
            name: name.into(),
            raw_bytes,
            extracted_text,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        PDF_MIME_TYPE
    }
}

/// A knowledge-base file that was skipped while building a corpus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractionFailure {
    pub name: String,
    pub reason: String,
}
