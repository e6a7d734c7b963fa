use bytes::Bytes;

use crate::models::domain::pdf_document::PdfDocument;

/// Binary document content sent inline with a prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attachment {
    pub name: String,
    pub mime_type: String,
    pub data: Bytes,
}

impl From<&PdfDocument> for Attachment {
    fn from(doc: &PdfDocument) -> Self {
        Attachment {
            name: doc.name.clone(),
            mime_type: doc.mime_type().to_string(),
            data: doc.raw_bytes.clone(),
        }
    }
}

/// What gets sent to the model for the current message.
///
/// A multipart prompt always puts its attachments before the single
/// instruction text, which carries the user's question last.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PromptPayload {
    Text(String),
    Multipart {
        attachments: Vec<Attachment>,
        instructions: String,
    },
}

/// A single part of a payload, in wire order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptPart<'a> {
    Binary { mime_type: &'a str, data: &'a [u8] },
    Text(&'a str),
}

impl PromptPayload {
    pub fn parts(&self) -> Vec<PromptPart<'_>> {
        match self {
            PromptPayload::Text(text) => vec![PromptPart::Text(text)],
            PromptPayload::Multipart {
                attachments,
                instructions,
            } => attachments
                .iter()
                .map(|attachment| PromptPart::Binary {
                    mime_type: &attachment.mime_type,
                    data: &attachment.data,
                })
                .chain(std::iter::once(PromptPart::Text(instructions)))
                .collect(),
        }
    }

    /// The text portion of the payload.
    pub fn text(&self) -> &str {
        match self {
            PromptPayload::Text(text) => text,
            PromptPayload::Multipart { instructions, .. } => instructions,
        }
    }

    pub fn attachment_count(&self) -> usize {
        match self {
            PromptPayload::Text(_) => 0,
            PromptPayload::Multipart { attachments, .. } => attachments.len(),
        }
    }
}
