pub mod conversation;
pub mod corpus;
pub mod pdf_document;
pub mod prompt;
pub mod quiz;
pub use conversation::{ConversationTurn, Role};
pub use corpus::Corpus;
pub use pdf_document::{ExtractionFailure, PdfDocument};
pub use prompt::{Attachment, PromptPart, PromptPayload};
pub use quiz::{Difficulty, QuizSpec, TopicSource};
