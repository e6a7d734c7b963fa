use serde::Serialize;

use crate::models::domain::{Corpus, Difficulty};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub response: String,
    pub pdf_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    pub text: String,
    pub filename: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizResponse {
    pub quiz: String,
    pub topic: String,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Serialize)]
pub struct PdfFile {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PdfListResponse {
    pub count: usize,
    pub files: Vec<PdfFile>,
}

impl From<&Corpus> for PdfListResponse {
    fn from(corpus: &Corpus) -> Self {
        PdfListResponse {
            count: corpus.count(),
            files: corpus
                .names()
                .into_iter()
                .map(|name| PdfFile { name })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub api_key_configured: bool,
    pub features: Vec<&'static str>,
}
