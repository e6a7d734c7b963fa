use std::{
    fs,
    panic::{self, AssertUnwindSafe},
    path::{Path, PathBuf},
    sync::Arc,
};

use bytes::Bytes;
use tokio::sync::{Mutex, RwLock};

use crate::{
    config::RefreshPolicy,
    errors::{AppError, AppResult},
    models::domain::{Corpus, ExtractionFailure, PdfDocument},
};

const PDF_EXTENSION: &str = "pdf";

/// Creates the knowledge-base directory when it is missing.
/// Returns `true` if it had to be created.
pub fn ensure_source_dir(source_dir: &Path) -> AppResult<bool> {
    if source_dir.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(source_dir)?;
    log::info!("Created knowledge base directory {}", source_dir.display());
    Ok(true)
}

/// Parses a PDF held in memory and returns its text layer, which may be
/// empty for scanned or image-only files.
fn parse_text(data: &[u8]) -> AppResult<String> {
    // pdf-extract panics on some malformed files instead of returning an error.
    panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(data)))
        .map_err(|_| AppError::ExtractionError("PDF parser aborted on malformed input".to_string()))?
        .map_err(|e| AppError::ExtractionError(e.to_string()))
}

/// Extracts the text layer of a PDF held in memory. A file with no
/// extractable text is an error.
pub fn extract_text(data: &[u8]) -> AppResult<String> {
    let extracted = parse_text(data)?;

    if extracted.trim().is_empty() {
        return Err(AppError::ExtractionError(
            "PDF contains no extractable text (may be image-based or encrypted)".to_string(),
        ));
    }

    Ok(extracted)
}

/// Extracts a single uploaded document.
pub fn extract_document(name: &str, data: Bytes) -> AppResult<PdfDocument> {
    let text = extract_text(&data)?;
    Ok(PdfDocument::new(name, data, text))
}

fn is_pdf(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(PDF_EXTENSION))
}

fn list_pdfs(source_dir: &Path) -> AppResult<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(source_dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_pdf(path))
        .collect();
    paths.sort();
    Ok(paths)
}

/// Knowledge-base documents are kept even without a text layer, since
/// attachment grounding sends the raw bytes.
fn load_document(path: &Path, name: &str) -> AppResult<PdfDocument> {
    let data = Bytes::from(fs::read(path)?);
    let text = parse_text(&data)?;
    if text.trim().is_empty() {
        log::info!("{} has no text layer; only its raw bytes are usable", name);
    }
    Ok(PdfDocument::new(name, data, text))
}

/// Reads every PDF in `source_dir`. A file that cannot be read or parsed is
/// logged and left out; it never fails the whole load.
pub fn load_corpus(source_dir: &Path) -> AppResult<Corpus> {
    if ensure_source_dir(source_dir)? {
        return Ok(Corpus::empty());
    }

    let mut documents = Vec::new();
    let mut failures = Vec::new();

    for path in list_pdfs(source_dir)? {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        match load_document(&path, &name) {
            Ok(doc) => documents.push(doc),
            Err(err) => {
                log::warn!("Skipping {}: {}", name, err);
                failures.push(ExtractionFailure {
                    name,
                    reason: err.to_string(),
                });
            }
        }
    }

    Ok(Corpus::new(documents, failures))
}

/// Owns the knowledge-base corpus and decides when it is rebuilt.
pub struct CorpusService {
    source_dir: PathBuf,
    policy: RefreshPolicy,
    current: RwLock<Arc<Corpus>>,
    reload_lock: Mutex<()>,
}

impl CorpusService {
    pub fn new(source_dir: impl Into<PathBuf>, policy: RefreshPolicy) -> Self {
        Self {
            source_dir: source_dir.into(),
            policy,
            current: RwLock::new(Arc::new(Corpus::empty())),
            reload_lock: Mutex::new(()),
        }
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// The corpus a request should use: the held one for a static policy,
    /// a private fresh scan for a dynamic one.
    pub async fn current(&self) -> AppResult<Arc<Corpus>> {
        match self.policy {
            RefreshPolicy::Static => Ok(self.current.read().await.clone()),
            RefreshPolicy::Dynamic => self.scan().await.map(Arc::new),
        }
    }

    async fn scan(&self) -> AppResult<Corpus> {
        let source_dir = self.source_dir.clone();
        tokio::task::spawn_blocking(move || load_corpus(&source_dir)).await?
    }

    /// Rebuilds the corpus and swaps it in once complete. Concurrent callers
    /// queue behind the one in flight; readers keep the previous corpus
    /// until the swap.
    pub async fn reload(&self) -> AppResult<Arc<Corpus>> {
        let _guard = self.reload_lock.lock().await;

        let corpus = Arc::new(self.scan().await?);

        *self.current.write().await = corpus.clone();
        log::debug!("Knowledge base reloaded with {} document(s)", corpus.count());
        Ok(corpus)
    }
}
