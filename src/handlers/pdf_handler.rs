use actix_multipart::Multipart;
use actix_web::{get, post, web, HttpResponse};
use bytes::BytesMut;
use futures::TryStreamExt;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::response::{PdfListResponse, UploadResponse},
    services::corpus_service::extract_document,
};

const UPLOAD_FIELD: &str = "file";
const DEFAULT_UPLOAD_NAME: &str = "upload.pdf";

fn multipart_error(err: actix_multipart::MultipartError) -> AppError {
    AppError::ValidationError(format!("Invalid multipart body: {}", err))
}

/// Extracts the text of a single uploaded PDF without touching the
/// knowledge base.
#[post("/upload")]
async fn upload_pdf(
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let limit = state.config.max_upload_bytes;

    while let Some(mut field) = payload.try_next().await.map_err(multipart_error)? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_UPLOAD_NAME)
            .to_string();

        let mut data = BytesMut::new();
        while let Some(chunk) = field.try_next().await.map_err(multipart_error)? {
            if data.len() + chunk.len() > limit {
                return Err(AppError::ValidationError(format!(
                    "File exceeds the {} byte upload limit",
                    limit
                )));
            }
            data.extend_from_slice(&chunk);
        }

        let name = filename.clone();
        let document = web::block(move || extract_document(&name, data.freeze())).await??;
        log::info!(
            "Extracted {} characters from upload {}",
            document.extracted_text.len(),
            filename
        );

        return Ok(HttpResponse::Ok().json(UploadResponse {
            text: document.extracted_text,
            filename,
        }));
    }

    Err(AppError::ValidationError("No file".to_string()))
}

#[get("/api/pdfs")]
async fn list_pdfs(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let corpus = state.corpus_service.current().await?;
    Ok(HttpResponse::Ok().json(PdfListResponse::from(corpus.as_ref())))
}

#[post("/api/pdfs/reload")]
async fn reload_pdfs(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let corpus = state.corpus_service.reload().await?;
    log::info!("Knowledge base reloaded: {} PDF(s)", corpus.count());
    Ok(HttpResponse::Ok().json(PdfListResponse::from(corpus.as_ref())))
}
