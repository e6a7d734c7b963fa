pub mod chat_handler;
pub mod health_handler;
pub mod pdf_handler;
pub mod quiz_handler;

use actix_web::web;

use crate::errors::AppError;

pub use chat_handler::chat;
pub use health_handler::health_check;
pub use pdf_handler::{list_pdfs, reload_pdfs, upload_pdf};
pub use quiz_handler::{generate_custom_quiz, generate_quiz};

/// Registers every route, with malformed JSON bodies reported in the same
/// `{error, code}` shape as other failures.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(err.to_string()).into()
    }))
    .service(chat)
    .service(upload_pdf)
    .service(generate_quiz)
    .service(generate_custom_quiz)
    .service(list_pdfs)
    .service(reload_pdfs)
    .service(health_check);
}
