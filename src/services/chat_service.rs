use std::sync::Arc;

use validator::Validate;

use crate::{
    constants::prompts::GENERAL_KNOWLEDGE_NOTE,
    errors::AppResult,
    models::{
        domain::ConversationTurn,
        dto::{request::ChatRequest, response::ChatResponse},
    },
    services::{
        corpus_service::CorpusService, model_service::ModelClient, prompt_composer::PromptComposer,
    },
};

pub struct ChatService {
    corpus: Arc<CorpusService>,
    composer: PromptComposer,
    model: Arc<dyn ModelClient>,
}

impl ChatService {
    pub fn new(
        corpus: Arc<CorpusService>,
        composer: PromptComposer,
        model: Arc<dyn ModelClient>,
    ) -> Self {
        Self {
            corpus,
            composer,
            model,
        }
    }

    pub async fn chat(&self, request: ChatRequest) -> AppResult<ChatResponse> {
        request.validate()?;

        let corpus = self.corpus.current().await?;
        let supplied_context = request
            .context
            .as_deref()
            .filter(|ctx| !ctx.trim().is_empty());

        let payload = self
            .composer
            .compose_chat(request.question(), &corpus, supplied_context);
        let history: Vec<ConversationTurn> = request.history.into_iter().map(Into::into).collect();

        let response = self
            .model
            .generate(&history, &payload)
            .await
            .inspect_err(|err| log::error!("Chat generation failed: {}", err))?;

        let grounded = payload.attachment_count() > 0
            || corpus.has_text()
            || supplied_context.is_some();
        let pdf_names = (corpus.count() > 0).then(|| corpus.names());
        let note = (!grounded).then(|| GENERAL_KNOWLEDGE_NOTE.to_string());

        Ok(ChatResponse {
            response,
            pdf_count: corpus.count(),
            pdf_names,
            note,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{ContextPolicy, GroundingMode, RefreshPolicy},
        errors::AppError,
        models::domain::{PromptPayload, Role},
        services::model_service::MockModelClient,
        test_utils::fixtures::{sample_pdf, write_file},
    };

    fn service_with(dir: &std::path::Path, model: MockModelClient) -> ChatService {
        ChatService::new(
            Arc::new(CorpusService::new(dir, RefreshPolicy::Dynamic)),
            PromptComposer::new(GroundingMode::Attachments, ContextPolicy::Lenient),
            Arc::new(model),
        )
    }

    fn request(json: serde_json::Value) -> ChatRequest {
        serde_json::from_value(json).unwrap()
    }

    #[actix_web::test]
    async fn test_chat_without_documents_uses_general_knowledge() {
        let dir = tempfile::tempdir().unwrap();
        let mut model = MockModelClient::new();
        model
            .expect_generate()
            .withf(|history, payload| {
                history.is_empty()
                    && matches!(payload, PromptPayload::Text(text)
                        if text.contains("No PDF documents are currently loaded"))
            })
            .times(1)
            .returning(|_, _| Ok("Rayleigh scattering".to_string()));

        let response = service_with(dir.path(), model)
            .chat(request(serde_json::json!({ "message": "Why is the sky blue?" })))
            .await
            .unwrap();

        assert_eq!(response.response, "Rayleigh scattering");
        assert_eq!(response.pdf_count, 0);
        assert_eq!(response.note.as_deref(), Some(GENERAL_KNOWLEDGE_NOTE));
    }

    #[actix_web::test]
    async fn test_chat_with_documents_sends_attachments() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "optics.pdf", &sample_pdf("Refraction"));

        let mut model = MockModelClient::new();
        model
            .expect_generate()
            .withf(|_, payload| payload.attachment_count() == 1)
            .times(1)
            .returning(|_, _| Ok("Light bends".to_string()));

        let response = service_with(dir.path(), model)
            .chat(request(serde_json::json!({ "message": "What is refraction?" })))
            .await
            .unwrap();

        assert_eq!(response.pdf_count, 1);
        assert_eq!(response.pdf_names, Some(vec!["optics.pdf".to_string()]));
        assert!(response.note.is_none());
    }

    #[actix_web::test]
    async fn test_chat_normalizes_history_roles() {
        let dir = tempfile::tempdir().unwrap();
        let mut model = MockModelClient::new();
        model
            .expect_generate()
            .withf(|history, _| history.len() == 1 && history[0].role == Role::Model)
            .times(1)
            .returning(|_, _| Ok("ok".to_string()));

        service_with(dir.path(), model)
            .chat(request(serde_json::json!({
                "message": "and then?",
                "history": [{ "role": "assistant", "content": "hi" }]
            })))
            .await
            .unwrap();
    }

    #[actix_web::test]
    async fn test_blank_message_never_reaches_model() {
        let dir = tempfile::tempdir().unwrap();
        let mut model = MockModelClient::new();
        model.expect_generate().times(0);

        let err = service_with(dir.path(), model)
            .chat(request(serde_json::json!({ "message": "" })))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[actix_web::test]
    async fn test_provider_failure_surfaces() {
        let dir = tempfile::tempdir().unwrap();
        let mut model = MockModelClient::new();
        model
            .expect_generate()
            .returning(|_, _| Err(AppError::ProviderError("quota exhausted".to_string())));

        let err = service_with(dir.path(), model)
            .chat(request(serde_json::json!({ "query": "hi" })))
            .await
            .unwrap_err();
        assert_eq!(err.client_message(), "quota exhausted");
    }
}
