use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::{
        chat_service::ChatService,
        corpus_service::CorpusService,
        model_service::{GeminiClient, ModelClient},
        prompt_composer::PromptComposer,
        quiz_service::QuizService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub corpus_service: Arc<CorpusService>,
    pub chat_service: Arc<ChatService>,
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wires the services against the Gemini API and loads the knowledge base.
    pub async fn new(config: Config) -> AppResult<Self> {
        let model: Arc<dyn ModelClient> = Arc::new(GeminiClient::new(&config)?);
        Self::with_model(config, model).await
    }

    pub async fn with_model(config: Config, model: Arc<dyn ModelClient>) -> AppResult<Self> {
        let corpus_service = Arc::new(CorpusService::new(
            config.knowledge_base_dir.clone(),
            config.corpus_refresh,
        ));
        corpus_service.reload().await?;

        let composer = PromptComposer::new(config.grounding, config.context_policy);
        let chat_service = Arc::new(ChatService::new(
            corpus_service.clone(),
            composer,
            model.clone(),
        ));
        let quiz_service = Arc::new(QuizService::new(composer, model));

        Ok(Self {
            corpus_service,
            chat_service,
            quiz_service,
            config: Arc::new(config),
        })
    }
}
