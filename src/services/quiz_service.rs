use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::AppResult,
    models::{
        domain::{Difficulty, PromptPayload, QuizSpec},
        dto::{
            request::{CustomQuizRequest, QuizRequest},
            response::QuizResponse,
        },
    },
    services::{
        model_service::ModelClient,
        prompt_composer::{resolve_quiz_spec, PromptComposer},
    },
};

pub struct QuizService {
    composer: PromptComposer,
    model: Arc<dyn ModelClient>,
}

impl QuizService {
    pub fn new(composer: PromptComposer, model: Arc<dyn ModelClient>) -> Self {
        Self { composer, model }
    }

    pub async fn generate_quiz(&self, request: QuizRequest) -> AppResult<QuizResponse> {
        let spec = resolve_quiz_spec(
            request.difficulty.as_deref(),
            request.topic.as_deref(),
            &mut rand::thread_rng(),
        );
        self.run(spec).await
    }

    pub async fn generate_custom_quiz(&self, request: CustomQuizRequest) -> AppResult<QuizResponse> {
        request.validate()?;

        let difficulty = Difficulty::normalize(request.difficulty.as_deref());
        self.run(QuizSpec::custom(difficulty, request.request)).await
    }

    async fn run(&self, spec: QuizSpec) -> AppResult<QuizResponse> {
        let prompt = self.composer.compose_quiz(&spec);
        log::info!("Generating {} quiz on '{}'", spec.difficulty, spec.topic);

        let quiz = self
            .model
            .generate(&[], &PromptPayload::Text(prompt))
            .await
            .inspect_err(|err| log::error!("Quiz generation failed: {}", err))?;

        Ok(QuizResponse {
            quiz,
            topic: spec.topic,
            difficulty: spec.difficulty,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{ContextPolicy, GroundingMode},
        errors::AppError,
        services::{model_service::MockModelClient, prompt_composer::topics_for},
    };

    fn service(model: MockModelClient) -> QuizService {
        QuizService::new(
            PromptComposer::new(GroundingMode::Attachments, ContextPolicy::Lenient),
            Arc::new(model),
        )
    }

    const SAMPLE_QUIZ: &str = "QUESTION: What orbits the Earth?\nA) Moon\nB) Sun\nC) Mars\nD) Venus\nCORRECT: A\nEXPLANATION: The Moon is Earth's natural satellite.";

    #[actix_web::test]
    async fn test_unknown_difficulty_defaults_to_medium() {
        let mut model = MockModelClient::new();
        model
            .expect_generate()
            .withf(|history, payload| {
                history.is_empty() && payload.text().contains("with medium difficulty")
            })
            .times(1)
            .returning(|_, _| Ok(SAMPLE_QUIZ.to_string()));

        let response = service(model)
            .generate_quiz(QuizRequest {
                difficulty: Some("extreme".to_string()),
                topic: None,
            })
            .await
            .unwrap();

        assert_eq!(response.difficulty, Difficulty::Medium);
        assert!(topics_for(Difficulty::Medium).contains(&response.topic.as_str()));
        assert_eq!(response.quiz, SAMPLE_QUIZ);
    }

    #[actix_web::test]
    async fn test_explicit_topic_is_kept() {
        let mut model = MockModelClient::new();
        model
            .expect_generate()
            .withf(|_, payload| payload.text().contains("about Volcanoes with easy difficulty"))
            .returning(|_, _| Ok("raw".to_string()));

        let response = service(model)
            .generate_quiz(QuizRequest {
                difficulty: Some("easy".to_string()),
                topic: Some("Volcanoes".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(response.topic, "Volcanoes");
        assert_eq!(response.difficulty, Difficulty::Easy);
    }

    #[actix_web::test]
    async fn test_malformed_model_output_is_returned_untouched() {
        let mut model = MockModelClient::new();
        model
            .expect_generate()
            .returning(|_, _| Ok("Sure! Here is a fun quiz...".to_string()));

        let response = service(model).generate_quiz(QuizRequest::default()).await.unwrap();
        assert_eq!(response.quiz, "Sure! Here is a fun quiz...");
    }

    #[actix_web::test]
    async fn test_custom_quiz_quotes_request() {
        let mut model = MockModelClient::new();
        model
            .expect_generate()
            .withf(|_, payload| payload.text().contains("\"black hole evaporation\""))
            .times(1)
            .returning(|_, _| Ok(SAMPLE_QUIZ.to_string()));

        let response = service(model)
            .generate_custom_quiz(CustomQuizRequest {
                request: "black hole evaporation".to_string(),
                difficulty: Some("hard".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(response.topic, "black hole evaporation");
        assert_eq!(response.difficulty, Difficulty::Hard);
    }

    #[actix_web::test]
    async fn test_empty_custom_request_skips_model() {
        let mut model = MockModelClient::new();
        model.expect_generate().times(0);

        let err = service(model)
            .generate_custom_quiz(CustomQuizRequest {
                request: "  ".to_string(),
                difficulty: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }
}
