pub mod chat_service;
pub mod corpus_service;
pub mod model_service;
pub mod prompt_composer;
pub mod quiz_service;
