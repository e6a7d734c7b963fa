use once_cell::sync::Lazy;
use rand::{seq::SliceRandom, Rng};
use std::collections::HashMap;

use crate::{
    config::{ContextPolicy, GroundingMode},
    constants::{
        prompts::{
            ASSISTANT_PERSONA, ATTACHMENT_INSTRUCTIONS, LENIENT_CONTEXT_INSTRUCTIONS,
            NO_DOCUMENTS_NOTE, STRICT_CONTEXT_INSTRUCTION, SUBJECT_DOMAIN,
        },
        quiz_prompt::{difficulty_guidance, topic_categories, QUIZ_FORMAT_FOOTER, QUIZ_OUTPUT_FORMAT},
    },
    models::domain::{Attachment, Corpus, Difficulty, PromptPayload, QuizSpec, TopicSource},
};

/// Every topic for a difficulty, flattened across categories so a random
/// pick is uniform over topics rather than categories.
static FLATTENED_TOPICS: Lazy<HashMap<Difficulty, Vec<&'static str>>> = Lazy::new(|| {
    Difficulty::ALL
        .into_iter()
        .map(|difficulty| {
            let topics = topic_categories(difficulty)
                .iter()
                .flat_map(|(_, topics)| topics.iter().copied())
                .collect();
            (difficulty, topics)
        })
        .collect()
});

pub fn topics_for(difficulty: Difficulty) -> &'static [&'static str] {
    FLATTENED_TOPICS
        .get(&difficulty)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

pub fn pick_topic<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> &'static str {
    topics_for(difficulty)
        .choose(rng)
        .copied()
        .unwrap_or("General science")
}

/// Builds the quiz spec for a catalog request: normalised difficulty, and
/// the caller's topic or a random one from the table when absent.
pub fn resolve_quiz_spec<R: Rng + ?Sized>(
    difficulty: Option<&str>,
    topic: Option<&str>,
    rng: &mut R,
) -> QuizSpec {
    let difficulty = Difficulty::normalize(difficulty);
    match topic.map(str::trim).filter(|t| !t.is_empty()) {
        Some(topic) => QuizSpec::catalog(difficulty, topic),
        None => QuizSpec::catalog(difficulty, pick_topic(difficulty, rng)),
    }
}

fn join_context(corpus_text: &str, supplied: Option<&str>) -> String {
    [Some(corpus_text), supplied]
        .into_iter()
        .flatten()
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Turns a question plus the available sources into the model payload.
#[derive(Clone, Copy, Debug)]
pub struct PromptComposer {
    grounding: GroundingMode,
    policy: ContextPolicy,
}

impl PromptComposer {
    pub fn new(grounding: GroundingMode, policy: ContextPolicy) -> Self {
        Self { grounding, policy }
    }

    pub fn compose_chat(
        &self,
        message: &str,
        corpus: &Corpus,
        supplied_context: Option<&str>,
    ) -> PromptPayload {
        let supplied_context = supplied_context.filter(|ctx| !ctx.trim().is_empty());

        match (self.grounding, supplied_context) {
            (GroundingMode::Attachments, _) if corpus.count() > 0 => PromptPayload::Multipart {
                attachments: corpus.documents().iter().map(Attachment::from).collect(),
                instructions: self.attachment_instructions(message, corpus, supplied_context),
            },
            (_, None) if !corpus.has_text() => PromptPayload::Text(self.ungrounded(message)),
            _ => {
                let context = join_context(&corpus.text(), supplied_context);
                PromptPayload::Text(self.text_grounded(message, &context))
            }
        }
    }

    fn attachment_instructions(
        &self,
        message: &str,
        corpus: &Corpus,
        supplied_context: Option<&str>,
    ) -> String {
        let extra = supplied_context
            .map(|ctx| format!("Additional context provided with this question:\n{}\n\n", ctx))
            .unwrap_or_default();

        format!(
            "{}. You have access to {} PDF document(s): {}.\n\n{}\n\n{}User question: {}",
            ASSISTANT_PERSONA,
            corpus.count(),
            corpus.names().join(", "),
            ATTACHMENT_INSTRUCTIONS,
            extra,
            message
        )
    }

    fn text_grounded(&self, message: &str, context: &str) -> String {
        match self.policy {
            ContextPolicy::Strict => format!(
                "{} specializing in {}.\n\nContext: {}\n\nQuestion: {}\n{}",
                ASSISTANT_PERSONA, SUBJECT_DOMAIN, context, message, STRICT_CONTEXT_INSTRUCTION
            ),
            ContextPolicy::Lenient => format!(
                "{} specializing in {}.\n\nContext:\n{}\n\n{}\n\nUser question: {}",
                ASSISTANT_PERSONA, SUBJECT_DOMAIN, context, LENIENT_CONTEXT_INSTRUCTIONS, message
            ),
        }
    }

    fn ungrounded(&self, message: &str) -> String {
        format!(
            "{} specializing in {}.\n\n{}\n\nUser question: {}",
            ASSISTANT_PERSONA, SUBJECT_DOMAIN, NO_DOCUMENTS_NOTE, message
        )
    }

    pub fn compose_quiz(&self, spec: &QuizSpec) -> String {
        let difficulty = spec.difficulty;
        let preamble = match spec.source {
            TopicSource::Catalog => format!(
                "Generate a multiple-choice science quiz question about {} with {} difficulty.",
                spec.topic, difficulty
            ),
            TopicSource::Custom => format!(
                "The user wants a quiz about: \"{}\"\nDifficulty: {}\n\n\
                 Generate a multiple-choice science quiz question about this request.",
                spec.topic, difficulty
            ),
        };

        let topic_line = match spec.source {
            TopicSource::Catalog => format!("- Topic: {}\n", spec.topic),
            TopicSource::Custom => {
                "- Must be related to science (Physics, Chemistry, Biology, etc.)\n".to_string()
            }
        };

        format!(
            "{}\n\nSTRICT FORMAT REQUIREMENT - Follow this EXACT format:\n{}\n\n\
             REQUIREMENTS:\n\
             - Question should be {} level in complexity\n\
             - All options should be plausible but only one correct\n\
             - Explanation should be educational and clear\n\
             {}\
             - For {}\n\n{}",
            preamble,
            QUIZ_OUTPUT_FORMAT,
            difficulty,
            topic_line,
            difficulty_guidance(difficulty),
            QUIZ_FORMAT_FOOTER
        )
    }
}
