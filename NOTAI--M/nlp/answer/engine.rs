use std::panic::{self, AssertUnwindSafe};

use serde_json::json;
use shared_logging::LogLevel;

use crate::{
    answer::{
        classify::{classify_question_type, QuestionType},
        retrieval::{entity_context, relevant_sentences, sentences_mentioning},
    },
    config::AnswerSettings,
    error::NlpResult,
    keywords::{extract_keywords, extract_note_entities, NoteEntities},
    linguistic::{EntityType, LinguisticFrontEnd},
    telemetry::NlpTelemetry,
};

/// Reply when either input is blank.
pub const NEED_BOTH_MESSAGE: &str =
    "I need both a question and note content to provide an answer.";
/// Reply when no sentence shares a keyword with the question.
pub const NO_RELEVANT_MESSAGE: &str =
    "I couldn't find information in your note that answers this question directly.";
/// Reply to a person question when the note names nobody.
pub const NO_PEOPLE_MESSAGE: &str = "I couldn't find any specific people mentioned in your note.";
/// Reply to a location question when the note names no place.
pub const NO_LOCATIONS_MESSAGE: &str = "I couldn't find any specific locations in your note.";
/// Reply to a time question when the note has no time reference.
pub const NO_TIME_MESSAGE: &str = "I couldn't find specific time references in your note.";
/// Reply after an internal fault.
pub const ERROR_MESSAGE: &str =
    "I encountered an error while processing your question. Please try asking in a different way.";

const TIME_WORDS: &[&str] = &[
    "today", "yesterday", "tomorrow", "morning", "afternoon", "evening", "night", "month", "year",
    "week", "day",
];
const REASON_INDICATORS: &[&str] = &["because", "since", "as", "due to", "result of", "reason", "why"];
const METHOD_INDICATORS: &[&str] = &["how", "steps", "process", "procedure", "way", "method"];
const DEFINITION_INDICATORS: &[&str] = &["is a", "refers to", "defined as", "means", "is an"];

/// Answers free-form questions against a single note.
#[derive(Debug, Clone)]
pub struct AnswerEngine {
    front_end: LinguisticFrontEnd,
    settings: AnswerSettings,
    telemetry: Option<NlpTelemetry>,
}

impl Default for AnswerEngine {
    fn default() -> Self {
        Self::new(LinguisticFrontEnd::shared(), AnswerSettings::default(), None)
    }
}

impl AnswerEngine {
    /// Creates a new engine.
    #[must_use]
    pub fn new(
        front_end: LinguisticFrontEnd,
        settings: AnswerSettings,
        telemetry: Option<NlpTelemetry>,
    ) -> Self {
        Self {
            front_end,
            settings,
            telemetry,
        }
    }

    /// Front end used for analysis.
    #[must_use]
    pub const fn front_end(&self) -> &LinguisticFrontEnd {
        &self.front_end
    }

    /// Active settings.
    #[must_use]
    pub const fn settings(&self) -> &AnswerSettings {
        &self.settings
    }

    pub(crate) const fn telemetry(&self) -> Option<&NlpTelemetry> {
        self.telemetry.as_ref()
    }

    /// Answers a question; every outcome, including faults, is a displayable message.
    #[must_use]
    pub fn answer_question(&self, question: &str, note: &str) -> String {
        if question.trim().is_empty() || note.trim().is_empty() {
            return NEED_BOTH_MESSAGE.to_string();
        }
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.try_answer(question, note)));
        match outcome {
            Ok(Ok((kind, answer))) => {
                self.log(
                    LogLevel::Info,
                    "nlp.answer.generated",
                    json!({ "question_type": kind.label(), "chars": answer.chars().count() }),
                );
                answer
            }
            Ok(Err(err)) => {
                if let Some(tel) = &self.telemetry {
                    let _ = tel.log_error("nlp.answer.failed", &err, json!({}));
                }
                ERROR_MESSAGE.to_string()
            }
            Err(_) => {
                self.log(LogLevel::Error, "nlp.answer.failed", json!({ "reason": "panic" }));
                ERROR_MESSAGE.to_string()
            }
        }
    }

    fn try_answer(&self, question: &str, note: &str) -> NlpResult<(QuestionType, String)> {
        let kind = classify_question_type(&self.front_end, question);
        let keywords = extract_keywords(&self.front_end, question, self.settings.keyword_limit);
        let sentences = self.front_end.segment(note);
        let relevant =
            relevant_sentences(&sentences, &keywords, self.settings.relevant_sentence_limit);
        if relevant.is_empty() {
            return Ok((kind, NO_RELEVANT_MESSAGE.to_string()));
        }
        let entities = extract_note_entities(&self.front_end, note);
        let answer = self.render(kind, &sentences, &relevant, &entities);
        Ok((kind, answer))
    }

    fn render(
        &self,
        kind: QuestionType,
        sentences: &[String],
        relevant: &[String],
        entities: &NoteEntities,
    ) -> String {
        let details = || format!("I found these relevant details: {}", relevant.join(" "));
        match kind {
            QuestionType::Person => {
                let people = entities.of(&[EntityType::Person]);
                if people.is_empty() {
                    return NO_PEOPLE_MESSAGE.to_string();
                }
                let verb = if people.len() > 1 { "are" } else { "is" };
                let context = entity_context(&people, sentences, self.settings.context_entity_limit);
                format!("Based on your note, {} {verb} mentioned. {context}", people.join(", "))
                    .trim_end()
                    .to_string()
            }
            QuestionType::Location => {
                let places = entities.of(&[EntityType::Gpe, EntityType::Location]);
                if places.is_empty() {
                    return NO_LOCATIONS_MESSAGE.to_string();
                }
                let context = entity_context(&places, sentences, self.settings.context_entity_limit);
                format!("The note mentions these locations: {}. {context}", places.join(", "))
                    .trim_end()
                    .to_string()
            }
            QuestionType::Time => {
                let times = entities.of(&[EntityType::Date, EntityType::Time]);
                if !times.is_empty() {
                    return format!("Time references in your note include: {}.", times.join(", "));
                }
                let mentions = sentences_mentioning(sentences, TIME_WORDS);
                if mentions.is_empty() {
                    NO_TIME_MESSAGE.to_string()
                } else {
                    format!(
                        "Your note includes these time references: {}",
                        first_two(&mentions)
                    )
                }
            }
            QuestionType::Reason => sentences_mentioning(sentences, REASON_INDICATORS)
                .first()
                .map_or_else(details, |sentence| {
                    format!("The reason mentioned in your note appears to be: {sentence}")
                }),
            QuestionType::Method => {
                let steps = sentences_mentioning(sentences, METHOD_INDICATORS);
                if steps.is_empty() {
                    details()
                } else {
                    format!("Here's the method described in your note: {}", first_two(&steps))
                }
            }
            QuestionType::Definition => sentences_mentioning(sentences, DEFINITION_INDICATORS)
                .first()
                .map_or_else(details, |sentence| format!("According to your note: {sentence}")),
            _ => format!("Based on your note: {}", relevant.join(" ")),
        }
    }

    fn log(&self, level: LogLevel, message: &str, metadata: serde_json::Value) {
        if let Some(tel) = &self.telemetry {
            let _ = tel.log(level, message, metadata);
        }
    }
}

fn first_two(sentences: &[&str]) -> String {
    sentences.iter().take(2).copied().collect::<Vec<_>>().join(" ")
}
