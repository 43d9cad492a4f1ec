use anyhow::Result;
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use serde_json::json;
use shared_logging::LogLevel;
use uuid::Uuid;

use crate::{answer::engine::AnswerEngine, telemetry::NlpTelemetry};

/// One question asked against one note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRequest {
    /// Question text.
    pub question: String,
    /// Note the answer is drawn from.
    pub note: String,
    /// Correlation id for tracing.
    #[serde(default = "Uuid::new_v4")]
    pub correlation_id: Uuid,
}

impl AnswerRequest {
    /// Creates a request with a fresh correlation id.
    #[must_use]
    pub fn new(question: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            note: note.into(),
            correlation_id: Uuid::new_v4(),
        }
    }
}

/// Controller answering independent requests concurrently.
pub struct AnswerBatchController {
    engine: AnswerEngine,
    telemetry: Option<NlpTelemetry>,
}

impl AnswerBatchController {
    /// Creates a new controller.
    #[must_use]
    pub fn new(engine: AnswerEngine, telemetry: Option<NlpTelemetry>) -> Self {
        Self { engine, telemetry }
    }

    /// Answers a batch on the blocking pool; answers come back in request order.
    pub async fn answer_batch(&self, requests: Vec<AnswerRequest>) -> Result<Vec<String>> {
        self.log("nlp.answer.batch_start", requests.len());
        let tasks = requests.into_iter().map(|request| {
            let engine = self.engine.clone();
            let tel = self.telemetry.clone();
            tokio::task::spawn_blocking(move || {
                if let Some(t) = tel {
                    let _ = t.log(
                        LogLevel::Debug,
                        "nlp.answer.request",
                        json!({ "correlation_id": request.correlation_id.to_string() }),
                    );
                }
                engine.answer_question(&request.question, &request.note)
            })
        });
        let mut answers = Vec::new();
        for joined in join_all(tasks).await {
            answers.push(joined?);
        }
        self.log("nlp.answer.batch_complete", answers.len());
        Ok(answers)
    }

    fn log(&self, message: &str, count: usize) {
        if let Some(tel) = &self.telemetry {
            let _ = tel.log(LogLevel::Info, message, json!({ "count": count }));
        }
    }
}
