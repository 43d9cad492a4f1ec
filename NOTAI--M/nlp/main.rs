use std::sync::Arc;

use anyhow::Result;
use serde_json::{json, Value};
use shared_logging::LogLevel;
use tokio::{
    io::{AsyncBufRead, AsyncWrite, AsyncWriteExt},
    sync::{mpsc, Mutex},
};

use crate::{
    answer::{AnswerBatchController, AnswerEngine, AnswerRequest},
    config::NlpConfig,
    console::{ConsoleCommand, ConsoleCommandReceiver},
    error::{NlpError, NlpResult},
    generation::{GenerationReport, QuestionGenerator},
    linguistic::LinguisticFrontEnd,
    telemetry::NlpTelemetry,
};

/// Validated entry points for generation, answering and summaries.
pub struct NlpRuntime {
    generator: Mutex<QuestionGenerator>,
    engine: AnswerEngine,
    batch: AnswerBatchController,
    max_pairs: usize,
    telemetry: Option<NlpTelemetry>,
}

impl Default for NlpRuntime {
    fn default() -> Self {
        Self::new(&NlpConfig::default(), None)
    }
}

impl NlpRuntime {
    /// Builds the runtime from configuration, opening the configured log file.
    pub fn from_config(config: &NlpConfig) -> Result<Self> {
        let telemetry = NlpTelemetry::from_settings("nlp", &config.logging)?;
        Ok(Self::new(config, telemetry))
    }

    /// Builds the runtime with an explicit telemetry handle.
    #[must_use]
    pub fn new(config: &NlpConfig, telemetry: Option<NlpTelemetry>) -> Self {
        let front_end = LinguisticFrontEnd::from_settings(&config.resources, telemetry.as_ref());
        let generator = QuestionGenerator::new(
            front_end.clone(),
            config.generator.clone(),
            telemetry.clone(),
        );
        let engine = AnswerEngine::new(front_end, config.answer.clone(), telemetry.clone());
        let batch = AnswerBatchController::new(engine.clone(), telemetry.clone());
        Self {
            generator: Mutex::new(generator),
            engine,
            batch,
            max_pairs: config.generator.max_pairs,
            telemetry,
        }
    }

    /// Generates flashcards; `num_pairs` must lie in `1..=max_pairs`.
    ///
    /// Zero resulting pairs is a successful, empty report.
    pub async fn generate(&self, text: &str, num_pairs: usize) -> NlpResult<GenerationReport> {
        if text.trim().is_empty() {
            return Err(NlpError::EmptyInput);
        }
        if num_pairs == 0 || num_pairs > self.max_pairs {
            return Err(NlpError::PairCountOutOfRange {
                requested: num_pairs,
                max: self.max_pairs,
            });
        }
        let mut generator = self.generator.lock().await;
        generator.generate_report(text, num_pairs)
    }

    /// Answers a question about a note.
    #[must_use]
    pub fn answer(&self, question: &str, note: &str) -> String {
        self.engine.answer_question(question, note)
    }

    /// Answers independent requests concurrently.
    pub async fn answer_batch(&self, requests: Vec<AnswerRequest>) -> Result<Vec<String>> {
        self.batch.answer_batch(requests).await
    }

    /// Summarizes a note.
    #[must_use]
    pub fn summarize(&self, note: &str) -> String {
        self.engine.summarize(note)
    }

    /// Main topics of a note.
    #[must_use]
    pub fn topics(&self, note: &str) -> Vec<String> {
        self.engine.main_topics(note)
    }

    /// Runs one console command and renders the response as JSON.
    pub async fn dispatch(&self, command: ConsoleCommand) -> Value {
        match command {
            ConsoleCommand::Generate {
                text,
                num_pairs,
                deck,
            } => match self.generate(&text, num_pairs).await {
                Ok(report) => json!({
                    "type": "generated",
                    "deck": deck,
                    "pairs": report.pairs,
                    "report": {
                        "sentences_seen": report.sentences_seen,
                        "sentences_skipped": report.sentences_skipped,
                        "sentences_failed": report.sentences_failed,
                        "duplicates_removed": report.duplicates_removed,
                        "truncated_by_budget": report.truncated_by_budget,
                    },
                }),
                Err(err) => {
                    if let Some(tel) = &self.telemetry {
                        let _ = tel.log_error("nlp.console.generate_rejected", &err, json!({}));
                    }
                    json!({ "type": "error", "message": err.to_string() })
                }
            },
            ConsoleCommand::Ask { question, note } => json!({
                "type": "answer",
                "answer": self.answer(&question, &note),
            }),
            ConsoleCommand::Summarize { note } => json!({
                "type": "summary",
                "summary": self.summarize(&note),
                "topics": self.topics(&note),
            }),
            ConsoleCommand::Quit => json!({ "type": "bye" }),
        }
    }

    /// Serves JSON-line commands from stdin, writing one JSON response per line to stdout.
    pub async fn serve_console(self: Arc<Self>) -> Result<()> {
        let reader = tokio::io::BufReader::new(tokio::io::stdin());
        self.serve_console_with(reader, tokio::io::stdout()).await?;
        Ok(())
    }

    /// Serves commands from `reader`, returning `writer` once input ends.
    pub async fn serve_console_with<R, W>(self: Arc<Self>, reader: R, writer: W) -> Result<W>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let receiver = ConsoleCommandReceiver::new(tx, self.telemetry.clone());
        let runtime = Arc::clone(&self);
        let responder = tokio::spawn(async move {
            let mut writer = writer;
            while let Some(command) = rx.recv().await {
                let response = runtime.dispatch(command).await;
                let mut line = serde_json::to_vec(&response)?;
                line.push(b'\n');
                writer.write_all(&line).await?;
                writer.flush().await?;
            }
            anyhow::Ok(writer)
        });
        let received = receiver.run_with_reader(reader).await;
        drop(receiver);
        let writer = responder.await??;
        received?;
        self.log(LogLevel::Info, "nlp.console.closed", json!({}));
        Ok(writer)
    }

    fn log(&self, level: LogLevel, message: &str, metadata: Value) {
        if let Some(tel) = &self.telemetry {
            let _ = tel.log(level, message, metadata);
        }
    }
}
