//! Console command ingestion for the NLP runtime.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::json;
use shared_logging::LogLevel;
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    sync::mpsc::UnboundedSender,
};

use crate::telemetry::NlpTelemetry;

const fn default_num_pairs() -> usize {
    5
}

/// Commands accepted from the console, one JSON object per line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConsoleCommand {
    /// Generate flashcards from text.
    Generate {
        /// Source text.
        text: String,
        /// Requested pair count.
        #[serde(default = "default_num_pairs")]
        num_pairs: usize,
        /// Deck the caller files the pairs under.
        #[serde(default)]
        deck: Option<String>,
    },
    /// Ask a question about a note.
    Ask {
        /// Question payload.
        question: String,
        /// Note content.
        note: String,
    },
    /// Summarize a note.
    Summarize {
        /// Note content.
        note: String,
    },
    /// Exit the loop.
    Quit,
}

/// Receives JSON line commands from a reader, dispatching to the runtime.
pub struct ConsoleCommandReceiver {
    sender: UnboundedSender<ConsoleCommand>,
    telemetry: Option<NlpTelemetry>,
}

impl ConsoleCommandReceiver {
    /// Creates a new receiver.
    #[must_use]
    pub fn new(sender: UnboundedSender<ConsoleCommand>, telemetry: Option<NlpTelemetry>) -> Self {
        Self { sender, telemetry }
    }

    /// Forwards commands from `reader` until `Quit`, which is forwarded last, or end of input.
    ///
    /// Lines that are not valid commands are logged and skipped.
    pub async fn run_with_reader<R>(&self, reader: R) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            let cmd: ConsoleCommand = match serde_json::from_str(&line) {
                Ok(cmd) => cmd,
                Err(err) => {
                    self.log(
                        LogLevel::Warn,
                        "nlp.console.invalid_command",
                        json!({ "error": err.to_string() }),
                    );
                    continue;
                }
            };
            let quit = matches!(cmd, ConsoleCommand::Quit);
            self.sender.send(cmd)?;
            if quit {
                break;
            }
        }
        self.log(LogLevel::Info, "nlp.console.receiver_shutdown", json!({}));
        Ok(())
    }

    fn log(&self, level: LogLevel, message: &str, metadata: serde_json::Value) {
        if let Some(tel) = &self.telemetry {
            let _ = tel.log(level, message, metadata);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_logging::MemoryLogger;
    use std::sync::Arc;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn forwards_commands_through_quit() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let sink = Arc::new(MemoryLogger::new());
        let telemetry = NlpTelemetry::builder("nlp").sink(sink.clone()).build().unwrap();
        let receiver = ConsoleCommandReceiver::new(tx, Some(telemetry));
        let input = concat!(
            "{\"type\":\"generate\",\"text\":\"Cats chase mice.\",\"deck\":\"Biology\"}\n",
            "\n",
            "not json\n",
            "{\"type\":\"ask\",\"question\":\"Who?\",\"note\":\"Ada wrote code.\"}\n",
            "{\"type\":\"quit\"}\n",
            "{\"type\":\"summarize\",\"note\":\"ignored\"}\n",
        );
        receiver.run_with_reader(input.as_bytes()).await.unwrap();
        drop(receiver);

        let mut received = Vec::new();
        while let Some(cmd) = rx.recv().await {
            received.push(cmd);
        }
        assert_eq!(
            received,
            vec![
                ConsoleCommand::Generate {
                    text: "Cats chase mice.".into(),
                    num_pairs: 5,
                    deck: Some("Biology".into()),
                },
                ConsoleCommand::Ask {
                    question: "Who?".into(),
                    note: "Ada wrote code.".into(),
                },
                ConsoleCommand::Quit,
            ]
        );
        assert!(sink.contains("nlp.console.invalid_command"));
        assert!(sink.contains("nlp.console.receiver_shutdown"));
    }
}
