//! Console rendering of the orchestration event stream

use colored::Colorize;
use escriba_domain::RunEvent;
use tokio::sync::mpsc;

/// Drains a run's event stream to the terminal.
///
/// Log lines go to stderr so the final document on stdout stays
/// pipeable; the partial outline is shown dimmed, the final document
/// printed verbatim.
pub struct ConsoleReporter {
    quiet: bool,
}

impl ConsoleReporter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Consume the stream until the terminal event.
    ///
    /// Returns the final document on success, or the error message.
    pub async fn run(
        &self,
        mut events: mpsc::UnboundedReceiver<RunEvent>,
    ) -> Result<String, String> {
        let mut final_result: Option<String> = None;
        let mut error: Option<String> = None;

        while let Some(event) = events.recv().await {
            match event {
                RunEvent::Log(line) => {
                    if !self.quiet {
                        eprintln!("{}", self.paint_log(&line));
                    }
                }
                RunEvent::PartialResult(outline) => {
                    if !self.quiet {
                        eprintln!("{}", "── estrutura parcial ──".yellow().bold());
                        eprintln!("{}", outline.dimmed());
                    }
                }
                RunEvent::FinalResult(content) => {
                    final_result = Some(content);
                }
                RunEvent::Error(message) => {
                    eprintln!("{} {}", "erro:".red().bold(), message);
                    error = Some(message);
                }
                RunEvent::End => break,
            }
        }

        match (final_result, error) {
            (Some(content), _) => Ok(content),
            (None, Some(message)) => Err(message),
            (None, None) => Err("stream encerrado sem resultado".to_string()),
        }
    }

    fn paint_log(&self, line: &str) -> String {
        if line.starts_with("[FALLBACK]") || line.contains("[ERROR]") {
            line.red().to_string()
        } else if line.starts_with("[QA]") {
            line.cyan().to_string()
        } else if line.starts_with("[SUCCESS]") {
            line.green().to_string()
        } else {
            line.dimmed().to_string()
        }
    }
}
