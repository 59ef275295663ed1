use crate::core::command::Command;
use crate::core::session::Session;
use crate::core::{CommandSource, ConfigProvider, Renderer};
use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub commands: usize,
    pub failures: usize,
}

/// Feeds lines from a [`CommandSource`] through a [`Session`] and writes
/// the rendered results.
pub struct ParkingEngine<S: CommandSource, R: Renderer, C: ConfigProvider> {
    source: S,
    renderer: R,
    config: C,
    session: Session,
}

impl<S: CommandSource, R: Renderer, C: ConfigProvider> ParkingEngine<S, R, C> {
    pub fn new(source: S, renderer: R, config: C) -> Self {
        let session = match config.initial_capacity() {
            Some(capacity) => Session::with_capacity(capacity),
            None => Session::new(),
        };

        Self {
            source,
            renderer,
            config,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs until `exit` or end of input.
    ///
    /// Command failures are rendered and counted; only I/O and encoding
    /// failures end the run early.
    pub async fn run<W: Write>(&mut self, out: &mut W) -> Result<RunSummary> {
        let interactive = self.source.is_interactive();
        let mut summary = RunSummary::default();

        tracing::info!(
            "Starting parking session ({} mode)",
            if interactive { "interactive" } else { "batch" }
        );
        if let Some(lot) = self.session.lot() {
            tracing::info!("Lot pre-created with {} slots", lot.capacity());
        }

        let started_at = self.timestamp();
        emit(out, &self.renderer.banner_start(started_at.as_deref()))?;

        loop {
            if interactive {
                write!(out, "{}", self.renderer.prompt())?;
                out.flush()?;
            }

            let Some(line) = self.source.next_line().await? else {
                break;
            };

            let Some(parsed) = Command::parse(&line).transpose() else {
                continue;
            };
            if !interactive {
                emit(out, &self.renderer.command_echo(line.trim()))?;
            }

            let result = match parsed {
                Ok(Command::Exit) => {
                    tracing::debug!("Exit requested");
                    break;
                }
                Ok(command) => {
                    tracing::debug!("Executing: {}", command);
                    self.session.execute(command)
                }
                Err(e) => Err(e),
            };
            summary.commands += 1;

            match result {
                Ok(outcome) => emit(out, &self.renderer.outcome(&outcome)?)?,
                Err(e) if e.is_recoverable() => {
                    summary.failures += 1;
                    tracing::warn!("Command '{}' failed: {} ({:?})", line.trim(), e, e.category());
                    emit(out, &self.renderer.error(&e)?)?;
                }
                Err(e) => return Err(e),
            }
        }

        let finished_at = self.timestamp();
        emit(out, &self.renderer.banner_end(finished_at.as_deref()))?;
        out.flush()?;

        tracing::info!(
            "Session finished: {} commands, {} failed",
            summary.commands,
            summary.failures
        );

        Ok(summary)
    }

    fn timestamp(&self) -> Option<String> {
        self.config
            .show_timestamps()
            .then(|| chrono::Local::now().format(TIMESTAMP_FORMAT).to_string())
    }
}

fn emit<W: Write>(out: &mut W, text: &str) -> Result<()> {
    if !text.is_empty() {
        writeln!(out, "{}", text)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::render::TextRenderer;
    use crate::core::OutputFormat;
    use crate::utils::error::ParkingError;
    use async_trait::async_trait;
    use std::collections::VecDeque;

    struct MockSource {
        lines: VecDeque<String>,
        interactive: bool,
    }

    impl MockSource {
        fn new(lines: &[&str], interactive: bool) -> Self {
            Self {
                lines: lines.iter().map(|l| l.to_string()).collect(),
                interactive,
            }
        }
    }

    #[async_trait]
    impl CommandSource for MockSource {
        async fn next_line(&mut self) -> Result<Option<String>> {
            Ok(self.lines.pop_front())
        }

        fn is_interactive(&self) -> bool {
            self.interactive
        }
    }

    struct FailingSource;

    #[async_trait]
    impl CommandSource for FailingSource {
        async fn next_line(&mut self) -> Result<Option<String>> {
            Err(ParkingError::IoError(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "input closed",
            )))
        }

        fn is_interactive(&self) -> bool {
            false
        }
    }

    struct MockConfig {
        capacity: Option<u32>,
    }

    impl ConfigProvider for MockConfig {
        fn input_path(&self) -> Option<&str> {
            None
        }

        fn initial_capacity(&self) -> Option<u32> {
            self.capacity
        }

        fn output_format(&self) -> OutputFormat {
            OutputFormat::Text
        }

        fn show_timestamps(&self) -> bool {
            false
        }
    }

    #[tokio::test]
    async fn test_run_counts_commands_and_failures() {
        let source = MockSource::new(&["create_parking_lot 1", "", "park A", "park B"], false);
        let mut engine = ParkingEngine::new(source, TextRenderer::new(), MockConfig { capacity: None });

        let mut out = Vec::new();
        let summary = engine.run(&mut out).await.unwrap();

        assert_eq!(summary, RunSummary { commands: 3, failures: 1 });
        let output = String::from_utf8(out).unwrap();
        assert_eq!(output.matches("▶ Executing:").count(), 3);
    }

    #[tokio::test]
    async fn test_initial_capacity_creates_lot() {
        let source = MockSource::new(&[], false);
        let engine = ParkingEngine::new(source, TextRenderer::new(), MockConfig { capacity: Some(4) });

        assert_eq!(engine.session().lot().map(|lot| lot.capacity()), Some(4));
    }

    #[tokio::test]
    async fn test_exit_stops_before_remaining_lines() {
        let source = MockSource::new(&["create_parking_lot 2", "quit", "park A"], true);
        let mut engine = ParkingEngine::new(source, TextRenderer::new(), MockConfig { capacity: None });

        let mut out = Vec::new();
        let summary = engine.run(&mut out).await.unwrap();

        assert_eq!(summary.commands, 1);
        assert!(engine.session().lot().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_source_errors_abort_the_run() {
        let mut engine = ParkingEngine::new(FailingSource, TextRenderer::new(), MockConfig { capacity: None });

        let mut out = Vec::new();
        let result = engine.run(&mut out).await;

        assert!(matches!(result, Err(ParkingError::IoError(_))));
        let output = String::from_utf8(out).unwrap();
        assert!(!output.contains("End of Operations"));
    }
}
