//! Line-oriented interactive front end.
//!
//! Reads chat messages and slash commands from an async reader and writes
//! replies to an async writer, driving a single [`ResearchSession`].

mod commands;

pub use commands::{chat_text, Command, HELP_TEXT};

use chrono::Local;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::completion::CompletionBackend;
use crate::config::GenerationConfig;
use crate::plan::export::{self, NOT_AVAILABLE};
use crate::plan::SectionKey;
use crate::session::ResearchSession;
use crate::voice::{clean_for_speech, SpeechPlayback};

const BANNER: &str = "Company Research Assistant\n\
Ask me to research any company and I'll create a comprehensive account plan for you.\n\
Type /help for commands.";

const PROMPT: &str = "you> ";

/// Section being replaced line by line via `/edit`.
struct PendingEdit {
    key: SectionKey,
    lines: Vec<String>,
}

/// Interactive loop state. Owns the session; reset replaces it wholesale.
pub struct Repl {
    backend: Arc<dyn CompletionBackend>,
    generation: GenerationConfig,
    export_dir: PathBuf,
    speaker: Option<Arc<dyn SpeechPlayback>>,
    voice_mode: bool,
    session: ResearchSession,
    pending_edit: Option<PendingEdit>,
}

impl Repl {
    /// Create a loop over a fresh session.
    pub fn new(
        backend: Arc<dyn CompletionBackend>,
        generation: GenerationConfig,
        export_dir: PathBuf,
    ) -> Self {
        Self {
            backend,
            generation,
            export_dir,
            speaker: None,
            voice_mode: false,
            session: ResearchSession::new(),
            pending_edit: None,
        }
    }

    /// Attach a playback engine used when voice mode is on.
    pub fn with_speaker(mut self, speaker: Arc<dyn SpeechPlayback>) -> Self {
        self.speaker = Some(speaker);
        self
    }

    /// Start with voice mode on or off.
    pub fn with_voice_mode(mut self, enabled: bool) -> Self {
        self.voice_mode = enabled;
        self
    }

    /// Session driven by this loop.
    pub fn session(&self) -> &ResearchSession {
        &self.session
    }

    /// Whether replies are currently spoken.
    pub fn voice_mode(&self) -> bool {
        self.voice_mode
    }

    /// Run until EOF or `/quit`.
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!(session_id = %self.session.id(), "Interactive session starting");
        write_block(&mut output, BANNER).await?;

        let mut reader = input;
        let mut line = String::new();

        loop {
            if self.pending_edit.is_none() {
                output.write_all(PROMPT.as_bytes()).await?;
                output.flush().await?;
            }

            line.clear();
            let bytes_read = reader.read_line(&mut line).await?;

            // EOF reached
            if bytes_read == 0 {
                info!("EOF received, ending session");
                if let Some(edit) = self.pending_edit.take() {
                    warn!(
                        section = %edit.key,
                        lines = edit.lines.len(),
                        "Edit discarded at EOF"
                    );
                    write_block(
                        &mut output,
                        &format!("Edit discarded: {} was not changed.", edit.key.title()),
                    )
                    .await?;
                }
                break;
            }

            let text = line.trim_end_matches(&['\n', '\r'][..]);

            if self.pending_edit.is_some() {
                self.continue_edit(text, &mut output).await?;
                continue;
            }

            if text.trim().is_empty() {
                continue;
            }

            match Command::parse(text) {
                Some(Ok(Command::Quit)) => break,
                Some(Ok(command)) => self.handle_command(command, &mut output).await?,
                Some(Err(message)) => write_block(&mut output, &message).await?,
                None => self.handle_chat(chat_text(text), &mut output).await?,
            }
        }

        info!(
            session_id = %self.session.id(),
            turns = self.session.history().len(),
            "Interactive session finished"
        );
        Ok(())
    }

    async fn handle_chat<W: AsyncWrite + Unpin>(
        &mut self,
        message: &str,
        output: &mut W,
    ) -> std::io::Result<()> {
        debug!(chars = message.len(), "Submitting chat message");
        let outcome = self
            .session
            .submit(self.backend.as_ref(), &self.generation, message)
            .await;

        if let Some(error) = &outcome.error {
            write_block(output, &format!("Error: {error}")).await?;
        }
        write_block(output, &format!("assistant> {}", outcome.reply)).await?;

        if outcome.plan_created {
            write_block(
                output,
                "✅ Account plan generated! Use /plan to view it, /edit or /enhance to refine it.",
            )
            .await?;
        }

        if self.voice_mode {
            self.speak(&outcome.reply, output).await?;
        }
        Ok(())
    }

    async fn handle_command<W: AsyncWrite + Unpin>(
        &mut self,
        command: Command,
        output: &mut W,
    ) -> std::io::Result<()> {
        match command {
            Command::Help => write_block(output, HELP_TEXT).await,
            Command::Plan => match self.session.plan() {
                Some(plan) => {
                    let placeholder = format!("_{NOT_AVAILABLE}_");
                    let text = export::to_markdown_with(plan, Some(&placeholder));
                    write_block(output, text.trim_end()).await
                }
                None => write_block(output, no_plan_message()).await,
            },
            Command::Section(key) => match self.session.plan() {
                Some(plan) => {
                    let text = plan.get(key).trim_end();
                    let body = if text.is_empty() { NOT_AVAILABLE } else { text };
                    write_block(output, &format!("## {}\n{}", key.title(), body)).await
                }
                None => write_block(output, no_plan_message()).await,
            },
            Command::Edit(key) => {
                if self.session.plan().is_none() {
                    return write_block(output, no_plan_message()).await;
                }
                self.pending_edit = Some(PendingEdit {
                    key,
                    lines: Vec::new(),
                });
                write_block(
                    output,
                    &format!(
                        "Enter new text for {}. Finish with a line containing only '.'",
                        key.title()
                    ),
                )
                .await
            }
            Command::Enhance(key) => {
                let result = self
                    .session
                    .enhance_section(self.backend.as_ref(), &self.generation, key)
                    .await
                    .map(|text| text.trim_end().to_string());
                match result {
                    Ok(text) => {
                        write_block(output, &format!("✅ Enhanced!\n## {}\n{}", key.title(), text))
                            .await
                    }
                    Err(e) => write_block(output, &e.to_string()).await,
                }
            }
            Command::Export(dir) => {
                let Some(plan) = self.session.plan() else {
                    return write_block(output, no_plan_message()).await;
                };
                let dir = dir.unwrap_or_else(|| self.export_dir.clone());
                match export::write_exports(plan, &dir, Local::now().naive_local()) {
                    Ok(paths) => {
                        write_block(
                            output,
                            &format!(
                                "Exported:\n  {}\n  {}",
                                paths.json.display(),
                                paths.text.display()
                            ),
                        )
                        .await
                    }
                    Err(e) => {
                        warn!(error = %e, dir = %dir.display(), "Export failed");
                        write_block(output, &format!("Export failed: {e}")).await
                    }
                }
            }
            Command::Notes => {
                let notes = self.session.recent_notes();
                if notes.is_empty() {
                    return write_block(output, "No research activity yet").await;
                }
                let rendered: Vec<String> = notes
                    .iter()
                    .map(|n| format!("[{}] {}", n.time_label(), n.action))
                    .collect();
                write_block(output, &rendered.join("\n")).await
            }
            Command::Voice => {
                self.voice_mode = !self.voice_mode;
                let message = match (self.voice_mode, self.speaker.is_some()) {
                    (true, true) => "✅ Voice mode enabled!",
                    (true, false) => {
                        "Voice mode enabled, but no TTS_COMMAND is configured; replies will not be spoken."
                    }
                    (false, _) => "Voice mode disabled",
                };
                info!(voice_mode = self.voice_mode, "Voice mode toggled");
                write_block(output, message).await
            }
            Command::Reset => {
                self.session.reset();
                self.pending_edit = None;
                write_block(output, "🔄 Started a new research session.").await
            }
            // Handled by the loop
            Command::Quit => Ok(()),
        }
    }

    async fn continue_edit<W: AsyncWrite + Unpin>(
        &mut self,
        line: &str,
        output: &mut W,
    ) -> std::io::Result<()> {
        if line.trim() != "." {
            if let Some(edit) = self.pending_edit.as_mut() {
                edit.lines.push(line.to_string());
            }
            return Ok(());
        }

        let Some(edit) = self.pending_edit.take() else {
            return Ok(());
        };
        let mut text = edit.lines.join("\n");
        if !text.is_empty() {
            text.push('\n');
        }

        match self.session.save_section(edit.key, text) {
            Ok(()) => write_block(output, "Saved!").await,
            Err(e) => write_block(output, &e.to_string()).await,
        }
    }

    async fn speak<W: AsyncWrite + Unpin>(
        &self,
        reply: &str,
        output: &mut W,
    ) -> std::io::Result<()> {
        let Some(speaker) = &self.speaker else {
            return Ok(());
        };
        let spoken = clean_for_speech(reply);
        if let Err(e) = speaker.speak(&spoken).await {
            warn!(error = %e, "Voice playback failed");
            write_block(output, &format!("Voice playback failed: {e}")).await?;
        }
        Ok(())
    }
}

fn no_plan_message() -> &'static str {
    "No account plan yet. Start a research conversation to generate one."
}

async fn write_block<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> std::io::Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n\n").await?;
    output.flush().await
}
