//! Spoken replies for voice mode.
//!
//! Speech synthesis is an external capability; this module only prepares the
//! text and hands it to whatever implements [`SpeechPlayback`].

use async_trait::async_trait;
use std::io;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

/// Longest spoken text, in characters, before truncation.
pub const MAX_SPOKEN_CHARS: usize = 500;

const TRUNCATION_SUFFIX: &str = "... Full text visible above.";

/// Narrow playback interface over a text-to-speech engine.
#[async_trait]
pub trait SpeechPlayback: Send + Sync {
    /// Speak `text`, returning once playback has finished.
    async fn speak(&self, text: &str) -> io::Result<()>;
}

/// Strip markdown punctuation, collapse whitespace, and cap the length.
pub fn clean_for_speech(text: &str) -> String {
    let stripped: String = text
        .chars()
        .filter(|c| !matches!(c, '#' | '*' | '`' | '_' | '[' | ']' | '|'))
        .collect();
    let collapsed = stripped.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() > MAX_SPOKEN_CHARS {
        let mut truncated: String = collapsed.chars().take(MAX_SPOKEN_CHARS).collect();
        truncated.push_str(TRUNCATION_SUFFIX);
        truncated
    } else {
        collapsed
    }
}

/// Pipes text to an external program such as `espeak` or `say`.
#[derive(Debug, Clone)]
pub struct CommandSpeaker {
    program: String,
    args: Vec<String>,
}

impl CommandSpeaker {
    /// Parse a whitespace-separated command line. `None` when blank.
    pub fn from_command_line(command: &str) -> Option<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

#[async_trait]
impl SpeechPlayback for CommandSpeaker {
    async fn speak(&self, text: &str) -> io::Result<()> {
        debug!(program = %self.program, chars = text.len(), "Speaking reply");

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await?;
            stdin.shutdown().await?;
        }

        let status = child.wait().await?;
        if status.success() {
            Ok(())
        } else {
            Err(io::Error::new(
                io::ErrorKind::Other,
                format!("{} exited with {}", self.program, status),
            ))
        }
    }
}
