//! Research session state: conversation history, the current account plan
//! and the activity log.
//!
//! A session is owned by the interaction loop and mutated by one caller at a
//! time. [`ResearchSession::reset`] swaps in a fresh session instead of
//! clearing fields one by one.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::completion::{self, CompletionBackend, ConversationTurn};
use crate::config::GenerationConfig;
use crate::error::{SessionError, SessionResult};
use crate::plan::{looks_like_plan, segment, AccountPlan, SectionKey};
use crate::prompts::RESEARCH_SYSTEM_PROMPT;

/// How many notes the activity panel shows.
pub const RECENT_NOTES: usize = 5;

/// Characters of the user's message quoted in the research note.
const NOTE_PREVIEW_CHARS: usize = 40;

/// A timestamped activity log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchNote {
    /// When the action happened.
    pub timestamp: DateTime<Local>,
    /// Human-readable description.
    pub action: String,
}

impl ResearchNote {
    /// Create a note stamped with the current wall-clock time.
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            action: action.into(),
        }
    }

    /// Time of day, `HH:MM:SS`.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

/// Result of one chat turn.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    /// Text appended to the conversation as the assistant's reply.
    pub reply: String,
    /// The reply was recognized as an account plan and replaced the current one.
    pub plan_created: bool,
    /// Rendered completion error when `reply` is the fallback.
    pub error: Option<String>,
}

/// State of one interactive research session.
#[derive(Debug, Clone)]
pub struct ResearchSession {
    id: Uuid,
    history: Vec<ConversationTurn>,
    plan: Option<AccountPlan>,
    notes: Vec<ResearchNote>,
}

impl Default for ResearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ResearchSession {
    /// Start an empty session.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            history: Vec::new(),
            plan: None,
            notes: Vec::new(),
        }
    }

    /// Identifier used in log fields.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Conversation so far, oldest first.
    pub fn history(&self) -> &[ConversationTurn] {
        &self.history
    }

    /// Current plan, once a reply has been recognized as one.
    pub fn plan(&self) -> Option<&AccountPlan> {
        self.plan.as_ref()
    }

    /// Every note, oldest first.
    pub fn notes(&self) -> &[ResearchNote] {
        &self.notes
    }

    /// The last [`RECENT_NOTES`] notes, oldest first.
    pub fn recent_notes(&self) -> &[ResearchNote] {
        let start = self.notes.len().saturating_sub(RECENT_NOTES);
        &self.notes[start..]
    }

    /// Append an entry to the activity log.
    pub fn add_note(&mut self, action: impl Into<String>) {
        let note = ResearchNote::new(action);
        debug!(session_id = %self.id, action = %note.action, "Research note");
        self.notes.push(note);
    }

    /// Replace the whole session with a fresh one.
    pub fn reset(&mut self) {
        let previous = self.id;
        *self = Self::new();
        self.add_note("Started new research session");
        info!(previous = %previous, session_id = %self.id, "Research session reset");
    }

    /// Send a user message and record the reply.
    ///
    /// Completion failures do not propagate: the fallback reply is appended
    /// and the error is logged as a note and returned in the outcome.
    pub async fn submit(
        &mut self,
        backend: &dyn CompletionBackend,
        generation: &GenerationConfig,
        user_message: &str,
    ) -> TurnOutcome {
        self.add_note(format!("Researching: {}...", preview(user_message)));

        let completion = completion::complete(
            backend,
            generation,
            RESEARCH_SYSTEM_PROMPT,
            &self.history,
            user_message,
        )
        .await;

        self.history.push(ConversationTurn::user(user_message));
        self.history
            .push(ConversationTurn::assistant(completion.text.clone()));

        if let Some(e) = completion.error {
            self.add_note(format!("Error occurred: {e}"));
            return TurnOutcome {
                reply: completion.text,
                plan_created: false,
                error: Some(e.to_string()),
            };
        }

        let plan_created = looks_like_plan(&completion.text);
        if plan_created {
            let plan = segment(&completion.text);
            info!(
                session_id = %self.id,
                filled = plan.filled_sections(),
                "Account plan extracted from reply"
            );
            self.plan = Some(plan);
            self.add_note("Account plan created successfully");
        }

        TurnOutcome {
            reply: completion.text,
            plan_created,
            error: None,
        }
    }

    /// Overwrite one section with manually edited text.
    pub fn save_section(&mut self, key: SectionKey, text: impl Into<String>) -> SessionResult<()> {
        let plan = self.plan.as_mut().ok_or(SessionError::NoPlan)?;
        plan.set(key, text);
        self.add_note(format!("Updated {}", key.title()));
        Ok(())
    }

    /// Regenerate one section through the model. On failure the section is
    /// left untouched.
    pub async fn enhance_section(
        &mut self,
        backend: &dyn CompletionBackend,
        generation: &GenerationConfig,
        key: SectionKey,
    ) -> SessionResult<&str> {
        let current = self
            .plan
            .as_ref()
            .ok_or(SessionError::NoPlan)?
            .get(key)
            .to_string();

        match completion::enhance(backend, generation, &current, key.title()).await {
            Ok(enhanced) => {
                self.add_note(format!("Enhanced {}", key.title()));
                let plan = self.plan.as_mut().ok_or(SessionError::NoPlan)?;
                plan.set(key, enhanced);
                Ok(plan.get(key))
            }
            Err(e) => {
                warn!(session_id = %self.id, section = %key, error = %e, "Enhance failed");
                self.add_note(format!("Error enhancing {}: {e}", key.title()));
                Err(SessionError::Enhance(e))
            }
        }
    }
}

fn preview(message: &str) -> String {
    message.chars().take(NOTE_PREVIEW_CHARS).collect()
}
