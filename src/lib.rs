//! # Account Plan Assistant
//!
//! A conversational company research assistant. User messages are sent to a
//! hosted chat-completion model; replies that look like an account plan are
//! split into ten fixed sections that can be edited, regenerated, and
//! exported.
//!
//! ## Architecture
//!
//! ```text
//! stdin/stdout (repl) → ResearchSession → CompletionBackend → Groq API (HTTP)
//!                              ↓
//!                 plan::looks_like_plan / plan::segment
//!                              ↓
//!                     plan::export (JSON, text)
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use account_plan_assistant::{Config, Repl};
//! use account_plan_assistant::completion::GroqClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = GroqClient::new(&config.groq, config.request.clone())?;
//!     let mut repl = Repl::new(Arc::new(client), config.generation, config.export.dir);
//!     let stdin = tokio::io::BufReader::new(tokio::io::stdin());
//!     repl.run(stdin, tokio::io::stdout()).await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

/// Configuration management.
pub mod config;
/// Error types and result aliases for the application.
pub mod error;
/// Chat completion client and wire types.
pub mod completion;
/// Account plan model, classification, segmentation and export.
pub mod plan;
/// System prompts and instruction templates.
pub mod prompts;
/// Interactive command loop.
pub mod repl;
/// Sample user queries.
pub mod scenarios;
/// Research session state.
pub mod session;
/// Spoken reply support.
pub mod voice;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use plan::{looks_like_plan, segment, AccountPlan, SectionKey};
pub use repl::Repl;
pub use session::{ResearchNote, ResearchSession};
