use std::path::PathBuf;

use crate::plan::SectionKey;

/// A slash command typed at the prompt.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum Command {
    Help,
    Plan,
    Section(SectionKey),
    Edit(SectionKey),
    Enhance(SectionKey),
    /// Target directory; the configured export dir when absent.
    Export(Option<PathBuf>),
    Notes,
    Voice,
    Reset,
    Quit,
}

/// Shown by `/help`.
pub const HELP_TEXT: &str = "\
Type a message to chat with the research assistant. Start it with '//' to send
a message that begins with '/'. Commands:
  /plan               show the current account plan
  /section <key>      show one section
  /edit <key>         replace a section; finish with a line containing only '.'
  /enhance <key>      ask the assistant to improve a section
  /export [dir]       write JSON and text exports
  /notes              show recent research activity
  /voice              toggle spoken replies
  /reset              start a new research session
  /quit               exit
Section keys: executive_summary, company_overview, business_model, market_position,
  recent_news, key_stakeholders, pain_points, opportunities, engagement_strategy, next_steps";

impl Command {
    /// Parse a line starting with `/`. `None` for ordinary chat text,
    /// `Some(Err(_))` for a malformed command.
    pub fn parse(line: &str) -> Option<Result<Command, String>> {
        let rest = line.trim().strip_prefix('/')?;
        if rest.starts_with('/') {
            return None;
        }
        let mut parts = rest.splitn(2, char::is_whitespace);
        let name = parts.next().unwrap_or_default().to_ascii_lowercase();
        let arg = parts.next().map(str::trim).filter(|a| !a.is_empty());

        let parsed = match name.as_str() {
            "help" | "?" => Ok(Command::Help),
            "plan" => Ok(Command::Plan),
            "section" | "show" => section_arg(&name, arg).map(Command::Section),
            "edit" | "save" => section_arg(&name, arg).map(Command::Edit),
            "enhance" => section_arg(&name, arg).map(Command::Enhance),
            "export" => Ok(Command::Export(arg.map(PathBuf::from))),
            "notes" => Ok(Command::Notes),
            "voice" => Ok(Command::Voice),
            "reset" | "new" => Ok(Command::Reset),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(format!("Unknown command: /{other}. Type /help for commands.")),
        };
        Some(parsed)
    }
}

/// Chat text for a non-command line: a leading `//` is sent as a single `/`.
pub fn chat_text(line: &str) -> &str {
    line.trim_start()
        .strip_prefix('/')
        .filter(|rest| rest.starts_with('/'))
        .unwrap_or(line)
}

fn section_arg(command: &str, arg: Option<&str>) -> Result<SectionKey, String> {
    let arg = arg.ok_or_else(|| format!("Usage: /{command} <section_key>"))?;
    arg.parse::<SectionKey>().map_err(|e| e.to_string())
}
