//! Account plan renderings: structured JSON, a plain-text report, and the
//! markdown shown on screen.

use chrono::NaiveDateTime;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use super::AccountPlan;
use crate::error::ExportResult;

const RULE_WIDTH: usize = 70;
const REPORT_TITLE: &str = "COMPANY RESEARCH ACCOUNT PLAN";
const REPORT_END: &str = "END OF REPORT";

/// Placeholder printed for an empty section in the text report.
pub const NOT_AVAILABLE: &str = "Not available";

/// Pretty-printed JSON object of the ten sections, keys in display order.
pub fn to_json(plan: &AccountPlan) -> ExportResult<String> {
    Ok(serde_json::to_string_pretty(plan)?)
}

/// Plain-text report with banners and one delimited block per section.
pub fn to_narrative(plan: &AccountPlan, generated_at: NaiveDateTime) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "{REPORT_TITLE}");
    let _ = writeln!(out, "Generated: {}", generated_at.format("%Y-%m-%d %H:%M:%S"));
    let _ = writeln!(out, "{rule}\n");

    for (key, text) in plan.iter() {
        let body = match text.trim() {
            "" => NOT_AVAILABLE,
            trimmed => trimmed,
        };
        let _ = writeln!(out, "\n{rule}");
        let _ = writeln!(out, "{}", key.title().to_uppercase());
        let _ = writeln!(out, "{rule}\n");
        let _ = writeln!(out, "{body}\n");
    }

    let _ = writeln!(out, "\n{rule}");
    let _ = writeln!(out, "{REPORT_END}");
    let _ = writeln!(out, "{rule}");

    out
}

/// Numbered `##` headings with each section's text. An empty section is a
/// bare heading, so [`segment`](super::segment) reads it back as empty.
pub fn to_markdown(plan: &AccountPlan) -> String {
    to_markdown_with(plan, None)
}

/// Like [`to_markdown`] but prints `placeholder` under empty headings.
/// For display only; the placeholder does not survive re-segmenting.
pub fn to_markdown_with(plan: &AccountPlan, placeholder: Option<&str>) -> String {
    let mut out = String::new();
    for (n, (key, text)) in plan.iter().enumerate() {
        let _ = writeln!(out, "## {}. {}", n + 1, key.title());
        match (text.trim_end(), placeholder) {
            ("", Some(placeholder)) => {
                let _ = writeln!(out, "{placeholder}");
            }
            ("", None) => {}
            (body, _) => {
                let _ = writeln!(out, "{body}");
            }
        }
        out.push('\n');
    }
    out
}

/// Files produced by [`write_exports`].
#[derive(Debug, Clone)]
pub struct ExportPaths {
    pub json: PathBuf,
    pub text: PathBuf,
}

/// Base file name, `account_plan_YYYYmmdd_HHMMSS`.
pub fn export_stem(generated_at: NaiveDateTime) -> String {
    format!("account_plan_{}", generated_at.format("%Y%m%d_%H%M%S"))
}

/// Write both the JSON and text exports into `dir`, creating it if needed.
pub fn write_exports(
    plan: &AccountPlan,
    dir: &Path,
    generated_at: NaiveDateTime,
) -> ExportResult<ExportPaths> {
    fs::create_dir_all(dir)?;

    let stem = export_stem(generated_at);
    let paths = ExportPaths {
        json: dir.join(format!("{stem}.json")),
        text: dir.join(format!("{stem}.txt")),
    };

    fs::write(&paths.json, to_json(plan)?)?;
    fs::write(&paths.text, to_narrative(plan, generated_at))?;

    info!(
        json = %paths.json.display(),
        text = %paths.text.display(),
        "Account plan exported"
    );

    Ok(paths)
}
