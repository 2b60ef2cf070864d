use super::{AccountPlan, SectionKey, HEADER_MARKERS};

/// Split a free-form markdown reply into the ten plan sections.
///
/// A line opens a section when it contains a header phrase and looks like a
/// header (see [`has_header_shape`]). Non-blank lines that mention no header
/// phrase are appended, untrimmed, to the open section. Lines before the
/// first header are dropped. Never fails; unrecognized layouts simply leave
/// sections empty.
pub fn segment(text: &str) -> AccountPlan {
    let mut plan = AccountPlan::new();
    let mut current: Option<SectionKey> = None;

    for line in text.split('\n') {
        let trimmed = line.trim();
        let lowered = trimmed.to_lowercase();

        if let Some(key) = header_key(trimmed, &lowered) {
            current = Some(key);
        }

        let Some(key) = current else {
            continue;
        };

        if !trimmed.is_empty() && !mentions_header_phrase(&lowered) {
            plan.append(key, line);
            plan.append(key, "\n");
        }
    }

    plan
}

/// Section opened by this line, if it is a header. First marker wins.
fn header_key(trimmed: &str, lowered: &str) -> Option<SectionKey> {
    HEADER_MARKERS
        .iter()
        .find(|marker| {
            lowered.contains(marker.phrase) && (!marker.requires_shape || has_header_shape(trimmed))
        })
        .map(|marker| marker.key)
}

/// Heading marker, bold marker, or a colon anywhere on the line.
fn has_header_shape(trimmed: &str) -> bool {
    trimmed.starts_with('#') || trimmed.starts_with("**") || trimmed.contains(':')
}

fn mentions_header_phrase(lowered: &str) -> bool {
    HEADER_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker.phrase))
}
