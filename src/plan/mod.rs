//! Account plan model and the heuristics that extract it from model replies.
//!
//! An [`AccountPlan`] always holds exactly the ten [`SectionKey`] sections;
//! an empty string stands for missing content.

mod classifier;
pub mod export;
mod segmenter;

pub use classifier::{looks_like_plan, PLAN_KEYWORDS, PLAN_KEYWORD_THRESHOLD};
pub use segmenter::segment;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::SessionError;

/// One of the ten fixed sections of an account plan, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    ExecutiveSummary,
    CompanyOverview,
    BusinessModel,
    MarketPosition,
    RecentNews,
    KeyStakeholders,
    PainPoints,
    Opportunities,
    EngagementStrategy,
    NextSteps,
}

impl SectionKey {
    /// Every key in declaration order.
    pub const ALL: [SectionKey; 10] = [
        SectionKey::ExecutiveSummary,
        SectionKey::CompanyOverview,
        SectionKey::BusinessModel,
        SectionKey::MarketPosition,
        SectionKey::RecentNews,
        SectionKey::KeyStakeholders,
        SectionKey::PainPoints,
        SectionKey::Opportunities,
        SectionKey::EngagementStrategy,
        SectionKey::NextSteps,
    ];

    /// Stable identifier used in structured exports.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKey::ExecutiveSummary => "executive_summary",
            SectionKey::CompanyOverview => "company_overview",
            SectionKey::BusinessModel => "business_model",
            SectionKey::MarketPosition => "market_position",
            SectionKey::RecentNews => "recent_news",
            SectionKey::KeyStakeholders => "key_stakeholders",
            SectionKey::PainPoints => "pain_points",
            SectionKey::Opportunities => "opportunities",
            SectionKey::EngagementStrategy => "engagement_strategy",
            SectionKey::NextSteps => "next_steps",
        }
    }

    /// Human-readable section title.
    pub fn title(self) -> &'static str {
        match self {
            SectionKey::ExecutiveSummary => "Executive Summary",
            SectionKey::CompanyOverview => "Company Overview",
            SectionKey::BusinessModel => "Business Model & Products/Services",
            SectionKey::MarketPosition => "Market Position & Competitors",
            SectionKey::RecentNews => "Recent News & Strategic Initiatives",
            SectionKey::KeyStakeholders => "Key Stakeholders & Decision Makers",
            SectionKey::PainPoints => "Pain Points & Challenges",
            SectionKey::Opportunities => "Opportunities & Recommendations",
            SectionKey::EngagementStrategy => "Engagement Strategy",
            SectionKey::NextSteps => "Next Steps",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKey {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        SectionKey::ALL
            .into_iter()
            .find(|key| key.as_str() == wanted)
            .ok_or_else(|| SessionError::UnknownSection { key: s.to_string() })
    }
}

/// A header phrase and the section it opens.
#[derive(Debug, Clone, Copy)]
pub struct HeaderMarker {
    pub phrase: &'static str,
    pub key: SectionKey,
    /// Line must also start with `#` or `**`, or contain `:`.
    pub requires_shape: bool,
}

/// Header phrases in match priority order; the first match on a line wins.
pub const HEADER_MARKERS: [HeaderMarker; 10] = [
    HeaderMarker {
        phrase: "executive summary",
        key: SectionKey::ExecutiveSummary,
        requires_shape: true,
    },
    HeaderMarker {
        phrase: "company overview",
        key: SectionKey::CompanyOverview,
        requires_shape: true,
    },
    HeaderMarker {
        phrase: "business model",
        key: SectionKey::BusinessModel,
        requires_shape: true,
    },
    HeaderMarker {
        phrase: "market position",
        key: SectionKey::MarketPosition,
        requires_shape: true,
    },
    HeaderMarker {
        phrase: "recent news",
        key: SectionKey::RecentNews,
        requires_shape: true,
    },
    HeaderMarker {
        phrase: "key stakeholders",
        key: SectionKey::KeyStakeholders,
        requires_shape: true,
    },
    HeaderMarker {
        phrase: "pain points",
        key: SectionKey::PainPoints,
        requires_shape: true,
    },
    HeaderMarker {
        phrase: "opportunities",
        key: SectionKey::Opportunities,
        requires_shape: true,
    },
    HeaderMarker {
        phrase: "engagement strategy",
        key: SectionKey::EngagementStrategy,
        requires_shape: true,
    },
    HeaderMarker {
        phrase: "next steps",
        key: SectionKey::NextSteps,
        requires_shape: true,
    },
];

/// Ten-section account plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(into = "BTreeMap<SectionKey, String>")]
pub struct AccountPlan {
    sections: [String; 10],
}

impl AccountPlan {
    /// Plan with every section empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of one section.
    pub fn get(&self, key: SectionKey) -> &str {
        &self.sections[key.index()]
    }

    /// Replace the text of one section.
    pub fn set(&mut self, key: SectionKey, text: impl Into<String>) {
        self.sections[key.index()] = text.into();
    }

    pub(crate) fn append(&mut self, key: SectionKey, text: &str) {
        self.sections[key.index()].push_str(text);
    }

    /// Sections in display order.
    pub fn iter(&self) -> impl Iterator<Item = (SectionKey, &str)> {
        SectionKey::ALL
            .into_iter()
            .map(move |key| (key, self.get(key)))
    }

    /// Number of sections with non-blank content.
    pub fn filled_sections(&self) -> usize {
        self.sections.iter().filter(|s| !s.trim().is_empty()).count()
    }
}

impl From<AccountPlan> for BTreeMap<SectionKey, String> {
    fn from(plan: AccountPlan) -> Self {
        SectionKey::ALL.into_iter().zip(plan.sections).collect()
    }
}
