//! Case-study section kinds, schemas, toggles and typed content blobs.
//!
//! Two section schemas are in use. The detailed schema splits a case study
//! into ten sections; the compact schema uses six coarser ones. A record
//! uses one schema, identified by which keys it populates. Shapes that vary
//! within a kind (goals, strategy) carry an explicit `"shape"` discriminant.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::layout::ImageLayout;
use crate::markup::TrustedMarkup;

// ---------------------------------------------------------------------------
// Section kinds and schemas
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    Overview,
    Problem,
    Goals,
    Research,
    Strategy,
    Wireframes,
    FinalDesign,
    UxDecisions,
    Impact,
    Learnings,
    CompetitiveAnalysis,
    UserFlow,
    HighFidelity,
    Outcomes,
}

impl SectionKind {
    /// Key used in content files and CSS class names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Problem => "problem",
            Self::Goals => "goals",
            Self::Research => "research",
            Self::Strategy => "strategy",
            Self::Wireframes => "wireframes",
            Self::FinalDesign => "finalDesign",
            Self::UxDecisions => "uxDecisions",
            Self::Impact => "impact",
            Self::Learnings => "learnings",
            Self::CompetitiveAnalysis => "competitiveAnalysis",
            Self::UserFlow => "userFlow",
            Self::HighFidelity => "highFidelity",
            Self::Outcomes => "outcomes",
        }
    }

    /// Look up a kind by its content-file key.
    pub fn from_key(key: &str) -> Option<Self> {
        ALL_KINDS.iter().copied().find(|k| k.as_str() == key)
    }

    /// Kinds that lay out their own title and skip the generic section header.
    pub fn renders_own_header(&self) -> bool {
        matches!(self, Self::Overview | Self::Impact | Self::Outcomes)
    }
}

/// Ten-section case-study order.
pub const DETAILED_ORDER: &[SectionKind] = &[
    SectionKind::Overview,
    SectionKind::Problem,
    SectionKind::Goals,
    SectionKind::Research,
    SectionKind::Strategy,
    SectionKind::Wireframes,
    SectionKind::FinalDesign,
    SectionKind::UxDecisions,
    SectionKind::Impact,
    SectionKind::Learnings,
];

/// Six-section case-study order.
pub const COMPACT_ORDER: &[SectionKind] = &[
    SectionKind::Overview,
    SectionKind::CompetitiveAnalysis,
    SectionKind::UserFlow,
    SectionKind::Wireframes,
    SectionKind::HighFidelity,
    SectionKind::Outcomes,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionSchema {
    Detailed,
    Compact,
}

impl SectionSchema {
    /// Fixed render order for this schema.
    pub fn order(&self) -> &'static [SectionKind] {
        match self {
            Self::Detailed => DETAILED_ORDER,
            Self::Compact => COMPACT_ORDER,
        }
    }

    /// The schema a kind belongs to exclusively, or `None` for shared kinds.
    pub fn exclusive_owner(kind: SectionKind) -> Option<SectionSchema> {
        let in_detailed = DETAILED_ORDER.contains(&kind);
        let in_compact = COMPACT_ORDER.contains(&kind);
        match (in_detailed, in_compact) {
            (true, false) => Some(Self::Detailed),
            (false, true) => Some(Self::Compact),
            _ => None,
        }
    }

    /// Infer the schema from the kinds a record mentions. Any compact-only
    /// key selects the compact schema; everything else is detailed.
    pub fn detect(kinds: impl IntoIterator<Item = SectionKind>) -> SectionSchema {
        let compact = kinds
            .into_iter()
            .any(|k| Self::exclusive_owner(k) == Some(Self::Compact));
        if compact {
            Self::Compact
        } else {
            Self::Detailed
        }
    }
}

// ---------------------------------------------------------------------------
// Toggles
// ---------------------------------------------------------------------------

/// Per-kind enabled flags. Kinds not listed are disabled.
///
/// Keys that name no section kind are skipped with a warning when
/// deserializing, so a stray flag never fails the content table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SectionToggles(BTreeMap<SectionKind, bool>);

impl SectionToggles {
    pub fn is_enabled(&self, kind: SectionKind) -> bool {
        self.0.get(&kind).copied().unwrap_or(false)
    }

    /// Kinds whose flag is set to `true`.
    pub fn enabled_kinds(&self) -> impl Iterator<Item = SectionKind> + '_ {
        self.0
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(kind, _)| *kind)
    }
}

impl<'de> Deserialize<'de> for SectionToggles {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, bool>::deserialize(deserializer)?;
        let mut toggles = BTreeMap::new();
        for (key, enabled) in raw {
            match SectionKind::from_key(&key) {
                Some(kind) => {
                    toggles.insert(kind, enabled);
                }
                None => tracing::warn!(key = %key, "Ignoring unknown section toggle"),
            }
        }
        Ok(Self(toggles))
    }
}

impl FromIterator<(SectionKind, bool)> for SectionToggles {
    fn from_iter<I: IntoIterator<Item = (SectionKind, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ---------------------------------------------------------------------------
// Content blobs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OverviewContent {
    pub title: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsibilities: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(default)]
    pub layout: ImageLayout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProblemContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<TrustedMarkup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TrustedMarkup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GoalCategory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "camelCase")]
pub enum GoalsContent {
    /// Cards of goals grouped under a heading and icon.
    Categorized {
        #[serde(default)]
        title: Option<String>,
        categories: Vec<GoalCategory>,
    },
    /// A single unlabeled list.
    Flat {
        #[serde(default)]
        title: Option<String>,
        items: Vec<String>,
    },
}

/// Research, wireframes, final design and the compact schema's image-led
/// sections all share this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageSectionContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub layout: ImageLayout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StrategyItem {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "camelCase")]
pub enum StrategyContent {
    Numbered {
        #[serde(default)]
        title: Option<String>,
        items: Vec<StrategyItem>,
    },
    Prose {
        #[serde(default)]
        title: Option<String>,
        text: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UxDecision {
    pub title: String,
    pub text: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UxDecisionsContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub items: Vec<UxDecision>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Metric {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
}

/// Impact (detailed schema) and outcomes (compact schema).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResultsContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default)]
    pub metrics: Vec<Metric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testimonial: Option<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LearningsContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub items: Vec<String>,
}

/// Per-kind content for a case study. Absent kinds are simply not rendered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SectionContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<OverviewContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem: Option<ProblemContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<GoalsContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub research: Option<ImageSectionContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<StrategyContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wireframes: Option<ImageSectionContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_design: Option<ImageSectionContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ux_decisions: Option<UxDecisionsContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<ResultsContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learnings: Option<LearningsContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competitive_analysis: Option<ImageSectionContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_flow: Option<ImageSectionContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_fidelity: Option<ImageSectionContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcomes: Option<ResultsContent>,
}

/// Borrowed view of one section's content, tagged by builder family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SectionBlob<'a> {
    Overview(&'a OverviewContent),
    Problem(&'a ProblemContent),
    Goals(&'a GoalsContent),
    Images(&'a ImageSectionContent),
    Strategy(&'a StrategyContent),
    UxDecisions(&'a UxDecisionsContent),
    Results(&'a ResultsContent),
    Learnings(&'a LearningsContent),
}

impl SectionBlob<'_> {
    /// Title for the generic section header.
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Overview(c) => Some(c.title.as_str()),
            Self::Problem(_) => None,
            Self::Goals(GoalsContent::Categorized { title, .. })
            | Self::Goals(GoalsContent::Flat { title, .. }) => title.as_deref(),
            Self::Images(c) => c.title.as_deref(),
            Self::Strategy(StrategyContent::Numbered { title, .. })
            | Self::Strategy(StrategyContent::Prose { title, .. }) => title.as_deref(),
            Self::UxDecisions(c) => c.title.as_deref(),
            Self::Results(c) => c.title.as_deref(),
            Self::Learnings(c) => c.title.as_deref(),
        }
    }

    /// Description for the generic section header.
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Images(c) => c.description.as_deref(),
            _ => None,
        }
    }
}

impl SectionContent {
    /// Content for `kind`, if the record supplies any.
    pub fn blob(&self, kind: SectionKind) -> Option<SectionBlob<'_>> {
        match kind {
            SectionKind::Overview => self.overview.as_ref().map(SectionBlob::Overview),
            SectionKind::Problem => self.problem.as_ref().map(SectionBlob::Problem),
            SectionKind::Goals => self.goals.as_ref().map(SectionBlob::Goals),
            SectionKind::Research => self.research.as_ref().map(SectionBlob::Images),
            SectionKind::Strategy => self.strategy.as_ref().map(SectionBlob::Strategy),
            SectionKind::Wireframes => self.wireframes.as_ref().map(SectionBlob::Images),
            SectionKind::FinalDesign => self.final_design.as_ref().map(SectionBlob::Images),
            SectionKind::UxDecisions => self.ux_decisions.as_ref().map(SectionBlob::UxDecisions),
            SectionKind::Impact => self.impact.as_ref().map(SectionBlob::Results),
            SectionKind::Learnings => self.learnings.as_ref().map(SectionBlob::Learnings),
            SectionKind::CompetitiveAnalysis => {
                self.competitive_analysis.as_ref().map(SectionBlob::Images)
            }
            SectionKind::UserFlow => self.user_flow.as_ref().map(SectionBlob::Images),
            SectionKind::HighFidelity => self.high_fidelity.as_ref().map(SectionBlob::Images),
            SectionKind::Outcomes => self.outcomes.as_ref().map(SectionBlob::Results),
        }
    }

    /// Kinds with content present, in enum order.
    pub fn populated_kinds(&self) -> Vec<SectionKind> {
        ALL_KINDS
            .iter()
            .copied()
            .filter(|k| self.blob(*k).is_some())
            .collect()
    }
}

/// Every section kind across both schemas.
pub const ALL_KINDS: &[SectionKind] = &[
    SectionKind::Overview,
    SectionKind::Problem,
    SectionKind::Goals,
    SectionKind::Research,
    SectionKind::Strategy,
    SectionKind::Wireframes,
    SectionKind::FinalDesign,
    SectionKind::UxDecisions,
    SectionKind::Impact,
    SectionKind::Learnings,
    SectionKind::CompetitiveAnalysis,
    SectionKind::UserFlow,
    SectionKind::HighFidelity,
    SectionKind::Outcomes,
];
