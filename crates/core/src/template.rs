//! Template selection and the page-load contract.
//!
//! The current page is described by a [`PageLocation`]. Loading resolves the
//! `slug` query parameter, looks the project up, and either yields a
//! [`PageIntent`] to render, a [`RedirectTo`] when the project belongs on a
//! different template page, or a terminal [`LoadError`].

use std::fmt;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::content::model::{Classification, ProjectRecord};
use crate::content::repository::ContentRepository;

/// Query parameter carrying the project slug.
pub const SLUG_PARAM: &str = "slug";

pub const TEMPLATE_CASE_STUDY_DEFAULT: &str = "case-study-default";
pub const TEMPLATE_CASE_STUDY_VISUAL: &str = "case-study-visual";
pub const TEMPLATE_CASE_STUDY_DEEP: &str = "case-study-deep";
pub const TEMPLATE_PROJECT_SHOWCASE: &str = "project-showcase";

// ---------------------------------------------------------------------------
// Template names
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateName {
    CaseStudyDefault,
    CaseStudyVisual,
    CaseStudyDeep,
    ProjectShowcase,
}

/// All templates, in detection order.
pub const ALL_TEMPLATES: &[TemplateName] = &[
    TemplateName::CaseStudyDefault,
    TemplateName::CaseStudyVisual,
    TemplateName::CaseStudyDeep,
    TemplateName::ProjectShowcase,
];

impl TemplateName {
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        ALL_TEMPLATES
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = ALL_TEMPLATES.iter().map(|t| t.as_str()).collect();
                format!("Invalid template '{s}'. Must be one of: {}", valid.join(", "))
            })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CaseStudyDefault => TEMPLATE_CASE_STUDY_DEFAULT,
            Self::CaseStudyVisual => TEMPLATE_CASE_STUDY_VISUAL,
            Self::CaseStudyDeep => TEMPLATE_CASE_STUDY_DEEP,
            Self::ProjectShowcase => TEMPLATE_PROJECT_SHOWCASE,
        }
    }

    pub fn is_case_study(&self) -> bool {
        !matches!(self, Self::ProjectShowcase)
    }

    /// Whether this template can render records of `classification`.
    pub fn accepts(&self, classification: Classification) -> bool {
        match classification {
            Classification::CaseStudy => self.is_case_study(),
            Classification::Showcase => !self.is_case_study(),
        }
    }

    /// Page file name under the projects directory.
    pub fn file_name(&self) -> String {
        format!("{}.html", self.as_str())
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// Path and query of the page being rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    pub path: String,
    pub query: Option<String>,
}

impl PageLocation {
    pub fn new(path: impl Into<String>, query: Option<String>) -> Self {
        Self {
            path: path.into(),
            query,
        }
    }

    /// Split `"/projects/x.html?slug=y"` into path and query.
    pub fn parse(href: &str) -> Self {
        let href = href.split('#').next().unwrap_or_default();
        match href.split_once('?') {
            Some((path, query)) => Self::new(path, Some(query.to_string())),
            None => Self::new(href, None),
        }
    }

    /// First value of a query parameter, percent-decoded.
    pub fn query_param(&self, name: &str) -> Option<String> {
        let query = self.query.as_deref()?;
        form_urlencoded::parse(query.as_bytes())
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    }
}

/// The template the current page is, judged by its path.
pub fn detect_current_template(location: &PageLocation) -> Option<TemplateName> {
    ALL_TEMPLATES
        .iter()
        .copied()
        .find(|t| location.path.contains(t.as_str()))
}

/// The project slug carried by the page URL, taken verbatim. Empty values
/// count as absent.
pub fn resolve_slug(location: &PageLocation) -> Option<String> {
    location
        .query_param(SLUG_PARAM)
        .filter(|s| !s.is_empty())
}

// ---------------------------------------------------------------------------
// Load contract
// ---------------------------------------------------------------------------

/// Terminal page-load failures. Both render the "not found" state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("No project slug in URL")]
    MissingSlug,

    #[error("Project \"{0}\" not found")]
    UnknownProject(String),
}

/// Where a mislinked page should send the visitor instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTo {
    pub template: TemplateName,
    pub slug: String,
}

impl RedirectTo {
    /// Target relative to the projects directory,
    /// e.g. `project-showcase.html?slug=crypto-dashboard`.
    pub fn href(&self) -> String {
        let query: String = form_urlencoded::Serializer::new(String::new())
            .append_pair(SLUG_PARAM, &self.slug)
            .finish();
        format!("{}?{query}", self.template.file_name())
    }
}

/// A project confirmed to be on its own template page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageIntent<'a> {
    CaseStudy {
        record: &'a ProjectRecord,
        template: TemplateName,
    },
    Showcase {
        record: &'a ProjectRecord,
    },
}

impl<'a> PageIntent<'a> {
    pub fn record(&self) -> &'a ProjectRecord {
        match self {
            Self::CaseStudy { record, .. } | Self::Showcase { record } => record,
        }
    }

    pub fn template(&self) -> TemplateName {
        match self {
            Self::CaseStudy { template, .. } => *template,
            Self::Showcase { .. } => TemplateName::ProjectShowcase,
        }
    }
}

/// Check that `record` is being shown on its declared template.
pub fn select_template<'a>(
    record: &'a ProjectRecord,
    current: Option<TemplateName>,
) -> Result<PageIntent<'a>, RedirectTo> {
    if current != Some(record.template) {
        return Err(RedirectTo {
            template: record.template,
            slug: record.slug.clone(),
        });
    }

    Ok(match record.classification {
        Classification::CaseStudy => PageIntent::CaseStudy {
            record,
            template: record.template,
        },
        Classification::Showcase => PageIntent::Showcase { record },
    })
}

/// Resolve the slug and find its record.
pub fn lookup<'a>(
    repo: &'a ContentRepository,
    location: &PageLocation,
) -> Result<&'a ProjectRecord, LoadError> {
    let slug = resolve_slug(location).ok_or(LoadError::MissingSlug)?;
    repo.find_by_slug(&slug)
        .ok_or(LoadError::UnknownProject(slug))
}

/// Result of the top-level load step.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome<'a> {
    Render(PageIntent<'a>),
    Redirect(RedirectTo),
    NotFound(LoadError),
}

/// Run the full load contract for a page location.
pub fn load<'a>(repo: &'a ContentRepository, location: &PageLocation) -> LoadOutcome<'a> {
    let record = match lookup(repo, location) {
        Ok(record) => record,
        Err(err) => {
            match &err {
                LoadError::MissingSlug => tracing::debug!(path = %location.path, "No project slug in URL"),
                LoadError::UnknownProject(slug) => {
                    tracing::warn!(slug = %slug, path = %location.path, "Unknown project slug")
                }
            }
            return LoadOutcome::NotFound(err);
        }
    };

    let current = detect_current_template(location);
    match select_template(record, current) {
        Ok(intent) => LoadOutcome::Render(intent),
        Err(redirect) => {
            tracing::warn!(
                slug = %record.slug,
                declared = %record.template,
                current = ?current.map(|t| t.as_str()),
                "Template mismatch, redirecting"
            );
            LoadOutcome::Redirect(redirect)
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn repo() -> ContentRepository {
        ContentRepository::embedded().expect("embedded content is valid")
    }

    #[test]
    fn template_names_round_trip() {
        for t in ALL_TEMPLATES {
            assert_eq!(TemplateName::from_str_value(t.as_str()), Ok(*t));
        }
        assert!(TemplateName::from_str_value("case-study").is_err());
    }

    #[test]
    fn template_accepts_matching_classification_only() {
        assert!(TemplateName::CaseStudyDeep.accepts(Classification::CaseStudy));
        assert!(!TemplateName::CaseStudyDeep.accepts(Classification::Showcase));
        assert!(TemplateName::ProjectShowcase.accepts(Classification::Showcase));
    }

    #[test]
    fn detects_template_from_path() {
        let loc = PageLocation::parse("/projects/case-study-visual.html?slug=x");
        assert_eq!(detect_current_template(&loc), Some(TemplateName::CaseStudyVisual));
        let loc = PageLocation::parse("/projects/project-showcase.html");
        assert_eq!(detect_current_template(&loc), Some(TemplateName::ProjectShowcase));
        let loc = PageLocation::parse("/projects/about.html");
        assert_eq!(detect_current_template(&loc), None);
    }

    #[test]
    fn resolve_slug_decodes_and_ignores_empty() {
        let loc = PageLocation::parse("/p.html?x=1&slug=call%20app");
        assert_eq!(resolve_slug(&loc).as_deref(), Some("call app"));
        assert_eq!(resolve_slug(&PageLocation::parse("/p.html?slug=")), None);
        assert_eq!(resolve_slug(&PageLocation::parse("/p.html")), None);
    }

    #[test]
    fn slug_whitespace_is_kept() {
        let loc = PageLocation::parse("/p.html?slug=%20crypto-dashboard%20");
        assert_eq!(resolve_slug(&loc).as_deref(), Some(" crypto-dashboard "));

        let loc = PageLocation::parse("/projects/project-showcase.html?slug=%20crypto-dashboard%20");
        assert_matches!(
            load(&repo(), &loc),
            LoadOutcome::NotFound(LoadError::UnknownProject(slug)) if slug == " crypto-dashboard "
        );
    }

    #[test]
    fn parse_drops_fragment() {
        let loc = PageLocation::parse("/p.html?slug=a#top");
        assert_eq!(loc.query.as_deref(), Some("slug=a"));
    }

    #[test]
    fn redirect_href_carries_slug() {
        let redirect = RedirectTo {
            template: TemplateName::ProjectShowcase,
            slug: "crypto-dashboard".into(),
        };
        assert_eq!(redirect.href(), "project-showcase.html?slug=crypto-dashboard");
    }

    #[test]
    fn missing_slug_is_not_found() {
        let loc = PageLocation::parse("/projects/case-study-default.html");
        assert_matches!(load(&repo(), &loc), LoadOutcome::NotFound(LoadError::MissingSlug));
    }

    #[test]
    fn unknown_slug_is_not_found() {
        let loc = PageLocation::parse("/projects/case-study-default.html?slug=does-not-exist");
        assert_matches!(
            load(&repo(), &loc),
            LoadOutcome::NotFound(LoadError::UnknownProject(slug)) if slug == "does-not-exist"
        );
    }

    #[test]
    fn mismatched_template_redirects_with_same_slug() {
        let loc = PageLocation::parse("/projects/case-study-default.html?slug=crypto-dashboard");
        assert_matches!(
            load(&repo(), &loc),
            LoadOutcome::Redirect(RedirectTo { template: TemplateName::ProjectShowcase, slug })
                if slug == "crypto-dashboard"
        );
    }

    #[test]
    fn unknown_page_redirects() {
        let loc = PageLocation::parse("/projects/index.html?slug=call-recording-app");
        assert_matches!(load(&repo(), &loc), LoadOutcome::Redirect(_));
    }

    #[test]
    fn matching_template_renders() {
        let repo = repo();
        let loc = PageLocation::parse("/projects/case-study-default.html?slug=call-recording-app");
        let outcome = load(&repo, &loc);
        assert_matches!(outcome, LoadOutcome::Render(PageIntent::CaseStudy { record, .. })
            if record.slug == "call-recording-app");

        let loc = PageLocation::parse("/projects/project-showcase.html?slug=christmas-ui");
        assert_matches!(load(&repo, &loc), LoadOutcome::Render(PageIntent::Showcase { .. }));
    }
}
