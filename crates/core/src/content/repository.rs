//! The content repository: validated, immutable project records plus the
//! lookup queries renderers use.
//!
//! The repository is built once at startup and shared by reference. Lookups
//! are linear scans; the table holds tens of records.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::content::model::{Classification, ProjectRecord};
use crate::content::sections::SectionSchema;
use crate::error::CoreError;
use crate::types::ProjectId;

/// The site's own content table, compiled into the crate.
pub const EMBEDDED_CONTENT: &str = include_str!("../../content/projects.json");

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid regex"));

#[derive(Debug, Clone)]
pub struct ContentRepository {
    records: Vec<ProjectRecord>,
}

impl ContentRepository {
    /// Validate `records` and take ownership of them.
    pub fn new(records: Vec<ProjectRecord>) -> Result<Self, CoreError> {
        let mut ids: HashSet<ProjectId> = HashSet::new();
        let mut slugs: HashSet<&str> = HashSet::new();

        for record in &records {
            validate_record(record)?;
            if !ids.insert(record.id) {
                return Err(CoreError::Validation(format!(
                    "Duplicate project id {}",
                    record.id
                )));
            }
            if !slugs.insert(record.slug.as_str()) {
                return Err(CoreError::Validation(format!(
                    "Duplicate project slug '{}'",
                    record.slug
                )));
            }
        }

        Ok(Self { records })
    }

    /// Parse and validate a JSON array of project records.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let records: Vec<ProjectRecord> = serde_json::from_str(json)
            .map_err(|e| CoreError::Validation(format!("Invalid content table: {e}")))?;
        Self::new(records)
    }

    /// The compiled-in content table.
    pub fn embedded() -> Result<Self, CoreError> {
        Self::from_json(EMBEDDED_CONTENT)
    }

    /// Every record in display order.
    pub fn all(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&ProjectRecord> {
        self.records.iter().find(|r| r.slug == slug)
    }

    pub fn find_by_id(&self, id: ProjectId) -> Option<&ProjectRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Like [`find_by_slug`](Self::find_by_slug) but as a `NotFound` error.
    pub fn get_by_slug(&self, slug: &str) -> Result<&ProjectRecord, CoreError> {
        self.find_by_slug(slug).ok_or_else(|| CoreError::NotFound {
            entity: "Project",
            key: slug.to_string(),
        })
    }

    pub fn all_of_classification(&self, kind: Classification) -> Vec<&ProjectRecord> {
        self.records
            .iter()
            .filter(|r| r.classification == kind)
            .collect()
    }

    /// Records whose category matches exactly.
    pub fn in_category(&self, category: &str) -> Vec<&ProjectRecord> {
        self.records
            .iter()
            .filter(|r| r.category == category)
            .collect()
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|r| r.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a project slug: lowercase alphanumeric words joined by hyphens.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if !SLUG_RE.is_match(slug) {
        return Err(CoreError::Validation(format!(
            "Slug '{slug}' must be lowercase alphanumeric words separated by hyphens"
        )));
    }
    Ok(())
}

fn validate_record(record: &ProjectRecord) -> Result<(), CoreError> {
    let slug = &record.slug;

    if record.id == 0 {
        return Err(CoreError::Validation(format!(
            "Project '{slug}' must have a positive id"
        )));
    }
    validate_slug(slug)?;

    if record.title.trim().is_empty() {
        return Err(CoreError::Validation(format!(
            "Project '{slug}' must have a title"
        )));
    }
    if record.seo_meta.title.trim().is_empty() || record.seo_meta.description.trim().is_empty() {
        return Err(CoreError::Validation(format!(
            "Project '{slug}' must have an SEO title and description"
        )));
    }
    if !record.template.accepts(record.classification) {
        return Err(CoreError::Validation(format!(
            "Project '{slug}' uses template '{}' which cannot render a {} project",
            record.template,
            record.classification.as_str()
        )));
    }

    match record.classification {
        Classification::Showcase => {
            if record.sections.is_some() || record.section_content.is_some() {
                return Err(CoreError::Validation(format!(
                    "Showcase project '{slug}' must not define sections"
                )));
            }
        }
        Classification::CaseStudy => validate_schema_keys(record)?,
    }

    Ok(())
}

/// A case study may enable or populate keys from one section schema only.
fn validate_schema_keys(record: &ProjectRecord) -> Result<(), CoreError> {
    let owners: HashSet<SectionSchema> = record
        .schema_kinds()
        .into_iter()
        .filter_map(SectionSchema::exclusive_owner)
        .collect();

    if owners.len() > 1 {
        return Err(CoreError::Validation(format!(
            "Case study '{}' mixes keys from the detailed and compact section schemas",
            record.slug
        )));
    }
    Ok(())
}
