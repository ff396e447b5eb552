//! Project record types.

use serde::{Deserialize, Serialize};

use crate::content::sections::{SectionContent, SectionKind, SectionToggles};
use crate::template::TemplateName;
use crate::types::{ProjectId, EM_DASH};

pub const CLASSIFICATION_CASE_STUDY: &str = "case-study";
pub const CLASSIFICATION_SHOWCASE: &str = "showcase";

/// Which rendering pipeline a project uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Classification {
    /// Multi-section case study page.
    CaseStudy,
    /// Single fixed layout: hero, meta, gallery.
    Showcase,
}

impl Classification {
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            CLASSIFICATION_CASE_STUDY => Ok(Self::CaseStudy),
            CLASSIFICATION_SHOWCASE => Ok(Self::Showcase),
            _ => Err(format!(
                "Invalid classification '{s}'. Must be one of: {CLASSIFICATION_CASE_STUDY}, {CLASSIFICATION_SHOWCASE}"
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CaseStudy => CLASSIFICATION_CASE_STUDY,
            Self::Showcase => CLASSIFICATION_SHOWCASE,
        }
    }
}

/// Page metadata written into `<title>` and the description/Open Graph tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoMeta {
    pub title: String,
    pub description: String,
}

/// External portfolio network a project is also published on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    Behance,
    Dribbble,
}

impl LinkKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Behance => "Behance",
            Self::Dribbble => "Dribbble",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Behance => "behance",
            Self::Dribbble => "dribbble",
        }
    }

    /// Call-to-action text, e.g. "View on Behance".
    pub fn cta_label(&self) -> String {
        format!("View on {}", self.label())
    }
}

/// Optional links to the same project on external networks. `null` and
/// missing entries are equivalent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalLinks {
    #[serde(default)]
    pub behance: Option<String>,
    #[serde(default)]
    pub dribbble: Option<String>,
}

impl ExternalLinks {
    /// Present, non-blank links in display order.
    pub fn present(&self) -> Vec<(LinkKind, &str)> {
        [
            (LinkKind::Behance, self.behance.as_deref()),
            (LinkKind::Dribbble, self.dribbble.as_deref()),
        ]
        .into_iter()
        .filter_map(|(kind, url)| match url {
            Some(u) if !u.trim().is_empty() => Some((kind, u)),
            _ => None,
        })
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.present().is_empty()
    }
}

/// One portfolio project. Constructed once when the content table loads and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub slug: String,
    pub title: String,
    pub category: String,
    pub short_description: String,
    pub classification: Classification,
    pub template: TemplateName,
    pub hero_image: String,
    #[serde(default)]
    pub gallery_images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(default)]
    pub external_links: ExternalLinks,
    pub seo_meta: SeoMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<SectionToggles>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_content: Option<SectionContent>,
}

/// Free-text metadata fields shown as pills on detail pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaField {
    Role,
    Platform,
    Timeline,
    Team,
}

impl MetaField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Role => "Role",
            Self::Platform => "Platform",
            Self::Timeline => "Timeline",
            Self::Team => "Team",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Role => "role",
            Self::Platform => "platform",
            Self::Timeline => "timeline",
            Self::Team => "team",
        }
    }
}

impl ProjectRecord {
    pub fn is_case_study(&self) -> bool {
        self.classification == Classification::CaseStudy
    }

    /// Kinds that identify the record's section schema: enabled toggles and
    /// populated content. Disabled toggles do not count.
    pub fn schema_kinds(&self) -> Vec<SectionKind> {
        let mut kinds = Vec::new();
        if let Some(toggles) = &self.sections {
            kinds.extend(toggles.enabled_kinds());
        }
        if let Some(content) = &self.section_content {
            kinds.extend(content.populated_kinds());
        }
        kinds
    }

    /// The value of a metadata field, treating blank strings as absent.
    pub fn meta(&self, field: MetaField) -> Option<&str> {
        let value = match field {
            MetaField::Role => &self.role,
            MetaField::Platform => &self.platform,
            MetaField::Timeline => &self.timeline,
            MetaField::Team => &self.team,
        };
        value.as_deref().filter(|v| !v.trim().is_empty())
    }

    /// The value of a metadata field, or an em-dash when absent.
    pub fn meta_or_dash(&self, field: MetaField) -> &str {
        self.meta(field).unwrap_or(EM_DASH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_round_trips_through_str() {
        for c in [Classification::CaseStudy, Classification::Showcase] {
            assert_eq!(Classification::from_str_value(c.as_str()), Ok(c));
        }
        assert!(Classification::from_str_value("project").is_err());
    }

    #[test]
    fn external_links_skip_null_and_blank() {
        let links = ExternalLinks {
            behance: Some("  ".into()),
            dribbble: Some("https://dribbble.com/x".into()),
        };
        assert_eq!(links.present(), vec![(LinkKind::Dribbble, "https://dribbble.com/x")]);
        assert!(ExternalLinks::default().is_empty());
    }

    #[test]
    fn cta_label_names_the_network() {
        assert_eq!(LinkKind::Behance.cta_label(), "View on Behance");
    }

    #[test]
    fn deserializes_minimal_showcase_record() {
        let json = r#"{
            "id": 3,
            "slug": "crypto-dashboard",
            "title": "Crypto Dashboard",
            "category": "SaaS",
            "shortDescription": "Analytics.",
            "classification": "showcase",
            "template": "project-showcase",
            "heroImage": "Assets/x.png",
            "externalLinks": { "behance": null },
            "seoMeta": { "title": "t", "description": "d" }
        }"#;
        let record: ProjectRecord = serde_json::from_str(json).expect("valid record");
        assert_eq!(record.template, TemplateName::ProjectShowcase);
        assert!(record.gallery_images.is_empty());
        assert!(record.external_links.is_empty());
        assert_eq!(record.meta_or_dash(MetaField::Team), EM_DASH);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let json = r#"{
            "id": 1, "slug": "a", "title": "A", "category": "c",
            "shortDescription": "s", "classification": "showcase",
            "template": "project-showcase", "heroImage": "x.png",
            "seoMeta": { "title": "t", "description": "d" },
            "heroPlaceholder": "typo.png"
        }"#;
        assert!(serde_json::from_str::<ProjectRecord>(json).is_err());
    }

    #[test]
    fn blank_meta_is_treated_as_absent() {
        let json = r#"{
            "id": 1, "slug": "a", "title": "A", "category": "c",
            "shortDescription": "s", "classification": "showcase",
            "template": "project-showcase", "heroImage": "x.png",
            "role": " ", "platform": "Web",
            "seoMeta": { "title": "t", "description": "d" }
        }"#;
        let record: ProjectRecord = serde_json::from_str(json).expect("valid record");
        assert_eq!(record.meta(MetaField::Role), None);
        assert_eq!(record.meta(MetaField::Platform), Some("Web"));
    }
}
