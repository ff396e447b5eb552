//! Project content: record types, section content shapes, and the
//! validated repository that owns them.

pub mod model;
pub mod repository;
pub mod sections;

pub use model::{Classification, ExternalLinks, LinkKind, MetaField, ProjectRecord, SeoMeta};
pub use repository::ContentRepository;
pub use sections::{SectionContent, SectionKind, SectionSchema, SectionToggles};
