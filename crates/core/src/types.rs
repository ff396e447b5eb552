/// Stable identity of a project record. Always positive.
pub type ProjectId = u32;

/// Placeholder shown for absent free-text metadata.
pub const EM_DASH: &str = "\u{2014}";
