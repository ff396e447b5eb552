//! Image reference resolution for nested pages.
//!
//! Content references images either absolutely (`https://...`, `data:...`,
//! `/Assets/x.png`) or relative to the site root (`Assets/x.png`). Detail pages live one
//! directory down (`projects/`), so root-relative references get a parent
//! segment prepended. Every renderer goes through [`normalize_image_path`].

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Prefix that lifts a root-relative reference out of the projects directory.
pub const NESTED_PAGE_PREFIX: &str = "../";

static URI_SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").expect("valid regex"));

/// Whether a reference starts with a URI scheme (`https:`, `data:`, ...).
pub fn has_uri_scheme(reference: &str) -> bool {
    URI_SCHEME_RE.is_match(reference)
}

/// Rewrite a root-relative image reference for use from a detail page.
///
/// Absolute and root-absolute references pass through unchanged. The function is idempotent:
/// an already-rewritten reference is returned as is.
///
/// ```
/// use folio_core::assets::normalize_image_path;
///
/// assert_eq!(normalize_image_path("Assets/x.png"), "../Assets/x.png");
/// assert_eq!(normalize_image_path("../Assets/x.png"), "../Assets/x.png");
/// assert_eq!(normalize_image_path("/Assets/x.png"), "/Assets/x.png");
/// assert_eq!(normalize_image_path("https://example.com/y.png"), "https://example.com/y.png");
/// ```
pub fn normalize_image_path(reference: &str) -> Cow<'_, str> {
    if has_uri_scheme(reference)
        || reference.starts_with('/')
        || reference.starts_with(NESTED_PAGE_PREFIX)
    {
        Cow::Borrowed(reference)
    } else {
        Cow::Owned(format!("{NESTED_PAGE_PREFIX}{reference}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_reference_gets_parent_prefix() {
        assert_eq!(normalize_image_path("Assets/x.png"), "../Assets/x.png");
    }

    #[test]
    fn https_reference_is_unchanged() {
        assert_eq!(
            normalize_image_path("https://example.com/y.png"),
            "https://example.com/y.png"
        );
    }

    #[test]
    fn plain_http_and_data_uris_are_unchanged() {
        assert_eq!(normalize_image_path("http://a.b/c.gif"), "http://a.b/c.gif");
        assert_eq!(
            normalize_image_path("data:image/png;base64,AAAA"),
            "data:image/png;base64,AAAA"
        );
    }

    #[test]
    fn root_absolute_reference_is_unchanged() {
        assert_eq!(normalize_image_path("/Assets/x.png"), "/Assets/x.png");
        assert_eq!(normalize_image_path("//cdn.example.com/a.png"), "//cdn.example.com/a.png");
    }

    #[test]
    fn normalization_is_idempotent() {
        for input in ["Assets/x.png", "/Assets/x.png", "https://i.ibb.co/a.gif", "img/b%20c.png"] {
            let once = normalize_image_path(input).into_owned();
            let twice = normalize_image_path(&once).into_owned();
            assert_eq!(once, twice, "not idempotent for {input}");
        }
    }

    #[test]
    fn percent_encoded_names_are_preserved() {
        assert_eq!(
            normalize_image_path("Assets/Podcast%20app.png"),
            "../Assets/Podcast%20app.png"
        );
    }

    #[test]
    fn bare_filename_is_not_mistaken_for_scheme() {
        assert!(!has_uri_scheme("x.png"));
        assert!(!has_uri_scheme("Assets/x:y.png"));
        assert!(has_uri_scheme("HTTPS://EXAMPLE.COM"));
    }
}
