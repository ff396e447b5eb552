//! Image layout keywords and the shared image-layout builder.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::assets::normalize_image_path;
use crate::dom::Element;

pub const LAYOUT_FULL_WIDTH: &str = "full-width";
pub const LAYOUT_CONSTRAINED: &str = "constrained";
pub const LAYOUT_GRID_2: &str = "grid-2";
pub const LAYOUT_GRID_3: &str = "grid-3";
pub const LAYOUT_STACKED: &str = "stacked";

/// How an ordered list of images is arranged.
///
/// Unrecognized keywords fall back to [`ImageLayout::Stacked`] rather than
/// failing, both when parsing content and when building markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ImageLayout {
    /// First image only, edge to edge.
    FullWidth,
    /// First image only, within the content column.
    Constrained,
    Grid2,
    Grid3,
    #[default]
    Stacked,
}

impl ImageLayout {
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword.trim() {
            LAYOUT_FULL_WIDTH => Self::FullWidth,
            LAYOUT_CONSTRAINED => Self::Constrained,
            LAYOUT_GRID_2 => Self::Grid2,
            LAYOUT_GRID_3 => Self::Grid3,
            _ => Self::Stacked,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullWidth => LAYOUT_FULL_WIDTH,
            Self::Constrained => LAYOUT_CONSTRAINED,
            Self::Grid2 => LAYOUT_GRID_2,
            Self::Grid3 => LAYOUT_GRID_3,
            Self::Stacked => LAYOUT_STACKED,
        }
    }

    /// Container class for this arrangement.
    pub fn container_class(&self) -> &'static str {
        match self {
            Self::FullWidth => "full-width-image",
            Self::Constrained => "constrained-image",
            Self::Grid2 => "image-grid-2",
            Self::Grid3 => "image-grid-3",
            Self::Stacked => "stacked-images",
        }
    }

    /// Whether only the first image is shown.
    pub fn is_single(&self) -> bool {
        matches!(self, Self::FullWidth | Self::Constrained)
    }
}

impl From<String> for ImageLayout {
    fn from(s: String) -> Self {
        Self::from_keyword(&s)
    }
}

impl From<ImageLayout> for String {
    fn from(layout: ImageLayout) -> Self {
        layout.as_str().to_string()
    }
}

impl fmt::Display for ImageLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lazily-loaded `<img>` with a path-normalized source.
pub fn image_element(reference: &str, alt: &str) -> Element {
    Element::new("img")
        .attr("src", normalize_image_path(reference).into_owned())
        .attr("alt", alt)
        .attr("loading", "lazy")
}

/// Build the container for `images` arranged by `layout`.
///
/// Single-image layouts render only the first reference; an empty list
/// yields an empty container.
pub fn build_image_layout(images: &[String], layout: ImageLayout, alt: &str) -> Element {
    let shown: &[String] = if layout.is_single() {
        &images[..images.len().min(1)]
    } else {
        images
    };

    Element::new("div")
        .class(layout.container_class())
        .attr("data-layout", layout.as_str())
        .children(shown.iter().map(|img| image_element(img, alt)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn srcs(el: &Element) -> Vec<String> {
        el.find_all_by_tag("img")
            .iter()
            .filter_map(|img| img.get_attr("src").map(str::to_string))
            .collect()
    }

    #[test]
    fn grid_2_renders_every_image_normalized() {
        let images = refs(&["Assets/x.png", "https://example.com/y.png"]);
        let el = build_image_layout(&images, ImageLayout::Grid2, "Project");
        assert!(el.has_class("image-grid-2"));
        assert_eq!(srcs(&el), ["../Assets/x.png", "https://example.com/y.png"]);
    }

    #[test]
    fn grid_3_renders_every_image() {
        let images = refs(&["a.png", "b.png", "c.png", "d.png"]);
        let el = build_image_layout(&images, ImageLayout::Grid3, "P");
        assert_eq!(el.find_all_by_tag("img").len(), 4);
    }

    #[test]
    fn single_layouts_render_first_image_only() {
        let images = refs(&["a.png", "b.png"]);
        for layout in [ImageLayout::FullWidth, ImageLayout::Constrained] {
            let el = build_image_layout(&images, layout, "P");
            assert_eq!(srcs(&el), ["../a.png"], "{layout}");
        }
    }

    #[test]
    fn single_layout_with_no_images_is_empty() {
        let el = build_image_layout(&[], ImageLayout::FullWidth, "P");
        assert!(el.find_all_by_tag("img").is_empty());
    }

    #[test]
    fn unknown_keyword_falls_back_to_stacked() {
        let layout = ImageLayout::from_keyword("quilt");
        assert_eq!(layout, ImageLayout::Stacked);

        let images = refs(&["a.png", "b.png", "c.png"]);
        let el = build_image_layout(&images, layout, "P");
        assert!(el.has_class("stacked-images"));
        assert_eq!(el.find_all_by_tag("img").len(), 3);
    }

    #[test]
    fn unknown_keyword_deserializes_to_stacked() {
        let layout: ImageLayout = serde_json::from_str(r#""quilt""#).expect("any string parses");
        assert_eq!(layout, ImageLayout::Stacked);
        let layout: ImageLayout = serde_json::from_str(r#""grid-3""#).expect("known keyword");
        assert_eq!(layout, ImageLayout::Grid3);
    }

    #[test]
    fn images_carry_alt_and_lazy_loading() {
        let el = build_image_layout(&refs(&["a.png"]), ImageLayout::Stacked, "Call App");
        let img = el.find_all_by_tag("img")[0];
        assert_eq!(img.get_attr("alt"), Some("Call App"));
        assert_eq!(img.get_attr("loading"), Some("lazy"));
    }
}
