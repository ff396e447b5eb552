//! The host page a renderer populates.
//!
//! [`Document::host`] builds the empty template page for a template name,
//! with every named anchor point the renderers write into. Renderers never
//! create anchors themselves; a missing anchor is an internal error.

use crate::dom::Element;
use crate::error::CoreError;
use crate::reveal::ScrollReveal;
use crate::template::TemplateName;

pub const ANCHOR_PAGE_TITLE: &str = "page-title";
pub const ANCHOR_PAGE_DESCRIPTION: &str = "page-description";
pub const ANCHOR_OG_TITLE: &str = "og-title";
pub const ANCHOR_OG_DESCRIPTION: &str = "og-description";
pub const ANCHOR_OG_IMAGE: &str = "og-image";
pub const ANCHOR_PROJECT_CATEGORY: &str = "project-category";
pub const ANCHOR_PROJECT_TITLE: &str = "project-title";
pub const ANCHOR_PROJECT_DESCRIPTION: &str = "project-description";
pub const ANCHOR_HERO_IMAGE: &str = "hero-image";
pub const ANCHOR_META_PILLS: &str = "meta-pills";
pub const ANCHOR_CTA_LINKS: &str = "cta-links";
pub const ANCHOR_SECTIONS: &str = "case-study-sections";
pub const ANCHOR_GALLERY: &str = "gallery-grid";
pub const ANCHOR_LOADING: &str = "loading";
pub const ANCHOR_CONTENT: &str = "content";
pub const ANCHOR_ERROR: &str = "error-404";
pub const ANCHOR_ERROR_MESSAGE: &str = "error-message";

/// Where back links on detail pages point.
pub const BACK_HREF: &str = "../index.html#work";

/// Which state block of the page is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    Loading,
    Ready,
    NotFound,
}

impl PageState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Ready => "ready",
            Self::NotFound => "not-found",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    template: TemplateName,
    head: Element,
    body: Element,
    state: PageState,
    reveal: Option<ScrollReveal>,
}

impl Document {
    /// The empty host page for `template`, in the loading state.
    pub fn host(template: TemplateName) -> Self {
        let head = Element::new("head")
            .child(Element::new("meta").attr("charset", "utf-8"))
            .child(
                Element::new("meta")
                    .attr("name", "viewport")
                    .attr("content", "width=device-width, initial-scale=1"),
            )
            .child(Element::new("title").id(ANCHOR_PAGE_TITLE))
            .child(
                Element::new("meta")
                    .id(ANCHOR_PAGE_DESCRIPTION)
                    .attr("name", "description")
                    .attr("content", ""),
            )
            .child(og_meta(ANCHOR_OG_TITLE, "og:title"))
            .child(og_meta(ANCHOR_OG_DESCRIPTION, "og:description"))
            .child(og_meta(ANCHOR_OG_IMAGE, "og:image"))
            .child(
                Element::new("link")
                    .attr("rel", "stylesheet")
                    .attr("href", "../styles.css"),
            );

        let main = if template.is_case_study() {
            case_study_main()
        } else {
            showcase_main()
        };

        let body = Element::new("body")
            .attr("data-template", template.as_str())
            .attr("data-state", PageState::Loading.as_str())
            .child(
                Element::new("nav").class("back-nav").child(
                    Element::new("a")
                        .class("back-link")
                        .attr("href", BACK_HREF)
                        .text("Back to work"),
                ),
            )
            .child(
                Element::new("div")
                    .id(ANCHOR_LOADING)
                    .class("loading-state")
                    .child(Element::new("div").class("spinner").attr("aria-hidden", "true")),
            )
            .child(
                Element::new("div")
                    .id(ANCHOR_ERROR)
                    .class("error-state")
                    .attr("hidden", "")
                    .child(Element::new("h1").text("Project not found"))
                    .child(Element::new("p").id(ANCHOR_ERROR_MESSAGE))
                    .child(
                        Element::new("a")
                            .class("error-back")
                            .attr("href", BACK_HREF)
                            .text("Back to work"),
                    ),
            )
            .child(main);

        Self {
            template,
            head,
            body,
            state: PageState::Loading,
            reveal: None,
        }
    }

    pub fn template(&self) -> TemplateName {
        self.template
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    pub fn body(&self) -> &Element {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Element {
        &mut self.body
    }

    /// The armed scroll-reveal observer, once the page has been rendered.
    pub fn reveal(&self) -> Option<&ScrollReveal> {
        self.reveal.as_ref()
    }

    pub(crate) fn set_reveal(&mut self, reveal: ScrollReveal) {
        self.reveal = Some(reveal);
    }

    /// Find a named anchor in the head or body.
    pub fn anchor(&self, id: &str) -> Result<&Element, CoreError> {
        self.head
            .find_by_id(id)
            .or_else(|| self.body.find_by_id(id))
            .ok_or_else(|| missing_anchor(id, self.template))
    }

    pub fn anchor_mut(&mut self, id: &str) -> Result<&mut Element, CoreError> {
        let template = self.template;
        if self.head.find_by_id(id).is_some() {
            return self
                .head
                .find_by_id_mut(id)
                .ok_or_else(|| missing_anchor(id, template));
        }
        self.body
            .find_by_id_mut(id)
            .ok_or_else(|| missing_anchor(id, template))
    }

    /// Text of the `<title>` element.
    pub fn title(&self) -> String {
        self.head
            .find_by_id(ANCHOR_PAGE_TITLE)
            .map(Element::text_content)
            .unwrap_or_default()
    }

    pub fn set_theme(&mut self, theme: &str) {
        self.body.set_attr("data-theme", theme);
    }

    /// Show exactly one of the loading, content and not-found blocks.
    pub fn set_state(&mut self, state: PageState) -> Result<(), CoreError> {
        set_hidden(self.anchor_mut(ANCHOR_LOADING)?, state != PageState::Loading);
        set_hidden(self.anchor_mut(ANCHOR_ERROR)?, state != PageState::NotFound);

        let content = self.anchor_mut(ANCHOR_CONTENT)?;
        set_hidden(content, state != PageState::Ready);
        if state == PageState::Ready {
            content.add_class("fade-in");
        } else {
            content.remove_class("fade-in");
        }

        self.body.set_attr("data-state", state.as_str());
        self.state = state;
        Ok(())
    }

    /// Reveal the element observed under `key`, if it has not fired yet.
    pub fn notify_intersecting(&mut self, key: &str) -> bool {
        let fired = self
            .reveal
            .as_mut()
            .is_some_and(|r| r.notify_intersecting(key));
        if fired {
            if let Some(el) = self.body.find_by_attr_mut(crate::reveal::REVEAL_ATTR, key) {
                el.add_class(crate::reveal::VISIBLE_CLASS);
            }
        }
        fired
    }

    /// Serialise the whole page.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<!DOCTYPE html><html lang=\"en\">");
        self.head.write_html(&mut out);
        self.body.write_html(&mut out);
        out.push_str("</html>");
        out
    }
}

// ---------------------------------------------------------------------------
// Host template parts
// ---------------------------------------------------------------------------

fn og_meta(id: &str, property: &str) -> Element {
    Element::new("meta")
        .id(id)
        .attr("property", property)
        .attr("content", "")
}

fn case_study_main() -> Element {
    Element::new("main")
        .id(ANCHOR_CONTENT)
        .class("case-study-content")
        .attr("hidden", "")
        .child(
            Element::new("header")
                .class("case-hero")
                .child(Element::new("span").id(ANCHOR_PROJECT_CATEGORY).class("case-category"))
                .child(Element::new("h1").id(ANCHOR_PROJECT_TITLE).class("case-title"))
                .child(
                    Element::new("p")
                        .id(ANCHOR_PROJECT_DESCRIPTION)
                        .class("case-description"),
                )
                .child(Element::new("div").id(ANCHOR_META_PILLS).class("meta-pills"))
                .child(Element::new("div").id(ANCHOR_CTA_LINKS).class("cta-links")),
        )
        .child(Element::new("div").id(ANCHOR_SECTIONS).class("case-study-sections"))
}

fn showcase_main() -> Element {
    Element::new("main")
        .id(ANCHOR_CONTENT)
        .class("project-content")
        .attr("hidden", "")
        .child(
            Element::new("header")
                .class("project-hero")
                .child(
                    Element::new("span")
                        .id(ANCHOR_PROJECT_CATEGORY)
                        .class("project-category"),
                )
                .child(Element::new("h1").id(ANCHOR_PROJECT_TITLE).class("project-title"))
                .child(
                    Element::new("p")
                        .id(ANCHOR_PROJECT_DESCRIPTION)
                        .class("project-description"),
                )
                .child(
                    Element::new("figure")
                        .class("hero-figure")
                        .child(Element::new("img").id(ANCHOR_HERO_IMAGE).attr("src", "").attr("alt", "")),
                ),
        )
        .child(Element::new("div").id(ANCHOR_META_PILLS).class("meta-grid"))
        .child(Element::new("div").id(ANCHOR_CTA_LINKS).class("cta-links"))
        .child(Element::new("div").id(ANCHOR_GALLERY).class("gallery-grid"))
}

fn set_hidden(el: &mut Element, hidden: bool) {
    if hidden {
        el.set_attr("hidden", "");
    } else {
        el.remove_attr("hidden");
    }
}

fn missing_anchor(id: &str, template: TemplateName) -> CoreError {
    CoreError::Internal(format!(
        "Host template '{template}' has no anchor '#{id}'"
    ))
}
