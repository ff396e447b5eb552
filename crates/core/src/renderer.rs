//! Page renderer: populates a host [`Document`] for one project.
//!
//! [`render_page`] runs the load contract and dispatches on its outcome.
//! Case-study pages get the dark theme, meta pills, CTA links and composed
//! sections; showcase pages get the hero, a fixed meta grid, CTA links and
//! a gallery. Unknown or missing slugs end in the not-found state.

use crate::assets::normalize_image_path;
use crate::composer::compose_into;
use crate::content::model::{LinkKind, MetaField, ProjectRecord};
use crate::content::repository::ContentRepository;
use crate::document::{
    Document, PageState, ANCHOR_CTA_LINKS, ANCHOR_ERROR_MESSAGE, ANCHOR_GALLERY,
    ANCHOR_HERO_IMAGE, ANCHOR_META_PILLS, ANCHOR_OG_DESCRIPTION, ANCHOR_OG_IMAGE,
    ANCHOR_OG_TITLE, ANCHOR_PAGE_DESCRIPTION, ANCHOR_PAGE_TITLE, ANCHOR_PROJECT_CATEGORY,
    ANCHOR_PROJECT_DESCRIPTION, ANCHOR_PROJECT_TITLE, ANCHOR_SECTIONS,
};
use crate::dom::Element;
use crate::error::CoreError;
use crate::layout::image_element;
use crate::reveal::{arm_scroll_reveal, REVEAL_CLASS};
use crate::template::{load, LoadError, LoadOutcome, PageIntent, PageLocation, RedirectTo};

/// Theme flag set on case-study pages.
pub const CASE_STUDY_THEME: &str = "dark";

/// Meta pills shown on case studies, when present.
const CASE_STUDY_PILLS: &[MetaField] = &[MetaField::Role, MetaField::Timeline, MetaField::Platform];

/// Meta fields shown on showcases, always.
const SHOWCASE_META: &[MetaField] = &[
    MetaField::Role,
    MetaField::Platform,
    MetaField::Timeline,
    MetaField::Team,
];

/// What happened to the document.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    /// The project was rendered and the page is ready.
    Rendered { slug: String },
    /// The project belongs on another template page. The document is untouched.
    Redirect(RedirectTo),
    /// The page shows its not-found state.
    NotFound(LoadError),
}

/// Load the project named by `location` and render it into `doc`.
pub fn render_page(
    repo: &ContentRepository,
    location: &PageLocation,
    doc: &mut Document,
) -> Result<RenderOutcome, CoreError> {
    match load(repo, location) {
        LoadOutcome::Render(intent) => {
            render_intent(doc, &intent)?;
            Ok(RenderOutcome::Rendered {
                slug: intent.record().slug.clone(),
            })
        }
        LoadOutcome::Redirect(to) => Ok(RenderOutcome::Redirect(to)),
        LoadOutcome::NotFound(err) => {
            show_not_found(doc, &err)?;
            Ok(RenderOutcome::NotFound(err))
        }
    }
}

/// Render a confirmed intent.
pub fn render_intent(doc: &mut Document, intent: &PageIntent<'_>) -> Result<(), CoreError> {
    match intent {
        PageIntent::CaseStudy { record, .. } => render_case_study(doc, record),
        PageIntent::Showcase { record } => render_showcase(doc, record),
    }
}

/// Overwrite the page title, description and Open Graph fields.
pub fn update_seo(doc: &mut Document, record: &ProjectRecord) -> Result<(), CoreError> {
    let seo = &record.seo_meta;
    doc.anchor_mut(ANCHOR_PAGE_TITLE)?.set_text(seo.title.as_str());
    doc.anchor_mut(ANCHOR_PAGE_DESCRIPTION)?
        .set_attr("content", seo.description.as_str());
    doc.anchor_mut(ANCHOR_OG_TITLE)?
        .set_attr("content", seo.title.as_str());
    doc.anchor_mut(ANCHOR_OG_DESCRIPTION)?
        .set_attr("content", seo.description.as_str());
    doc.anchor_mut(ANCHOR_OG_IMAGE)?
        .set_attr("content", normalize_image_path(&record.hero_image).into_owned());
    Ok(())
}

pub fn render_case_study(doc: &mut Document, record: &ProjectRecord) -> Result<(), CoreError> {
    doc.set_theme(CASE_STUDY_THEME);

    doc.anchor_mut(ANCHOR_PROJECT_CATEGORY)?
        .set_text(record.category.to_uppercase());
    doc.anchor_mut(ANCHOR_PROJECT_TITLE)?
        .set_text(record.title.as_str());
    doc.anchor_mut(ANCHOR_PROJECT_DESCRIPTION)?
        .set_text(record.short_description.as_str());

    let pills = doc.anchor_mut(ANCHOR_META_PILLS)?;
    pills.clear();
    for &field in CASE_STUDY_PILLS {
        if let Some(value) = record.meta(field) {
            pills.append(meta_pill(field, value));
        }
    }

    let cta = doc.anchor_mut(ANCHOR_CTA_LINKS)?;
    cta.clear();
    if let Some(links) = cta_block(record, false) {
        cta.append(links);
    }

    compose_into(doc.anchor_mut(ANCHOR_SECTIONS)?, record);

    update_seo(doc, record)?;
    doc.set_state(PageState::Ready)?;
    let observed = arm_scroll_reveal(doc);

    tracing::debug!(slug = %record.slug, template = %record.template, observed, "Rendered case study");
    Ok(())
}

pub fn render_showcase(doc: &mut Document, record: &ProjectRecord) -> Result<(), CoreError> {
    doc.anchor_mut(ANCHOR_PROJECT_CATEGORY)?
        .set_text(record.category.to_uppercase());
    doc.anchor_mut(ANCHOR_PROJECT_TITLE)?
        .set_text(record.title.as_str());
    doc.anchor_mut(ANCHOR_PROJECT_DESCRIPTION)?
        .set_text(record.short_description.as_str());

    let hero = doc.anchor_mut(ANCHOR_HERO_IMAGE)?;
    hero.set_attr("src", normalize_image_path(&record.hero_image).into_owned());
    hero.set_attr("alt", format!("{} hero image", record.title));

    let meta = doc.anchor_mut(ANCHOR_META_PILLS)?;
    meta.clear();
    for &field in SHOWCASE_META {
        meta.append(meta_pill(field, record.meta_or_dash(field)));
    }

    let cta = doc.anchor_mut(ANCHOR_CTA_LINKS)?;
    cta.clear();
    if let Some(links) = cta_block(record, true) {
        cta.append(links);
    }

    let gallery = doc.anchor_mut(ANCHOR_GALLERY)?;
    gallery.clear();
    for (i, image) in record.gallery_images.iter().enumerate() {
        gallery.append(gallery_item(&record.title, i, image));
    }

    update_seo(doc, record)?;
    doc.set_state(PageState::Ready)?;
    let observed = arm_scroll_reveal(doc);

    tracing::debug!(slug = %record.slug, observed, "Rendered showcase");
    Ok(())
}

/// Terminal not-found state. Nothing else on the page is populated.
pub fn show_not_found(doc: &mut Document, err: &LoadError) -> Result<(), CoreError> {
    doc.anchor_mut(ANCHOR_ERROR_MESSAGE)?.set_text(err.to_string());
    doc.anchor_mut(ANCHOR_PAGE_TITLE)?.set_text("Project not found");
    doc.set_state(PageState::NotFound)
}

// ---------------------------------------------------------------------------
// Fragments
// ---------------------------------------------------------------------------

fn meta_pill(field: MetaField, value: &str) -> Element {
    Element::new("div")
        .class("meta-pill")
        .attr("data-field", field.as_str())
        .child(Element::new("span").class("meta-pill-label").text(field.label()))
        .child(Element::new("span").class("meta-pill-value").text(value))
}

/// CTA links for every present external link, or `None` when there are none.
fn cta_block(record: &ProjectRecord, with_heading: bool) -> Option<Element> {
    let links = record.external_links.present();
    if links.is_empty() {
        return None;
    }

    let mut block = Element::new("div").class("external-links");
    if with_heading {
        block.append(Element::new("h4").class("links-heading").text("View Project"));
    }
    for (kind, href) in links {
        block.append(external_link(kind, href));
    }
    Some(block)
}

fn external_link(kind: LinkKind, href: &str) -> Element {
    Element::new("a")
        .class("external-link")
        .attr("href", href)
        .attr("target", "_blank")
        .attr("rel", "noopener")
        .attr("data-link", kind.as_str())
        .child(Element::new("span").text(kind.cta_label()))
}

fn gallery_item(title: &str, index: usize, image: &str) -> Element {
    Element::new("div")
        .class("gallery-item")
        .class(REVEAL_CLASS)
        .child(image_element(image, &format!("{title} design {}", index + 1)))
}
