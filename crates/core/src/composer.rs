//! Case-study section composer.
//!
//! Walks the fixed order of the record's section schema and, for every kind
//! that is both enabled and populated, builds one `<section>` element with
//! the kind's dedicated builder. Enabled kinds without content are skipped.

use crate::content::model::ProjectRecord;
use crate::content::sections::{
    GoalCategory, GoalsContent, ImageSectionContent, LearningsContent, OverviewContent,
    ProblemContent, ResultsContent, SectionBlob, SectionKind, SectionSchema, StrategyContent,
    UxDecision, UxDecisionsContent,
};
use crate::dom::Element;
use crate::layout::{build_image_layout, image_element};
use crate::types::EM_DASH;

/// Class marking a UX decision card that has no image.
pub const TEXT_ONLY_CARD_CLASS: &str = "ux-decision-card--text-only";

const DEFAULT_PROBLEM_LABEL: &str = "The Challenge";

/// The section schema a case study is written against.
pub fn record_schema(record: &ProjectRecord) -> SectionSchema {
    SectionSchema::detect(record.schema_kinds())
}

/// Kinds that will render for `record`, in order.
pub fn rendered_kinds(record: &ProjectRecord) -> Vec<SectionKind> {
    let (Some(toggles), Some(content)) = (&record.sections, &record.section_content) else {
        return Vec::new();
    };
    record_schema(record)
        .order()
        .iter()
        .copied()
        .filter(|k| toggles.is_enabled(*k) && content.blob(*k).is_some())
        .collect()
}

/// Build the section elements for a case study.
pub fn compose_sections(record: &ProjectRecord) -> Vec<Element> {
    let (Some(toggles), Some(content)) = (&record.sections, &record.section_content) else {
        tracing::debug!(slug = %record.slug, "Record has no section data");
        return Vec::new();
    };

    let mut out = Vec::new();
    for &kind in record_schema(record).order() {
        if !toggles.is_enabled(kind) {
            continue;
        }
        match content.blob(kind) {
            Some(blob) => out.push(build_section(kind, blob, &record.title)),
            None => tracing::debug!(
                slug = %record.slug,
                section = kind.as_str(),
                "Section enabled without content, skipping"
            ),
        }
    }
    out
}

/// Replace the contents of `container` with the record's sections.
///
/// Clears first, so calling it repeatedly never duplicates sections.
pub fn compose_into(container: &mut Element, record: &ProjectRecord) {
    container.clear();
    for section in compose_sections(record) {
        container.append(section);
    }
}

// ---------------------------------------------------------------------------
// Section shell
// ---------------------------------------------------------------------------

fn build_section(kind: SectionKind, blob: SectionBlob<'_>, project_title: &str) -> Element {
    let mut section = Element::new("section")
        .class("case-section reveal")
        .class(&format!("section-{}", kind.as_str()))
        .attr("data-section", kind.as_str());

    if !kind.renders_own_header() {
        if let Some(header) = section_header(blob.title(), blob.description()) {
            section.append(header);
        }
    }

    match blob {
        SectionBlob::Overview(c) => build_overview(&mut section, c, project_title),
        SectionBlob::Problem(c) => section.append(build_problem(c)),
        SectionBlob::Goals(c) => section.append(build_goals(c)),
        SectionBlob::Images(c) => build_image_section(&mut section, c, project_title),
        SectionBlob::Strategy(c) => section.append(build_strategy(c)),
        SectionBlob::UxDecisions(c) => section.append(build_ux_decisions(c, project_title)),
        SectionBlob::Results(c) => section.append(build_results(kind, c)),
        SectionBlob::Learnings(c) => section.append(build_learnings(c)),
    }

    section
}

/// `None` when there is neither a title nor a description.
fn section_header(title: Option<&str>, description: Option<&str>) -> Option<Element> {
    if title.is_none() && description.is_none() {
        return None;
    }
    let mut header = Element::new("div").class("section-container section-header");
    if let Some(title) = title {
        header.append(Element::new("h2").class("section-title").text(title));
    }
    if let Some(description) = description {
        header.append(
            Element::new("p")
                .class("section-description")
                .text(description),
        );
    }
    Some(header)
}

/// `01`, `02`, ...
fn two_digit_index(zero_based: usize) -> String {
    format!("{:02}", zero_based + 1)
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

fn build_overview(section: &mut Element, c: &OverviewContent, project_title: &str) {
    let mut meta = Element::new("div").class("overview-meta");
    if let Some(role) = c.role.as_deref().filter(|r| !r.trim().is_empty()) {
        meta.append(
            Element::new("div")
                .class("overview-role")
                .child(Element::new("h4").class("tag-group-label").text("Role"))
                .child(Element::new("p").class("overview-role-value").text(role)),
        );
    }
    meta.append(tag_group("Tools", c.tools.as_deref()));
    meta.append(tag_group("Responsibilities", c.responsibilities.as_deref()));

    section.append(
        Element::new("div")
            .class("section-overview")
            .child(Element::new("h2").class("section-title").text(&c.title))
            .child(Element::new("p").class("overview-text").text(&c.text))
            .child(meta),
    );

    if !c.images.is_empty() {
        section.append(build_image_layout(&c.images, c.layout, project_title));
    }
}

/// Label plus chips; an absent or empty list shows a dash placeholder.
fn tag_group(label: &str, tags: Option<&[String]>) -> Element {
    let list = match tags {
        Some(tags) if !tags.is_empty() => Element::new("div")
            .class("tag-list")
            .children(
                tags.iter()
                    .map(|t| Element::new("span").class("tag-chip").text(t)),
            ),
        _ => Element::new("div")
            .class("tag-list")
            .child(Element::new("span").class("tag-placeholder").text(EM_DASH)),
    };

    Element::new("div")
        .class("tag-group")
        .child(Element::new("h4").class("tag-group-label").text(label))
        .child(list)
}

fn build_problem(c: &ProblemContent) -> Element {
    let label = c
        .label
        .as_deref()
        .filter(|l| !l.trim().is_empty())
        .unwrap_or(DEFAULT_PROBLEM_LABEL);

    let mut body = Element::new("div")
        .class("section-container problem-block")
        .child(Element::new("span").class("problem-label").text(label));

    if let Some(headline) = c.headline.as_ref().filter(|h| !h.is_empty()) {
        body.append(Element::new("h3").class("problem-headline").trusted(headline));
    }
    if let Some(text) = c.text.as_ref().filter(|t| !t.is_empty()) {
        body.append(Element::new("p").class("problem-text").trusted(text));
    }
    body
}

fn build_goals(c: &GoalsContent) -> Element {
    match c {
        GoalsContent::Categorized { categories, .. } => Element::new("div")
            .class("section-container goals-grid")
            .attr("data-shape", "categorized")
            .children(categories.iter().map(goal_card)),
        GoalsContent::Flat { items, .. } => Element::new("div")
            .class("section-container")
            .attr("data-shape", "flat")
            .child(bullet_list("goal-list goal-list--flat", items)),
    }
}

fn goal_card(category: &GoalCategory) -> Element {
    let mut card = Element::new("div").class("goal-card");
    if let Some(icon) = category.icon.as_deref() {
        card.append(
            Element::new("span")
                .class("goal-icon")
                .attr("aria-hidden", "true")
                .text(icon),
        );
    }
    card.child(Element::new("h3").class("goal-card-title").text(&category.title))
        .child(bullet_list("goal-list", &category.items))
}

fn bullet_list(class: &str, items: &[String]) -> Element {
    Element::new("ul")
        .class(class)
        .children(items.iter().map(|i| Element::new("li").text(i)))
}

fn build_image_section(section: &mut Element, c: &ImageSectionContent, project_title: &str) {
    if let Some(text) = c.text.as_deref().filter(|t| !t.trim().is_empty()) {
        section.append(
            Element::new("div")
                .class("section-container")
                .child(Element::new("p").class("section-text").text(text)),
        );
    }
    if !c.images.is_empty() {
        section.append(build_image_layout(&c.images, c.layout, project_title));
    }
}

fn build_strategy(c: &StrategyContent) -> Element {
    match c {
        StrategyContent::Numbered { items, .. } => Element::new("ol")
            .class("section-container strategy-list")
            .attr("data-shape", "numbered")
            .children(items.iter().enumerate().map(|(i, item)| {
                Element::new("li")
                    .class("strategy-item")
                    .child(
                        Element::new("span")
                            .class("strategy-number")
                            .text(two_digit_index(i)),
                    )
                    .child(Element::new("h3").class("strategy-item-title").text(&item.title))
                    .child(Element::new("p").class("strategy-item-text").text(&item.text))
            })),
        StrategyContent::Prose { text, .. } => Element::new("div")
            .class("section-container")
            .attr("data-shape", "prose")
            .child(Element::new("p").class("strategy-text").text(text)),
    }
}

fn build_ux_decisions(c: &UxDecisionsContent, project_title: &str) -> Element {
    Element::new("div")
        .class("section-container ux-decisions")
        .children(c.items.iter().map(|d| ux_decision_card(d, project_title)))
}

fn ux_decision_card(decision: &UxDecision, project_title: &str) -> Element {
    let image = decision
        .image
        .as_deref()
        .filter(|i| !i.trim().is_empty());

    let mut card = Element::new("div").class("ux-decision-card");
    match image {
        Some(src) => {
            card.set_attr("data-variant", "with-image");
            card.append(
                Element::new("div")
                    .class("ux-decision-media")
                    .child(image_element(src, &format!("{project_title} - {}", decision.title))),
            );
        }
        None => {
            card.add_class(TEXT_ONLY_CARD_CLASS);
            card.set_attr("data-variant", "text-only");
        }
    }

    card.child(
        Element::new("div")
            .class("ux-decision-body")
            .child(Element::new("h3").class("ux-decision-title").text(&decision.title))
            .child(Element::new("p").class("ux-decision-text").text(&decision.text)),
    )
}

fn build_results(kind: SectionKind, c: &ResultsContent) -> Element {
    let default_title = match kind {
        SectionKind::Impact => "Impact",
        _ => "Outcomes",
    };
    let title = c
        .title
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .unwrap_or(default_title);

    let mut block = Element::new("div")
        .class("section-container results-block")
        .child(Element::new("h2").class("section-title").text(title));

    if let Some(text) = c.text.as_deref().filter(|t| !t.trim().is_empty()) {
        block.append(Element::new("p").class("results-text").text(text));
    }

    if !c.metrics.is_empty() {
        block.append(
            Element::new("div")
                .class("outcomes-grid")
                .children(c.metrics.iter().map(|m| {
                    Element::new("div")
                        .class("outcome-card")
                        .child(Element::new("div").class("outcome-metric").text(&m.value))
                        .child(Element::new("div").class("outcome-label").text(&m.label))
                })),
        );
    }

    if let Some(t) = &c.testimonial {
        block.append(
            Element::new("div")
                .class("testimonial")
                .child(
                    Element::new("blockquote")
                        .class("testimonial-quote")
                        .text(format!("\"{}\"", t.quote)),
                )
                .child(
                    Element::new("cite")
                        .class("testimonial-author")
                        .text(format!("{EM_DASH} {}", t.author)),
                ),
        );
    }

    block
}

fn build_learnings(c: &LearningsContent) -> Element {
    Element::new("ol")
        .class("section-container learnings-list")
        .children(c.items.iter().enumerate().map(|(i, item)| {
            Element::new("li")
                .class("learning-item")
                .child(
                    Element::new("span")
                        .class("learning-index")
                        .text(two_digit_index(i)),
                )
                .child(Element::new("p").class("learning-text").text(item))
        }))
}
