//! The home page's "Selected Work" grid.
//!
//! Cards follow table order, filtered by exact category. At most
//! [`DISPLAY_LIMIT`] cards show until the visitor asks for all of them.
//! The home page sits at the site root, so card images keep their
//! references as written.

use url::form_urlencoded;

use crate::content::model::ProjectRecord;
use crate::content::repository::ContentRepository;
use crate::dom::Element;
use crate::template::SLUG_PARAM;

/// Cards shown before "View more".
pub const DISPLAY_LIMIT: usize = 8;

/// Label of the catch-all filter.
pub const FILTER_ALL: &str = "All";

/// Query parameter carrying the active category.
pub const CATEGORY_PARAM: &str = "category";

/// Query parameter requesting every card.
pub const SHOW_ALL_PARAM: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// `None`, blank and `"All"` select every category.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") | Some(FILTER_ALL) => Self::All,
            Some(category) => Self::Category(category.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => FILTER_ALL,
            Self::Category(c) => c,
        }
    }

    pub fn matches(&self, record: &ProjectRecord) -> bool {
        match self {
            Self::All => true,
            Self::Category(c) => record.category == *c,
        }
    }
}

/// The cards to show for one filter state.
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    pub filter: CategoryFilter,
    pub cards: Vec<&'a ProjectRecord>,
    /// Total matches before the display limit.
    pub total: usize,
    /// Whether the "View more" affordance is shown.
    pub has_more: bool,
}

pub fn select<'a>(
    repo: &'a ContentRepository,
    filter: CategoryFilter,
    show_all: bool,
) -> Selection<'a> {
    let filtered: Vec<&ProjectRecord> = repo.all().iter().filter(|r| filter.matches(r)).collect();
    let total = filtered.len();
    let has_more = total > DISPLAY_LIMIT && !show_all;
    let cards = if show_all {
        filtered
    } else {
        filtered.into_iter().take(DISPLAY_LIMIT).collect()
    };

    Selection {
        filter,
        cards,
        total,
        has_more,
    }
}

/// Detail page link relative to the site root.
pub fn project_href(record: &ProjectRecord) -> String {
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair(SLUG_PARAM, &record.slug)
        .finish();
    format!("projects/{}?{query}", record.template.file_name())
}

/// Home page link for a filter state.
pub fn filter_href(filter: &CategoryFilter, show_all: bool) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    if let CategoryFilter::Category(c) = filter {
        query.append_pair(CATEGORY_PARAM, c);
    }
    if show_all {
        query.append_pair(SHOW_ALL_PARAM, "true");
    }
    let query = query.finish();
    if query.is_empty() {
        "/".to_string()
    } else {
        format!("/?{query}")
    }
}

// ---------------------------------------------------------------------------
// Markup
// ---------------------------------------------------------------------------

pub fn build_card(record: &ProjectRecord) -> Element {
    let mut img_wrap = Element::new("div").class("img-wrap");
    if record.is_case_study() {
        img_wrap.append(Element::new("span").class("case-tag").text("Case Study"));
    }
    img_wrap.append(
        Element::new("img")
            .attr("src", record.hero_image.as_str())
            .attr("alt", format!("{} - {}", record.title, record.category))
            .attr("loading", "lazy"),
    );
    img_wrap.append(Element::new("div").class("view-btn").attr("aria-hidden", "true"));

    Element::new("a")
        .class("project-card project-item")
        .attr("href", project_href(record))
        .attr("data-id", record.id.to_string())
        .attr("target", "_self")
        .child(img_wrap)
        .child(
            Element::new("div")
                .class("info")
                .child(
                    Element::new("div")
                        .class("category")
                        .text(record.category.to_uppercase()),
                )
                .child(Element::new("div").class("title").text(record.title.as_str()))
                .child(
                    Element::new("p")
                        .class("description")
                        .text(record.short_description.as_str()),
                ),
        )
}

/// "All" followed by each category, the active one marked.
pub fn build_filter_bar(repo: &ContentRepository, active: &CategoryFilter) -> Element {
    let filters = std::iter::once(CategoryFilter::All).chain(
        repo.categories()
            .into_iter()
            .map(|c| CategoryFilter::Category(c.to_string())),
    );

    Element::new("div")
        .class("filters")
        .attr("role", "group")
        .children(filters.map(|f| {
            let is_active = f == *active;
            let mut button = Element::new("a")
                .class("filter")
                .attr("href", filter_href(&f, false))
                .attr("data-filter", f.label())
                .attr("aria-pressed", if is_active { "true" } else { "false" })
                .text(f.label());
            if is_active {
                button.add_class("active");
            }
            button
        }))
}

pub fn build_grid(selection: &Selection<'_>) -> Element {
    Element::new("div")
        .id("projects-grid")
        .class("projects-grid")
        .attr("data-filter", selection.filter.label())
        .children(selection.cards.iter().map(|r| build_card(r)))
}

fn build_view_more(selection: &Selection<'_>) -> Element {
    let mut wrap = Element::new("div")
        .id("viewMoreWrap")
        .class("view-more-wrap")
        .child(
            Element::new("a")
                .id("viewMoreBtn")
                .class("view-more-btn")
                .attr("href", filter_href(&selection.filter, true))
                .text("View more"),
        );
    if !selection.has_more {
        wrap.set_attr("hidden", "");
    }
    wrap
}

/// The full home page for one filter state.
pub fn render_home(repo: &ContentRepository, filter: CategoryFilter, show_all: bool) -> String {
    let selection = select(repo, filter, show_all);
    tracing::debug!(
        filter = selection.filter.label(),
        shown = selection.cards.len(),
        total = selection.total,
        "Rendering selected work"
    );

    let head = Element::new("head")
        .child(Element::new("meta").attr("charset", "utf-8"))
        .child(Element::new("title").text("Selected Work"))
        .child(
            Element::new("link")
                .attr("rel", "stylesheet")
                .attr("href", "styles.css"),
        );

    let body = Element::new("body").child(
        Element::new("section")
            .id("selected-work")
            .class("selected-work")
            .child(Element::new("h2").class("section-title").text("Selected Work"))
            .child(build_filter_bar(repo, &selection.filter))
            .child(build_grid(&selection))
            .child(build_view_more(&selection)),
    );

    let mut out = String::from("<!DOCTYPE html><html lang=\"en\">");
    head.write_html(&mut out);
    body.write_html(&mut out);
    out.push_str("</html>");
    out
}
