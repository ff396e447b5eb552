//! Typed node tree used to build pages.
//!
//! Renderers construct [`Element`] trees and attach them to a host
//! [`Document`](crate::document::Document); nothing is assembled by string
//! concatenation. Serialisation escapes text and attribute values, except
//! for [`Node::Trusted`] fragments.

use crate::markup::{escape_attr, escape_text, TrustedMarkup};

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["img", "meta", "link", "br", "hr", "input"];

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    Trusted(TrustedMarkup),
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(String, String)>,
    classes: Vec<String>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    // -- builder ------------------------------------------------------------

    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    /// Add one or more space-separated classes.
    pub fn class(mut self, classes: &str) -> Self {
        for c in classes.split_whitespace() {
            self.add_class(c);
        }
        self
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn trusted(mut self, markup: &TrustedMarkup) -> Self {
        self.children.push(Node::Trusted(markup.clone()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children
            .extend(children.into_iter().map(Node::Element));
        self
    }

    // -- mutation -----------------------------------------------------------

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.retain(|(n, _)| n != name);
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Replace all children with a single text node.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.children.clear();
        self.children.push(Node::Text(text.into()));
    }

    pub fn append(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    /// Remove every child node.
    pub fn clear(&mut self) {
        self.children.clear();
    }

    // -- inspection ---------------------------------------------------------

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn element_id(&self) -> Option<&str> {
        self.get_attr("id")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn nodes(&self) -> &[Node] {
        &self.children
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(el) => Some(el),
            _ => None,
        })
    }

    pub fn child_elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.children.iter_mut().filter_map(|n| match n {
            Node::Element(el) => Some(el),
            _ => None,
        })
    }

    /// Depth-first search (self included) for an element with the given id.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.element_id() == Some(id) {
            return Some(self);
        }
        self.child_elements().find_map(|c| c.find_by_id(id))
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.element_id() == Some(id) {
            return Some(self);
        }
        self.child_elements_mut().find_map(|c| c.find_by_id_mut(id))
    }

    /// First element (self included) whose `name` attribute equals `value`.
    pub fn find_by_attr_mut(&mut self, name: &str, value: &str) -> Option<&mut Element> {
        if self.get_attr(name) == Some(value) {
            return Some(self);
        }
        self.child_elements_mut()
            .find_map(|c| c.find_by_attr_mut(name, value))
    }

    /// All descendants (self included) carrying `class`, in document order.
    pub fn find_all_by_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_by_class(class, &mut found);
        found
    }

    fn collect_by_class<'a>(&'a self, class: &str, out: &mut Vec<&'a Element>) {
        if self.has_class(class) {
            out.push(self);
        }
        for child in self.child_elements() {
            child.collect_by_class(class, out);
        }
    }

    /// Apply `f` to every descendant (self included) carrying `class`.
    pub fn for_each_with_class_mut(&mut self, class: &str, f: &mut dyn FnMut(&mut Element)) {
        if self.has_class(class) {
            f(self);
        }
        for child in self.child_elements_mut() {
            child.for_each_with_class_mut(class, f);
        }
    }

    /// All descendant elements (self included) with the given tag.
    pub fn find_all_by_tag(&self, tag: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_by_tag(tag, &mut found);
        found
    }

    fn collect_by_tag<'a>(&'a self, tag: &str, out: &mut Vec<&'a Element>) {
        if self.tag == tag {
            out.push(self);
        }
        for child in self.child_elements() {
            child.collect_by_tag(tag, out);
        }
    }

    /// Concatenated text of all descendant text nodes. Trusted fragments
    /// contribute their raw markup.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for node in &self.children {
            match node {
                Node::Text(t) => out.push_str(t),
                Node::Trusted(m) => out.push_str(m.as_str()),
                Node::Element(el) => el.collect_text(out),
            }
        }
    }

    // -- serialisation ------------------------------------------------------

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        if !self.classes.is_empty() {
            out.push_str(" class=\"");
            out.push_str(&escape_attr(&self.classes.join(" ")));
            out.push('"');
        }
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&self.tag) {
            return;
        }

        for node in &self.children {
            match node {
                Node::Element(el) => el.write_html(out),
                Node::Text(t) => out.push_str(&escape_text(t)),
                Node::Trusted(m) => out.push_str(m.as_str()),
            }
        }

        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialises_classes_attrs_and_children() {
        let el = Element::new("div")
            .class("card card--wide")
            .attr("data-id", "3")
            .child(Element::new("span").text("hi"));
        assert_eq!(
            el.to_html(),
            r#"<div class="card card--wide" data-id="3"><span>hi</span></div>"#
        );
    }

    #[test]
    fn text_is_escaped_but_trusted_is_not() {
        let el = Element::new("p")
            .text("<b>")
            .trusted(&TrustedMarkup::new("<em>ok</em>"));
        assert_eq!(el.to_html(), "<p>&lt;b&gt;<em>ok</em></p>");
    }

    #[test]
    fn attribute_values_are_escaped() {
        let el = Element::new("img").attr("alt", r#"a "quoted" <title>"#);
        assert_eq!(
            el.to_html(),
            r#"<img alt="a &quot;quoted&quot; &lt;title&gt;">"#
        );
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        assert_eq!(Element::new("meta").attr("name", "x").to_html(), r#"<meta name="x">"#);
    }

    #[test]
    fn set_attr_replaces_existing_value() {
        let mut el = Element::new("a").attr("href", "#");
        el.set_attr("href", "/x");
        assert_eq!(el.get_attr("href"), Some("/x"));
        assert_eq!(el.to_html(), r#"<a href="/x"></a>"#);
    }

    #[test]
    fn duplicate_classes_are_ignored() {
        let el = Element::new("div").class("a a b");
        assert_eq!(el.classes(), ["a", "b"]);
    }

    #[test]
    fn find_by_id_searches_descendants() {
        let mut root = Element::new("body").child(
            Element::new("main").child(Element::new("h1").id("project-title")),
        );
        assert!(root.find_by_id("project-title").is_some());
        assert!(root.find_by_id("missing").is_none());

        root.find_by_id_mut("project-title")
            .expect("anchor")
            .set_text("Hello");
        assert_eq!(root.text_content(), "Hello");
    }

    #[test]
    fn find_all_by_class_is_document_order() {
        let root = Element::new("div")
            .child(Element::new("p").class("x").text("1"))
            .child(Element::new("div").child(Element::new("p").class("x").text("2")));
        let texts: Vec<String> = root
            .find_all_by_class("x")
            .iter()
            .map(|e| e.text_content())
            .collect();
        assert_eq!(texts, ["1", "2"]);
    }

    #[test]
    fn clear_removes_all_children() {
        let mut el = Element::new("div").text("a").child(Element::new("p"));
        el.clear();
        assert!(el.nodes().is_empty());
    }
}
