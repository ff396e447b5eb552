//! Visibility-triggered, fire-once reveal observers.
//!
//! [`ScrollReveal`] stands in for a viewport intersection observer: the host
//! reports when an observed element intersects, the element is revealed and
//! then detached so it never fires again.

use crate::document::Document;
use crate::dom::Element;

/// Fraction of the element that must be visible.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Viewport inset applied before intersection is measured.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

/// Class marking elements that participate in scroll reveal.
pub const REVEAL_CLASS: &str = "reveal";

/// Class added once an element has been revealed.
pub const VISIBLE_CLASS: &str = "is-visible";

/// Attribute carrying an element's observer key.
pub const REVEAL_ATTR: &str = "data-reveal";

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollReveal {
    threshold: f64,
    root_margin: String,
    pending: Vec<String>,
}

impl Default for ScrollReveal {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollReveal {
    pub fn new() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            root_margin: REVEAL_ROOT_MARGIN.to_string(),
            pending: Vec::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn root_margin(&self) -> &str {
        &self.root_margin
    }

    /// Start observing `key`. Returns `false` if it is already observed.
    pub fn observe(&mut self, key: impl Into<String>) -> bool {
        let key = key.into();
        if self.is_observing(&key) {
            return false;
        }
        self.pending.push(key);
        true
    }

    /// Report that `key` intersects the viewport.
    ///
    /// Returns `true` the first time only; the key is detached afterwards.
    pub fn notify_intersecting(&mut self, key: &str) -> bool {
        match self.pending.iter().position(|k| k == key) {
            Some(idx) => {
                self.pending.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn is_observing(&self, key: &str) -> bool {
        self.pending.iter().any(|k| k == key)
    }

    /// Keys still waiting to intersect, in observation order.
    pub fn pending(&self) -> &[String] {
        &self.pending
    }
}

/// Observe every reveal-class element in the document body.
///
/// Keys are assigned in document order (`reveal-1`, `reveal-2`, ...) and a
/// fresh observer replaces any previous one, so re-arming after a re-render
/// never leaves stale keys behind. Returns the number of observed elements.
pub fn arm_scroll_reveal(doc: &mut Document) -> usize {
    let mut observer = ScrollReveal::new();
    let mut next = 0usize;

    doc.body_mut()
        .for_each_with_class_mut(REVEAL_CLASS, &mut |el: &mut Element| {
            next += 1;
            let key = format!("reveal-{next}");
            el.remove_class(VISIBLE_CLASS);
            el.set_attr(REVEAL_ATTR, key.as_str());
            observer.observe(key);
        });

    let body = doc.body_mut();
    body.set_attr("data-reveal-threshold", observer.threshold().to_string());
    body.set_attr("data-reveal-margin", observer.root_margin());

    let count = observer.pending().len();
    doc.set_reveal(observer);
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reveal_configuration() {
        let reveal = ScrollReveal::new();
        assert_eq!(reveal.threshold(), 0.1);
        assert_eq!(reveal.root_margin(), "0px 0px -100px 0px");
        assert!(reveal.pending().is_empty());
    }

    #[test]
    fn fires_exactly_once_per_key() {
        let mut reveal = ScrollReveal::new();
        assert!(reveal.observe("a"));
        assert!(reveal.observe("b"));
        assert!(!reveal.observe("a"));

        assert!(reveal.notify_intersecting("a"));
        assert!(!reveal.notify_intersecting("a"));
        assert_eq!(reveal.pending(), ["b"]);
    }

    #[test]
    fn unobserved_key_never_fires() {
        let mut reveal = ScrollReveal::new();
        assert!(!reveal.notify_intersecting("ghost"));
    }
}
