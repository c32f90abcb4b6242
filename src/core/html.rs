// src/core/html.rs
//! Document queries over a parsed page.
//!
//! Page readers (`specs`) never walk the tree by hand; they ask for "first/all
//! elements matching a selector", optionally restricted to elements that come
//! after a given point in document order.
//!
//! Document order is a pre-order traversal index over every node in the tree.
//! It does not depend on source line numbers, so reformatted or minified markup
//! orders the same way.

use scraper::{ElementRef, Html, Selector};

/// Compile a fixed selector from `config::consts`.
/// The inputs are compile-time constants, so a parse failure is a programming error.
pub fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e}"))
}

/// An element together with its position in document order.
#[derive(Clone, Copy, Debug)]
pub struct Positioned<'a> {
    pub pos: usize,
    pub el: ElementRef<'a>,
}

impl<'a> Positioned<'a> {
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.el.value().attr(name)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.el.value().classes().any(|c| c == class)
    }
}

/// Half-open range of document positions: strictly after `start`, strictly
/// before `end` (unbounded when `end` is `None`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: Option<usize>,
}

impl Span {
    pub fn contains(&self, pos: usize) -> bool {
        pos > self.start && self.end.is_none_or(|end| pos < end)
    }
}

pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(src: &str) -> Self {
        Self { html: Html::parse_document(src) }
    }

    /// First match in document order.
    pub fn first(&self, sel: &Selector) -> Option<ElementRef<'_>> {
        self.html.select(sel).next()
    }

    /// Every match, in document order, tagged with its position.
    pub fn positioned(&self, sel: &Selector) -> Vec<Positioned<'_>> {
        self.html
            .tree
            .root()
            .descendants()
            .enumerate()
            .filter_map(|(pos, node)| ElementRef::wrap(node).map(|el| Positioned { pos, el }))
            .filter(|p| sel.matches(&p.el))
            .collect()
    }

    /// First match positioned strictly after `pos`.
    pub fn first_after(&self, sel: &Selector, pos: usize) -> Option<Positioned<'_>> {
        self.positioned(sel).into_iter().find(|p| p.pos > pos)
    }
}

/// Text content of `el` with surrounding whitespace trimmed.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// First descendant of `el` matching `sel`.
pub fn first_in<'a>(el: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    el.select(sel).next()
}
