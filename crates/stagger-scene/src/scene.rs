//! Flat element tree in document order.
//!
//! The scene is the substrate the reveal engine mutates: an ordered
//! list of elements, each with a stable string id, a tag name, a set
//! of classes, and an inline style. Order is fixed at insertion time;
//! queries capture matches in that order.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::selector::Selector;

/// Inline style attributes relevant to the reveal effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementStyle {
    /// Visual transparency, 0.0 (invisible) to 1.0 (fully opaque).
    pub opacity: f64,
    /// Vertical translation offset in pixels. 0.0 means no offset.
    pub translate_y: f64,
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            translate_y: 0.0,
        }
    }
}

impl ElementStyle {
    /// Style for an element waiting to be revealed: invisible and
    /// shifted down by the given offset.
    pub fn hidden(offset_y: f64) -> Self {
        Self {
            opacity: 0.0,
            translate_y: offset_y,
        }
    }
}

/// A single visual node in the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Stable identifier, unique within a scene.
    pub id: String,
    /// Tag name, e.g. `"li"` or `"div"`.
    pub tag: String,
    /// Class names, matched by `.class` selectors.
    pub classes: Vec<String>,
    /// Mutable inline style.
    pub style: ElementStyle,
}

impl Element {
    /// Create an element with the default (visible) style.
    pub fn new(id: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tag: tag.into(),
            classes: Vec::new(),
            style: ElementStyle::default(),
        }
    }

    /// Add a class name.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Set the initial inline style.
    pub fn with_style(mut self, style: ElementStyle) -> Self {
        self.style = style;
        self
    }

    /// Check whether this element carries the given class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// An ordered collection of elements with id-based lookup.
///
/// Insertion order is document order. Queries return matches in that
/// order, captured at call time; elements added afterwards do not join
/// a previously captured collection.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    elements: Vec<Element>,
    index: HashMap<String, usize>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element in document order.
    ///
    /// A duplicate id replaces the index entry so lookups resolve to
    /// the newest element; the older one remains in document order.
    pub fn add(&mut self, element: Element) {
        if self.index.contains_key(&element.id) {
            tracing::warn!(id = %element.id, "duplicate element id in scene");
        }
        self.index.insert(element.id.clone(), self.elements.len());
        self.elements.push(element);
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Look up an element by id.
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.index.get(id).map(|&i| &self.elements[i])
    }

    /// Look up an element by id for mutation.
    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.index.get(id).map(|&i| &mut self.elements[i])
    }

    /// Remove an element by id.
    ///
    /// Returns the removed element, or `None` if the id is unknown.
    pub fn remove(&mut self, id: &str) -> Option<Element> {
        let position = self.index.remove(id)?;
        let element = self.elements.remove(position);
        for (i, e) in self.elements.iter().enumerate().skip(position) {
            self.index.insert(e.id.clone(), i);
        }
        Some(element)
    }

    /// Iterate elements in document order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    /// Capture the ids of all elements matching the selector, in
    /// document order.
    pub fn query(&self, selector: &Selector) -> Vec<String> {
        self.elements
            .iter()
            .filter(|e| selector.matches(e))
            .map(|e| e.id.clone())
            .collect()
    }
}
