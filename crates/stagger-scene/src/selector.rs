//! CSS-like element selectors.
//!
//! Supports the simple selector forms the reveal effect needs: type
//! (`li`), universal (`*`), id (`#hero`), class (`.product`), and
//! compounds thereof (`li.product`). Combinators and pseudo-classes
//! are rejected at parse time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::scene::Element;

/// A single simple selector component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SimpleSelector {
    /// Type selector, e.g. `li`, `div`.
    Type { name: String },
    /// Universal selector `*`.
    Universal,
    /// ID selector `#foo`.
    Id { name: String },
    /// Class selector `.bar`.
    Class { name: String },
}

impl SimpleSelector {
    fn matches(&self, element: &Element) -> bool {
        match self {
            Self::Type { name } => element.tag == *name,
            Self::Universal => true,
            Self::Id { name } => element.id == *name,
            Self::Class { name } => element.has_class(name),
        }
    }
}

/// Error produced when a selector string fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("selector is empty")]
    Empty,
    #[error("expected a name after `{prefix}` at position {position}")]
    MissingName { prefix: char, position: usize },
    #[error("unsupported character `{found}` at position {position}")]
    UnsupportedChar { found: char, position: usize },
}

/// A compound selector: a sequence of simple selectors that must all
/// match the same element (e.g. `li.product`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selector {
    simples: Vec<SimpleSelector>,
}

impl Selector {
    /// Check whether every component matches the element.
    pub fn matches(&self, element: &Element) -> bool {
        self.simples.iter().all(|s| s.matches(element))
    }

    /// The parsed components, in source order.
    pub fn simples(&self) -> &[SimpleSelector] {
        &self.simples
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for simple in &self.simples {
            match simple {
                SimpleSelector::Type { name } => write!(f, "{name}")?,
                SimpleSelector::Universal => write!(f, "*")?,
                SimpleSelector::Id { name } => write!(f, "#{name}")?,
                SimpleSelector::Class { name } => write!(f, ".{name}")?,
            }
        }
        Ok(())
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(SelectorError::Empty);
        }

        let mut simples = Vec::new();
        let chars: Vec<char> = trimmed.chars().collect();
        let mut pos = 0;

        while pos < chars.len() {
            match chars[pos] {
                '*' => {
                    simples.push(SimpleSelector::Universal);
                    pos += 1;
                }
                prefix @ ('#' | '.') => {
                    let start = pos + 1;
                    let mut end = start;
                    while end < chars.len() && is_ident_char(chars[end]) {
                        end += 1;
                    }
                    if end == start {
                        return Err(SelectorError::MissingName { prefix, position: pos });
                    }
                    let name: String = chars[start..end].iter().collect();
                    simples.push(match prefix {
                        '#' => SimpleSelector::Id { name },
                        _ => SimpleSelector::Class { name },
                    });
                    pos = end;
                }
                c if is_ident_char(c) => {
                    let start = pos;
                    let mut end = pos;
                    while end < chars.len() && is_ident_char(chars[end]) {
                        end += 1;
                    }
                    let name: String = chars[start..end].iter().collect();
                    simples.push(SimpleSelector::Type { name });
                    pos = end;
                }
                // Combinators (whitespace, `>`, `+`, `~`) and anything
                // else are out of scope for this selector engine.
                found => {
                    return Err(SelectorError::UnsupportedChar { found, position: pos });
                }
            }
        }

        Ok(Selector { simples })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Element;

    #[test]
    fn test_parse_class_selector() {
        let selector: Selector = ".product".parse().unwrap();
        assert_eq!(
            selector.simples(),
            &[SimpleSelector::Class {
                name: "product".to_string()
            }]
        );
    }

    #[test]
    fn test_parse_compound_selector() {
        let selector: Selector = "li.product#hero".parse().unwrap();
        assert_eq!(selector.simples().len(), 3);
        assert_eq!(selector.to_string(), "li.product#hero");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Selector>(), Err(SelectorError::Empty));
        assert_eq!("   ".parse::<Selector>(), Err(SelectorError::Empty));
        assert_eq!(
            ".".parse::<Selector>(),
            Err(SelectorError::MissingName { prefix: '.', position: 0 })
        );
        assert_eq!(
            "li > .product".parse::<Selector>(),
            Err(SelectorError::UnsupportedChar { found: ' ', position: 2 })
        );
    }

    #[test]
    fn test_matching() {
        let element = Element::new("hero", "li").with_class("product");

        let by_class: Selector = ".product".parse().unwrap();
        let by_tag: Selector = "li".parse().unwrap();
        let by_id: Selector = "#hero".parse().unwrap();
        let universal: Selector = "*".parse().unwrap();
        let compound: Selector = "li.product".parse().unwrap();
        let other: Selector = ".card".parse().unwrap();

        assert!(by_class.matches(&element));
        assert!(by_tag.matches(&element));
        assert!(by_id.matches(&element));
        assert!(universal.matches(&element));
        assert!(compound.matches(&element));
        assert!(!other.matches(&element));
    }
}
