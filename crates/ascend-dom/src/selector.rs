//! Class-based selectors.
//!
//! Only the class subset of CSS is supported: a compound of one or more
//! class names, written `.a.b` or, for a single class, bare `a`.

use crate::error::{DomError, DomResult};
use crate::node::ElementData;

/// A compound class selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassSelector {
    classes: Vec<String>,
}

impl ClassSelector {
    /// Parse `.a.b` or a bare class name.
    pub fn parse(input: &str) -> DomResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DomError::InvalidSelector {
                selector: input.to_string(),
                reason: "selector is empty",
            });
        }

        let body = trimmed.strip_prefix('.').unwrap_or(trimmed);
        let mut classes = Vec::new();
        for part in body.split('.') {
            if part.is_empty() {
                return Err(DomError::InvalidSelector {
                    selector: input.to_string(),
                    reason: "empty class name",
                });
            }
            if !part.chars().all(is_class_char) {
                return Err(DomError::InvalidSelector {
                    selector: input.to_string(),
                    reason: "only class selectors are supported",
                });
            }
            classes.push(part.to_string());
        }
        // Order and repeats do not change what matches.
        classes.sort();
        classes.dedup();

        Ok(Self { classes })
    }

    /// Selector matching a single class.
    pub fn class(class: impl Into<String>) -> DomResult<Self> {
        let class = class.into();
        if class.is_empty() || !class.chars().all(is_class_char) {
            return Err(DomError::InvalidSelector {
                selector: class,
                reason: "not a valid class name",
            });
        }
        Ok(Self {
            classes: vec![class],
        })
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Whether the element carries every class of this selector.
    pub fn matches(&self, element: &ElementData) -> bool {
        self.classes.iter().all(|class| element.has_class(class))
    }
}

impl std::fmt::Display for ClassSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for class in &self.classes {
            write!(f, ".{}", class)?;
        }
        Ok(())
    }
}

fn is_class_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}
