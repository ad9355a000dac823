//! Simple selectors: `#id`, `.class`, and compounds such as `#menu.select.wide`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::element::Element;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,

    #[error("unexpected character {ch:?} at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },

    #[error("missing name after {sigil:?} at offset {offset}")]
    MissingName { sigil: char, offset: usize },

    #[error("selector names more than one id")]
    MultipleIds,
}

/// A compound selector. An element matches when it carries the id (if any)
/// and every listed class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    id: Option<String>,
    classes: Vec<String>,
}

impl Selector {
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            id: None,
            classes: vec![name.into()],
        }
    }

    pub fn id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            classes: Vec::new(),
        }
    }

    /// Narrow this selector with one more required class.
    pub fn and_class(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.classes.contains(&name) {
            self.classes.push(name);
        }
        self
    }

    pub fn matches(&self, element: &Element) -> bool {
        if let Some(id) = &self.id {
            if element.id != *id {
                return false;
            }
        }
        self.classes.iter().all(|c| element.has_class(c))
    }

    /// Number of simple parts; rules with more parts are more specific.
    pub fn specificity(&self) -> (usize, usize) {
        (usize::from(self.id.is_some()), self.classes.len())
    }
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(SelectorError::Empty);
        }

        let mut selector = Selector::default();
        let mut chars = input.char_indices().peekable();

        while let Some((offset, sigil)) = chars.next() {
            if sigil != '.' && sigil != '#' {
                return Err(SelectorError::UnexpectedChar { ch: sigil, offset });
            }

            let mut name = String::new();
            while let Some(&(_, c)) = chars.peek() {
                if !is_name_char(c) {
                    break;
                }
                name.push(c);
                chars.next();
            }

            if name.is_empty() {
                return Err(SelectorError::MissingName { sigil, offset });
            }

            if sigil == '#' {
                if selector.id.is_some() {
                    return Err(SelectorError::MultipleIds);
                }
                selector.id = Some(name);
            } else {
                selector = selector.and_class(name);
            }
        }

        Ok(selector)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_compound() {
        let sel: Selector = "#menu.select.wide".parse().unwrap();
        assert_eq!(sel, Selector::id("menu").and_class("select").and_class("wide"));
        assert_eq!(sel.to_string(), "#menu.select.wide");
        assert_eq!(sel.specificity(), (1, 2));
    }

    #[test]
    fn rejects_bare_names() {
        assert_eq!(
            "select".parse::<Selector>(),
            Err(SelectorError::UnexpectedChar { ch: 's', offset: 0 })
        );
    }

    #[test]
    fn rejects_empty_parts() {
        assert_eq!("".parse::<Selector>(), Err(SelectorError::Empty));
        assert_eq!(
            ".select.".parse::<Selector>(),
            Err(SelectorError::MissingName { sigil: '.', offset: 7 })
        );
        assert_eq!("#a#b".parse::<Selector>(), Err(SelectorError::MultipleIds));
    }

    #[test]
    fn matches_all_classes() {
        let el = Element::box_().id("x").class("options").class("show");
        assert!(Selector::class("options").matches(&el));
        assert!(Selector::class("options").and_class("show").matches(&el));
        assert!(!Selector::class("options").and_class("open").matches(&el));
        assert!(!Selector::id("y").matches(&el));
    }
}
