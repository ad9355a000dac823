//! Stacking layout.
//!
//! Column children are stretched to the container's width and take their
//! natural height; row children take their natural width. Anything the
//! stylesheet computes as `display: none` gets no rect, and neither does its
//! subtree, which is what keeps a closed options panel from being drawn or hit.

mod rect;

use std::collections::HashMap;

pub use rect::Rect;

use crate::element::{Content, Element};
use crate::style::Stylesheet;
use crate::text::display_width;

pub type LayoutResult = HashMap<String, Rect>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Row,
    #[default]
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edges {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Edges {
    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn all(value: u16) -> Self {
        Self::new(value, value, value, value)
    }

    pub const fn symmetric(vertical: u16, horizontal: u16) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    const fn horizontal_total(&self) -> u16 {
        self.left.saturating_add(self.right)
    }

    const fn vertical_total(&self) -> u16 {
        self.top.saturating_add(self.bottom)
    }
}

pub fn layout(root: &Element, stylesheet: &Stylesheet, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    if stylesheet.is_displayed(root) {
        place(root, stylesheet, available, &mut result);
    }
    result
}

fn place(element: &Element, stylesheet: &Stylesheet, rect: Rect, result: &mut LayoutResult) {
    result.insert(element.id.clone(), rect);

    let Content::Children(children) = &element.content else {
        return;
    };

    let inner = rect.shrink(element.padding);
    let mut cursor_x = inner.x;
    let mut cursor_y = inner.y;

    for child in children.iter().filter(|c| stylesheet.is_displayed(c)) {
        let (natural_w, natural_h) = measure(child, stylesheet);
        let child_rect = match element.direction {
            Direction::Column => {
                let height = natural_h.min(inner.bottom().saturating_sub(cursor_y));
                Rect::new(inner.x, cursor_y, inner.width, height)
            }
            Direction::Row => {
                let width = natural_w.min(inner.right().saturating_sub(cursor_x));
                Rect::new(cursor_x, inner.y, width, natural_h.min(inner.height))
            }
        };

        place(child, stylesheet, child_rect, result);

        match element.direction {
            Direction::Column => {
                cursor_y = cursor_y
                    .saturating_add(child_rect.height)
                    .saturating_add(element.gap);
            }
            Direction::Row => {
                cursor_x = cursor_x
                    .saturating_add(child_rect.width)
                    .saturating_add(element.gap);
            }
        }
    }
}

/// Natural size of an element, including padding.
pub fn measure(element: &Element, stylesheet: &Stylesheet) -> (u16, u16) {
    let (content_w, content_h) = match &element.content {
        Content::None => (0, 0),
        Content::Text(text) => {
            let prefix = stylesheet.computed(element).prefix;
            let width = display_width(&prefix) + display_width(text);
            (width.min(u16::MAX as usize) as u16, 1)
        }
        Content::Children(children) => {
            let sizes: Vec<(u16, u16)> = children
                .iter()
                .filter(|c| stylesheet.is_displayed(c))
                .map(|c| measure(c, stylesheet))
                .collect();
            let gaps = element
                .gap
                .saturating_mul(sizes.len().saturating_sub(1) as u16);
            match element.direction {
                Direction::Column => (
                    sizes.iter().map(|s| s.0).max().unwrap_or(0),
                    sizes.iter().fold(gaps, |acc, s| acc.saturating_add(s.1)),
                ),
                Direction::Row => (
                    sizes.iter().fold(gaps, |acc, s| acc.saturating_add(s.0)),
                    sizes.iter().map(|s| s.1).max().unwrap_or(0),
                ),
            }
        }
    };

    (
        content_w.saturating_add(element.padding.horizontal_total()),
        content_h.saturating_add(element.padding.vertical_total()),
    )
}
