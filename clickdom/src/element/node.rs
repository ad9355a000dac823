use std::sync::atomic::{AtomicU64, Ordering};

use super::{ClassList, Content};
use crate::layout::{Direction, Edges};
use crate::style::Style;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    pub classes: ClassList,

    // Content
    pub content: Content,

    // Layout
    pub direction: Direction,
    pub gap: u16,
    pub padding: Edges,

    /// Inline style, applied after every stylesheet rule.
    pub style: Style,
}

impl Default for Element {
    fn default() -> Self {
        Self::fresh("el", Content::None, Direction::Column)
    }
}

impl Element {
    fn fresh(prefix: &str, content: Content, direction: Direction) -> Self {
        Self {
            id: generate_id(prefix),
            classes: ClassList::new(),
            content,
            direction,
            gap: 0,
            padding: Edges::default(),
            style: Style::default(),
        }
    }

    pub fn box_() -> Self {
        Self::fresh("box", Content::None, Direction::Column)
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::fresh("text", Content::Text(content.into()), Direction::Column)
    }

    pub fn col() -> Self {
        Self::fresh("col", Content::None, Direction::Column)
    }

    pub fn row() -> Self {
        Self::fresh("row", Content::None, Direction::Row)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn class(mut self, name: &str) -> Self {
        self.classes.add(name);
        self
    }

    pub fn classes<'a>(mut self, names: impl IntoIterator<Item = &'a str>) -> Self {
        for name in names {
            self.classes.add(name);
        }
        self
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.contains(name)
    }

    // Layout
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    // Visual
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Text content of this element, if it is a text leaf.
    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content = Content::Text(text.into());
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }
}
