use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEventKind, MouseEventKind};

use crate::element::Element;
use crate::hit::hit_test;
use crate::layout::LayoutResult;

/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Mouse button pressed. `target` is the deepest element under the
    /// pointer, or None when the pointer is outside the document.
    Click {
        target: Option<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Key press
    Key(Key),
    /// Terminal resized
    Resize { width: u16, height: u16 },
}

impl Event {
    /// A left click on a known target, as if hit-testing had found it.
    pub fn click_on(target: impl Into<String>) -> Self {
        Self::Click {
            target: Some(target.into()),
            x: 0,
            y: 0,
            button: MouseButton::Left,
        }
    }

    /// Translate a raw terminal event, resolving click targets against the
    /// layout of the last rendered frame.
    pub fn from_crossterm(
        event: &CrosstermEvent,
        layout: &LayoutResult,
        root: &Element,
    ) -> Option<Self> {
        match event {
            CrosstermEvent::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(button) => Some(Self::Click {
                    target: hit_test(layout, root, mouse.column, mouse.row),
                    x: mouse.column,
                    y: mouse.row,
                    button: button.into(),
                }),
                _ => None,
            },
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                Some(Self::Key(key.code.into()))
            }
            CrosstermEvent::Resize(width, height) => Some(Self::Resize {
                width: *width,
                height: *height,
            }),
            _ => None,
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Other,
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            _ => Key::Other,
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
