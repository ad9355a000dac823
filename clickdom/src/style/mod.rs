mod sheet;

pub use sheet::{ComputedStyle, Rule, Stylesheet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub reverse: bool,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            bold: false,
            dim: false,
            italic: false,
            underline: false,
            reverse: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Block,
    /// Not laid out, not drawn, not hit.
    None,
}

/// A set of style declarations. Unset fields leave the cascaded value alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub display: Option<Display>,
    pub foreground: Option<Rgb>,
    pub background: Option<Rgb>,
    pub bold: Option<bool>,
    pub dim: Option<bool>,
    pub reverse: Option<bool>,
    /// Text drawn before the element's own text, e.g. a disclosure arrow.
    pub prefix: Option<String>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(mut self, display: Display) -> Self {
        self.display = Some(display);
        self
    }

    pub fn hidden(self) -> Self {
        self.display(Display::None)
    }

    pub fn foreground(mut self, color: Rgb) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn background(mut self, color: Rgb) -> Self {
        self.background = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = Some(true);
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = Some(true);
        self
    }

    pub fn reverse(mut self) -> Self {
        self.reverse = Some(true);
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Overwrite every field that `other` sets.
    pub fn apply(&mut self, other: &Style) {
        if other.display.is_some() {
            self.display = other.display;
        }
        if other.foreground.is_some() {
            self.foreground = other.foreground;
        }
        if other.background.is_some() {
            self.background = other.background;
        }
        if other.bold.is_some() {
            self.bold = other.bold;
        }
        if other.dim.is_some() {
            self.dim = other.dim;
        }
        if other.reverse.is_some() {
            self.reverse = other.reverse;
        }
        if other.prefix.is_some() {
            self.prefix.clone_from(&other.prefix);
        }
    }
}
