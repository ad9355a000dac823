use super::{Display, Rgb, Style, TextStyle};
use crate::element::Element;
use crate::selector::Selector;

#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub selector: Selector,
    pub style: Style,
}

/// Class-driven styling for a document.
///
/// Matching rules apply in order of specificity, ties broken by source order,
/// so `.options.show` beats `.options` wherever it is declared. The element's
/// inline style applies last.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stylesheet {
    rules: Vec<Rule>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, selector: Selector, style: Style) -> Self {
        self.rules.push(Rule { selector, style });
        self
    }

    pub fn push(&mut self, selector: Selector, style: Style) {
        self.rules.push(Rule { selector, style });
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Cascade every matching rule and the inline style for `element`.
    pub fn computed(&self, element: &Element) -> ComputedStyle {
        let mut matching: Vec<(usize, &Rule)> = self
            .rules
            .iter()
            .enumerate()
            .filter(|(_, rule)| rule.selector.matches(element))
            .collect();
        matching.sort_by_key(|(order, rule)| (rule.selector.specificity(), *order));

        let mut cascaded = Style::default();
        for (_, rule) in matching {
            cascaded.apply(&rule.style);
        }
        cascaded.apply(&element.style);

        ComputedStyle::from(cascaded)
    }

    pub fn is_displayed(&self, element: &Element) -> bool {
        self.computed(element).display != Display::None
    }
}

/// Fully resolved style of one element.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedStyle {
    pub display: Display,
    pub foreground: Rgb,
    pub background: Option<Rgb>,
    pub text_style: TextStyle,
    pub prefix: String,
}

impl From<Style> for ComputedStyle {
    fn from(style: Style) -> Self {
        Self {
            display: style.display.unwrap_or_default(),
            foreground: style.foreground.unwrap_or(Rgb::WHITE),
            background: style.background,
            text_style: TextStyle {
                bold: style.bold.unwrap_or(false),
                dim: style.dim.unwrap_or(false),
                reverse: style.reverse.unwrap_or(false),
                ..TextStyle::new()
            },
            prefix: style.prefix.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet() -> Stylesheet {
        Stylesheet::new()
            .rule(Selector::class("options").and_class("show"), Style::new().display(Display::Block))
            .rule(Selector::class("options"), Style::new().hidden())
    }

    #[test]
    fn specific_rule_wins_regardless_of_order() {
        let sheet = sheet();
        let hidden = Element::col().class("options");
        let shown = Element::col().class("options").class("show");

        assert!(!sheet.is_displayed(&hidden));
        assert!(sheet.is_displayed(&shown));
    }

    #[test]
    fn later_rule_wins_on_tie() {
        let sheet = Stylesheet::new()
            .rule(Selector::class("selected"), Style::new().prefix("a "))
            .rule(Selector::class("selected"), Style::new().prefix("b "));
        let el = Element::text("x").class("selected");
        assert_eq!(sheet.computed(&el).prefix, "b ");
    }

    #[test]
    fn inline_style_applies_last() {
        let sheet = sheet();
        let el = Element::col()
            .class("options")
            .style(Style::new().display(Display::Block));
        assert!(sheet.is_displayed(&el));
    }

    #[test]
    fn unmatched_element_gets_defaults() {
        let computed = sheet().computed(&Element::text("plain"));
        assert_eq!(computed.display, Display::Block);
        assert_eq!(computed.foreground, Rgb::WHITE);
        assert_eq!(computed.prefix, "");
    }
}
