//! Dropdown configuration.

use serde::Deserialize;

/// Which inside clicks toggle the widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClickBoundary {
    /// Any click inside the root toggles, options included.
    #[default]
    Anywhere,

    /// Clicks on the options panel neither toggle nor close the widget.
    /// They are still reported as option picks.
    ExcludeOptions,

    /// Clicks on the options panel always close the widget.
    SelectAndClose,
}

/// When the panel and display elements are looked up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Resolution {
    /// Look the elements up again on every click.
    #[default]
    OnEveryClick,

    /// Look them up once when binding and reuse the ids.
    AtBind,
}

/// Per-widget configuration.
///
/// Every field has a default matching the conventional `.select` /
/// `.options` / `.selected` markup, so an empty TOML table is valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DropdownConfig {
    /// Selector for the widget root, searched in the whole document.
    pub root: String,

    /// Selector for the options panel, searched inside the root.
    pub options: String,

    /// Selector for the display element, searched in the whole document.
    pub selected: String,

    /// Marker class on the panel while open.
    pub show_class: String,

    /// Marker class on the display element while open.
    pub open_class: String,

    pub boundary: ClickBoundary,

    pub resolution: Resolution,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            root: ".select".into(),
            options: ".options".into(),
            selected: ".selected".into(),
            show_class: "show".into(),
            open_class: "open".into(),
            boundary: ClickBoundary::default(),
            resolution: Resolution::default(),
        }
    }
}

impl DropdownConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML. Missing keys keep their defaults.
    pub fn from_toml(source: &str) -> crate::Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Set the root selector.
    pub fn root(mut self, selector: impl Into<String>) -> Self {
        self.root = selector.into();
        self
    }

    /// Set the options panel selector.
    pub fn options(mut self, selector: impl Into<String>) -> Self {
        self.options = selector.into();
        self
    }

    /// Set the display element selector.
    pub fn selected(mut self, selector: impl Into<String>) -> Self {
        self.selected = selector.into();
        self
    }

    pub fn show_class(mut self, class: impl Into<String>) -> Self {
        self.show_class = class.into();
        self
    }

    pub fn open_class(mut self, class: impl Into<String>) -> Self {
        self.open_class = class.into();
        self
    }

    pub fn boundary(mut self, boundary: ClickBoundary) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(DropdownConfig::from_toml("").unwrap(), DropdownConfig::default());
    }

    #[test]
    fn toml_overrides_fields() {
        let config = DropdownConfig::from_toml(
            r##"
            root = "#lang"
            boundary = "select-and-close"
            resolution = "at-bind"
            "##,
        )
        .unwrap();

        assert_eq!(
            config,
            DropdownConfig::new()
                .root("#lang")
                .boundary(ClickBoundary::SelectAndClose)
                .resolution(Resolution::AtBind)
        );
    }

    #[test]
    fn unknown_keys_rejected() {
        let err = DropdownConfig::from_toml("colour = \"red\"").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }
}
