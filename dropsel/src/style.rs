use clickdom::{Display, Stylesheet, Style};

use crate::config::DropdownConfig;
use crate::error::Result;
use crate::widget::parse_selector;

/// Rules giving the markers of `config` their visual meaning: the panel is
/// hidden unless it carries the show marker, and the display element gets a
/// disclosure arrow that flips and highlights while open.
pub fn default_stylesheet(config: &DropdownConfig) -> Result<Stylesheet> {
    let options = parse_selector(&config.options)?;
    let selected = parse_selector(&config.selected)?;

    Ok(Stylesheet::new()
        .rule(options.clone(), Style::new().hidden())
        .rule(
            options.and_class(config.show_class.as_str()),
            Style::new().display(Display::Block),
        )
        .rule(selected.clone(), Style::new().prefix("▸ "))
        .rule(
            selected.and_class(config.open_class.as_str()),
            Style::new().prefix("▾ ").reverse(),
        ))
}
