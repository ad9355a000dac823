//! A click-toggled dropdown bound to a [`clickdom`] document.
//!
//! Clicking inside the widget's root toggles its options panel; clicking
//! anywhere else closes it. The open state lives entirely in two marker
//! classes (one on the panel, one on the display element) that are always
//! changed together.

pub mod config;
pub mod error;
pub mod page;
pub mod style;
pub mod widget;

pub use config::{ClickBoundary, DropdownConfig, Resolution};
pub use error::{Error, Result};
pub use page::{BindOutcome, DispatchReport, Handler, HandlerReport, OptionPick, Page};
pub use style::default_stylesheet;
pub use widget::{Dropdown, DropdownState, HandlerOutcome, Transition};
