//! The page: owner of the document and single dispatch point for clicks.
//!
//! Widgets are bound only once the document is marked ready, at most once per
//! root element. Each click runs, for every bound widget in binding order, the
//! inside handler and then the outside handler. The outside handler checks
//! containment itself, so the order never changes the result.

use clickdom::{Element, Event, LayoutResult, Rect, Stylesheet, hit_test, layout};

use crate::config::DropdownConfig;
use crate::error::{Error, Result};
use crate::widget::{Dropdown, HandlerOutcome, Transition, primary_click};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindOutcome {
    /// A new binding for the root with this id.
    Bound(String),
    /// The root already had a binding; nothing was attached.
    AlreadyBound(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    WidgetClick,
    DocumentClick,
}

#[derive(Debug)]
pub struct HandlerReport {
    /// Root id of the widget the handler belongs to.
    pub widget: String,
    pub handler: Handler,
    pub result: Result<HandlerOutcome>,
}

/// A click that landed on an option of a widget's panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionPick {
    pub widget: String,
    pub option: String,
}

#[derive(Debug, Default)]
pub struct DispatchReport {
    pub handlers: Vec<HandlerReport>,
    pub picks: Vec<OptionPick>,
}

impl DispatchReport {
    /// Total class-list mutations across all handlers.
    pub fn mutations(&self) -> usize {
        self.handlers
            .iter()
            .filter_map(|h| h.result.as_ref().ok())
            .map(|outcome| outcome.mutations)
            .sum()
    }

    pub fn failures(&self) -> impl Iterator<Item = &Error> {
        self.handlers.iter().filter_map(|h| h.result.as_ref().err())
    }

    /// The transition a widget went through, if any handler changed it.
    pub fn transition(&self, widget: &str) -> Option<Transition> {
        self.handlers
            .iter()
            .filter(|h| h.widget == widget)
            .filter_map(|h| h.result.as_ref().ok())
            .map(|outcome| outcome.transition)
            .find(|t| matches!(t, Transition::Opened | Transition::Closed))
    }
}

type ClickHandler = fn(&Dropdown, &mut Element, &Event) -> Result<HandlerOutcome>;

/// Pinned handler order: inside first, then outside.
const HANDLERS: [(Handler, ClickHandler); 2] = [
    (Handler::WidgetClick, Dropdown::on_widget_click),
    (Handler::DocumentClick, Dropdown::on_document_click),
];

pub struct Page {
    document: Element,
    stylesheet: Stylesheet,
    ready: bool,
    widgets: Vec<Dropdown>,
    layout: LayoutResult,
}

impl Page {
    pub fn new(document: Element, stylesheet: Stylesheet) -> Self {
        Self {
            document,
            stylesheet,
            ready: false,
            widgets: Vec::new(),
            layout: LayoutResult::new(),
        }
    }

    /// Build a page, mark it ready and bind one widget per config.
    pub fn load(
        document: Element,
        stylesheet: Stylesheet,
        configs: impl IntoIterator<Item = DropdownConfig>,
    ) -> Result<Self> {
        let mut page = Self::new(document, stylesheet);
        page.mark_ready();
        for config in configs {
            page.bind(config)?;
        }
        Ok(page)
    }

    pub fn document(&self) -> &Element {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Element {
        &mut self.document
    }

    pub fn stylesheet(&self) -> &Stylesheet {
        &self.stylesheet
    }

    /// Signal that the document structure is complete. Widgets can be bound
    /// from here on.
    pub fn mark_ready(&mut self) {
        if !self.ready {
            self.ready = true;
            log::info!("document fully loaded");
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Attach a dropdown to the first element matching `config.root`.
    ///
    /// Binding a root that already has a dropdown is a no-op, so running the
    /// same setup twice never doubles the handlers.
    pub fn bind(&mut self, config: DropdownConfig) -> Result<BindOutcome> {
        if !self.ready {
            return Err(Error::NotReady);
        }

        let dropdown = Dropdown::resolve(&self.document, config)?;
        let root_id = dropdown.root_id().to_string();

        if self.widgets.iter().any(|w| w.root_id() == root_id) {
            log::warn!("dropdown {root_id} is already bound, skipping");
            return Ok(BindOutcome::AlreadyBound(root_id));
        }

        log::debug!("bound dropdown {root_id} ({})", dropdown.root_selector());
        self.widgets.push(dropdown);
        Ok(BindOutcome::Bound(root_id))
    }

    pub fn widgets(&self) -> &[Dropdown] {
        &self.widgets
    }

    /// The dropdown bound to the root with this id.
    pub fn widget(&self, root_id: &str) -> Option<&Dropdown> {
        self.widgets.iter().find(|w| w.root_id() == root_id)
    }

    /// Lay the document out in `area`. Later [`Page::click_at`] calls
    /// hit-test against this layout.
    pub fn layout(&mut self, area: Rect) -> &LayoutResult {
        self.layout = layout(&self.document, &self.stylesheet, area);
        &self.layout
    }

    pub fn last_layout(&self) -> &LayoutResult {
        &self.layout
    }

    /// Click at a screen position, targeting whatever the last layout shows
    /// there.
    pub fn click_at(&mut self, x: u16, y: u16) -> DispatchReport {
        let target = hit_test(&self.layout, &self.document, x, y);
        self.dispatch(&Event::Click {
            target,
            x,
            y,
            button: clickdom::MouseButton::Left,
        })
    }

    /// Run every bound widget's handlers for `event`.
    ///
    /// A failing handler is logged and recorded; the remaining handlers still
    /// run.
    pub fn dispatch(&mut self, event: &Event) -> DispatchReport {
        let mut report = DispatchReport::default();

        // Only primary-button clicks reach the handlers
        let Some(target) = primary_click(event) else {
            return report;
        };

        for widget in &self.widgets {
            if let Some(target) = target {
                if let Ok(Some(option)) = widget.option_at(&self.document, target) {
                    report.picks.push(OptionPick {
                        widget: widget.root_id().to_string(),
                        option,
                    });
                }
            }

            for (handler, run) in HANDLERS {
                let result = run(widget, &mut self.document, event);
                if let Err(err) = &result {
                    log::error!("{handler:?} handler for {} aborted: {err}", widget.root_id());
                }
                report.handlers.push(HandlerReport {
                    widget: widget.root_id().to_string(),
                    handler,
                    result,
                });
            }
        }

        report
    }
}
