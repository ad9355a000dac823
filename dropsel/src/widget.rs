//! The dropdown widget and its two click handlers.

use clickdom::{Element, Event, MouseButton, Selector, contains, find_element, find_element_mut, query_selector, query_selector_in};

use crate::config::{ClickBoundary, DropdownConfig, Resolution};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownState {
    Closed,
    Open,
}

/// What a handler did to the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Opened,
    Closed,
    /// The handler applied but the markers were already in place.
    Unchanged,
    /// The click was not this handler's business.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlerOutcome {
    pub transition: Transition,
    /// Class-list mutations performed; zero for a no-op.
    pub mutations: usize,
}

impl HandlerOutcome {
    const IGNORED: Self = Self {
        transition: Transition::Ignored,
        mutations: 0,
    };
}

/// Target of a primary-button click, like the DOM `click` event. Other
/// buttons and non-click events give None; `Some(None)` is a click that hit
/// no element.
pub(crate) fn primary_click(event: &Event) -> Option<Option<&str>> {
    match event {
        Event::Click {
            target,
            button: MouseButton::Left,
            ..
        } => Some(target.as_deref()),
        _ => None,
    }
}

pub(crate) fn parse_selector(selector: &str) -> Result<Selector> {
    selector.parse().map_err(|source| Error::InvalidSelector {
        selector: selector.to_string(),
        source,
    })
}

/// Ids of the two marker-carrying elements.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Anchors {
    panel: String,
    display: String,
}

enum Region {
    Outside,
    Header,
    Options,
}

/// A dropdown bound to one root element of a document.
///
/// The open state is never stored here: it is read from the marker classes,
/// and every change goes through [`Dropdown::set_open`], which moves both
/// markers together.
#[derive(Debug, Clone)]
pub struct Dropdown {
    config: DropdownConfig,
    root_selector: Selector,
    options_selector: Selector,
    selected_selector: Selector,
    root_id: String,
    cached: Option<Anchors>,
}

impl Dropdown {
    /// Resolve the widget's structure in `document`.
    ///
    /// Fails if a selector is malformed or any of the three elements is
    /// missing. Callers go through `Page::bind`, which enforces readiness and
    /// the one-binding-per-root rule.
    pub(crate) fn resolve(document: &Element, config: DropdownConfig) -> Result<Self> {
        let root_selector = parse_selector(&config.root)?;
        let options_selector = parse_selector(&config.options)?;
        let selected_selector = parse_selector(&config.selected)?;

        let root_id = query_selector(document, &root_selector)
            .map(|el| el.id.clone())
            .ok_or_else(|| Error::MissingElement {
                selector: config.root.clone(),
            })?;

        let mut dropdown = Self {
            config,
            root_selector,
            options_selector,
            selected_selector,
            root_id,
            cached: None,
        };

        // Structure must be complete at bind time either way
        let anchors = dropdown.lookup(document)?;
        if dropdown.config.resolution == Resolution::AtBind {
            dropdown.cached = Some(anchors);
        }

        Ok(dropdown)
    }

    pub fn root_id(&self) -> &str {
        &self.root_id
    }

    pub fn root_selector(&self) -> &Selector {
        &self.root_selector
    }

    pub fn config(&self) -> &DropdownConfig {
        &self.config
    }

    fn missing(selector: &str) -> Error {
        Error::MissingElement {
            selector: selector.to_string(),
        }
    }

    fn root<'a>(&self, document: &'a Element) -> Result<&'a Element> {
        find_element(document, &self.root_id).ok_or_else(|| Self::missing(&self.config.root))
    }

    fn lookup(&self, document: &Element) -> Result<Anchors> {
        let root = self.root(document)?;
        let panel = query_selector_in(root, &self.options_selector)
            .ok_or_else(|| Self::missing(&self.config.options))?;
        let display = query_selector(document, &self.selected_selector)
            .ok_or_else(|| Self::missing(&self.config.selected))?;

        Ok(Anchors {
            panel: panel.id.clone(),
            display: display.id.clone(),
        })
    }

    fn anchors(&self, document: &Element) -> Result<Anchors> {
        match &self.cached {
            Some(anchors) => {
                self.root(document)?;
                Ok(anchors.clone())
            }
            None => self.lookup(document),
        }
    }

    fn markers(&self, document: &Element, anchors: &Anchors) -> Result<(bool, bool)> {
        let panel = find_element(document, &anchors.panel)
            .ok_or_else(|| Self::missing(&self.config.options))?;
        let display = find_element(document, &anchors.display)
            .ok_or_else(|| Self::missing(&self.config.selected))?;

        Ok((
            panel.has_class(&self.config.show_class),
            display.has_class(&self.config.open_class),
        ))
    }

    /// Current state, read from the markers.
    pub fn state(&self, document: &Element) -> Result<DropdownState> {
        let anchors = self.anchors(document)?;
        self.state_of(document, &anchors)
    }

    fn state_of(&self, document: &Element, anchors: &Anchors) -> Result<DropdownState> {
        match self.markers(document, anchors)? {
            (true, true) => Ok(DropdownState::Open),
            (false, false) => Ok(DropdownState::Closed),
            (panel, display) => Err(Error::MarkersDiverged { panel, display }),
        }
    }

    pub fn is_open(&self, document: &Element) -> Result<bool> {
        Ok(self.state(document)? == DropdownState::Open)
    }

    pub fn open(&self, document: &mut Element) -> Result<HandlerOutcome> {
        let anchors = self.anchors(document)?;
        self.apply(document, &anchors, true)
    }

    pub fn close(&self, document: &mut Element) -> Result<HandlerOutcome> {
        let anchors = self.anchors(document)?;
        self.apply(document, &anchors, false)
    }

    fn apply(&self, document: &mut Element, anchors: &Anchors, open: bool) -> Result<HandlerOutcome> {
        let mutations = self.set_open(document, anchors, open)?;
        let transition = match (mutations, open) {
            (0, _) => Transition::Unchanged,
            (_, true) => Transition::Opened,
            (_, false) => Transition::Closed,
        };
        if mutations > 0 {
            log::debug!("dropdown {}: {transition:?}", self.root_id);
        }
        Ok(HandlerOutcome {
            transition,
            mutations,
        })
    }

    /// The only place markers change. Both elements are checked before either
    /// is touched, so a failed lookup never leaves them out of step.
    fn set_open(&self, document: &mut Element, anchors: &Anchors, open: bool) -> Result<usize> {
        self.markers(document, anchors)?;

        let mark = |document: &mut Element, id: &str, class: &str| -> bool {
            match find_element_mut(document, id) {
                Some(el) if open => el.classes.add(class),
                Some(el) => el.classes.remove(class),
                None => false,
            }
        };

        let panel = mark(document, &anchors.panel, &self.config.show_class);
        let display = mark(document, &anchors.display, &self.config.open_class);
        Ok(usize::from(panel) + usize::from(display))
    }

    fn region(&self, document: &Element, anchors: &Anchors, target: Option<&str>) -> Region {
        let Some(target) = target else {
            return Region::Outside;
        };
        if !contains(document, &self.root_id, target) {
            Region::Outside
        } else if contains(document, &anchors.panel, target) {
            Region::Options
        } else {
            Region::Header
        }
    }

    /// Handle a click that may have landed inside the widget.
    ///
    /// Inside clicks toggle both markers, subject to the configured
    /// [`ClickBoundary`] for clicks on the options panel. Anything else is
    /// ignored.
    pub fn on_widget_click(&self, document: &mut Element, event: &Event) -> Result<HandlerOutcome> {
        let Some(Some(target)) = primary_click(event) else {
            return Ok(HandlerOutcome::IGNORED);
        };
        if !contains(document, &self.root_id, target) {
            // Also covers a root that vanished: outside-click handling reports it
            return Ok(HandlerOutcome::IGNORED);
        }

        let anchors = self.anchors(document)?;
        match self.region(document, &anchors, Some(target)) {
            Region::Outside => Ok(HandlerOutcome::IGNORED),
            Region::Header => self.toggle(document, &anchors),
            Region::Options => match self.config.boundary {
                ClickBoundary::Anywhere => self.toggle(document, &anchors),
                ClickBoundary::ExcludeOptions => Ok(HandlerOutcome::IGNORED),
                ClickBoundary::SelectAndClose => self.apply(document, &anchors, false),
            },
        }
    }

    /// Handle any click in the document: a click whose target is not inside
    /// the root removes both markers. Closing a closed widget changes nothing.
    pub fn on_document_click(&self, document: &mut Element, event: &Event) -> Result<HandlerOutcome> {
        let Some(target) = primary_click(event) else {
            return Ok(HandlerOutcome::IGNORED);
        };

        self.root(document)?;
        if let Some(target) = target {
            if contains(document, &self.root_id, target) {
                return Ok(HandlerOutcome::IGNORED);
            }
        }

        let anchors = self.anchors(document)?;
        self.apply(document, &anchors, false)
    }

    fn toggle(&self, document: &mut Element, anchors: &Anchors) -> Result<HandlerOutcome> {
        let open = self.state_of(document, anchors)? == DropdownState::Closed;
        self.apply(document, anchors, open)
    }

    /// Id of the display element the open marker is set on.
    pub fn display_id(&self, document: &Element) -> Result<String> {
        Ok(self.anchors(document)?.display)
    }

    /// The panel child holding `target`, if the target is an option.
    pub fn option_at(&self, document: &Element, target: &str) -> Result<Option<String>> {
        let anchors = self.anchors(document)?;
        let panel = find_element(document, &anchors.panel)
            .ok_or_else(|| Self::missing(&self.config.options))?;

        Ok(panel
            .content
            .children()
            .iter()
            .find(|option| find_element(option, target).is_some())
            .map(|option| option.id.clone()))
    }
}
