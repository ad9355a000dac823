use clickdom::{Element, Event, Stylesheet, find_element};
use dropsel::{BindOutcome, DropdownConfig, DropdownState, Error, Page, Transition};

fn two_menus() -> Element {
    let menu = |id: &str| {
        Element::col()
            .id(id)
            .class("select")
            .child(Element::text("pick").id(format!("{id}-current")).class("selected"))
            .child(
                Element::col()
                    .id(format!("{id}-list"))
                    .class("options")
                    .child(Element::text("a").id(format!("{id}-a"))),
            )
    };

    Element::col()
        .id("page")
        .child(menu("lang"))
        .child(menu("os"))
        .child(Element::text("footer").id("footer"))
}

#[test]
fn test_bind_before_ready_fails() {
    let mut page = Page::new(two_menus(), Stylesheet::new());
    assert!(matches!(page.bind(DropdownConfig::default()), Err(Error::NotReady)));
    assert!(page.widgets().is_empty());

    page.mark_ready();
    assert_eq!(
        page.bind(DropdownConfig::default()).unwrap(),
        BindOutcome::Bound("lang".to_string())
    );
}

#[test]
fn test_duplicate_binding_is_noop() {
    let mut page = Page::load(two_menus(), Stylesheet::new(), [DropdownConfig::default()]).unwrap();

    // Same setup run a second time
    assert_eq!(
        page.bind(DropdownConfig::default()).unwrap(),
        BindOutcome::AlreadyBound("lang".to_string())
    );
    assert_eq!(page.widgets().len(), 1);

    // A single click still opens rather than toggling twice
    let report = page.dispatch(&Event::click_on("lang-current"));
    assert_eq!(report.transition("lang"), Some(Transition::Opened));
    assert_eq!(report.handlers.len(), 2);
}

#[test]
fn test_different_selector_same_root_is_duplicate() {
    let mut page = Page::load(two_menus(), Stylesheet::new(), [DropdownConfig::default()]).unwrap();
    assert_eq!(
        page.bind(DropdownConfig::new().root("#lang")).unwrap(),
        BindOutcome::AlreadyBound("lang".to_string())
    );
}

#[test]
fn test_independent_widgets() {
    let configs = [
        DropdownConfig::new().root("#lang").selected("#lang-current"),
        DropdownConfig::new().root("#os").selected("#os-current"),
    ];
    let mut page = Page::load(two_menus(), Stylesheet::new(), configs).unwrap();
    assert_eq!(page.widgets().len(), 2);

    page.dispatch(&Event::click_on("lang-current"));
    let lang = page.widget("lang").unwrap();
    let os = page.widget("os").unwrap();
    assert_eq!(lang.state(page.document()).unwrap(), DropdownState::Open);
    assert_eq!(os.state(page.document()).unwrap(), DropdownState::Closed);

    // A click inside one widget is outside the other
    page.dispatch(&Event::click_on("os-current"));
    let lang = page.widget("lang").unwrap();
    let os = page.widget("os").unwrap();
    assert_eq!(lang.state(page.document()).unwrap(), DropdownState::Closed);
    assert_eq!(os.state(page.document()).unwrap(), DropdownState::Open);
}

#[test]
fn test_display_element_resolved_document_wide() {
    // The display element sits outside the root, as in markup where the
    // current value is shown elsewhere on the page
    let doc = Element::col()
        .child(Element::text("Rust").id("current").class("selected"))
        .child(
            Element::col()
                .id("menu")
                .class("select")
                .child(Element::text("toggle").id("toggle"))
                .child(Element::col().id("list").class("options")),
        );
    let mut page = Page::load(doc, Stylesheet::new(), [DropdownConfig::default()]).unwrap();

    page.dispatch(&Event::click_on("toggle"));
    assert!(find_element(page.document(), "current").unwrap().has_class("open"));

    // The display element is outside the root, so clicking it closes
    let report = page.dispatch(&Event::click_on("current"));
    assert_eq!(report.transition("menu"), Some(Transition::Closed));
}

#[test]
fn test_load_reports_missing_root() {
    let doc = Element::col().child(Element::text("nothing here"));
    let err = Page::load(doc, Stylesheet::new(), [DropdownConfig::default()])
        .err()
        .unwrap();
    assert!(matches!(err, Error::MissingElement { selector } if selector == ".select"));
}

#[test]
fn test_config_from_toml_binds() {
    let config = DropdownConfig::from_toml("root = \"#os\"\nselected = \"#os-current\"").unwrap();
    let page = Page::load(two_menus(), Stylesheet::new(), [config]).unwrap();
    assert_eq!(page.widgets()[0].root_id(), "os");
}
