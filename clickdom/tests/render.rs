use clickdom::render::render_to_buffer;
use clickdom::{layout, Buffer, Element, Rect, Rgb, Selector, Style, Stylesheet};

fn render(root: &Element, sheet: &Stylesheet, width: u16, height: u16) -> Buffer {
    let result = layout(root, sheet, Rect::from_size(width, height));
    let mut buf = Buffer::new(width, height);
    render_to_buffer(root, sheet, &result, &mut buf);
    buf
}

#[test]
fn test_text_rows() {
    let root = Element::col()
        .child(Element::text("Rust"))
        .child(Element::text("Go"));
    let buf = render(&root, &Stylesheet::new(), 10, 3);

    assert_eq!(buf.row_text(0), "Rust");
    assert_eq!(buf.row_text(1), "Go");
    assert_eq!(buf.row_text(2), "");
}

#[test]
fn test_prefix_and_style_from_stylesheet() {
    let sheet = Stylesheet::new()
        .rule(Selector::class("selected"), Style::new().prefix("▸ "))
        .rule(
            Selector::class("selected").and_class("open"),
            Style::new().prefix("▾ ").reverse(),
        );

    let closed = Element::text("Rust").class("selected");
    let buf = render(&closed, &sheet, 10, 1);
    assert_eq!(buf.row_text(0), "▸ Rust");
    assert!(!buf.get(0, 0).unwrap().style.reverse);

    let open = Element::text("Rust").class("selected").class("open");
    let buf = render(&open, &sheet, 10, 1);
    assert_eq!(buf.row_text(0), "▾ Rust");
    assert!(buf.get(2, 0).unwrap().style.reverse);
}

#[test]
fn test_hidden_elements_not_drawn() {
    let sheet = Stylesheet::new().rule(Selector::class("options"), Style::new().hidden());
    let root = Element::col()
        .child(Element::text("head"))
        .child(Element::col().class("options").child(Element::text("Go")))
        .child(Element::text("tail"));
    let buf = render(&root, &sheet, 10, 3);

    assert_eq!(buf.row_text(0), "head");
    assert_eq!(buf.row_text(1), "tail");
}

#[test]
fn test_long_text_truncated() {
    let root = Element::text("Haskell");
    let buf = render(&root, &Stylesheet::new(), 5, 1);
    assert_eq!(buf.row_text(0), "Hask…");
}

#[test]
fn test_background_fills_rect() {
    let sheet = Stylesheet::new().rule(
        Selector::id("bar"),
        Style::new().background(Rgb::new(10, 20, 30)),
    );
    let root = Element::col().child(Element::text("x").id("bar"));
    let buf = render(&root, &sheet, 4, 2);

    assert_eq!(buf.get(3, 0).unwrap().bg, Rgb::new(10, 20, 30));
    assert_eq!(buf.get(3, 1).unwrap().bg, Rgb::BLACK);
}
